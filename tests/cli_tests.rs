use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const PRODUCT: &str = "B00PHONE";

struct TestContext {
    dir: TempDir,
    source: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let source = dir.path().join("reviews");
        let product = source.join(PRODUCT);
        fs::create_dir_all(&product).unwrap();

        fs::write(product.join("page-1.txt"), "Great phone! Great camera.\n").unwrap();
        fs::write(product.join("page-2.json"), r#"["Camera is great."]"#).unwrap();

        Self { dir, source }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_reviewgram"))
            .args(args)
            .arg("--source")
            .arg(&self.source)
            .output()
            .expect("Failed to execute reviewgram")
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn test_top_csv_unigrams() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "top",
        "--content-id",
        PRODUCT,
        "--page-count",
        "2",
        "--gram-size",
        "1",
        "--top-k",
        "2",
        "--format",
        "csv",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(stdout(&out), "phrase,count\ngreat,3\ncamera,2\n");
}

#[test]
fn test_top_table_lists_ranked_rows() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "top",
        "--content-id",
        PRODUCT,
        "--page-count",
        "2",
        "-g",
        "1",
        "-t",
        "3",
    ]);
    assert!(out.status.success());

    let text = stdout(&out);
    let row = Regex::new(r"\|\s*(\d+)\s*\|\s*([a-z ]+?)\s*\|\s*(\d+)\s*\|").unwrap();
    let rows: Vec<(String, String, String)> = row
        .captures_iter(&text)
        .map(|c| (c[1].to_string(), c[2].to_string(), c[3].to_string()))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("1".into(), "great".into(), "3".into()),
            ("2".into(), "camera".into(), "2".into()),
            ("3".into(), "phone".into(), "1".into()),
        ]
    );
    assert!(text.contains("Tokens: 7"));
}

#[test]
fn test_top_json_bigrams() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "top",
        "--content-id",
        PRODUCT,
        "--page-count",
        "2",
        "-g",
        "2",
        "-t",
        "2",
        "-f",
        "json",
    ]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["gram_size"], 2);
    assert_eq!(v["distinct"], 6);
    assert_eq!(v["ranked"][0]["phrase"], "camera camera");
    assert_eq!(v["ranked"][1]["phrase"], "camera is");
}

#[test]
fn test_zero_gram_size_fails() {
    let ctx = TestContext::new();
    let out = ctx.run(&["top", "--content-id", PRODUCT, "-g", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid Configuration"));
}

#[test]
fn test_missing_product_fails() {
    let ctx = TestContext::new();
    let out = ctx.run(&["top", "--content-id", "B00NONE"]);
    assert!(!out.status.success());
}

#[test]
fn test_config_file_with_cli_override() {
    let ctx = TestContext::new();
    let cfg = ctx.dir.path().join("run.json");
    fs::write(
        &cfg,
        format!(
            r#"{{"pipeline": {{"content_id": "{}", "page_count": 2, "gram_size": 1, "top_k": 10}}}}"#,
            PRODUCT
        ),
    )
    .unwrap();

    let out = ctx.run(&[
        "top",
        "--config",
        cfg.to_str().unwrap(),
        "--top-k",
        "1",
        "--format",
        "csv",
    ]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "phrase,count\ngreat,3\n");
}

#[test]
fn test_custom_stopwords_and_no_stopwords() {
    let ctx = TestContext::new();
    let sw = ctx.dir.path().join("stop.txt");
    fs::write(&sw, "great\n").unwrap();

    let base = [
        "top",
        "--content-id",
        PRODUCT,
        "--page-count",
        "2",
        "-g",
        "1",
        "-t",
        "1",
        "-f",
        "csv",
    ];

    let mut custom = base.to_vec();
    custom.extend(["--stopwords", sw.to_str().unwrap()]);
    let out = ctx.run(&custom);
    assert_eq!(stdout(&out), "phrase,count\ncamera,2\n");

    let mut none = base.to_vec();
    none.push("--no-stopwords");
    let out = ctx.run(&none);
    assert_eq!(stdout(&out), "phrase,count\ngreat,3\n");
}

#[test]
fn test_sweep_prints_overview() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "sweep",
        "--content-id",
        PRODUCT,
        "--page-count",
        "2",
        "--max-gram",
        "3",
        "-t",
        "2",
    ]);
    assert!(out.status.success());

    let text = stdout(&out);
    for n in 1..=3 {
        assert!(text.contains(&format!("Top 2 {}-word phrases for {}", n, PRODUCT)));
    }
    assert!(text.contains("Top Phrase"));
}

#[test]
fn test_sweep_ignores_gram_size() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "sweep",
        "--content-id",
        PRODUCT,
        "--page-count",
        "1",
        "--gram-size",
        "0",
        "--max-gram",
        "2",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let text = stdout(&out);
    assert!(text.contains(&format!("Top 25 1-word phrases for {}", PRODUCT)));
    assert!(text.contains(&format!("Top 25 2-word phrases for {}", PRODUCT)));
}

#[test]
fn test_sweep_zero_max_gram_fails() {
    let ctx = TestContext::new();
    let out = ctx.run(&["sweep", "--content-id", PRODUCT, "--max-gram", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid Configuration"));
}

#[test]
fn test_stopword_file_conflicts_with_no_stopwords() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "top",
        "--content-id",
        PRODUCT,
        "--stopwords",
        "/nonexistent/stop.txt",
        "--no-stopwords",
    ]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot be used with"));
}
