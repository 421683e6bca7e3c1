use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use reviewgram::analysis::{Analysis, RankedEntry};
use reviewgram::error::RgResult;
use serde::Serialize;
use std::io::Write;
use strum_macros::{Display, EnumString};

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    content_id: &'a str,
    gram_size: usize,
    tokens: usize,
    phrases: usize,
    distinct: usize,
    ranked: &'a [RankedEntry],
}

/// Bar length for `count`, scaled so the largest count fills the column.
/// Any non-zero count gets at least one block.
fn bar_len(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(max)
}

pub fn print_frequency_table(title: &str, analysis: &Analysis) {
    println!("\n{}", title);

    if analysis.ranked.is_empty() {
        println!("   (no phrases found)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Phrase").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Share"),
        Cell::new("Chart"),
    ]);

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let max = analysis.ranked.first().map(|e| e.count).unwrap_or(0);
    let total = analysis.phrase_count.max(1) as f64;

    for (i, entry) in analysis.ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.phrase).add_attribute(Attribute::Bold),
            Cell::new(entry.count).fg(Color::Cyan),
            Cell::new(format!("{:.2}%", entry.count as f64 / total * 100.0)),
            Cell::new("█".repeat(bar_len(entry.count, max))).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn print_summary(analysis: &Analysis) {
    println!(
        "Tokens: {}  |  {}-grams: {}  |  Distinct: {}  |  Shown: {}",
        analysis.token_count,
        analysis.gram_size,
        analysis.phrase_count,
        analysis.distinct_phrases(),
        analysis.ranked.len()
    );
}

pub fn print_sweep_overview(results: &[Analysis]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("N").add_attribute(Attribute::Bold),
        Cell::new("Phrases"),
        Cell::new("Distinct"),
        Cell::new("Top Phrase").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
    ]);

    for i in [0, 1, 2, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for a in results {
        let (top, count) = match a.ranked.first() {
            Some(e) => (e.phrase.clone(), e.count.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(a.gram_size).add_attribute(Attribute::Bold),
            Cell::new(a.phrase_count),
            Cell::new(a.distinct_phrases()),
            Cell::new(top),
            Cell::new(count).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn write_csv<W: Write>(writer: W, ranked: &[RankedEntry]) -> RgResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in ranked {
        wtr.serialize(entry)?;
    }
    // An empty ranking still gets its header row.
    if ranked.is_empty() {
        wtr.write_record(["phrase", "count"])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, content_id: &str, analysis: &Analysis) -> RgResult<()> {
    let report = JsonReport {
        content_id,
        gram_size: analysis.gram_size,
        tokens: analysis.token_count,
        phrases: analysis.phrase_count,
        distinct: analysis.distinct_phrases(),
        ranked: &analysis.ranked,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)?;
    Ok(())
}
