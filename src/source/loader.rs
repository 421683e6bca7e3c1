use crate::error::RgResult;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// On-disk page encodings, probed in declaration order.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum PageFormat {
    Txt,
    Json,
    Csv,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonReview {
    Text(String),
    Record { text: String },
}

pub fn parse_page(path: &Path, format: PageFormat) -> RgResult<Vec<String>> {
    match format {
        PageFormat::Txt => Ok(parse_txt(&fs::read_to_string(path)?)),
        PageFormat::Json => parse_json(&fs::read_to_string(path)?),
        PageFormat::Csv => parse_csv(File::open(path)?),
    }
}

/// Reviews separated by blank lines. Lines inside one review are joined with a space.
pub fn parse_txt(content: &str) -> Vec<String> {
    let mut reviews = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                reviews.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        reviews.push(current.join(" "));
    }
    reviews
}

/// A JSON array of strings or of objects carrying a `text` field.
pub fn parse_json(content: &str) -> RgResult<Vec<String>> {
    let entries: Vec<JsonReview> = serde_json::from_str(content)?;
    Ok(entries
        .into_iter()
        .map(|e| match e {
            JsonReview::Text(t) | JsonReview::Record { text: t } => t,
        })
        .filter(|t| !t.trim().is_empty())
        .collect())
}

/// CSV with a header row. Uses the `text` or `review` column, else the first one.
pub fn parse_csv<R: Read>(reader: R) -> RgResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let column = rdr
        .headers()?
        .iter()
        .position(|h| {
            let h = h.trim();
            h.eq_ignore_ascii_case("text") || h.eq_ignore_ascii_case("review")
        })
        .unwrap_or(0);

    let mut reviews = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(text) = record.get(column) {
            let text = text.trim();
            if !text.is_empty() {
                reviews.push(text.to_string());
            }
        }
    }
    Ok(reviews)
}
