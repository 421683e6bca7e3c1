use crate::error::{ReviewGramError, RgResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub pipeline: PipelineConfig,
    #[command(flatten)]
    pub analysis: AnalysisOptions,
}

/// What to fetch and how to rank it.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Identifier of the reviewed product at the source.
    #[arg(long, default_value = "B00O4WTPOC")]
    pub content_id: String,
    /// Number of review pages to pull.
    #[arg(long, default_value_t = 10)]
    pub page_count: usize,
    /// Words per phrase (N).
    #[arg(short = 'g', long, default_value_t = 3)]
    pub gram_size: usize,
    /// Number of phrases to report (K).
    #[arg(short = 't', long, default_value_t = 25)]
    pub top_k: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            content_id: "B00O4WTPOC".to_string(),
            page_count: 10,
            gram_size: 3,
            top_k: 25,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Count n-grams on the rayon pool.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
    /// Drop multi-word phrases made only of stop words.
    #[arg(long, default_value_t = false)]
    pub drop_stopword_phrases: bool,
}

impl PipelineConfig {
    pub fn validate(&self) -> RgResult<()> {
        self.gram_width().map(|_| ())
    }

    /// Gram size as a window width. Zero is rejected here, before any text is touched.
    pub fn gram_width(&self) -> RgResult<NonZeroUsize> {
        NonZeroUsize::new(self.gram_size).ok_or_else(|| {
            ReviewGramError::InvalidConfiguration(format!(
                "gram_size must be a positive integer (got {})",
                self.gram_size
            ))
        })
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RgResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Copies every value the user typed on the command line over the current
    /// (file-loaded) values. Clap defaults never override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(pipeline, content_id);
        update_if_present!(pipeline, page_count);
        update_if_present!(pipeline, gram_size);
        update_if_present!(pipeline, top_k);

        update_if_present!(analysis, parallel);
        update_if_present!(analysis, drop_stopword_phrases);
    }
}
