use crate::reports::{self, OutputFormat};
use clap::Args;
use reviewgram::config::Config;
use reviewgram::error::RgResult;
use reviewgram::pipeline;
use reviewgram::source::ReviewSource;
use reviewgram::stopwords::StopWords;
use std::io;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct TopArgs {
    #[command(flatten)]
    pub config: Config,

    /// table, csv or json
    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run<R: ReviewSource + ?Sized>(
    config: &Config,
    format: OutputFormat,
    source: &R,
    stopwords: StopWords,
) -> RgResult<()> {
    let start = Instant::now();
    let analysis = pipeline::run(source, config, stopwords)?;
    info!("Analysis finished in {:.2?}", start.elapsed());

    match format {
        OutputFormat::Table => {
            let title = format!(
                "Top {} {}-word phrases for {}",
                config.pipeline.top_k, analysis.gram_size, config.pipeline.content_id
            );
            reports::print_frequency_table(&title, &analysis);
            reports::print_summary(&analysis);
            Ok(())
        }
        OutputFormat::Csv => reports::write_csv(io::stdout().lock(), &analysis.ranked),
        OutputFormat::Json => {
            reports::write_json(io::stdout().lock(), &config.pipeline.content_id, &analysis)
        }
    }
}
