use crate::reports;
use clap::Args;
use reviewgram::analysis::{tokenize_blocks, Analyzer};
use reviewgram::config::{Config, PipelineConfig};
use reviewgram::error::{ReviewGramError, RgResult};
use reviewgram::pipeline;
use reviewgram::source::ReviewSource;
use reviewgram::stopwords::StopWords;
use std::num::NonZeroUsize;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub config: Config,

    /// Largest gram size to rank.
    #[arg(short, long, default_value_t = 4)]
    pub max_gram: usize,
}

pub fn run<R: ReviewSource + ?Sized>(
    config: &Config,
    max_gram: usize,
    source: &R,
    stopwords: StopWords,
) -> RgResult<()> {
    let max_gram = NonZeroUsize::new(max_gram).ok_or_else(|| {
        ReviewGramError::InvalidConfiguration("max_gram must be a positive integer".to_string())
    })?;
    // The swept sizes replace --gram-size, so only max_gram is checked.
    let sweep_config = PipelineConfig {
        gram_size: max_gram.get(),
        ..config.pipeline.clone()
    };
    let base = Analyzer::new(&sweep_config, &config.analysis, stopwords)?;

    // One fetch and one tokenization serve every gram size.
    let reviews = pipeline::fetch(source, config)?;
    let tokens = tokenize_blocks(&reviews);
    info!("🔎 Sweeping gram sizes 1..={} over {} tokens", max_gram, tokens.len());

    let results: Vec<_> = (1..=max_gram.get())
        .filter_map(NonZeroUsize::new)
        .map(|n| base.with_gram_size(n).analyze_tokens(&tokens))
        .collect();

    for analysis in &results {
        let title = format!(
            "Top {} {}-word phrases for {}",
            config.pipeline.top_k, analysis.gram_size, config.pipeline.content_id
        );
        reports::print_frequency_table(&title, analysis);
    }
    reports::print_sweep_overview(&results);
    Ok(())
}
