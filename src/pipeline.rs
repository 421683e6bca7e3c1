use crate::analysis::{Analysis, Analyzer};
use crate::config::Config;
use crate::error::RgResult;
use crate::source::ReviewSource;
use crate::stopwords::StopWords;
use tracing::info;

/// Validates the configuration, pulls the configured pages and analyzes them.
///
/// An invalid gram size is reported before the source is touched.
pub fn run<R: ReviewSource + ?Sized>(
    source: &R,
    config: &Config,
    stopwords: StopWords,
) -> RgResult<Analysis> {
    let analyzer = Analyzer::new(&config.pipeline, &config.analysis, stopwords)?;
    let reviews = fetch(source, config)?;
    Ok(analyzer.analyze(&reviews))
}

pub fn fetch<R: ReviewSource + ?Sized>(source: &R, config: &Config) -> RgResult<Vec<String>> {
    let p = &config.pipeline;
    info!(
        "Retrieving {} page(s) of reviews for '{}'",
        p.page_count, p.content_id
    );
    let reviews = source.fetch_reviews(&p.content_id, p.page_count)?;
    info!("Retrieved {} reviews", reviews.len());
    Ok(reviews)
}
