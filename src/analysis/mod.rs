pub mod counter;
pub mod ngrams;
pub mod ranker;
pub mod tokenizer;

pub use self::counter::{count_ngrams_parallel, count_phrases, drop_stopword_phrases, FrequencyMap};
pub use self::ngrams::ngrams;
pub use self::ranker::{rank, RankedEntry};
pub use self::tokenizer::{tokenize, tokenize_blocks};

use crate::config::{AnalysisOptions, PipelineConfig};
use crate::error::RgResult;
use crate::stopwords::StopWords;
use std::num::NonZeroUsize;
use tracing::debug;

/// Output of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub gram_size: usize,
    pub token_count: usize,
    pub phrase_count: usize,
    pub frequencies: FrequencyMap,
    pub ranked: Vec<RankedEntry>,
}

impl Analysis {
    pub fn distinct_phrases(&self) -> usize {
        self.frequencies.len()
    }
}

/// Tokenize -> n-grams -> count -> rank, with a gram size that has already
/// been checked.
#[derive(Debug, Clone)]
pub struct Analyzer {
    gram_size: NonZeroUsize,
    top_k: usize,
    options: AnalysisOptions,
    stopwords: StopWords,
}

impl Analyzer {
    pub fn new(
        config: &PipelineConfig,
        options: &AnalysisOptions,
        stopwords: StopWords,
    ) -> RgResult<Self> {
        Ok(Self {
            gram_size: config.gram_width()?,
            top_k: config.top_k,
            options: options.clone(),
            stopwords,
        })
    }

    pub fn gram_size(&self) -> usize {
        self.gram_size.get()
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Same analyzer with a different window width. Used when sweeping sizes
    /// over one fetch.
    pub fn with_gram_size(&self, gram_size: NonZeroUsize) -> Self {
        Self {
            gram_size,
            ..self.clone()
        }
    }

    pub fn analyze<S: AsRef<str>>(&self, blocks: &[S]) -> Analysis {
        let tokens = tokenize_blocks(blocks);
        self.analyze_tokens(&tokens)
    }

    pub fn analyze_tokens(&self, tokens: &[String]) -> Analysis {
        let n = self.gram_size;
        let phrase_count = (tokens.len() + 1).saturating_sub(n.get());

        let mut frequencies = if self.options.parallel {
            count_ngrams_parallel(tokens, n, &self.stopwords)
        } else {
            count_phrases(ngrams(tokens, n), n.get(), &self.stopwords)
        };

        if self.options.drop_stopword_phrases && n.get() > 1 {
            frequencies = drop_stopword_phrases(frequencies, &self.stopwords);
        }

        let ranked = rank(&frequencies, self.top_k);
        debug!(
            "gram_size={} tokens={} phrases={} distinct={} ranked={}",
            n,
            tokens.len(),
            phrase_count,
            frequencies.len(),
            ranked.len()
        );

        Analysis {
            gram_size: n.get(),
            token_count: tokens.len(),
            phrase_count,
            frequencies,
            ranked,
        }
    }
}
