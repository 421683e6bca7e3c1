use super::ngrams::join_window;
use crate::stopwords::StopWords;
use rayon::prelude::*;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Phrase -> occurrence count. Every count present is at least 1.
pub type FrequencyMap = HashMap<String, usize>;

/// Counts every phrase, then drops stop words if and only if `gram_size == 1`.
///
/// Multi-word phrases are never stop-word filtered here, even when every
/// token in them is a stop word. See [`drop_stopword_phrases`] for that.
pub fn count_phrases<I, S>(phrases: I, gram_size: usize, stopwords: &StopWords) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = FrequencyMap::new();
    for phrase in phrases {
        let phrase = phrase.as_ref();
        match counts.get_mut(phrase) {
            Some(count) => *count += 1,
            None => {
                counts.insert(phrase.to_string(), 1);
            }
        }
    }
    filter_unigram_stopwords(counts, gram_size, stopwords)
}

/// Same result as `count_phrases(ngrams(tokens, n), ..)`, but windows are split
/// across the rayon pool and the partial maps are merged by per-key sum.
pub fn count_ngrams_parallel<S>(tokens: &[S], n: NonZeroUsize, stopwords: &StopWords) -> FrequencyMap
where
    S: AsRef<str> + Sync,
{
    let counts = tokens
        .par_windows(n.get())
        .fold(FrequencyMap::new, |mut acc, window| {
            *acc.entry(join_window(window)).or_insert(0) += 1;
            acc
        })
        .reduce(FrequencyMap::new, merge_counts);
    filter_unigram_stopwords(counts, n.get(), stopwords)
}

/// Per-key integer sum. The larger map is reused as the accumulator.
pub fn merge_counts(a: FrequencyMap, b: FrequencyMap) -> FrequencyMap {
    let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (phrase, count) in from {
        *into.entry(phrase).or_insert(0) += count;
    }
    into
}

fn filter_unigram_stopwords(
    counts: FrequencyMap,
    gram_size: usize,
    stopwords: &StopWords,
) -> FrequencyMap {
    if gram_size != 1 || stopwords.is_empty() {
        return counts;
    }
    counts
        .into_iter()
        .filter(|(phrase, _)| !stopwords.contains(phrase))
        .collect()
}

/// Removes phrases whose every token is a stop word. Opt-in: the default
/// pipeline keeps them for N > 1.
pub fn drop_stopword_phrases(counts: FrequencyMap, stopwords: &StopWords) -> FrequencyMap {
    counts
        .into_iter()
        .filter(|(phrase, _)| !phrase.split(' ').all(|t| stopwords.contains(t)))
        .collect()
}
