use std::num::NonZeroUsize;

/// One phrase per window start: `tokens[i..i + n]` joined by single spaces.
///
/// Yields `len - n + 1` phrases, or none when there are fewer than `n` tokens.
pub fn ngrams<S: AsRef<str>>(tokens: &[S], n: NonZeroUsize) -> Vec<String> {
    tokens.windows(n.get()).map(join_window).collect()
}

pub(crate) fn join_window<S: AsRef<str>>(window: &[S]) -> String {
    let len = window.iter().map(|t| t.as_ref().len() + 1).sum::<usize>();
    let mut phrase = String::with_capacity(len);
    for (i, token) in window.iter().enumerate() {
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(token.as_ref());
    }
    phrase
}
