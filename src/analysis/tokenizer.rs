/// Splits text on every run of characters that are not ASCII letters or digits
/// and lowercases what is left. Leading/trailing delimiters never yield empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
        .collect()
}

/// Joins blocks with a single space so a word at the end of one review is
/// never glued to the first word of the next, then tokenizes the result.
pub fn tokenize_blocks<S: AsRef<str>>(blocks: &[S]) -> Vec<String> {
    let joined = blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    tokenize(&joined)
}
