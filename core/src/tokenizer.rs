use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\S+").expect("valid regex");
}

/// Split text into whitespace-separated tokens, left to right.
///
/// Tokens are taken verbatim: no case folding, no punctuation stripping.
/// Separators are Unicode `White_Space` characters; the ASCII information
/// separators U+001C..=U+001F are not whitespace and stay inside tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
