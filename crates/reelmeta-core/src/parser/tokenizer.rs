//! # Tokenizer
//!
//! Splits a preprocessed release name into delimiter-separated tokens and
//! walks them with a forward cursor. Classifiers look around the cursor
//! (`peek`, `previous`, `range`) but only the pipeline and the few
//! classifiers that fold a following token into the current one advance it.

use std::ops::Range;

/// Delimiter characters besides whitespace. Hyphen is deliberately absent:
/// `WEB-DL`, `DTS-HD` and `-S02` stay whole.
const DELIMITERS: &[char] = &[
    '.', '(', ')', '[', ']', '（', '）', '【', '】', '［', '］', '/', '~', '～', '〜', ';', '&',
    '|', '#', '_', '「', '」',
];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Ordered token sequence with a cursor that starts before the first token.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    tokens: Vec<String>,
    /// Number of tokens consumed so far; the current token sits at `cursor - 1`.
    cursor: usize,
}

impl Tokenizer {
    /// Tokenize `input` and position the cursor before the first token.
    ///
    /// # Examples
    /// ```
    /// use reelmeta_core::parser::tokenizer::Tokenizer;
    ///
    /// let mut tokens = Tokenizer::new("The.Long.Season.2017.2160p.WEB-DL");
    /// assert_eq!(tokens.advance(), Some("The"));
    /// assert_eq!(tokens.peek(1), Some("Long"));
    /// assert_eq!(tokens.len(), 6);
    /// ```
    pub fn new(input: &str) -> Self {
        Self::from_tokens(Self::split(input))
    }

    /// Wrap an already split (and possibly rewritten) token list.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Split `input` on the delimiter class, dropping empty pieces.
    pub fn split(input: &str) -> Vec<String> {
        input
            .split(is_delimiter)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Move forward one token and return it; `None` once past the end.
    pub fn advance(&mut self) -> Option<&str> {
        if self.cursor <= self.tokens.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// The token under the cursor.
    pub fn current(&self) -> Option<&str> {
        self.cursor.checked_sub(1).and_then(|i| self.get(i))
    }

    /// The token `n` positions after the current one (`peek(1)` is the next
    /// token, `peek(0)` the current one).
    pub fn peek(&self, n: usize) -> Option<&str> {
        self.cursor
            .checked_add(n)
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.get(i))
    }

    /// The token right before the current one.
    pub fn previous(&self) -> Option<&str> {
        self.cursor.checked_sub(2).and_then(|i| self.get(i))
    }

    /// Token at absolute index `i`.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.tokens.get(i).map(String::as_str)
    }

    /// Tokens in `range`, clamped to the sequence bounds.
    pub fn range(&self, range: Range<usize>) -> &[String] {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        &self.tokens[start..end]
    }

    /// Absolute index of the current token, if the cursor is on one.
    pub fn index(&self) -> Option<usize> {
        self.cursor
            .checked_sub(1)
            .filter(|&i| i < self.tokens.len())
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = Tokenizer::split("Show Name S02E11 1080p HEVC AAC-XXX");
        assert_eq!(tokens, vec!["Show", "Name", "S02E11", "1080p", "HEVC", "AAC-XXX"]);
    }

    #[test]
    fn test_tokenize_mixed_delimiters() {
        let tokens = Tokenizer::split("流浪地球【4K】(2019)/The_Wandering#Earth~国语|中字;「特效」&");
        assert_eq!(
            tokens,
            vec!["流浪地球", "4K", "2019", "The", "Wandering", "Earth", "国语", "中字", "特效"]
        );
    }

    #[test]
    fn test_hyphen_is_not_a_delimiter() {
        let tokens = Tokenizer::split("Show.S01.-S02.WEB-DL.DTS-HD.MA");
        assert_eq!(tokens, vec!["Show", "S01", "-S02", "WEB-DL", "DTS-HD", "MA"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(Tokenizer::new("").is_empty());
        assert!(Tokenizer::new(" ..[]()__ ").is_empty());
    }

    #[test]
    fn test_cursor_walk() {
        let mut tokens = Tokenizer::new("a b c");
        assert_eq!(tokens.current(), None);
        assert_eq!(tokens.peek(0), None);
        assert_eq!(tokens.peek(1), Some("a"));
        assert_eq!(tokens.peek(usize::MAX), None);
        assert_eq!(tokens.advance(), Some("a"));
        assert_eq!(tokens.previous(), None);
        assert_eq!(tokens.advance(), Some("b"));
        assert_eq!(tokens.previous(), Some("a"));
        assert_eq!(tokens.peek(0), Some("b"));
        assert_eq!(tokens.peek(1), Some("c"));
        assert_eq!(tokens.peek(2), None);
        assert_eq!(tokens.index(), Some(1));
        assert_eq!(tokens.advance(), Some("c"));
        assert_eq!(tokens.advance(), None);
        assert_eq!(tokens.advance(), None);
        assert_eq!(tokens.index(), None);
        assert_eq!(tokens.position(), 4);
    }

    #[test]
    fn test_range_is_clamped() {
        let tokens = Tokenizer::new("a b c");
        assert_eq!(tokens.range(1..10), &["b".to_string(), "c".to_string()]);
        assert!(tokens.range(5..9).is_empty());
    }
}
