//! A word list read from plain text, one word per line.

use std::fmt;
use std::path::Path;

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

use crate::{WordSource, WordSourceError};

/// A list of candidate secret words and the RNG used to pick from it.
///
/// Text is parsed line by line:
/// - surrounding whitespace is trimmed
/// - blank lines and lines starting with `#` are skipped
/// - words are upper-cased
/// - lines that are not purely ASCII letters are dropped with a warning
///
/// The default RNG is the thread-local one. Use [`with_rng`](Self::with_rng)
/// to plug in a seeded RNG for reproducible picks.
pub struct WordList<R = ThreadRng> {
    words: Vec<String>,
    rng: R,
}

impl WordList<ThreadRng> {
    /// Builds a list from already-split words, applying the same filtering
    /// as [`parse`](Self::parse).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|w| normalize_line(w.as_ref()))
                .collect(),
            rng: rand::rng(),
        }
    }

    /// Parses newline-separated text.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Reads and parses a word file.
    ///
    /// An empty file is not an error here; drawing from the resulting list
    /// is.
    ///
    /// # Errors
    /// Returns [`WordSourceError::Io`] if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            WordSourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let list = Self::parse(&text);
        tracing::info!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    /// Async version of [`load`](Self::load), for callers already running
    /// inside a Tokio runtime.
    #[cfg(feature = "tokio")]
    pub async fn load_async(
        path: impl AsRef<Path>,
    ) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await.map_err(|source| {
            WordSourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let list = Self::parse(&text);
        tracing::info!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }
}

impl<R> WordList<R> {
    /// Replaces the RNG, keeping the words.
    pub fn with_rng<R2: Rng>(self, rng: R2) -> WordList<R2> {
        WordList {
            words: self.words,
            rng,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordSource for WordList<R> {
    fn select_random_word(&mut self) -> Result<String, WordSourceError> {
        let word = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(WordSourceError::EmptyWordList)?;
        tracing::debug!(word_len = word.len(), "word selected");
        Ok(word)
    }
}

impl<R> fmt::Debug for WordList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("len", &self.words.len())
            .finish_non_exhaustive()
    }
}

fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        return None;
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        tracing::warn!(line = word, "skipping word with non-letter characters");
        return None;
    }
    Some(word.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_trims_and_uppercases() {
        let list = WordList::parse("  apple \nBanana\r\ncherry");
        assert_eq!(list.words(), &["APPLE", "BANANA", "CHERRY"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = WordList::parse("# fruit\n\napple\n   \n#pear\n");
        assert_eq!(list.words(), &["APPLE"]);
    }

    #[test]
    fn test_parse_drops_non_letter_words() {
        let list = WordList::parse("ice cream\nr2d2\nwell-known\nkiwi");
        assert_eq!(list.words(), &["KIWI"]);
    }

    #[test]
    fn test_select_from_empty_list_returns_empty_word_list() {
        let mut list = WordList::parse("");
        assert!(list.is_empty());
        assert!(matches!(
            list.select_random_word(),
            Err(WordSourceError::EmptyWordList)
        ));
    }

    #[test]
    fn test_select_returns_a_listed_word() {
        let mut list = WordList::new(["alpha", "beta", "gamma"]);
        for _ in 0..20 {
            let word = list.select_random_word().unwrap();
            assert!(list.words().contains(&word));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let words = ["ONE", "TWO", "THREE", "FOUR", "FIVE"];
        let mut a = WordList::new(words).with_rng(StdRng::seed_from_u64(7));
        let mut b = WordList::new(words).with_rng(StdRng::seed_from_u64(7));
        for _ in 0..10 {
            assert_eq!(
                a.select_random_word().unwrap(),
                b.select_random_word().unwrap()
            );
        }
    }

    #[test]
    fn test_debug_does_not_leak_words() {
        let list = WordList::new(["SECRET"]);
        let debug = format!("{list:?}");
        assert!(!debug.contains("SECRET"));
        assert!(debug.contains("len: 1"));
    }
}
