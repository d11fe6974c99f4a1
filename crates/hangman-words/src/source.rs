//! The `WordSource` trait and a deterministic queue implementation.

use std::collections::VecDeque;

use crate::WordSourceError;

/// Supplies one secret word per round.
///
/// Implementations decide where words come from (a shuffled file, a fixed
/// script, another player). Words are returned as raw strings; validating
/// them is the round engine's job.
///
/// # Example
///
/// ```rust
/// use hangman_words::{WordQueue, WordSource};
///
/// let mut source = WordQueue::new(["CAT", "DOG"]);
/// assert_eq!(source.select_random_word().unwrap(), "CAT");
/// ```
pub trait WordSource {
    /// Returns the word for the next round.
    ///
    /// # Errors
    /// Returns [`WordSourceError::EmptyWordList`] when no word is available.
    fn select_random_word(&mut self) -> Result<String, WordSourceError>;
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn select_random_word(&mut self) -> Result<String, WordSourceError> {
        (**self).select_random_word()
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn select_random_word(&mut self) -> Result<String, WordSourceError> {
        (**self).select_random_word()
    }
}

/// Hands out words in a fixed order, then reports empty.
///
/// Handy for tests and replays where the "random" word must be known in
/// advance.
#[derive(Debug, Clone, Default)]
pub struct WordQueue {
    words: VecDeque<String>,
}

impl WordQueue {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a word to the back of the queue.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push_back(word.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordQueue {
    fn select_random_word(&mut self) -> Result<String, WordSourceError> {
        self.words.pop_front().ok_or(WordSourceError::EmptyWordList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_returns_words_in_order() {
        let mut q = WordQueue::new(["ONE", "TWO"]);
        assert_eq!(q.select_random_word().unwrap(), "ONE");
        assert_eq!(q.select_random_word().unwrap(), "TWO");
    }

    #[test]
    fn test_queue_exhausted_returns_empty_word_list() {
        let mut q = WordQueue::new(["ONLY"]);
        q.select_random_word().unwrap();
        assert!(matches!(
            q.select_random_word(),
            Err(WordSourceError::EmptyWordList)
        ));
    }

    #[test]
    fn test_queue_push_appends() {
        let mut q = WordQueue::default();
        assert!(q.is_empty());
        q.push("LATE");
        assert_eq!(q.len(), 1);
        assert_eq!(q.select_random_word().unwrap(), "LATE");
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut source: Box<dyn WordSource> = Box::new(WordQueue::new(["BOX"]));
        assert_eq!(source.select_random_word().unwrap(), "BOX");
    }
}
