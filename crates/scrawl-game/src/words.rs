//! The secret word pool.

use rand::Rng;

/// The stock word list. Deliberately easy, household words — the fun is
/// in the drawing, not the vocabulary.
const DEFAULT_WORDS: &[&str] = &[
    "apple", "banana", "house", "car", "tree", "dog", "cat", "book", "phone",
    "computer",
];

/// A fixed, in-memory pool of secret words.
///
/// Selection is uniform with replacement — the same word can come up in
/// consecutive rounds, and that's fine.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Creates a word list from the given entries.
    ///
    /// # Panics
    /// Panics if `words` is empty — a game with no words cannot start.
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        assert!(!words.is_empty(), "word list cannot be empty");
        Self { words }
    }

    /// Picks one word uniformly at random.
    pub fn pick(&self, rng: &mut impl Rng) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }

    /// Number of words in the pool.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false — construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}
