//! Word validity lookup
//!
//! Only advisory: a word the dictionary does not know is still playable.

pub mod online;

pub use online::OnlineDictionary;

use crate::core::accent::normalize_word;
use crate::wordlists::WORDS;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Answer of a dictionary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The word is in the dictionary
    Confirmed,
    /// The dictionary was consulted and does not know the word
    NotFound,
    /// No dictionary was available, the word is accepted as is
    AssumedValid,
}

impl Validity {
    #[inline]
    #[must_use]
    pub const fn is_known_invalid(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub trait DictionaryLookup {
    fn check(&self, word: &str) -> Validity;
}

/// Dictionary backed by a word list, compared on normalized spelling
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: Option<FxHashSet<String>>,
}

impl WordListDictionary {
    /// Dictionary over the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().copied())
    }

    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words = words
            .into_iter()
            .map(str::trim)
            .filter(|w| !w.is_empty() && !w.starts_with('#'))
            .map(normalize_word)
            .collect();
        Self { words: Some(words) }
    }

    /// Dictionary over a word-list file, one word per line
    ///
    /// A file that cannot be read gives a dictionary that answers `AssumedValid` for
    /// everything.
    #[must_use]
    pub fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_words(content.lines()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "dictionary unavailable");
                Self::unavailable()
            }
        }
    }

    /// Dictionary that never confirms or rejects anything
    #[must_use]
    pub fn unavailable() -> Self {
        Self { words: None }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.as_ref().map_or(0, FxHashSet::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DictionaryLookup for WordListDictionary {
    fn check(&self, word: &str) -> Validity {
        match &self.words {
            None => Validity::AssumedValid,
            Some(words) if words.contains(&normalize_word(word.trim())) => Validity::Confirmed,
            Some(_) => Validity::NotFound,
        }
    }
}

/// Dictionary chosen at runtime
#[derive(Debug, Clone)]
pub enum DictionaryType {
    WordList(WordListDictionary),
    Online(OnlineDictionary),
}

impl DictionaryType {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::WordList(dict) => format!("word list ({} words)", dict.len()),
            Self::Online(dict) => format!("online ({})", dict.base_url()),
        }
    }
}

impl DictionaryLookup for DictionaryType {
    fn check(&self, word: &str) -> Validity {
        match self {
            Self::WordList(dict) => dict.check(word),
            Self::Online(dict) => dict.check(word),
        }
    }
}
