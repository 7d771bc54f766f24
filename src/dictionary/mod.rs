use std::path::Path;

use tokio::fs;

use crate::error::{Result, WordSearchError};

/// Word list ordered from shortest to longest; words of equal length keep
/// file order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| WordSearchError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let dictionary = Self::parse(&content).ok_or_else(|| WordSearchError::EmptyDictionary {
            path: path.to_path_buf(),
        })?;

        tracing::info!("{} words in dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Build a dictionary from in-memory words, or `None` if there are none
    pub fn from_words<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word| !word.is_empty())
            .collect();
        if words.is_empty() {
            return None;
        }

        // stable, so equal lengths keep input order
        words.sort_by_key(|word| word.chars().count());
        Some(Self { words })
    }

    /// `lines()` drops "\n" and "\r\n" only; other whitespace is part of the word
    fn parse(content: &str) -> Option<Self> {
        Self::from_words(content.lines())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a loaded dictionary
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
