//! Word-limited text values shared by projects and tasks.
//!
//! Limits are expressed in words, where a word is any run of non-whitespace
//! characters. Character length is never checked.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of words in a project name or task title.
pub const MAX_NAME_WORDS: usize = 30;

/// Maximum number of words in a project or task description.
pub const MAX_DESCRIPTION_WORDS: usize = 150;

/// Counts whitespace-separated tokens in `value`.
#[must_use]
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

fn validated_words(
    field: &'static str,
    raw: &str,
    required: bool,
    limit: usize,
) -> Result<String, BoardDomainError> {
    let normalized = raw.trim();
    let words = word_count(normalized);
    if required && words == 0 {
        return Err(BoardDomainError::EmptyText { field });
    }
    if words > limit {
        return Err(BoardDomainError::TooManyWords {
            field,
            limit,
            actual: words,
        });
    }
    Ok(normalized.to_owned())
}

/// Validated project name: between 1 and 30 words, surrounding whitespace
/// trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyText`] when the name has no words or
    /// [`BoardDomainError::TooManyWords`] when it exceeds 30 words.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        validated_words("project name", value.as_ref(), true, MAX_NAME_WORDS).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated task title: between 1 and 30 words.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyText`] when the title has no words or
    /// [`BoardDomainError::TooManyWords`] when it exceeds 30 words.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        validated_words("task title", value.as_ref(), true, MAX_NAME_WORDS).map(Self)
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated free-form description of at most 150 words. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TooManyWords`] when the value exceeds 150
    /// words.
    pub fn new(value: impl AsRef<str>) -> Result<Self, BoardDomainError> {
        validated_words("description", value.as_ref(), false, MAX_DESCRIPTION_WORDS).map(Self)
    }

    /// Returns an empty description.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
