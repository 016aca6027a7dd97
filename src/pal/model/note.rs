use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-text note with a set of tags.
///
/// Tags behave like a set that remembers insertion order: adding a tag that
/// is already present does nothing, and so does removing one that is not.
/// Tags are trimmed and blank tags are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NoteHelper")]
pub struct Note {
    text: String,
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct NoteHelper {
    text: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<NoteHelper> for Note {
    fn from(helper: NoteHelper) -> Self {
        Note::with_tags(helper.text, helper.tags)
    }
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, T>(text: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut note = Self::new(text);
        for tag in tags {
            note.add_tag(tag.as_ref());
        }
        note
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns whether the tag set changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Returns whether the tag set changed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn edit_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tags.is_empty() {
            write!(f, "{} | Tags: No tags", self.text)
        } else {
            write!(f, "{} | Tags: {}", self.text, self.tags.join(", "))
        }
    }
}
