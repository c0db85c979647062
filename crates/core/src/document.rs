//! Documents: anything that can produce the text to compare

use crate::error::{RedlineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A source of text to compare
pub trait Document {
    fn text(&self) -> &str;
}

impl Document for str {
    fn text(&self) -> &str {
        self
    }
}

impl Document for String {
    fn text(&self) -> &str {
        self
    }
}

/// A UTF-8 plain text file read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextFile {
    path: PathBuf,
    text: String,
}

impl PlainTextFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path).map_err(|source| RedlineError::Io {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|_| RedlineError::NotUtf8 { path: path.clone() })?;

        tracing::debug!(path = %path.display(), chars = text.chars().count(), "read document");
        Ok(Self { path, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Document for PlainTextFile {
    fn text(&self) -> &str {
        &self.text
    }
}

/// A command-line argument naming either a file or literal text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    File(PlainTextFile),
    Literal(String),
}

impl TextInput {
    /// An existing file is read; anything else is taken literally
    pub fn resolve(arg: &str) -> Result<Self> {
        let path = Path::new(arg);
        if path.is_file() {
            Ok(TextInput::File(PlainTextFile::open(path)?))
        } else {
            Ok(TextInput::Literal(arg.to_string()))
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, TextInput::File(_))
    }
}

impl Document for TextInput {
    fn text(&self) -> &str {
        match self {
            TextInput::File(file) => file.text(),
            TextInput::Literal(text) => text,
        }
    }
}
