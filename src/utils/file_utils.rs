/// File handling utilities
///
/// This module loads documents from disk as lines of text. Loading happens
/// before the engine runs, so a failure here means no analysis at all.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

/// A document loaded as lines of text
#[derive(Debug, Clone)]
pub struct TextDocument {
    /// Where the document was loaded from
    path: PathBuf,
    /// Document lines without their line terminators
    lines: Vec<String>,
}

impl TextDocument {
    /// Read a text file into lines.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, with a warning.
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file
    ///
    /// # Returns
    ///
    /// The loaded document, or an error naming the file that could not be read
    pub fn load(file_path: &Path) -> Result<Self> {
        let bytes = fs::read(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "File {} is not valid UTF-8, replacing invalid sequences",
                    file_path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let document = Self::from_text(file_path, &content);
        info!(
            "Loaded {} lines from {}",
            document.lines.len(),
            file_path.display()
        );

        Ok(document)
    }

    /// Build a document from text already in memory
    pub fn from_text<P: AsRef<Path>>(path: P, content: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without its directories, for result rows
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
