use std::path::{Path, PathBuf};

use super::EditorError;

pub const UNTITLED: &str = "Untitled";

/// Name and extensions of each file-dialog filter, in display order.
pub const FILE_FILTERS: [(&str, &[&str]); 2] = [
    ("Text files", &["txt"]),
    ("All files", &["*"]),
];

/// Plain-text buffer behind the editor window. Files are read and written
/// verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    path: Option<PathBuf>,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), path: None }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn title(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Whitespace-only documents are not worth saving.
    pub fn can_save(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        self.text = std::fs::read_to_string(path)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn save_to(&mut self, path: &Path) -> Result<(), EditorError> {
        if !self.can_save() {
            return Err(EditorError::NothingToSave);
        }
        std::fs::write(path, &self.text)?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Empties the buffer and hands back what it held.
    pub fn cut(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}
