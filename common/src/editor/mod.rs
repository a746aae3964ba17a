mod document;
mod error;

pub use document::{FILE_FILTERS, TextDocument, UNTITLED};
pub use error::EditorError;
