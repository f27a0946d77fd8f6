// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{SearchError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_docno(docno: &str) -> Result<()> {
        if docno.trim().is_empty() {
            return Err(SearchError::Validation(
                "Document number is empty".to_string(),
            ));
        }

        if docno.chars().any(char::is_control) {
            return Err(SearchError::Validation(format!(
                "Document number contains control characters: {:?}",
                docno
            )));
        }

        Ok(())
    }

    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            SearchError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(SearchError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(SearchError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    /// Cut `text` to at most `max_chars` characters, appending an ellipsis.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        }
    }
}
