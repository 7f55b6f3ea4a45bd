//! Validation for user-authored text: questions, answers and comments.

use crate::error::CoreError;

/// Maximum length of a question title, in characters.
pub const MAX_TITLE_LENGTH: usize = 300;

/// Maximum length of a question or answer body (HTML), in bytes.
pub const MAX_BODY_LENGTH: usize = 100_000;

/// Maximum length of a comment, in characters.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate the title and description submitted for a question.
pub fn validate_question(title: &str, description: &str) -> Result<(), CoreError> {
    require_text("Title", title)?;
    require_text("Description", description)?;

    if title.trim().chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    if description.len() > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_BODY_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Validate an answer body on create or edit.
pub fn validate_answer_description(description: &str) -> Result<(), CoreError> {
    require_text("Description", description)?;
    if description.len() > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_BODY_LENGTH} bytes"
        )));
    }
    Ok(())
}

/// Validate a comment body.
pub fn validate_comment_content(content: &str) -> Result<(), CoreError> {
    require_text("Content", content)?;
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_requires_title_and_description() {
        assert!(validate_question("How?", "<p>body</p>").is_ok());
        let err = validate_question("   ", "<p>body</p>").unwrap_err();
        assert!(err.to_string().contains("Title is required"));
        assert!(validate_question("How?", "").is_err());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let title = "q".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_question(&title, "body").is_err());
    }

    #[test]
    fn blank_answer_is_rejected() {
        assert!(validate_answer_description(" \n ").is_err());
        assert!(validate_answer_description("Use a transaction.").is_ok());
    }

    #[test]
    fn comment_length_is_capped() {
        assert!(validate_comment_content(&"c".repeat(MAX_COMMENT_LENGTH)).is_ok());
        assert!(validate_comment_content(&"c".repeat(MAX_COMMENT_LENGTH + 1)).is_err());
    }
}
