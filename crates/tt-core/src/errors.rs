//! Cross-cutting error types for timetrack.
//!
//! Domain-specific errors (`DatabaseError`, `QboError`) live in their own
//! crates. `tt-cli` wraps all of them in `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any timetrack crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn messages_name_the_entity() {
        let err = CoreError::NotFound {
            entity_type: "employee".into(),
            id: "emp-00000001".into(),
        };
        assert_eq!(err.to_string(), "Entity not found: employee emp-00000001");
        assert_eq!(
            CoreError::Validation("minutes must be below 60".into()).to_string(),
            "Validation error: minutes must be below 60"
        );
    }
}
