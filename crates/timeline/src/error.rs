//! Scene generation error types (thiserror-based).

use thiserror::Error;

/// Errors surfaced by the scene-generation path.
///
/// Everything the external generative service can do wrong collapses into a
/// single user-visible message; the storyboard is never touched on failure.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The script to analyze was empty or whitespace.
    #[error("Script is empty; nothing to generate scenes from")]
    EmptyScript,

    /// The collaborator answered with an empty outline.
    #[error("Scene generation produced no scenes")]
    NoScenes,

    /// The external generation service failed.
    #[error("Scene generation failed: {0}")]
    Service(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GenerateError::Service("model overloaded".to_string());
        assert_eq!(err.to_string(), "Scene generation failed: model overloaded");
    }

    #[test]
    fn empty_script_display() {
        assert_eq!(
            GenerateError::EmptyScript.to_string(),
            "Script is empty; nothing to generate scenes from"
        );
    }
}
