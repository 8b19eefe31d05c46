//! User confirmation and free-text prompts.

use crate::domain::{AppError, ProductAction};

pub trait Interaction {
    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str) -> Result<bool, AppError>;

    /// Ask for a value. `None` when the user cancels.
    fn prompt(&mut self, question: &str) -> Result<Option<String>, AppError>;

    /// Pick one of the controls shown next to a record. `None` skips.
    fn choose(&mut self, actions: &[ProductAction]) -> Result<Option<ProductAction>, AppError>;
}

/// Answers every confirmation with yes and never supplies values.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Interaction for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<bool, AppError> {
        Ok(true)
    }

    fn prompt(&mut self, _question: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn choose(&mut self, _actions: &[ProductAction]) -> Result<Option<ProductAction>, AppError> {
        Ok(None)
    }
}
