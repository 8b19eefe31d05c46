//! Terminal confirmation and prompts via dialoguer.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::{AppError, ProductAction};
use crate::ports::Interaction;

const SKIP_OPTION: &str = "[skip]";

#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerInteraction;

impl DialoguerInteraction {
    /// Read one shell line. `None` when input ends or is interrupted.
    pub fn read_command(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(line) => Ok(Some(line)),
            Err(DialoguerError::IO(err))
                if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
            {
                Ok(None)
            }
            Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
        }
    }
}

impl Interaction for DialoguerInteraction {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        match Confirm::new().with_prompt(question).default(false).interact() {
            Ok(answer) => Ok(answer),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
            Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
        }
    }

    fn prompt(&mut self, question: &str) -> Result<Option<String>, AppError> {
        match Input::<String>::new().with_prompt(question).allow_empty(true).interact_text() {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
        }
    }

    fn choose(&mut self, actions: &[ProductAction]) -> Result<Option<ProductAction>, AppError> {
        let mut items: Vec<&str> = actions.iter().map(|action| action.kind.label()).collect();
        items.push(SKIP_OPTION);

        let select = Select::new().with_prompt("Action").items(&items).default(0);
        let selection = match select.interact_opt() {
            Ok(selection) => selection,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => None,
            Err(DialoguerError::IO(err)) => return Err(AppError::Io(err)),
        };

        Ok(selection.and_then(|index| actions.get(index).cloned()))
    }
}
