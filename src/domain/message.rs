//! User-visible banner messages.

use std::fmt;

use crate::domain::AppError;

/// Catalog operation, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Search,
    Delete,
    EditPrice,
    EditCategory,
    EditName,
}

impl Operation {
    pub fn failure_label(&self) -> &'static str {
        match self {
            Operation::Load => "Error loading products",
            Operation::Create => "Error adding product",
            Operation::Search => "Search error",
            Operation::Delete => "Delete error",
            Operation::EditPrice => "Error updating price",
            Operation::EditCategory => "Error updating category",
            Operation::EditName => "Error updating name",
        }
    }
}

/// Banner style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn marker(&self) -> &'static str {
        match self {
            MessageKind::Success => "✅",
            MessageKind::Error => "❌",
        }
    }
}

/// Text shown in the message banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl From<&AppError> for Message {
    fn from(error: &AppError) -> Self {
        Message::error(error.to_string())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.text)
    }
}
