//! Inline controls attached to a rendered product.

/// Kind of control offered next to a rendered record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Delete,
    EditPrice,
    EditCategory,
    EditName,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] =
        [ActionKind::Delete, ActionKind::EditPrice, ActionKind::EditCategory, ActionKind::EditName];

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Delete => "Delete",
            ActionKind::EditPrice => "Edit price",
            ActionKind::EditCategory => "Edit category",
            ActionKind::EditName => "Edit name",
        }
    }
}

/// A control bound to the record it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAction {
    pub kind: ActionKind,
    pub target: String,
}

impl ProductAction {
    pub fn new(kind: ActionKind, target: impl Into<String>) -> Self {
        Self { kind, target: target.into() }
    }

    /// Every control for one record.
    pub fn all_for(target: &str) -> Vec<ProductAction> {
        ActionKind::ALL.iter().map(|kind| ProductAction::new(*kind, target)).collect()
    }
}
