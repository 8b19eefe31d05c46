//! Catalog commands shared by one-shot invocations and the shell.

use clap::Subcommand;

use crate::app::CatalogService;
use crate::domain::{ActionKind, AppError, ProductAction, ProductForm};
use crate::ports::{AssumeYes, CatalogView, Interaction, ProductStore};

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List all products
    #[clap(visible_alias = "ls")]
    List,
    /// Add a product
    #[clap(visible_alias = "a")]
    Add {
        /// Product name (unique, case-insensitive)
        name: String,
        /// Non-negative price
        #[arg(allow_hyphen_values = true)]
        price: String,
        /// Category
        category: String,
    },
    /// Find a product by exact name
    #[clap(visible_alias = "f")]
    Find {
        /// Name to look up
        term: String,
    },
    /// Delete a product by name
    #[clap(visible_alias = "rm")]
    Delete {
        /// Product name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Edit one field of a product
    #[clap(visible_alias = "e")]
    Edit {
        #[command(subcommand)]
        field: EditField,
    },
    /// Show the category → product mapping
    #[clap(visible_alias = "cat")]
    Categories,
}

#[derive(Debug, Subcommand)]
pub enum EditField {
    /// Change the price (prompts when VALUE is omitted)
    Price {
        name: String,
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Change the category (prompts when VALUE is omitted)
    Category { name: String, value: Option<String> },
    /// Rename the product (prompts when VALUE is omitted)
    Name { name: String, value: Option<String> },
}

impl CatalogCommand {
    /// Whether the command reads or validates against the loaded mirror.
    ///
    /// The rest resolve their target with a remote lookup and can run after a
    /// failed listing.
    pub fn needs_listing(&self) -> bool {
        match self {
            CatalogCommand::List | CatalogCommand::Add { .. } | CatalogCommand::Categories => true,
            CatalogCommand::Edit { field: EditField::Name { .. } } => true,
            CatalogCommand::Find { .. }
            | CatalogCommand::Delete { .. }
            | CatalogCommand::Edit { .. } => false,
        }
    }
}

impl EditField {
    fn into_parts(self) -> (ActionKind, String, Option<String>) {
        match self {
            EditField::Price { name, value } => (ActionKind::EditPrice, name, value),
            EditField::Category { name, value } => (ActionKind::EditCategory, name, value),
            EditField::Name { name, value } => (ActionKind::EditName, name, value),
        }
    }
}

/// Run one command against an already loaded session.
///
/// With `offer_actions`, a search hit is followed by a choice of its controls.
pub fn execute<S, V, I>(
    service: &mut CatalogService<S, V>,
    command: CatalogCommand,
    interaction: &mut I,
    offer_actions: bool,
) -> Result<(), AppError>
where
    S: ProductStore,
    V: CatalogView,
    I: Interaction,
{
    match command {
        CatalogCommand::List => service.show_all(),
        CatalogCommand::Add { name, price, category } => {
            service.create(&ProductForm::new(name, price, category))?;
        }
        CatalogCommand::Find { term } => {
            let found = service.find_by_name(&term)?;
            if let Some(product) = found.filter(|_| offer_actions) {
                let actions = ProductAction::all_for(&product.name);
                if let Some(action) = interaction.choose(&actions)? {
                    service.dispatch(&action, interaction)?;
                }
            }
        }
        CatalogCommand::Delete { name, yes } => {
            if yes {
                service.delete(&name, &mut AssumeYes)?;
            } else {
                service.delete(&name, interaction)?;
            }
        }
        CatalogCommand::Edit { field } => match field.into_parts() {
            (ActionKind::EditPrice, name, Some(value)) => {
                service.edit_price(&name, &value)?;
            }
            (ActionKind::EditCategory, name, Some(value)) => {
                service.edit_category(&name, &value)?;
            }
            (ActionKind::EditName, name, Some(value)) => {
                service.edit_name(&name, &value)?;
            }
            (kind, name, _) => service.dispatch(&ProductAction::new(kind, name), interaction)?,
        },
        CatalogCommand::Categories => service.show_categories(),
    }
    Ok(())
}
