//! Product records and input normalization.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{AppError, Operation};

/// Identifier assigned by the remote store.
///
/// json-server style backends hand out either numbers or strings, so the id is
/// kept opaque and only ever echoed back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ProductId(text),
            RawId::Number(number) => ProductId(number.to_string()),
        })
    }
}

/// A product as stored remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    /// Lowercased name used as the uniqueness key.
    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }

    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), price: price.into(), category: category.into() }
    }
}

/// Creation body: a validated product without an id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl NewProduct {
    /// Normalize and validate form input.
    pub fn from_form(form: &ProductForm) -> Result<Self, AppError> {
        let name = normalize_key(&form.name);
        let category = normalize_key(&form.category);
        let price = parse_price(&form.price).ok();

        match price {
            Some(price) if !name.is_empty() && !category.is_empty() => {
                Ok(Self { name, price, category })
            }
            _ => Err(AppError::invalid_input("Please fill in all fields correctly.")),
        }
    }
}

/// Field of a rendered record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Price,
    Category,
}

impl ProductField {
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::Category => "category",
        }
    }
}

/// Partial update body. Serializes to a single-field JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductPatch {
    Price(f64),
    Category(String),
    Name(String),
}

impl ProductPatch {
    pub fn field(&self) -> ProductField {
        match self {
            ProductPatch::Price(_) => ProductField::Price,
            ProductPatch::Category(_) => ProductField::Category,
            ProductPatch::Name(_) => ProductField::Name,
        }
    }

    /// Operation a failure of this patch is reported under.
    pub fn operation(&self) -> Operation {
        match self {
            ProductPatch::Price(_) => Operation::EditPrice,
            ProductPatch::Category(_) => Operation::EditCategory,
            ProductPatch::Name(_) => Operation::EditName,
        }
    }

    pub fn display_value(&self) -> String {
        match self {
            ProductPatch::Price(price) => format_price(*price),
            ProductPatch::Category(value) | ProductPatch::Name(value) => value.clone(),
        }
    }

    pub fn apply_to(&self, product: &mut Product) {
        match self {
            ProductPatch::Price(price) => product.price = *price,
            ProductPatch::Category(category) => product.category = category.clone(),
            ProductPatch::Name(name) => product.name = name.clone(),
        }
    }
}

/// Trim and lowercase a name, category, or search term.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse a non-negative, finite price.
pub fn parse_price(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .ok_or_else(|| AppError::invalid_input("Invalid price."))
}

pub fn format_price(price: f64) -> String {
    format!("{}", price)
}
