use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A named, quantified item on the list. Immutable once created: the id
/// is assigned exactly once by the controller and never reassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: f64,
}

/// A candidate product as produced by the input parser, before the
/// controller assigns it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: f64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Quantity,
}

impl SortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "quantity" => Some(Self::Quantity),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A requested display ordering. Owned by the presentation layer and
/// never persisted; absence means insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }
}
