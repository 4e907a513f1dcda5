use crate::domain::model::ProductDraft;
use crate::utils::error::{ListError, Result};

/// Parses a raw entry of the form `<name>[,<quantity>]`.
///
/// The text before the first comma is the name (trimmed; empty is
/// rejected). The remainder, when present, is read as a number; anything
/// that is absent, empty, or not a finite number falls back to a
/// quantity of 1. Negative and fractional quantities pass through
/// unchanged.
pub fn parse_entry(raw: &str) -> Result<ProductDraft> {
    let (name_part, quantity_part) = match raw.split_once(',') {
        Some((name, quantity)) => (name, Some(quantity)),
        None => (raw, None),
    };

    let name = name_part.trim();
    if name.is_empty() {
        return Err(ListError::EmptyName);
    }

    let quantity = quantity_part
        .map(str::trim)
        .and_then(|q| q.parse::<f64>().ok())
        .filter(|q| q.is_finite())
        .unwrap_or(1.0);

    Ok(ProductDraft::new(name, quantity))
}
