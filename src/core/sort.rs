use crate::domain::model::{Product, SortDirection, SortDirective, SortField};
use std::cmp::Ordering;

/// Computes a display ordering over the list without touching it.
///
/// No directive means insertion order. Names compare case-folded,
/// quantities numerically; the sort is stable, so ties keep their
/// relative insertion order in both directions.
pub fn sorted_view<'a>(
    products: &'a [Product],
    directive: Option<SortDirective>,
) -> Vec<&'a Product> {
    let mut view: Vec<&Product> = products.iter().collect();
    if let Some(directive) = directive {
        view.sort_by(|a, b| compare(a, b, directive));
    }
    view
}

fn compare(a: &Product, b: &Product, directive: SortDirective) -> Ordering {
    let ordering = match directive.field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Quantity => a.quantity.total_cmp(&b.quantity),
    };

    match directive.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
