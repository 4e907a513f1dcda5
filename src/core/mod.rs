pub mod controller;
pub mod parser;
pub mod sort;
pub mod view;

pub use crate::domain::model::{Product, ProductDraft, ProductId, SortDirective, SortField};
pub use crate::domain::ports::{ConfigProvider, StateStore};
pub use crate::utils::error::Result;
