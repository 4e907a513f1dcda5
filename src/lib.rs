pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::AppConfig;

pub use crate::adapters::storage::{JsonFileStore, MemoryStore};
pub use crate::core::controller::ListController;
pub use crate::core::parser::parse_entry;
pub use crate::core::sort::sorted_view;
pub use crate::core::view::TableState;
pub use crate::domain::model::{
    Product, ProductDraft, ProductId, SortDirection, SortDirective, SortField,
};
pub use crate::utils::error::{ListError, Result};
