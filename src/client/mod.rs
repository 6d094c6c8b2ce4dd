//! Client-side catalog logic.
//!
//! Everything here is UI-agnostic: the filter state controller turns user edits into
//! debounced listing queries, the application context keeps the loaded catalog and refreshes
//! it after admin writes, and the form types map submitted admin form fields to records.
//! All of it talks to the catalog through the [`api`] traits.

pub mod api;
pub mod context;
pub mod filter;
pub mod form;
