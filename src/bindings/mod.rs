//! Key → clip bindings
//!
//! This module owns the durable binding table:
//! - `Binding` / `BindingStore` - the in-memory table with upsert-by-key
//! - `validate` - field-level schema checks for the on-disk document
//! - `StoreFile` - load / persist / commit against `bindings.json`
//!
//! # Lifecycle
//!
//! ```text
//! StoreFile::load() → BindingStore → upsert() → StoreFile::commit() → BindingStore
//! ```
//!
//! `upsert` is a pure function over the value; nothing reaches disk until
//! `commit` writes it and reads it back.

mod binding;
mod file;
mod store;
mod validate;

pub use binding::Binding;
pub use file::{StoreError, StoreFile};
pub use store::BindingStore;
pub use validate::{validate, Violation, ViolationKind};
