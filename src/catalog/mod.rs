//! Catalog entity construction
//!
//! Turns a resource record plus its resolved dependency edges into the
//! declarative document registered with the IDP catalog.

pub mod document;
pub mod identifier;

pub use document::{
    catalog_file_path, commit_message, CatalogDocument, DependsOnRef, DocumentBuilder,
};
