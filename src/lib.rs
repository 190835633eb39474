//! Imports exported Markdown documents into the blog's posts directory.

pub mod args;
pub mod context;
pub mod date;
pub mod error;
pub mod frontmatter;
pub mod importer;
pub mod metadata;
pub mod renderer;
pub mod timestamp;

pub use context::Context;
pub use error::ImportError;
pub use importer::{import, run, Imported};
pub use metadata::ImportRequest;
