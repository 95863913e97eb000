//! Investor brief generator
//!
//! Builds a paginated investor brief PDF for one portfolio project:
//!
//! ```text
//! Project → assemble() → Brief → layout_brief() → Document → render_document() → PDF
//! ```
//!
//! The `server` module exposes the pipeline over HTTP.

pub mod assembler;
mod canvas;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod field;
pub mod font_metrics;
mod font_registry;
pub mod layout;
pub mod project;
pub mod renderer;
pub mod server;
pub mod store;
pub mod text_layout;
pub mod types;
mod unicode_utils;

use log::info;

pub use config::{BriefOptions, ServerConfig, StoreSource};
pub use document::Document;
pub use error::{BriefError, BriefResult};
pub use project::Project;
pub use store::{JsonFileProjectStore, ProjectStore, RestProjectStore};

/// Assemble and lay out the brief for `project` without serializing it.
pub fn build_document(project: &Project, options: &BriefOptions) -> Document {
    let brief = assembler::assemble(project, &options.company);
    layout::layout_brief(&brief, options.geometry, &options.footer_template)
}

/// Generate the finished PDF for `project`.
pub fn generate_brief(project: &Project, options: &BriefOptions) -> BriefResult<Vec<u8>> {
    let document = build_document(project, options);
    let bytes = renderer::render_document(&document, options.render_options())?;
    info!(
        "Generated brief for '{}': {} page(s), {} bytes",
        project.slug,
        document.page_count(),
        bytes.len()
    );
    Ok(bytes)
}
