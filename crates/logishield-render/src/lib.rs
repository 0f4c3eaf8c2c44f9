//! Rendering utilities for audit consumers (Markdown summary, CSV formal report).

#![forbid(unsafe_code)]

mod csv;
mod markdown;
mod model;

pub use csv::{render_csv, CSV_HEADER};
pub use markdown::{format_amount, render_markdown};
pub use model::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity, RenderableStatus,
};
