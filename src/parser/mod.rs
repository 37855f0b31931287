//! HTML access layer: parsed documents, tag queries and table metrics.

mod document;
mod flatten;
mod html_tag;
mod table_metrics;

pub use document::Document;
pub use flatten::flatten;
pub use html_tag::{HtmlTag, TABLE_TAG};
pub use table_metrics::{approx_table_metrics, single_table, ApproxTableMetrics};
