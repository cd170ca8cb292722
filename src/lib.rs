//! # bucketchart
//!
//! Projects saved API analytics responses into chart series JSON.
//!
//! The projection itself lives in [`bucketchart_projectors`]; this crate is
//! the tooling around it: where responses come from, how the tool is
//! configured, and where the chart series go.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │    source    │───▶│     app      │───▶│    output    │
//! │ File/Reader  │    │ (Projection) │    │ stdout/file  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//!                            ▲
//!                     ┌──────┴───────┐
//!                     │   settings   │
//!                     │ file + env   │
//!                     └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Project a saved response for a line chart
//! bucketchart --file response.json --chart line
//!
//! # Read from stdin, pretty-print
//! curl -s "$ANALYTICS_URL" | bucketchart --file - --chart pie --pretty
//!
//! # Re-project whenever the file changes
//! bucketchart --file response.json --chart bar --output chart.json --watch
//! ```
//!
//! ### As a library
//!
//! ```rust,no_run
//! use bucketchart::{App, ChartWriter, FileSource};
//! use bucketchart::projectors::{ChartKind, Projection};
//!
//! let mut app = App::new(
//!     Box::new(FileSource::new("response.json")),
//!     Projection::default(),
//!     ChartKind::Line,
//! );
//!
//! if let Some(series) = app.reload()? {
//!     ChartWriter::Stdout.write(&series, true)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod output;
pub mod settings;
pub mod source;

pub use app::App;
pub use output::ChartWriter;
pub use settings::Settings;
pub use source::{FileSource, ReaderSource, ResponseSource};

pub use bucketchart_projectors as projectors;
pub use bucketchart_types as types;
