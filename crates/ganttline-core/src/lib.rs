//! # Ganttline Core Library
//!
//! Core logic for Ganttline, a Gantt-style timeline renderer for task
//! lists served by a remote task service. The CLI binary is a thin layer
//! over this crate.
//!
//! ## Architecture
//!
//! - **Layout**: a pure, infallible computation from a task list to a
//!   date window, day columns, and pixel-positioned task bars. Fully
//!   recomputed on every pass -- there is no incremental state to go
//!   stale.
//! - **Render**: rasterizes a computed layout into an RGBA bitmap
//! - **Export**: writes a captured bitmap as a PNG file or a one-page
//!   PDF with a title block and shrink-to-fit scaling
//! - **Source**: REST and file-backed task list fetching with an
//!   injected TTL cache
//!
//! ## Key Components
//!
//! - [`TimelineLayout`]: the layout computer
//! - [`GanttChart`]: pull-based chart state with explicit `recompute()`
//! - [`Renderer`]: bitmap painter
//! - [`Exporter`]: PNG/PDF writer

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod render;
pub mod source;
pub mod task;

pub use chart::GanttChart;
pub use config::ChartConfig;
pub use error::{ConfigError, CoreError, ExportError, SourceError};
pub use export::{ExportFormat, Exporter};
pub use layout::{
    compute_timeline, compute_timeline_with_config, DayColumn, LayoutConfig, MonthGroup, TaskBar,
    Timeline, TimelineLayout, TimelineWindow,
};
pub use render::{Renderer, Snapshot, Theme, EXPORT_OVERSAMPLE};
pub use source::{FileTaskSource, MemoryCache, ReferenceCache, RestTaskSource};
pub use task::{Task, TaskStatus};
