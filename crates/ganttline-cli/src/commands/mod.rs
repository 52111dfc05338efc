//! CLI command implementations.

pub mod config;
pub mod export;
pub mod layout;
pub mod tasks;

use std::path::Path;

use ganttline_core::config::ChartConfig;
use ganttline_core::source::{FileTaskSource, RestTaskSource};
use ganttline_core::task::Task;
use url::Url;

/// Resolve the task list from a local file, an explicit URL, or the
/// configured task service, in that order.
pub(crate) fn fetch_tasks(
    file: Option<&Path>,
    url: Option<&str>,
) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    if let Some(path) = file {
        return Ok(FileTaskSource::new(path).load()?);
    }

    let endpoint = match url {
        Some(u) => u.to_string(),
        None => ChartConfig::load()?
            .source
            .base_url
            .ok_or("No task source: pass --file or --url, or set source.base_url in the config")?,
    };

    let source = RestTaskSource::new(Url::parse(&endpoint)?);
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(source.get_all_tasks())?)
}
