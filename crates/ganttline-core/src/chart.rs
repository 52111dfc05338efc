//! Pull-based chart state.
//!
//! `GanttChart` owns the current task list and the last computed layout.
//! There is no observer graph: the host swaps the task list in and calls
//! [`recompute`](GanttChart::recompute) afterwards. Every recompute is a
//! full pass over the current list, so stale partial state cannot occur.

use crate::layout::{LayoutConfig, Timeline, TimelineLayout};
use crate::task::Task;

/// A timeline chart with explicit recomputation.
pub struct GanttChart {
    tasks: Vec<Task>,
    layout: TimelineLayout,
    timeline: Timeline,
}

impl GanttChart {
    /// Create an empty chart with default layout config.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create an empty chart with explicit layout config.
    pub fn with_config(config: LayoutConfig) -> Self {
        let layout = TimelineLayout::with_config(config);
        let timeline = layout.compute(&[]);
        Self {
            tasks: Vec::new(),
            layout,
            timeline,
        }
    }

    /// Replace the task list. The layout is stale until the host calls
    /// [`recompute`](Self::recompute).
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Recompute the layout from the current task list.
    pub fn recompute(&mut self) -> &Timeline {
        self.timeline = self.layout.compute(&self.tasks);
        &self.timeline
    }

    /// The last computed layout.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl Default for GanttChart {
    fn default() -> Self {
        Self::new()
    }
}
