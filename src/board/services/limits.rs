//! Configured caps on the number of projects and tasks.

/// Default maximum number of projects.
pub const DEFAULT_MAX_PROJECTS: usize = 10;

/// Default maximum number of tasks across all projects.
pub const DEFAULT_MAX_TASKS: usize = 100;

/// System-wide creation caps passed into the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLimits {
    max_projects: usize,
    max_tasks: usize,
}

impl BoardLimits {
    /// Creates limits with explicit caps.
    #[must_use]
    pub const fn new(max_projects: usize, max_tasks: usize) -> Self {
        Self {
            max_projects,
            max_tasks,
        }
    }

    /// Returns the project cap.
    #[must_use]
    pub const fn max_projects(&self) -> usize {
        self.max_projects
    }

    /// Returns the task cap.
    #[must_use]
    pub const fn max_tasks(&self) -> usize {
        self.max_tasks
    }
}

impl Default for BoardLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PROJECTS, DEFAULT_MAX_TASKS)
    }
}
