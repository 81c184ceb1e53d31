//! Search configuration

/// Number of worker threads for the root split
pub const DEFAULT_THREADS: usize = 8;

/// Search depth used by the game
pub const DEFAULT_DEPTH: u8 = 5;

/// Which passes the step controller runs for a requested depth `D`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthSchedule {
    /// One pass at depth `D`
    FullDepth,
    /// Passes at depths `1..=D`. The deepest pass decides, unless it sees a
    /// forced loss, in which case the deepest pass that does not wins.
    #[default]
    IterativeDeepening,
}

/// Engine configuration.
///
/// # Example
///
/// ```
/// use connect_four::{DepthSchedule, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_depth(3)
///     .with_threads(2)
///     .with_schedule(DepthSchedule::FullDepth);
/// assert_eq!(config.depth, 3);
/// assert_eq!(config.trim, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Requested search depth in plies
    pub depth: u8,
    /// Maximum number of root workers
    pub threads: usize,
    /// Keep only the first `n` ordered successors at every node. `None` searches full width.
    pub trim: Option<usize>,
    pub schedule: DepthSchedule,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            threads: DEFAULT_THREADS,
            trim: None,
            schedule: DepthSchedule::default(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// Thread count, clamped to at least one
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn with_trim(mut self, trim: Option<usize>) -> Self {
        self.trim = trim;
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: DepthSchedule) -> Self {
        self.schedule = schedule;
        self
    }
}
