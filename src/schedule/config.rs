//! Configuration for the scheduling core.

/// Storage key the task list is persisted under by default.
pub const DEFAULT_STORAGE_KEY: &str = "dayPlannerTasks";

/// Default maximum task title length, in characters, after trimming.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

/// Settings shared by the validator and the task repository.
///
/// # Examples
///
/// ```
/// use dayplanner::schedule::config::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.storage_key, "dayPlannerTasks");
/// assert_eq!(config.max_title_length, 200);
///
/// let custom = PlannerConfig::default().with_storage_key("workTasks");
/// assert_eq!(custom.storage_key, "workTasks");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Key the task list is stored under in the host key-value store.
    pub storage_key: String,
    /// Maximum title length in characters.
    pub max_title_length: usize,
}

impl PlannerConfig {
    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the maximum title length.
    #[must_use]
    pub const fn with_max_title_length(mut self, max_title_length: usize) -> Self {
        self.max_title_length = max_title_length;
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}
