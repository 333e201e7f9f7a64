//! Configuration for the task service.

/// Business-rule switches for [`super::TaskService`].
///
/// # Examples
///
/// ```
/// use task_manager::task::services::TaskServiceConfig;
///
/// let config = TaskServiceConfig::default();
/// assert!(!config.validate_updates);
///
/// let strict = TaskServiceConfig::strict();
/// assert!(strict.validate_updates);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskServiceConfig {
    /// Whether full-record updates must carry a non-empty name, as additions
    /// always must.
    pub validate_updates: bool,
}

impl TaskServiceConfig {
    /// Creates a configuration that validates updates as strictly as
    /// additions.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            validate_updates: true,
        }
    }
}
