//! Per-call options

/// Options for a single `applyEdits` call
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOptions {
    /// Ask the service to roll back every layer if any row fails.
    ///
    /// Any failed row still fails the whole call when this is `false`.
    pub rollback_on_failure: bool,
    /// Overrides the client's default geodatabase version
    pub gdb_version: Option<String>,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            rollback_on_failure: true,
            gdb_version: None,
        }
    }
}

impl ApplyOptions {
    pub fn with_rollback(mut self, rollback_on_failure: bool) -> Self {
        self.rollback_on_failure = rollback_on_failure;
        self
    }

    pub fn with_gdb_version(mut self, version: impl Into<String>) -> Self {
        self.gdb_version = Some(version.into());
        self
    }
}
