//! TableError for state transitions and construction

/// Error type for table construction and dispatched actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A sort was requested on a column that was never declared.
    #[error("Invalid column, {column} not found")]
    InvalidColumn { column: String },

    /// The table options cannot be turned into a working mode.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An action name outside the closed action set.
    #[error("Invalid reducer action '{0}'")]
    UnknownAction(String),

    /// A known action given an argument it cannot take.
    #[error("Invalid argument for {action}: {reason}")]
    InvalidArgument { action: &'static str, reason: String },
}

impl TableError {
    /// Creates a new invalid column error.
    pub fn invalid_column(column: impl Into<String>) -> Self {
        Self::InvalidColumn {
            column: column.into(),
        }
    }

    /// Creates a new invalid configuration error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Creates a new unknown action error.
    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::UnknownAction(name.into())
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument(action: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            action,
            reason: reason.into(),
        }
    }
}
