use thiserror::Error;

/// Why a loader could not produce a component for an exposed module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteLoadError {
    #[error("remote entry {location} is unreachable: {reason}")]
    Unreachable { location: String, reason: String },

    #[error("remote entry {location} is malformed: {reason}")]
    Malformed { location: String, reason: String },

    /// The entry was read but does not fit this host (wrong remote name,
    /// component unknown to the host).
    #[error("incompatible bundle: {0}")]
    Incompatible(String),

    #[error("module '{expose}' is not exposed")]
    MissingExport { expose: String },

    #[error("timed out after {secs}s")]
    TimedOut { secs: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FederationError {
    #[error("unknown remote '{name}'")]
    UnknownRemote { name: String },

    #[error("failed to load remote '{remote}': {source}")]
    RemoteLoad {
        remote: String,
        #[source]
        source: RemoteLoadError,
    },
}
