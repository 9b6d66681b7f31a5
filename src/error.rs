/// Errors raised while talking to the SMC.
///
/// Every variant here is a structural failure: the request never produced a value. Values that were read but can't be
/// interpreted are not errors; the typed readers on [`Session`](crate::smc::Session) map those to zero.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SMC service not found")]
    ServiceNotFound,

    #[error("Failed to open SMC connection: kern_return={code:#010x}")]
    OpenFailed { code: i32 },

    #[error("Failed to close SMC connection: kern_return={code:#010x}")]
    CloseFailed { code: i32 },

    #[error("SMC call for key '{key}' failed: kern_return={code:#010x}")]
    CallFailed { key: String, code: i32 },

    #[error("Invalid SMC key: {0}")]
    InvalidKey(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    pub(crate) fn open_failed(code: i32) -> Self {
        Error::OpenFailed { code }
    }

    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    pub(crate) fn close_failed(code: i32) -> Self {
        Error::CloseFailed { code }
    }

    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    pub(crate) fn call_failed<S: Into<String>>(key: S, code: i32) -> Self {
        Error::CallFailed { key: key.into(), code }
    }

    pub(crate) fn invalid_key<S: Into<String>>(msg: S) -> Self {
        Error::InvalidKey(msg.into())
    }

    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
}

/// Result type for darwin-smc operations
pub type Result<T> = std::result::Result<T, Error>;
