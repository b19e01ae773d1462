pub type OnscreenResult<T> = Result<T, OnscreenError>;

/// Errors raised by layout providers and snapshot loading.
///
/// The visibility predicate itself never fails; only the collaborators that
/// supply its inputs do.
#[derive(thiserror::Error, Debug)]
pub enum OnscreenError {
    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OnscreenError {
    pub fn unknown_element(id: impl Into<String>) -> Self {
        Self::UnknownElement(id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
