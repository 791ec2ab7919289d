use std::fmt::Display;

/// The operation that produced a [`FetchError`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FetchPhase {
    /// First fetch for the current configuration.
    #[default]
    Initial,
    /// Manual or interval-driven refetch of existing data.
    Refetch,
    /// Fetch of an additional page.
    LoadMore,
}

impl Display for FetchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FetchPhase::Initial => "initial fetch",
            FetchPhase::Refetch => "refetch",
            FetchPhase::LoadMore => "load more",
        };
        f.write_str(name)
    }
}

/// A failed loader call.
///
/// Errors are not classified (network, validation, authorization...). If a view
/// needs that distinction, the loader should encode it in the message.
/// The [`phase`](FetchError::phase) is filled in by the hook once the error is
/// recorded in state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
    phase: FetchPhase,
}

impl FetchError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phase: FetchPhase::default(),
        }
    }

    /// Creates an error from any [`std::error::Error`], joining its source chain.
    ///
    /// ```
    /// use leptos_api_fetch::FetchError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "network down");
    /// assert_eq!(FetchError::from_error(&io).message(), "network down");
    /// ```
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::new(message)
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The operation that failed.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub(crate) fn in_phase(self, phase: FetchPhase) -> Self {
        Self { phase, ..self }
    }
}

impl From<&str> for FetchError {
    fn from(message: &str) -> Self {
        FetchError::new(message)
    }
}

impl From<String> for FetchError {
    fn from(message: String) -> Self {
        FetchError::new(message)
    }
}
