use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Council registry unavailable: {0}")]
    RegistryUnavailable(String),

    #[error(
        "Unknown council: {name}{} (available: {})",
        did_you_mean(.suggestion),
        .available.join(", ")
    )]
    UnknownAdapter {
        name: String,
        /// Registered name differing only in case, if there is exactly one
        suggestion: Option<String>,
        available: Vec<String>,
    },

    #[error("Failed to load council {name}: {message}")]
    AdapterLoad { name: String, message: String },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to fetch {url}: HTTP {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("{adapter} could not parse page: {message}")]
    Parse { adapter: String, message: String },
}

/// Stable name for each class of failure, as reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RegistryUnavailable,
    UnknownAdapter,
    AdapterLoadError,
    FetchError,
    ParseError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::RegistryUnavailable => "RegistryUnavailable",
            ErrorKind::UnknownAdapter => "UnknownAdapter",
            ErrorKind::AdapterLoadError => "AdapterLoadError",
            ErrorKind::FetchError => "FetchError",
            ErrorKind::ParseError => "ParseError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::RegistryUnavailable(_) => ErrorKind::RegistryUnavailable,
            Error::UnknownAdapter { .. } => ErrorKind::UnknownAdapter,
            Error::AdapterLoad { .. } => ErrorKind::AdapterLoadError,
            Error::Fetch { .. }
            | Error::Transport { .. }
            | Error::HttpClient(_)
            | Error::FetchStatus { .. } => ErrorKind::FetchError,
            Error::Parse { .. } => ErrorKind::ParseError,
        }
    }

    pub(crate) fn parse(adapter: &str, message: impl Into<String>) -> Self {
        Error::Parse {
            adapter: adapter.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn fetch(url: &str, err: impl std::fmt::Display) -> Self {
        Error::Fetch {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        Error::Transport {
            url: url.to_string(),
            source,
        }
    }

    /// This error and every source beneath it, joined with ": "
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_deref()
        .map_or(String::new(), |s| format!(" (did you mean {s}?)"))
}

pub type Result<T> = std::result::Result<T, Error>;
