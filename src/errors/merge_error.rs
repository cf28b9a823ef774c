use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeErrorKind {
    Usage,
    Io,
    Parse,
    Serialization,
    Write,
}

impl MergeErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            MergeErrorKind::Usage => "USAGE",
            MergeErrorKind::Io => "IO",
            MergeErrorKind::Parse => "PARSE",
            MergeErrorKind::Serialization => "SERIALIZATION",
            MergeErrorKind::Write => "WRITE",
        }
    }
}

/// Terminal failure of a merge run. Every variant ends the process with a non-zero exit.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct MergeError {
    pub kind: MergeErrorKind,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl MergeError {
    pub fn new(kind: MergeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: message.into(),
            path: None,
            hint: None,
        }
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(MergeErrorKind::Usage, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(MergeErrorKind::Io, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(MergeErrorKind::Parse, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(MergeErrorKind::Serialization, message)
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::new(MergeErrorKind::Write, message)
    }
}

impl From<clap::Error> for MergeError {
    fn from(err: clap::Error) -> Self {
        MergeError::usage(err.to_string())
    }
}
