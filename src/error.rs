//! Error types for the pure library.
//!
//! None of these are fatal to the app: callers log them and fall back to an
//! empty or inactive state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading one of the bundled lookup tables.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode property list {path}: {source}")]
    Plist {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    #[error("{path}: line {line}: {message}")]
    Strings {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{path}: unexpected layout: {message}")]
    Shape { path: PathBuf, message: String },
}

/// Failure while parsing or registering the global hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
    #[error("empty hotkey combination")]
    Empty,

    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),

    #[error("unsupported key `{0}`")]
    UnsupportedKey(String),

    #[error("hotkey needs at least one modifier")]
    MissingModifier,

    #[error("hotkey backend error: {0}")]
    Backend(String),

    #[error("{0} is not available")]
    Unavailable(String),
}

/// Failure while registering or unregistering the login item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("login item: {0}")]
pub struct LoginItemError(pub String);

/// Failure while writing to the system clipboard.
#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);
