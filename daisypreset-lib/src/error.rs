use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a preset build.
///
/// Building is all-or-nothing: any of these surfaces as a single failed
/// `build_preset` call and no partial artifact is returned.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("failed to tokenize selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("failed to parse stylesheet `{name}`: {message}")]
    Parse { name: String, message: String },

    #[error("failed to print css: {0}")]
    Print(String),

    #[error("invalid rule pattern for `{base}`: {source}")]
    Pattern {
        base: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid color `{value}` for `{name}` in theme `{theme}`")]
    Color {
        theme: String,
        name: String,
        value: String,
    },

    #[error("failed to parse config {path}: {message}")]
    Config { path: String, message: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PresetError>;
