use miette::Diagnostic;
use thiserror::Error;

/// Main error type for cardpress operations
#[derive(Error, Diagnostic, Debug)]
pub enum CardError {
    #[error("IO error: {0}")]
    #[diagnostic(code(cardpress::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(cardpress::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("CSV error in {path}: {message}")]
    #[diagnostic(code(cardpress::csv))]
    Csv {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Line {line}: missing field `{field}`")]
    #[diagnostic(
        code(cardpress::missing_field),
        help("Every row needs title, cost, type, ability, atk and image_path columns")
    )]
    MissingField { line: u64, field: &'static str },

    #[error("Unreadable artwork {path}: {message}")]
    #[diagnostic(code(cardpress::artwork))]
    Artwork {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Card `{title}` (line {line}) failed to render")]
    #[diagnostic(
        code(cardpress::card),
        help("Run without --strict to skip failing cards and keep going")
    )]
    Card {
        line: u64,
        title: String,
        #[source]
        source: Box<CardError>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(cardpress::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(cardpress::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CardError>;
