use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't build a selector from: {0}")]
    InvalidSelector(String),
    #[error("The page is missing an expected element. Selector: {0}")]
    StructureNotFound(String),
    #[error("Couldn't parse field `{field}` of row {row}: {reason}")]
    FieldParse {
        row: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Page {page} answered with HTTP status {status}")]
    HttpStatus {
        page: usize,
        status: reqwest::StatusCode,
    },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Regex Error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
