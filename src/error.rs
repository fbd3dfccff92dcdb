use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynastryError {
    #[error("Roster/config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Roster/config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Config(String),

    #[error("Invalid chart data: {0}")]
    Validation(String),

    /// Asking for the score of a person against itself is a caller bug.
    #[error("Usage Error: trying to get the score of person #{0} against itself")]
    SamePerson(usize),

    #[error("Usage Error: index {index} is outside a score matrix of {len} persons")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Usage Error: person '{0}' is not part of this population")]
    UnknownPerson(String),
}

pub type SynResult<T> = Result<T, SynastryError>;
