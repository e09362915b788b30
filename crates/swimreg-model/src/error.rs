use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, RosterError>;
