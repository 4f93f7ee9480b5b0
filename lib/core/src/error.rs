use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Unknown trait dimension: {0} (valid dimensions: type, subtype, hp, relyear)")]
    InvalidTrait(String),

    #[error("Malformed card id: {0} (expected <setcode>-<number>)")]
    MalformedId(String),
}
