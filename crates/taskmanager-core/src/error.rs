use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
