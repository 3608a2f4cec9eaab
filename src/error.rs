use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
    #[error("cannot select a member from an empty list")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type RoomResult<T> = Result<T, RoomError>;
