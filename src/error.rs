use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
