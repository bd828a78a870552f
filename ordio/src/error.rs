use ordiolib::OrdioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ordio(#[from] OrdioError),

    #[error("config error: {0}")]
    Config(String),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// stdin reached end of input while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
}
