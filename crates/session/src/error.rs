use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read from or write to the console: {0}")]
    Io(#[from] std::io::Error),
}
