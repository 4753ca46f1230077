#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("Index: {index}, Size: {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, ListError>;
