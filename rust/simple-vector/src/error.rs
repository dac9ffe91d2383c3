use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    /// Returns `true` if this is an [`ErrorKind::OutOfRange`] error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
