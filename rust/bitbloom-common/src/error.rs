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

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_out_of_memory(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfMemory { .. })
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn out_of_memory(context: impl Into<String>, requested: usize) -> Error {
        Error(
            ErrorKind::OutOfMemory {
                context: context.into(),
                requested,
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("out of memory in '{context}' ({requested} bytes requested)")]
    OutOfMemory { context: String, requested: usize },

    #[error("invalid format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}
