//! Error and status types for conversions.

/// Outcome code of a conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Request has not been processed
    #[default]
    NotDone,
    /// Conversion finished and `data` holds the text
    Ok,
    /// Source image is not usable as a pixel buffer
    BadInput,
    /// Window size invalid or too large for the image
    BadParameters,
    /// A worker failed while converting
    UnexpectedError,
}

impl Status {
    /// Numeric code: 0 not done, 1 ok, 2 bad input, 3 bad parameters, 4 unexpected error.
    pub fn code(&self) -> u8 {
        match self {
            Status::NotDone => 0,
            Status::Ok => 1,
            Status::BadInput => 2,
            Status::BadParameters => 3,
            Status::UnexpectedError => 4,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::NotDone => "not done",
            Status::Ok => "ok",
            Status::BadInput => "bad input",
            Status::BadParameters => "bad parameters",
            Status::UnexpectedError => "unexpected error",
        };
        write!(f, "{} ({})", name, self.code())
    }
}

/// Errors raised while validating or running a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BadInput { expected: usize, actual: usize },

    #[error("window size {window_size} must be odd and greater than 1")]
    InvalidWindow { window_size: usize },

    #[error("window size {window_size} does not fit a {width}x{height} image")]
    WindowTooLarge {
        window_size: usize,
        width: usize,
        height: usize,
    },

    #[error("conversion worker {worker} panicked")]
    WorkerFailed { worker: usize },

    #[error("failed to spawn conversion worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}

impl ConvertError {
    /// Status code reported for this error.
    pub fn status(&self) -> Status {
        match self {
            ConvertError::BadInput { .. } => Status::BadInput,
            ConvertError::InvalidWindow { .. } | ConvertError::WindowTooLarge { .. } => {
                Status::BadParameters
            }
            ConvertError::WorkerFailed { .. } | ConvertError::WorkerSpawn(_) => {
                Status::UnexpectedError
            }
        }
    }
}
