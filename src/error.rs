use std::process::ExitCode as StdExitCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidInput = 10,
    InvalidBase = 11,
    IoError = 12,
}

impl From<ExitCode> for StdExitCode {
    fn from(code: ExitCode) -> Self {
        StdExitCode::from(code as u8)
    }
}

/// Which half of a conversion produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Encode,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Decode => write!(f, "decode"),
            Stage::Encode => write!(f, "encode"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RadixError {
    #[error("base is out of range (2-36): {base}")]
    InvalidBase { base: u32 },

    #[error("unknown base: {name}")]
    UnknownBase { name: String },

    #[error("invalid digit '{char}'{}", .position.map(|p| format!(" at position {}", p)).unwrap_or_default())]
    InvalidDigit { char: char, position: Option<usize> },

    #[error("digit '{char}' at position {position} has value {value}, which is not valid in base {base}")]
    DigitOutOfBase {
        char: char,
        position: usize,
        value: u32,
        base: u32,
    },

    #[error("number is negative")]
    NegativeMagnitude,

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("{stage} failed: {source}")]
    Conversion {
        stage: Stage,
        #[source]
        source: Box<RadixError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RadixError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RadixError::InvalidBase { .. } | RadixError::UnknownBase { .. } => ExitCode::InvalidBase,
            RadixError::InvalidDigit { .. }
            | RadixError::DigitOutOfBase { .. }
            | RadixError::NegativeMagnitude
            | RadixError::InvalidInput { .. } => ExitCode::InvalidInput,
            RadixError::Conversion { source, .. } => source.exit_code(),
            RadixError::Io(_) => ExitCode::IoError,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_digit(ch: char, pos: usize) -> Self {
        Self::InvalidDigit {
            char: ch,
            position: Some(pos),
        }
    }

    pub fn unknown_base(name: impl Into<String>) -> Self {
        Self::UnknownBase { name: name.into() }
    }

    pub(crate) fn at_stage(self, stage: Stage) -> Self {
        Self::Conversion {
            stage,
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through conversion stage wrappers.
    pub fn root(&self) -> &RadixError {
        match self {
            RadixError::Conversion { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, RadixError>;
