use std::fmt;

/// Outcome class of a resolver's RCODE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCodeClass {
    Success,
    FormatError,
    ServerFailure,
    NameError,
    Unknown(u16),
}

impl ResponseCodeClass {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Success,
            1 => Self::FormatError,
            2 => Self::ServerFailure,
            3 => Self::NameError,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Success => 0,
            Self::FormatError => 1,
            Self::ServerFailure => 2,
            Self::NameError => 3,
            Self::Unknown(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Text shown to the user for a failed lookup. `None` for success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::FormatError => Some("Format error".to_string()),
            Self::ServerFailure => Some("Server failure".to_string()),
            Self::NameError => Some("Non-Existent domain".to_string()),
            Self::Unknown(code) => Some(format!("unknown response code ({})", code)),
        }
    }
}

impl From<u16> for ResponseCodeClass {
    fn from(code: u16) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ResponseCodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("NOERROR"),
            Self::FormatError => f.write_str("FORMERR"),
            Self::ServerFailure => f.write_str("SERVFAIL"),
            Self::NameError => f.write_str("NXDOMAIN"),
            Self::Unknown(code) => write!(f, "RCODE{}", code),
        }
    }
}
