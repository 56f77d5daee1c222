use std::fmt;

/// Errors surfaced by shape constructors and queries.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// An input violates a documented precondition (non-positive or NaN
    /// length, impossible side combination, negative precision).
    InvalidArgument { reason: String },
    /// A derived value left the finite range (infinite or NaN).
    ArithmeticOverflow { reason: String },
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(reason: impl Into<String>) -> Self {
        Self::ArithmeticOverflow {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    #[inline]
    pub fn is_arithmetic_overflow(&self) -> bool {
        matches!(self, Self::ArithmeticOverflow { .. })
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::ArithmeticOverflow { reason } => write!(f, "arithmetic overflow: {reason}"),
        }
    }
}

impl std::error::Error for ShapeError {}
