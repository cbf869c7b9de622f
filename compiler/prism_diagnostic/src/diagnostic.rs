//! Decoded syntax errors and warnings.

use std::fmt;

use prism_ir::Location;

use crate::{ErrorLevel, ErrorType, WarningLevel, WarningType};

/// A syntax error reported by the parser.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SyntaxError {
    pub error_type: ErrorType,
    pub message: String,
    pub location: Location,
    pub level: ErrorLevel,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} [{}]",
            self.message, self.location, self.error_type
        )
    }
}

/// A syntax warning reported by the parser.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SyntaxWarning {
    pub warning_type: WarningType,
    pub message: String,
    pub location: Location,
    pub level: WarningLevel,
}

impl SyntaxWarning {
    #[inline]
    pub fn is_verbose(&self) -> bool {
        self.level == WarningLevel::Verbose
    }
}

impl fmt::Display for SyntaxWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} [{}]",
            self.message, self.location, self.warning_type
        )
    }
}
