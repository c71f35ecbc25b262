use super::LineNumber;

/// ## Interpreter error
///
/// Displays as the message a session prints. The line number and the
/// detail message are diagnostics only.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}")]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn detail(&self) -> &'static str {
        self.message
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert!(self.message.is_empty());
        Error { message, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorCode {
    #[error("SYNTAX ERROR")]
    SyntaxError,
    #[error("DIVIDE BY ZERO")]
    DivideByZero,
    #[error("VARIABLE NOT DEFINED")]
    VariableNotDefined,
    #[error("LINE NUMBER ERROR")]
    LineNumberError,
}
