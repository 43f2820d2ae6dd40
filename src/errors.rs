//! Error type shared by every stage of the program.

use std::fmt;

#[derive(Debug)]
pub enum TriangleError {
    Window(String),
    Context(String),
    Shader(String),
    Program(String),
    Buffer(String),
    Io(std::io::Error),
    Settings(String),
    Logging(String),
    Gl(String),
}

impl TriangleError {
    /// Short category name used as the message prefix.
    pub fn error_type(&self) -> &'static str {
        match self {
            TriangleError::Window(_) => "Window Error",
            TriangleError::Context(_) => "Context Error",
            TriangleError::Shader(_) => "Shader Error",
            TriangleError::Program(_) => "Program Link Error",
            TriangleError::Buffer(_) => "Buffer Error",
            TriangleError::Io(_) => "I/O Error",
            TriangleError::Settings(_) => "Settings Error",
            TriangleError::Logging(_) => "Logging Error",
            TriangleError::Gl(_) => "OpenGL Error",
        }
    }

    /// Process exit status for this error. Every failure is fatal.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangleError::Io(err) => write!(f, "{}: {}", self.error_type(), err),
            TriangleError::Window(msg)
            | TriangleError::Context(msg)
            | TriangleError::Shader(msg)
            | TriangleError::Program(msg)
            | TriangleError::Buffer(msg)
            | TriangleError::Settings(msg)
            | TriangleError::Logging(msg)
            | TriangleError::Gl(msg) => write!(f, "{}: {}", self.error_type(), msg),
        }
    }
}

impl std::error::Error for TriangleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TriangleError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TriangleError {
    fn from(err: std::io::Error) -> Self {
        TriangleError::Io(err)
    }
}

impl From<serde_json::Error> for TriangleError {
    fn from(err: serde_json::Error) -> Self {
        TriangleError::Settings(err.to_string())
    }
}

impl From<log::SetLoggerError> for TriangleError {
    fn from(err: log::SetLoggerError) -> Self {
        TriangleError::Logging(err.to_string())
    }
}
