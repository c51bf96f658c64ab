use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Missing input or a rejected map click. Shown as a blocking alert; nothing is sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered with an `error` field.
    #[error("{0}")]
    Application(String),

    /// Network failure or a body that could not be decoded.
    #[error("{0}")]
    Transport(String),
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// Text written into a results area for this error.
    pub fn results_text(&self) -> String {
        format!("Error: {}", self)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
