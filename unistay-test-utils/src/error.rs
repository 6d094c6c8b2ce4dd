use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Failure preparing or inspecting a test fixture, such as reading a response body
    #[error("Test setup failed: {0}")]
    Setup(String),
}
