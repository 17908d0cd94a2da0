//! Top-level error wrapper types.

use crate::{
    CaptionError, ConfigError, NewsError, RenderError, ServerError, TemplateError, WorkflowError,
};

/// This is the foundation error enum, aggregating each component family.
///
/// # Examples
///
/// ```
/// use daumier_error::{DaumierError, ConfigError};
///
/// let config_err = ConfigError::new("Missing required field");
/// let err: DaumierError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DaumierErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// News search API error
    #[from(NewsError)]
    News(NewsError),
    /// Template catalog error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Caption generation error
    #[from(CaptionError)]
    Caption(CaptionError),
    /// Meme rendering error
    #[from(RenderError)]
    Render(RenderError),
    /// Workflow orchestration error
    #[from(WorkflowError)]
    Workflow(WorkflowError),
    /// REST server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Daumier error with kind discrimination.
///
/// # Examples
///
/// ```
/// use daumier_error::{DaumierResult, ConfigError};
///
/// fn might_fail() -> DaumierResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Daumier Error: {}", _0)]
pub struct DaumierError(Box<DaumierErrorKind>);

impl DaumierError {
    /// Create a new error from a kind.
    pub fn new(kind: DaumierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DaumierErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to DaumierErrorKind
impl<T> From<T> for DaumierError
where
    T: Into<DaumierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Daumier operations.
///
/// # Examples
///
/// ```
/// use daumier_error::{DaumierResult, ConfigError};
///
/// fn load_settings() -> DaumierResult<String> {
///     Err(ConfigError::new("Missing required field"))?
/// }
/// ```
pub type DaumierResult<T> = std::result::Result<T, DaumierError>;
