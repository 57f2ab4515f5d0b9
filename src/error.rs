use thiserror::Error;

/// Field-level problems found while turning an intake form into a
/// `ProjectInput`. These never reach the pricing engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("project type is required")]
    MissingProjectType,
    #[error("paint tier is required")]
    MissingPaintTier,
    #[error("square footage is required")]
    MissingSquareFootage,
    #[error("square footage must be a whole number, got '{0}'")]
    InvalidSquareFootage(String),
    #[error("square footage must be at least {minimum}, got {value}")]
    SquareFootageTooSmall { value: u32, minimum: u32 },
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },
    #[error("surface '{surface}' is not available for {project_type} projects")]
    SurfaceNotAllowed {
        surface: String,
        project_type: String,
    },
    #[error("name must be between 2 and 100 characters")]
    InvalidName,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("'{0}' is not a valid phone number")]
    InvalidPhone(String),
}

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Pricing tables error: {0}")]
    Tables(#[from] toml::de::Error),
    #[error("Invalid pricing tables: {0}")]
    InvalidTables(String),
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),
}

pub type Result<T> = std::result::Result<T, EstimateError>;
