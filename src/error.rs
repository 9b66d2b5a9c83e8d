use crate::models::bulb_state::BrightnessError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bulb not found: {0}")]
    BulbNotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Brightness(#[from] BrightnessError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::BulbNotFound(_) => 3,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::BulbNotFound(_) => "bulb_not_found",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Brightness(BrightnessError::TooBig) => "brightness_too_big",
            AppError::Brightness(BrightnessError::TooSmall) => "brightness_too_small",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        })
    }
}
