use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PreferencesServiceError {
    #[error("invalid preferences: {0}")]
    Invalid(String),
    #[error("category not found: {0}")]
    CategoryNotFound(String),
}

impl From<PreferencesServiceError> for AppError {
    fn from(err: PreferencesServiceError) -> Self {
        match err {
            PreferencesServiceError::Invalid(msg) => AppError::BadRequest(msg),
            PreferencesServiceError::CategoryNotFound(id) => {
                AppError::NotFound(format!("Category {} not found", id))
            }
        }
    }
}
