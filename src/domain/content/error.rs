use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ContentServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("content not found in favorites: {0}")]
    NotFavorite(String),
}

impl From<ContentServiceError> for AppError {
    fn from(err: ContentServiceError) -> Self {
        match err {
            ContentServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ContentServiceError::NotFavorite(id) => {
                AppError::NotFound(format!("Favorite {} not found", id))
            }
        }
    }
}
