use cms_core::ApiError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManagerError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("No {resource} with id {id}")]
    NotFound { resource: &'static str, id: i64 },
}

pub type ManagerResult<T> = Result<T, ManagerError>;
