use crate::orders::OrderError;
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error, PartialEq)]
pub enum ManagerError {
    #[error(transparent)]
    Order(#[from] OrderError),
}

pub type ManagerResult<T> = Result<T, ManagerError>;
