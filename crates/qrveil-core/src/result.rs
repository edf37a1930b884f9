use crate::error::QrveilError;

pub type Result<T> = std::result::Result<T, QrveilError>;
