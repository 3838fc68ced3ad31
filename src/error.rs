use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("food item '{0}' already exists")]
    DuplicateKey(String),
    #[error("food item '{name}' has unknown classification '{label}'")]
    InvalidClassification { name: String, label: String },
}

impl StoreError {
    /// Maps a failed insert, telling a UNIQUE violation on `name` apart from
    /// every other failure.
    pub(crate) fn from_insert(err: DieselError, food_name: &str) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                StoreError::DuplicateKey(food_name.to_string())
            }
            // sqlite only reports the extended constraint code when asked for it
            DieselError::DatabaseError(_, ref info)
                if info.message().starts_with("UNIQUE constraint failed") =>
            {
                StoreError::DuplicateKey(food_name.to_string())
            }
            other => StoreError::from(other),
        }
    }
}

impl From<DieselError> for StoreError {
    fn from(err: DieselError) -> Self {
        StoreError::StorageUnavailable(err.to_string())
    }
}

impl From<PoolError> for StoreError {
    fn from(err: PoolError) -> Self {
        StoreError::StorageUnavailable(err.to_string())
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}
