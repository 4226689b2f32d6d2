use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("password hashing failed: {0}")]
    PasswordHash(argon2::password_hash::Error),

    // passed through from the executor untouched
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::Db(e)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(e)
    }
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::PasswordHash(_) => "INTERNAL_ERROR",
            Self::Db(_) if self.is_integrity_violation() => "INTEGRITY_VIOLATION",
            Self::Db(DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) => "TRANSPORT_ERROR",
            Self::Db(_) => "DB_ERROR",
        }
    }

    /// Duplicate `user_id` / `username` and similar schema rejections.
    pub fn is_integrity_violation(&self) -> bool {
        match self {
            Self::Db(e) => matches!(
                e.sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_))
            ),
            _ => false,
        }
    }
}
