use sea_orm::DbErr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Row not found")]
    NotFound,
    #[error("A database error occurred: {0}")]
    DbErr(DbErr),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        match value {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::NotFound,
            err => Self::DbErr(err),
        }
    }
}
