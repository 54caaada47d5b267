use sqlx::error::{DatabaseError, ErrorKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

// SQLITE_BUSY and SQLITE_LOCKED primary result codes
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    DatabaseError(#[source] sqlx::Error),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database did not respond in time")]
    Timeout,

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_error) = &e {
            if let Some(classified) = classify(db_error.as_ref()) {
                return classified;
            }
        }
        match e {
            sqlx::Error::RowNotFound => Error::RecordNotFound("Record".to_string()),
            sqlx::Error::PoolTimedOut => Error::Timeout,
            e => Error::DatabaseError(e),
        }
    }
}

fn classify(db_error: &dyn DatabaseError) -> Option<Error> {
    match db_error.kind() {
        ErrorKind::UniqueViolation
        | ErrorKind::ForeignKeyViolation
        | ErrorKind::NotNullViolation
        | ErrorKind::CheckViolation => {
            Some(Error::ConstraintViolation(db_error.message().to_string()))
        }
        _ => {
            let primary_code = db_error
                .code()
                .and_then(|c| c.parse::<i32>().ok())
                .map(|c| c & 0xff);
            match primary_code {
                Some(SQLITE_BUSY) | Some(SQLITE_LOCKED) => Some(Error::Timeout),
                _ => None,
            }
        }
    }
}

impl Error {
    pub(crate) fn not_found(entity: &str, id: i64) -> Self {
        Error::RecordNotFound(format!("{entity} {id}"))
    }
}
