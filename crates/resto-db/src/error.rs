use resto_core::AppError;

/// Translate a sqlx failure into the application taxonomy.
///
/// Connectivity problems become [`AppError::StoreUnavailable`]; everything
/// else is an opaque [`AppError::DatabaseError`].
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => AppError::StoreUnavailable(err.to_string()),
        _ => AppError::DatabaseError(err.to_string()),
    }
}

/// True when the statement was rejected by a foreign key constraint.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

/// True when the statement was rejected by a unique constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
