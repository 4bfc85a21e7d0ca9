//! Password hashing
//!
//! bcrypt is deliberately slow, so both calls run on the blocking thread
//! pool instead of the async workers.

use crate::backend::error::BackendError;

/// bcrypt cost factor used for every stored hash
pub const BCRYPT_COST: u32 = 10;

/// Hash a password with a fresh salt
pub async fn hash_password(password: String) -> Result<String, BackendError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;
    Ok(hashed)
}

/// Check a password against a stored hash
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, BackendError> {
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(valid)
}
