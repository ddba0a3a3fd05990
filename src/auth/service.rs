//! Password hashing and verification.

use crate::error::{AppError, AppResult};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::sync::OnceLock;

// Fixed cost: 19 MiB memory, 2 iterations, 1 lane.
const HASH_MEMORY_KIB: u32 = 19 * 1024;
const HASH_ITERATIONS: u32 = 2;
const HASH_PARALLELISM: u32 = 1;

/// Digest checked when no user matches, so unknown emails cost the same as wrong passwords.
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

pub struct AuthAppService;

impl AuthAppService {
    fn hasher() -> AppResult<Argon2<'static>> {
        let params = Params::new(HASH_MEMORY_KIB, HASH_ITERATIONS, HASH_PARALLELISM, None)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("argon2 params: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))?
            .to_string();
        Ok(hash)
    }

    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("parse hash: {}", e)))?;
        Ok(Self::hasher()?
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    fn dummy_hash() -> AppResult<&'static str> {
        if let Some(hash) = DUMMY_HASH.get() {
            return Ok(hash);
        }
        let hash = Self::hash_password("authd-no-such-user")?;
        Ok(DUMMY_HASH.get_or_init(|| hash))
    }

    /// Run a full verification against a throwaway digest. Always `false`.
    pub async fn verify_missing_user_async(password: String) -> AppResult<bool> {
        tokio::task::spawn_blocking(move || {
            Self::verify_password(&password, Self::dummy_hash()?)?;
            Ok(false)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("verify task: {}", e)))?
    }

    /// [`Self::hash_password`] on the blocking pool.
    pub async fn hash_password_async(password: String) -> AppResult<String> {
        tokio::task::spawn_blocking(move || Self::hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash task: {}", e)))?
    }

    /// [`Self::verify_password`] on the blocking pool.
    pub async fn verify_password_async(password: String, hash: String) -> AppResult<bool> {
        tokio::task::spawn_blocking(move || Self::verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("verify task: {}", e)))?
    }
}
