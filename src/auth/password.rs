//! Password hashing using bcrypt
//!
//! Provides secure password hashing and verification.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. In async contexts use the
//! `*_async` variants, which run on the blocking thread pool.

use anyhow::Result;

/// Password hashing service
///
/// Each hash gets a fresh random salt, so two hashes of the same password
/// differ while both verify. Verification is constant-time with respect to
/// mismatch position.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Create a service with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password (blocking operation)
    ///
    /// CPU-intensive; for async contexts use `hash_async`.
    pub fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a hash (blocking operation)
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(&self, password: String, hash: String) -> Result<bool> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast
    fn create_test_service() -> PasswordService {
        PasswordService::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let service = create_test_service();
        let password = "secure_password_123";
        let hash = service.hash(password).unwrap();

        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let service = create_test_service();
        let password = "test_password";
        let hash1 = service.hash(password).unwrap();
        let hash2 = service.hash(password).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(service.verify(password, &hash1).unwrap());
        assert!(service.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let service = create_test_service();
        assert!(service.verify("password", "not-a-bcrypt-blob").is_err());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let service = create_test_service();
        let password = "async_test_password".to_string();
        let hash = service.hash_async(password.clone()).await.unwrap();

        assert!(service.verify_async(password.clone(), hash.clone()).await.unwrap());
        assert!(!service.verify_async("wrong".to_string(), hash).await.unwrap());
    }
}
