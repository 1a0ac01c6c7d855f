use crate::config::AppConfig;
use crate::errors::EduSystemError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, EduSystemError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| EduSystemError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| EduSystemError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码（argon2 内部为常数时间比较）
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("SecureP@ss1").unwrap();
        assert!(verify_password("SecureP@ss1", &hash));
        assert!(!verify_password("WrongP@ss1", &hash));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("SecureP@ss1").unwrap();
        assert_ne!(hash, "SecureP@ss1");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let first = hash_password("SecureP@ss1").unwrap();
        let second = hash_password("SecureP@ss1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_rejected() {
        assert!(!verify_password("SecureP@ss1", "not-a-phc-string"));
    }
}
