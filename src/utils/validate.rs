use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> Result<(), String> {
    let mut errors: Vec<&'static str> = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

/// 注册类请求的账号字段整体校验
pub fn validate_account(username: &str, email: &str, password: &str) -> Result<(), String> {
    validate_username(username).map_err(|e| e.to_string())?;
    validate_email(email).map_err(|e| e.to_string())?;
    validate_password(password)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("zhang_san").is_ok());
        assert!(validate_username("bob").is_ok());
    }

    #[test]
    fn test_invalid_username() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("张三").is_err());
        assert!(validate_username("a b").is_err());
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("zhangsan@example.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("zhangsan@").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_ok());
        assert!(validate_password("SecurePass123").is_ok());
    }

    #[test]
    fn test_short_password() {
        let err = validate_password("Ab1").unwrap_err();
        assert!(err.contains("at least 8 characters"));
    }

    #[test]
    fn test_missing_character_classes() {
        assert!(validate_password("abcd1234").is_err());
        assert!(validate_password("ABCD1234").is_err());
        assert!(validate_password("AbcdEfgh").is_err());
    }

    #[test]
    fn test_common_password() {
        let err = validate_password("Password1").unwrap_err();
        assert!(err.contains("too common"));
    }
}
