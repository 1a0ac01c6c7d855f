//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_edusystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduSystemError {
            $($variant(String),)*
        }

        impl EduSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edusystem_errors! {
    Unauthenticated("E001", "Unauthenticated"),
    Forbidden("E002", "Forbidden"),
    NotFound("E003", "Resource Not Found"),
    DuplicateKey("E004", "Duplicate Key"),
    DeadlinePassed("E005", "Deadline Passed"),
    Storage("E006", "Storage Error"),
    IntegrityViolation("E007", "Integrity Violation"),
    DatabaseConfig("E008", "Database Configuration Error"),
    DatabaseConnection("E009", "Database Connection Error"),
    DatabaseOperation("E010", "Database Operation Error"),
    Validation("E011", "Validation Error"),
    Serialization("E012", "Serialization Error"),
    DateParse("E013", "Date Parse Error"),
    TokenCreation("E014", "Token Creation Error"),
    Configuration("E015", "Configuration Error"),
}

impl EduSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EduSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                EduSystemError::DuplicateKey(detail)
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(detail)) => {
                EduSystemError::IntegrityViolation(detail)
            }
            _ => EduSystemError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for EduSystemError {
    fn from(err: std::io::Error) -> Self {
        EduSystemError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EduSystemError {
    fn from(err: serde_json::Error) -> Self {
        EduSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduSystemError {
    fn from(err: chrono::ParseError) -> Self {
        EduSystemError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for EduSystemError {
    fn from(err: config::ConfigError) -> Self {
        EduSystemError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduSystemError::unauthenticated("test").code(), "E001");
        assert_eq!(EduSystemError::duplicate_key("test").code(), "E004");
        assert_eq!(EduSystemError::deadline_passed("test").code(), "E005");
        assert_eq!(EduSystemError::validation("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduSystemError::forbidden("test").error_type(),
            "Forbidden"
        );
        assert_eq!(
            EduSystemError::integrity_violation("test").error_type(),
            "Integrity Violation"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = EduSystemError::deadline_passed("assignment 3");
        let formatted = err.format_simple();
        assert!(formatted.contains("Deadline Passed"));
        assert!(formatted.contains("assignment 3"));
    }

    #[test]
    fn test_db_err_unique_maps_to_duplicate_key() {
        let err: EduSystemError =
            sea_orm::DbErr::RecordNotFound("users".to_string()).into();
        assert_eq!(err.code(), "E010");
    }
}
