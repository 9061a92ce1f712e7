//! 配置错误类型
//!
//! 涵盖配置文件与图定义文件的读取、解析和校验错误

use thiserror::Error;

/// 配置结果类型
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(String),

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("序列化错误: {0}")]
    Serialize(String),

    #[error("配置无效: {0}")]
    Invalid(String),

    #[error("不支持的文件格式: {0}")]
    UnsupportedFormat(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
