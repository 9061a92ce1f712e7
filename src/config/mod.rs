use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ConfigError, ConfigResult};
use crate::graph::GraphBackend;

/// 图构造相关配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GraphConfig {
    /// 邻接矩阵后端的顶点容量上限
    pub matrix_capacity: usize,
    /// 图定义未指定后端时使用的默认后端
    pub default_backend: GraphBackend,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            matrix_capacity: 64,
            default_backend: GraphBackend::List,
        }
    }
}

/// 日志相关配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphalgo".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub log: LogConfig,
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 校验配置取值
    pub fn validate(&self) -> ConfigResult<()> {
        if self.graph.matrix_capacity == 0 {
            return Err(ConfigError::Invalid(
                "graph.matrix_capacity 必须大于 0".to_string(),
            ));
        }

        let level = self.log.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "未知的日志级别: {}",
                self.log.level
            )));
        }

        if self.log.max_files == 0 {
            return Err(ConfigError::Invalid("log.max_files 必须大于 0".to_string()));
        }

        Ok(())
    }
}
