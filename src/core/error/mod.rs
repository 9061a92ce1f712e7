//! 统一错误处理系统
//!
//! ## 设计理念
//!
//! 1. **按领域划分**：图操作与算法错误集中在 `GraphError`，配置加载错误集中在 `ConfigError`
//! 2. **类型化分支**：调用方通过匹配错误变体区分失败原因，而不是比较错误消息文本
//! 3. **统一接口**：`GraphResult<T>` 提供统一的返回类型，简化错误传播

pub mod config;
pub mod graph;

pub use config::{ConfigError, ConfigResult};
pub use graph::{GraphError, GraphResult};
