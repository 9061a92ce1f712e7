//! 核心模块
//!
//! 基础类型与错误类型，被图表示层和算法层共同依赖

pub mod error;
pub mod types;

pub use error::{ConfigError, ConfigResult, GraphError, GraphResult};
pub use types::{checked_distance, GraphKind, VertexId, Weight, INFINITY};
