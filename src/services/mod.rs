//! 服务层模块
//!
//! 图算法都在 [`algorithm`] 中，只依赖 [`crate::graph::Graph`] 接口

pub mod algorithm;

// 重新导出常用服务
pub use algorithm::*;
