// 图相关类型定义
//
// 包含图结构的方向性等核心类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 图的种类
///
/// 在图构造时确定，之后不可更改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// 有向图：边 (u, v) 与 (v, u) 互不相关
    Directed,
    /// 无向图：插入 (u, v) 同时隐含 (v, u)，两者视为同一条逻辑边
    Undirected,
}

impl GraphKind {
    /// 判断是否为有向图
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed)
    }

    /// 根据方向性标志构造
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "有向图"),
            GraphKind::Undirected => write!(f, "无向图"),
        }
    }
}

impl From<&str> for GraphKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "directed" | "digraph" => GraphKind::Directed,
            _ => GraphKind::Undirected,
        }
    }
}
