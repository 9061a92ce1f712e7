//! 图操作与图算法错误类型
//!
//! 涵盖顶点/边查找失败、图种类不匹配以及算法的特殊终止状态

use thiserror::Error;

use crate::core::types::{GraphKind, VertexId};

/// 图操作结果类型
pub type GraphResult<T> = Result<T, GraphError>;

/// 图操作与图算法错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {from} -> {to}")]
    EdgeNotFound { from: VertexId, to: VertexId },

    #[error("图种类不匹配: {operation} 需要{expected}")]
    WrongGraphKind {
        operation: &'static str,
        expected: GraphKind,
    },

    #[error("图不连通，不存在生成树")]
    GraphNotConnected,

    #[error("目标顶点不可达: {start} -> {target}")]
    TargetUnreachable { start: VertexId, target: VertexId },

    #[error("检测到负权环")]
    NegativeCycleDetected,

    #[error("检测到环，无法进行拓扑排序")]
    CycleDetected,
}

impl GraphError {
    /// 构造图种类不匹配错误
    pub fn wrong_kind(operation: &'static str, expected: GraphKind) -> Self {
        GraphError::WrongGraphKind {
            operation,
            expected,
        }
    }

    /// 是否为"未找到"类错误（顶点或边）
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(GraphError::VertexNotFound(7).to_string(), "顶点不存在: 7");
        assert_eq!(
            GraphError::EdgeNotFound { from: 1, to: 2 }.to_string(),
            "边不存在: 1 -> 2"
        );
        assert_eq!(
            GraphError::wrong_kind("kruskal", GraphKind::Undirected).to_string(),
            "图种类不匹配: kruskal 需要无向图"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(GraphError::VertexNotFound(1).is_not_found());
        assert!(GraphError::EdgeNotFound { from: 1, to: 2 }.is_not_found());
        assert!(!GraphError::GraphNotConnected.is_not_found());
        assert!(!GraphError::NegativeCycleDetected.is_not_found());
    }
}
