//! 图定义文件
//!
//! 以 TOML 或 JSON 描述一张图（方向性、后端、顶点与边），供命令行工具加载

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{Graph, GraphBackend};
use crate::config::GraphConfig;
use crate::core::error::{ConfigError, ConfigResult};
use crate::core::types::{VertexId, Weight};

/// 边定义
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: VertexId,
    pub to: VertexId,
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    1
}

/// 图定义
///
/// ```toml
/// directed = false
/// backend = "matrix"
/// vertices = [7]
/// edges = [
///     { from = 0, to = 1, weight = 10 },
///     { from = 0, to = 2, weight = 6 },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphDefinition {
    #[serde(default)]
    pub directed: bool,
    /// 未指定时使用 `GraphConfig::default_backend`
    #[serde(default)]
    pub backend: Option<GraphBackend>,
    /// 邻接矩阵容量，未指定时使用 `GraphConfig::matrix_capacity`
    #[serde(default)]
    pub capacity: Option<usize>,
    /// 孤立顶点，边的端点无需重复列出
    #[serde(default)]
    pub vertices: Vec<VertexId>,
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,
}

impl GraphDefinition {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 按扩展名（`.toml` / `.json`）加载
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// 构造图
    pub fn build(&self, config: &GraphConfig) -> ConfigResult<Box<dyn Graph>> {
        let mut config = config.clone();
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return Err(ConfigError::Invalid("capacity 必须大于 0".to_string()));
            }
            config.matrix_capacity = capacity;
        }

        let backend = self.backend.unwrap_or(config.default_backend);
        let mut graph = backend.create(self.directed, &config);
        for &vertex in &self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }

        log::debug!(
            "构造图: backend={}, directed={}, vertices={}, edges={}",
            backend,
            self.directed,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_GRAPH: &str = r#"
directed = false
backend = "matrix"
capacity = 8
vertices = [7]
edges = [
    { from = 0, to = 1, weight = 10 },
    { from = 0, to = 2, weight = 6 },
    { from = 2, to = 3 },
]
"#;

    #[test]
    fn test_from_toml() {
        let definition =
            GraphDefinition::from_toml_str(TOML_GRAPH).expect("Definition should parse in test");
        assert!(!definition.directed);
        assert_eq!(definition.backend, Some(GraphBackend::Matrix));
        assert_eq!(definition.edges.len(), 3);
        assert_eq!(definition.edges[2].weight, 1);

        let graph = definition
            .build(&GraphConfig::default())
            .expect("Graph should build in test");
        assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 7]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(1, 0), Ok(10));
    }

    #[test]
    fn test_from_json_uses_default_backend() {
        let json = r#"{"directed": true, "edges": [{"from": 1, "to": 2, "weight": -4}]}"#;
        let definition =
            GraphDefinition::from_json_str(json).expect("Definition should parse in test");
        assert_eq!(definition.backend, None);

        let graph = definition
            .build(&GraphConfig::default())
            .expect("Graph should build in test");
        assert!(graph.is_directed());
        assert_eq!(graph.weight(1, 2), Ok(-4));
        assert!(!graph.has_edge(2, 1));
    }

    #[test]
    fn test_capacity_override_limits_matrix() {
        let definition = GraphDefinition {
            backend: Some(GraphBackend::Matrix),
            capacity: Some(2),
            vertices: vec![1, 2, 3],
            ..Default::default()
        };
        let graph = definition
            .build(&GraphConfig::default())
            .expect("Graph should build in test");
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let definition = GraphDefinition {
            capacity: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            definition.build(&GraphConfig::default()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary dir");

        let toml_path = temp_dir.path().join("graph.toml");
        fs::write(&toml_path, TOML_GRAPH).expect("Failed to write graph file in test");
        let definition = GraphDefinition::load(&toml_path).expect("Load should succeed in test");
        assert_eq!(definition.vertices, vec![7]);

        let txt_path = temp_dir.path().join("graph.txt");
        fs::write(&txt_path, TOML_GRAPH).expect("Failed to write graph file in test");
        assert!(matches!(
            GraphDefinition::load(&txt_path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
