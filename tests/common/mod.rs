//! 集成测试共享工具模块
//!
//! 提供经典示例图和按种子生成的随机图，每个构造函数都可以指定存储后端

#![allow(dead_code)]

use graphalgo::config::GraphConfig;
use graphalgo::core::types::{VertexId, Weight};
use graphalgo::graph::{Graph, GraphBackend, RandomGraphGenerator};

/// 所有存储后端
pub const BACKENDS: [GraphBackend; 2] = [GraphBackend::List, GraphBackend::Matrix];

/// 随机图使用的邻接矩阵容量
pub const TEST_CAPACITY: usize = 128;

pub fn test_config() -> GraphConfig {
    GraphConfig {
        matrix_capacity: TEST_CAPACITY,
        ..GraphConfig::default()
    }
}

/// 按边列表构造图
pub fn build(
    backend: GraphBackend,
    directed: bool,
    edges: &[(VertexId, VertexId, Weight)],
) -> Box<dyn Graph> {
    let mut graph = backend.create(directed, &test_config());
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight);
    }
    graph
}

/// 4顶点无向图，最小生成树总权重为19
pub fn mst_scenario(backend: GraphBackend) -> Box<dyn Graph> {
    build(
        backend,
        false,
        &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
    )
}

/// Dijkstra示例图
pub fn dijkstra_scenario(backend: GraphBackend, directed: bool) -> Box<dyn Graph> {
    build(
        backend,
        directed,
        &[(0, 1, 5), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8)],
    )
}

/// 有向环 1 -> 2 -> 3 -> 1
pub fn directed_cycle(backend: GraphBackend) -> Box<dyn Graph> {
    build(backend, true, &[(1, 2, 1), (2, 3, 1), (3, 1, 1)])
}

/// 连通随机图，顶点为 0..vertex_count
pub fn random_connected(
    backend: GraphBackend,
    directed: bool,
    seed: u64,
    vertex_count: usize,
    extra_edges: usize,
) -> Box<dyn Graph> {
    let mut graph = backend.create(directed, &test_config());
    RandomGraphGenerator::new(seed).fill_connected(graph.as_mut(), vertex_count, extra_edges);
    graph
}

/// 可能不连通的随机图
pub fn random_sparse(
    backend: GraphBackend,
    directed: bool,
    seed: u64,
    vertex_count: usize,
    edges: usize,
) -> Box<dyn Graph> {
    let mut graph = backend.create(directed, &test_config());
    RandomGraphGenerator::new(seed).fill_random(graph.as_mut(), vertex_count, edges);
    graph
}

/// 有向无环图：只保留随机图中从小编号指向大编号的边，权重可为负
pub fn random_dag(backend: GraphBackend, seed: u64, vertex_count: usize) -> Box<dyn Graph> {
    let mut source = backend.create(true, &test_config());
    RandomGraphGenerator::new(seed)
        .with_weights(-5, 20)
        .fill_connected(source.as_mut(), vertex_count, vertex_count * 3);

    let mut dag = backend.create(true, &test_config());
    for vertex in source.vertices() {
        dag.add_vertex(vertex);
    }
    for edge in source.edges() {
        if edge.from < edge.to {
            dag.add_edge(edge.from, edge.to, edge.weight);
        }
    }
    dag
}
