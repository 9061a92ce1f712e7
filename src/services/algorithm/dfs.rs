//! DFS算法模块
//!
//! 包含深度优先搜索相关算法实现。
//! 时间戳计数器作为显式参数在递归中传递，每次调用互不影响

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::VertexId;
use crate::graph::Graph;

/// DFS算法结构体
pub struct Dfs;

/// DFS遍历结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    /// 先序访问顺序
    pub order: Vec<VertexId>,
    /// 发现时间戳
    pub discovery: HashMap<VertexId, usize>,
    /// 完成时间戳
    pub finish: HashMap<VertexId, usize>,
    /// 树边父节点，根节点没有条目
    pub parent: HashMap<VertexId, VertexId>,
}

impl DfsResult {
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.discovery.contains_key(&vertex)
    }

    pub fn discovery_time(&self, vertex: VertexId) -> Option<usize> {
        self.discovery.get(&vertex).copied()
    }

    pub fn finish_time(&self, vertex: VertexId) -> Option<usize> {
        self.finish.get(&vertex).copied()
    }

    /// 沿DFS树从所在树的根走到 `vertex` 的路径
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.contains(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(&parent) = self.parent.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

impl Dfs {
    /// 从起点递归DFS，只访问可达顶点
    pub fn traverse<G: Graph + ?Sized>(graph: &G, start: VertexId) -> GraphResult<DfsResult> {
        if !graph.has_vertex(start) {
            return Err(GraphError::VertexNotFound(start));
        }
        log::debug!("DFS 起点 {}", start);

        let mut result = DfsResult::default();
        let mut clock = 0;
        Self::visit(graph, start, &mut clock, &mut result);
        Ok(result)
    }

    /// 显式栈版本的DFS，结果与 [`Dfs::traverse`] 完全一致，适合很深的图
    pub fn traverse_iterative<G: Graph + ?Sized>(
        graph: &G,
        start: VertexId,
    ) -> GraphResult<DfsResult> {
        if !graph.has_vertex(start) {
            return Err(GraphError::VertexNotFound(start));
        }

        let mut result = DfsResult::default();
        let mut clock = 0;
        Self::discover(start, &mut clock, &mut result);
        let mut stack: Vec<(VertexId, Vec<VertexId>, usize)> =
            vec![(start, graph.neighbors(start), 0)];

        while let Some((vertex, neighbors, cursor)) = stack.last_mut() {
            let vertex = *vertex;
            match neighbors.get(*cursor).copied() {
                Some(neighbor) => {
                    *cursor += 1;
                    if !result.contains(neighbor) {
                        result.parent.insert(neighbor, vertex);
                        Self::discover(neighbor, &mut clock, &mut result);
                        stack.push((neighbor, graph.neighbors(neighbor), 0));
                    }
                }
                None => {
                    stack.pop();
                    Self::complete(vertex, &mut clock, &mut result);
                }
            }
        }

        Ok(result)
    }

    /// 按顶点升序从每个未发现的顶点开始DFS，覆盖非连通图
    ///
    /// 所有DFS树共享同一个时间戳计数器
    pub fn traverse_all<G: Graph + ?Sized>(graph: &G) -> DfsResult {
        let mut result = DfsResult::default();
        let mut clock = 0;

        for vertex in graph.vertices() {
            if !result.contains(vertex) {
                Self::visit(graph, vertex, &mut clock, &mut result);
            }
        }

        result
    }

    fn visit<G: Graph + ?Sized>(
        graph: &G,
        vertex: VertexId,
        clock: &mut usize,
        result: &mut DfsResult,
    ) {
        Self::discover(vertex, clock, result);

        for neighbor in graph.neighbors(vertex) {
            if !result.contains(neighbor) {
                result.parent.insert(neighbor, vertex);
                Self::visit(graph, neighbor, clock, result);
            }
        }

        Self::complete(vertex, clock, result);
    }

    fn discover(vertex: VertexId, clock: &mut usize, result: &mut DfsResult) {
        *clock += 1;
        result.discovery.insert(vertex, *clock);
        result.order.push(vertex);
    }

    fn complete(vertex: VertexId, clock: &mut usize, result: &mut DfsResult) {
        *clock += 1;
        result.finish.insert(vertex, *clock);
    }

    /// 检查是否存在从 `from` 到 `to` 的路径
    pub fn has_path<G: Graph + ?Sized>(
        graph: &G,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<bool> {
        if !graph.has_vertex(to) {
            return Err(GraphError::VertexNotFound(to));
        }
        Ok(Self::traverse(graph, from)?.contains(to))
    }

    /// 查找两个顶点之间的所有简单路径，路径顶点数不超过 `max_depth`
    pub fn find_all_paths<G: Graph + ?Sized>(
        graph: &G,
        from: VertexId,
        to: VertexId,
        max_depth: usize,
    ) -> GraphResult<Vec<Vec<VertexId>>> {
        for vertex in [from, to] {
            if !graph.has_vertex(vertex) {
                return Err(GraphError::VertexNotFound(vertex));
            }
        }

        let mut all_paths = Vec::new();
        let mut current_path = Vec::new();
        let mut visited = HashSet::new();

        Self::dfs_find_all_paths(
            graph,
            from,
            to,
            max_depth,
            &mut current_path,
            &mut visited,
            &mut all_paths,
        );

        Ok(all_paths)
    }

    fn dfs_find_all_paths<G: Graph + ?Sized>(
        graph: &G,
        current: VertexId,
        target: VertexId,
        max_depth: usize,
        current_path: &mut Vec<VertexId>,
        visited: &mut HashSet<VertexId>,
        all_paths: &mut Vec<Vec<VertexId>>,
    ) {
        if current_path.len() >= max_depth {
            return;
        }

        current_path.push(current);
        visited.insert(current);

        if current == target {
            all_paths.push(current_path.clone());
        } else {
            for neighbor in graph.neighbors(current) {
                if !visited.contains(&neighbor) {
                    Self::dfs_find_all_paths(
                        graph,
                        neighbor,
                        target,
                        max_depth,
                        current_path,
                        visited,
                        all_paths,
                    );
                }
            }
        }

        current_path.pop();
        visited.remove(&current);
    }
}
