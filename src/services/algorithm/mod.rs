//! 算法模块
//!
//! 包含图相关算法实现：遍历、环检测与拓扑排序、最短路径、最小生成树

pub mod bellman_ford;
pub mod bfs;
pub mod connected_components;
pub mod cycle_detection;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod mst;
pub mod prim;
pub mod shortest_path;
pub mod topological_sort;
pub mod union_find;

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use bfs::{Bfs, BfsResult};
pub use connected_components::ConnectedComponents;
pub use cycle_detection::CycleDetection;
pub use dfs::{Dfs, DfsResult};
pub use dijkstra::Dijkstra;
pub use floyd_warshall::{FloydWarshall, FloydWarshallResult};
pub use kruskal::Kruskal;
pub use mst::{MstResult, MstValidator};
pub use prim::Prim;
pub use shortest_path::ShortestPathResult;
pub use topological_sort::TopologicalSort;
pub use union_find::UnionFind;
