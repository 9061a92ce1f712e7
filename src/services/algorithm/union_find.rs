//! 并查集模块
//!
//! 按秩合并加路径压缩的不相交集合，供Kruskal算法与MST校验使用。
//! 顶点编号先映射为连续下标，内部只操作下标数组

use std::collections::HashMap;

use crate::core::types::VertexId;

/// 并查集
#[derive(Debug, Clone)]
pub struct UnionFind {
    index: HashMap<VertexId, usize>,
    labels: Vec<VertexId>,
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// 为给定顶点创建单元素集合，重复的顶点只保留一个
    pub fn new(labels: impl IntoIterator<Item = VertexId>) -> Self {
        let mut index = HashMap::new();
        let mut unique = Vec::new();
        for label in labels {
            if !index.contains_key(&label) {
                index.insert(label, unique.len());
                unique.push(label);
            }
        }

        let n = unique.len();
        Self {
            index,
            labels: unique,
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// 查找所在集合的代表元，未知顶点返回 `None`
    pub fn find(&mut self, x: VertexId) -> Option<VertexId> {
        let i = *self.index.get(&x)?;
        let root = self.find_root(i);
        Some(self.labels[root])
    }

    fn find_root(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // 路径压缩
        let mut current = i;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// 合并两个集合
    ///
    /// 已在同一集合（或任一顶点未知）时返回 `false`，秩保持不变
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let (Some(&i), Some(&j)) = (self.index.get(&x), self.index.get(&y)) else {
            return false;
        };

        let root_x = self.find_root(i);
        let root_y = self.find_root(j);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    pub fn is_connected(&mut self, x: VertexId, y: VertexId) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(root_x), Some(root_y)) => root_x == root_y,
            _ => false,
        }
    }

    /// 当前不相交集合的数量
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, x: VertexId) -> bool {
        self.index.contains_key(&x)
    }

    /// 顶点的秩，只有集合的代表元的秩有意义
    pub fn rank(&self, x: VertexId) -> Option<usize> {
        self.index.get(&x).map(|&i| self.rank[i])
    }
}
