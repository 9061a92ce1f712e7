// 核心类型系统模块
//
// 包含图算法共用的基础类型：顶点标识、边权重以及不可达哨兵值

pub mod graph;

pub use graph::GraphKind;

/// 顶点标识
pub type VertexId = i32;

/// 边权重，允许负值（Bellman-Ford、负权环检测）
pub type Weight = i32;

/// 不可达距离的哨兵值
///
/// 最短路径结果中距离等于该值的顶点表示从源点不可达，
/// 该值永远不会参与加法运算
pub const INFINITY: Weight = Weight::MAX;

/// 带检查的距离累加
///
/// 任一操作数为 [`INFINITY`] 或发生溢出时返回 `None`
pub fn checked_distance(distance: Weight, weight: Weight) -> Option<Weight> {
    if distance == INFINITY || weight == INFINITY {
        return None;
    }
    distance
        .checked_add(weight)
        .filter(|&sum| sum != INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_distance() {
        assert_eq!(checked_distance(3, 4), Some(7));
        assert_eq!(checked_distance(3, -4), Some(-1));
        assert_eq!(checked_distance(INFINITY, 1), None);
        assert_eq!(checked_distance(INFINITY - 1, 1), None);
        assert_eq!(checked_distance(INFINITY - 1, 5), None);
        assert_eq!(checked_distance(-1, INFINITY), None);
        assert_eq!(checked_distance(Weight::MIN, -1), None);
    }
}
