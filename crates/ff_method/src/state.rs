// crates/ff_method/src/state.rs

//! 状态与边界面数据视图
//!
//! 本模块定义方法层操作的最小几何/场数据视图：
//! - FaceId: 边界面编号
//! - State: 单元状态（坐标 + 状态变量值）
//! - BoundaryFace: 边界面，持有内部状态与幽灵状态
//! - FaceNormals: 按面编号查找的外法向量表
//!
//! # 概念说明
//!
//! 幽灵状态是边界面外侧的虚拟状态，没有对应的物理网格单元，
//! 仅用于封闭有限体积模板。面与状态的所有权归网格/存储子系统，
//! 边界条件在 set_ghost_state 期间只借用读写访问。

use std::collections::HashMap;

use ff_foundation::error::{FfError, FfResult};

// ============================================================
// 面编号
// ============================================================

/// 边界面编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================
// 单元状态
// ============================================================

/// 单元状态
///
/// 持有单元中心坐标（长度 = 空间维度）与状态变量值
/// （长度 = 变量数）。
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    coords: Vec<f64>,
    values: Vec<f64>,
}

impl State {
    /// 创建状态
    pub fn new(coords: Vec<f64>, values: Vec<f64>) -> Self {
        Self { coords, values }
    }

    /// 单元中心坐标
    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coords
    }

    /// 状态变量值（只读）
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 状态变量值（可变）
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// 空间维度
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// 状态变量数
    #[inline]
    pub fn nb_variables(&self) -> usize {
        self.values.len()
    }
}

// ============================================================
// 边界面
// ============================================================

/// 边界面
///
/// 每个边界面恰好持有两个状态：槽位 0 为内部单元状态，
/// 槽位 1 为幽灵状态。
#[derive(Debug, Clone)]
pub struct BoundaryFace {
    id: FaceId,
    interior: State,
    ghost: State,
}

impl BoundaryFace {
    /// 创建边界面
    ///
    /// 内部状态与幽灵状态的维度和变量数必须一致。
    pub fn new(id: FaceId, interior: State, ghost: State) -> FfResult<Self> {
        FfError::check_size("ghost coords", interior.dimension(), ghost.dimension())?;
        FfError::check_size("ghost values", interior.nb_variables(), ghost.nb_variables())?;
        Ok(Self {
            id,
            interior,
            ghost,
        })
    }

    /// 面编号
    #[inline]
    pub fn id(&self) -> FaceId {
        self.id
    }

    /// 内部单元状态（槽位 0）
    #[inline]
    pub fn interior(&self) -> &State {
        &self.interior
    }

    /// 幽灵状态（槽位 1）
    #[inline]
    pub fn ghost(&self) -> &State {
        &self.ghost
    }

    /// 幽灵状态（可变）
    #[inline]
    pub fn ghost_mut(&mut self) -> &mut State {
        &mut self.ghost
    }

    /// 同时借用内部状态（只读）与幽灵状态（可变）
    ///
    /// 镜像写入时内部状态保持只读。
    #[inline]
    pub fn split_mut(&mut self) -> (&State, &mut State) {
        (&self.interior, &mut self.ghost)
    }
}

// ============================================================
// 面法向量表
// ============================================================

/// 边界面外法向量查找表
///
/// 镜像算法本身不消费法向量，但真实的通量分布与诊断需要它，
/// 因此保留在访问器数据面上。
#[derive(Debug, Clone, Default)]
pub struct FaceNormals {
    normals: HashMap<FaceId, Vec<f64>>,
}

impl FaceNormals {
    /// 创建空表
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记面法向量
    pub fn insert(&mut self, face: FaceId, normal: Vec<f64>) {
        self.normals.insert(face, normal);
    }

    /// 查找面法向量
    pub fn normal(&self, face: FaceId) -> Option<&[f64]> {
        self.normals.get(&face).map(Vec::as_slice)
    }

    /// 已登记的面数
    pub fn len(&self) -> usize {
        self.normals.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.normals.is_empty()
    }
}

// ============================================================
// 测试
// ============================================================
