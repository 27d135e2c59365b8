// crates/ff_method/src/flux/mod.rs

//! 通量点分布模块
//!
//! 本模块定义可选的通量点重分布流水线阶段：
//!
//! # 子模块
//!
//! - [`null`]: 空变体（已验证的空操作）
//!
//! # 主要类型
//!
//! - [`FluxPoints`]: 分布阶段操作的逐面通量点缓冲
//! - [`FluxPointDistribution`]: 能力接口（setup / apply / unsetup）
//! - [`NullFluxPointDistribution`]: 阶段被配置禁用时的安全默认
//!
//! 空变体满足与真实实现完全相同的接口契约，宿主代码不检查
//! 其存在与否；这与注册中心的 ProviderNotFound 错误相区分：
//! 前者是配置上的显式缺席，后者是配置错误。

pub mod null;

pub use null::NullFluxPointDistribution;

use ff_foundation::error::FfResult;

use crate::lifecycle::LifecycleState;
use crate::model::PhysicalModel;

// ============================================================
// 通量点缓冲
// ============================================================

/// 逐面通量点缓冲
///
/// 分布阶段就地重排/修正的通量点值。
#[derive(Debug, Clone, PartialEq)]
pub struct FluxPoints {
    values: Vec<f64>,
}

impl FluxPoints {
    /// 创建全零缓冲
    pub fn new(n: usize) -> Self {
        Self {
            values: vec![0.0; n],
        }
    }

    /// 从已有值创建
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// 通量点值（只读）
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// 通量点值（可变）
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// 通量点数量
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================
// 能力接口
// ============================================================

/// 通量点分布能力接口
///
/// 生命周期：Constructed -> (setup) -> Ready -> (unsetup) -> Released。
/// apply 仅在 Ready 状态合法。
pub trait FluxPointDistribution: Send {
    /// 实例名
    fn name(&self) -> &str;

    /// 按活动物理模型准备内部数据
    fn setup(&mut self, model: &dyn PhysicalModel) -> FfResult<()>;

    /// 释放内部数据
    fn unsetup(&mut self) -> FfResult<()>;

    /// 就地重分布通量点
    fn apply(&mut self, points: &mut FluxPoints) -> FfResult<()>;

    /// 当前生命周期状态
    fn lifecycle(&self) -> LifecycleState;
}
