// crates/ff_method/src/boundary/traits.rs

//! 边界条件能力接口
//!
//! 定义宿主求解器驱动的生命周期契约：
//!
//! construct -> configure -> setup -> {set_ghost_state}* -> unsetup -> drop
//!
//! configure 在 setup 之前由宿主调用，注入配置指定的边界函数与
//! 变量变换。set_ghost_state 在每个求解迭代中按边界面顺序调用，
//! 仅在 Ready 状态合法。

use std::sync::Arc;

use ff_foundation::error::FfResult;

use crate::function::BoundaryFunction;
use crate::lifecycle::LifecycleState;
use crate::model::PhysicalModel;
use crate::state::BoundaryFace;
use crate::transform::VariableTransform;

/// configure 阶段注入的协作对象
///
/// 不需要函数或变换的边界类型（如零梯度外推）使用 [`BoundaryArgs::none`]。
#[derive(Clone, Default)]
pub struct BoundaryArgs {
    /// 边界函数求值器
    pub function: Option<Arc<dyn BoundaryFunction>>,
    /// 输入变量到更新变量的变换
    pub transform: Option<Arc<dyn VariableTransform>>,
}

impl BoundaryArgs {
    /// 提供函数与变换
    pub fn new(function: Arc<dyn BoundaryFunction>, transform: Arc<dyn VariableTransform>) -> Self {
        Self {
            function: Some(function),
            transform: Some(transform),
        }
    }

    /// 不提供任何协作对象
    pub fn none() -> Self {
        Self::default()
    }
}

/// 边界条件能力接口
///
/// 所有边界条件变体实现本接口；宿主代码不对具体变体做特殊处理。
pub trait BoundaryCondition: Send {
    /// 实例名（如边界补丁名）
    fn name(&self) -> &str;

    /// 注入协作对象
    ///
    /// 仅在 Constructed 状态合法。
    fn configure(&mut self, args: BoundaryArgs) -> FfResult<()>;

    /// 按活动物理模型分配暂存缓冲
    ///
    /// 仅在 Configured 状态合法，成功后进入 Ready。
    fn setup(&mut self, model: &dyn PhysicalModel) -> FfResult<()>;

    /// 释放暂存缓冲
    ///
    /// 仅在 Ready 状态合法，成功后进入 Released。
    fn unsetup(&mut self) -> FfResult<()>;

    /// 由内部状态计算幽灵状态并就地写入
    ///
    /// 仅在 Ready 状态合法。内部状态与几何数据只读，
    /// 唯一的副作用是幽灵状态被覆写。
    fn set_ghost_state(&mut self, face: &mut BoundaryFace, model: &dyn PhysicalModel)
        -> FfResult<()>;

    /// 当前生命周期状态
    fn lifecycle(&self) -> LifecycleState;
}
