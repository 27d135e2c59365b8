// crates/ff_method/src/boundary/zero_gradient.rs

//! 零梯度外推边界条件
//!
//! 幽灵状态直接复制内部状态（一阶外推），用于自由出流等
//! 不给定边界值的场合。不需要边界函数与变量变换。

use ff_foundation::error::FfResult;

use super::traits::{BoundaryArgs, BoundaryCondition};
use crate::lifecycle::LifecycleState;
use crate::model::PhysicalModel;
use crate::state::BoundaryFace;

/// 零梯度外推边界条件
///
/// 与 Dirichlet 变体实现同一能力接口：宿主按名称选择，
/// 不做特殊处理。
pub struct ZeroGradientCondition {
    name: String,
    state: LifecycleState,
}

impl ZeroGradientCondition {
    /// 构造（尚未配置）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: LifecycleState::Constructed,
        }
    }
}

impl BoundaryCondition for ZeroGradientCondition {
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&mut self, _args: BoundaryArgs) -> FfResult<()> {
        // 无需协作对象，仅推进状态机
        self.state
            .expect(LifecycleState::Constructed, "configure")?;
        self.state = LifecycleState::Configured;
        Ok(())
    }

    fn setup(&mut self, _model: &dyn PhysicalModel) -> FfResult<()> {
        self.state.expect(LifecycleState::Configured, "setup")?;
        self.state = LifecycleState::Ready;
        Ok(())
    }

    fn unsetup(&mut self) -> FfResult<()> {
        self.state.expect(LifecycleState::Ready, "unsetup")?;
        self.state = LifecycleState::Released;
        Ok(())
    }

    fn set_ghost_state(
        &mut self,
        face: &mut BoundaryFace,
        _model: &dyn PhysicalModel,
    ) -> FfResult<()> {
        self.state
            .expect(LifecycleState::Ready, "set_ghost_state")?;
        let (interior, ghost) = face.split_mut();
        ghost.values_mut().copy_from_slice(interior.values());
        Ok(())
    }

    fn lifecycle(&self) -> LifecycleState {
        self.state
    }
}

// ============================================================
// 测试
// ============================================================
