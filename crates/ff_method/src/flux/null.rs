// crates/ff_method/src/flux/null.rs

//! 空通量点分布
//!
//! 通量点重分布阶段被配置禁用时的安全默认实现。
//! 所有操作是已验证的空操作：生命周期契约照常检查，
//! apply 成功返回且不改变任何外部状态。

use ff_foundation::error::FfResult;

use super::{FluxPointDistribution, FluxPoints};
use crate::lifecycle::LifecycleState;
use crate::model::PhysicalModel;

/// 空通量点分布
pub struct NullFluxPointDistribution {
    name: String,
    state: LifecycleState,
}

impl NullFluxPointDistribution {
    /// 构造空变体
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: LifecycleState::Constructed,
        }
    }
}

impl FluxPointDistribution for NullFluxPointDistribution {
    fn name(&self) -> &str {
        &self.name
    }

    fn setup(&mut self, _model: &dyn PhysicalModel) -> FfResult<()> {
        self.state.expect(LifecycleState::Constructed, "setup")?;
        self.state = LifecycleState::Ready;
        Ok(())
    }

    fn unsetup(&mut self) -> FfResult<()> {
        self.state.expect(LifecycleState::Ready, "unsetup")?;
        self.state = LifecycleState::Released;
        Ok(())
    }

    fn apply(&mut self, _points: &mut FluxPoints) -> FfResult<()> {
        // 空操作：缓冲保持原样
        self.state.expect(LifecycleState::Ready, "apply")
    }

    fn lifecycle(&self) -> LifecycleState {
        self.state
    }
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BasicModel;

    #[test]
    fn test_null_is_observable_noop() {
        let model = BasicModel::new(2, 2).unwrap();
        let mut null = NullFluxPointDistribution::new("disabled");
        null.setup(&model).unwrap();

        let mut points = FluxPoints::from_values(vec![1.0, -2.0, 3.5]);
        let before = points.clone();

        null.apply(&mut points).unwrap();
        null.apply(&mut points).unwrap();

        assert_eq!(points, before);
        null.unsetup().unwrap();
    }

    #[test]
    fn test_null_still_checks_lifecycle() {
        let mut null = NullFluxPointDistribution::new("strict");
        let mut points = FluxPoints::new(4);
        assert!(null.apply(&mut points).is_err());

        let model = BasicModel::new(1, 1).unwrap();
        null.setup(&model).unwrap();
        assert!(null.apply(&mut points).is_ok());
        null.unsetup().unwrap();
        assert!(null.apply(&mut points).is_err());
    }
}
