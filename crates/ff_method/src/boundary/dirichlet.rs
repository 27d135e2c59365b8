// crates/ff_method/src/boundary/dirichlet.rs

//! Dirichlet 镜像边界条件
//!
//! 本模块实现有限体积 Dirichlet 镜像算法：
//! 由内部单元状态与用户给定的边界函数推导幽灵状态，
//! 使面中点处内外状态的平均值等于给定值。
//!
//! # 算法
//!
//! 1. 取面的内部状态 Si 与幽灵状态 Sg
//! 2. 边界点 b = 0.5 * (Si 坐标 + Sg 坐标)
//! 3. 求值输入 = [b 的各分量, 当前模拟时间]
//! 4. 边界函数求值得到原始给定值
//! 5. 变量变换转换为内部状态表示 Sp
//! 6. Sg = 2*Sp - Si，就地写入
//!
//! 线性插值保证 0.5*(Si+Sg) = Sp，即边界点处一阶精度地
//! 保持给定值。幽灵单元没有物理网格，仅用于封闭模板。
//!
//! 注意：边界点取内外坐标中点而非真实面形心，是镜像格式的
//! 既有建模选择，保持原样。

use std::sync::Arc;

use ff_foundation::{ensure, require, error::{FfError, FfResult}};

use super::traits::{BoundaryArgs, BoundaryCondition};
use crate::function::BoundaryFunction;
use crate::lifecycle::LifecycleState;
use crate::model::PhysicalModel;
use crate::state::BoundaryFace;
use crate::transform::VariableTransform;

/// Dirichlet 镜像边界条件
///
/// 暂存缓冲在 setup 时按活动物理模型的维度与变量数一次性分配，
/// 由实例独占，跨面调用复用；并行处理边界时每个工作线程必须
/// 持有自己的实例。
pub struct DirichletCondition {
    name: String,
    state: LifecycleState,
    function: Option<Arc<dyn BoundaryFunction>>,
    transform: Option<Arc<dyn VariableTransform>>,
    /// 求值输入暂存，长度 dim+1（坐标 + 时间）
    variables: Vec<f64>,
    /// 边界点坐标暂存，长度 dim
    b_coord: Vec<f64>,
    /// 边界函数原始输出暂存
    input: Vec<f64>,
    /// 变换后的给定内部状态暂存
    prescribed: Vec<f64>,
}

impl DirichletCondition {
    /// 构造（尚未配置）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: LifecycleState::Constructed,
            function: None,
            transform: None,
            variables: Vec::new(),
            b_coord: Vec::new(),
            input: Vec::new(),
            prescribed: Vec::new(),
        }
    }
}

impl BoundaryCondition for DirichletCondition {
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&mut self, args: BoundaryArgs) -> FfResult<()> {
        self.state
            .expect(LifecycleState::Constructed, "configure")?;
        let function = require!(args.function, FfError::missing_config("boundary function"));
        let transform = require!(args.transform, FfError::missing_config("variable transform"));
        self.function = Some(function);
        self.transform = Some(transform);
        self.state = LifecycleState::Configured;
        Ok(())
    }

    fn setup(&mut self, model: &dyn PhysicalModel) -> FfResult<()> {
        self.state.expect(LifecycleState::Configured, "setup")?;
        let dim = model.dimension();
        let nb_variables = model.nb_variables();

        let function = require!(
            self.function.as_ref(),
            FfError::internal("configure 后边界函数缺失")
        );

        self.variables = vec![0.0; dim + 1];
        self.b_coord = vec![0.0; dim];
        self.input = vec![0.0; function.nb_outputs()];
        self.prescribed = vec![0.0; nb_variables];

        tracing::debug!(
            "Boundary condition ready: {} (dim={}, nb_variables={})",
            self.name,
            dim,
            nb_variables
        );
        self.state = LifecycleState::Ready;
        Ok(())
    }

    fn unsetup(&mut self) -> FfResult<()> {
        self.state.expect(LifecycleState::Ready, "unsetup")?;
        self.variables = Vec::new();
        self.b_coord = Vec::new();
        self.input = Vec::new();
        self.prescribed = Vec::new();
        self.state = LifecycleState::Released;
        Ok(())
    }

    fn set_ghost_state(
        &mut self,
        face: &mut BoundaryFace,
        model: &dyn PhysicalModel,
    ) -> FfResult<()> {
        self.state
            .expect(LifecycleState::Ready, "set_ghost_state")?;

        let dim = self.b_coord.len();
        let face_id = face.id();
        let (interior, ghost) = face.split_mut();

        FfError::check_size("interior coords", dim, interior.dimension())?;
        FfError::check_size("prescribed state", self.prescribed.len(), interior.nb_variables())?;

        // 边界点：内部与幽灵坐标的中点
        let xi = interior.coordinates();
        let xg = ghost.coordinates();
        for i in 0..dim {
            self.b_coord[i] = 0.5 * (xi[i] + xg[i]);
        }

        // 求值输入：坐标分量 + 当前模拟时间
        self.variables[..dim].copy_from_slice(&self.b_coord);
        self.variables[dim] = model.current_time();

        // 边界函数求值，失败时携带面编号与坐标上抛
        let function = require!(
            self.function.as_ref(),
            FfError::internal("Ready 状态下边界函数缺失")
        );
        function
            .evaluate(&self.variables, &mut self.input)
            .map_err(|e| {
                FfError::evaluation(e.to_string(), face_id.0, self.b_coord.clone())
            })?;
        ensure!(
            self.input.iter().all(|v| v.is_finite()),
            FfError::evaluation("边界函数输出非有限值", face_id.0, self.b_coord.clone())
        );

        // 转换为内部更新变量表示
        let transform = require!(
            self.transform.as_ref(),
            FfError::internal("Ready 状态下变量变换缺失")
        );
        transform.transform(&self.input, &mut self.prescribed)?;

        // 镜像：Sg = 2*Sp - Si，保证 0.5*(Si+Sg) = Sp
        let interior_values = interior.values();
        for (i, g) in ghost.values_mut().iter_mut().enumerate() {
            *g = 2.0 * self.prescribed[i] - interior_values[i];
        }
        Ok(())
    }

    fn lifecycle(&self) -> LifecycleState {
        self.state
    }
}

// ============================================================
// 测试
// ============================================================
