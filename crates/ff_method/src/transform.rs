// crates/ff_method/src/transform.rs

//! 变量变换
//!
//! 本模块定义给定值到求解器内部更新变量表示的转换接口：
//! - VariableTransform: 变换接口，方法层不检查其内部结构
//! - IdentityTransform: 恒等变换
//! - ScalingTransform: 逐分量缩放（含偏移），用于量纲化/无量纲化转换
//!
//! 输入变量（用户在配置中给定的量）与更新变量（求解器内部演化的量）
//! 不一定一致，变换由物理模型侧提供，方法层只负责调用。

use ff_foundation::error::{FfError, FfResult};

/// 变量变换接口
///
/// 将原始给定值向量转换为求解器内部状态表示。
pub trait VariableTransform: Send + Sync {
    /// 执行变换
    ///
    /// # 参数
    /// - `input`: 原始给定值
    /// - `output`: 内部状态表示，长度由调用方按变量数分配
    fn transform(&self, input: &[f64], output: &mut [f64]) -> FfResult<()>;
}

/// 恒等变换
///
/// 给定值即内部表示。
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl VariableTransform for IdentityTransform {
    fn transform(&self, input: &[f64], output: &mut [f64]) -> FfResult<()> {
        FfError::check_size("transform output", input.len(), output.len())?;
        output.copy_from_slice(input);
        Ok(())
    }
}

/// 逐分量缩放变换
///
/// output[i] = scale[i] * input[i] + offset[i]。
/// 典型用途是无量纲给定值到有量纲内部状态的转换。
#[derive(Debug, Clone)]
pub struct ScalingTransform {
    scale: Vec<f64>,
    offset: Vec<f64>,
}

impl ScalingTransform {
    /// 创建缩放变换（偏移为零）
    pub fn new(scale: Vec<f64>) -> FfResult<Self> {
        ff_foundation::ensure!(
            !scale.is_empty(),
            FfError::invalid_input("缩放系数向量不能为空")
        );
        let offset = vec![0.0; scale.len()];
        Ok(Self { scale, offset })
    }

    /// 设置偏移向量
    pub fn with_offset(mut self, offset: Vec<f64>) -> FfResult<Self> {
        FfError::check_size("transform offset", self.scale.len(), offset.len())?;
        self.offset = offset;
        Ok(self)
    }
}

impl VariableTransform for ScalingTransform {
    fn transform(&self, input: &[f64], output: &mut [f64]) -> FfResult<()> {
        FfError::check_size("transform input", self.scale.len(), input.len())?;
        FfError::check_size("transform output", self.scale.len(), output.len())?;
        for i in 0..input.len() {
            output[i] = self.scale[i] * input[i] + self.offset[i];
        }
        Ok(())
    }
}

// ============================================================
// 测试
// ============================================================
