// crates/ff_method/src/model.rs

//! 物理模型接口
//!
//! 本模块定义方法层对外部物理模型的最小依赖：
//! - PhysicalModel: 物理模型接口（维度、变量数、当前时间）
//! - BasicModel: 简单的具体实现，供宿主与测试使用
//!
//! 方法层只在两处查询模型：setup 时确定暂存缓冲尺寸，
//! set_ghost_state 时为求值输入打上时间戳。方程组、变量变换
//! 等模型内部结构均不在本层范围内。

use ff_foundation::{ensure, error::{FfError, FfResult}};

/// 物理模型接口
///
/// 宿主求解器实现本接口，向方法层暴露空间维度、状态变量数
/// 与当前模拟时间。
pub trait PhysicalModel: Send + Sync {
    /// 空间维度 (1..=3)
    fn dimension(&self) -> usize;

    /// 状态变量数
    fn nb_variables(&self) -> usize;

    /// 当前模拟时间 [s]
    fn current_time(&self) -> f64;
}

/// 简单物理模型
///
/// 固定维度与变量数，时钟可推进。用于测试和不需要完整
/// 模型栈的宿主。
#[derive(Debug, Clone)]
pub struct BasicModel {
    dim: usize,
    nb_variables: usize,
    time: f64,
}

impl BasicModel {
    /// 创建模型
    ///
    /// # 参数
    /// - `dim`: 空间维度，必须在 1..=3
    /// - `nb_variables`: 状态变量数，必须大于 0
    pub fn new(dim: usize, nb_variables: usize) -> FfResult<Self> {
        ensure!(
            (1..=3).contains(&dim),
            FfError::invalid_input(format!("空间维度必须在 1..=3, 实际为 {dim}"))
        );
        ensure!(
            nb_variables > 0,
            FfError::invalid_input("状态变量数必须大于 0")
        );
        Ok(Self {
            dim,
            nb_variables,
            time: 0.0,
        })
    }

    /// 设置当前模拟时间
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// 推进模拟时间
    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
    }
}

impl PhysicalModel for BasicModel {
    #[inline]
    fn dimension(&self) -> usize {
        self.dim
    }

    #[inline]
    fn nb_variables(&self) -> usize {
        self.nb_variables
    }

    #[inline]
    fn current_time(&self) -> f64 {
        self.time
    }
}

// ========================================================================
// 测试
// ========================================================================
