// crates/ff_method/src/function.rs

//! 边界函数求值器
//!
//! 本模块定义用户指定的边界函数接口及内置实现：
//! - BoundaryFunction: 求值器接口，f: R^(dim+1) -> R^nb_variables
//! - ConstantFunction: 常值函数
//! - TimeSeriesFunction: 按变量分量的时间序列插值
//! - FnFunction: 闭包适配器，接入宿主自定义求值器
//!
//! 输入向量的前 dim 个分量为空间坐标，最后一个分量为模拟时间。
//! 求值是确定性的纯计算，失败视为配置缺陷，直接向上传播。

use ff_foundation::{ensure, error::{FfError, FfResult}};
use serde::{Deserialize, Serialize};

// ============================================================
// 求值器接口
// ============================================================

/// 边界函数求值器接口
///
/// 将 (空间坐标, 时间) 映射为给定值向量。实现必须是纯函数：
/// 相同输入总是产生相同输出。
pub trait BoundaryFunction: Send + Sync {
    /// 输出向量长度
    fn nb_outputs(&self) -> usize;

    /// 求值
    ///
    /// # 参数
    /// - `input`: 长度 dim+1，前 dim 个为坐标，最后一个为时间 [s]
    /// - `output`: 长度必须等于 `nb_outputs()`
    fn evaluate(&self, input: &[f64], output: &mut [f64]) -> FfResult<()>;
}

// ============================================================
// 常值函数
// ============================================================

/// 常值边界函数
///
/// 对任意输入返回同一组值。
#[derive(Debug, Clone)]
pub struct ConstantFunction {
    values: Vec<f64>,
}

impl ConstantFunction {
    /// 创建常值函数
    pub fn new(values: Vec<f64>) -> FfResult<Self> {
        ensure!(
            !values.is_empty(),
            FfError::invalid_input("常值边界函数的值向量不能为空")
        );
        Ok(Self { values })
    }
}

impl BoundaryFunction for ConstantFunction {
    fn nb_outputs(&self) -> usize {
        self.values.len()
    }

    fn evaluate(&self, _input: &[f64], output: &mut [f64]) -> FfResult<()> {
        FfError::check_size("function output", self.values.len(), output.len())?;
        output.copy_from_slice(&self.values);
        Ok(())
    }
}

// ============================================================
// 时间序列
// ============================================================

/// 外推模式
///
/// 定义当查询时间超出数据范围时的处理方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolationMode {
    /// 截断模式：超出范围时返回边界值
    #[default]
    Clamp,

    /// 线性外推：使用首/末两个点的斜率延伸
    Linear,

    /// 循环模式：周期性重复数据
    ///
    /// t -> t_start + (t - t_start) mod (t_end - t_start)
    Cyclic,
}

/// 时间序列数据
///
/// 存储时间-值对，提供线性插值和外推功能。
///
/// # 约束
///
/// - 时间数组必须严格单调递增
/// - 时间和值数组长度必须相等且非空
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeries {
    /// 时间点 [s]（严格单调递增）
    times: Vec<f64>,
    /// 对应的值
    values: Vec<f64>,
    /// 外推模式
    extrap_mode: ExtrapolationMode,
}

impl TimeSeries {
    /// 从时间和值数组创建时间序列
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> FfResult<Self> {
        FfError::check_size("timeseries values", times.len(), values.len())?;
        ensure!(
            !times.is_empty(),
            FfError::invalid_input("时间序列不能为空")
        );
        ensure!(
            times.windows(2).all(|w| w[0] < w[1]),
            FfError::invalid_input("时间序列的时间点必须严格单调递增")
        );
        Ok(Self {
            times,
            values,
            extrap_mode: ExtrapolationMode::default(),
        })
    }

    /// 从 (时间, 值) 点对创建
    pub fn from_points(points: Vec<(f64, f64)>) -> FfResult<Self> {
        let (times, values) = points.into_iter().unzip();
        Self::new(times, values)
    }

    /// 设置外推模式
    pub fn with_extrapolation(mut self, mode: ExtrapolationMode) -> Self {
        self.extrap_mode = mode;
        self
    }

    /// 数据点数量
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// 是否为空（构造保证非空，保留接口一致性）
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// 在时间 t 处插值
    ///
    /// 区间内线性插值，区间外按外推模式处理。
    pub fn interpolate(&self, t: f64) -> f64 {
        let n = self.times.len();
        if n == 1 {
            return self.values[0];
        }

        let t_start = self.times[0];
        let t_end = self.times[n - 1];

        let t = if t < t_start || t > t_end {
            match self.extrap_mode {
                ExtrapolationMode::Clamp => t.clamp(t_start, t_end),
                ExtrapolationMode::Linear => return self.extrapolate_linear(t),
                ExtrapolationMode::Cyclic => {
                    let period = t_end - t_start;
                    t_start + (t - t_start).rem_euclid(period)
                }
            }
        } else {
            t
        };

        // partition_point 返回第一个 time > t 的位置
        let hi = self.times.partition_point(|&ti| ti <= t).min(n - 1);
        let lo = hi.saturating_sub(1);
        if lo == hi {
            return self.values[lo];
        }

        let t0 = self.times[lo];
        let t1 = self.times[hi];
        let alpha = (t - t0) / (t1 - t0);
        self.values[lo] * (1.0 - alpha) + self.values[hi] * alpha
    }

    fn extrapolate_linear(&self, t: f64) -> f64 {
        let n = self.times.len();
        let (t0, t1, v0, v1) = if t < self.times[0] {
            (self.times[0], self.times[1], self.values[0], self.values[1])
        } else {
            (
                self.times[n - 2],
                self.times[n - 1],
                self.values[n - 2],
                self.values[n - 1],
            )
        };
        let slope = (v1 - v0) / (t1 - t0);
        if t < self.times[0] {
            v0 + slope * (t - t0)
        } else {
            v1 + slope * (t - t1)
        }
    }
}

/// 时间序列边界函数
///
/// 每个输出变量对应一条时间序列，仅依赖输入向量的时间分量
/// （最后一个分量），空间坐标被忽略。
#[derive(Debug, Clone)]
pub struct TimeSeriesFunction {
    series: Vec<TimeSeries>,
}

impl TimeSeriesFunction {
    /// 创建时间序列函数
    ///
    /// # 参数
    /// - `series`: 每个输出变量一条序列，不能为空
    pub fn new(series: Vec<TimeSeries>) -> FfResult<Self> {
        ensure!(
            !series.is_empty(),
            FfError::invalid_input("时间序列边界函数至少需要一条序列")
        );
        Ok(Self { series })
    }
}

impl BoundaryFunction for TimeSeriesFunction {
    fn nb_outputs(&self) -> usize {
        self.series.len()
    }

    fn evaluate(&self, input: &[f64], output: &mut [f64]) -> FfResult<()> {
        FfError::check_size("function output", self.series.len(), output.len())?;
        let t = *input
            .last()
            .ok_or_else(|| FfError::invalid_input("求值输入向量为空，缺少时间分量"))?;

        for (out, series) in output.iter_mut().zip(&self.series) {
            *out = series.interpolate(t);
        }
        Ok(())
    }
}

// ============================================================
// 闭包适配器
// ============================================================

/// 闭包边界函数
///
/// 将宿主提供的任意纯函数适配为 [`BoundaryFunction`]。
pub struct FnFunction<F> {
    nb_outputs: usize,
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(&[f64], &mut [f64]) -> FfResult<()> + Send + Sync,
{
    /// 创建闭包函数
    pub fn new(nb_outputs: usize, f: F) -> Self {
        Self { nb_outputs, f }
    }
}

impl<F> BoundaryFunction for FnFunction<F>
where
    F: Fn(&[f64], &mut [f64]) -> FfResult<()> + Send + Sync,
{
    fn nb_outputs(&self) -> usize {
        self.nb_outputs
    }

    fn evaluate(&self, input: &[f64], output: &mut [f64]) -> FfResult<()> {
        FfError::check_size("function output", self.nb_outputs, output.len())?;
        (self.f)(input, output)
    }
}

// ============================================================
// 测试
// ============================================================
