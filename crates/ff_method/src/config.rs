// crates/ff_method/src/config.rs

//! 方法选择配置类型
//!
//! 本模块定义宿主配置面上的方法选择结构：
//! - FunctionSpec: 边界函数描述，可构建为运行时求值器
//! - TransformSpec: 变量变换描述
//! - BoundarySelection: 单个边界补丁的方法选择
//! - MethodSelection: 整个方法层的选择集合
//!
//! 配置文件的读取与解析不在本层范围内；这里只提供可被 serde
//! 反序列化的类型及其到运行时对象的构建。

use std::sync::Arc;

use ff_foundation::error::{FfError, FfResult};
use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryArgs;
use crate::function::{BoundaryFunction, ConstantFunction, ExtrapolationMode, TimeSeries, TimeSeriesFunction};
use crate::transform::{IdentityTransform, ScalingTransform, VariableTransform};

// ============================================================
// 函数与变换描述
// ============================================================

/// 边界函数描述
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionSpec {
    /// 常值函数
    Constant {
        /// 给定值向量
        values: Vec<f64>,
    },

    /// 时间序列插值
    TimeSeries {
        /// 共享的时间点 [s]（严格单调递增）
        times: Vec<f64>,
        /// 每个输出变量一行值，长度与 times 相同
        values: Vec<Vec<f64>>,
        /// 外推模式
        #[serde(default)]
        extrapolation: ExtrapolationMode,
    },
}

impl FunctionSpec {
    /// 构建运行时求值器
    pub fn build(&self) -> FfResult<Arc<dyn BoundaryFunction>> {
        match self {
            Self::Constant { values } => {
                Ok(Arc::new(ConstantFunction::new(values.clone())?))
            }
            Self::TimeSeries {
                times,
                values,
                extrapolation,
            } => {
                if values.is_empty() {
                    return Err(FfError::config("时间序列函数至少需要一个变量的值"));
                }
                let series = values
                    .iter()
                    .map(|row| {
                        TimeSeries::new(times.clone(), row.clone())
                            .map(|ts| ts.with_extrapolation(*extrapolation))
                    })
                    .collect::<FfResult<Vec<_>>>()?;
                Ok(Arc::new(TimeSeriesFunction::new(series)?))
            }
        }
    }
}

/// 变量变换描述
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransformSpec {
    /// 恒等变换
    #[default]
    Identity,

    /// 逐分量缩放
    Scaling {
        /// 缩放系数
        scale: Vec<f64>,
        /// 可选偏移
        #[serde(default)]
        offset: Option<Vec<f64>>,
    },
}

impl TransformSpec {
    /// 构建运行时变换
    pub fn build(&self) -> FfResult<Arc<dyn VariableTransform>> {
        match self {
            Self::Identity => Ok(Arc::new(IdentityTransform)),
            Self::Scaling { scale, offset } => {
                let mut t = ScalingTransform::new(scale.clone())?;
                if let Some(offset) = offset {
                    t = t.with_offset(offset.clone())?;
                }
                Ok(Arc::new(t))
            }
        }
    }
}

// ============================================================
// 方法选择
// ============================================================

/// 单个边界补丁的方法选择
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundarySelection {
    /// 边界补丁名（实例名）
    pub name: String,

    /// 注册中心里的方法名（如 "Dirichlet"）
    pub method: String,

    /// 边界函数描述（需要给定值的方法必填）
    #[serde(default)]
    pub function: Option<FunctionSpec>,

    /// 变量变换描述
    #[serde(default)]
    pub transform: Option<TransformSpec>,
}

impl BoundarySelection {
    /// 创建选择
    pub fn new(name: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: method.into(),
            function: None,
            transform: None,
        }
    }

    /// 设置边界函数
    pub fn with_function(mut self, function: FunctionSpec) -> Self {
        self.function = Some(function);
        self
    }

    /// 设置变量变换
    pub fn with_transform(mut self, transform: TransformSpec) -> Self {
        self.transform = Some(transform);
        self
    }

    /// 构建 configure 阶段的协作对象
    ///
    /// 未给出函数时返回空参数；是否接受由具体边界类型在
    /// configure 时决定。
    pub fn build_args(&self) -> FfResult<BoundaryArgs> {
        match &self.function {
            None => Ok(BoundaryArgs::none()),
            Some(spec) => {
                let function = spec.build()?;
                let transform = self
                    .transform
                    .clone()
                    .unwrap_or_default()
                    .build()?;
                Ok(BoundaryArgs::new(function, transform))
            }
        }
    }
}

/// 方法层选择集合
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MethodSelection {
    /// 各边界补丁的方法选择
    #[serde(default)]
    pub boundary: Vec<BoundarySelection>,

    /// 通量点分布方法名；None 表示该阶段被禁用（使用空变体）
    #[serde(default)]
    pub flux_distribution: Option<String>,
}

// ============================================================
// 测试
// ============================================================
