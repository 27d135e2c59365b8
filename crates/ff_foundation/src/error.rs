// crates/ff_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `FfError` 枚举和 `FfResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **不可重试**: 本层所有错误要么是配置期错误（快速失败、中止运行），
//!    要么是编程契约违规（立即暴露），均不可通过重试恢复
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **可定位**: 求值错误携带面编号与坐标，便于诊断
//!
//! # 示例
//!
//! ```
//! use ff_foundation::error::{FfError, FfResult};
//!
//! fn read_method_name() -> FfResult<()> {
//!     Err(FfError::config("边界条件方法名缺失"))
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type FfResult<T> = Result<T, FfError>;

/// FluxForge 错误类型
///
/// 核心错误类型，用于整个项目。注册、查找、求值与生命周期错误
/// 对应方法插件层的四类失败模式。
#[derive(Error, Debug)]
pub enum FfError {
    // ========================================================================
    // 注册中心相关错误
    // ========================================================================

    /// 提供者重复注册
    ///
    /// 同一能力命名空间下名称必须唯一，静默覆盖会导致方法选择不确定。
    #[error("提供者重复注册: {capability}/{name}")]
    DuplicateProvider {
        /// 能力命名空间（如 boundary_condition）
        capability: &'static str,
        /// 冲突的提供者名称
        name: String,
    },

    /// 提供者未注册
    #[error("提供者未注册: {capability}/{name}")]
    ProviderNotFound {
        /// 能力命名空间
        capability: &'static str,
        /// 请求的提供者名称
        name: String,
    },

    // ========================================================================
    // 数值求值与生命周期错误
    // ========================================================================

    /// 边界函数求值失败
    ///
    /// 携带出错的面编号与求值坐标，便于定位配置错误。
    /// 求值是确定性的纯计算，失败意味着配置缺陷，不做回退。
    #[error("边界函数求值失败 (面 {face}, 坐标 {coord:?}): {message}")]
    Evaluation {
        /// 失败原因
        message: String,
        /// 出错的边界面编号
        face: u32,
        /// 求值点坐标
        coord: Vec<f64>,
    },

    /// 生命周期误用
    ///
    /// 在错误的状态下调用操作（如未 setup 就调用 set_ghost_state）。
    #[error("生命周期误用: {operation} 要求状态为 {expected}, 实际为 {actual}")]
    Lifecycle {
        /// 被误用的操作名
        operation: &'static str,
        /// 操作要求的状态
        expected: &'static str,
        /// 调用时的实际状态
        actual: &'static str,
    },

    // ========================================================================
    // 配置与输入错误
    // ========================================================================

    /// 配置错误
    #[error("配置错误: {message}")]
    Config {
        /// 具体错误信息
        message: String,
    },

    /// 缺少配置项
    #[error("缺少必需的配置项: {key}")]
    MissingConfig {
        /// 配置键名
        key: String,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 数组大小不匹配
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: &'static str,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },

    /// 资源未找到
    #[error("资源未找到: {resource}")]
    NotFound {
        /// 资源名称
        resource: String,
    },

    /// 内部错误
    #[error("内部错误: {message}")]
    Internal {
        /// 内部错误描述
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl FfError {
    /// 提供者重复注册
    pub fn duplicate_provider(capability: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateProvider {
            capability,
            name: name.into(),
        }
    }

    /// 提供者未注册
    pub fn provider_not_found(capability: &'static str, name: impl Into<String>) -> Self {
        Self::ProviderNotFound {
            capability,
            name: name.into(),
        }
    }

    /// 求值失败
    pub fn evaluation(message: impl Into<String>, face: u32, coord: Vec<f64>) -> Self {
        Self::Evaluation {
            message: message.into(),
            face,
            coord,
        }
    }

    /// 生命周期误用
    pub fn lifecycle(operation: &'static str, expected: &'static str, actual: &'static str) -> Self {
        Self::Lifecycle {
            operation,
            expected,
            actual,
        }
    }

    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 缺少配置
    pub fn missing_config(key: impl Into<String>) -> Self {
        Self::MissingConfig { key: key.into() }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 数组大小不匹配
    pub fn size_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// 资源未找到
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// 内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl FfError {
    /// 检查数组大小是否匹配
    #[inline]
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> FfResult<()> {
        if expected != actual {
            Err(Self::size_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }
}

// ========================================================================
// 契约检查宏
// ========================================================================

/// 条件不满足时返回指定错误
///
/// # 示例
///
/// ```
/// use ff_foundation::{ensure, error::{FfError, FfResult}};
///
/// fn check(dim: usize) -> FfResult<()> {
///     ensure!((1..=3).contains(&dim), FfError::invalid_input("维度必须为 1..=3"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

/// 解包 Option，为 None 时返回指定错误
///
/// # 示例
///
/// ```
/// use ff_foundation::{require, error::{FfError, FfResult}};
///
/// fn get(opt: Option<i32>) -> FfResult<i32> {
///     let v = require!(opt, FfError::not_found("value"));
///     Ok(v)
/// }
/// ```
#[macro_export]
macro_rules! require {
    ($opt:expr, $err:expr) => {
        match $opt {
            Some(v) => v,
            None => return Err($err),
        }
    };
}

// ========================================================================
// 测试
// ========================================================================
