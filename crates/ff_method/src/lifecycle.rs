// crates/ff_method/src/lifecycle.rs

//! 方法实例生命周期状态机
//!
//! 边界条件与通量分布实例共享同一套生命周期：
//!
//! Constructed -> Configured -> Ready -> Released
//!
//! - configure 提供协作对象（边界函数、变量变换）
//! - setup 按活动物理模型分配暂存缓冲并进入 Ready
//! - 逐面操作（set_ghost_state / apply）仅在 Ready 状态合法
//! - unsetup 释放暂存并进入 Released
//!
//! 状态误用是编程契约违规，一律显式返回 [`FfError::Lifecycle`]
//! 而非在未分配的暂存上继续运行。

use ff_foundation::error::{FfError, FfResult};

/// 生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// 已构造，尚未配置
    #[default]
    Constructed,

    /// 已配置，协作对象就位
    Configured,

    /// 已就绪，可执行逐面操作
    Ready,

    /// 已释放，暂存不可用
    Released,
}

impl LifecycleState {
    /// 状态名
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Constructed => "Constructed",
            Self::Configured => "Configured",
            Self::Ready => "Ready",
            Self::Released => "Released",
        }
    }

    /// 契约检查：当前状态必须等于期望状态
    ///
    /// 不满足时返回携带操作名的生命周期错误。
    #[inline]
    pub fn expect(self, expected: LifecycleState, operation: &'static str) -> FfResult<()> {
        if self == expected {
            Ok(())
        } else {
            Err(FfError::lifecycle(
                operation,
                expected.as_str(),
                self.as_str(),
            ))
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================
// 测试
// ============================================================
