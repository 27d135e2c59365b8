// crates/ff_foundation/src/lib.rs

//! FluxForge Foundation Layer
//!
//! 基础层，提供整个项目的基础抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//!
//! # 设计原则
//!
//! 1. **最小依赖**: 仅依赖 thiserror
//! 2. **快速失败**: 配置错误与契约违规一律立即返回错误，不做静默回退
//! 3. **可追溯**: 错误携带定位信息（能力命名空间、面编号、坐标等）
//!
//! # 示例
//!
//! ```
//! use ff_foundation::error::{FfError, FfResult};
//!
//! fn load_method(name: Option<&str>) -> FfResult<&str> {
//!     let name = ff_foundation::require!(name, FfError::missing_config("method"));
//!     Ok(name)
//! }
//!
//! assert!(load_method(None).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

// 重导出常用类型
pub use error::{FfError, FfResult};

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{FfError, FfResult};
    pub use crate::{ensure, require};
}
