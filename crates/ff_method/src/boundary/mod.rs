// crates/ff_method/src/boundary/mod.rs

//! 边界条件模块
//!
//! 本模块提供有限体积求解中的边界条件处理功能：
//!
//! # 子模块
//!
//! - [`traits`]: 边界条件能力接口与配置参数
//! - [`dirichlet`]: Dirichlet 镜像边界条件（核心数值算法）
//! - [`zero_gradient`]: 零梯度外推边界条件
//!
//! # 主要类型
//!
//! - [`BoundaryCondition`]: 能力接口（configure / setup / set_ghost_state / unsetup）
//! - [`BoundaryArgs`]: configure 阶段注入的协作对象
//! - [`DirichletCondition`]: 在面中点保持给定值的镜像边界条件
//! - [`ZeroGradientCondition`]: 一阶外推出流边界条件
//!
//! # 设计思路
//!
//! 各边界类型是实现同一能力接口的独立变体，通过注册中心按名称
//! 选择并组合，而不是从公共基类继承。新增边界类型只需实现接口
//! 并在引导阶段注册。

pub mod dirichlet;
pub mod traits;
pub mod zero_gradient;

pub use dirichlet::DirichletCondition;
pub use traits::{BoundaryArgs, BoundaryCondition};
pub use zero_gradient::ZeroGradientCondition;
