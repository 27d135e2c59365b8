// crates/ff_method/src/lib.rs

//! 数值方法插件层
//!
//! 提供按名称选择与实例化数值方法变体的机制，以及核心的
//! 边界幽灵状态镜像算法：
//! - 物理模型接口 (model)
//! - 状态与边界面数据视图 (state)
//! - 边界函数求值器 (function)
//! - 变量变换 (transform)
//! - 生命周期状态机 (lifecycle)
//! - 提供者注册中心与方法目录 (registry)
//! - 边界条件变体 (boundary) - Dirichlet 镜像、零梯度外推
//! - 通量点分布与空变体 (flux)
//! - 方法选择配置类型 (config)
//! - 目录引导 (bootstrap)
//!
//! # 数据流
//!
//! 宿主求解器 -> 目录按名称查找 -> 构造边界条件实例 ->
//! configure 注入函数与变换 -> setup 按模型分配暂存 ->
//! 逐边界面调用 set_ghost_state -> unsetup 释放。
//!
//! # 并发模型
//!
//! 单个方法实例是单线程同步执行的；目录在引导后只读，
//! 可被多线程并发查找。并行处理边界时每个工作线程持有
//! 自己的实例。

pub mod boundary;
pub mod bootstrap;
pub mod config;
pub mod flux;
pub mod function;
pub mod lifecycle;
pub mod model;
pub mod registry;
pub mod state;
pub mod transform;

// 重导出常用类型
pub use boundary::{BoundaryArgs, BoundaryCondition, DirichletCondition, ZeroGradientCondition};
pub use bootstrap::builtin_catalog;
pub use config::{BoundarySelection, FunctionSpec, MethodSelection, TransformSpec};
pub use flux::{FluxPointDistribution, FluxPoints, NullFluxPointDistribution};
pub use function::{
    BoundaryFunction, ConstantFunction, ExtrapolationMode, FnFunction, TimeSeries,
    TimeSeriesFunction,
};
pub use lifecycle::LifecycleState;
pub use model::{BasicModel, PhysicalModel};
pub use registry::{Factory, MethodCatalog, ProviderRegistry};
pub use state::{BoundaryFace, FaceId, FaceNormals, State};
pub use transform::{IdentityTransform, ScalingTransform, VariableTransform};
