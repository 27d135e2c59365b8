// crates/ff_method/src/registry.rs

//! 命令/提供者注册中心
//!
//! 本模块提供按名称选择数值方法变体的机制：
//! - Factory: 构造闭包，按实例名产出新实例
//! - ProviderRegistry: 单一能力命名空间内的名称 -> 工厂映射
//! - MethodCatalog: 按能力分组的注册中心集合
//!
//! # 设计思路
//!
//! 1. 宿主求解器只认识配置提供的字符串名称，不认识具体类型
//! 2. 注册在启动引导阶段单线程完成，此后目录只读，
//!    多线程查找无需加锁
//! 3. 重复注册是致命错误：静默覆盖会导致方法选择不确定
//! 4. create 每次返回独立的新实例，不缓存、不共享
//!
//! # 使用方式
//!
//! ```
//! use ff_method::boundary::BoundaryCondition;
//! use ff_method::bootstrap::builtin_catalog;
//!
//! let catalog = builtin_catalog().unwrap();
//! let bc = catalog.create_boundary("Dirichlet", "inlet").unwrap();
//! assert_eq!(bc.name(), "inlet");
//! ```

use std::collections::HashMap;

use ff_foundation::error::{FfError, FfResult};

use crate::boundary::BoundaryCondition;
use crate::flux::{FluxPointDistribution, NullFluxPointDistribution};

// ============================================================
// 工厂与注册中心
// ============================================================

/// 构造闭包
///
/// 给定实例名，产出一个新的具体方法实例。协作对象在随后的
/// configure 阶段注入。
pub type Factory<T> = Box<dyn Fn(&str) -> Box<T> + Send + Sync>;

/// 提供者注册中心
///
/// 单一能力命名空间（如 "boundary_condition"）内名称到工厂的
/// 映射。名称在命名空间内唯一。
pub struct ProviderRegistry<T: ?Sized> {
    capability: &'static str,
    factories: HashMap<String, Factory<T>>,
    /// 注册顺序（用于确定性列举）
    order: Vec<String>,
}

impl<T: ?Sized> ProviderRegistry<T> {
    /// 创建空注册中心
    pub fn new(capability: &'static str) -> Self {
        Self {
            capability,
            factories: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// 能力命名空间
    pub fn capability(&self) -> &'static str {
        self.capability
    }

    /// 注册提供者
    ///
    /// # 错误
    /// 同名提供者已存在时返回 [`FfError::DuplicateProvider`]。
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> FfResult<()>
    where
        F: Fn(&str) -> Box<T> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(FfError::duplicate_provider(self.capability, name));
        }
        tracing::debug!("Provider registered: {}/{}", self.capability, name);
        self.order.push(name.clone());
        self.factories.insert(name, Box::new(factory));
        Ok(())
    }

    /// 按名称构造新实例
    ///
    /// # 参数
    /// - `name`: 提供者名称（配置面上的方法名）
    /// - `instance`: 新实例的名称（如边界补丁名）
    ///
    /// # 错误
    /// 名称未注册时返回 [`FfError::ProviderNotFound`]。
    pub fn create(&self, name: &str, instance: &str) -> FfResult<Box<T>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| FfError::provider_not_found(self.capability, name))?;
        Ok(factory(instance))
    }

    /// 名称是否已注册
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 按注册顺序列举提供者名称
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// 已注册的提供者数量
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

// ============================================================
// 方法目录
// ============================================================

/// 方法目录
///
/// 按能力分组的注册中心集合。启动引导阶段填充一次，
/// 求解期间只读。
pub struct MethodCatalog {
    boundary: ProviderRegistry<dyn BoundaryCondition>,
    flux: ProviderRegistry<dyn FluxPointDistribution>,
}

impl MethodCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self {
            boundary: ProviderRegistry::new("boundary_condition"),
            flux: ProviderRegistry::new("flux_distribution"),
        }
    }

    /// 边界条件注册中心
    pub fn boundary(&self) -> &ProviderRegistry<dyn BoundaryCondition> {
        &self.boundary
    }

    /// 边界条件注册中心（可变，引导阶段使用）
    pub fn boundary_mut(&mut self) -> &mut ProviderRegistry<dyn BoundaryCondition> {
        &mut self.boundary
    }

    /// 通量分布注册中心
    pub fn flux(&self) -> &ProviderRegistry<dyn FluxPointDistribution> {
        &self.flux
    }

    /// 通量分布注册中心（可变，引导阶段使用）
    pub fn flux_mut(&mut self) -> &mut ProviderRegistry<dyn FluxPointDistribution> {
        &mut self.flux
    }

    /// 按方法名构造边界条件实例
    pub fn create_boundary(&self, method: &str, instance: &str) -> FfResult<Box<dyn BoundaryCondition>> {
        self.boundary.create(method, instance)
    }

    /// 构造通量分布实例
    ///
    /// 区分"配置中显式缺席"与"配置错误"：
    /// - `None`: 该流水线阶段被配置禁用，返回空变体
    /// - `Some(name)`: 按名称查找，未注册则返回 [`FfError::ProviderNotFound`]
    pub fn create_flux_distribution(
        &self,
        method: Option<&str>,
        instance: &str,
    ) -> FfResult<Box<dyn FluxPointDistribution>> {
        match method {
            None => Ok(Box::new(NullFluxPointDistribution::new(instance))),
            Some(name) => self.flux.create(name, instance),
        }
    }
}

impl Default for MethodCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// 测试
// ============================================================
