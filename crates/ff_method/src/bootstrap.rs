// crates/ff_method/src/bootstrap.rs

//! 方法目录引导
//!
//! 以显式、有序的注册调用填充方法目录，替代按编译单元静态
//! 初始化的自注册：注册顺序确定、单线程完成，引导结束后目录
//! 只读，查找无需同步。
//!
//! 宿主可在内置注册之后继续向目录注册自己的插件变体，
//! 随后冻结目录（按值持有，不再暴露可变引用）。

use ff_foundation::error::FfResult;

use crate::boundary::{BoundaryCondition, DirichletCondition, ZeroGradientCondition};
use crate::flux::{FluxPointDistribution, NullFluxPointDistribution};
use crate::registry::MethodCatalog;

/// 内置方法名：Dirichlet 镜像边界条件
pub const DIRICHLET: &str = "Dirichlet";

/// 内置方法名：零梯度外推边界条件
pub const ZERO_GRADIENT: &str = "ZeroGradient";

/// 内置方法名：空通量点分布
pub const NULL_FLUX_DISTRIBUTION: &str = "Null";

/// 构建并填充内置方法目录
///
/// # 错误
/// 仅在重复注册时失败；内置名称互不相同，正常情况下总是成功。
pub fn builtin_catalog() -> FfResult<MethodCatalog> {
    let mut catalog = MethodCatalog::new();

    catalog.boundary_mut().register(DIRICHLET, |name| {
        Box::new(DirichletCondition::new(name)) as Box<dyn BoundaryCondition>
    })?;
    catalog.boundary_mut().register(ZERO_GRADIENT, |name| {
        Box::new(ZeroGradientCondition::new(name)) as Box<dyn BoundaryCondition>
    })?;

    catalog.flux_mut().register(NULL_FLUX_DISTRIBUTION, |name| {
        Box::new(NullFluxPointDistribution::new(name)) as Box<dyn FluxPointDistribution>
    })?;

    tracing::info!(
        "Builtin method catalog ready: {} boundary conditions, {} flux distributions",
        catalog.boundary().len(),
        catalog.flux().len()
    );
    Ok(catalog)
}

// ============================================================
// 测试
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.boundary().names(), vec![DIRICHLET, ZERO_GRADIENT]);
        assert_eq!(catalog.flux().names(), vec![NULL_FLUX_DISTRIBUTION]);
    }

    #[test]
    fn test_builtin_providers_construct() {
        let catalog = builtin_catalog().unwrap();
        let bc = catalog.create_boundary(DIRICHLET, "inlet").unwrap();
        assert_eq!(bc.name(), "inlet");

        let fd = catalog
            .create_flux_distribution(Some(NULL_FLUX_DISTRIBUTION), "stage")
            .unwrap();
        assert_eq!(fd.name(), "stage");
    }

    #[test]
    fn test_host_can_extend_catalog() {
        let mut catalog = builtin_catalog().unwrap();
        catalog
            .boundary_mut()
            .register("HostVariant", |name| {
                Box::new(ZeroGradientCondition::new(name)) as Box<dyn BoundaryCondition>
            })
            .unwrap();
        assert!(catalog.boundary().contains("HostVariant"));

        // 与内置名称冲突必须失败
        assert!(catalog
            .boundary_mut()
            .register(DIRICHLET, |name| {
                Box::new(ZeroGradientCondition::new(name)) as Box<dyn BoundaryCondition>
            })
            .is_err());
    }
}
