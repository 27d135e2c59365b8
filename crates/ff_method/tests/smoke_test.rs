// crates/ff_method/tests/smoke_test.rs

//! 快速冒烟测试
//!
//! 验证核心组件可以正确初始化和基本运行：
//! 目录引导、按名称实例化、完整生命周期、镜像恒等式。
//! 这些测试应该快速完成（<1秒），用于 CI 快速反馈。

use ff_method::{
    builtin_catalog, BasicModel, BoundaryCondition, BoundaryFace, BoundarySelection, FaceId,
    FluxPointDistribution, FluxPoints, FunctionSpec, PhysicalModel, State,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// ============================================================
// 目录到幽灵状态的完整路径
// ============================================================

#[test]
fn test_catalog_to_ghost_state() {
    // 规格化算例：dim=2, Si=[1,2], xi=[2,0], xg=[0,0],
    // f≡[3,3], 恒等变换 => 边界点 [1,0], 幽灵 [5,4]
    let catalog = builtin_catalog().unwrap();
    let model = BasicModel::new(2, 2).unwrap();

    let selection = BoundarySelection::new("inlet", "Dirichlet").with_function(
        FunctionSpec::Constant {
            values: vec![3.0, 3.0],
        },
    );

    let mut bc = catalog
        .create_boundary(&selection.method, &selection.name)
        .unwrap();
    bc.configure(selection.build_args().unwrap()).unwrap();
    bc.setup(&model).unwrap();

    let mut face = BoundaryFace::new(
        FaceId(0),
        State::new(vec![2.0, 0.0], vec![1.0, 2.0]),
        State::new(vec![0.0, 0.0], vec![0.0, 0.0]),
    )
    .unwrap();

    bc.set_ghost_state(&mut face, &model).unwrap();

    assert!(approx_eq(face.ghost().values()[0], 5.0));
    assert!(approx_eq(face.ghost().values()[1], 4.0));

    // 平均值在边界点处恢复给定值
    for i in 0..2 {
        let avg = 0.5 * (face.interior().values()[i] + face.ghost().values()[i]);
        assert!(approx_eq(avg, 3.0));
    }

    bc.unsetup().unwrap();
}

// ============================================================
// 空通量分布
// ============================================================

#[test]
fn test_disabled_flux_stage_defaults_to_null() {
    let catalog = builtin_catalog().unwrap();
    let model = BasicModel::new(2, 2).unwrap();

    // 配置显式缺席 -> 空变体，而非错误
    let mut fd = catalog.create_flux_distribution(None, "stage").unwrap();
    fd.setup(&model).unwrap();

    let mut points = FluxPoints::from_values(vec![0.5, -0.5]);
    let before = points.clone();
    fd.apply(&mut points).unwrap();
    assert_eq!(points, before);

    fd.unsetup().unwrap();
}

#[test]
fn test_unknown_flux_method_is_error() {
    let catalog = builtin_catalog().unwrap();
    // 配置错误（名称未注册）必须立即失败
    assert!(catalog
        .create_flux_distribution(Some("Hermite"), "stage")
        .is_err());
}

#[test]
fn test_unknown_boundary_method_is_error() {
    let catalog = builtin_catalog().unwrap();
    assert!(catalog.create_boundary("SuperInlet", "inlet").is_err());
}

// ============================================================
// 模型时钟
// ============================================================

#[test]
fn test_model_clock() {
    let mut model = BasicModel::new(3, 5).unwrap();
    assert_eq!(model.dimension(), 3);
    assert_eq!(model.nb_variables(), 5);

    model.advance(0.25);
    model.advance(0.25);
    assert!(approx_eq(model.current_time(), 0.5));
}
