// crates/ff_method/tests/boundary_sweep.rs

//! 边界扫掠集成测试
//!
//! 模拟宿主求解器的逐迭代边界处理：一个边界条件实例按面顺序
//! 扫掠多个边界面，跨时间步复用暂存缓冲。验证：
//! - 镜像恒等式对每个面、每次调用成立
//! - 求值坐标始终是内外坐标的算术平均
//! - 时间戳反映时钟推进
//! - 时间序列函数驱动的时变给定值
//! - 零梯度变体与 Dirichlet 变体经同一接口驱动

use std::sync::{Arc, Mutex};

use ff_method::{
    builtin_catalog, BasicModel, BoundaryArgs, BoundaryCondition, BoundaryFace, FaceId,
    FluxPointDistribution, FnFunction, FunctionSpec, IdentityTransform, PhysicalModel, State,
    TimeSeries, TimeSeriesFunction,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/// 一行边界面：内部单元在 x=h/2，幽灵在 x=-h/2，沿 y 排开
fn face_row(n: usize, nb_variables: usize) -> Vec<BoundaryFace> {
    (0..n)
        .map(|i| {
            let y = i as f64;
            let values: Vec<f64> = (0..nb_variables).map(|k| 1.0 + y + k as f64).collect();
            BoundaryFace::new(
                FaceId(i as u32),
                State::new(vec![0.5, y], values),
                State::new(vec![-0.5, y], vec![0.0; nb_variables]),
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn test_sweep_preserves_mirroring_identity() {
    let catalog = builtin_catalog().unwrap();
    let mut model = BasicModel::new(2, 2).unwrap();

    // 给定值随时间线性变化：t=0 -> [0, 1], t=1 -> [10, 1]
    let series = vec![
        TimeSeries::from_points(vec![(0.0, 0.0), (1.0, 10.0)]).unwrap(),
        TimeSeries::from_points(vec![(0.0, 1.0), (1.0, 1.0)]).unwrap(),
    ];
    let function = TimeSeriesFunction::new(series).unwrap();

    let mut bc = catalog.create_boundary("Dirichlet", "west").unwrap();
    bc.configure(BoundaryArgs::new(
        Arc::new(function),
        Arc::new(IdentityTransform),
    ))
    .unwrap();
    bc.setup(&model).unwrap();

    let mut faces = face_row(8, 2);

    for step in 0..4 {
        model.set_time(step as f64 * 0.25);
        let t = model.current_time();
        let prescribed = [10.0 * t, 1.0];

        for face in &mut faces {
            bc.set_ghost_state(face, &model).unwrap();

            // 0.5*(Si+Sg) == Sp，对每个面、每个时间步
            for i in 0..2 {
                let si = face.interior().values()[i];
                let sg = face.ghost().values()[i];
                assert!(
                    approx_eq(0.5 * (si + sg), prescribed[i]),
                    "step={step} face={} var={i}",
                    face.id()
                );
            }
        }
    }

    bc.unsetup().unwrap();
}

#[test]
fn test_sweep_evaluation_points() {
    // 记录每次求值输入，验证中点坐标与时间分量
    let recorded: Arc<Mutex<Vec<Vec<f64>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    let function = FnFunction::new(2, move |input: &[f64], output: &mut [f64]| {
        sink.lock().unwrap().push(input.to_vec());
        output.fill(1.0);
        Ok(())
    });

    let mut model = BasicModel::new(2, 2).unwrap();
    model.set_time(3.0);

    let catalog = builtin_catalog().unwrap();
    let mut bc = catalog.create_boundary("Dirichlet", "probe").unwrap();
    bc.configure(BoundaryArgs::new(
        Arc::new(function),
        Arc::new(IdentityTransform),
    ))
    .unwrap();
    bc.setup(&model).unwrap();

    let mut faces = face_row(3, 2);
    for face in &mut faces {
        bc.set_ghost_state(face, &model).unwrap();
    }

    let inputs = recorded.lock().unwrap();
    assert_eq!(inputs.len(), 3);
    for (i, input) in inputs.iter().enumerate() {
        // 中点 x = 0.5*(0.5 + (-0.5)) = 0, y = i
        assert!(approx_eq(input[0], 0.0));
        assert!(approx_eq(input[1], i as f64));
        assert!(approx_eq(input[2], 3.0));
    }
}

#[test]
fn test_mixed_variants_through_same_interface() {
    use ff_method::{BoundarySelection, MethodSelection};

    let catalog = builtin_catalog().unwrap();
    let model = BasicModel::new(2, 2).unwrap();

    // 同一宿主循环按配置驱动两种变体，不做特殊处理
    let selection = MethodSelection {
        boundary: vec![
            BoundarySelection::new("west", "Dirichlet").with_function(FunctionSpec::Constant {
                values: vec![2.0, 2.0],
            }),
            BoundarySelection::new("east", "ZeroGradient"),
        ],
        flux_distribution: None,
    };

    let mut conditions = Vec::new();
    for sel in &selection.boundary {
        let mut bc = catalog.create_boundary(&sel.method, &sel.name).unwrap();
        bc.configure(sel.build_args().unwrap()).unwrap();
        bc.setup(&model).unwrap();
        conditions.push(bc);
    }

    // 被禁用的通量分布阶段解析为空变体
    let mut fd = catalog
        .create_flux_distribution(selection.flux_distribution.as_deref(), "stage")
        .unwrap();
    fd.setup(&model).unwrap();

    let mut west_face = BoundaryFace::new(
        FaceId(0),
        State::new(vec![0.5, 0.0], vec![1.0, 0.0]),
        State::new(vec![-0.5, 0.0], vec![0.0, 0.0]),
    )
    .unwrap();
    let mut east_face = BoundaryFace::new(
        FaceId(1),
        State::new(vec![9.5, 0.0], vec![1.5, 0.5]),
        State::new(vec![10.5, 0.0], vec![0.0, 0.0]),
    )
    .unwrap();

    conditions[0].set_ghost_state(&mut west_face, &model).unwrap();
    conditions[1].set_ghost_state(&mut east_face, &model).unwrap();

    // Dirichlet: Sg = 2*2 - Si
    assert!(approx_eq(west_face.ghost().values()[0], 3.0));
    assert!(approx_eq(west_face.ghost().values()[1], 4.0));
    // ZeroGradient: Sg = Si
    assert_eq!(east_face.ghost().values(), east_face.interior().values());

    fd.unsetup().unwrap();
    for bc in &mut conditions {
        bc.unsetup().unwrap();
    }
}

#[test]
fn test_evaluation_failure_aborts_sweep() {
    // 在第二个面上失败的函数：错误必须上抛并携带面上下文
    let function = FnFunction::new(1, |input: &[f64], output: &mut [f64]| {
        if input[1] > 0.5 {
            return Err(ff_foundation::FfError::invalid_input("域外"));
        }
        output[0] = 1.0;
        Ok(())
    });

    let model = BasicModel::new(2, 1).unwrap();
    let catalog = builtin_catalog().unwrap();
    let mut bc = catalog.create_boundary("Dirichlet", "partial").unwrap();
    bc.configure(BoundaryArgs::new(
        Arc::new(function),
        Arc::new(IdentityTransform),
    ))
    .unwrap();
    bc.setup(&model).unwrap();

    let mut faces = face_row(2, 1);
    assert!(bc.set_ghost_state(&mut faces[0], &model).is_ok());

    let err = bc.set_ghost_state(&mut faces[1], &model).unwrap_err();
    match err {
        ff_foundation::FfError::Evaluation { face, coord, .. } => {
            assert_eq!(face, 1);
            assert!(approx_eq(coord[1], 1.0));
        }
        other => panic!("期望 Evaluation 错误, 实际为 {other}"),
    }
}
