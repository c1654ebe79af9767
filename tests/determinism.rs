use softmass::{
    BuildConfig, CubeBuilder, IntegratorKind, MeshAdjacencyBuilder, NoOpStepObserver,
    SimulationConfig, SoftBody, Transform, TriangleMesh, Vec3,
};

fn dt_sequence() -> Vec<f32> {
    (0..240).map(|i| 1.0 / (50.0 + (i % 7) as f32 * 3.0)).collect()
}

fn run(kind: IntegratorKind) -> Vec<Vec<Vec3<f32>>> {
    let cube = CubeBuilder::new(1.0, Vec3::new(0.3, 2.0, -0.1));
    let mut body = SoftBody::build(&cube, &BuildConfig::new(), SimulationConfig::new(), kind).unwrap();
    dt_sequence()
        .into_iter()
        .map(|dt| {
            body.step(dt, &mut NoOpStepObserver);
            body.positions()
        })
        .collect()
}

#[test]
fn euler_deterministic() {
    let results: Vec<_> = (0..3).map(|_| run(IntegratorKind::Euler)).collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn verlet_deterministic() {
    let results: Vec<_> = (0..3).map(|_| run(IntegratorKind::Verlet)).collect();
    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn rebuilt_body_replays_trajectory() {
    let vertices = vec![
        Vec3::new(0.0f64, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    let mesh = TriangleMesh::from_indices(vertices, &[0, 1, 2, 0, 2, 3]).unwrap();
    let builder = MeshAdjacencyBuilder::new(mesh, Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)));
    let config = BuildConfig::new();
    let mut body = SoftBody::build(&builder, &config, SimulationConfig::new(), IntegratorKind::Verlet).unwrap();

    let mut first = Vec::new();
    for _ in 0..90 {
        body.step(1.0 / 60.0, &mut NoOpStepObserver);
        first.push(body.positions());
    }

    body.rebuild(&builder, &config).unwrap();
    assert_eq!(body.ticks(), 0);
    for expected in &first {
        body.step(1.0 / 60.0, &mut NoOpStepObserver);
        assert_eq!(&body.positions(), expected);
    }
}
