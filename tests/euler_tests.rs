use softmass::{
    BuildConfig, CubeBuilder, EulerIntegrator, GroundPlane, Integrator, IntegratorKind, Network,
    NetworkBuilder, NoOpStepObserver, Particle, SimulationConfig, SoftBody, Spring, StepObserver,
    Vec3,
};
use softmass::Vec as _;

#[test]
fn spring_at_rest_length_exerts_no_force() {
    let mut network = CubeBuilder::new(1.0f32, Vec3::new(0.0, 2.0, 0.0))
        .build(&BuildConfig::new())
        .unwrap();
    let euler = EulerIntegrator::new(Vec3::zero(), 1.0, GroundPlane::new(0.0, 0.5));
    euler.accumulate_forces(&mut network);
    for p in network.particles() {
        assert_eq!(p.force, Vec3::zero());
    }
}

#[test]
fn every_spring_force_is_action_reaction() {
    let particles = vec![
        Particle::new(Vec3::new(0.0, 3.0, 0.0), 1.0f64),
        Particle::new(Vec3::new(1.3, 3.2, -0.4), 2.0),
        Particle::new(Vec3::new(0.2, 4.1, 0.9), 0.5),
    ];
    let springs = vec![
        Spring::new(0, 1, 1.0, 120.0),
        Spring::new(1, 2, 0.5, 80.0),
        Spring::new(2, 0, 2.0, 60.0),
    ];
    let network = Network::new(particles, springs, vec![]).unwrap();
    for s in network.springs() {
        let f = s.force(network.particles()).unwrap();
        let mut isolated = network.particles().to_vec();
        for p in isolated.iter_mut() {
            p.force = Vec3::zero();
        }
        s.apply(&mut isolated);
        assert_eq!(isolated[s.a].force, f);
        assert_eq!(isolated[s.b].force, -f);
    }
}

#[test]
fn net_spring_force_sums_to_zero() {
    let mut particles = Vec::new();
    for i in 0..6 {
        let t = i as f64;
        particles.push(Particle::new(Vec3::new(t.sin() * 2.0, 5.0 + t, t.cos()), 1.0));
    }
    let mut springs = Vec::new();
    for i in 0..6 {
        springs.push(Spring::new(i, (i + 1) % 6, 0.7, 200.0));
    }
    let mut network = Network::new(particles, springs, vec![]).unwrap();
    let euler = EulerIntegrator::new(Vec3::zero(), 1.0, GroundPlane::new(0.0, 0.5));
    euler.accumulate_forces(&mut network);
    let total = network
        .particles()
        .iter()
        .fold(Vec3::zero(), |acc, p| acc + p.force);
    assert!(total.length() < 1e-9, "net force {:?}", total);
}

#[test]
fn stays_above_ground_every_step() {
    let cube = CubeBuilder::new(1.0f32, Vec3::new(0.0, 2.0, 0.0));
    let config = SimulationConfig::new().with_ground_height(0.25);
    let mut body = SoftBody::build(&cube, &BuildConfig::new(), config, IntegratorKind::Euler).unwrap();
    for _ in 0..600 {
        body.step(1.0 / 60.0, &mut NoOpStepObserver);
        for p in body.positions() {
            assert!(p.y >= 0.25, "particle below ground: {:?}", p);
        }
    }
}

#[test]
fn ground_bounce_inverts_vertical_velocity() {
    let particles = vec![Particle::new(Vec3::new(0.0, 0.05, 0.0), 1.0f64)];
    let mut network = Network::new(particles, vec![], vec![]).unwrap();
    let mut euler = EulerIntegrator::new(Vec3::new(0.0, -10.0, 0.0), 1.0, GroundPlane::new(0.0, 0.5));
    let mut contacts = Contacts::default();
    // Hits the ground on the first tick: v = -1, x = 0.05 - 0.1.
    euler.step(&mut network, 0.1, &mut contacts);
    let p = &network.particles()[0];
    assert_eq!(p.pos.y, 0.0);
    assert!((p.velocity.y - 0.5).abs() < 1e-12);
    assert_eq!(contacts.hits, vec![0]);
}

#[test]
fn cube_settles_on_ground() {
    let cube = CubeBuilder::new(1.0f32, Vec3::new(0.0, 1.5, 0.0));
    let mut body = SoftBody::build(&cube, &BuildConfig::new(), SimulationConfig::new(), IntegratorKind::Euler)
        .unwrap();
    for _ in 0..1200 {
        body.step(1.0 / 120.0, &mut NoOpStepObserver);
    }
    let lowest = body
        .positions()
        .iter()
        .fold(f32::MAX, |m, p| m.min(p.y));
    assert!(lowest < 0.05, "cube should rest on the ground, lowest = {}", lowest);
    assert!(body.network().max_strain() < 0.5, "strain = {}", body.network().max_strain());
}

#[derive(Default)]
struct Contacts {
    hits: Vec<usize>,
}

impl StepObserver for Contacts {
    fn on_ground_contact(&mut self, particle: usize) {
        self.hits.push(particle);
    }
}

#[derive(Debug, PartialEq)]
enum Hook {
    Forces,
    Integrate,
    Contact(usize),
    Complete,
}

#[derive(Default)]
struct HookLog {
    hooks: Vec<Hook>,
}

impl StepObserver for HookLog {
    fn on_forces_accumulated(&mut self) {
        self.hooks.push(Hook::Forces);
    }
    fn on_integrate(&mut self) {
        self.hooks.push(Hook::Integrate);
    }
    fn on_ground_contact(&mut self, particle: usize) {
        self.hooks.push(Hook::Contact(particle));
    }
    fn on_step_complete(&mut self) {
        self.hooks.push(Hook::Complete);
    }
}

#[test]
fn ground_contacts_reported_after_integration() {
    let particles = vec![
        Particle::new(Vec3::new(0.0, 0.05, 0.0), 1.0f64),
        Particle::new(Vec3::new(1.0, 5.0, 0.0), 1.0),
        Particle::new(Vec3::new(2.0, 0.01, 0.0), 1.0),
    ];
    let network = Network::new(particles, vec![], vec![]).unwrap();
    let mut body = SoftBody::new(network, SimulationConfig::new(), IntegratorKind::Euler).unwrap();
    let mut log = HookLog::default();
    body.step(0.1, &mut log);
    assert_eq!(
        log.hooks,
        vec![Hook::Forces, Hook::Integrate, Hook::Contact(0), Hook::Contact(2), Hook::Complete]
    );
}
