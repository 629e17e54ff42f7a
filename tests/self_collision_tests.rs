use weft::{Cloth, ClothConfig, ClothParameters, CollisionObject, PointMass, StepObserver, Vec3};

const NONE: [CollisionObject<f64>; 0] = [];

fn close_pair(gap: f64, thickness: f64) -> Cloth<f64> {
    let points = vec![
        PointMass::new(Vec3::new(0.1, 0.1, 0.1), false),
        PointMass::new(Vec3::new(0.1 + gap, 0.1, 0.1), false),
    ];
    let config = ClothConfig::new(1.0, 1.0, 4, 4).with_thickness(thickness);
    Cloth::from_parts(&config, points, vec![]).unwrap()
}

#[derive(Default)]
struct Counter {
    substeps: usize,
    pushed: usize,
    passes: Vec<&'static str>,
}

impl StepObserver for Counter {
    fn on_forces(&mut self) { self.passes.push("forces"); }
    fn on_integrate(&mut self) { self.passes.push("integrate"); }
    fn on_self_collision(&mut self, corrected: usize) {
        self.pushed += corrected;
        self.passes.push("self_collision");
    }
    fn on_collisions(&mut self) { self.passes.push("collisions"); }
    fn on_strain_limit(&mut self, _corrected: usize) { self.passes.push("strain_limit"); }
    fn on_step_complete(&mut self) { self.substeps += 1; }
}

#[test]
fn overlapping_points_are_separated() {
    let mut cloth = close_pair(0.005, 0.01);
    cloth.advance(60.0, 1, &ClothParameters::new(), &[], &NONE);
    let p = cloth.point_masses();
    let gap = p[0].position.distance(p[1].position);
    assert!(gap >= 0.02 - 1e-12, "gap = {}", gap);
    // Only position moves; the push shows up as velocity next substep.
    assert_eq!(p[0].last_position, Vec3::new(0.1, 0.1, 0.1));
}

#[test]
fn push_shrinks_with_more_substeps() {
    let mut coarse = close_pair(0.005, 0.01);
    let mut fine = close_pair(0.005, 0.01);
    coarse.advance(60.0, 1, &ClothParameters::new(), &[], &NONE);
    fine.advance(60.0, 10, &ClothParameters::new(), &[], &NONE);
    let moved = |c: &Cloth<f64>| (c.point_masses()[0].position.x - 0.1).abs();
    assert!((moved(&fine) - moved(&coarse) / 10.0).abs() < 1e-12);
}

#[test]
fn disabled_self_collision_leaves_points_alone() {
    let mut cloth = close_pair(0.005, 0.01);
    let before = cloth.positions();
    cloth.advance(60.0, 1, &ClothParameters::new().with_self_collision(false), &[], &NONE);
    assert_eq!(cloth.positions(), before);
}

#[test]
fn observer_sees_passes_in_order() {
    let mut cloth = close_pair(0.005, 0.01);
    let mut counter = Counter::default();
    cloth.advance_with_observer(60.0, 1, &ClothParameters::new(), &[], &NONE, &mut counter);
    assert_eq!(counter.substeps, 1);
    assert!(counter.pushed >= 1);
    assert_eq!(
        counter.passes,
        vec!["forces", "integrate", "self_collision", "collisions", "strain_limit"]
    );
}
