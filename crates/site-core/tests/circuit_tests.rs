use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::circuit::{
    edge_opacity, node_opacity, node_radius, pulse_intensity, CircuitField,
};
use site_core::CIRCUIT_GRID_SPACING;

fn field(seed: u64) -> CircuitField {
    let mut rng = StdRng::seed_from_u64(seed);
    CircuitField::generate(900.0, 600.0, CIRCUIT_GRID_SPACING, &mut rng)
}

#[test]
fn adjacency_is_stable_across_frames() {
    let mut f = field(7);
    let edges_before = f.edges();
    let positions_before: Vec<_> = f.nodes().iter().map(|n| n.position).collect();

    for _ in 0..100 {
        f.advance();
    }

    assert_eq!(f.edges(), edges_before);
    let positions_after: Vec<_> = f.nodes().iter().map(|n| n.position).collect();
    assert_eq!(positions_after, positions_before);
}

#[test]
fn phases_advance_by_the_per_node_speed() {
    let mut f = field(7);
    let before: Vec<_> = f.nodes().iter().map(|n| (n.phase, n.phase_speed)).collect();

    f.advance();

    for (node, (phase, speed)) in f.nodes().iter().zip(before) {
        assert!((node.phase - (phase + speed)).abs() < 1e-6);
    }
}

#[test]
fn node_speeds_are_desynchronized() {
    let f = field(42);
    let speeds: Vec<_> = f.nodes().iter().map(|n| n.phase_speed).collect();
    assert!(speeds.len() > 1);
    assert!(
        speeds.iter().any(|s| (s - speeds[0]).abs() > 1e-6),
        "all nodes share one pulse speed"
    );
    for s in &speeds {
        assert!((0.02..0.05).contains(s));
    }
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = field(13);
    let b = field(13);
    assert_eq!(a.edges(), b.edges());
    let pos_a: Vec<_> = a.nodes().iter().map(|n| n.position).collect();
    let pos_b: Vec<_> = b.nodes().iter().map(|n| n.position).collect();
    assert_eq!(pos_a, pos_b);
}

#[test]
fn resize_regenerates_the_field() {
    let mut rng = StdRng::seed_from_u64(3);
    let small = CircuitField::generate(240.0, 240.0, CIRCUIT_GRID_SPACING, &mut rng);
    let large = CircuitField::generate(1920.0, 1080.0, CIRCUIT_GRID_SPACING, &mut rng);
    assert!(large.nodes().len() > small.nodes().len());
}

#[test]
fn edges_only_link_nearby_nodes() {
    let f = field(99);
    let limit = CIRCUIT_GRID_SPACING * 1.5;
    for (i, j) in f.edges() {
        let d = f.nodes()[i].position.distance(f.nodes()[j].position);
        assert!(d < limit, "edge ({i}, {j}) spans {d} px");
    }
}

#[test]
fn pulse_derived_visuals_stay_in_range() {
    for step in 0..1000 {
        let phase = step as f32 * 0.05;
        let p = pulse_intensity(phase);
        assert!((0.0..=1.0).contains(&p));
        assert!(node_radius(p) >= 2.0 && node_radius(p) <= 4.0);
        assert!(node_opacity(p) >= 0.3 && node_opacity(p) <= 0.8);
        assert!(edge_opacity(p) >= 0.1 && edge_opacity(p) <= 0.4);
    }
}
