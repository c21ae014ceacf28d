//! Node field for the golden-circuits background effect.
//!
//! Layout and adjacency are generated once per canvas size and never change
//! between frames; only each node's phase accumulator advances. A resize
//! throws the whole field away and regenerates it.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::{
    CIRCUIT_LINK_DISTANCE_FACTOR, CIRCUIT_LINK_KEEP_PROBABILITY, CIRCUIT_NODE_JITTER,
};

#[derive(Clone, Debug)]
pub struct CircuitNode {
    pub position: Vec2,
    /// Phase accumulator driving this node's pulse, advanced every frame.
    pub phase: f32,
    /// Per-node speed assigned once at creation, so nodes pulse out of sync.
    pub phase_speed: f32,
    /// Indices of nodes this one links to. Fixed after generation.
    pub links: SmallVec<[usize; 4]>,
}

/// Normalized pulse intensity in `[0, 1]` for a phase value.
#[inline]
pub fn pulse_intensity(phase: f32) -> f32 {
    (phase.sin() + 1.0) * 0.5
}

pub struct CircuitField {
    nodes: Vec<CircuitNode>,
}

impl CircuitField {
    /// Lay nodes out on a jittered grid covering `width x height` CSS pixels
    /// and link each pair within the distance threshold with fixed
    /// probability. Layout and adjacency depend only on the RNG state and
    /// the dimensions.
    pub fn generate(width: f32, height: f32, grid_spacing: f32, rng: &mut impl Rng) -> Self {
        let cols = (width / grid_spacing).ceil().max(1.0) as usize;
        let rows = (height / grid_spacing).ceil().max(1.0) as usize;

        let mut nodes = Vec::with_capacity(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                let x = i as f32 * grid_spacing
                    + rng.gen_range(-CIRCUIT_NODE_JITTER..CIRCUIT_NODE_JITTER);
                let y = j as f32 * grid_spacing
                    + rng.gen_range(-CIRCUIT_NODE_JITTER..CIRCUIT_NODE_JITTER);
                nodes.push(CircuitNode {
                    position: Vec2::new(x, y),
                    phase: rng.gen_range(0.0..std::f32::consts::TAU),
                    phase_speed: rng.gen_range(0.02..0.05),
                    links: SmallVec::new(),
                });
            }
        }

        let link_distance = grid_spacing * CIRCUIT_LINK_DISTANCE_FACTOR;
        for i in 0..nodes.len() {
            for j in 0..nodes.len() {
                if i == j {
                    continue;
                }
                let distance = nodes[i].position.distance(nodes[j].position);
                if distance < link_distance && rng.gen::<f32>() < CIRCUIT_LINK_KEEP_PROBABILITY {
                    nodes[i].links.push(j);
                }
            }
        }

        let field = Self { nodes };
        log::debug!(
            "circuit field: {} nodes, {} edges for {width:.0}x{height:.0}",
            field.nodes.len(),
            field.edges().len()
        );
        field
    }

    #[inline]
    pub fn nodes(&self) -> &[CircuitNode] {
        &self.nodes
    }

    /// All links as `(from, to)` index pairs, in generation order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            for &j in &node.links {
                edges.push((i, j));
            }
        }
        edges
    }

    /// Advance every node's phase by its own per-node speed. Called once per
    /// frame; positions and links are untouched.
    pub fn advance(&mut self) {
        for node in &mut self.nodes {
            node.phase += node.phase_speed;
        }
    }
}

// Visual mappings from pulse intensity, shared with the canvas painter.

#[inline]
pub fn node_radius(intensity: f32) -> f32 {
    2.0 + intensity * 2.0
}

#[inline]
pub fn node_opacity(intensity: f32) -> f32 {
    0.3 + intensity * 0.5
}

#[inline]
pub fn edge_opacity(intensity: f32) -> f32 {
    0.1 + intensity * 0.3
}

/// Intensity above which an edge gets the extra glow pass.
pub const EDGE_GLOW_THRESHOLD: f32 = 0.7;
/// Intensity above which a node gets the extra glow pass.
pub const NODE_GLOW_THRESHOLD: f32 = 0.8;
