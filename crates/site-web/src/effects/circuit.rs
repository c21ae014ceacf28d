use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::circuit::{
    edge_opacity, node_opacity, node_radius, pulse_intensity, CircuitField, EDGE_GLOW_THRESHOLD,
    NODE_GLOW_THRESHOLD,
};
use web_sys as web;

use crate::constants::{gold, sky};
use crate::effects::Effect;

/// The golden-circuits node field behind the vision section.
pub struct CircuitEffect {
    field: Option<CircuitField>,
    rng: StdRng,
    grid_spacing: f32,
}

impl CircuitEffect {
    pub fn new(grid_spacing: f32, seed: u64) -> Self {
        Self {
            field: None,
            rng: StdRng::seed_from_u64(seed),
            grid_spacing,
        }
    }
}

impl Effect for CircuitEffect {
    fn resize(&mut self, width: f64, height: f64) {
        // Layout and adjacency are permanent for a given size; a resize
        // throws the field away and regenerates it.
        self.field = Some(CircuitField::generate(
            width as f32,
            height as f32,
            self.grid_spacing,
            &mut self.rng,
        ));
    }

    fn frame(&mut self, ctx: &web::CanvasRenderingContext2d, _width: f64, _height: f64) {
        let Some(field) = &mut self.field else {
            return;
        };

        let nodes = field.nodes();
        for node in nodes {
            let intensity = pulse_intensity(node.phase);
            let opacity = edge_opacity(intensity);
            for &j in &node.links {
                let other = &nodes[j];
                let gradient = ctx.create_linear_gradient(
                    node.position.x as f64,
                    node.position.y as f64,
                    other.position.x as f64,
                    other.position.y as f64,
                );
                let _ = gradient.add_color_stop(0.0, &gold(opacity));
                let _ = gradient.add_color_stop(0.5, &sky(opacity * 0.7));
                let _ = gradient.add_color_stop(1.0, &gold(opacity * 0.5));

                ctx.begin_path();
                ctx.set_stroke_style_canvas_gradient(&gradient);
                ctx.set_line_width(1.0);
                ctx.move_to(node.position.x as f64, node.position.y as f64);
                ctx.line_to(other.position.x as f64, other.position.y as f64);
                ctx.stroke();

                if intensity > EDGE_GLOW_THRESHOLD {
                    ctx.set_shadow_color(&gold(0.5));
                    ctx.set_shadow_blur(5.0);
                    ctx.stroke();
                    ctx.set_shadow_blur(0.0);
                }
            }
        }

        for node in nodes {
            let intensity = pulse_intensity(node.phase);
            ctx.begin_path();
            ctx.set_fill_style_str(&gold(node_opacity(intensity)));
            let _ = ctx.arc(
                node.position.x as f64,
                node.position.y as f64,
                node_radius(intensity) as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();

            if intensity > NODE_GLOW_THRESHOLD {
                ctx.set_shadow_color(&gold(0.8));
                ctx.set_shadow_blur(10.0);
                ctx.fill();
                ctx.set_shadow_blur(0.0);
            }
        }

        // Phase accumulators advance once per frame, after painting.
        field.advance();
    }
}
