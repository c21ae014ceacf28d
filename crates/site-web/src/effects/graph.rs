use site_core::{marker_opacity, sample_points, FRAME_STEP_MS, GRAPH_MARKER_STRIDE};
use web_sys as web;

use crate::constants::{gold, sky};
use crate::effects::Effect;

/// The animated financial-graph line behind the hero section.
pub struct GraphEffect {
    time_ms: f32,
}

impl GraphEffect {
    pub fn new() -> Self {
        Self { time_ms: 0.0 }
    }
}

impl Default for GraphEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for GraphEffect {
    fn resize(&mut self, _width: f64, _height: f64) {
        // Points are resampled from scratch every frame; nothing persists.
    }

    fn frame(&mut self, ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
        let points = sample_points(width as f32, height as f32, self.time_ms);

        let gradient = ctx.create_linear_gradient(0.0, 0.0, width, 0.0);
        let _ = gradient.add_color_stop(0.0, &gold(0.8));
        let _ = gradient.add_color_stop(0.5, &sky(0.6));
        let _ = gradient.add_color_stop(1.0, &gold(0.4));

        ctx.begin_path();
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(2.0);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(p.x as f64, p.y as f64);
            } else {
                ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        ctx.stroke();

        // soft glow pass over the same path
        ctx.set_shadow_color(&gold(0.5));
        ctx.set_shadow_blur(10.0);
        ctx.stroke();
        ctx.set_shadow_blur(0.0);

        for (i, p) in points.iter().enumerate().step_by(GRAPH_MARKER_STRIDE) {
            let opacity = marker_opacity(i, self.time_ms);
            ctx.begin_path();
            ctx.set_fill_style_str(&gold(opacity));
            let _ = ctx.arc(p.x as f64, p.y as f64, 3.0, 0.0, std::f64::consts::TAU);
            ctx.fill();

            ctx.set_shadow_color(&gold(0.8));
            ctx.set_shadow_blur(8.0);
            ctx.fill();
            ctx.set_shadow_blur(0.0);
        }

        self.time_ms += FRAME_STEP_MS;
    }
}
