//! [`Surface`] backed by an HTML canvas 2D context.
//!
//! Canvas calls that return `Result<_, JsValue>` only fail on non-finite
//! arguments or a detached context. Their errors are dropped.

use std::f64::consts::TAU;

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::surface::{RadialGradient, Surface};
use super::theme::Color;

fn build_gradient(
	ctx: &CanvasRenderingContext2d,
	gradient: &RadialGradient<'_>,
) -> Option<CanvasGradient> {
	let g = ctx
		.create_radial_gradient(
			gradient.x0,
			gradient.y0,
			gradient.r0,
			gradient.x1,
			gradient.y1,
			gradient.r1,
		)
		.ok()?;
	for stop in gradient.stops {
		let _ = g.add_color_stop(stop.offset as f32, &stop.color.to_css());
	}
	Some(g)
}

fn circle_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, TAU);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_rect_gradient(&mut self, width: f64, height: f64, gradient: &RadialGradient<'_>) {
		if let Some(g) = build_gradient(self, gradient) {
			#[allow(deprecated)]
			self.set_fill_style(&g);
			self.fill_rect(0.0, 0.0, width, height);
		}
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		circle_path(self, x, y, radius);
		self.fill();
	}

	fn fill_circle_gradient(&mut self, x: f64, y: f64, radius: f64, gradient: &RadialGradient<'_>) {
		if let Some(g) = build_gradient(self, gradient) {
			#[allow(deprecated)]
			self.set_fill_style(&g);
			circle_path(self, x, y, radius);
			self.fill();
		}
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn set_shadow(&mut self, color: Color, blur: f64) {
		self.set_shadow_color(&color.to_css());
		self.set_shadow_blur(blur);
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn save(&mut self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&mut self) {
		CanvasRenderingContext2d::restore(self);
	}
}
