//! Immediate-mode 2D drawing surface.
//!
//! The simulation only ever draws through [`Surface`]. The browser build
//! implements it for `CanvasRenderingContext2d` (see `canvas.rs`); tests use a
//! recording implementation that keeps every call as a [`DrawCommand`].

use super::theme::{Color, GradientStop};

/// Radial gradient between two circles, as in the canvas `createRadialGradient` call.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient<'a> {
	pub x0: f64,
	pub y0: f64,
	pub r0: f64,
	pub x1: f64,
	pub y1: f64,
	pub r1: f64,
	pub stops: &'a [GradientStop],
}

impl<'a> RadialGradient<'a> {
	/// Gradient centred on `(x, y)` running from the centre out to `radius`.
	pub fn centered(x: f64, y: f64, radius: f64, stops: &'a [GradientStop]) -> Self {
		Self {
			x0: x,
			y0: y,
			r0: 0.0,
			x1: x,
			y1: y,
			r1: radius,
			stops,
		}
	}
}

/// The drawing operations the particle layer needs.
///
/// Transform and shadow state set between [`Surface::save`] and
/// [`Surface::restore`] must not leak past the restore.
pub trait Surface {
	/// Erase the rectangle `(0, 0, width, height)` to transparent.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill the rectangle `(0, 0, width, height)` with a radial gradient.
	fn fill_rect_gradient(&mut self, width: f64, height: f64, gradient: &RadialGradient<'_>);

	/// Fill a full circle with a solid color.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);

	/// Fill a full circle with a radial gradient.
	fn fill_circle_gradient(&mut self, x: f64, y: f64, radius: f64, gradient: &RadialGradient<'_>);

	/// Stroke a straight line segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);

	/// Set a blurred drop shadow for subsequent fills.
	fn set_shadow(&mut self, color: Color, blur: f64);

	fn translate(&mut self, x: f64, y: f64);

	fn rotate(&mut self, angle: f64);

	fn save(&mut self);

	fn restore(&mut self);
}

/// A single recorded surface call.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCommand {
	Clear { width: f64, height: f64 },
	FillRectGradient { width: f64, height: f64, r1: f64, stops: Vec<GradientStop> },
	FillCircle { x: f64, y: f64, radius: f64, color: Color },
	FillCircleGradient { radius: f64, stops: Vec<GradientStop> },
	StrokeLine { from: (f64, f64), to: (f64, f64), color: Color, width: f64 },
	Shadow { color: Color, blur: f64 },
	Translate { x: f64, y: f64 },
	Rotate { angle: f64 },
	Save,
	Restore,
}

/// Surface that records calls instead of drawing.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSurface {
	pub(crate) commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl RecordingSurface {
	pub(crate) fn lines(&self) -> Vec<&DrawCommand> {
		self.commands
			.iter()
			.filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
			.collect()
	}

	pub(crate) fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
		self.commands.iter().filter(|c| pred(c)).count()
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.commands.push(DrawCommand::Clear { width, height });
	}

	fn fill_rect_gradient(&mut self, width: f64, height: f64, gradient: &RadialGradient<'_>) {
		self.commands.push(DrawCommand::FillRectGradient {
			width,
			height,
			r1: gradient.r1,
			stops: gradient.stops.to_vec(),
		});
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.commands.push(DrawCommand::FillCircle { x, y, radius, color });
	}

	fn fill_circle_gradient(&mut self, _x: f64, _y: f64, radius: f64, gradient: &RadialGradient<'_>) {
		self.commands.push(DrawCommand::FillCircleGradient {
			radius,
			stops: gradient.stops.to_vec(),
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.commands.push(DrawCommand::StrokeLine { from, to, color, width });
	}

	fn set_shadow(&mut self, color: Color, blur: f64) {
		self.commands.push(DrawCommand::Shadow { color, blur });
	}

	fn translate(&mut self, x: f64, y: f64) {
		self.commands.push(DrawCommand::Translate { x, y });
	}

	fn rotate(&mut self, angle: f64) {
		self.commands.push(DrawCommand::Rotate { angle });
	}

	fn save(&mut self) {
		self.commands.push(DrawCommand::Save);
	}

	fn restore(&mut self) {
		self.commands.push(DrawCommand::Restore);
	}
}
