//! Small value types shared by the simulation and the host.

/// Pointer position in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Default for Pointer {
	/// Top-left corner, matching where the page assumes the mouse is before it first moves.
	fn default() -> Self {
		Self::new(0.0, 0.0)
	}
}

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
}

impl SurfaceSize {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// True when `x` lies inside the horizontal span `[0, width]`.
	pub fn contains_x(self, x: f64) -> bool {
		(0.0..=self.width).contains(&x)
	}
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x1 - x2, y1 - y2);
	(dx * dx + dy * dy).sqrt()
}
