//! Visual theming for the particle layer.
//!
//! Colors for particles, the background wash, and connection lines live here.
//! Motion tunables are in [`super::config`].

use super::rng::RandomSource;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba(...)` so fading alphas never snap to a hex literal.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// The fixed set of colors a particle may take on when it spawns.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	pub colors: Vec<Color>,
}

impl ParticlePalette {
	/// Neon pinks and violets over white (default)
	pub fn neon() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 20, 147),  // Neon pink
				Color::rgb(255, 105, 180), // Hot pink
				Color::rgb(221, 160, 221), // Plum
				Color::rgb(255, 255, 255), // White
				Color::rgb(138, 43, 226),  // Blue violet
			],
		}
	}

	/// Uniformly choose one palette entry.
	pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Color {
		match self.colors.len() {
			0 => Color::rgb(255, 255, 255),
			len => self.colors[rng.pick_index(len)],
		}
	}
}

/// One stop of a gradient, `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	pub offset: f64,
	pub color: Color,
}

impl GradientStop {
	pub const fn new(offset: f64, color: Color) -> Self {
		Self { offset, color }
	}
}

/// Full-surface radial wash painted under the particles.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Stops from the centre outwards
	pub stops: Vec<GradientStop>,
	/// Outer radius as a fraction of surface width
	pub radius_factor: f64,
}

/// Proximity line style.
#[derive(Clone, Debug)]
pub struct ConnectionStyle {
	/// Line color; alpha is replaced per line
	pub color: Color,
	/// Opacity of a zero-length link
	pub max_opacity: f64,
	pub line_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub palette: ParticlePalette,
	pub background: BackgroundStyle,
	pub connection: ConnectionStyle,
	/// Color of the occasional twinkle highlight
	pub twinkle: Color,
}

impl Theme {
	/// Dark purple wash with neon pink links (default)
	pub fn neon() -> Self {
		Self {
			name: "neon",
			palette: ParticlePalette::neon(),
			background: BackgroundStyle {
				stops: vec![
					GradientStop::new(0.0, Color::rgba(26, 10, 26, 0.8)),
					GradientStop::new(0.5, Color::rgba(10, 10, 10, 0.9)),
					GradientStop::new(1.0, Color::rgba(0, 0, 0, 1.0)),
				],
				radius_factor: 0.5,
			},
			connection: ConnectionStyle {
				color: Color::rgb(255, 20, 147),
				max_opacity: 0.3,
				line_width: 1.0,
			},
			twinkle: Color::rgb(255, 255, 255),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::neon()
	}
}
