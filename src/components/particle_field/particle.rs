//! A single rising point of light.

use std::f64::consts::TAU;

use super::config::ParticleConfig;
use super::rng::RandomSource;
use super::surface::{RadialGradient, Surface};
use super::theme::{Color, GradientStop, Theme};
use super::types::{Pointer, SurfaceSize, distance};

/// What a particle borrows from its pool while it moves, respawns, or draws.
#[derive(Clone, Copy)]
pub struct Field<'a> {
	pub size: SurfaceSize,
	pub config: &'a ParticleConfig,
	pub theme: &'a Theme,
}

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Current radius; grows near the pointer
	pub size: f64,
	/// Radius at rest
	pub base_size: f64,
	pub color: Color,
	pub rotation: f64,
	pub rotation_speed: f64,
	/// Remaining life in `(0, 1]`
	pub life: f64,
	/// Life lost per frame
	pub decay: f64,
	pub glow_intensity: f64,
}

impl Particle {
	/// Spawn a particle below the bottom edge with a random life, decay and glow.
	pub fn new<R: RandomSource + ?Sized>(field: &Field<'_>, rng: &mut R) -> Self {
		let mut particle = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			size: 0.0,
			base_size: 0.0,
			color: Color::rgb(255, 255, 255),
			rotation: 0.0,
			rotation_speed: 0.0,
			life: 0.0,
			decay: 0.0,
			glow_intensity: 0.0,
		};
		particle.reset(field, rng);
		particle.life = rng.next_f64();
		particle.decay = rng.range(field.config.decay_min, field.config.decay_max);
		particle.glow_intensity = rng.range(0.5, 1.0);
		particle
	}

	/// Move back below the bottom edge with fresh motion, size and color.
	///
	/// Life, decay and glow carry over; the caller decides what life to restart with.
	pub fn reset<R: RandomSource + ?Sized>(&mut self, field: &Field<'_>, rng: &mut R) {
		let config = field.config;
		self.x = rng.next_f64() * field.size.width;
		self.y = field.size.height + config.spawn_offset;
		self.vx = rng.range(-config.drift_speed, config.drift_speed);
		self.vy = -rng.range(config.rise_speed_min, config.rise_speed_max);
		self.size = rng.range(config.size_min, config.size_max);
		self.base_size = self.size;
		self.color = field.theme.palette.pick(rng);
		self.rotation = rng.next_f64() * TAU;
		self.rotation_speed = rng.range(-config.max_rotation_speed, config.max_rotation_speed);
	}

	/// Advance one frame.
	///
	/// The pointer repels: particles inside the radius are pushed directly away
	/// from it, swell, and brighten.
	pub fn update<R: RandomSource + ?Sized>(
		&mut self,
		pointer: Pointer,
		field: &Field<'_>,
		rng: &mut R,
	) {
		let config = field.config;

		self.x += self.vx;
		self.y += self.vy;
		self.rotation += self.rotation_speed;

		let pointer_distance = distance(self.x, self.y, pointer.x, pointer.y);
		if pointer_distance < config.repulsion_radius {
			let angle = (self.y - pointer.y).atan2(self.x - pointer.x);
			let force = (config.repulsion_radius - pointer_distance) / config.repulsion_radius;
			self.vx += angle.cos() * force * config.repulsion_strength;
			self.vy += angle.sin() * force * config.repulsion_strength;
			self.size = self.base_size * (1.0 + force * config.size_boost);
			self.glow_intensity = (self.glow_intensity + force * config.glow_gain).min(1.0);
		} else {
			self.size = self.base_size;
			self.glow_intensity = (self.glow_intensity - config.glow_fade).max(config.glow_floor);
		}

		self.vx *= config.damping;
		self.vy *= config.damping;

		self.life -= self.decay;
		if self.life <= 0.0 {
			self.reset(field, rng);
			self.life = 1.0;
		}

		if !field.size.contains_x(self.x) {
			self.vx *= -config.wall_bounce;
		}
	}

	/// Current draw opacity.
	pub fn alpha(&self) -> f64 {
		self.life * self.glow_intensity
	}

	/// Draw a soft glow, a solid core, and sometimes a white twinkle.
	pub fn draw<S, R>(&self, surface: &mut S, field: &Field<'_>, rng: &mut R)
	where
		S: Surface + ?Sized,
		R: RandomSource + ?Sized,
	{
		let alpha = self.alpha();
		let core = self.color.with_alpha(alpha);

		surface.save();
		surface.set_shadow(core, self.size * 4.0);
		surface.translate(self.x, self.y);
		// No visible effect on a disc.
		surface.rotate(self.rotation);

		let stops = [
			GradientStop::new(0.0, core),
			GradientStop::new(0.5, self.color.with_alpha(alpha * 0.5)),
			GradientStop::new(1.0, Color::rgba(255, 255, 255, 0.0)),
		];
		let glow_radius = self.size * 2.0;
		surface.fill_circle_gradient(
			0.0,
			0.0,
			glow_radius,
			&RadialGradient::centered(0.0, 0.0, glow_radius, &stops),
		);

		surface.fill_circle(0.0, 0.0, self.size, core);

		if rng.chance(field.config.twinkle_chance) {
			surface.fill_circle(0.0, 0.0, self.size * 0.3, field.theme.twinkle.with_alpha(alpha * 0.8));
		}

		surface.restore();
	}
}
