//! The particle pool and its per-frame loop.

use log::trace;

use super::config::ParticleConfig;
use super::particle::{Field, Particle};
use super::rng::RandomSource;
use super::surface::{RadialGradient, Surface};
use super::theme::{ConnectionStyle, Theme};
use super::types::{Pointer, SurfaceSize, distance};

/// A proximity link between two particles for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub opacity: f64,
}

/// What happened during one [`ParticleSystem::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	/// Slots replaced because their particle left through the top
	pub evicted: usize,
	/// Connection lines stroked
	pub connections: usize,
}

/// Fixed-size pool of particles plus the state one frame needs.
///
/// The pool always holds exactly `config.particle_count` particles. Slots are
/// replaced in place; only [`ParticleSystem::resize`] rebuilds the pool.
pub struct ParticleSystem<R = fastrand::Rng> {
	particles: Vec<Particle>,
	pointer: Pointer,
	size: SurfaceSize,
	config: ParticleConfig,
	theme: Theme,
	rng: R,
}

impl<R: RandomSource> ParticleSystem<R> {
	pub fn new(size: SurfaceSize, config: ParticleConfig, theme: Theme, mut rng: R) -> Self {
		let particles = spawn_pool(size, &config, &theme, &mut rng);
		Self {
			particles,
			pointer: Pointer::default(),
			size,
			config,
			theme,
			rng,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	pub fn pointer(&self) -> Pointer {
		self.pointer
	}

	pub fn config(&self) -> &ParticleConfig {
		&self.config
	}

	/// Record the latest pointer position; read at the next tick.
	pub fn set_pointer(&mut self, pointer: Pointer) {
		self.pointer = pointer;
	}

	/// Adopt new surface dimensions and respawn the whole pool below the new bottom edge.
	pub fn resize(&mut self, size: SurfaceSize) {
		self.size = size;
		self.particles = spawn_pool(size, &self.config, &self.theme, &mut self.rng);
	}

	/// Run one frame: background, particles, then connection lines.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
		let Self {
			particles,
			pointer,
			size,
			config,
			theme,
			rng,
		} = self;
		let (config, theme) = (&*config, &*theme);
		let field = Field {
			size: *size,
			config,
			theme,
		};
		let mut stats = FrameStats::default();

		surface.clear(size.width, size.height);
		draw_background(surface, *size, theme);

		for (index, slot) in particles.iter_mut().enumerate() {
			slot.update(*pointer, &field, rng);
			slot.draw(surface, &field, rng);

			if slot.y < -config.eviction_margin {
				trace!("particle {} left through the top, respawning", index);
				*slot = Particle::new(&field, rng);
				stats.evicted += 1;
			}
		}

		stats.connections =
			draw_connections(surface, particles, config.connection_distance, &theme.connection);
		stats
	}
}

fn spawn_pool<R: RandomSource + ?Sized>(
	size: SurfaceSize,
	config: &ParticleConfig,
	theme: &Theme,
	rng: &mut R,
) -> Vec<Particle> {
	let field = Field { size, config, theme };
	(0..config.particle_count)
		.map(|_| Particle::new(&field, rng))
		.collect()
}

fn draw_background<S: Surface + ?Sized>(surface: &mut S, size: SurfaceSize, theme: &Theme) {
	let (cx, cy) = size.center();
	let gradient = RadialGradient::centered(
		cx,
		cy,
		size.width * theme.background.radius_factor,
		&theme.background.stops,
	);
	surface.fill_rect_gradient(size.width, size.height, &gradient);
}

/// Every unordered pair closer than `max_distance`, fading with distance.
pub fn connections(particles: &[Particle], max_distance: f64, max_opacity: f64) -> Vec<Connection> {
	let mut links = Vec::new();
	for (i, p1) in particles.iter().enumerate() {
		for p2 in &particles[i + 1..] {
			let d = distance(p1.x, p1.y, p2.x, p2.y);
			if d < max_distance {
				links.push(Connection {
					from: (p1.x, p1.y),
					to: (p2.x, p2.y),
					opacity: (1.0 - d / max_distance) * max_opacity,
				});
			}
		}
	}
	links
}

fn draw_connections<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	max_distance: f64,
	style: &ConnectionStyle,
) -> usize {
	let links = connections(particles, max_distance, style.max_opacity);
	for link in &links {
		surface.stroke_line(
			link.from,
			link.to,
			style.color.with_alpha(link.opacity),
			style.line_width,
		);
	}
	links.len()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::surface::{DrawCommand, RecordingSurface};
	use crate::components::particle_field::theme::Color;

	fn system(width: f64, height: f64) -> ParticleSystem {
		ParticleSystem::new(
			SurfaceSize::new(width, height),
			ParticleConfig::default(),
			Theme::default(),
			fastrand::Rng::with_seed(11),
		)
	}

	fn placed(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 1.0,
			base_size: 1.0,
			color: Color::rgb(255, 255, 255),
			rotation: 0.0,
			rotation_speed: 0.0,
			life: 1.0,
			decay: 0.01,
			glow_intensity: 1.0,
		}
	}

	#[test]
	fn pool_fills_to_particle_count() {
		let ps = system(800.0, 600.0);
		assert_eq!(ps.particles().len(), 50);
		assert!(ps.particles().iter().all(|p| p.y == 650.0));
	}

	#[test]
	fn only_close_pairs_connect() {
		let layout = [placed(0.0, 0.0), placed(100.0, 0.0), placed(400.0, 0.0)];
		let links = connections(&layout, 150.0, 0.3);

		assert_eq!(links.len(), 1);
		assert_eq!(links[0].from, (0.0, 0.0));
		assert_eq!(links[0].to, (100.0, 0.0));
		assert!((links[0].opacity - (1.0 - 100.0 / 150.0) * 0.3).abs() < 1e-12);
	}

	#[test]
	fn connection_threshold_is_exclusive() {
		let layout = [placed(0.0, 0.0), placed(150.0, 0.0), placed(0.0, 149.9)];
		let links = connections(&layout, 150.0, 0.3);
		assert_eq!(links.len(), 1);
		assert_eq!(links[0].to, (0.0, 149.9));
	}

	#[test]
	fn tick_strokes_one_line_per_close_pair() {
		let mut ps = system(800.0, 600.0);
		ps.particles = vec![placed(0.0, 300.0), placed(100.0, 300.0), placed(400.0, 300.0)];
		ps.set_pointer(Pointer::new(10_000.0, 10_000.0));

		let mut surface = RecordingSurface::default();
		let stats = ps.tick(&mut surface);

		assert_eq!(stats.connections, 1);
		assert_eq!(surface.lines().len(), 1);
		match surface.lines()[0] {
			DrawCommand::StrokeLine { color, width, .. } => {
				assert_eq!((color.r, color.g, color.b), (255, 20, 147));
				assert_eq!(*width, 1.0);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn tick_paints_background_before_particles() {
		let mut ps = system(800.0, 600.0);
		let mut surface = RecordingSurface::default();
		ps.tick(&mut surface);

		assert_eq!(surface.commands[0], DrawCommand::Clear { width: 800.0, height: 600.0 });
		match &surface.commands[1] {
			DrawCommand::FillRectGradient { width, height, r1, stops } => {
				assert_eq!((*width, *height, *r1), (800.0, 600.0, 400.0));
				assert_eq!(stops.len(), 3);
				assert_eq!(stops[2].color, Color::rgba(0, 0, 0, 1.0));
			}
			other => panic!("expected background, got {other:?}"),
		}
		assert_eq!(surface.count(|c| *c == DrawCommand::Save), 50);
		assert_eq!(surface.count(|c| *c == DrawCommand::Restore), 50);
	}

	#[test]
	fn top_exit_replaces_slot_in_place() {
		let mut ps = system(800.0, 600.0);
		let mut escaping = placed(400.0, -49.0);
		escaping.vy = -5.0;
		ps.particles[7] = escaping;
		let mut neighbour = placed(400.0, 300.0);
		neighbour.vy = -1.0;
		ps.particles[8] = neighbour;

		let stats = ps.tick(&mut RecordingSurface::default());

		assert_eq!(stats.evicted, 1);
		assert_eq!(ps.particles().len(), 50);
		assert_eq!(ps.particles()[7].y, 650.0);
		assert_eq!(ps.particles()[8].y, 299.0);
	}

	#[test]
	fn resize_respawns_everything_below_new_bottom() {
		let mut ps = system(800.0, 600.0);
		for _ in 0..10 {
			ps.tick(&mut RecordingSurface::default());
		}

		ps.resize(SurfaceSize::new(1024.0, 300.0));

		assert_eq!(ps.size(), SurfaceSize::new(1024.0, 300.0));
		assert_eq!(ps.particles().len(), 50);
		for p in ps.particles() {
			assert_eq!(p.y, 350.0);
			assert!((0.0..1024.0).contains(&p.x));
		}
	}

	#[test]
	fn pool_size_follows_config() {
		let config = ParticleConfig {
			particle_count: 7,
			..ParticleConfig::default()
		};
		let mut ps = ParticleSystem::new(
			SurfaceSize::new(320.0, 480.0),
			config,
			Theme::default(),
			fastrand::Rng::with_seed(5),
		);
		assert_eq!(ps.particles().len(), 7);
		ps.resize(SurfaceSize::new(100.0, 100.0));
		assert_eq!(ps.particles().len(), 7);
	}

	#[test]
	fn distant_pointer_never_swells_and_particles_rise() {
		let mut ps = system(800.0, 600.0);
		ps.set_pointer(Pointer::new(10_000.0, 10_000.0));
		let spawn_y = 650.0;
		let mut surface = RecordingSurface::default();

		for _ in 0..100 {
			let before: Vec<f64> = ps.particles().iter().map(|p| p.y).collect();
			ps.tick(&mut surface);
			surface.commands.clear();

			for (p, prev) in ps.particles().iter().zip(before) {
				assert_eq!(p.size, p.base_size);
				assert!(p.y <= spawn_y);
				assert!(p.y < prev || p.y == spawn_y, "particle sank from {prev} to {}", p.y);
			}
		}
	}

	#[test]
	fn pointer_updates_are_seen_next_tick() {
		let mut ps = system(800.0, 600.0);
		ps.particles = vec![placed(400.0, 300.0)];
		ps.set_pointer(Pointer::new(420.0, 300.0));
		ps.tick(&mut RecordingSurface::default());

		let p = &ps.particles()[0];
		assert!(p.vx < 0.0, "pushed away from a pointer on its right");
		assert!(p.size > p.base_size);
	}
}
