//! Motion and lifecycle tunables for the particle layer.
//!
//! All values are per-frame quantities in surface pixels; the simulation has no
//! notion of wall-clock time. Pages may override any subset through JSON (see
//! [`crate::load_config`]); missing keys keep their defaults.

use serde::Deserialize;

/// Tunables for spawning, motion, pointer response and connections.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Pool size. Fixed for the lifetime of a pool.
	pub particle_count: usize,
	/// Spawn line below the bottom edge (`y = height + spawn_offset`)
	pub spawn_offset: f64,
	/// Particles above `y = -eviction_margin` are replaced
	pub eviction_margin: f64,
	/// Horizontal spawn speed is uniform in `[-drift_speed, drift_speed)`
	pub drift_speed: f64,
	/// Upward spawn speed range; `vy` is the negated sample
	pub rise_speed_min: f64,
	pub rise_speed_max: f64,
	pub size_min: f64,
	pub size_max: f64,
	/// Spin is uniform in `[-max_rotation_speed, max_rotation_speed)`
	pub max_rotation_speed: f64,
	pub decay_min: f64,
	pub decay_max: f64,
	/// Distance within which the pointer pushes particles away
	pub repulsion_radius: f64,
	/// Velocity impulse at full force
	pub repulsion_strength: f64,
	/// Extra size fraction at full force
	pub size_boost: f64,
	/// Glow gained per frame at full force
	pub glow_gain: f64,
	/// Glow never fades below this while the pointer is away
	pub glow_floor: f64,
	/// Glow lost per frame while the pointer is away
	pub glow_fade: f64,
	/// Per-frame velocity multiplier
	pub damping: f64,
	/// Horizontal speed kept after bouncing off a side edge
	pub wall_bounce: f64,
	/// Per-frame probability of the white highlight
	pub twinkle_chance: f64,
	/// Particles closer than this are linked
	pub connection_distance: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			particle_count: 50,
			spawn_offset: 50.0,
			eviction_margin: 50.0,
			drift_speed: 1.0,
			rise_speed_min: 0.5,
			rise_speed_max: 1.5,
			size_min: 1.0,
			size_max: 4.0,
			max_rotation_speed: 0.01,
			decay_min: 0.005,
			decay_max: 0.025,
			repulsion_radius: 100.0,
			repulsion_strength: 0.02,
			size_boost: 0.5,
			glow_gain: 0.1,
			glow_floor: 0.5,
			glow_fade: 0.01,
			damping: 0.99,
			wall_bounce: 0.8,
			twinkle_chance: 0.1,
			connection_distance: 150.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_is_sane() {
		let config = ParticleConfig::default();
		assert_eq!(config.particle_count, 50);
		assert!(config.size_max > config.size_min);
		assert!(config.rise_speed_max > config.rise_speed_min);
		assert!(config.decay_min > 0.0 && config.decay_max > config.decay_min);
		assert!(config.damping > 0.0 && config.damping < 1.0);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config: ParticleConfig =
			serde_json::from_str(r#"{ "particle_count": 20, "connection_distance": 90.5 }"#).unwrap();
		assert_eq!(config.particle_count, 20);
		assert!((config.connection_distance - 90.5).abs() < 1e-9);
		assert!((config.repulsion_radius - 100.0).abs() < 1e-9);
	}

	#[test]
	fn empty_json_is_default() {
		let config: ParticleConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, ParticleConfig::default());
	}
}
