//! Injectable randomness for spawning and twinkling.
//!
//! Every random draw in the simulation goes through [`RandomSource`], so tests
//! can script exact values while the browser build uses a seeded `fastrand::Rng`.

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
	/// Next uniform sample in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Uniform sample in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}

	/// True with probability `p`.
	fn chance(&mut self, p: f64) -> bool {
		self.next_f64() < p
	}

	/// Uniform index into a collection of `len` items. `len` must be non-zero.
	fn pick_index(&mut self, len: usize) -> usize {
		((self.next_f64() * len as f64) as usize).min(len - 1)
	}
}

impl RandomSource for fastrand::Rng {
	fn next_f64(&mut self) -> f64 {
		self.f64()
	}
}

/// Build the generator used by the browser host.
///
/// `wasm32-unknown-unknown` has no OS entropy without extra features, so the
/// seed is mixed from `Math.random()` and the wall clock.
#[cfg(target_arch = "wasm32")]
pub fn host_rng() -> fastrand::Rng {
	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64;
	fastrand::Rng::with_seed(seed)
}

/// Build the generator used by native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn host_rng() -> fastrand::Rng {
	fastrand::Rng::new()
}

/// Replays a fixed sequence of samples, cycling when exhausted.
#[cfg(test)]
pub(crate) struct Scripted {
	values: Vec<f64>,
	cursor: usize,
}

#[cfg(test)]
impl Scripted {
	pub(crate) fn new(values: &[f64]) -> Self {
		assert!(!values.is_empty());
		Self {
			values: values.to_vec(),
			cursor: 0,
		}
	}
}

#[cfg(test)]
impl RandomSource for Scripted {
	fn next_f64(&mut self) -> f64 {
		let v = self.values[self.cursor % self.values.len()];
		self.cursor += 1;
		v
	}
}
