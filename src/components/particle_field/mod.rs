//! Ambient particle background.
//!
//! A fixed pool of glowing particles rises from below the viewport, drifts,
//! and fades. Particles near the pointer are pushed away and brighten, and
//! nearby particles are joined by faint lines.
//!
//! The simulation ([`ParticleSystem`], [`Particle`]) draws only through the
//! [`Surface`] trait and takes randomness from [`RandomSource`], so it runs
//! without a browser. [`ParticleHost`] wires it to a real canvas.
//!
//! # Example
//!
//! ```ignore
//! use ambient_particles::{ParticleCanvas, ParticleConfig};
//!
//! view! { <ParticleCanvas config=ParticleConfig::default() /> }
//! ```

mod canvas;
mod component;
pub mod config;
mod host;
pub mod layer;
mod particle;
pub mod rng;
mod surface;
mod system;
pub mod theme;
mod types;

pub use component::ParticleCanvas;
pub use config::ParticleConfig;
pub use host::{LoopState, ParticleHost};
pub use particle::{Field, Particle};
pub use rng::RandomSource;
pub use surface::{RadialGradient, Surface};
pub use system::{Connection, FrameStats, ParticleSystem, connections};
pub use theme::Theme;
pub use types::{Pointer, SurfaceSize};
