//! ambient-particles: canvas particle background for a promotional page.
//!
//! This crate provides a WASM particle layer: glowing particles rise from the
//! bottom of the viewport, shy away from the pointer, and link up with faint
//! lines when they drift close together.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{HtmlCanvasElement, HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	Particle, ParticleCanvas, ParticleConfig, ParticleHost, ParticleSystem, Theme,
};

/// Id of the canvas element a plain (non-Leptos) page provides.
pub const CANVAS_ID: &str = "particles-canvas";

/// Id of the optional `<script type="application/json">` holding config overrides.
pub const CONFIG_ID: &str = "particle-config";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ambient-particles: logging initialized");
}

/// Load config overrides from a script element with id="particle-config".
/// Expected format: JSON object with any subset of [`ParticleConfig`] fields.
pub fn load_config() -> Option<ParticleConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<ParticleConfig>(&json_text) {
		Ok(config) => {
			info!(
				"ambient-particles: loaded config ({} particles)",
				config.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("ambient-particles: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Attach the particle layer to the page's `#particles-canvas`, if it has one.
///
/// A page without the canvas gets no particle layer and no error.
pub fn attach_to_page() -> Option<ParticleHost> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let Some(element) = document.get_element_by_id(CANVAS_ID) else {
		debug!("ambient-particles: no #{} on this page", CANVAS_ID);
		return None;
	};
	let canvas: HtmlCanvasElement = match element.dyn_into() {
		Ok(canvas) => canvas,
		Err(_) => {
			warn!("ambient-particles: #{} is not a canvas", CANVAS_ID);
			return None;
		}
	};
	ParticleHost::attach(canvas, load_config().unwrap_or_default(), Theme::default())
}

/// JS entry point for pages that ship their own markup. Call once the DOM is ready.
#[wasm_bindgen(js_name = startParticles)]
pub fn start_particles() {
	init_logging();
	if let Some(host) = attach_to_page() {
		host.keep_alive();
	}
}

/// Main application component.
/// Loads config from the DOM and renders the particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Ambient Particles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleCanvas config=config />
	}
}
