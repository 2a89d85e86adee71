//! Leptos component that renders the particle canvas.
//!
//! The canvas is fixed behind page content and ignores pointer events; the
//! host listens on `window` instead, so the layer still reacts to the mouse.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::config::ParticleConfig;
use super::host::ParticleHost;
use super::theme::Theme;

/// Fullscreen ambient particle background.
///
/// The layer attaches once the canvas is mounted. When the component is torn
/// down, the host is dropped with its effect, which stops the frame loop and
/// removes the window listeners.
#[component]
pub fn ParticleCanvas(#[prop(optional)] config: Option<ParticleConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let host: Rc<RefCell<Option<ParticleHost>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if let Some(previous) = host.borrow_mut().take() {
			previous.stop();
		}
		*host.borrow_mut() = ParticleHost::attach(
			canvas,
			config.clone().unwrap_or_default(),
			Theme::default(),
		);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particles-canvas"
			class="particles-canvas"
			style="position: fixed; inset: 0; z-index: 0; display: block; pointer-events: none;"
		/>
	}
}
