//! Browser glue: binds a [`ParticleSystem`] to a canvas, window events, and
//! `requestAnimationFrame`.
//!
//! The loop re-arms itself once per frame until [`ParticleHost::stop`] runs or
//! the host is dropped. Stopping cancels the pending frame and removes every
//! window listener the host registered.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, trace, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::ParticleConfig;
use super::layer::layer_opacity;
use super::rng::host_rng;
use super::system::ParticleSystem;
use super::theme::Theme;
use super::types::{Pointer, SurfaceSize};

/// Run/stop bookkeeping for the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopState {
	running: bool,
	pending_frame: Option<i32>,
}

impl LoopState {
	pub fn started() -> Self {
		Self {
			running: true,
			pending_frame: None,
		}
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Called at the top of each frame callback. False once stopped.
	pub fn begin_frame(&mut self) -> bool {
		self.pending_frame = None;
		self.running
	}

	/// Remember the request id of the next scheduled frame.
	pub fn armed(&mut self, id: i32) {
		self.pending_frame = Some(id);
	}

	/// Stop the loop. Returns `None` when already stopped, otherwise the
	/// request id to cancel, if one is pending.
	pub fn halt(&mut self) -> Option<Option<i32>> {
		if !self.running {
			return None;
		}
		self.running = false;
		Some(self.pending_frame.take())
	}
}

type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running particle layer attached to one canvas.
pub struct ParticleHost {
	window: Window,
	system: Rc<RefCell<ParticleSystem>>,
	state: Rc<RefCell<LoopState>>,
	animate: Callback,
	on_resize: Closure<dyn FnMut()>,
	on_scroll: Closure<dyn FnMut()>,
	on_pointer: Closure<dyn FnMut(MouseEvent)>,
}

fn viewport_size(window: &Window) -> Option<SurfaceSize> {
	Some(SurfaceSize::new(
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn apply_opacity(window: &Window, canvas: &HtmlCanvasElement, size: SurfaceSize) {
	let scroll_y = window.scroll_y().unwrap_or(0.0);
	let opacity = layer_opacity(scroll_y, size.width, size.height);
	let _ = canvas.style().set_property("opacity", &opacity.to_string());
}

fn request_frame(window: &Window, animate: &Callback, state: &RefCell<LoopState>) {
	if let Some(ref cb) = *animate.borrow() {
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => state.borrow_mut().armed(id),
			Err(e) => warn!("particles: requestAnimationFrame failed: {:?}", e),
		}
	}
}

impl ParticleHost {
	/// Size `canvas` to the viewport, spawn the pool and start animating.
	///
	/// Returns `None` (after logging why) when there is no window or the
	/// canvas has no 2D context; the page then simply has no particle layer.
	pub fn attach(canvas: HtmlCanvasElement, config: ParticleConfig, theme: Theme) -> Option<Self> {
		let Some(window) = web_sys::window() else {
			warn!("particles: no window, layer disabled");
			return None;
		};
		let Some(size) = viewport_size(&window) else {
			warn!("particles: viewport size unavailable, layer disabled");
			return None;
		};
		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("particles: \"2d\" context has unexpected type, layer disabled");
					return None;
				}
			},
			_ => {
				warn!("particles: canvas has no 2d context, layer disabled");
				return None;
			}
		};

		canvas.set_width(size.width as u32);
		canvas.set_height(size.height as u32);
		apply_opacity(&window, &canvas, size);

		let system = Rc::new(RefCell::new(ParticleSystem::new(
			size,
			config,
			theme,
			host_rng(),
		)));
		info!(
			"particles: attached {}x{} with {} particles",
			size.width,
			size.height,
			system.borrow().particles().len()
		);

		let (system_resize, canvas_resize) = (system.clone(), canvas.clone());
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Some(size) = viewport_size(&win) else {
				return;
			};
			canvas_resize.set_width(size.width as u32);
			canvas_resize.set_height(size.height as u32);
			apply_opacity(&win, &canvas_resize, size);
			system_resize.borrow_mut().resize(size);
			debug!("particles: resized to {}x{}, pool rebuilt", size.width, size.height);
		});

		let system_scroll = system.clone();
		let canvas_scroll = canvas.clone();
		let on_scroll: Closure<dyn FnMut()> = Closure::new(move || {
			if let Some(win) = web_sys::window() {
				apply_opacity(&win, &canvas_scroll, system_scroll.borrow().size());
			}
		});

		let system_pointer = system.clone();
		let on_pointer: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			system_pointer
				.borrow_mut()
				.set_pointer(Pointer::new(ev.client_x() as f64, ev.client_y() as f64));
		});

		for (event, cb) in [
			("resize", on_resize.as_ref()),
			("scroll", on_scroll.as_ref()),
			("mousemove", on_pointer.as_ref()),
		] {
			let _ = window.add_event_listener_with_callback(event, cb.unchecked_ref());
		}

		let state = Rc::new(RefCell::new(LoopState::started()));
		let animate: Callback = Rc::new(RefCell::new(None));
		let (system_anim, state_anim, animate_inner) =
			(system.clone(), state.clone(), animate.clone());
		let mut ctx = ctx;
		*animate.borrow_mut() = Some(Closure::new(move || {
			if !state_anim.borrow_mut().begin_frame() {
				return;
			}
			let stats = system_anim.borrow_mut().tick(&mut ctx);
			if stats.evicted > 0 {
				trace!("particles: {:?}", stats);
			}
			if let Some(win) = web_sys::window() {
				request_frame(&win, &animate_inner, &state_anim);
			}
		}));
		request_frame(&window, &animate, &state);

		Some(Self {
			window,
			system,
			state,
			animate,
			on_resize,
			on_scroll,
			on_pointer,
		})
	}

	pub fn is_running(&self) -> bool {
		self.state.borrow().is_running()
	}

	/// Current pool size; stays at the configured count while running.
	pub fn particle_count(&self) -> usize {
		self.system.borrow().particles().len()
	}

	/// Cancel the pending frame and remove window listeners. Idempotent.
	pub fn stop(&self) {
		let Some(pending) = self.state.borrow_mut().halt() else {
			return;
		};
		if let Some(id) = pending {
			let _ = self.window.cancel_animation_frame(id);
		}
		for (event, cb) in [
			("resize", self.on_resize.as_ref()),
			("scroll", self.on_scroll.as_ref()),
			("mousemove", self.on_pointer.as_ref()),
		] {
			let _ = self
				.window
				.remove_event_listener_with_callback(event, cb.unchecked_ref());
		}
		// Breaks the closure's reference to itself.
		self.animate.borrow_mut().take();
		debug!("particles: stopped");
	}

	/// Keep the layer running for the rest of the page's life.
	pub fn keep_alive(self) {
		std::mem::forget(self);
	}
}

impl Drop for ParticleHost {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn loop_runs_until_halted() {
		let mut state = LoopState::started();
		assert!(state.begin_frame());
		state.armed(3);
		assert_eq!(state.halt(), Some(Some(3)));
		assert!(!state.is_running());
		assert!(!state.begin_frame());
	}

	#[test]
	fn halt_is_idempotent() {
		let mut state = LoopState::started();
		assert_eq!(state.halt(), Some(None));
		assert_eq!(state.halt(), None);
	}

	#[test]
	fn frame_callback_consumes_pending_id() {
		let mut state = LoopState::started();
		state.armed(9);
		assert!(state.begin_frame());
		assert_eq!(state.halt(), Some(None));
	}
}
