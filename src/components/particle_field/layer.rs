//! Opacity of the whole particle layer.
//!
//! The layer fades out as the hero section scrolls away and is dimmed on
//! phone-sized viewports so it does not compete with the content.

/// Viewports at or below this width count as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Layer opacity on mobile viewports.
pub const MOBILE_OPACITY: f64 = 0.5;

/// Fades linearly from 1 at the top of the page to 0 one viewport height down.
pub fn scroll_fade(scroll_y: f64, viewport_height: f64) -> f64 {
	if viewport_height <= 0.0 {
		return 1.0;
	}
	(1.0 - scroll_y / viewport_height).clamp(0.0, 1.0)
}

pub fn viewport_dimming(viewport_width: f64) -> f64 {
	if viewport_width <= MOBILE_MAX_WIDTH {
		MOBILE_OPACITY
	} else {
		1.0
	}
}

/// Combined CSS opacity for the canvas element.
pub fn layer_opacity(scroll_y: f64, viewport_width: f64, viewport_height: f64) -> f64 {
	scroll_fade(scroll_y, viewport_height) * viewport_dimming(viewport_width)
}
