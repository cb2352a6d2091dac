use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::animation::Emphasis;
use super::frame::{Frame, NodeFrame, RenderAdapter};

const COLORS: &[&str] = &[
	"#0b6fb8", "#e8731a", "#2a9d5c", "#c23b3b", "#6d4fb3", "#8c5a3c", "#d05a9e", "#5f6b73",
	"#a8a424", "#1597a8",
];
const BACKGROUND: &str = "#0f1b2d";
const HUB_FILL: &str = "#13365c";

/// Draws a [`Frame`] onto a 2d canvas sized to the profile's container.
pub struct CanvasAdapter {
	ctx: CanvasRenderingContext2d,
}

impl CanvasAdapter {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl RenderAdapter for CanvasAdapter {
	fn draw(&mut self, frame: &Frame<'_>) {
		let ctx = &self.ctx;
		let size = frame.profile.container_size;
		ctx.set_fill_style_str(BACKGROUND);
		ctx.fill_rect(0.0, 0.0, size, size);
		ctx.save();
		let _ = ctx.translate(size / 2.0, size / 2.0);
		draw_orbit(frame, ctx);
		draw_spokes(frame, ctx);
		draw_hub(frame, ctx);
		for (i, node) in frame.nodes.iter().enumerate() {
			draw_node(frame, node, COLORS[i % COLORS.len()], ctx);
		}
		ctx.restore();
	}
}

fn draw_orbit(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	let (rx, ry) = frame.radii;
	ctx.set_stroke_style_str(&format!(
		"rgba(120, 170, 230, {})",
		0.35 * frame.hub.progress
	));
	ctx.set_line_width(1.5);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(6.0),
	));
	ctx.begin_path();
	let _ = ctx.ellipse(0.0, 0.0, rx, ry, 0.0, 0.0, 2.0 * PI);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_spokes(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	let hub_r = frame.profile.hub_size / 2.0;
	for node in &frame.nodes {
		let (x, y) = node.offset;
		let dist = (x * x + y * y).sqrt();
		if dist < 0.001 || node.progress <= 0.0 {
			continue;
		}
		let node_r = frame.profile.node_size / 2.0 * node.scale;
		let alpha = match node.animation.emphasis {
			Emphasis::Active => 0.7,
			Emphasis::Hovered => 0.5,
			Emphasis::Idle => 0.15,
		} * node.progress;
		let (ux, uy) = (x / dist, y / dist);
		ctx.set_stroke_style_str(&format!("rgba(100, 180, 255, {alpha})"));
		ctx.set_line_width(1.0);
		ctx.begin_path();
		ctx.move_to(ux * hub_r, uy * hub_r);
		// spoke grows outward with the entrance
		let reach = hub_r + (dist - node_r - hub_r) * node.progress;
		ctx.line_to(ux * reach, uy * reach);
		ctx.stroke();
	}
}

fn draw_hub(frame: &Frame<'_>, ctx: &CanvasRenderingContext2d) {
	let hub = &frame.hub;
	let radius = frame.profile.hub_size / 2.0 * hub.progress;
	if radius <= 0.0 {
		return;
	}

	ctx.set_global_alpha(hub.progress);
	ctx.begin_path();
	let _ = ctx.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(HUB_FILL);
	ctx.fill();
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.set_fill_style_str("white");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font(&format!("bold {}px sans-serif", radius * 0.45));
	let _ = ctx.fill_text(&hub.category.fallback_glyph(), 0.0, -radius * 0.15);
	ctx.set_font(&format!("{}px sans-serif", (radius * 0.16).max(9.0)));
	let _ = ctx.fill_text(&hub.category.name, 0.0, radius * 0.38);
	ctx.set_global_alpha(1.0);
}

fn draw_node(frame: &Frame<'_>, node: &NodeFrame<'_>, color: &str, ctx: &CanvasRenderingContext2d) {
	if node.progress <= 0.0 {
		return;
	}
	let (x, y) = node.offset;
	let radius = frame.profile.node_size / 2.0 * node.scale * node.progress;
	let alpha = node.opacity * node.progress;

	if node.hovered {
		let glow_radius = radius * 1.6;
		if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius) {
			let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", 0.35 * alpha));
			let _ = gradient.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", 0.1 * alpha));
			let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}

	ctx.set_global_alpha(alpha);
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(color);
	ctx.fill();

	if node.animation.emphasis == Emphasis::Active || node.hovered {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + 2.0, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
		ctx.set_line_width(1.5);
		ctx.stroke();
	}

	ctx.set_fill_style_str("white");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font(&format!("bold {}px sans-serif", radius * 0.55));
	let _ = ctx.fill_text(&node.entry.glyph, x, y);

	// labels sit outside the orbit so they never cover the hub
	let (lx, ly) = label_anchor(node.offset, radius + 6.0);
	ctx.set_font(&format!("{}px sans-serif", (radius * 0.32).max(10.0)));
	let _ = ctx.fill_text(node.entry.label, lx, ly);
	ctx.set_global_alpha(1.0);
}

fn label_anchor((x, y): (f64, f64), gap: f64) -> (f64, f64) {
	let dist = (x * x + y * y).sqrt();
	if dist < 0.001 {
		return (x, y + gap);
	}
	(x + x / dist * gap, y + y / dist * gap)
}
