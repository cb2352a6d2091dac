use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, MediaQueryList, MediaQueryListEvent, MouseEvent,
	TouchEvent, Window,
};

use super::animation::AnimationConfig;
use super::frame::{OrbitContent, RenderAdapter};
use super::geometry::{Breakpoint, GeometryTable};
use super::layout::OrbitShape;
use super::panels::{CategoryAccordion, CategoryTabs, DetailPanel};
use super::render::CanvasAdapter;
use super::state::{InteractionState, RadialState};
use super::types::Catalog;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const FALLBACK_WIDTH: f64 = 1024.0;

/// Handle shared by the canvas and the DOM panels. Owns the engine and
/// mirrors the bits of it the panels render reactively.
#[derive(Clone, Copy)]
pub struct RadialHost {
	engine: StoredValue<RadialState>,
	pub catalog: Signal<Catalog>,
	pub interaction: RwSignal<InteractionState>,
	pub breakpoint: RwSignal<Breakpoint>,
	pub reduced_motion: RwSignal<bool>,
	pub animation: AnimationConfig,
}

impl RadialHost {
	fn update(&self, f: impl FnOnce(&mut RadialState)) {
		let snapshot = self.engine.try_update_value(|engine| {
			f(engine);
			(
				engine.interaction().clone(),
				engine.profile().breakpoint,
				engine.reduced_motion(),
			)
		});
		let Some((interaction, breakpoint, reduced)) = snapshot else {
			return;
		};
		if self.interaction.get_untracked() != interaction {
			self.interaction.set(interaction);
		}
		if self.breakpoint.get_untracked() != breakpoint {
			self.breakpoint.set(breakpoint);
		}
		if self.reduced_motion.get_untracked() != reduced {
			self.reduced_motion.set(reduced);
		}
	}

	pub fn node_enter(&self, node_id: &str) {
		self.update(|e| e.on_node_enter(node_id));
	}

	pub fn node_leave(&self) {
		self.update(|e| e.on_node_leave());
	}

	pub fn select(&self, category_id: &str) {
		self.update(|e| e.on_node_select(category_id));
	}

	pub fn toggle_expand(&self, category_id: &str) {
		self.update(|e| e.on_toggle_expand(category_id));
	}

	fn with_engine<U>(&self, f: impl FnOnce(&RadialState) -> U) -> Option<U> {
		self.engine.try_with_value(f)
	}
}

fn viewport_width(window: &Window) -> f64 {
	window
		.inner_width()
		.ok()
		.and_then(|w| w.as_f64())
		.unwrap_or(FALLBACK_WIDTH)
}

fn reduced_motion_query(window: &Window) -> Option<MediaQueryList> {
	match window.match_media(REDUCED_MOTION_QUERY) {
		Ok(query) => query,
		Err(err) => {
			warn!("matchMedia unavailable: {err:?}");
			None
		}
	}
}

fn canvas_point(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(client_x - rect.left(), client_y - rect.top())
}

#[component]
pub fn RadialCatalog(
	#[prop(into)] catalog: Signal<Catalog>,
	#[prop(optional)] content: OrbitContent,
	#[prop(optional)] geometry: GeometryTable,
	#[prop(optional)] orbit: OrbitShape,
	#[prop(optional)] animation: AnimationConfig,
	/// Overrides the platform's reduced-motion preference.
	#[prop(optional)]
	reduced_motion: Option<bool>,
) -> impl IntoView {
	let geometry = match geometry.validate() {
		Ok(()) => geometry,
		Err(err) => {
			error!("geometry table rejected ({err}), using defaults");
			GeometryTable::default()
		}
	};
	let animation = match animation.validate() {
		Ok(()) => animation,
		Err(err) => {
			error!("animation config rejected ({err}), using defaults");
			AnimationConfig::default()
		}
	};

	let window = web_sys::window();
	let width = window.as_ref().map_or(FALLBACK_WIDTH, viewport_width);
	let query = window.as_ref().and_then(reduced_motion_query);
	let reduced = reduced_motion.unwrap_or_else(|| query.as_ref().is_some_and(|q| q.matches()));

	let engine = RadialState::new(catalog.get_untracked(), geometry, content, width, reduced)
		.with_orbit(orbit)
		.with_animation(animation);
	let host = RadialHost {
		interaction: RwSignal::new(engine.interaction().clone()),
		breakpoint: RwSignal::new(engine.profile().breakpoint),
		reduced_motion: RwSignal::new(reduced),
		engine: StoredValue::new(engine),
		catalog,
		animation,
	};

	// A new catalog starts a fresh interaction.
	Effect::new(move |prev: Option<()>| {
		let next = catalog.get();
		if prev.is_some() {
			host.update(|e| e.set_catalog(next));
		}
	});

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let motion_cb: Rc<RefCell<Option<Closure<dyn FnMut(MediaQueryListEvent)>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window, radial catalog stays static");
			return;
		};

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("2d context has unexpected type");
					return;
				}
			},
			_ => {
				error!("canvas 2d context unavailable");
				return;
			}
		};
		let mut adapter = CanvasAdapter::new(ctx);

		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(win) = web_sys::window() {
				let width = viewport_width(&win);
				host.update(|e| e.resize(width));
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		if reduced_motion.is_none() {
			if let Some(query) = reduced_motion_query(&window) {
				*motion_cb.borrow_mut() = Some(Closure::new(move |ev: MediaQueryListEvent| {
					host.update(|e| e.set_reduced_motion(ev.matches()));
				}));
				if let Some(ref cb) = *motion_cb.borrow() {
					let _ = query.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
				}
			}
		}

		let animate_inner = animate.clone();
		let mut last = js_sys::Date::now();
		*animate.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = (now - last).clamp(0.0, 100.0);
			last = now;

			host.engine.try_update_value(|engine| {
				engine.tick(dt);
				if engine.profile().breakpoint.is_compact() {
					return;
				}
				let size = engine.profile().container_size as u32;
				if canvas.width() != size {
					canvas.set_width(size);
					canvas.set_height(size);
				}
				adapter.draw(&engine.frame());
			});

			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let hit = move |client_x: f64, client_y: f64| {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let (x, y) = canvas_point(&canvas, client_x, client_y);
		host.with_engine(|e| e.node_at_position(x, y)).flatten()
	};

	let on_mousemove = move |ev: MouseEvent| match hit(ev.client_x() as f64, ev.client_y() as f64) {
		Some((node_id, _)) => host.node_enter(&node_id),
		None => host.node_leave(),
	};

	let on_click = move |ev: MouseEvent| {
		if let Some((_, category_id)) = hit(ev.client_x() as f64, ev.client_y() as f64) {
			host.select(&category_id);
		}
	};

	let on_touchstart = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		if let Some((node_id, category_id)) = hit(touch.client_x() as f64, touch.client_y() as f64) {
			ev.prevent_default();
			host.node_enter(&node_id);
			host.select(&category_id);
		}
	};

	let on_mouseleave = move |_: MouseEvent| host.node_leave();

	let compact = move || host.breakpoint.get().is_compact();

	view! {
		<section class="radial-catalog">
			<Show when=move || !compact() fallback=move || view! { <CategoryAccordion host=host /> }>
				<CategoryTabs host=host />
			</Show>
			<canvas
				node_ref=canvas_ref
				class="radial-catalog__wheel"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				on:click=on_click
				on:touchstart=on_touchstart
				style=move || if compact() { "display: none;" } else { "display: block; cursor: pointer;" }
			/>
			<Show when=move || !compact()>
				<DetailPanel host=host />
			</Show>
		</section>
	}
}
