//! DOM-side render adapters: category tabs and detail panel beside the
//! wheel, and the accordion that replaces the wheel on compact layouts.

use leptos::prelude::*;
use log::debug;

use super::animation::{NodeAnimation, NodeTarget, animation_for};
use super::component::RadialHost;
use super::types::{Category, Item};

/// An image that falls back to a text glyph when missing or broken.
#[component]
pub fn Glyph(image: Option<String>, fallback: String) -> impl IntoView {
	let failed = RwSignal::new(image.is_none());
	move || match (failed.get(), image.clone()) {
		(false, Some(src)) => view! {
			<img
				class="glyph glyph--image"
				src=src.clone()
				alt=""
				on:error=move |_| {
					debug!("image {src} failed to load, showing glyph");
					failed.set(true);
				}
			/>
		}
		.into_any(),
		_ => view! { <span class="glyph glyph--text" aria-hidden="true">{fallback.clone()}</span> }
			.into_any(),
	}
}

#[component]
pub fn CategoryTabs(host: RadialHost) -> impl IntoView {
	let tabs = move || {
		host.catalog.with(|catalog| {
			catalog
				.categories()
				.iter()
				.map(|category| {
					let (id, id_active) = (category.id.clone(), category.id.clone());
					let is_active =
						move || host.interaction.with(|s| s.active_category_id == id_active);
					view! {
						<button
							class="radial-catalog__tab"
							class:active=is_active.clone()
							aria-pressed=move || is_active().to_string()
							on:click=move |_| host.select(&id)
						>
							{category.name.clone()}
						</button>
					}
				})
				.collect_view()
		})
	};

	view! { <nav class="radial-catalog__tabs">{tabs}</nav> }
}

#[component]
pub fn DetailPanel(host: RadialHost) -> impl IntoView {
	let active = Memo::new(move |_| {
		let id = host.interaction.with(|s| s.active_category_id.clone());
		host.catalog.with(|catalog| catalog.category(&id).cloned())
	});

	move || {
		active.get().map(|category| {
			let empty = category.items.is_empty();
			let glyph = category.fallback_glyph();
			view! {
				<aside class="radial-catalog__detail">
					<header>
						<Glyph image=category.image.clone() fallback=glyph />
						<h2>{category.name.clone()}</h2>
					</header>
					<p>{category.description.clone()}</p>
					{empty.then(|| view! { <p class="radial-catalog__empty">"Range coming soon."</p> })}
					<ul>{item_rows(host, category.items.clone())}</ul>
				</aside>
			}
		})
	}
}

fn item_rows(host: RadialHost, items: Vec<Item>) -> impl IntoView {
	items
		.into_iter()
		.map(move |item| {
			let (id, id_hover) = (item.id.clone(), item.id.clone());
			let glyph = item.fallback_glyph();
			let hovered =
				move || host.interaction.with(|s| s.hovered_node_id.as_deref() == Some(id_hover.as_str()));
			view! {
				<li
					class="radial-catalog__item"
					class:hovered=hovered
					on:mouseenter=move |_| host.node_enter(&id)
					on:mouseleave=move |_| host.node_leave()
				>
					<Glyph image=item.image fallback=glyph />
					<strong>{item.name}</strong>
					{item.short_info.map(|info| view! { <span>{info}</span> })}
				</li>
			}
		})
		.collect_view()
}

/// Compact-layout stand-in for the wheel. One section open at a time; each
/// item carries the same scale/opacity targets the wheel would give it.
#[component]
pub fn CategoryAccordion(host: RadialHost) -> impl IntoView {
	let sections = move || {
		host.catalog.with(|catalog| {
			catalog
				.categories()
				.iter()
				.cloned()
				.map(|category| accordion_section(host, category))
				.collect_view()
		})
	};

	view! { <div class="radial-catalog__accordion">{sections}</div> }
}

fn accordion_section(host: RadialHost, category: Category) -> impl IntoView {
	let id = category.id.clone();
	let expanded = {
		let id = id.clone();
		move || host.interaction.with(|s| s.is_expanded(&id))
	};
	let (pressed, shown) = (expanded.clone(), expanded.clone());

	let category_glyph = category.fallback_glyph();
	let items = category
		.items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			let (category_id, item_id) = (id.clone(), item.id.clone());
			let glyph = item.fallback_glyph();
			let style = {
				let (category_id, item_id) = (category_id.clone(), item_id.clone());
				move || {
					let reduced = host.reduced_motion.get();
					let anim = host.interaction.with(|s| {
						let target = NodeTarget::Node {
							index,
							category_id: &category_id,
							node_id: &item_id,
						};
						animation_for(target, s, reduced, &host.animation)
					});
					item_style(&anim)
				}
			};
			view! {
				<li
					class="radial-catalog__item radial-catalog__item--enter"
					style=style
					on:mouseenter=move |_| host.node_enter(&item_id)
					on:mouseleave=move |_| host.node_leave()
					on:click=move |_| host.select(&category_id)
				>
					<Glyph image=item.image fallback=glyph />
					<span>{item.name}</span>
				</li>
			}
		})
		.collect_view();

	view! {
		<section class="radial-catalog__section" class:expanded=expanded>
			<button
				class="radial-catalog__section-toggle"
				aria-expanded=move || pressed().to_string()
				on:click=move |_| host.toggle_expand(&id)
			>
				<Glyph image=category.image fallback=category_glyph />
				{category.name}
			</button>
			<ul hidden=move || !shown()>{items}</ul>
		</section>
	}
}

/// Inline style handing an item's targets to CSS transitions.
fn item_style(anim: &NodeAnimation) -> String {
	format!(
		"transform: scale({scale}); opacity: {opacity}; \
		 transition: transform {t}ms ease-out, opacity {t}ms ease-out; \
		 animation-delay: {delay}ms; animation-duration: {entrance}ms;",
		scale = anim.scale,
		opacity = anim.opacity,
		t = anim.transition_ms,
		delay = anim.entrance_delay_ms,
		entrance = anim.entrance_duration_ms,
	)
}
