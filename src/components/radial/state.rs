use std::collections::HashMap;

use log::{debug, info, warn};

use super::animation::{AnimationConfig, NodeTarget, Tween, animation_for, entrance_progress};
use super::frame::{Frame, HubFrame, NodeFrame, OrbitContent};
use super::geometry::{GeometryProfile, GeometryTable};
use super::layout::{DEFAULT_START_ANGLE_DEG, OrbitShape, orbit_positions};
use super::types::Catalog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
	SelectCategory(String),
	HoverNode(String),
	UnhoverNode,
	/// Compact layout accordion.
	ToggleExpand(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionState {
	pub active_category_id: String,
	pub hovered_node_id: Option<String>,
	pub expanded_category_id: Option<String>,
}

impl InteractionState {
	pub fn new(catalog: &Catalog) -> Self {
		Self {
			active_category_id: catalog.first().id.clone(),
			hovered_node_id: None,
			expanded_category_id: None,
		}
	}

	/// Applies one event. Returns whether anything changed; repeating an
	/// event is a no-op.
	pub fn apply(&mut self, event: &InteractionEvent) -> bool {
		match event {
			InteractionEvent::SelectCategory(id) => {
				if self.active_category_id == *id {
					return false;
				}
				self.active_category_id = id.clone();
			}
			InteractionEvent::HoverNode(id) => {
				if self.hovered_node_id.as_ref() == Some(id) {
					return false;
				}
				self.hovered_node_id = Some(id.clone());
			}
			InteractionEvent::UnhoverNode => {
				if self.hovered_node_id.take().is_none() {
					return false;
				}
			}
			InteractionEvent::ToggleExpand(id) => {
				if self.expanded_category_id.as_ref() == Some(id) {
					self.expanded_category_id = None;
				} else {
					self.expanded_category_id = Some(id.clone());
				}
			}
		}
		true
	}

	pub fn replay<'a>(
		catalog: &Catalog,
		events: impl IntoIterator<Item = &'a InteractionEvent>,
	) -> Self {
		let mut state = Self::new(catalog);
		for event in events {
			state.apply(event);
		}
		state
	}

	pub fn is_expanded(&self, category_id: &str) -> bool {
		self.expanded_category_id.as_deref() == Some(category_id)
	}
}

/// In-flight emphasis of one orbit node.
#[derive(Clone, Copy, Debug)]
struct NodeTweens {
	scale: Tween,
	opacity: Tween,
}

/// Everything a mounted visualization owns: catalog, interaction state,
/// resolved geometry, motion preference and in-flight transitions.
pub struct RadialState {
	catalog: Catalog,
	interaction: InteractionState,
	geometry: GeometryTable,
	profile: GeometryProfile,
	content: OrbitContent,
	orbit: OrbitShape,
	pub animation: AnimationConfig,
	reduced_motion: bool,
	entrance_elapsed_ms: f64,
	tweens: HashMap<String, NodeTweens>,
}

impl RadialState {
	pub fn new(
		catalog: Catalog,
		geometry: GeometryTable,
		content: OrbitContent,
		width: f64,
		reduced_motion: bool,
	) -> Self {
		let profile = *geometry.resolve(width);
		let mut state = Self {
			interaction: InteractionState::new(&catalog),
			catalog,
			geometry,
			profile,
			content,
			orbit: OrbitShape::default(),
			animation: AnimationConfig::default(),
			reduced_motion,
			entrance_elapsed_ms: 0.0,
			tweens: HashMap::new(),
		};
		state.restart_entrance();
		state
	}

	/// Lays nodes out on `orbit` if every profile has room for it at full
	/// density; otherwise keeps the circle.
	pub fn with_orbit(mut self, orbit: OrbitShape) -> Self {
		match self.geometry.validate_for(orbit) {
			Ok(()) => self.orbit = orbit,
			Err(err) => warn!("orbit {orbit:?} rejected ({err}), keeping a circle"),
		}
		self
	}

	pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
		self.animation = animation;
		self.restart_entrance();
		self
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn interaction(&self) -> &InteractionState {
		&self.interaction
	}

	pub fn profile(&self) -> &GeometryProfile {
		&self.profile
	}

	pub fn orbit(&self) -> OrbitShape {
		self.orbit
	}

	pub fn reduced_motion(&self) -> bool {
		self.reduced_motion
	}

	/// Replaces the catalog and starts over from the initial state.
	pub fn set_catalog(&mut self, catalog: Catalog) {
		info!("catalog replaced ({} categories), resetting", catalog.len());
		self.interaction = InteractionState::new(&catalog);
		self.catalog = catalog;
		self.restart_entrance();
	}

	/// Re-resolves geometry for a new viewport width. Interaction state is
	/// left alone.
	pub fn resize(&mut self, width: f64) {
		let profile = *self.geometry.resolve(width);
		if profile.breakpoint != self.profile.breakpoint {
			info!(
				"breakpoint {} -> {} at {width}px",
				self.profile.breakpoint.name(),
				profile.breakpoint.name()
			);
		}
		self.profile = profile;
	}

	pub fn set_reduced_motion(&mut self, reduced: bool) {
		if self.reduced_motion == reduced {
			return;
		}
		info!("reduced motion {}", if reduced { "on" } else { "off" });
		self.reduced_motion = reduced;
		self.sync_tweens();
	}

	/// Validates ids against the catalog, then applies the event.
	pub fn dispatch(&mut self, event: InteractionEvent) -> bool {
		let known = match &event {
			InteractionEvent::SelectCategory(id) | InteractionEvent::ToggleExpand(id) => {
				self.catalog.contains(id)
			}
			InteractionEvent::HoverNode(_) | InteractionEvent::UnhoverNode => true,
		};
		if !known {
			warn!("ignoring {event:?}: unknown category");
			return false;
		}

		let changed = self.interaction.apply(&event);
		if changed {
			debug!("{event:?} -> {:?}", self.interaction);
			if matches!(event, InteractionEvent::SelectCategory(_)) {
				self.restart_entrance();
			} else {
				self.sync_tweens();
			}
		}
		changed
	}

	pub fn on_node_enter(&mut self, node_id: &str) {
		self.dispatch(InteractionEvent::HoverNode(node_id.to_owned()));
	}

	pub fn on_node_leave(&mut self) {
		self.dispatch(InteractionEvent::UnhoverNode);
	}

	pub fn on_node_select(&mut self, category_id: &str) {
		self.dispatch(InteractionEvent::SelectCategory(category_id.to_owned()));
	}

	pub fn on_toggle_expand(&mut self, category_id: &str) {
		self.dispatch(InteractionEvent::ToggleExpand(category_id.to_owned()));
	}

	pub fn tick(&mut self, dt_ms: f64) {
		self.entrance_elapsed_ms += dt_ms;
		for tweens in self.tweens.values_mut() {
			tweens.scale.advance(dt_ms);
			tweens.opacity.advance(dt_ms);
		}
	}

	fn restart_entrance(&mut self) {
		self.entrance_elapsed_ms = 0.0;
		self.tweens.clear();
		self.sync_tweens();
	}

	/// Points every node's scale and opacity tweens at their current targets.
	/// New nodes start settled; the entrance reveal covers their appearance.
	fn sync_tweens(&mut self) {
		let active = self.catalog.category(&self.interaction.active_category_id);
		let entries = self.content.entries(&self.catalog, active);
		for (index, entry) in entries.iter().enumerate() {
			let target = NodeTarget::Node {
				index,
				category_id: entry.category_id,
				node_id: entry.id,
			};
			let anim = animation_for(target, &self.interaction, self.reduced_motion, &self.animation);
			self.tweens
				.entry(entry.id.to_owned())
				.and_modify(|t| {
					t.scale.retarget(anim.scale, anim.transition_ms);
					t.opacity.retarget(anim.opacity, anim.transition_ms);
				})
				.or_insert_with(|| NodeTweens {
					scale: Tween::settled(anim.scale),
					opacity: Tween::settled(anim.opacity),
				});
		}
	}

	pub fn frame(&self) -> Frame<'_> {
		let category = self
			.catalog
			.category(&self.interaction.active_category_id)
			.unwrap_or_else(|| self.catalog.first());
		let hub_anim = animation_for(
			NodeTarget::Hub,
			&self.interaction,
			self.reduced_motion,
			&self.animation,
		);

		let entries = self.content.entries(&self.catalog, Some(category));
		let (rx, ry) = self.orbit.radii(self.profile.orbit_radius);
		let offsets = orbit_positions(entries.len(), rx, ry, DEFAULT_START_ANGLE_DEG);

		let nodes = entries
			.into_iter()
			.zip(offsets)
			.enumerate()
			.map(|(index, (entry, offset))| {
				let animation = animation_for(
					NodeTarget::Node {
						index,
						category_id: entry.category_id,
						node_id: entry.id,
					},
					&self.interaction,
					self.reduced_motion,
					&self.animation,
				);
				let (scale, opacity) = self.tweens.get(entry.id).map_or(
					(animation.scale, animation.opacity),
					|t| (t.scale.value(), t.opacity.value()),
				);
				NodeFrame {
					hovered: self.interaction.hovered_node_id.as_deref() == Some(entry.id),
					progress: entrance_progress(self.entrance_elapsed_ms, &animation),
					entry,
					offset,
					animation,
					scale,
					opacity,
				}
			})
			.collect();

		Frame {
			profile: &self.profile,
			radii: (rx, ry),
			hub: HubFrame {
				category,
				progress: entrance_progress(self.entrance_elapsed_ms, &hub_anim),
				animation: hub_anim,
			},
			nodes,
			state: &self.interaction,
		}
	}

	/// Node under a point given in container coordinates (origin top-left).
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<(String, String)> {
		let center = self.profile.center();
		let frame = self.frame();
		frame
			.nodes
			.iter()
			.filter(|n| n.progress > 0.0)
			.find(|n| {
				let (dx, dy) = (center + n.offset.0 - x, center + n.offset.1 - y);
				(dx * dx + dy * dy).sqrt() <= self.profile.node_size / 2.0 * n.scale
			})
			.map(|n| (n.entry.id.to_owned(), n.entry.category_id.to_owned()))
	}
}
