//! What a render adapter receives each frame, and the trait it implements.
//!
//! The engine never draws. A canvas, the DOM or any retained-mode UI can
//! consume a [`Frame`] and report pointer input back through the
//! `RadialState::on_*` callbacks.

use super::animation::NodeAnimation;
use super::geometry::GeometryProfile;
use super::state::InteractionState;
use super::types::{Catalog, Category};

/// Which level of the catalog orbits the hub.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrbitContent {
	/// Product wheel: every category sits on the orbit, the hub shows the
	/// active one.
	#[default]
	Categories,
	/// Orbit map: the active category's items circle its hub.
	Items,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitEntry<'a> {
	pub id: &'a str,
	pub category_id: &'a str,
	pub label: &'a str,
	pub glyph: String,
	pub image: Option<&'a str>,
	pub short_info: Option<&'a str>,
}

impl OrbitContent {
	pub fn entries<'a>(
		self,
		catalog: &'a Catalog,
		active: Option<&'a Category>,
	) -> Vec<OrbitEntry<'a>> {
		match self {
			Self::Categories => catalog
				.categories()
				.iter()
				.map(|c| OrbitEntry {
					id: &c.id,
					category_id: &c.id,
					label: &c.name,
					glyph: c.fallback_glyph(),
					image: c.image.as_deref(),
					short_info: None,
				})
				.collect(),
			Self::Items => active
				.map(|c| {
					c.items
						.iter()
						.map(|item| OrbitEntry {
							id: &item.id,
							category_id: &c.id,
							label: &item.name,
							glyph: item.fallback_glyph(),
							image: item.image.as_deref(),
							short_info: item.short_info.as_deref(),
						})
						.collect()
				})
				.unwrap_or_default(),
		}
	}
}

#[derive(Clone, Debug)]
pub struct HubFrame<'a> {
	pub category: &'a Category,
	pub animation: NodeAnimation,
	/// Eased entrance progress, 0 hidden to 1 fully shown.
	pub progress: f64,
}

#[derive(Clone, Debug)]
pub struct NodeFrame<'a> {
	pub entry: OrbitEntry<'a>,
	/// Offset from the hub center, px.
	pub offset: (f64, f64),
	pub animation: NodeAnimation,
	/// Current (possibly mid-transition) scale and opacity.
	pub scale: f64,
	pub opacity: f64,
	pub progress: f64,
	pub hovered: bool,
}

#[derive(Clone, Debug)]
pub struct Frame<'a> {
	pub profile: &'a GeometryProfile,
	pub radii: (f64, f64),
	pub hub: HubFrame<'a>,
	pub nodes: Vec<NodeFrame<'a>>,
	pub state: &'a InteractionState,
}

pub trait RenderAdapter {
	fn draw(&mut self, frame: &Frame<'_>);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::radial::types::Item;

	#[test]
	fn entries_follow_catalog_order() {
		let catalog = Catalog::new(vec![
			Category::new("ppr", "PPR Pipes").with_items([
				Item::new("sdr11", "SDR 11").with_short_info("20-110 mm"),
				Item::new("sdr6", "SDR 6"),
			]),
			Category::new("pe", "PE Pipes").with_icon("PE"),
		])
		.unwrap();

		let categories = OrbitContent::Categories.entries(&catalog, None);
		let ids: Vec<_> = categories.iter().map(|e| e.id).collect();
		assert_eq!(ids, ["ppr", "pe"]);
		assert_eq!(categories[1].glyph, "PE");

		let items = OrbitContent::Items.entries(&catalog, catalog.category("ppr"));
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].category_id, "ppr");
		assert_eq!(items[0].short_info, Some("20-110 mm"));
		assert_eq!(items[1].glyph, "S6");

		assert!(OrbitContent::Items.entries(&catalog, None).is_empty());
	}
}
