//! Static product range shown on the catalog pages.

use crate::components::radial::{Catalog, CatalogError, Category, Item};

pub fn product_catalog() -> Result<Catalog, CatalogError> {
	Catalog::new(vec![
		Category::new("ppr", "PPR Pipes")
			.with_description("Polypropylene random copolymer pipes for hot and cold water.")
			.with_image("/img/categories/ppr.webp")
			.with_items([
				Item::new("sdr11", "SDR 11").with_short_info("PN10, cold water lines"),
				Item::new("sdr74", "SDR 7.4").with_short_info("PN16, hot and cold water"),
				Item::new("sdr6", "SDR 6").with_short_info("PN20, hot water and heating"),
				Item::new("faser", "Fiber Composite").with_short_info("Low thermal expansion"),
			]),
		Category::new("hdpe", "HDPE Pipes")
			.with_description("PE100 pressure pipes for water mains and irrigation.")
			.with_image("/img/categories/hdpe.webp")
			.with_items([
				Item::new("pe100-pn10", "PE100 PN10").with_short_info("Ø20-630 mm"),
				Item::new("pe100-pn16", "PE100 PN16").with_short_info("Ø20-500 mm"),
				Item::new("pe80", "PE80").with_short_info("Low pressure distribution"),
			]),
		Category::new("pex", "PEX-a Pipes")
			.with_description("Cross-linked polyethylene for underfloor heating.")
			.with_items([
				Item::new("pex-evoh", "PEX-a EVOH").with_short_info("Oxygen barrier"),
				Item::new("pex-al-pex", "PEX-AL-PEX").with_short_info("Multilayer, bendable"),
			]),
		Category::new("sewer", "Sewer Systems")
			.with_description("Corrugated and solid-wall pipes for gravity drainage.")
			.with_icon("SW")
			.with_items([
				Item::new("sn8", "SN8 Corrugated").with_short_info("Ring stiffness 8 kN/m²"),
				Item::new("pvc-u", "PVC-U Solid Wall"),
			]),
		Category::new("fittings", "Fittings")
			.with_description("Electrofusion and socket fusion fittings for every pipe range.")
			.with_items([
				Item::new("elbow", "Elbows"),
				Item::new("tee", "Tees"),
				Item::new("coupler", "Electrofusion Couplers"),
				Item::new("adapter", "Threaded Adapters"),
				Item::new("reducer", "Reducers"),
			]),
		Category::new("valves", "Valves")
			.with_description("Ball and gate valves, new range in certification."),
	])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn product_catalog_is_valid() {
		let catalog = product_catalog().unwrap();
		assert_eq!(catalog.len(), 6);
		assert_eq!(catalog.first().id, "ppr");
		assert!(catalog.category("valves").unwrap().items.is_empty());
	}
}
