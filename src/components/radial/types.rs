use std::collections::HashSet;

use thiserror::Error;

/// Densest orbit the default geometry table keeps overlap-free. Applies to
/// both the item orbit and the category wheel.
pub const MAX_ITEMS_PER_CATEGORY: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
	pub id: String,
	pub name: String,
	pub short_info: Option<String>,
	pub image: Option<String>,
}

impl Item {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			short_info: None,
			image: None,
		}
	}

	pub fn with_short_info(mut self, info: impl Into<String>) -> Self {
		self.short_info = Some(info.into());
		self
	}

	pub fn with_image(mut self, src: impl Into<String>) -> Self {
		self.image = Some(src.into());
		self
	}

	pub fn fallback_glyph(&self) -> String {
		acronym(&self.name)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
	pub id: String,
	pub name: String,
	pub description: String,
	/// Explicit glyph shown when there is no usable image.
	pub icon: Option<String>,
	pub image: Option<String>,
	/// Order is significant: it fixes each item's angle on the orbit.
	pub items: Vec<Item>,
}

impl Category {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			description: String::new(),
			icon: None,
			image: None,
			items: Vec::new(),
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn with_image(mut self, src: impl Into<String>) -> Self {
		self.image = Some(src.into());
		self
	}

	pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
		self.items = items.into_iter().collect();
		self
	}

	pub fn fallback_glyph(&self) -> String {
		self.icon.clone().unwrap_or_else(|| acronym(&self.name))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	#[error("catalog has no categories")]
	Empty,
	#[error("blank id in category #{position}")]
	BlankId { position: usize },
	#[error("duplicate category id `{0}`")]
	DuplicateCategory(String),
	#[error("duplicate item id `{item}` in category `{category}`")]
	DuplicateItem { category: String, item: String },
	#[error("{count} categories, at most {max} fit on the wheel")]
	TooManyCategories { count: usize, max: usize },
	#[error("category `{category}` has {count} items, at most {max} fit on the orbit")]
	TooManyItems {
		category: String,
		count: usize,
		max: usize,
	},
}

/// A validated, ordered catalog. Validation happens once here so layout
/// passes never need to re-check ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
	categories: Vec<Category>,
}

impl Catalog {
	pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
		if categories.is_empty() {
			return Err(CatalogError::Empty);
		}
		if categories.len() > MAX_ITEMS_PER_CATEGORY {
			return Err(CatalogError::TooManyCategories {
				count: categories.len(),
				max: MAX_ITEMS_PER_CATEGORY,
			});
		}

		let mut seen = HashSet::new();
		for (position, category) in categories.iter().enumerate() {
			if category.id.trim().is_empty() {
				return Err(CatalogError::BlankId { position });
			}
			if !seen.insert(category.id.as_str()) {
				return Err(CatalogError::DuplicateCategory(category.id.clone()));
			}
			if category.items.len() > MAX_ITEMS_PER_CATEGORY {
				return Err(CatalogError::TooManyItems {
					category: category.id.clone(),
					count: category.items.len(),
					max: MAX_ITEMS_PER_CATEGORY,
				});
			}

			let mut item_ids = HashSet::new();
			for item in &category.items {
				if item.id.trim().is_empty() {
					return Err(CatalogError::BlankId { position });
				}
				if !item_ids.insert(item.id.as_str()) {
					return Err(CatalogError::DuplicateItem {
						category: category.id.clone(),
						item: item.id.clone(),
					});
				}
			}
		}

		Ok(Self { categories })
	}

	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	/// Always present: construction rejects empty catalogs.
	pub fn first(&self) -> &Category {
		&self.categories[0]
	}

	pub fn category(&self, id: &str) -> Option<&Category> {
		self.categories.iter().find(|c| c.id == id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.category(id).is_some()
	}

	pub fn len(&self) -> usize {
		self.categories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}
}

/// Deterministic glyph for a name: initials of up to three words, or the
/// first two letters of a single word.
pub fn acronym(name: &str) -> String {
	let words: Vec<&str> = name
		.split(|c: char| !c.is_alphanumeric())
		.filter(|w| !w.is_empty())
		.collect();

	match words.as_slice() {
		[] => "?".into(),
		[word] => word.chars().take(2).flat_map(char::to_uppercase).collect(),
		_ => words
			.iter()
			.take(3)
			.filter_map(|w| w.chars().next())
			.flat_map(char::to_uppercase)
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pipes() -> Category {
		Category::new("ppr", "PPR Pipes").with_items([
			Item::new("sdr11", "SDR 11"),
			Item::new("sdr6", "SDR 6"),
		])
	}

	#[test]
	fn rejects_empty_catalog() {
		assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
	}

	#[test]
	fn rejects_duplicate_category_ids() {
		let err = Catalog::new(vec![pipes(), pipes()]).unwrap_err();
		assert_eq!(err, CatalogError::DuplicateCategory("ppr".into()));
	}

	#[test]
	fn rejects_duplicate_item_ids_within_category() {
		let category = Category::new("pe", "PE Pipes")
			.with_items([Item::new("pn10", "PN10"), Item::new("pn10", "PN10 again")]);
		let err = Catalog::new(vec![category]).unwrap_err();
		assert_eq!(
			err,
			CatalogError::DuplicateItem {
				category: "pe".into(),
				item: "pn10".into()
			}
		);
	}

	#[test]
	fn same_item_id_allowed_across_categories() {
		let other = Category::new("pe", "PE Pipes").with_items([Item::new("sdr11", "SDR 11")]);
		assert!(Catalog::new(vec![pipes(), other]).is_ok());
	}

	#[test]
	fn rejects_blank_ids_and_overfull_orbits() {
		let blank = Category::new("  ", "Nameless");
		assert_eq!(
			Catalog::new(vec![pipes(), blank]),
			Err(CatalogError::BlankId { position: 1 })
		);

		let crowded = Category::new("fittings", "Fittings").with_items(
			(0..=MAX_ITEMS_PER_CATEGORY).map(|i| Item::new(format!("f{i}"), format!("Fitting {i}"))),
		);
		assert!(matches!(
			Catalog::new(vec![crowded]),
			Err(CatalogError::TooManyItems { count: 13, .. })
		));
	}

	#[test]
	fn rejects_overfull_wheel() {
		let categories = (0..=MAX_ITEMS_PER_CATEGORY)
			.map(|i| Category::new(format!("c{i}"), format!("Category {i}")))
			.collect();
		assert_eq!(
			Catalog::new(categories),
			Err(CatalogError::TooManyCategories { count: 13, max: 12 })
		);
	}

	#[test]
	fn empty_category_is_valid() {
		let catalog = Catalog::new(vec![Category::new("valves", "Valves")]).unwrap();
		assert!(catalog.first().items.is_empty());
	}

	#[test]
	fn acronym_is_deterministic() {
		assert_eq!(acronym("PPR Pipes"), "PP");
		assert_eq!(acronym("cross-linked pe pipe systems"), "CLP");
		assert_eq!(acronym("valves"), "VA");
		assert_eq!(acronym("  "), "?");
		assert_eq!(pipes().with_icon("◎").fallback_glyph(), "◎");
	}
}
