use leptos::prelude::*;

use crate::components::radial::{OrbitContent, OrbitShape, RadialCatalog};
use crate::pages::data::product_catalog;

/// Orbit map: the selected category's series circle its hub on a flattened
/// orbit.
#[component]
pub fn Orbit() -> impl IntoView {
	let orbit = OrbitShape::Ellipse { y_ratio: 0.85 };

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<p class="error">
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| e.to_string())
							.collect::<Vec<_>>()
							.join(", ")
					}}
				</p>
			}
		}>
			<div class="catalog-page">
				<h1>"Explore by Series"</h1>
				{product_catalog()
					.map(|catalog| {
						view! {
							<RadialCatalog
								catalog=catalog
								content=OrbitContent::Items
								orbit=orbit
							/>
						}
					})}
			</div>
		</ErrorBoundary>
	}
}
