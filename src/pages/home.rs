use leptos::prelude::*;

use crate::components::radial::RadialCatalog;
use crate::pages::data::product_catalog;

/// Product wheel: every category around the hub.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="catalog-page">
				<div class="catalog-page__intro">
					<h1>"Our Product Range"</h1>
					<p class="subtitle">"Pick a category to see its pipe series."</p>
				</div>
				{product_catalog().map(|catalog| view! { <RadialCatalog catalog=catalog /> })}
			</div>
		</ErrorBoundary>
	}
}
