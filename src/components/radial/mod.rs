//! Radial catalog visualization: a hub for the active category with nodes
//! laid out on an orbit around it.
//!
//! The engine (`types`, `layout`, `geometry`, `state`, `animation`, `frame`)
//! is plain Rust with no DOM access. `render`, `component` and `panels` are
//! the browser-side adapters that draw frames and feed pointer input back.

pub mod animation;
mod component;
pub mod frame;
pub mod geometry;
pub mod layout;
mod panels;
mod render;
pub mod state;
pub mod types;

pub use animation::{AnimationConfig, Emphasis, NodeAnimation, NodeTarget, animation_for};
pub use component::{RadialCatalog, RadialHost};
pub use frame::{Frame, OrbitContent, RenderAdapter};
pub use geometry::{Breakpoint, GeometryProfile, GeometryTable};
pub use layout::{OrbitShape, position};
pub use state::{InteractionEvent, InteractionState, RadialState};
pub use types::{Catalog, CatalogError, Category, Item};
