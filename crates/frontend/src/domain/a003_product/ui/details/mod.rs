//! Product Details (modal content)
//!
//! - renderer.rs: `ProductRenderer`, fetches details per open
//! - view.rs: Leptos components (pure UI)

mod renderer;
mod view;

pub use renderer::ProductRenderer;
