//! Modal Viewer
//!
//! One overlay per page showing a single item of an ordered collection,
//! with circular navigation and three ways to dismiss it:
//! - state.rs: DOM-free state machine (phases, wrap-around, stale-ticket rules)
//! - renderer.rs: `ItemRenderer` capability turning an item into content
//! - view.rs: `ModalViewer` handle + `ModalViewerOverlay` component

mod renderer;
mod state;
mod view;

pub use renderer::{ImageCaptionRenderer, ItemRenderer, LoadFuture, Resolve};
pub use state::{DismissSource, Direction, TransitionTicket, ViewerCommand, ViewerPhase, ViewerState};
pub use view::{ModalViewer, ModalViewerOverlay, ViewerConfig};
