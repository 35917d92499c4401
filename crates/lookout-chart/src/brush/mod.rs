//! Brush: a compressed overview of the full domain with a draggable
//! selection window.

mod controller;
mod view;

pub use controller::{BrushController, BrushEvent, PointerEvent};
pub use view::ChartBrush;
