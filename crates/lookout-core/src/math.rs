//! Vector math re-exported from [`glam`].
//!
//! Pixel positions throughout Lookout are [`Vec2`]s with the origin at the
//! top-left of the drawing surface.
//!
//! ```
//! use lookout_core::math::Vec2;
//!
//! let pointer = Vec2::new(70.0, 30.0);
//! assert_eq!(pointer + Vec2::X, Vec2::new(71.0, 30.0));
//! ```

pub use glam::*;
