//! String-art patterns over a circular frame.
//!
//! Bindings are placed around a circle, a fan of lines through a pivot gives
//! the ideal anchor points, the anchors are snapped onto the real bindings,
//! and the snapped points are tied together with a fixed skip.

pub mod anchors;
pub mod backdrop;
pub mod bindings;
pub mod config;
pub mod draw;
pub mod error;
pub mod intersect;
pub mod pattern;
pub mod raster;
pub mod reconcile;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use pattern::Pattern;
pub use types::{Anchor, AnchorSet, Binding, Color, PixelBuffer, Point, Segment};
