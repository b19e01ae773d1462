//! Onscreen answers one question: is an element entirely inside the viewport?
//!
//! # Layers
//!
//! 1. **Predicate**: [`is_visible`] / [`classify`] over a [`BoundingBox`] and a [`Viewport`].
//!    Pure, total, boundary-inclusive.
//! 2. **Provider seam**: [`LayoutProvider`] supplies element boxes and the live viewport;
//!    [`VisibilityChecker`] reads both at call time and applies the predicate.
//! 3. **Snapshot**: [`LayoutSnapshot`] is an in-memory provider that loads from JSON.
//!
//! NaN edges make every comparison false, so a box with a NaN edge is reported
//! visible. This is kept as-is; filter non-finite geometry before checking if that matters.
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod provider;
pub mod snapshot;
pub mod visibility;

pub use error::{OnscreenError, OnscreenResult};
pub use geometry::{BoundingBox, Rect, Size, Viewport};
pub use provider::{LayoutProvider, VisibilityChecker};
pub use snapshot::LayoutSnapshot;
pub use visibility::{Visibility, classify, is_visible};
