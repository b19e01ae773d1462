use crate::geometry::{BoundingBox, Viewport};

/// Outcome of checking a box against a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Every edge lies within `[0, width] x [0, height]`.
    Visible,
    /// The right or bottom edge is past the viewport's far side.
    OverflowsEnd,
    /// The top or left edge is above or left of the origin.
    OverflowsStart,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Classify `bbox` against `viewport`.
///
/// The far edges are checked first, so a box that overflows on both sides
/// reports [`Visibility::OverflowsEnd`]. Edges equal to `0`, `width` or
/// `height` count as inside.
pub fn classify(bbox: BoundingBox, viewport: Viewport) -> Visibility {
    if bbox.right > viewport.width || bbox.bottom > viewport.height {
        Visibility::OverflowsEnd
    } else if bbox.top < 0.0 || bbox.left < 0.0 {
        Visibility::OverflowsStart
    } else {
        Visibility::Visible
    }
}

/// Returns `true` when `bbox` lies entirely within the closed viewport rectangle.
///
/// Total over `f64`. Every comparison against NaN is false, so a NaN edge never
/// trips either overflow test and such a box is reported visible. Callers that
/// can receive NaN from their layout source must filter it themselves.
pub fn is_visible(bbox: BoundingBox, viewport: Viewport) -> bool {
    classify(bbox, viewport).is_visible()
}
