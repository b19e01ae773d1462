pub use kurbo::{Rect, Size};

/// Edge offsets of an element, in pixels, relative to the viewport's top-left origin.
///
/// No ordering between opposite edges is enforced: a box with `right < left`
/// is stored as given. Layout engines are trusted to hand over sane boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Box whose top-left corner sits at `(left, top)` with the given extent.
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(self) -> f64 {
        self.right - self.left
    }

    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

// Conversions keep edges as-is; `Rect::new` does not normalize either.
impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        Self {
            top: r.y0,
            left: r.x0,
            right: r.x1,
            bottom: r.y1,
        }
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        Rect::new(b.left, b.top, b.right, b.bottom)
    }
}

/// Current dimensions of the visible rendering area.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The closed rectangle `[0, width] x [0, height]` as a box.
    pub fn bounds(self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width, self.height)
    }
}

impl From<Size> for Viewport {
    fn from(s: Size) -> Self {
        Self {
            width: s.width,
            height: s.height,
        }
    }
}

impl From<Viewport> for Size {
    fn from(v: Viewport) -> Self {
        Size::new(v.width, v.height)
    }
}
