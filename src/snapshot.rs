use std::collections::BTreeMap;

use crate::{
    error::{OnscreenError, OnscreenResult},
    geometry::{BoundingBox, Viewport},
    provider::LayoutProvider,
};

/// A static layout: one viewport plus named element boxes.
///
/// Loaded from JSON, or built in code for hosts that already hold their
/// geometry. `resize` and `scroll_by` mutate it the way a live window would.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutSnapshot {
    pub viewport: Viewport,
    #[serde(default)]
    pub elements: BTreeMap<String, BoundingBox>,
}

impl LayoutSnapshot {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            elements: BTreeMap::new(),
        }
    }

    pub fn with_element(mut self, id: impl Into<String>, bbox: BoundingBox) -> Self {
        self.elements.insert(id.into(), bbox);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, bbox: BoundingBox) -> Option<BoundingBox> {
        self.elements.insert(id.into(), bbox)
    }

    pub fn remove(&mut self, id: &str) -> Option<BoundingBox> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<BoundingBox> {
        self.elements.get(id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Scroll the page by `(dx, dy)`: content moves the opposite way.
    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        for bbox in self.elements.values_mut() {
            *bbox = bbox.translate(-dx, -dy);
        }
    }

    pub fn validate(&self) -> OnscreenResult<()> {
        let Viewport { width, height } = self.viewport;
        if !width.is_finite() || width < 0.0 {
            return Err(OnscreenError::validation(
                "viewport width must be finite and >= 0",
            ));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(OnscreenError::validation(
                "viewport height must be finite and >= 0",
            ));
        }
        for (id, b) in &self.elements {
            if id.is_empty() {
                return Err(OnscreenError::validation("element id must be non-empty"));
            }
            if ![b.top, b.left, b.right, b.bottom]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(OnscreenError::validation(format!(
                    "element {id:?} has a non-finite edge"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> OnscreenResult<Self> {
        let snapshot: Self =
            serde_json::from_str(s).map_err(|e| OnscreenError::serde(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Fails with a validation error instead of writing edges JSON cannot hold.
    pub fn to_json_string(&self) -> OnscreenResult<String> {
        self.validate()?;
        serde_json::to_string_pretty(self).map_err(|e| OnscreenError::serde(e.to_string()))
    }
}

impl LayoutProvider for LayoutSnapshot {
    type Element = str;

    fn bounding_box(&self, element: &str) -> OnscreenResult<BoundingBox> {
        self.get(element).ok_or_else(|| OnscreenError::unknown_element(element))
    }

    fn viewport(&self) -> OnscreenResult<Viewport> {
        Ok(self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> LayoutSnapshot {
        LayoutSnapshot::new(Viewport::new(1024.0, 768.0))
            .with_element("hero", BoundingBox::new(10.0, 10.0, 500.0, 500.0))
            .with_element("footer", BoundingBox::new(700.0, 0.0, 1024.0, 800.0))
    }

    #[test]
    fn scroll_moves_content_up_and_left() {
        let mut s = desk();
        s.scroll_by(5.0, 40.0);
        assert_eq!(
            s.get("footer"),
            Some(BoundingBox::new(660.0, -5.0, 1019.0, 760.0))
        );
    }

    #[test]
    fn insert_replaces_and_remove_forgets() {
        let mut s = desk();
        let old = s.insert("hero", BoundingBox::default());
        assert_eq!(old, Some(BoundingBox::new(10.0, 10.0, 500.0, 500.0)));
        assert_eq!(s.remove("hero"), Some(BoundingBox::default()));
        assert_eq!(s.ids().collect::<Vec<_>>(), vec!["footer"]);
        assert!(s.bounding_box("hero").is_err());
    }

    #[test]
    fn validate_rejects_bad_viewports_and_ids() {
        let mut s = desk();
        s.validate().unwrap();

        s.resize(Viewport::new(-1.0, 768.0));
        assert!(s.validate().unwrap_err().to_string().contains("width"));

        s.resize(Viewport::new(1024.0, f64::INFINITY));
        assert!(s.validate().unwrap_err().to_string().contains("height"));

        s.resize(Viewport::new(1024.0, 768.0));
        s.insert("", BoundingBox::default());
        assert!(matches!(s.validate(), Err(OnscreenError::Validation(_))));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let err = LayoutSnapshot::from_json_str("{\"viewport\": 3}").unwrap_err();
        assert!(matches!(err, OnscreenError::Serde(_)));
    }

    #[test]
    fn json_roundtrip_preserves_layout() {
        let s = desk();
        let json = s.to_json_string().unwrap();
        assert_eq!(LayoutSnapshot::from_json_str(&json).unwrap(), s);
    }

    #[test]
    fn non_finite_edges_are_refused_before_writing_json() {
        for right in [f64::NAN, f64::INFINITY] {
            let s = desk().with_element("modal", BoundingBox::new(10.0, 10.0, right, 500.0));
            let err = s.validate().unwrap_err();
            assert!(err.to_string().contains("\"modal\""), "{err}");
            assert!(matches!(
                s.to_json_string(),
                Err(OnscreenError::Validation(_))
            ));
        }
    }

    #[test]
    fn checks_still_accept_what_validation_refuses() {
        let s = desk().with_element("modal", BoundingBox::new(10.0, 10.0, f64::NAN, 500.0));
        let checker = crate::provider::VisibilityChecker::new(&s);
        assert!(checker.is_element_visible("modal").unwrap());
    }
}
