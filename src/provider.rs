use crate::{
    error::OnscreenResult,
    geometry::{BoundingBox, Viewport},
    visibility::{Visibility, classify},
};

/// Host-side source of element geometry and live viewport dimensions.
///
/// Both methods are called once per check; implementations must report the
/// current state rather than a value captured earlier.
pub trait LayoutProvider {
    /// Reference type used to name an element (a node handle, an id string...).
    type Element: ?Sized;

    fn bounding_box(&self, element: &Self::Element) -> OnscreenResult<BoundingBox>;

    fn viewport(&self) -> OnscreenResult<Viewport>;
}

impl<P: LayoutProvider + ?Sized> LayoutProvider for &P {
    type Element = P::Element;

    fn bounding_box(&self, element: &Self::Element) -> OnscreenResult<BoundingBox> {
        (**self).bounding_box(element)
    }

    fn viewport(&self) -> OnscreenResult<Viewport> {
        (**self).viewport()
    }
}

/// Checks elements against the viewport of the provider it wraps.
#[derive(Clone, Debug)]
pub struct VisibilityChecker<P> {
    provider: P,
}

impl<P: LayoutProvider> VisibilityChecker<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// Box is read first, then the viewport, both at call time.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn classify_element(&self, element: &P::Element) -> OnscreenResult<Visibility> {
        let bbox = self.provider.bounding_box(element)?;
        let viewport = self.provider.viewport()?;
        let v = classify(bbox, viewport);
        if !v.is_visible() {
            tracing::debug!(?bbox, ?viewport, visibility = ?v, "element outside viewport");
        }
        Ok(v)
    }

    pub fn is_element_visible(&self, element: &P::Element) -> OnscreenResult<bool> {
        Ok(self.classify_element(element)?.is_visible())
    }

    /// Keeps the elements that are fully visible, in input order.
    ///
    /// Stops at the first provider error.
    pub fn visible_elements<'e, I>(&self, elements: I) -> OnscreenResult<Vec<&'e P::Element>>
    where
        I: IntoIterator<Item = &'e P::Element>,
        P::Element: 'e,
    {
        let mut out = Vec::new();
        for element in elements {
            if self.is_element_visible(element)? {
                out.push(element);
            }
        }
        Ok(out)
    }
}
