use crate::foundation::{
    core::{ElementId, StyleDecl},
    error::MasonryResult,
};

/// Read/write contract between the engine and the host that renders elements.
///
/// Measurements are only meaningful once the host has applied previously written
/// declarations; the engine accounts for this with its settle delay.
pub trait RenderSurface {
    /// Resolve a container identifier. `None` when nothing matches.
    fn query_container(&self, selector: &str) -> Option<ElementId>;

    /// Direct children of `container`, in document order.
    fn children(&self, container: ElementId) -> MasonryResult<Vec<ElementId>>;

    /// Current inner width of an element, in pixels.
    fn client_width(&self, el: ElementId) -> MasonryResult<f64>;

    /// Current rendered height of an element, in pixels.
    fn client_height(&self, el: ElementId) -> MasonryResult<f64>;

    /// Write one presentation property.
    fn apply(&mut self, el: ElementId, decl: StyleDecl) -> MasonryResult<()>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn query_container(&self, selector: &str) -> Option<ElementId> {
        (**self).query_container(selector)
    }

    fn children(&self, container: ElementId) -> MasonryResult<Vec<ElementId>> {
        (**self).children(container)
    }

    fn client_width(&self, el: ElementId) -> MasonryResult<f64> {
        (**self).client_width(el)
    }

    fn client_height(&self, el: ElementId) -> MasonryResult<f64> {
        (**self).client_height(el)
    }

    fn apply(&mut self, el: ElementId, decl: StyleDecl) -> MasonryResult<()> {
        (**self).apply(el, decl)
    }
}
