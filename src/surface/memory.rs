use std::time::Duration;

use crate::{
    foundation::core::{ElementId, Length, PositionMode, StyleDecl},
    foundation::error::{MasonryError, MasonryResult},
    surface::contract::RenderSurface,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// How an element's rendered height follows from its rendered width.
pub enum IntrinsicHeight {
    /// Height does not depend on width.
    Fixed(f64),
    /// Aspect-preserving media (`ratio = width / height`) plus a fixed extra (caption, padding).
    Aspect {
        /// Media width divided by media height.
        ratio: f64,
        /// Pixels added below the media.
        extra_px: f64,
    },
}

impl IntrinsicHeight {
    /// Rendered height at `width`.
    pub fn at_width(self, width: f64) -> f64 {
        match self {
            Self::Fixed(h) => h,
            Self::Aspect { ratio, extra_px } => {
                if ratio > 0.0 && ratio.is_finite() {
                    width / ratio + extra_px
                } else {
                    extra_px
                }
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Last declared value of every property the engine writes.
pub struct ElementStyle {
    /// Positioning scheme.
    pub position: PositionMode,
    /// Transition duration hint.
    pub transition: Option<Duration>,
    /// Top offset.
    pub top: Option<Length>,
    /// Left offset.
    pub left: Option<Length>,
    /// Width declaration.
    pub width: Option<Length>,
    /// Height declaration.
    pub height: Option<Length>,
}

#[derive(Clone, Debug)]
struct Node {
    key: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    viewport_width: Option<f64>,
    intrinsic: IntrinsicHeight,
    attached: bool,
    style: ElementStyle,
}

/// In-memory element tree implementing [`RenderSurface`].
///
/// Measurements are computed on read from the declared styles, so every write is
/// "settled" immediately. Hosts simulate viewport changes with
/// [`MemorySurface::set_container_width`].
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<Node>,
}

impl MemorySurface {
    /// Empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root container with a host-controlled width.
    pub fn add_container(&mut self, key: impl Into<String>, width: f64) -> ElementId {
        self.push(Node {
            key: key.into(),
            parent: None,
            children: Vec::new(),
            viewport_width: Some(width.max(0.0)),
            intrinsic: IntrinsicHeight::Fixed(0.0),
            attached: true,
            style: ElementStyle::default(),
        })
    }

    /// Append a child element under `parent`.
    pub fn add_item(
        &mut self,
        parent: ElementId,
        key: impl Into<String>,
        intrinsic: IntrinsicHeight,
    ) -> MasonryResult<ElementId> {
        self.node(parent)?;
        let id = self.push(Node {
            key: key.into(),
            parent: Some(parent),
            children: Vec::new(),
            viewport_width: None,
            intrinsic,
            attached: true,
            style: ElementStyle::default(),
        });
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Change the host-controlled width of a container (a viewport resize).
    pub fn set_container_width(&mut self, container: ElementId, width: f64) -> MasonryResult<()> {
        let node = self.node_mut(container)?;
        if node.viewport_width.is_none() {
            return Err(MasonryError::validation(format!(
                "element '{}' is not a container",
                node.key
            )));
        }
        node.viewport_width = Some(width.max(0.0));
        Ok(())
    }

    /// Replace an element's intrinsic height model (content changed).
    pub fn set_intrinsic(&mut self, el: ElementId, intrinsic: IntrinsicHeight) -> MasonryResult<()> {
        self.node_mut(el)?.intrinsic = intrinsic;
        Ok(())
    }

    /// Detach an element: it keeps its slot but can no longer be measured.
    pub fn detach(&mut self, el: ElementId) -> MasonryResult<()> {
        self.node_mut(el)?.attached = false;
        Ok(())
    }

    /// Last declared style of `el`.
    pub fn style(&self, el: ElementId) -> Option<&ElementStyle> {
        self.nodes.get(el.0 as usize).map(|n| &n.style)
    }

    /// Identifier `el` was created with.
    pub fn key(&self, el: ElementId) -> Option<&str> {
        self.nodes.get(el.0 as usize).map(|n| n.key.as_str())
    }

    fn push(&mut self, node: Node) -> ElementId {
        let id = ElementId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn node(&self, el: ElementId) -> MasonryResult<&Node> {
        self.nodes
            .get(el.0 as usize)
            .ok_or_else(|| MasonryError::not_found(format!("element {}", el.0)))
    }

    fn node_mut(&mut self, el: ElementId) -> MasonryResult<&mut Node> {
        self.nodes
            .get_mut(el.0 as usize)
            .ok_or_else(|| MasonryError::not_found(format!("element {}", el.0)))
    }

    fn attached_node(&self, el: ElementId) -> MasonryResult<&Node> {
        let node = self.node(el)?;
        if !node.attached {
            return Err(MasonryError::measurement(format!(
                "element '{}' is detached",
                node.key
            )));
        }
        Ok(node)
    }
}

impl RenderSurface for MemorySurface {
    fn query_container(&self, selector: &str) -> Option<ElementId> {
        let key = selector.trim().trim_start_matches('#');
        self.nodes
            .iter()
            .position(|n| n.attached && n.key == key)
            .map(|idx| ElementId(idx as u32))
    }

    fn children(&self, container: ElementId) -> MasonryResult<Vec<ElementId>> {
        Ok(self.node(container)?.children.clone())
    }

    fn client_width(&self, el: ElementId) -> MasonryResult<f64> {
        let node = self.attached_node(el)?;
        if let Some(w) = node.viewport_width {
            return Ok(w);
        }
        let parent_width = match node.parent {
            Some(parent) => self.client_width(parent)?,
            None => 0.0,
        };
        Ok(node
            .style
            .width
            .map_or(parent_width, |w| w.resolve(parent_width)))
    }

    fn client_height(&self, el: ElementId) -> MasonryResult<f64> {
        let node = self.attached_node(el)?;
        if let Some(Length::Px(h)) = node.style.height {
            return Ok(h);
        }
        let width = self.client_width(el)?;
        Ok(node.intrinsic.at_width(width))
    }

    fn apply(&mut self, el: ElementId, decl: StyleDecl) -> MasonryResult<()> {
        let style = &mut self.node_mut(el)?.style;
        match decl {
            StyleDecl::Position(mode) => style.position = mode,
            StyleDecl::Transition(d) => style.transition = Some(d),
            StyleDecl::Top(v) => style.top = Some(v),
            StyleDecl::Left(v) => style.left = Some(v),
            StyleDecl::Width(v) => style.width = Some(v),
            StyleDecl::Height(v) => style.height = Some(v),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/memory.rs"]
mod tests;
