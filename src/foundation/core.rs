use std::time::Duration;

/// Opaque handle to an element owned by a [`crate::RenderSurface`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// A style length, either absolute or relative to the parent's width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the containing element's width.
    Percent(f64),
}

impl Length {
    /// Resolve against the containing element's width.
    pub fn resolve(self, parent_width: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => parent_width * p / 100.0,
        }
    }
}

/// Positioning scheme of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionMode {
    /// Normal flow.
    #[default]
    Static,
    /// Establishes the containing block for absolutely positioned children.
    Relative,
    /// Placed by explicit `top`/`left` inside the containing block.
    Absolute,
}

/// One presentation property write issued against a rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleDecl {
    /// Positioning scheme.
    Position(PositionMode),
    /// Transition duration hint for position/size changes.
    Transition(Duration),
    /// Top offset.
    Top(Length),
    /// Left offset.
    Left(Length),
    /// Width declaration.
    Width(Length),
    /// Height declaration (written on the container only).
    Height(Length),
}
