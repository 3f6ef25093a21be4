//! Masonry is a responsive column-packing reflow engine.
//!
//! Given a container and its child items on some rendering surface, the engine derives a column
//! count from the container width, packs items row-major into those columns (each item sits
//! directly below the item one row above it) and writes absolute positions plus the container
//! height back to the surface.
//!
//! # Pipeline overview
//!
//! 1. **Initialize**: resolve the container, collect its children, mark them absolutely positioned.
//! 2. **Size columns**: `round(width / perfect_width * initial_columns)`, never below one column.
//! 3. **Pack** (after a settle delay): measure heights, stack items, set the container height.
//! 4. **Reflow**: every resize repeats 2 and schedules 3; superseded passes are coalesced.
//!
//! The rendering surface is abstracted by [`RenderSurface`]; [`MemorySurface`] is an in-memory
//! implementation used for simulation and tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod foundation;
mod gallery;
mod layout;
mod surface;

pub use config::MasonryConfig;
pub use engine::masonry::{MasonryEngine, PassReport};
pub use engine::trigger::{ReflowTrigger, TriggerState};
pub use foundation::core::{ElementId, Length, PositionMode, StyleDecl};
pub use foundation::error::{MasonryError, MasonryResult};
pub use foundation::rng::Rng64;
pub use gallery::{Gallery, GalleryItem, GalleryMetrics, MediaKind};
pub use layout::packer::{Packing, Placement, pack};
pub use layout::sizer::{column_count, column_left_percent, column_width_percent};
pub use layout::state::LayoutState;
pub use surface::contract::RenderSurface;
pub use surface::memory::{ElementStyle, IntrinsicHeight, MemorySurface};
