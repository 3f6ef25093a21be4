use std::time::Instant;

use crate::{
    config::MasonryConfig,
    engine::trigger::{ReflowTrigger, TriggerState},
    foundation::core::{ElementId, Length, PositionMode, StyleDecl},
    foundation::error::{MasonryError, MasonryResult},
    foundation::rng::Rng64,
    layout::packer::{Placement, pack},
    layout::sizer::{column_count, column_width_percent},
    layout::state::LayoutState,
    surface::contract::RenderSurface,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Outcome of one completed packing pass.
pub struct PassReport {
    /// Column count the pass packed into.
    pub column_count: usize,
    /// Container width the column count was derived from.
    pub container_width: f64,
    /// Height written to the container.
    pub container_height: f64,
    /// Placements in packing order.
    pub placements: Vec<Placement>,
    /// Items that could not be measured and were packed with zero height.
    pub skipped: Vec<usize>,
}

/// Masonry layout engine bound to one container on one rendering surface.
///
/// Each invocation (mount or resize) sizes columns immediately and schedules a packing pass
/// after the settle delay; the host drives scheduled passes with [`MasonryEngine::poll`].
pub struct MasonryEngine<S: RenderSurface> {
    config: MasonryConfig,
    surface: S,
    state: LayoutState,
    trigger: ReflowTrigger,
    rng: Rng64,
    container_width: f64,
    passes: u64,
    last: Option<PassReport>,
}

impl<S: RenderSurface> MasonryEngine<S> {
    /// Initialize the container and run the first invocation at `now`.
    #[tracing::instrument(skip_all, fields(container = %config.container))]
    pub fn mount(surface: S, config: MasonryConfig, now: Instant) -> MasonryResult<Self> {
        let mut engine = Self::init(surface, config)?;
        engine.invoke(now)?;
        Ok(engine)
    }

    /// Locate the container and its children and mark them for absolute positioning.
    ///
    /// Nothing is scheduled; call [`MasonryEngine::on_resize`] or
    /// [`MasonryEngine::reflow_now`] to lay out.
    pub fn init(mut surface: S, config: MasonryConfig) -> MasonryResult<Self> {
        config.validate()?;
        let container = surface.query_container(&config.container).ok_or_else(|| {
            MasonryError::not_found(format!("container '{}'", config.container))
        })?;
        let items = surface.children(container)?;

        surface.apply(container, StyleDecl::Position(PositionMode::Relative))?;
        for &item in &items {
            surface.apply(item, StyleDecl::Position(PositionMode::Absolute))?;
            surface.apply(item, StyleDecl::Transition(config.transition()))?;
        }
        tracing::debug!(items = items.len(), "masonry container initialized");

        let state = LayoutState::new(container, items, config.initial_columns);
        let trigger = ReflowTrigger::new(config.settle_delay(), config.coalesce);
        let rng = Rng64::new(config.seed);
        Ok(Self {
            config,
            surface,
            state,
            trigger,
            rng,
            container_width: 0.0,
            passes: 0,
            last: None,
        })
    }

    /// Container resized: resize columns now, pack after the settle delay.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_resize(&mut self, now: Instant) -> MasonryResult<()> {
        self.invoke(now)
    }

    /// Run every pass whose settle delay has elapsed at `now`.
    ///
    /// Returns the report of the last pass run, or `None` when nothing was due.
    pub fn poll(&mut self, now: Instant) -> MasonryResult<Option<PassReport>> {
        let due = self.trigger.take_due(now);
        let mut report = None;
        for _ in 0..due {
            report = Some(self.locate_items()?);
        }
        Ok(report)
    }

    /// Cancel pending passes, then size and pack synchronously.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reflow_now(&mut self) -> MasonryResult<PassReport> {
        self.trigger.cancel();
        self.size_columns()?;
        self.locate_items()
    }

    /// Derive the column count from the container width and declare every item's width.
    pub fn size_columns(&mut self) -> MasonryResult<usize> {
        let width = self.surface.client_width(self.state.container())?;
        let columns = column_count(width, self.config.perfect_width, self.config.initial_columns);
        self.state.set_column_count(columns);
        self.container_width = width;

        let item_width = Length::Percent(column_width_percent(columns));
        for &item in self.state.items() {
            self.surface.apply(item, StyleDecl::Width(item_width))?;
        }
        tracing::debug!(container_width = width, columns, "columns sized");
        Ok(columns)
    }

    /// Measure items, pack them in the current order and write positions and container height.
    pub fn locate_items(&mut self) -> MasonryResult<PassReport> {
        let mut heights = Vec::with_capacity(self.state.items().len());
        let mut skipped = Vec::new();
        for (idx, &item) in self.state.items().iter().enumerate() {
            match self.surface.client_height(item) {
                Ok(h) => heights.push(Some(h)),
                Err(err) if err.is_measurement() => {
                    tracing::warn!(item = idx, error = %err, "item skipped");
                    skipped.push(idx);
                    heights.push(None);
                }
                Err(err) => return Err(err),
            }
        }

        let packing = pack(self.state.item_order(), self.state.column_count(), &heights);
        for p in &packing.placements {
            let el = self.element(p.item)?;
            self.surface.apply(el, StyleDecl::Top(Length::Px(p.top)))?;
            self.surface
                .apply(el, StyleDecl::Left(Length::Percent(p.left_percent)))?;
        }
        self.surface.apply(
            self.state.container(),
            StyleDecl::Height(Length::Px(packing.container_height)),
        )?;
        self.state.mark_initialized();
        self.passes += 1;

        tracing::debug!(
            columns = packing.column_count,
            items = packing.placements.len(),
            container_height = packing.container_height,
            "items located"
        );
        let report = PassReport {
            column_count: packing.column_count,
            container_width: self.container_width,
            container_height: packing.container_height,
            placements: packing.placements,
            skipped,
        };
        self.last = Some(report.clone());
        Ok(report)
    }

    fn invoke(&mut self, now: Instant) -> MasonryResult<()> {
        self.size_columns()?;
        if self.config.randomize_order {
            self.state.shuffle_order(&mut self.rng);
        }
        let superseded = self.trigger.schedule(now);
        if superseded > 0 {
            tracing::debug!(superseded, "pending passes superseded");
        }
        Ok(())
    }

    fn element(&self, item: usize) -> MasonryResult<ElementId> {
        self.state
            .items()
            .get(item)
            .copied()
            .ok_or_else(|| MasonryError::not_found(format!("item {item}")))
    }

    /// Layout state.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Engine configuration.
    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    /// Whether a pass is waiting for its settle delay.
    pub fn trigger_state(&self) -> TriggerState {
        self.trigger.state()
    }

    /// When the next scheduled pass becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.trigger.next_deadline()
    }

    /// Number of packing passes completed so far.
    pub fn passes_completed(&self) -> u64 {
        self.passes
    }

    /// Report of the most recent completed pass.
    pub fn last_report(&self) -> Option<&PassReport> {
        self.last.as_ref()
    }

    /// Rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable rendering surface, for hosts that change content or viewport size.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/masonry.rs"]
mod tests;
