use crate::layout::sizer::column_left_percent;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Slot and offsets assigned to one item by a packing pass.
pub struct Placement {
    /// Index into the engine's item list.
    pub item: usize,
    /// Row (0-based) in row-major packing order.
    pub row: usize,
    /// Column (0-based).
    pub column: usize,
    /// Vertical offset in pixels from the container's top edge.
    pub top: f64,
    /// Horizontal offset as a percentage of the container width.
    pub left_percent: f64,
    /// Measured height, `None` when the item could not be measured.
    pub height: Option<f64>,
}

impl Placement {
    /// Bottom edge; unmeasured items occupy no vertical space.
    pub fn bottom(&self) -> f64 {
        self.top + self.height.unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Result of one packing pass.
pub struct Packing {
    /// Column count the pass packed into.
    pub column_count: usize,
    /// Placements in packing order (`placements[i]` is the item at `order[i]`).
    pub placements: Vec<Placement>,
    /// Height the container must take to enclose every item.
    pub container_height: f64,
}

impl Packing {
    /// Placement of item `item`, if it was packed.
    pub fn placement_for(&self, item: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.item == item)
    }
}

/// Pack items row-major into `columns` columns.
///
/// Items are visited in `order`. The item at position `i` sits directly below the item at
/// position `i - columns`, whose placement is always already computed. `heights` is indexed by
/// item; a `None` height (or a missing entry) packs the item in its slot with zero height.
pub fn pack(order: &[usize], columns: usize, heights: &[Option<f64>]) -> Packing {
    let columns = columns.max(1);
    let mut placements = Vec::<Placement>::with_capacity(order.len());
    let mut container_height = 0.0f64;

    for (index, &item) in order.iter().enumerate() {
        let row = index / columns;
        let column = index % columns;
        let top = if row == 0 {
            0.0
        } else {
            placements[index - columns].bottom()
        };
        let placement = Placement {
            item,
            row,
            column,
            top,
            left_percent: column_left_percent(columns, column),
            height: heights.get(item).copied().flatten(),
        };
        container_height = container_height.max(placement.bottom());
        placements.push(placement);
    }

    Packing {
        column_count: columns,
        placements,
        container_height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/packer.rs"]
mod tests;
