use crate::foundation::{core::ElementId, rng::Rng64};

/// Per-container layout state, owned by one engine for the container's lifetime.
#[derive(Clone, Debug)]
pub struct LayoutState {
    initialized: bool,
    container: ElementId,
    items: Vec<ElementId>,
    column_count: usize,
    item_order: Vec<usize>,
}

impl LayoutState {
    /// Fresh state: identity order, not yet initialized.
    pub fn new(container: ElementId, items: Vec<ElementId>, initial_columns: u32) -> Self {
        let item_order = (0..items.len()).collect();
        Self {
            initialized: false,
            container,
            items,
            column_count: (initial_columns as usize).max(1),
            item_order,
        }
    }

    /// False until the first layout pass completes (or the shuffle hook first runs).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Container handle.
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Child items, in document order.
    pub fn items(&self) -> &[ElementId] {
        &self.items
    }

    /// Column count derived by the most recent sizing pass.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Packing order: a permutation of `0..items().len()`.
    pub fn item_order(&self) -> &[usize] {
        &self.item_order
    }

    pub(crate) fn set_column_count(&mut self, columns: usize) {
        self.column_count = columns.max(1);
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Order-shuffle hook.
    ///
    /// The first invocation only flips `initialized`; later invocations apply a uniform
    /// Fisher-Yates shuffle to the packing order. Returns whether the order was shuffled.
    pub fn shuffle_order(&mut self, rng: &mut Rng64) -> bool {
        if !self.initialized {
            self.initialized = true;
            return false;
        }
        for i in (1..self.item_order.len()).rev() {
            let j = rng.below(i + 1);
            self.item_order.swap(i, j);
        }
        true
    }

    /// True when the packing order is a permutation of the item indices.
    pub fn order_is_permutation(&self) -> bool {
        let mut seen = vec![false; self.items.len()];
        if self.item_order.len() != seen.len() {
            return false;
        }
        for &idx in &self.item_order {
            match seen.get_mut(idx) {
                Some(s) if !*s => *s = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/state.rs"]
mod tests;
