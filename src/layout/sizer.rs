/// Column count for a container of `container_width` pixels.
///
/// `round(container_width / perfect_width * initial_columns)`, clamped to at least one
/// column. Non-finite ratios (zero or non-finite `perfect_width`) also yield one column.
pub fn column_count(container_width: f64, perfect_width: f64, initial_columns: u32) -> usize {
    let raw = (container_width / perfect_width * f64::from(initial_columns)).round();
    if !raw.is_finite() || raw < 1.0 {
        tracing::debug!(
            container_width,
            perfect_width,
            initial_columns,
            raw,
            "degenerate column count clamped to 1"
        );
        return 1;
    }
    raw as usize
}

/// Width of one column as a percentage of the container.
pub fn column_width_percent(columns: usize) -> f64 {
    100.0 / columns.max(1) as f64
}

/// Left offset of `column` as a percentage of the container.
pub fn column_left_percent(columns: usize, column: usize) -> f64 {
    column_width_percent(columns) * column as f64
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizer.rs"]
mod tests;
