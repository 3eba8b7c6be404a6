use serde::Serialize;

/// Totals shown next to the weekly list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub week_total: f64,
    pub month_total: f64,
    pub total_count: usize,
}
