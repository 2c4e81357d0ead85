// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced value ticks from `low` to `high` inclusive, `divisions + 1` of them.
pub fn value_ticks(low: f64, high: f64, divisions: usize) -> Vec<f64> {
    linspace(low, high, divisions.max(1) + 1)
}

/// Format a value the way point labels and tick labels print it:
/// integral values without a fractional part, others with up to two decimals.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
