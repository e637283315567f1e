pub mod panels;
pub mod plot;
pub mod tables;

/// Undefined statistics render as a dash.
pub fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "–".to_string(), |v| format!("{v:.2}"))
}

/// Signed variant for deltas.
pub fn fmt_delta(value: Option<f64>) -> String {
    value.map_or_else(|| "–".to_string(), |v| format!("{v:+.2}"))
}
