pub const NOT_AVAILABLE: &str = "n/a";

/// Arithmetic mean of the values that are present.
///
/// Incomplete records contribute `None` and are skipped. Returns `None` when
/// nothing is left to average, so callers never divide by zero.
pub fn average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|value| value.is_finite())
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

// "148 min" -> 148
pub fn parse_runtime_minutes(runtime: &str) -> Option<u32> {
    runtime.split_whitespace().next()?.parse().ok()
}

// "8.8" -> 8.8, "N/A" -> None
pub fn parse_rating(rating: &str) -> Option<f64> {
    rating.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

pub fn format_average(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{:.*}", decimals, value),
        None => NOT_AVAILABLE.to_string(),
    }
}
