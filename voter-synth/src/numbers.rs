//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Round a f64 and clamp it to the u32 range, returning 0 for NaN values.
#[must_use]
pub fn round_f64_to_u32(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).round();
    cast::<f64, u32>(clamped).unwrap_or(0)
}

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Whole-number percentage of `count` within `total`, rounded half away from zero.
///
/// A zero `total` yields 0 so empty populations never divide by zero.
#[must_use]
pub fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    round_f64_to_u32(100.0 * usize_to_f64(count) / usize_to_f64(total))
}

/// Rounded arithmetic mean of whole-number percentages.
#[must_use]
pub fn mean_percent(values: &[u32]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let sum: f64 = values.iter().map(|value| f64::from(*value)).sum();
    round_f64_to_u32(sum / usize_to_f64(values.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounders_cover_ranges() {
        assert_eq!(round_f64_to_u32(1.6), 2);
        assert_eq!(round_f64_to_u32(f64::NAN), 0);
        assert_eq!(round_f64_to_u32(-4.0), 0);
        assert_eq!(round_f64_to_u32(f64::from(u32::MAX) * 2.0), u32::MAX);
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent_of(5, 0), 0);
        assert_eq!(percent_of(0, 7), 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(3, 3), 100);
    }

    #[test]
    fn mean_of_percentages() {
        assert_eq!(mean_percent(&[]), 0);
        assert_eq!(mean_percent(&[60, 70, 81]), 70);
        assert_eq!(mean_percent(&[50, 51]), 51);
    }
}
