use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Index of the sample at or below `fraction` on a grid of `len` evenly spaced samples.
#[inline]
pub fn grid_index(fraction: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    ((fraction * last as f64).floor().max(0.0) as usize).min(last)
}

/// Formats a number the way a caption shows it: no trailing `.0` on whole values.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(deg_to_rad(9.0), 0.15707963267948966);
    }

    #[test]
    fn test_grid_index_clamps_to_last_sample() {
        assert_eq!(grid_index(0.0, 100), 0);
        assert_eq!(grid_index(0.42, 100), 41);
        assert_eq!(grid_index(1.0, 100), 99);
        assert_eq!(grid_index(1.5, 100), 99);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.0), "0");
    }
}
