/// World-space y coordinate of the ground surface.
pub const GROUND_HEIGHT: f64 = -3.5;

/// Fixed-point multiplier applied to dimensions before integer division.
pub const DEFAULT_SCALE_UNIT: i64 = 1000;

/// Ratio of number of platforms over the height of the shortest column.
pub const DEFAULT_PLATFORM_RATIO: f64 = 0.3;

/// Attempts allowed per gap when randomized placement collides with an
/// already chosen column.
pub const MAX_GAP_ATTEMPTS: u32 = 3;

pub const DEFAULT_PRINCIPAL_BLOCK: &str = "small_square";
pub const DEFAULT_PLATFORM_BLOCK: &str = "long_rectangle";
pub const DEFAULT_ENEMY: &str = "pig";
pub const DEFAULT_PLATFORM_MATERIAL: &str = "stone";

/// Raw tag that parses to the platform sentinel.
pub const PLATFORM_TAG: &str = "platform";

/// Raw tag that parses to the empty sentinel.
pub const EMPTY_TAG: &str = "none";

/// Number of copies of `covering` needed to span `covered`, rounding up
/// only when there is a remainder.
///
/// Both values are already fixed-point scaled, so the comparison is exact.
pub fn cover_count(covered: i64, covering: i64) -> i64 {
    let (count, remainder) = (covered / covering, covered % covering);
    if remainder != 0 {
        count + 1
    } else {
        count
    }
}

/// Scale a world dimension into fixed-point units.
pub fn to_scaled(value: f64, scale_unit: i64) -> i64 {
    (value * scale_unit as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_count_exact_division_does_not_round_up() {
        assert_eq!(cover_count(500, 250), 2);
        assert_eq!(cover_count(501, 250), 3);
        assert_eq!(cover_count(0, 250), 0);
    }

    #[test]
    fn scaling_removes_float_noise() {
        // 0.57 * 100 is 56.99999... in binary floating point.
        assert_eq!(to_scaled(0.57, 100), 57);
        assert_eq!(to_scaled(2.06, 1000), 2060);
    }
}
