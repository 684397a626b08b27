//! Fault tolerance verdict for a cluster spread across zones.

/// Returns true if the cluster meets `expected` on both the durability and the
/// availability axis.
///
/// Both bounds must independently be at least `expected`. Any integer is
/// accepted: a negative bound is a degraded but legitimate state and simply
/// fails the comparison.
///
/// # Example
/// ```
/// use ftcheck::core::fault_tolerance::has_desired_fault_tolerance;
///
/// assert!(has_desired_fault_tolerance(1, 1, 2));
/// assert!(!has_desired_fault_tolerance(2, 1, 3));
/// ```
pub const fn has_desired_fault_tolerance(
    expected: i64,
    max_zone_failures_without_losing_data: i64,
    max_zone_failures_without_losing_availability: i64,
) -> bool {
    max_zone_failures_without_losing_data >= expected
        && max_zone_failures_without_losing_availability >= expected
}
