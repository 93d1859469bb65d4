use crate::grid::Driver;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Set each driver's share of the field's total points, in percent.
///
/// A field with zero total points gives every driver 0%.
pub fn calculate_percentages(drivers: &mut [Driver]) {
    let total: i64 = drivers.iter().map(|d| d.points as i64).sum();

    if total <= 0 {
        tracing::debug!("Total points is zero, every driver gets 0%");
        for driver in drivers.iter_mut() {
            driver.percentage = 0.0;
        }
        return;
    }

    for driver in drivers.iter_mut() {
        driver.percentage = driver.points as f64 / total as f64 * 100.0;
    }
}

/// Finishing order: points descending, then race number ascending for ties.
pub fn compare_drivers(a: &Driver, b: &Driver) -> Ordering {
    b.points.cmp(&a.points).then_with(|| a.number.cmp(&b.number))
}

/// Assign 1-based predicted positions without reordering `drivers`.
pub fn predict_positions(drivers: &mut [Driver]) {
    let mut order: Vec<&Driver> = drivers.iter().collect();
    order.sort_by(|a, b| compare_drivers(a, b));

    let positions: HashMap<u32, usize> = order
        .iter()
        .enumerate()
        .map(|(i, d)| (d.number, i + 1))
        .collect();

    for driver in drivers.iter_mut() {
        if let Some(&position) = positions.get(&driver.number) {
            driver.predicted_position = position;
        }
    }
}

/// Drivers in predicted finishing order.
pub fn ranked(drivers: &[Driver]) -> Vec<&Driver> {
    let mut order: Vec<&Driver> = drivers.iter().collect();
    order.sort_by(|a, b| compare_drivers(a, b));
    order
}
