//! Pie-chart arc geometry.

use crate::model::category::Category;

const FULL_CIRCLE_DEGREES: f64 = 360.0;

/// One arc of a pie chart, angles in degrees clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice<K> {
    pub key: K,
    pub count: usize,
    pub start_degrees: f64,
    pub sweep_degrees: f64,
}

/// Builds arcs for the non-zero entries of `counts`.
///
/// `reveal` is the animation fraction; it is clamped to `[0, 1]` and scales
/// every sweep, so the chart grows from nothing to a full circle.
pub fn pie_slices<K: Category>(counts: &[(K, usize)], reveal: f64) -> Vec<PieSlice<K>> {
    let total: usize = counts.iter().map(|(_, count)| *count).sum();
    if total == 0 {
        return Vec::new();
    }
    let reveal = if reveal.is_nan() {
        0.0
    } else {
        reveal.clamp(0.0, 1.0)
    };

    let mut start = 0.0;
    counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(key, count)| {
            let sweep = (*count as f64 / total as f64) * FULL_CIRCLE_DEGREES * reveal;
            let slice = PieSlice {
                key: *key,
                count: *count,
                start_degrees: start,
                sweep_degrees: sweep,
            };
            start += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::pie_slices;
    use crate::model::category::Priority;

    #[test]
    fn full_reveal_covers_circle_and_skips_zero_slices() {
        let counts = vec![
            (Priority::Low, 0),
            (Priority::Medium, 1),
            (Priority::High, 3),
        ];
        let slices = pie_slices(&counts, 1.0);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].key, Priority::Medium);
        assert_eq!(slices[0].sweep_degrees, 90.0);
        assert_eq!(slices[1].start_degrees, 90.0);
        assert_eq!(slices[1].sweep_degrees, 270.0);
    }

    #[test]
    fn partial_reveal_scales_sweeps_and_empty_counts_yield_nothing() {
        let counts = vec![(Priority::Low, 2), (Priority::Urgent, 2)];
        let slices = pie_slices(&counts, 0.5);
        assert_eq!(slices[0].sweep_degrees, 90.0);
        assert_eq!(slices[1].start_degrees, 90.0);

        let clamped = pie_slices(&counts, 7.0);
        assert_eq!(clamped[1].sweep_degrees, 180.0);

        assert!(pie_slices(&[(Priority::Low, 0)], 1.0).is_empty());
    }
}
