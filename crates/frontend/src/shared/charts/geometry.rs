use std::f64::consts::PI;

const PALETTE: [&str; 10] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2", "#db2777", "#65a30d",
    "#ea580c", "#475569",
];

pub fn color_at(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub color: &'static str,
    /// SVG path `d` attribute
    pub path: String,
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    // angle 0 is 12 o'clock, clockwise
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Slices of a pie centred at (`cx`, `cy`); non-positive values are skipped
pub fn pie_slices(data: &[(String, f64)], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let positive: Vec<(usize, &(String, f64))> = data
        .iter()
        .enumerate()
        .filter(|(_, (_, v))| v.is_finite() && *v > 0.0)
        .collect();
    let total: f64 = positive.iter().map(|(_, (_, v))| v).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    positive
        .into_iter()
        .map(|(index, (label, value))| {
            let fraction = value / total;
            let sweep = fraction * 2.0 * PI;
            let path = if fraction >= 0.9999 {
                // an arc cannot start and end at the same point
                format!(
                    "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
                    top = cy - r,
                    bottom = cy + r
                )
            } else {
                let (x1, y1) = point_on_circle(cx, cy, r, start);
                let (x2, y2) = point_on_circle(cx, cy, r, start + sweep);
                let large_arc = if sweep > PI { 1 } else { 0 };
                format!(
                    "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
                )
            };
            start += sweep;
            PieSlice {
                label: label.clone(),
                value: *value,
                fraction,
                color: color_at(index),
                path,
            }
        })
        .collect()
}

/// Points of a line chart inside a `width` x `height` box.
///
/// The x axis spreads the values evenly; the y axis runs from 0 at the bottom
/// to the largest value at the top, `padding` away from every edge.
pub fn polyline_points(values: &[f64], width: f64, height: f64, padding: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let inner_w = width - 2.0 * padding;
    let inner_h = height - 2.0 * padding;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() > 1 {
                padding + step * i as f64
            } else {
                width / 2.0
            };
            let ratio = if max > 0.0 { value.max(0.0) / max } else { 0.0 };
            let y = height - padding - ratio * inner_h;
            (x, y)
        })
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar lengths scaled so the largest value fills `max_length`
pub fn bar_heights(values: &[f64], max_length: f64) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|v| {
            if max > 0.0 {
                v.max(0.0) / max * max_length
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<(String, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("s{}", i), *v))
            .collect()
    }

    #[test]
    fn test_pie_fractions_sum_to_one() {
        let slices = pie_slices(&series(&[1.0, 2.0, 0.0, 1.0]), 100.0, 100.0, 80.0);
        assert_eq!(slices.len(), 3);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((slices[1].fraction - 0.5).abs() < 1e-9);
        // colors follow the original positions
        assert_eq!(slices[2].color, color_at(3));
    }

    #[test]
    fn test_pie_first_slice_starts_at_top() {
        let slices = pie_slices(&series(&[1.0, 1.0]), 100.0, 100.0, 80.0);
        assert!(slices[0].path.starts_with("M 100.00 100.00 L 100.00 20.00"));
        // half circle ends at the bottom
        assert!(slices[0].path.contains("100.00 180.00"));
    }

    #[test]
    fn test_pie_single_slice_is_full_circle() {
        let slices = pie_slices(&series(&[5.0]), 50.0, 50.0, 40.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches(" A ").count(), 2);
    }

    #[test]
    fn test_pie_empty_when_no_positive_values() {
        assert!(pie_slices(&series(&[0.0, -3.0]), 0.0, 0.0, 10.0).is_empty());
        assert!(pie_slices(&[], 0.0, 0.0, 10.0).is_empty());
    }

    #[test]
    fn test_polyline_points() {
        let points = polyline_points(&[0.0, 50.0, 100.0], 220.0, 120.0, 10.0);
        assert_eq!(points, vec![(10.0, 110.0), (110.0, 60.0), (210.0, 10.0)]);
        assert_eq!(points_attr(&points[..2]), "10.0,110.0 110.0,60.0");
    }

    #[test]
    fn test_polyline_single_value_is_centered() {
        assert_eq!(polyline_points(&[7.0], 200.0, 100.0, 10.0), vec![(100.0, 10.0)]);
        assert_eq!(polyline_points(&[0.0], 200.0, 100.0, 10.0), vec![(100.0, 90.0)]);
        assert!(polyline_points(&[], 200.0, 100.0, 10.0).is_empty());
    }

    #[test]
    fn test_bar_heights() {
        assert_eq!(bar_heights(&[10.0, 5.0, 0.0], 200.0), vec![200.0, 100.0, 0.0]);
        assert_eq!(bar_heights(&[0.0, 0.0], 200.0), vec![0.0, 0.0]);
    }
}
