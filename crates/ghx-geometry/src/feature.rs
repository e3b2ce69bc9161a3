//! Feature recognition over candidate borehole coordinates.

use crate::shape::{PointPosition, point_polygon_check};

/// Filter `coordinates` against a polygon cutout.
///
/// With `remove_inside` the points inside `boundary` are dropped (keeping a
/// no-go zone clear); without it the points outside are dropped (confining
/// the field to a property boundary). `keep_contour` controls whether
/// points exactly on the boundary survive the filter.
pub fn remove_cutout(
    coordinates: &[(f64, f64)],
    boundary: &[(f64, f64)],
    remove_inside: bool,
    keep_contour: bool,
) -> Vec<(f64, f64)> {
    coordinates
        .iter()
        .copied()
        .filter(|&point| {
            match point_polygon_check(boundary, point) {
                PointPosition::Inside => !remove_inside,
                PointPosition::Outside => remove_inside,
                PointPosition::OnEdge => keep_contour,
            }
        })
        .collect()
}

/// Axis-aligned bounding rectangle over a set of boundary outlines.
///
/// Returns a closed ring (first vertex repeated at the end), matching the
/// outline convention the design algorithms consume.
pub fn bounding_rectangle(outlines: &[Vec<(f64, f64)>]) -> Vec<(f64, f64)> {
    let mut x_min = f64::INFINITY;
    let mut y_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for outline in outlines {
        for &(x, y) in outline {
            x_min = x_min.min(x);
            y_min = y_min.min(y);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }

    vec![
        (x_min, y_min),
        (x_max, y_min),
        (x_max, y_max),
        (x_min, y_max),
        (x_min, y_min),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
    }

    #[test]
    fn remove_inside_keeps_contour() {
        let coords = vec![(0.5, 0.5), (1.0, 0.5), (2.0, 0.5)];
        let kept = remove_cutout(&coords, &unit_square(), true, true);
        assert_eq!(kept, vec![(1.0, 0.5), (2.0, 0.5)]);
    }

    #[test]
    fn remove_inside_drops_contour() {
        let coords = vec![(0.5, 0.5), (1.0, 0.5), (2.0, 0.5)];
        let kept = remove_cutout(&coords, &unit_square(), true, false);
        assert_eq!(kept, vec![(2.0, 0.5)]);
    }

    #[test]
    fn keep_inside_drops_outside() {
        let coords = vec![(0.5, 0.5), (1.0, 0.5), (2.0, 0.5)];
        let kept = remove_cutout(&coords, &unit_square(), false, true);
        assert_eq!(kept, vec![(0.5, 0.5), (1.0, 0.5)]);
    }

    #[test]
    fn keep_inside_drops_outside_and_contour() {
        let coords = vec![(0.5, 0.5), (1.0, 0.5), (2.0, 0.5)];
        let kept = remove_cutout(&coords, &unit_square(), false, false);
        assert_eq!(kept, vec![(0.5, 0.5)]);
    }

    #[test]
    fn bounding_rectangle_spans_all_outlines() {
        let outlines = vec![
            vec![(0.0, 1.0), (2.0, 3.0)],
            vec![(-1.0, 0.5), (1.5, 4.0)],
        ];
        let rect = bounding_rectangle(&outlines);
        assert_eq!(rect.len(), 5);
        assert_eq!(rect[0], (-1.0, 0.5));
        assert_eq!(rect[2], (2.0, 4.0));
        assert_eq!(rect[0], rect[4]);
    }
}
