//! Point-in-polygon classification.

/// Collinearity tolerance for the on-edge check
const EDGE_EPS: f64 = 1e-12;

/// Where a point lies relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPosition {
    Inside,
    Outside,
    OnEdge,
}

/// Classify `point` against `polygon` (vertex ring, closed or open).
///
/// Ray crossing to the +x direction; points on an edge or vertex are
/// reported as `OnEdge` rather than folded into either side.
pub fn point_polygon_check(polygon: &[(f64, f64)], point: (f64, f64)) -> PointPosition {
    let (px, py) = point;
    let n = polygon.len();
    let mut inside = false;

    for i in 0..n {
        let (x1, y1) = polygon[i];
        let (x2, y2) = polygon[(i + 1) % n];

        if on_segment((x1, y1), (x2, y2), (px, py)) {
            return PointPosition::OnEdge;
        }

        if (y1 > py) != (y2 > py) {
            let x_cross = x1 + (py - y1) / (y2 - y1) * (x2 - x1);
            if px < x_cross {
                inside = !inside;
            }
        }
    }

    if inside {
        PointPosition::Inside
    } else {
        PointPosition::Outside
    }
}

fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    let len2 = (b.0 - a.0).powi(2) + (b.1 - a.1).powi(2);
    if len2 == 0.0 {
        // Degenerate edge from a repeated vertex (closed-ring input)
        return false;
    }
    let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    if cross.abs() > EDGE_EPS {
        return false;
    }
    let dot = (p.0 - a.0) * (b.0 - a.0) + (p.1 - a.1) * (b.1 - a.1);
    dot >= -EDGE_EPS && dot <= len2 + EDGE_EPS
}
