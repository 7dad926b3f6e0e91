// Pairwise segment classification for the crossing check. Degeneracy is
// decided by exact zero tests on the cross terms: nudging a vertex off a
// shared line must flip the verdict, so no epsilon is applied here.

use crate::geometry::math::point_on;
use crate::model::Point;

/// Cross-product terms of the lines through (p1, p2) and (q1, q2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTerms {
    pub numerator_a: f64,
    pub numerator_b: f64,
    pub denominator: f64,
}

pub fn line_terms(p1: Point, p2: Point, q1: Point, q2: Point) -> LineTerms {
    LineTerms {
        numerator_a: (q2.x - q1.x) * (p1.y - q1.y) - (q2.y - q1.y) * (p1.x - q1.x),
        numerator_b: (p2.x - p1.x) * (p1.y - q1.y) - (p2.y - p1.y) * (p1.x - q1.x),
        denominator: (q2.y - q1.y) * (p2.x - p1.x) - (q2.x - q1.x) * (p2.y - p1.y),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegCrossing {
    /// No contact, or contact outside both open interiors.
    Separate,
    /// Proper crossing strictly inside both segments.
    Interior { ua: f64, ub: f64, at: Point },
    /// No shared endpoint, both segments on one infinite line.
    CollinearLines,
    /// One shared endpoint value, the other endpoints off that line.
    SharedVertex,
    /// One shared endpoint value and all four endpoints on one line.
    SharedCollinear,
    /// Only two distinct endpoint values among the four.
    Coincident,
}

impl SegCrossing {
    pub fn colliding(self) -> bool {
        !matches!(self, SegCrossing::Separate | SegCrossing::SharedVertex)
    }
}

fn distinct_endpoints(pts: [Point; 4]) -> usize {
    let mut n = 0;
    for (i, p) in pts.iter().enumerate() {
        if !pts[..i].iter().any(|q| q == p) {
            n += 1;
        }
    }
    n
}

/// Classify the segment pair (p1, p2) and (q1, q2).
///
/// Endpoints are compared by coordinate value, not identity, so two
/// distinct vertices dragged onto the same spot behave like a shared
/// endpoint.
pub fn classify(p1: Point, p2: Point, q1: Point, q2: Point) -> SegCrossing {
    match distinct_endpoints([p1, p2, q1, q2]) {
        3 => {
            // Touching at a shared vertex is legal topology; only the
            // degenerate straight-line configuration crosses.
            let lt = line_terms(p1, p2, q1, q2);
            if lt.numerator_a == 0.0 && lt.numerator_b == 0.0 && lt.denominator == 0.0 {
                SegCrossing::SharedCollinear
            } else {
                SegCrossing::SharedVertex
            }
        }
        2 => SegCrossing::Coincident,
        _ => {
            let lt = line_terms(p1, p2, q1, q2);
            if lt.denominator == 0.0 {
                if lt.numerator_a == 0.0 && lt.numerator_b == 0.0 {
                    // Same infinite line; overlap extent is not consulted.
                    SegCrossing::CollinearLines
                } else {
                    SegCrossing::Separate
                }
            } else {
                let ua = lt.numerator_a / lt.denominator;
                let ub = lt.numerator_b / lt.denominator;
                if ua > 0.0 && ua < 1.0 && ub > 0.0 && ub < 1.0 {
                    SegCrossing::Interior {
                        ua,
                        ub,
                        at: point_on(p1, p2, ua),
                    }
                } else {
                    SegCrossing::Separate
                }
            }
        }
    }
}
