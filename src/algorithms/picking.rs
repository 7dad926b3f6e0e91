use crate::geometry::math::seg_distance_sq;
use crate::model::{Graph, VertexId};

/// Nearest vertex within `radius` of the cursor, with its distance.
pub fn pick_vertex(g: &Graph, x: f64, y: f64, radius: f64) -> Option<(VertexId, f64)> {
    let r2 = radius * radius;
    let mut best: Option<(VertexId, f64)> = None;
    for (i, p) in g.vertices().iter().enumerate() {
        let dx = p.x - x;
        let dy = p.y - y;
        let d2 = dx * dx + dy * dy;
        if d2 <= r2 && best.map_or(true, |(_, bd)| d2 < bd) {
            best = Some((i as VertexId, d2));
        }
    }
    best.map(|(id, d2)| (id, d2.sqrt()))
}

// Vertices win over edges regardless of distance: a vertex must stay
// grabbable even when an edge runs through it.
pub fn pick_impl(g: &Graph, x: f64, y: f64, radius: f64) -> Option<crate::Pick> {
    if let Some((id, dist)) = pick_vertex(g, x, y, radius) {
        return Some(crate::Pick::Vertex { id, dist });
    }
    let r2 = radius * radius;
    let mut best: Option<(u32, f64, f64)> = None;
    for (i, e) in g.edges().iter().enumerate() {
        let a = g.vertices()[e.a as usize];
        let b = g.vertices()[e.b as usize];
        let (d2, t) = seg_distance_sq(x, y, a.x, a.y, b.x, b.y);
        if d2 <= r2 && best.map_or(true, |(_, bd, _)| d2 < bd) {
            best = Some((i as u32, d2, t));
        }
    }
    best.map(|(id, d2, t)| crate::Pick::Edge {
        id,
        t,
        dist: d2.sqrt(),
    })
}
