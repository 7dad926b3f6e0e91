use crate::geometry::intersect::classify;
use crate::model::Graph;

/// Fresh collision flags, indexed by edge id: every unordered pair of
/// distinct edges is classified and a colliding verdict marks both.
/// Recomputed from scratch on every call; nothing is cached, so flags
/// are only meaningful for the graph as it was at the call.
pub fn find_collisions(g: &Graph) -> Vec<bool> {
    let verts = g.vertices();
    let edges = g.edges();
    let mut colliding = vec![false; edges.len()];
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            let e1 = edges[i];
            let e2 = edges[j];
            let hit = classify(
                verts[e1.a as usize],
                verts[e1.b as usize],
                verts[e2.a as usize],
                verts[e2.b as usize],
            )
            .colliding();
            if hit {
                colliding[i] = true;
                colliding[j] = true;
            }
        }
    }
    colliding
}

pub fn solved(g: &Graph) -> bool {
    find_collisions(g).iter().all(|hit| !hit)
}
