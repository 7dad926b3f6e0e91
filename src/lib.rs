pub mod model;
pub mod geometry {
    pub mod intersect;
    pub mod math;
}
pub mod algorithms {
    pub mod collide;
    pub mod picking;
}
pub mod level;

use level::LevelError;
use model::{EdgeId, EdgeRejection, Graph, Point, VertexId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Pick {
    #[serde(rename = "vertex")]
    Vertex { id: VertexId, dist: f64 },
    #[serde(rename = "edge")]
    Edge { id: EdgeId, t: f64, dist: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub a: VertexId,
    pub b: VertexId,
    pub colliding: bool,
}

/// Read-only render view: positions, edges with freshly computed
/// collision flags, and the current selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub vertices: Vec<Point>,
    pub edges: Vec<EdgeView>,
    pub drag: Option<VertexId>,
}

impl Snapshot {
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// The puzzle controller: owns the graph and the optional selected
/// vertex. Solved/unsolved is always derived by re-running the crossing
/// check, never stored.
#[derive(Clone, Debug, Default)]
pub struct Puzzle {
    graph: Graph,
    drag: Option<VertexId>,
}

impl Puzzle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Replace the graph with the seed layout: a square of four vertices
    /// wired as a perimeter plus both diagonals. The diagonals cross, so
    /// the seed always starts unsolved.
    pub fn reset_default(&mut self) {
        let mut g = Graph::new();
        let v1 = g.add_vertex(Point::new(0.2, 0.2));
        let v2 = g.add_vertex(Point::new(0.8, 0.2));
        let v3 = g.add_vertex(Point::new(0.8, 0.8));
        let v4 = g.add_vertex(Point::new(0.2, 0.8));
        for (a, b) in [(v1, v2), (v2, v3), (v3, v4), (v4, v1), (v1, v3), (v2, v4)] {
            let _ = g.try_add_edge(a, b);
        }
        let sane = g.validate().is_ok();
        debug_assert!(sane, "seed layout must validate");
        self.graph = g;
        self.drag = None;
    }

    /// Parse and adopt a level. An out-of-range edge reference fails the
    /// load and leaves the current graph untouched; a duplicate edge in
    /// the candidate discards it and adopts the empty graph instead. A
    /// candidate is never partially applied.
    pub fn load(&mut self, text: &str) -> Result<(), LevelError> {
        let mut parsed = level::parse(text)?;
        match parsed.graph.validate() {
            Ok(()) => {
                self.graph = parsed.graph;
                self.drag = None;
                Ok(())
            }
            Err(dup) => {
                self.graph = Graph::new();
                self.drag = None;
                Err(LevelError::Duplicate(dup))
            }
        }
    }

    pub fn save(&self) -> String {
        level::serialize(&self.graph)
    }

    pub fn move_vertex(&mut self, id: VertexId, to: Point) -> bool {
        self.graph.move_vertex(id, to)
    }

    /// Select the nearest vertex within `radius` of the cursor, or clear
    /// the selection on a miss.
    pub fn begin_drag(&mut self, x: f64, y: f64, radius: f64) -> Option<VertexId> {
        self.drag = algorithms::picking::pick_vertex(&self.graph, x, y, radius).map(|(id, _)| id);
        self.drag
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        match self.drag {
            Some(id) => self.graph.move_vertex(id, Point::new(x, y)),
            None => false,
        }
    }

    // The selection outlives the drag gesture: keyboard moves and the
    // editor connect path reuse it after release.
    pub fn drag_vertex(&self) -> Option<VertexId> {
        self.drag
    }

    /// Cycle the selection through the vertex arena, wrapping.
    pub fn select_next(&mut self) {
        let n = self.graph.vertices().len() as u32;
        if n == 0 {
            self.drag = None;
            return;
        }
        self.drag = Some(match self.drag {
            None => 0,
            Some(i) => (i + 1) % n,
        });
    }

    /// Offset the selected vertex, clamped to the board.
    pub fn nudge(&mut self, dx: f64, dy: f64) -> bool {
        let id = match self.drag {
            Some(id) => id,
            None => return false,
        };
        let p = match self.graph.vertex(id) {
            Some(p) => p,
            None => return false,
        };
        self.graph.move_vertex(id, Point::new(p.x + dx, p.y + dy))
    }

    /// Hit-test for the shell. The radius is owned by the caller.
    pub fn pick(&self, x: f64, y: f64, radius: f64) -> Option<Pick> {
        algorithms::picking::pick_impl(&self.graph, x, y, radius)
    }

    pub fn find_collisions(&self) -> Vec<bool> {
        algorithms::collide::find_collisions(&self.graph)
    }

    pub fn is_solved(&self) -> bool {
        algorithms::collide::solved(&self.graph)
    }

    pub fn snapshot(&self) -> Snapshot {
        let colliding = algorithms::collide::find_collisions(&self.graph);
        let edges = self
            .graph
            .edges()
            .iter()
            .zip(colliding)
            .map(|(e, colliding)| EdgeView {
                a: e.a,
                b: e.b,
                colliding,
            })
            .collect();
        Snapshot {
            vertices: self.graph.vertices().to_vec(),
            edges,
            drag: self.drag,
        }
    }
}

/// Editor capability set. Play mode holds a bare `Puzzle`, so the
/// insertion operations below are unreachable without constructing an
/// `Editor`.
#[derive(Clone, Debug, Default)]
pub struct Editor {
    puzzle: Puzzle,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        Editor { puzzle }
    }

    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    /// Insert a vertex (clamped) and select it for dragging.
    pub fn add_vertex(&mut self, at: Point) -> VertexId {
        let id = self.puzzle.graph.add_vertex(at);
        self.puzzle.drag = Some(id);
        id
    }

    /// Connect two distinct existing vertices. Self loops, unknown
    /// endpoints, and repeated pairs are rejected without touching the
    /// edge set.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> Result<EdgeId, EdgeRejection> {
        self.puzzle.graph.try_add_edge(a, b)
    }
}
