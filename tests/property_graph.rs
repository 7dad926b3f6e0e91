use proptest::prelude::*;
use untangle::geometry::intersect::classify;
use untangle::model::Point;
use untangle::{Editor, Puzzle};

// Dyadic grid coordinates: shared endpoints, collinear runs, and parallel
// pairs come up constantly, and the arithmetic stays exact.
fn coord() -> impl Strategy<Value = f64> {
    (0u8..=8u8).prop_map(|n| n as f64 / 8.0)
}

fn segment_pair() -> impl Strategy<Value = [Point; 4]> {
    [coord(), coord(), coord(), coord(), coord(), coord(), coord(), coord()].prop_map(
        |[ax, ay, bx, by, cx, cy, dx, dy]| {
            [
                Point::new(ax, ay),
                Point::new(bx, by),
                Point::new(cx, cy),
                Point::new(dx, dy),
            ]
        },
    )
}

#[derive(Clone, Debug)]
enum Op {
    AddVertex { x: i16, y: i16 },
    MoveVertex { idx: u16, x: i16, y: i16 },
    AddEdge { a: u16, b: u16 },
    BeginDrag { x: i16, y: i16 },
    DragTo { x: i16, y: i16 },
    Nudge { dx: i8, dy: i8 },
    SelectNext,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::AddVertex { x, y }),
        (any::<u16>(), any::<i16>(), any::<i16>())
            .prop_map(|(idx, x, y)| Op::MoveVertex { idx, x, y }),
        (any::<u16>(), any::<u16>()).prop_map(|(a, b)| Op::AddEdge { a, b }),
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::BeginDrag { x, y }),
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::DragTo { x, y }),
        (any::<i8>(), any::<i8>()).prop_map(|(dx, dy)| Op::Nudge { dx, dy }),
        Just(Op::SelectNext),
    ]
}

fn apply_op(ed: &mut Editor, op: Op) {
    match op {
        Op::AddVertex { x, y } => {
            let _ = ed.add_vertex(Point::new(x as f64 * 0.01, y as f64 * 0.01));
        }
        Op::MoveVertex { idx, x, y } => {
            let n = ed.puzzle().graph().vertices().len();
            if n == 0 {
                return;
            }
            let id = (idx as usize % n) as u32;
            let _ = ed
                .puzzle_mut()
                .move_vertex(id, Point::new(x as f64 * 0.01, y as f64 * 0.01));
        }
        Op::AddEdge { a, b } => {
            let n = ed.puzzle().graph().vertices().len();
            if n == 0 {
                return;
            }
            let a = (a as usize % n) as u32;
            let b = (b as usize % n) as u32;
            let _ = ed.add_edge(a, b);
        }
        Op::BeginDrag { x, y } => {
            let _ = ed
                .puzzle_mut()
                .begin_drag(x as f64 * 0.01, y as f64 * 0.01, 0.1);
        }
        Op::DragTo { x, y } => {
            let _ = ed.puzzle_mut().drag_to(x as f64 * 0.01, y as f64 * 0.01);
        }
        Op::Nudge { dx, dy } => {
            let _ = ed.puzzle_mut().nudge(dx as f64 * 0.01, dy as f64 * 0.01);
        }
        Op::SelectNext => ed.puzzle_mut().select_next(),
    }
}

fn assert_invariants(p: &Puzzle) {
    for v in p.graph().vertices() {
        assert!((0.0..=1.0).contains(&v.x), "x out of board: {}", v.x);
        assert!((0.0..=1.0).contains(&v.y), "y out of board: {}", v.y);
    }
    let n = p.graph().vertices().len() as u32;
    let mut seen = std::collections::HashSet::new();
    for e in p.graph().edges() {
        assert_ne!(e.a, e.b, "self loop slipped through");
        assert!(e.a < n && e.b < n, "dangling endpoint id");
        assert!(seen.insert(e.key()), "duplicate pair {:?}", e.key());
    }

    let flags = p.find_collisions();
    assert_eq!(flags, p.find_collisions(), "evaluation is not idempotent");
    assert_eq!(
        p.is_solved(),
        flags.iter().all(|hit| !hit),
        "solved verdict disagrees with the flags"
    );

    // The level format must reproduce the graph and its verdict exactly.
    let mut reloaded = Puzzle::new();
    reloaded.load(&p.save()).expect("saved level must load");
    assert_eq!(reloaded.graph().vertices(), p.graph().vertices());
    assert_eq!(reloaded.graph().edges(), p.graph().edges());
    assert_eq!(reloaded.is_solved(), p.is_solved());
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn classification_is_symmetric(pts in segment_pair()) {
        let [p1, p2, q1, q2] = pts;
        prop_assert_eq!(
            classify(p1, p2, q1, q2).colliding(),
            classify(q1, q2, p1, p2).colliding()
        );
    }

    #[test]
    fn edit_sequences_preserve_graph_invariants(
        seq in prop::collection::vec(op_strategy(), 5..40)
    ) {
        let mut ed = Editor::new();
        ed.puzzle_mut().reset_default();
        for op in seq {
            apply_op(&mut ed, op);
        }
        assert_invariants(ed.puzzle());
    }
}
