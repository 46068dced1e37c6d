//! Trace structure and export tests for the exact router.

use tsp_route::exact::{backtracking, SearchResult, Step, StepKind};
use tsp_route::models::{Cost, Graph};

fn triangle() -> Graph<String> {
    let mut g = Graph::new();
    for (from, to, cost) in [
        ("A", "B", 1),
        ("A", "C", 4),
        ("B", "A", 1),
        ("B", "C", 2),
        ("C", "A", 4),
        ("C", "B", 2),
    ] {
        g.add_edge(from.to_string(), to.to_string(), cost);
    }
    g
}

#[test]
fn trace_is_a_preorder_walk() {
    let result = backtracking(&triangle(), &"A".to_string()).unwrap();
    let trace = result.trace();

    // Pre-order: the first step expands the start node at depth 0.
    assert_eq!(trace[0].kind, StepKind::Expand);
    assert_eq!(trace[0].depth, 0);
    assert_eq!(trace[0].node, "A");

    // Every step's path begins at the start node and matches its depth.
    for step in trace {
        assert_eq!(step.path[0], "A");
        match step.kind {
            // The solution step carries the full closed tour.
            StepKind::NewBest { .. } => assert_eq!(step.path.len(), 4),
            _ => assert_eq!(step.path.len(), step.depth + 1),
        }
        assert_eq!(step.visited.len(), 3);
    }
}

#[test]
fn backtrack_steps_carry_reasons() {
    let result = backtracking(&triangle(), &"A".to_string()).unwrap();
    for step in result.trace() {
        match step.kind {
            StepKind::Expand => assert!(step.reason().is_none()),
            _ => assert!(step.reason().is_some()),
        }
        // A step is either an expansion, a backtrack, or a solution.
        assert!(
            step.kind == StepKind::Expand || step.is_backtrack() || step.is_solution()
        );
    }
}

#[test]
fn solution_step_matches_returned_tour() {
    let result = backtracking(&triangle(), &"A".to_string()).unwrap();
    let last_best = result
        .trace()
        .iter()
        .filter(|s| s.is_solution())
        .last()
        .expect("feasible search records a solution");
    assert_eq!(last_best.path, result.tour().stops());
    assert_eq!(last_best.cost, result.tour().total_cost());
}

#[test]
fn infeasible_search_returns_its_trace() {
    // One-way pair: the tour can never close.
    let mut g = Graph::new();
    g.add_edge("A".to_string(), "B".to_string(), 1);
    let result = backtracking(&g, &"A".to_string()).unwrap();
    assert!(!result.is_feasible());
    assert!(!result.trace().is_empty());
    assert!(result.trace().iter().any(|s| s.kind == StepKind::NoReturnEdge));
    assert!(result.trace().iter().all(|s| !s.is_solution()));
}

#[test]
fn trace_serializes_to_json_and_back() {
    let result = backtracking(&triangle(), &"A".to_string()).unwrap();

    let json = serde_json::to_string(result.trace()).unwrap();
    let restored: Vec<Step<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.as_slice(), result.trace());

    // The whole result round-trips as well.
    let json = serde_json::to_string(&result).unwrap();
    let restored: SearchResult<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
}

#[test]
fn into_parts_splits_tour_and_trace() {
    let result = backtracking(&triangle(), &"A".to_string()).unwrap();
    let steps = result.trace().len();
    let (tour, trace) = result.into_parts();
    assert_eq!(tour.total_cost(), Cost::Finite(7));
    assert_eq!(trace.len(), steps);
}
