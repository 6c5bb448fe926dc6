/// Enumeration Verification Tests
/// Exercises the bounded path enumerator and prefix expansion through the
/// public API.

use callseq::domain::ir::{CatchHandler, IrNode};
use callseq::domain::paths::{enumerate, expand_prefixes};

fn call(id: &str) -> IrNode {
    IrNode::Call { identifier: id.to_string() }
}

fn seq(children: Vec<IrNode>) -> IrNode {
    IrNode::Sequence { children }
}

fn branch(then_body: IrNode, else_body: IrNode) -> IrNode {
    IrNode::Branch {
        then_body: Box::new(then_body),
        else_body: Some(Box::new(else_body)),
    }
}

/// Nested branches, each at depth i, yielding 2^depth traces.
fn branch_nest(depth: usize) -> IrNode {
    let mut tree = call("leaf");
    for i in 0..depth {
        tree = seq(vec![
            branch(call(&format!("t{}", i)), call(&format!("e{}", i))),
            tree,
        ]);
    }
    tree
}

fn as_vecs(sequences: &[callseq::domain::paths::CallSequence]) -> Vec<Vec<String>> {
    sequences.iter().map(|s| s.calls.clone()).collect()
}

#[test]
fn test_fork_correctness() {
    // a (b|c) d -> abd, acd, then-arm first
    let tree = seq(vec![call("a"), branch(call("b"), call("c")), call("d")]);

    let result = enumerate(&tree, 10).unwrap();
    assert_eq!(
        as_vecs(&result),
        vec![
            vec!["a".to_string(), "b".to_string(), "d".to_string()],
            vec!["a".to_string(), "c".to_string(), "d".to_string()],
        ]
    );
}

#[test]
fn test_loop_single_representative_iteration() {
    // a b* c -> ac (skip) then abc (one pass); never more than one pass
    let tree = seq(vec![
        call("a"),
        IrNode::Loop { body: Box::new(call("b")) },
        call("c"),
    ]);

    let result = enumerate(&tree, 10).unwrap();
    assert_eq!(
        as_vecs(&result),
        vec![
            vec!["a".to_string(), "c".to_string()],
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        ]
    );
}

#[test]
fn test_nested_loops_stay_bounded() {
    // Loop inside loop: 3 traces (skip, one outer pass skipping inner,
    // one outer pass with one inner pass), not an infinite family.
    let tree = IrNode::Loop {
        body: Box::new(seq(vec![
            call("outer"),
            IrNode::Loop { body: Box::new(call("inner")) },
        ])),
    };

    let result = enumerate(&tree, 10).unwrap();
    assert_eq!(
        as_vecs(&result),
        vec![
            vec![],
            vec!["outer".to_string()],
            vec!["outer".to_string(), "inner".to_string()],
        ]
    );
}

#[test]
fn test_trycatch_forks_one_trace_per_handler() {
    let tree = seq(vec![
        call("init"),
        IrNode::TryCatch {
            body: Box::new(call("work")),
            handlers: vec![
                CatchHandler {
                    exception_type: "IOException".to_string(),
                    handler_body: call("retry"),
                },
                CatchHandler {
                    exception_type: "Exception".to_string(),
                    handler_body: call("abort"),
                },
            ],
        },
    ]);

    let result = enumerate(&tree, 10).unwrap();
    // Handlers continue the pre-try prefix: "work" never precedes a
    // handler's calls.
    assert_eq!(
        as_vecs(&result),
        vec![
            vec!["init".to_string(), "work".to_string()],
            vec!["init".to_string(), "retry".to_string()],
            vec!["init".to_string(), "abort".to_string()],
        ]
    );
}

#[test]
fn test_determinism_across_runs() {
    let tree = seq(vec![
        branch_nest(4),
        IrNode::Loop { body: Box::new(call("tail")) },
    ]);

    let first = enumerate(&tree, 100).unwrap();
    let second = enumerate(&tree, 100).unwrap();
    assert_eq!(first, second, "identical (root, max) must yield identical ordered output");
}

#[test]
fn test_capacity_overflow_fails_fast() {
    // Depth 6 would produce 64 traces; cap 10 must trip at the first
    // fork whose union exceeds it (live 16, one doubling past the cap),
    // not after full expansion.
    let err = enumerate(&branch_nest(6), 10).unwrap_err();
    assert_eq!(err.max, 10);
    assert_eq!(err.live, 16, "expected the first exceeding fork, got {:?}", err);
}

#[test]
fn test_capacity_boundary_is_inclusive() {
    assert!(enumerate(&branch_nest(5), 32).is_ok());
    assert!(enumerate(&branch_nest(5), 31).is_err());
}

#[test]
fn test_prefix_expansion_counts_and_dedup() {
    let tree = seq(vec![call("a"), branch(call("b"), call("c")), call("d")]);
    let sequences = enumerate(&tree, 10).unwrap();
    let expanded = expand_prefixes(&sequences);

    // abd contributes a, ab, abd; acd adds ac, acd ("a" already seen).
    assert_eq!(expanded.len(), 5);
    let rendered: Vec<String> = expanded.iter().map(|s| s.calls.join("")).collect();
    assert_eq!(rendered, vec!["a", "ab", "abd", "ac", "acd"]);
}
