//! Reachability protocol tests
//!
//! These tests drive the mark phase over object graphs the way a host
//! reachability scan would.

use marten_gc::{GcRef, Marker, Trace, Tracer};

/// Simple test object with a fan-out of edges
struct TestNode {
    name: &'static str,
    children: Vec<GcRef<TestNode>>,
}

impl TestNode {
    fn leaf(name: &'static str) -> GcRef<Self> {
        GcRef::new(Self {
            name,
            children: Vec::new(),
        })
    }
}

impl Trace for TestNode {
    fn trace(&self, tracer: &mut dyn Tracer) {
        self.children.trace(tracer);
    }
}

#[test]
fn test_scan_reaches_transitive_children() {
    let grandchild = TestNode::leaf("grandchild");
    let left = GcRef::new(TestNode {
        name: "left",
        children: vec![grandchild.clone()],
    });
    let right = GcRef::new(TestNode {
        name: "right",
        children: vec![grandchild.clone()],
    });
    let root = TestNode {
        name: "root",
        children: vec![left.clone(), right.clone()],
    };

    let marker = Marker::scan(&[&root]);

    assert_eq!(root.name, "root");
    assert!(marker.is_marked(left.id()));
    assert!(marker.is_marked(right.id()));
    assert!(marker.is_marked(grandchild.id()));
    // The shared grandchild counts once.
    assert_eq!(marker.marked_count(), 3);
}

#[test]
fn test_unreferenced_allocations_stay_unmarked() {
    let reachable = TestNode::leaf("reachable");
    let stranded = TestNode::leaf("stranded");
    let root = TestNode {
        name: "root",
        children: vec![reachable.clone()],
    };

    let marker = Marker::scan(&[&root]);

    assert!(marker.is_marked(reachable.id()));
    assert!(!marker.is_marked(stranded.id()));
}

#[test]
fn test_scan_accepts_multiple_roots() {
    let a = TestNode::leaf("a");
    let b = TestNode::leaf("b");
    let first = TestNode {
        name: "first",
        children: vec![a.clone()],
    };
    let second = TestNode {
        name: "second",
        children: vec![b.clone()],
    };

    let marker = Marker::scan(&[&first, &second]);

    assert!(marker.is_marked(a.id()));
    assert!(marker.is_marked(b.id()));
    assert_eq!(marker.marked_count(), 2);
}

#[test]
fn test_shared_value_survives_its_holders() {
    let shared = TestNode::leaf("shared");

    let holders: Vec<GcRef<TestNode>> = (0..3)
        .map(|_| {
            GcRef::new(TestNode {
                name: "holder",
                children: vec![shared.clone()],
            })
        })
        .collect();
    assert_eq!(shared.ref_count(), 4);

    drop(holders);

    // Every holder is gone; the shared value is still usable.
    assert_eq!(shared.ref_count(), 1);
    assert_eq!(shared.name, "shared");
}
