//! Integration tests for the incremental re-evaluation engine.
//!
//! Covers the engine's observable contract:
//! - no-op refresh performs zero recomputation
//! - single-input mutation recomputes only the chain to the root
//! - unchanged sibling subtrees are skipped entirely
//! - dirty propagation short-circuits on already-marked nodes
//! - terminal caches track their sources after every refresh
//! - the canonical 1 + 11 + 111 scenario

use recalc_engine::{Input, Memo, Node, Operator, RefreshStats};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// Three inputs combined as a left-leaning sum `(a + b) + c`.
fn sum_tree(a: &Input<i64>, b: &Input<i64>, c: &Input<i64>) -> Node<i64> {
    a.bind() + b.bind() + c.bind()
}

fn stats(memo: &Memo<i64>) -> RefreshStats {
    memo.last_stats()
}

// ══════════════════════════════════════════════════════════════════════════════
// No-op refresh
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn noop_refresh_performs_zero_recomputation() {
    let a = Input::new(1);
    let b = Input::new(11);
    let c = Input::new(111);
    let mut memo = Memo::new(sum_tree(&a, &b, &c));

    assert_eq!(memo.refresh(), 123);
    assert_eq!(stats(&memo).ops_applied, 2);
    assert_eq!(stats(&memo).terminals_refreshed, 3);

    // Nothing mutated: the second refresh compares every terminal,
    // finds nothing stale, and recomputes nothing.
    assert_eq!(memo.refresh(), 123);
    assert_eq!(stats(&memo).ops_applied, 0);
    assert_eq!(stats(&memo).terminals_refreshed, 0);
    assert_eq!(stats(&memo).terminals_compared, 3);
}

#[test]
fn first_refresh_short_circuits_propagation() {
    // Every expression node is constructed dirty, so the very first
    // propagation pass stops at the root without touching terminals.
    let a = Input::new(1);
    let b = Input::new(2);
    let mut memo = Memo::new(a.bind() + b.bind());

    assert_eq!(memo.refresh(), 3);
    assert_eq!(stats(&memo).terminals_compared, 0);
    assert_eq!(stats(&memo).ops_applied, 1);
}

// ══════════════════════════════════════════════════════════════════════════════
// Single-input mutation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn single_mutation_recomputes_chain_to_root() {
    let a = Input::new(10);
    let b = Input::new(20);
    let c = Input::new(30);
    let mut memo = Memo::new(sum_tree(&a, &b, &c));
    memo.refresh();

    b.set(25);
    assert_eq!(memo.refresh(), 65);
    // Both sum nodes sit on the path from b to the root.
    assert_eq!(stats(&memo).ops_applied, 2);
    assert_eq!(stats(&memo).terminals_refreshed, 3);
}

#[test]
fn mutation_to_same_value_is_a_noop() {
    let a = Input::new(10);
    let b = Input::new(20);
    let c = Input::new(30);
    let mut memo = Memo::new(sum_tree(&a, &b, &c));
    memo.refresh();

    b.set(20);
    assert_eq!(memo.refresh(), 60);
    assert_eq!(stats(&memo).ops_applied, 0);
}

// ══════════════════════════════════════════════════════════════════════════════
// Independent subtree skip
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn unchanged_subtree_is_skipped() {
    let a = Input::new(1);
    let b = Input::new(2);
    let c = Input::new(3);
    let d = Input::new(4);
    let mut memo = Memo::new((a.bind() + b.bind()) * (c.bind() + d.bind()));

    assert_eq!(memo.refresh(), 21);
    assert_eq!(stats(&memo).ops_applied, 3);
    assert_eq!(stats(&memo).terminals_refreshed, 4);

    a.set(5);
    assert_eq!(memo.refresh(), 49);
    // `c + d` keeps its cached 7: only `a + b` and the product rerun,
    // and only the left subtree's terminals are re-copied.
    assert_eq!(stats(&memo).ops_applied, 2);
    assert_eq!(stats(&memo).terminals_refreshed, 2);
    // Propagation still compared all four terminals.
    assert_eq!(stats(&memo).terminals_compared, 4);
}

#[test]
fn both_subtrees_recompute_when_both_change() {
    let a = Input::new(1);
    let b = Input::new(2);
    let c = Input::new(3);
    let d = Input::new(4);
    let mut memo = Memo::new((a.bind() + b.bind()) * (c.bind() + d.bind()));
    memo.refresh();

    a.set(2);
    d.set(5);
    assert_eq!(memo.refresh(), 32);
    assert_eq!(stats(&memo).ops_applied, 3);
    assert_eq!(stats(&memo).terminals_refreshed, 4);
}

// ══════════════════════════════════════════════════════════════════════════════
// Dirty propagation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn marked_node_short_circuits_second_propagation() {
    let a = Input::new(1);
    let b = Input::new(2);
    let mut tree = a.bind() + b.bind();
    let mut stats = RefreshStats::default();
    tree.evaluate(&mut stats);

    a.set(9);
    // Drive the pass directly: the first walk compares both terminals
    // and marks the root; the second hits the set flag and never
    // descends again.
    let mut first = RefreshStats::default();
    assert!(tree.mark_dirty(&mut first));
    assert_eq!(first.terminals_compared, 2);

    let mut again = RefreshStats::default();
    assert!(tree.mark_dirty(&mut again));
    assert_eq!(again.terminals_compared, 0);
}

#[test]
fn propagation_marks_only_stale_ancestors() {
    let a = Input::new(1);
    let b = Input::new(2);
    let c = Input::new(3);
    let d = Input::new(4);
    let mut tree = (a.bind() + b.bind()) * (c.bind() + d.bind());
    let mut stats = RefreshStats::default();
    tree.evaluate(&mut stats);

    c.set(7);
    let mut first = RefreshStats::default();
    assert!(tree.mark_dirty(&mut first));
    assert_eq!(first.terminals_compared, 4);

    // Re-running the pass in the same cycle: the root is already
    // marked, so nothing is compared a second time.
    let mut again = RefreshStats::default();
    assert!(tree.mark_dirty(&mut again));
    assert_eq!(again.terminals_compared, 0);
}

// ══════════════════════════════════════════════════════════════════════════════
// Terminal cache tracking
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn terminal_caches_equal_sources_after_refresh() {
    let a = Input::new(5);
    let b = Input::new(6);
    let mut memo = Memo::new(a.bind() - b.bind());
    memo.refresh();

    // If any cache had diverged, this propagation would find staleness
    // and the follow-up refresh would recompute.
    assert_eq!(memo.refresh(), -1);
    assert_eq!(stats(&memo).ops_applied, 0);

    a.set(8);
    memo.refresh();
    assert_eq!(memo.refresh(), 2);
    assert_eq!(stats(&memo).ops_applied, 0);
}

#[test]
fn default_valued_inputs_still_compute_on_first_refresh() {
    // Sources equal to T::default() must not be mistaken for
    // already-seen values on a never-evaluated tree.
    let a = Input::new(0);
    let b = Input::new(0);
    let mut memo = Memo::new(a.bind() + b.bind());

    assert_eq!(memo.refresh(), 0);
    assert_eq!(stats(&memo).ops_applied, 1);
    assert_eq!(stats(&memo).terminals_refreshed, 2);

    assert_eq!(memo.refresh(), 0);
    assert_eq!(stats(&memo).ops_applied, 0);
}

// ══════════════════════════════════════════════════════════════════════════════
// Canonical scenario
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn canonical_three_input_sum() {
    let i1 = Input::new(1);
    let i2 = Input::new(11);
    let i3 = Input::new(111);
    let mut memo = Memo::new(i1.bind() + i2.bind() + i3.bind());

    assert_eq!(memo.refresh(), 123);
    assert_eq!(memo.refresh(), 123);
    assert_eq!(stats(&memo).ops_applied, 0);

    i2.set(16);
    assert_eq!(memo.refresh(), 128);
    // `i2` is under the inner sum, so both plus nodes rerun once each.
    assert_eq!(stats(&memo).ops_applied, 2);
}

// ══════════════════════════════════════════════════════════════════════════════
// Mixed operators & value types
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn negation_and_division() {
    let a = Input::new(9.0f64);
    let b = Input::new(3.0f64);
    let mut memo = Memo::new(-(a.bind() / b.bind()));

    assert_eq!(memo.refresh(), -3.0);
    b.set(4.5);
    assert_eq!(memo.refresh(), -2.0);
}

#[test]
fn unsigned_values_can_be_bound() {
    // The scalar contract only asks for the binary ops, so types
    // without a unary minus still work in arithmetic trees.
    let a = Input::new(2u32);
    let b = Input::new(3u32);
    let mut memo = Memo::new(a.bind() + b.bind() * b.bind());

    assert_eq!(memo.refresh(), 11);
    b.set(4);
    assert_eq!(memo.refresh(), 18);
    assert_eq!(memo.last_stats().ops_applied, 2);
}

#[test]
fn explicit_builder_matches_operator_syntax() {
    let a = Input::new(2);
    let b = Input::new(3);
    let built = Node::expr(Operator::Mul, vec![a.bind(), b.bind()]).unwrap();
    let mut memo = Memo::new(built);
    assert_eq!(memo.refresh(), 6);

    a.set(4);
    assert_eq!(memo.refresh(), 12);
    assert_eq!(stats(&memo).ops_applied, 1);
}

#[test]
fn one_input_bound_twice_refreshes_both_terminals() {
    // Two terminals over the same cell each keep their own cache.
    let a = Input::new(3);
    let mut memo = Memo::new(a.bind() * a.bind());

    assert_eq!(memo.refresh(), 9);
    a.set(4);
    assert_eq!(memo.refresh(), 16);
    assert_eq!(stats(&memo).terminals_refreshed, 2);
}
