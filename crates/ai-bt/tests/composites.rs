use std::cell::Cell;
use std::rc::Rc;

use ai_bt::{Behavior, Node};
use ai_core::{Status, TickContext, WorldMut, WorldView};

#[derive(Debug, Default)]
struct NullWorld;

impl WorldView for NullWorld {
    type Agent = u64;
}

impl WorldMut for NullWorld {}

#[derive(Debug, Default)]
struct Probe {
    processed: Cell<u32>,
    resets: Cell<u32>,
}

/// Returns a fixed status (or a script, one entry per call, repeating the last one).
struct Scripted {
    name: &'static str,
    script: Vec<Status>,
    probe: Rc<Probe>,
}

impl Scripted {
    fn new(name: &'static str, script: &[Status]) -> (Self, Rc<Probe>) {
        let probe = Rc::new(Probe::default());
        let behavior = Self {
            name,
            script: script.iter().rev().copied().collect(),
            probe: probe.clone(),
        };
        (behavior, probe)
    }
}

impl Behavior<NullWorld> for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn process(&mut self, _ctx: &TickContext, _agent: u64, _world: &mut NullWorld) -> Status {
        self.probe.processed.set(self.probe.processed.get() + 1);
        if self.script.len() > 1 {
            self.script.pop().unwrap()
        } else {
            self.script[0]
        }
    }

    fn reset(&mut self) {
        self.probe.resets.set(self.probe.resets.get() + 1);
    }
}

fn leaves(statuses: &[Status]) -> (Vec<Node<NullWorld>>, Vec<Rc<Probe>>) {
    const NAMES: [&str; 4] = ["a", "b", "c", "d"];
    statuses
        .iter()
        .zip(NAMES)
        .map(|(status, name)| {
            let (behavior, probe) = Scripted::new(name, &[*status]);
            (Node::leaf(behavior), probe)
        })
        .unzip()
}

fn tick(root: &mut Node<NullWorld>, n: u64) -> Status {
    let ctx = TickContext::new(n, 0.1, 0);
    root.process(&ctx, 1, &mut NullWorld)
}

#[test]
fn selector_success_resets_every_child_once() {
    let (children, probes) = leaves(&[Status::Failure, Status::Success, Status::Running]);
    let mut root = Node::selector("select", children);

    assert_eq!(tick(&mut root, 0), Status::Success);

    let processed: Vec<u32> = probes.iter().map(|p| p.processed.get()).collect();
    let resets: Vec<u32> = probes.iter().map(|p| p.resets.get()).collect();
    assert_eq!(processed, vec![1, 1, 0]);
    assert_eq!(resets, vec![1, 1, 1]);
}

#[test]
fn selector_running_resets_nothing() {
    let (children, probes) = leaves(&[Status::Running, Status::Success]);
    let mut root = Node::selector("select", children);

    assert_eq!(tick(&mut root, 0), Status::Running);
    assert_eq!(root.active_child().map(|c| c.name()), Some("a"));

    assert_eq!(probes[1].processed.get(), 0);
    assert!(probes.iter().all(|p| p.resets.get() == 0));
}

#[test]
fn selector_all_failure_resets_and_fails() {
    let (children, probes) = leaves(&[Status::Failure, Status::Failure]);
    let mut root = Node::selector("select", children);

    assert_eq!(tick(&mut root, 0), Status::Failure);
    assert!(probes.iter().all(|p| p.processed.get() == 1));
    assert!(probes.iter().all(|p| p.resets.get() == 1));
}

#[test]
fn empty_selector_fails() {
    let mut root: Node<NullWorld> = Node::selector("select", Vec::new());
    assert_eq!(tick(&mut root, 0), Status::Failure);
}

#[test]
fn sequence_stops_at_first_non_success_without_resetting() {
    let (children, probes) = leaves(&[Status::Success, Status::Running, Status::Success]);
    let mut root = Node::sequence("tree", children);

    assert_eq!(tick(&mut root, 0), Status::Running);

    let processed: Vec<u32> = probes.iter().map(|p| p.processed.get()).collect();
    assert_eq!(processed, vec![1, 1, 0]);
    assert!(probes.iter().all(|p| p.resets.get() == 0));
}

#[test]
fn sequence_of_successes_succeeds() {
    let (children, _) = leaves(&[Status::Success, Status::Success]);
    let mut root = Node::sequence("tree", children);
    assert_eq!(tick(&mut root, 0), Status::Success);
}

#[test]
fn sequence_propagates_failure() {
    let (children, probes) = leaves(&[Status::Failure, Status::Success]);
    let mut root = Node::sequence("tree", children);
    assert_eq!(tick(&mut root, 0), Status::Failure);
    assert_eq!(probes[1].processed.get(), 0);
}

#[test]
fn parallel_evaluates_all_children_every_tick() {
    let (children, probes) = leaves(&[Status::Running, Status::Success]);
    let mut root = Node::parallel("both", children);

    for n in 0..3 {
        assert_eq!(tick(&mut root, n), Status::Running);
    }
    assert!(probes.iter().all(|p| p.processed.get() == 3));
    assert!(probes.iter().all(|p| p.resets.get() == 0));
}

#[test]
fn parallel_aggregates_terminal_outcomes() {
    let (children, _) = leaves(&[Status::Success, Status::Success]);
    let mut all_success = Node::parallel("both", children);
    assert_eq!(tick(&mut all_success, 0), Status::Success);

    let (children, probes) = leaves(&[Status::Failure, Status::Success]);
    let mut mixed = Node::parallel("both", children);
    assert_eq!(tick(&mut mixed, 0), Status::Failure);
    assert_eq!(probes[1].processed.get(), 1);
}

#[test]
fn repeater_restarts_finished_child_and_keeps_running() {
    let (child, probe) = Scripted::new("once", &[Status::Success]);
    let mut root = Node::repeater("forever", Node::leaf(child));

    for n in 0..5 {
        assert_eq!(tick(&mut root, n), Status::Running);
    }
    assert_eq!(probe.processed.get(), 5);
    assert_eq!(probe.resets.get(), 5);
}

#[test]
fn repeater_leaves_running_child_alone() {
    let (child, probe) = Scripted::new("busy", &[Status::Running, Status::Running, Status::Failure]);
    let mut root = Node::repeater("forever", Node::leaf(child));

    assert_eq!(tick(&mut root, 0), Status::Running);
    assert_eq!(tick(&mut root, 1), Status::Running);
    assert_eq!(probe.resets.get(), 0);

    assert_eq!(tick(&mut root, 2), Status::Running);
    assert_eq!(probe.resets.get(), 1);
}

#[test]
fn reset_reaches_every_descendant() {
    let (inner, probes) = leaves(&[Status::Running, Status::Running]);
    let (solo, solo_probe) = Scripted::new("solo", &[Status::Running]);
    let mut root = Node::sequence(
        "tree",
        vec![Node::repeater(
            "loop",
            Node::parallel("both", vec![Node::selector("select", inner), Node::leaf(solo)]),
        )],
    );

    root.reset();

    assert!(probes.iter().all(|p| p.resets.get() == 1));
    assert_eq!(solo_probe.resets.get(), 1);
}

#[test]
fn find_locates_nodes_by_name() {
    let (children, _) = leaves(&[Status::Failure, Status::Running]);
    let root = Node::repeater("loop", Node::selector("select", children));

    assert_eq!(root.find("b").map(|n| n.name()), Some("b"));
    assert_eq!(root.children().len(), 1);
    assert!(root.find("missing").is_none());
}
