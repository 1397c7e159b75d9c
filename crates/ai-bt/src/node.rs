use std::borrow::Cow;

use ai_core::{Status, TickContext, WorldMut};

use crate::behavior::Behavior;

/// The fixed set of node kinds.
pub enum NodeKind<W>
where
    W: WorldMut + 'static,
{
    /// Runs children in order; stops at the first non-`Success` and returns it.
    /// Never resets anything.
    Sequence(Vec<Node<W>>),
    /// Priority fallback. `Running` is returned as-is; any terminal outcome resets
    /// every child.
    Selector {
        children: Vec<Node<W>>,
        /// Index of the child that returned `Running` last tick (diagnostic only).
        active: Option<usize>,
    },
    /// Runs every child every tick.
    Parallel(Vec<Node<W>>),
    /// Restarts its child whenever it finishes; always `Running`.
    Repeater(Box<Node<W>>),
    Leaf(Box<dyn Behavior<W>>),
}

/// A named behavior tree node.
///
/// Trees are assembled once per agent and only ever reset, never rebuilt.
pub struct Node<W>
where
    W: WorldMut + 'static,
{
    name: Cow<'static, str>,
    kind: NodeKind<W>,
}

impl<W> Node<W>
where
    W: WorldMut + 'static,
{
    pub fn new(name: impl Into<Cow<'static, str>>, kind: NodeKind<W>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn sequence(name: impl Into<Cow<'static, str>>, children: Vec<Node<W>>) -> Self {
        Self::new(name, NodeKind::Sequence(children))
    }

    pub fn selector(name: impl Into<Cow<'static, str>>, children: Vec<Node<W>>) -> Self {
        Self::new(
            name,
            NodeKind::Selector {
                children,
                active: None,
            },
        )
    }

    pub fn parallel(name: impl Into<Cow<'static, str>>, children: Vec<Node<W>>) -> Self {
        Self::new(name, NodeKind::Parallel(children))
    }

    pub fn repeater(name: impl Into<Cow<'static, str>>, child: Node<W>) -> Self {
        Self::new(name, NodeKind::Repeater(Box::new(child)))
    }

    /// Leaf named after the behavior it adapts.
    pub fn leaf(behavior: impl Behavior<W>) -> Self {
        let name = behavior.name().to_owned();
        Self::new(name, NodeKind::Leaf(Box::new(behavior)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind<W> {
        &self.kind
    }

    pub fn children(&self) -> &[Node<W>] {
        match &self.kind {
            NodeKind::Sequence(children)
            | NodeKind::Selector { children, .. }
            | NodeKind::Parallel(children) => children,
            NodeKind::Repeater(child) => core::slice::from_ref(&**child),
            NodeKind::Leaf(_) => &[],
        }
    }

    /// Child that a selector node let run last tick.
    pub fn active_child(&self) -> Option<&Node<W>> {
        match &self.kind {
            NodeKind::Selector {
                children,
                active: Some(i),
            } => children.get(*i),
            _ => None,
        }
    }

    /// Depth-first search by name, including `self`.
    pub fn find(&self, name: &str) -> Option<&Node<W>> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    pub fn process(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> Status {
        let status = match &mut self.kind {
            NodeKind::Sequence(children) => {
                let mut status = Status::Success;
                for child in children.iter_mut() {
                    status = child.process(ctx, agent, world);
                    if status != Status::Success {
                        break;
                    }
                }
                status
            }
            NodeKind::Selector { children, active } => {
                let mut winner = None;
                for (i, child) in children.iter_mut().enumerate() {
                    match child.process(ctx, agent, world) {
                        Status::Failure => continue,
                        status => {
                            winner = Some((i, status));
                            break;
                        }
                    }
                }

                match winner {
                    Some((i, Status::Running)) => {
                        if *active != Some(i) {
                            tracing::debug!(
                                selector = %self.name,
                                from = ?active.and_then(|p| children.get(p)).map(|c| c.name()),
                                to = children[i].name(),
                                tick = ctx.tick,
                                "branch switch"
                            );
                            *active = Some(i);
                        }
                        Status::Running
                    }
                    Some((_, status)) => {
                        self.reset();
                        status
                    }
                    None => {
                        self.reset();
                        Status::Failure
                    }
                }
            }
            NodeKind::Parallel(children) => {
                let mut any_running = false;
                let mut all_success = true;
                for child in children.iter_mut() {
                    match child.process(ctx, agent, world) {
                        Status::Running => any_running = true,
                        Status::Success => {}
                        Status::Failure => all_success = false,
                    }
                }

                if any_running {
                    Status::Running
                } else if all_success {
                    Status::Success
                } else {
                    Status::Failure
                }
            }
            NodeKind::Repeater(child) => {
                if child.process(ctx, agent, world).is_terminal() {
                    child.reset();
                }
                Status::Running
            }
            NodeKind::Leaf(behavior) => behavior.process(ctx, agent, world),
        };

        tracing::trace!(node = %self.name, %status, tick = ctx.tick, "processed");
        status
    }

    /// Reset this node and, recursively, every descendant.
    pub fn reset(&mut self) {
        match &mut self.kind {
            NodeKind::Sequence(children) | NodeKind::Parallel(children) => {
                children.iter_mut().for_each(Node::reset);
            }
            NodeKind::Selector { children, active } => {
                *active = None;
                children.iter_mut().for_each(Node::reset);
            }
            NodeKind::Repeater(child) => child.reset(),
            NodeKind::Leaf(behavior) => behavior.reset(),
        }
    }
}

impl<W> core::fmt::Debug for Node<W>
where
    W: WorldMut + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kind = match &self.kind {
            NodeKind::Sequence(_) => "sequence",
            NodeKind::Selector { .. } => "selector",
            NodeKind::Parallel(_) => "parallel",
            NodeKind::Repeater(_) => "repeater",
            NodeKind::Leaf(_) => "leaf",
        };
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &kind)
            .field("children", &self.children())
            .finish()
    }
}
