use ai_bt::{Behavior, Node};
use ai_core::{Status, TickContext, WorldMut, WorldView};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[derive(Default)]
struct World;

impl WorldView for World {
    type Agent = u64;
}

impl WorldMut for World {}

struct Fixed(Status);

impl Behavior<World> for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn process(&mut self, _ctx: &TickContext, _agent: u64, _world: &mut World) -> Status {
        self.0
    }

    fn reset(&mut self) {}
}

fn bench_tree_tick(c: &mut Criterion) {
    // 31 failing priorities in front of one running fallback: worst case for the selector.
    let mut children = (0..31)
        .map(|_| Node::leaf(Fixed(Status::Failure)))
        .collect::<Vec<_>>();
    children.push(Node::leaf(Fixed(Status::Running)));

    let mut root = Node::repeater("loop", Node::selector("select", children));
    let mut world = World;

    let mut tick: u64 = 0;
    c.bench_function("ai-bt/tick(selector=32)", |b| {
        b.iter(|| {
            let ctx = TickContext::new(tick, 0.016, 0);
            black_box(root.process(&ctx, 1, &mut world));
            tick = tick.wrapping_add(1);
        })
    });
}

criterion_group!(benches, bench_tree_tick);
criterion_main!(benches);
