use ai_core::{DeterministicRng, Outcome, Status, TickContext};

#[test]
fn dt_is_never_negative() {
    let ctx = TickContext::new(0, -0.5, 1);
    assert_eq!(ctx.dt(), 0.0);
}

#[test]
fn next_advances_tick_and_keeps_step() {
    let ctx = TickContext::new(41, 0.1, 9);
    let next = ctx.next();
    assert_eq!(next.tick, 42);
    assert_eq!(next.dt_seconds, 0.1);
    assert_eq!(next.seed, 9);
}

#[test]
fn agent_streams_replay_for_same_seed() {
    let ctx = TickContext::new(0, 0.1, 123);
    let mut a = ctx.rng_for_agent(7u64, 1);
    let mut b = ctx.rng_for_agent(7u64, 1);
    let mut c = ctx.rng_for_agent(8u64, 1);

    let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
    let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
    let zs: Vec<u64> = (0..8).map(|_| c.next_u64()).collect();

    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
}

#[test]
fn status_outcome_splits_terminal_states() {
    assert_eq!(Status::Running.outcome(), None);
    assert_eq!(Status::Success.outcome(), Some(Outcome::Success));
    assert_eq!(Status::from(Outcome::Failure), Status::Failure);
    assert!(Status::Failure.is_terminal());
    assert_eq!(Status::Running.to_string(), "running");
}

#[test]
fn narrow_ids_widen_to_the_same_stable_id() {
    use ai_core::AgentId;

    assert_eq!(7u16.stable_id(), 7);
    assert_eq!(7u32.stable_id(), 7u64.stable_id());
    assert_eq!(7usize.stable_id(), 7);
}
