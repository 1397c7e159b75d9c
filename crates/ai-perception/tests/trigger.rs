use std::cell::RefCell;
use std::rc::Rc;

use ai_nav::Vec3;
use ai_perception::{Crossing, PerceptionTrigger, Sensors, SphereVolume, TriggerKind, TriggerVolume};

const PLAYER: u64 = 1;
const OTHER: u64 = 2;

#[test]
fn fires_one_event_per_crossing_for_tracked_target() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut trigger = PerceptionTrigger::new(TriggerKind::Chase, PLAYER);
    let sink = events.clone();
    trigger.subscribe(move |inside| sink.borrow_mut().push(inside));

    trigger.on_overlap_begin(PLAYER);
    trigger.on_overlap_begin(PLAYER);
    trigger.on_overlap_end(PLAYER);

    assert_eq!(*events.borrow(), vec![true, true, false]);
}

#[test]
fn ignores_untracked_entities() {
    let mut trigger = PerceptionTrigger::new(TriggerKind::AttackRange, PLAYER);
    let latch = trigger.subscribe_latch();

    trigger.on_overlap_begin(OTHER);
    assert!(!latch.get());

    trigger.on_overlap_begin(PLAYER);
    trigger.on_overlap_end(OTHER);
    assert!(latch.get());
}

#[test]
fn every_subscriber_latches_independently() {
    let mut trigger = PerceptionTrigger::new(TriggerKind::AttackReach, PLAYER);
    let a = trigger.subscribe_latch();
    let b = trigger.subscribe_latch();
    assert_eq!(trigger.subscriber_count(), 2);

    trigger.observe(PLAYER, Crossing::Entered);
    assert!(a.get() && b.get());

    // A subscriber may overwrite its own latch without affecting the other.
    a.set(false);
    assert!(!a.get());
    assert!(b.get());

    trigger.observe(PLAYER, Crossing::Exited);
    assert!(!b.get());
}

#[test]
fn sphere_volume_reports_only_state_changes() {
    let mut volume = SphereVolume::new(2.0);
    let center = Vec3::ZERO;

    assert_eq!(volume.step(center, Vec3::ground(5.0, 0.0)), None);
    assert_eq!(volume.step(center, Vec3::ground(1.0, 0.0)), Some(Crossing::Entered));
    assert_eq!(volume.step(center, Vec3::ground(1.5, 0.0)), None);
    assert!(volume.contains_point());
    assert_eq!(volume.step(center, Vec3::ground(3.0, 0.0)), Some(Crossing::Exited));
}

#[test]
fn trigger_volume_feeds_its_trigger() {
    let mut sensor = TriggerVolume::new(TriggerKind::Chase, PLAYER, 3.0);
    let latch = sensor.trigger.subscribe_latch();

    assert_eq!(sensor.sense(Vec3::ZERO, OTHER, Vec3::ZERO), None);
    assert!(!latch.get());

    assert_eq!(
        sensor.sense(Vec3::ZERO, PLAYER, Vec3::ground(1.0, 1.0)),
        Some(Crossing::Entered)
    );
    assert!(latch.get());

    sensor.sense(Vec3::ZERO, PLAYER, Vec3::ground(10.0, 0.0));
    assert!(!latch.get());
}

#[test]
fn sensors_bundle_indexes_by_kind() {
    let mut sensors = Sensors::<u64>::default();
    assert!(sensors.get(TriggerKind::Chase).is_none());

    let previous = sensors.insert(PerceptionTrigger::new(TriggerKind::Chase, PLAYER));
    assert!(previous.is_none());
    assert_eq!(sensors.get(TriggerKind::Chase).map(|t| t.tracked()), Some(PLAYER));

    let full = Sensors::tracking(PLAYER);
    for kind in [TriggerKind::Chase, TriggerKind::AttackRange, TriggerKind::AttackReach] {
        assert_eq!(full.get(kind).map(|t| t.kind()), Some(kind));
    }
}
