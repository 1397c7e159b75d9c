use ai_core::{TickContext, WorldMut, WorldView};
use ai_fsm::{State, StateCx, StateMachine, Transition};

#[derive(Debug, Default)]
struct RecordingWorld {
    log: Vec<String>,
}

impl WorldView for RecordingWorld {
    type Agent = u64;
}

impl WorldMut for RecordingWorld {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Light {
    Red,
    Green,
}

#[derive(Debug, Default)]
struct Shared {
    go: bool,
}

struct Lamp {
    id: Light,
    next: Light,
}

impl State<Light, RecordingWorld, Shared> for Lamp {
    fn enter(&mut self, cx: &mut StateCx<'_, RecordingWorld, Shared>) {
        cx.world.log.push(format!("enter {:?}", self.id));
    }

    fn update(&mut self, cx: &mut StateCx<'_, RecordingWorld, Shared>) -> Transition<Light> {
        cx.world.log.push(format!("update {:?}", self.id));
        if cx.shared.go {
            Transition::To(self.next)
        } else {
            Transition::Stay
        }
    }

    fn exit(&mut self, cx: &mut StateCx<'_, RecordingWorld, Shared>) {
        cx.world.log.push(format!("exit {:?}", self.id));
    }
}

fn machine() -> StateMachine<Light, RecordingWorld, Shared> {
    StateMachine::new("lamp")
        .with_state(
            Light::Red,
            Lamp {
                id: Light::Red,
                next: Light::Green,
            },
        )
        .with_state(
            Light::Green,
            Lamp {
                id: Light::Green,
                next: Light::Red,
            },
        )
}

const CTX: TickContext = TickContext {
    tick: 0,
    dt_seconds: 0.1,
    seed: 1,
};

#[test]
fn update_before_first_change_is_a_no_op() {
    let mut fsm = machine();
    let mut world = RecordingWorld::default();
    let mut shared = Shared { go: true };

    fsm.update(&mut StateCx::new(&CTX, 1, &mut world, &mut shared));

    assert_eq!(fsm.current(), None);
    assert!(world.log.is_empty());
}

#[test]
fn exit_of_old_state_precedes_enter_of_new_state() {
    let mut fsm = machine();
    let mut world = RecordingWorld::default();
    let mut shared = Shared::default();

    fsm.change_state(Light::Red, &mut StateCx::new(&CTX, 1, &mut world, &mut shared));
    fsm.update(&mut StateCx::new(&CTX, 1, &mut world, &mut shared));
    assert!(fsm.is_in(Light::Red));

    shared.go = true;
    fsm.update(&mut StateCx::new(&CTX, 1, &mut world, &mut shared));

    assert!(fsm.is_in(Light::Green));
    assert_eq!(
        world.log,
        vec![
            "enter Red",
            "update Red",
            "update Red",
            "exit Red",
            "enter Green",
        ]
    );
}

#[test]
fn clear_forgets_current_state_without_exit() {
    let mut fsm = machine();
    let mut world = RecordingWorld::default();
    let mut shared = Shared::default();

    fsm.change_state(Light::Green, &mut StateCx::new(&CTX, 1, &mut world, &mut shared));
    fsm.clear();

    assert_eq!(fsm.current(), None);
    assert_eq!(world.log, vec!["enter Green"]);
}

#[test]
#[should_panic(expected = "registered twice")]
fn duplicate_state_ids_panic() {
    let _ = machine().with_state(
        Light::Red,
        Lamp {
            id: Light::Red,
            next: Light::Red,
        },
    );
}

struct Journal;

impl State<Light, RecordingWorld, Vec<String>> for Journal {
    fn enter(&mut self, cx: &mut StateCx<'_, RecordingWorld, Vec<String>>) {
        cx.shared.push(format!("enter at {}", cx.tick.tick));
    }

    fn update(&mut self, cx: &mut StateCx<'_, RecordingWorld, Vec<String>>) -> Transition<Light> {
        cx.shared.push("update".to_owned());
        Transition::Stay
    }
}

#[test]
fn shared_data_may_own_heap_values() {
    let mut fsm = StateMachine::new("journal").with_state(Light::Red, Journal);
    let mut world = RecordingWorld::default();
    let mut notes = Vec::new();

    let mut cx = StateCx::new(&CTX, 1, &mut world, &mut notes);
    fsm.change_state(Light::Red, &mut cx);
    fsm.update(&mut cx);

    assert_eq!(notes, ["enter at 0", "update"]);
}
