use core::fmt::Debug;

/// Identity of an agent or of anything an agent tracks (a chase target, a projectile owner).
///
/// Perception triggers filter overlaps by comparing ids, so equality must mean "same
/// entity". `stable_id` feeds per-agent RNG streams and log fields; two runs with the same
/// ids and run seed make the same decisions.
pub trait AgentId: Copy + Ord + Eq + Debug + 'static {
    fn stable_id(self) -> u64;
}

macro_rules! widen_to_u64 {
    ($($ty:ty),*) => {
        $(
            impl AgentId for $ty {
                fn stable_id(self) -> u64 {
                    u64::from(self)
                }
            }
        )*
    };
}

widen_to_u64!(u16, u32, u64);

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
