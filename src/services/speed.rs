use crate::models::speed::Speed;
use crate::models::world::World;

/// Result of an attempted speed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedChange {
    Changed(Speed),
    /// The new value would have left 1-10; nothing changed.
    Rejected,
}

/// Move the speed dial by `delta` notches.
pub fn set_speed(world: &mut World, delta: i32) -> SpeedChange {
    match world.actor().speed().adjusted(delta) {
        Some(speed) => {
            world.actor_mut().set_speed(speed);
            SpeedChange::Changed(speed)
        }
        None => SpeedChange::Rejected,
    }
}
