use crate::models::position::GridPosition;
use crate::models::world::World;

use super::course::heading_vector;

/// Result of an attempted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: GridPosition, to: GridPosition },
    /// The step would have left the boundaries; nothing changed.
    Blocked,
}

/// Step the actor one lattice point along its heading.
///
/// The candidate position is checked against the boundaries (inclusive on
/// both axes). A step that would leave them is dropped without changing any
/// state, so repeated calls against an edge stay blocked. An accepted step
/// draws a trail segment in the actor's current color.
pub fn advance(world: &mut World) -> MoveOutcome {
    let actor = world.actor();
    let from = actor.position();
    let to = match from.offset(heading_vector(actor.heading()), world.boundaries().step()) {
        Some(to) if world.boundaries().contains(to) => to,
        _ => return MoveOutcome::Blocked,
    };

    let color = world.actor().color();
    world.actor_mut().set_position(to);
    world.trail_mut().record(from, to, color);
    MoveOutcome::Moved { from, to }
}
