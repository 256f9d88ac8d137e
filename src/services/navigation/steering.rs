use crate::models::heading::Heading;
use crate::models::world::World;

/// Turn the actor 90 degrees to the right. Returns the new heading.
pub fn turn_right(world: &mut World) -> Heading {
    let heading = world.actor().heading().right();
    world.actor_mut().set_heading(heading);
    heading
}

/// Turn the actor 90 degrees to the left. Returns the new heading.
pub fn turn_left(world: &mut World) -> Heading {
    let heading = world.actor().heading().left();
    world.actor_mut().set_heading(heading);
    heading
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::actor::Actor;
    use crate::models::boundaries::GridConfig;
    use crate::models::position::GridPosition;

    fn world_facing(heading: Heading) -> World {
        let actor = Actor::new(GridPosition::ORIGIN, heading);
        World::with_actor(&GridConfig::default(), actor, 0).unwrap()
    }

    #[test]
    fn four_right_turns_restore_heading() {
        for start in Heading::ALL {
            let mut world = world_facing(start);
            for _ in 0..4 {
                turn_right(&mut world);
            }
            assert_eq!(world.actor().heading(), start);
        }
    }

    #[test]
    fn turn_right_from_east_faces_south() {
        let mut world = world_facing(Heading::East);
        assert_eq!(turn_right(&mut world), Heading::South);
        assert_eq!(world.actor().heading().degrees(), 270);
    }

    #[test]
    fn turn_left_from_south_wraps_to_east() {
        let mut world = world_facing(Heading::South);
        assert_eq!(turn_left(&mut world), Heading::East);
        assert_eq!(world.actor().heading().degrees(), 0);
    }

    #[test]
    fn turning_does_not_move() {
        let mut world = world_facing(Heading::North);
        turn_left(&mut world);
        turn_right(&mut world);
        turn_right(&mut world);
        assert_eq!(world.actor().position(), GridPosition::ORIGIN);
    }
}
