//! World model
//!
//! The single piece of mutable session state: the fixed boundaries, the
//! actor moving inside them, the trail it has drawn, and the random source
//! used for placement and colors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::actor::Actor;
use super::boundaries::{Boundaries, GridConfig};
use super::color::Rgb;
use super::errors::{GameError, GameResult};
use super::heading::Heading;
use super::position::GridPosition;
use super::trail::Trail;

pub struct World {
    boundaries: Boundaries,
    actor: Actor,
    trail: Trail,
    rng: StdRng,
}

impl World {
    /// Create a world with the actor at a random lattice point, facing a
    /// random cardinal heading, in a random color.
    pub fn new(config: &GridConfig, seed: u64) -> GameResult<Self> {
        let boundaries = config.boundaries()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let step = boundaries.step();
        let position = GridPosition {
            x: rng.gen_range(boundaries.left / step..=boundaries.right / step) * step,
            y: rng.gen_range(boundaries.bottom / step..=boundaries.top / step) * step,
        };
        let heading = Heading::from_index(rng.gen_range(0..Heading::ALL.len()));
        let color = Rgb::random(&mut rng);

        Ok(World {
            boundaries,
            actor: Actor::new(position, heading).with_color(color),
            trail: Trail::new(),
            rng,
        })
    }

    /// Create a world around an existing actor.
    ///
    /// # Returns
    /// Err(InvalidConfig) if the actor is off the lattice or out of bounds
    pub fn with_actor(config: &GridConfig, actor: Actor, seed: u64) -> GameResult<Self> {
        let boundaries = config.boundaries()?;
        let position = actor.position();
        if !boundaries.contains(position) || !boundaries.is_on_grid(position) {
            return Err(GameError::InvalidConfig(format!(
                "actor position {} is not a grid point inside the boundaries",
                position
            )));
        }
        Ok(World {
            boundaries,
            actor,
            trail: Trail::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub(crate) fn trail_mut(&mut self) -> &mut Trail {
        &mut self.trail
    }

    pub(crate) fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_placement_is_on_grid() {
        let config = GridConfig::default();
        for seed in 0..200 {
            let world = World::new(&config, seed).unwrap();
            let pos = world.actor().position();
            assert!(world.boundaries().contains(pos), "seed {} placed at {}", seed, pos);
            assert!(world.boundaries().is_on_grid(pos), "seed {} placed at {}", seed, pos);
            assert_eq!(world.actor().speed().value(), 5);
            assert!(world.trail().is_empty());
        }
    }

    #[test]
    fn random_placement_reaches_edges() {
        let config = GridConfig::default();
        let xs: Vec<i32> = (0..500)
            .map(|seed| World::new(&config, seed).unwrap().actor().position().x)
            .collect();
        assert!(xs.contains(&-200));
        assert!(xs.contains(&200));
    }

    #[test]
    fn same_seed_same_actor() {
        let config = GridConfig::default();
        let a = World::new(&config, 42).unwrap();
        let b = World::new(&config, 42).unwrap();
        assert_eq!(a.actor(), b.actor());
    }

    #[test]
    fn with_actor_rejects_off_grid() {
        let config = GridConfig::default();
        let outside = Actor::new(GridPosition::new(250, 0), Heading::East);
        assert!(World::with_actor(&config, outside, 0).is_err());
        let between = Actor::new(GridPosition::new(25, 0), Heading::East);
        assert!(World::with_actor(&config, between, 0).is_err());
        let corner = Actor::new(GridPosition::new(-200, 200), Heading::East);
        assert!(World::with_actor(&config, corner, 0).is_ok());
    }

    #[test]
    fn invalid_config_propagates() {
        let config = GridConfig { step: 50, width: 3, height: 8 };
        assert!(matches!(World::new(&config, 1), Err(GameError::InvalidConfig(_))));
    }
}
