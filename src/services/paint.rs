use crate::models::color::Rgb;
use crate::models::world::World;

/// Give the actor a new random color drawn from the world's random source.
pub fn recolor(world: &mut World) -> Rgb {
    let color = Rgb::random(world.rng_mut());
    world.actor_mut().set_color(color);
    color
}
