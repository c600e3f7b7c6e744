//! Common ECS components used across the engine.

use glam::Vec2;

/// Position on a 2D playfield, in playfield units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position(pub Vec2);

/// Velocity component for moving entities, in playfield units per millisecond.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub linear: Vec2,
}

impl Velocity {
    pub fn new(linear: Vec2) -> Self {
        Self { linear }
    }

    /// Straight-down motion at `speed` units/ms.
    pub fn falling(speed: f32) -> Self {
        Self {
            linear: Vec2::new(0.0, speed),
        }
    }

    /// Scalar speed.
    pub fn speed(&self) -> f32 {
        self.linear.length()
    }
}

/// Move every entity with a position and velocity by `delta_ms` worth of motion.
pub fn integrate_motion(world: &mut hecs::World, delta_ms: f32) {
    if delta_ms <= 0.0 {
        return;
    }
    for (_, (position, velocity)) in world.query_mut::<(&mut Position, &Velocity)>() {
        position.0 += velocity.linear * delta_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falling_velocity_points_down() {
        let v = Velocity::falling(0.02);
        assert_eq!(v.linear, Vec2::new(0.0, 0.02));
        assert!((v.speed() - 0.02).abs() < 1e-7);
    }

    #[test]
    fn integrate_moves_only_entities_with_velocity() {
        let mut world = hecs::World::new();
        let moving = world.spawn((Position(Vec2::new(10.0, 0.0)), Velocity::falling(0.5)));
        let still = world.spawn((Position(Vec2::new(3.0, 3.0)),));

        integrate_motion(&mut world, 10.0);

        assert_eq!(world.get::<&Position>(moving).unwrap().0, Vec2::new(10.0, 5.0));
        assert_eq!(world.get::<&Position>(still).unwrap().0, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut world = hecs::World::new();
        let e = world.spawn((Position(Vec2::ZERO), Velocity::falling(1.0)));
        integrate_motion(&mut world, 0.0);
        assert_eq!(world.get::<&Position>(e).unwrap().0, Vec2::ZERO);
    }
}
