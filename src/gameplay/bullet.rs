//! Bullets: fast same-side rounds. Missiles let them pass; enemies do not.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::Z_PROJECTILE;
use crate::gameplay::collision::{CollisionListener, EntityKind, PreCollision};
use crate::gameplay::viewport::{BoundingBox, ViewportTracked, despawn_on_exit};
use crate::screens::GameState;
use crate::third_party::CollisionLayer;

// === Constants ===

/// Bullet size (pixels).
pub const BULLET_SIZE: Vec2 = Vec2::new(12.0, 4.0);

/// Bullet travel speed (pixels per second), to the right.
pub const BULLET_SPEED: f32 = 600.0;

const BULLET_COLOR: Color = Color::srgb(1.0, 1.0, 0.3);

// === Components ===

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Bullet;

/// Spawn a bullet at `position` already flying right.
pub fn spawn_bullet(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Bullet"),
            Bullet,
            EntityKind::Bullet,
            Sprite::from_color(BULLET_COLOR, BULLET_SIZE),
            Transform::from_translation(position.extend(Z_PROJECTILE)),
            BoundingBox(BULLET_SIZE),
            ViewportTracked::default(),
            CollisionListener,
            DespawnOnExit(GameState::Gameplay),
            (
                RigidBody::Kinematic,
                Collider::rectangle(BULLET_SIZE.x, BULLET_SIZE.y),
                Sensor,
                CollisionLayer::projectile(),
                CollisionEventsEnabled,
                CollidingEntities::default(),
                LinearVelocity(Vec2::X * BULLET_SPEED),
            ),
        ))
        .observe(on_bullet_pre_collision)
        .observe(despawn_on_exit)
        .id()
}

/// Bullets are spent on enemies and fly through everything else.
fn on_bullet_pre_collision(
    collision: On<PreCollision>,
    kinds: Query<&EntityKind>,
    mut commands: Commands,
) {
    if matches!(kinds.get(collision.other), Ok(EntityKind::Enemy)) {
        commands.entity(collision.entity).try_despawn();
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Bullet>();
}
