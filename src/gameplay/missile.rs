//! The missile: a looping-animated projectile that dies on its first real hit.
//!
//! Lifecycle is implicit in the entity's existence. A missile is `Active`
//! from spawn until it is despawned, and despawning is terminal:
//!
//! | Trigger | Effect |
//! |---|---|
//! | `PreCollision` with a bullet | nothing, the bullet passes through |
//! | `PreCollision` with anything else | stop travel sound, play impact, despawn |
//! | `ExitViewport` | stop travel sound, despawn (no impact) |
//!
//! The travel sound is started by whoever fires the missile.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationStrategy, FrameAnimation};
use crate::assets::GameSheet;
use crate::audio::{SoundCue, SoundRequest};
use crate::gameplay::collision::{CollisionListener, EntityKind, PreCollision};
use crate::gameplay::viewport::{BoundingBox, ExitViewport, ViewportTracked};
use crate::third_party::CollisionLayer;

// === Constants ===

/// Collision box width (pixels).
pub const MISSILE_WIDTH: f32 = 60.0;

/// Collision box height (pixels).
pub const MISSILE_HEIGHT: f32 = 20.0;

/// Sprite sheet cells of the exhaust-flicker loop.
const MISSILE_FRAMES: [usize; 3] = [13, 14, 15];

const MISSILE_FRAME_DURATION: Duration = Duration::from_millis(50);

/// Drawn sprite scale. Does not affect the collision box.
const MISSILE_SCALE: f32 = 0.75;

// === Components ===

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Missile;

impl Missile {
    /// Whether a collision with `other` is passed through.
    ///
    /// Only same-side bullets are exempt. A partner with no kind at all is
    /// treated as a hit.
    #[must_use]
    pub const fn exempts(other: Option<EntityKind>) -> bool {
        match other {
            Some(EntityKind::Bullet) => true,
            Some(EntityKind::Launcher | EntityKind::Missile | EntityKind::Enemy) | None => false,
        }
    }
}

// === Spawning ===

/// Spawn a missile at the world origin with its reactions already attached.
///
/// Callers position and launch it afterwards by inserting `Transform` and
/// `LinearVelocity`.
pub fn spawn_missile(commands: &mut Commands) -> Entity {
    let size = Vec2::new(MISSILE_WIDTH, MISSILE_HEIGHT);
    commands
        .spawn((
            Name::new("Missile"),
            Missile,
            EntityKind::Missile,
            Transform::default(),
            BoundingBox(size),
            ViewportTracked::default(),
            CollisionListener,
            (
                RigidBody::Kinematic,
                Collider::rectangle(size.x, size.y),
                Sensor,
                CollisionLayer::projectile(),
                CollisionEventsEnabled,
                CollidingEntities::default(),
            ),
        ))
        .observe(on_missile_pre_collision)
        .observe(on_missile_exit_viewport)
        .id()
}

// === Observers ===

/// One-time setup when a missile enters the world: attach the looping
/// exhaust animation from the shared sheet.
fn initialize_missile(add: On<Add, Missile>, sheet: Option<Res<GameSheet>>, mut commands: Commands) {
    let Some(sheet) = sheet else {
        debug!("no sprite sheet loaded, missile {} stays invisible", add.entity);
        return;
    };
    let animation = FrameAnimation::from_frames(
        &MISSILE_FRAMES,
        MISSILE_FRAME_DURATION,
        AnimationStrategy::Loop,
    )
    .with_scale(MISSILE_SCALE);
    let sprite = sheet.sprite(animation.current_frame(), animation.scale());
    commands.entity(add.entity).try_insert((sprite, animation));
}

/// Stop then impact then despawn, in that order, unless the other party is exempt.
fn on_missile_pre_collision(
    collision: On<PreCollision>,
    kinds: Query<&EntityKind>,
    mut sounds: MessageWriter<SoundRequest>,
    mut commands: Commands,
) {
    if Missile::exempts(kinds.get(collision.other).ok().copied()) {
        return;
    }
    debug!("missile {} hit {}", collision.entity, collision.other);
    sounds.write(SoundRequest::Stop(SoundCue::Rocket));
    sounds.write(SoundRequest::Play(SoundCue::Explode));
    commands.entity(collision.entity).try_despawn();
}

/// Silent despawn: a miss makes no impact sound.
fn on_missile_exit_viewport(
    exit: On<ExitViewport>,
    mut sounds: MessageWriter<SoundRequest>,
    mut commands: Commands,
) {
    debug!("missile {} left the play area", exit.entity);
    sounds.write(SoundRequest::Stop(SoundCue::Rocket));
    commands.entity(exit.entity).try_despawn();
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Missile>();
    app.add_observer(initialize_missile);
}
