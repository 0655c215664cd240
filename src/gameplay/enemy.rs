//! Enemies: drift in from the right edge and die to any player projectile.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::collision::{CollisionListener, EntityKind, PreCollision};
use crate::gameplay::viewport::{BoundingBox, PlayArea, ViewportTracked, despawn_on_exit};
use crate::screens::GameState;
use crate::third_party::CollisionLayer;
use crate::{GameSet, Z_ENEMY, gameplay_running};

// === Constants ===

/// Enemy size (pixels).
pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 40.0);

/// Drift speed (pixels per second), to the left.
pub const ENEMY_SPEED: f32 = 120.0;

/// Seconds between enemy spawns.
pub const SPAWN_INTERVAL: f32 = 1.5;

const ENEMY_COLOR: Color = Color::srgb(0.8, 0.2, 0.2);

// === Components ===

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Enemy;

/// Repeating spawn cadence. Reset each time gameplay starts.
#[derive(Resource, Debug, Reflect)]
#[reflect(Resource)]
pub struct EnemySpawnTimer(pub Timer);

impl Default for EnemySpawnTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(SPAWN_INTERVAL, TimerMode::Repeating))
    }
}

// === Pure Functions ===

/// Spawn point just inside the right edge of `area`. `t` in `0..=1` picks the
/// height from bottom to top, keeping the whole enemy on screen.
#[must_use]
pub fn enemy_spawn_position(area: Rect, t: f32) -> Vec2 {
    let half = ENEMY_SIZE / 2.0;
    let low = area.min.y + half.y;
    let high = area.max.y - half.y;
    Vec2::new(area.max.x - half.x, (high - low).mul_add(t.clamp(0.0, 1.0), low))
}

/// Spawn an enemy at `position` already drifting left.
pub fn spawn_enemy(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Enemy"),
            Enemy,
            EntityKind::Enemy,
            Sprite::from_color(ENEMY_COLOR, ENEMY_SIZE),
            Transform::from_translation(position.extend(Z_ENEMY)),
            BoundingBox(ENEMY_SIZE),
            ViewportTracked::default(),
            CollisionListener,
            DespawnOnExit(GameState::Gameplay),
            (
                RigidBody::Dynamic,
                Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
                CollisionLayer::enemy(),
                LockedAxes::ROTATION_LOCKED,
                CollisionEventsEnabled,
                CollidingEntities::default(),
                LinearVelocity(Vec2::NEG_X * ENEMY_SPEED),
            ),
        ))
        .observe(on_enemy_pre_collision)
        .observe(despawn_on_exit)
        .id()
}

// === Observers ===

fn on_enemy_pre_collision(
    collision: On<PreCollision>,
    kinds: Query<&EntityKind>,
    mut commands: Commands,
) {
    if matches!(
        kinds.get(collision.other),
        Ok(EntityKind::Missile | EntityKind::Bullet)
    ) {
        debug!("enemy {} destroyed by {}", collision.entity, collision.other);
        commands.entity(collision.entity).try_despawn();
    }
}

// === Systems ===

fn reset_enemy_spawn_timer(mut commands: Commands) {
    commands.insert_resource(EnemySpawnTimer::default());
}

fn tick_enemy_spawner(
    time: Res<Time>,
    area: Res<PlayArea>,
    mut spawn_timer: ResMut<EnemySpawnTimer>,
    mut commands: Commands,
) {
    spawn_timer.0.tick(time.delta());
    for _ in 0..spawn_timer.0.times_finished_this_tick() {
        let t = rand::rng().random_range(0.0..=1.0);
        let enemy = spawn_enemy(&mut commands, enemy_spawn_position(area.0, t));
        debug!("enemy {enemy} spawned");
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Enemy>()
        .register_type::<EnemySpawnTimer>();

    app.add_systems(OnEnter(GameState::Gameplay), reset_enemy_spawn_timer);
    app.add_systems(
        Update,
        tick_enemy_spawner
            .in_set(GameSet::Spawn)
            .run_if(gameplay_running.and(resource_exists::<EnemySpawnTimer>)),
    );
}
