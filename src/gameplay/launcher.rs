//! The player's launcher: vertical movement, missiles on Space, bullets on F.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::audio::{SoundCue, SoundRequest};
use crate::gameplay::bullet::{BULLET_SIZE, spawn_bullet};
use crate::gameplay::collision::EntityKind;
use crate::gameplay::missile::{MISSILE_WIDTH, spawn_missile};
use crate::gameplay::viewport::PlayArea;
use crate::screens::GameState;
use crate::{GameSet, Z_LAUNCHER, Z_PROJECTILE, gameplay_running};

// === Constants ===

/// Launcher size (pixels).
pub const LAUNCHER_SIZE: Vec2 = Vec2::new(48.0, 24.0);

/// Distance of the launcher from the left edge of the play area (pixels).
const LAUNCHER_MARGIN: f32 = 80.0;

/// Vertical movement speed (pixels per second).
const LAUNCHER_SPEED: f32 = 300.0;

/// Missile launch speed (pixels per second), to the right.
pub const MISSILE_SPEED: f32 = 350.0;

const MISSILE_COOLDOWN: Duration = Duration::from_millis(500);
const BULLET_COOLDOWN: Duration = Duration::from_millis(150);

const LAUNCHER_COLOR: Color = Color::srgb(0.2, 0.8, 0.2);

// === Components ===

/// Player-controlled launcher. Each weapon has its own cooldown.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Launcher {
    pub missile_cooldown: Timer,
    pub bullet_cooldown: Timer,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            missile_cooldown: ready_timer(MISSILE_COOLDOWN),
            bullet_cooldown: ready_timer(BULLET_COOLDOWN),
        }
    }
}

/// A one-shot timer that starts out already elapsed, so the first shot is free.
fn ready_timer(duration: Duration) -> Timer {
    let mut timer = Timer::new(duration, TimerMode::Once);
    timer.set_elapsed(duration);
    timer
}

fn is_ready(timer: &Timer) -> bool {
    timer.elapsed() >= timer.duration()
}

// === Systems ===

fn spawn_launcher(area: Res<PlayArea>, mut commands: Commands) {
    let x = area.0.min.x + LAUNCHER_MARGIN;
    commands.spawn((
        Name::new("Launcher"),
        Launcher::default(),
        EntityKind::Launcher,
        Sprite::from_color(LAUNCHER_COLOR, LAUNCHER_SIZE),
        Transform::from_xyz(x, area.0.center().y, Z_LAUNCHER),
        DespawnOnExit(GameState::Gameplay),
    ));
}

/// W/S or arrow keys, clamped to the play area.
fn move_launcher(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    area: Res<PlayArea>,
    mut launchers: Query<&mut Transform, With<Launcher>>,
) {
    let mut direction = 0.0;
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction -= 1.0;
    }

    let half = LAUNCHER_SIZE.y / 2.0;
    for mut transform in &mut launchers {
        transform.translation.y = (direction * LAUNCHER_SPEED)
            .mul_add(time.delta_secs(), transform.translation.y)
            .clamp(area.0.min.y + half, area.0.max.y - half);
    }
}

/// Fires from the launcher's nose. A missile also starts the travel sound.
fn fire(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut launchers: Query<(&mut Launcher, &Transform)>,
    mut sounds: MessageWriter<SoundRequest>,
    mut commands: Commands,
) {
    for (mut launcher, transform) in &mut launchers {
        launcher.missile_cooldown.tick(time.delta());
        launcher.bullet_cooldown.tick(time.delta());
        let nose = transform.translation.truncate() + Vec2::X * (LAUNCHER_SIZE.x / 2.0);

        if keyboard.just_pressed(KeyCode::Space) && is_ready(&launcher.missile_cooldown) {
            let missile = spawn_missile(&mut commands);
            let position = nose + Vec2::X * (MISSILE_WIDTH / 2.0);
            commands.entity(missile).insert((
                Transform::from_translation(position.extend(Z_PROJECTILE)),
                LinearVelocity(Vec2::X * MISSILE_SPEED),
                DespawnOnExit(GameState::Gameplay),
            ));
            sounds.write(SoundRequest::Play(SoundCue::Rocket));
            launcher.missile_cooldown.reset();
            info!("missile {missile} launched");
        }

        if keyboard.pressed(KeyCode::KeyF) && is_ready(&launcher.bullet_cooldown) {
            spawn_bullet(&mut commands, nose + Vec2::X * (BULLET_SIZE.x / 2.0));
            launcher.bullet_cooldown.reset();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Launcher>();

    app.add_systems(OnEnter(GameState::Gameplay), spawn_launcher);
    app.add_systems(
        Update,
        (move_launcher, fire)
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
