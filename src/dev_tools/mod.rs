//! Development tools, only compiled with the `dev` feature.
//!
//! Collider outlines and a test enemy spawner.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gameplay::enemy::spawn_enemy;
use crate::gameplay::launcher::Launcher;
use crate::{GameSet, gameplay_running};

/// How far in front of the launcher debug enemies appear (pixels).
const DEBUG_SPAWN_DISTANCE: f32 = 300.0;

/// Spawns one enemy straight ahead of each launcher on `E`.
fn debug_spawn_enemy(
    keyboard: Res<ButtonInput<KeyCode>>,
    launchers: Query<&Transform, With<Launcher>>,
    mut commands: Commands,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    for transform in &launchers {
        let position = transform.translation.truncate() + Vec2::X * DEBUG_SPAWN_DISTANCE;
        spawn_enemy(&mut commands, position);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsDebugPlugin::default());
    app.add_systems(
        Update,
        debug_spawn_enemy
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
