//! Integration tests: missile behaviour through the public API and the full frame pipeline.

mod frame_pipeline;
mod missile_scenarios;

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use missile_strike::audio::SoundRequest;

/// Takes every pending sound request, oldest first.
pub fn drain_sound_requests(app: &mut App) -> Vec<SoundRequest> {
    app.world_mut()
        .resource_mut::<Messages<SoundRequest>>()
        .drain()
        .collect()
}

/// Spawn a missile through `Commands` and apply it.
pub fn spawn_test_missile(app: &mut App) -> Entity {
    let missile = {
        let mut commands = app.world_mut().commands();
        missile_strike::gameplay::missile::spawn_missile(&mut commands)
    };
    app.world_mut().flush();
    missile
}

pub fn is_active(app: &App, entity: Entity) -> bool {
    app.world().get_entity(entity).is_ok()
}
