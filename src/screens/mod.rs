//! Screen states and their plugins.

mod gameplay;
mod loading;

use bevy::prelude::*;

/// Top-level screen state.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum GameState {
    /// Sprite sheet and sounds are being requested.
    #[default]
    Loading,
    /// The playfield is live.
    Gameplay,
}

/// Sub-states within `Gameplay`. Only exists while `GameState::Gameplay` is active.
#[derive(SubStates, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[source(GameState = GameState::Gameplay)]
pub enum PlayState {
    /// Simulation advancing.
    #[default]
    Running,
    /// Simulation frozen behind the pause overlay.
    Paused,
}

pub fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_sub_state::<PlayState>();
    app.add_systems(Startup, spawn_camera);
    app.add_plugins((loading::plugin, gameplay::plugin));
}

/// Spawns the global 2D camera. Its orthographic area defines the play area.
fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}
