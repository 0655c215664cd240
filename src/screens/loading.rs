//! Loading screen: requests assets, then hands over to gameplay.

use bevy::prelude::*;

use super::GameState;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Loading), spawn_loading_screen)
        .add_systems(
            Update,
            enter_gameplay.run_if(in_state(GameState::Loading)),
        );
}

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        Name::new("Loading Text"),
        Text::new("Loading..."),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(45.0),
            top: Val::Percent(45.0),
            ..default()
        },
        DespawnOnExit(GameState::Loading),
    ));
}

/// Assets stream in asynchronously; entities that reference them render once ready.
fn enter_gameplay(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Gameplay);
}
