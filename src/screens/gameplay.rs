//! Gameplay screen: pause toggle and the pause overlay.
//!
//! Gameplay visuals and logic live in `crate::gameplay`. This module owns
//! pausing, which freezes `Time<Virtual>` so physics and timers stop too.

use bevy::prelude::*;

use super::{GameState, PlayState};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(PlayState::Paused), (spawn_pause_overlay, pause_virtual_time));
    app.add_systems(OnExit(PlayState::Paused), unpause_virtual_time);
    app.add_systems(
        Update,
        toggle_pause.run_if(in_state(GameState::Gameplay)),
    );
}

fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    current: Res<State<PlayState>>,
    mut next: ResMut<NextState<PlayState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match current.get() {
        PlayState::Running => next.set(PlayState::Paused),
        PlayState::Paused => next.set(PlayState::Running),
    }
}

fn spawn_pause_overlay(mut commands: Commands) {
    commands.spawn((
        Name::new("Pause Overlay"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        DespawnOnExit(PlayState::Paused),
        children![(
            Text::new("PAUSED - press ESC to resume"),
            TextFont {
                font_size: 48.0,
                ..default()
            },
            TextColor(Color::WHITE),
        )],
    ));
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
