//! Missile strike game library.

pub mod animation;
pub mod assets;
pub mod audio;
#[cfg(feature = "dev")]
mod dev_tools;
pub mod gameplay;
pub mod screens;
#[cfg(test)]
pub mod testing;
pub mod third_party;

use bevy::prelude::*;

/// Z layer for enemies.
pub const Z_ENEMY: f32 = 1.0;

/// Z layer for the launcher.
pub const Z_LAUNCHER: f32 = 2.0;

/// Z layer for missiles and bullets (drawn above everything they can hit).
pub const Z_PROJECTILE: f32 = 3.0;

/// Per-frame ordering of gameplay systems in `Update`.
///
/// Collision dispatch must finish (and its despawns be applied) before the
/// viewport check, so an entity destroyed by a hit never also "exits".
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard handling and firing.
    Input,
    /// Timed spawners.
    Spawn,
    /// Collision event dispatch.
    Collision,
    /// Play-area sync and viewport-exit dispatch.
    Viewport,
    /// Sprite frame animation.
    Animation,
    /// Applying queued sound requests.
    Audio,
}

/// Run condition: in gameplay and not paused.
pub fn gameplay_running(state: Option<Res<State<screens::PlayState>>>) -> bool {
    state.is_some_and(|state| *state.get() == screens::PlayState::Running)
}

/// Root plugin. `main` adds this on top of `DefaultPlugins`.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Spawn,
            GameSet::Collision,
            GameSet::Viewport,
            GameSet::Animation,
            GameSet::Audio,
        )
            .chain(),
    );

    app.add_plugins((
        third_party::plugin,
        screens::plugin,
        assets::plugin,
        audio::plugin,
        animation::plugin,
        gameplay::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}
