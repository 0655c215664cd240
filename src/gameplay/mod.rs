//! Gameplay domain plugins: the missile, its event bus, and the roster around it.

pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod launcher;
pub mod missile;
pub mod viewport;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        collision::plugin,
        viewport::plugin,
        missile::plugin,
        bullet::plugin,
        enemy::plugin,
        launcher::plugin,
    ));
}
