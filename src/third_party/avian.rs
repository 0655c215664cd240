//! Avian2d physics configuration for a side-scrolling shooter.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Pixels per physics length unit. Projectiles are tens of pixels wide.
const LENGTH_UNIT: f32 = 20.0;

// === Collision Layers ===

/// Physics collision layers.
///
/// - **Friendly**: launcher-side projectiles (missiles, bullets).
/// - **Hostile**: enemies.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum CollisionLayer {
    /// Player-side projectiles.
    #[default]
    Friendly,
    /// Things player projectiles are meant to hit.
    Hostile,
}

impl CollisionLayer {
    /// Layers for a player-side projectile. Projectiles also overlap each
    /// other so same-side contacts reach the projectile's own collision policy.
    #[must_use]
    pub fn projectile() -> CollisionLayers {
        CollisionLayers::new(Self::Friendly, [Self::Friendly, Self::Hostile])
    }

    /// Layers for an enemy body.
    #[must_use]
    pub fn enemy() -> CollisionLayers {
        CollisionLayers::new(Self::Hostile, Self::Friendly)
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default().with_length_unit(LENGTH_UNIT));
    app.insert_resource(Gravity::ZERO);
}
