//! Collision classification and per-entity `PreCollision` dispatch.
//!
//! avian2d keeps `CollidingEntities` up to date for every body that has it.
//! Once per frame, every [`CollisionListener`] receives one [`PreCollision`]
//! per entity it currently overlaps. Reactions are entity-scoped observers
//! registered at spawn, so an entity that has been despawned no longer
//! receives anything.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::{GameSet, gameplay_running};

/// What a collidable entity is. Carried by everything that can be hit, so
/// collision policies can match on the other party instead of probing for
/// marker components.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum EntityKind {
    Launcher,
    Missile,
    /// Same-side small-arms fire.
    Bullet,
    Enemy,
}

/// Opts an entity into [`PreCollision`] delivery.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct CollisionListener;

/// `entity` is overlapping `other` this frame.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreCollision {
    pub entity: Entity,
    pub other: Entity,
}

/// Triggers `PreCollision` for every current overlap of every listener.
fn dispatch_pre_collisions(
    listeners: Query<(Entity, &CollidingEntities), With<CollisionListener>>,
    mut commands: Commands,
) {
    for (entity, colliding) in &listeners {
        for &other in &colliding.0 {
            commands.trigger(PreCollision { entity, other });
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<EntityKind>()
        .register_type::<CollisionListener>();

    app.add_systems(
        Update,
        dispatch_pre_collisions
            .in_set(GameSet::Collision)
            .run_if(gameplay_running),
    );
}
