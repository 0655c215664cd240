//! Testing utilities for Bevy systems.

#![cfg(test)]

use bevy::ecs::message::{Message, Messages};
use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;

/// Creates a minimal app for testing with essential plugins.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Asserts how many entities match the query filter `F`.
#[track_caller]
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    let actual = query.iter(app.world()).count();
    assert_eq!(
        actual, expected,
        "expected {expected} matching entities, found {actual}"
    );
}

/// Takes every pending message of type `M`, oldest first.
pub fn drain_messages<M: Message>(app: &mut App) -> Vec<M> {
    app.world_mut()
        .resource_mut::<Messages<M>>()
        .drain()
        .collect()
}
