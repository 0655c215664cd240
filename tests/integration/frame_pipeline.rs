//! Whole-frame behaviour: overlaps reported by physics flow through dispatch,
//! the missile's reactions, the viewport check and the audio channels.

use avian2d::prelude::*;
use bevy::ecs::entity::hash_set::EntityHashSet;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use missile_strike::GameSet;
use missile_strike::audio::{ActiveLoops, SoundCue, SoundRequest};
use missile_strike::gameplay::collision::EntityKind;
use missile_strike::gameplay::missile::Missile;
use missile_strike::screens::{GameState, PlayState};
use pretty_assertions::assert_eq;

use crate::{drain_sound_requests, is_active, spawn_test_missile};

fn create_pipeline_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_state::<GameState>();
    app.add_sub_state::<PlayState>();
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
    app.add_plugins((missile_strike::audio::plugin, missile_strike::gameplay::plugin));
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Gameplay);
    app.update();
    app
}

fn place(app: &mut App, entity: Entity, x: f32) {
    app.world_mut()
        .entity_mut(entity)
        .insert(Transform::from_xyz(x, 0.0, 0.0));
}

fn overlap(app: &mut App, entity: Entity, with: &[Entity]) {
    app.world_mut()
        .entity_mut(entity)
        .insert(CollidingEntities(EntityHashSet::from_iter(
            with.iter().copied(),
        )));
}

#[test]
fn overlap_with_enemy_destroys_missile_in_one_frame() {
    let mut app = create_pipeline_app();
    let missile = spawn_test_missile(&mut app);
    let enemy = app.world_mut().spawn(EntityKind::Enemy).id();
    overlap(&mut app, missile, &[enemy]);

    app.update();

    assert!(!is_active(&app, missile));
    assert_eq!(
        drain_sound_requests(&mut app),
        vec![
            SoundRequest::Stop(SoundCue::Rocket),
            SoundRequest::Play(SoundCue::Explode),
        ]
    );
}

#[test]
fn overlap_with_bullet_keeps_missile_flying() {
    let mut app = create_pipeline_app();
    let missile = spawn_test_missile(&mut app);
    let bullet = app.world_mut().spawn(EntityKind::Bullet).id();
    overlap(&mut app, missile, &[bullet]);

    app.update();
    app.update();

    assert!(is_active(&app, missile));
    assert!(drain_sound_requests(&mut app).is_empty());
}

#[test]
fn hit_takes_precedence_over_leaving_viewport() {
    let mut app = create_pipeline_app();
    let missile = spawn_test_missile(&mut app);
    let enemy = app.world_mut().spawn(EntityKind::Enemy).id();
    place(&mut app, missile, 5000.0);
    overlap(&mut app, missile, &[enemy]);

    app.update();

    assert!(!is_active(&app, missile));
    assert_eq!(
        drain_sound_requests(&mut app),
        vec![
            SoundRequest::Stop(SoundCue::Rocket),
            SoundRequest::Play(SoundCue::Explode),
        ]
    );
}

#[test]
fn flying_off_screen_stops_travel_loop() {
    let mut app = create_pipeline_app();
    let missile = spawn_test_missile(&mut app);
    place(&mut app, missile, 5000.0);

    app.update();

    assert!(!is_active(&app, missile));
    let mut missiles = app.world_mut().query_filtered::<Entity, With<Missile>>();
    assert_eq!(missiles.iter(app.world()).count(), 0);
    assert!(!app.world().resource::<ActiveLoops>().is_playing(SoundCue::Rocket));
    assert_eq!(
        drain_sound_requests(&mut app),
        vec![SoundRequest::Stop(SoundCue::Rocket)]
    );
}

#[test]
fn missile_inside_play_area_keeps_flying() {
    let mut app = create_pipeline_app();
    let missile = spawn_test_missile(&mut app);
    place(&mut app, missile, 200.0);

    app.update();
    app.update();

    assert!(is_active(&app, missile));
    assert!(drain_sound_requests(&mut app).is_empty());
}

#[test]
fn paused_game_delivers_nothing() {
    let mut app = create_pipeline_app();
    let missile = spawn_test_missile(&mut app);
    let enemy = app.world_mut().spawn(EntityKind::Enemy).id();
    overlap(&mut app, missile, &[enemy]);
    app.world_mut()
        .resource_mut::<NextState<PlayState>>()
        .set(PlayState::Paused);

    app.update();

    assert!(is_active(&app, missile));
}
