//! The missile's reactions, driven by delivering events directly.

use bevy::prelude::*;
use missile_strike::audio::{SoundCue, SoundRequest};
use missile_strike::gameplay::collision::{EntityKind, PreCollision};
use missile_strike::gameplay::viewport::ExitViewport;
use pretty_assertions::assert_eq;

use crate::{drain_sound_requests, is_active, spawn_test_missile};

fn create_scenario_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_message::<SoundRequest>();
    app
}

fn collide(app: &mut App, missile: Entity, other: Entity) {
    app.world_mut().trigger(PreCollision {
        entity: missile,
        other,
    });
    app.world_mut().flush();
}

fn exit_viewport(app: &mut App, missile: Entity) {
    app.world_mut().trigger(ExitViewport { entity: missile });
    app.world_mut().flush();
}

#[test]
fn exempt_bullet_leaves_missile_active_and_silent() {
    let mut app = create_scenario_app();
    let missile = spawn_test_missile(&mut app);
    let bullet = app.world_mut().spawn(EntityKind::Bullet).id();

    collide(&mut app, missile, bullet);

    assert!(is_active(&app, missile));
    assert!(drain_sound_requests(&mut app).is_empty());
}

#[test]
fn enemy_hit_destroys_with_stop_before_impact() {
    let mut app = create_scenario_app();
    let missile = spawn_test_missile(&mut app);
    let enemy = app.world_mut().spawn(EntityKind::Enemy).id();

    collide(&mut app, missile, enemy);

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
fn leaving_viewport_destroys_without_impact() {
    let mut app = create_scenario_app();
    let missile = spawn_test_missile(&mut app);

    exit_viewport(&mut app, missile);

    assert!(!is_active(&app, missile));
    let requests = drain_sound_requests(&mut app);
    assert_eq!(requests, vec![SoundRequest::Stop(SoundCue::Rocket)]);
    assert!(!requests.contains(&SoundRequest::Play(SoundCue::Explode)));
}

#[test]
fn collision_after_exit_is_ignored() {
    let mut app = create_scenario_app();
    let missile = spawn_test_missile(&mut app);
    let enemy = app.world_mut().spawn(EntityKind::Enemy).id();

    exit_viewport(&mut app, missile);
    collide(&mut app, missile, enemy);

    assert_eq!(
        drain_sound_requests(&mut app),
        vec![SoundRequest::Stop(SoundCue::Rocket)]
    );
    assert!(is_active(&app, enemy));
}

#[test]
fn exempt_collisions_do_not_use_up_the_missile() {
    let mut app = create_scenario_app();
    let missile = spawn_test_missile(&mut app);
    let bullet = app.world_mut().spawn(EntityKind::Bullet).id();
    let enemy = app.world_mut().spawn(EntityKind::Enemy).id();

    collide(&mut app, missile, bullet);
    collide(&mut app, missile, bullet);
    collide(&mut app, missile, enemy);

    assert!(!is_active(&app, missile));
    assert_eq!(drain_sound_requests(&mut app).len(), 2);
}
