//! Named sound channels shared by the whole game.
//!
//! Gameplay code never touches `AudioPlayer` directly. It writes
//! [`SoundRequest`] messages keyed by [`SoundCue`], and `apply_sound_requests`
//! turns them into player entities once per frame. Both `Play` and `Stop` are
//! idempotent: playing a loop that is already running and stopping a cue that
//! is silent are no-ops, and a missing [`SoundLibrary`] (no audio loaded) makes
//! every request a no-op.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

use crate::GameSet;
use crate::assets::SoundLibrary;

// === Types ===

/// Every sound the game can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SoundCue {
    /// Missile engine hum. Loops while a missile is in flight.
    Rocket,
    /// Missile impact. One shot.
    Explode,
}

impl SoundCue {
    /// Whether the cue loops until stopped.
    #[must_use]
    pub const fn looping(self) -> bool {
        match self {
            Self::Rocket => true,
            Self::Explode => false,
        }
    }

    fn source(self, library: &SoundLibrary) -> Handle<AudioSource> {
        match self {
            Self::Rocket => library.rocket.clone(),
            Self::Explode => library.explode.clone(),
        }
    }
}

/// A play/stop request against a shared channel.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundRequest {
    Play(SoundCue),
    Stop(SoundCue),
}

/// Marks the entity currently playing a cue.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SoundChannel(pub SoundCue);

/// Looping cues that are currently audible, keyed by cue.
#[derive(Resource, Debug, Default)]
pub struct ActiveLoops(HashMap<SoundCue, Entity>);

impl ActiveLoops {
    #[must_use]
    pub fn is_playing(&self, cue: SoundCue) -> bool {
        self.0.contains_key(&cue)
    }
}

// === Systems ===

/// Applies this frame's requests in the order they were written.
fn apply_sound_requests(
    mut requests: MessageReader<SoundRequest>,
    library: Option<Res<SoundLibrary>>,
    mut loops: ResMut<ActiveLoops>,
    channels: Query<(), With<SoundChannel>>,
    mut commands: Commands,
) {
    for request in requests.read() {
        match *request {
            SoundRequest::Play(cue) => {
                let Some(library) = library.as_deref() else {
                    debug!("no sound library loaded, dropping {cue:?}");
                    continue;
                };
                if !cue.looping() {
                    commands.spawn((
                        Name::new(format!("{cue:?} Sound")),
                        SoundChannel(cue),
                        AudioPlayer::new(cue.source(library)),
                        PlaybackSettings::DESPAWN,
                    ));
                    continue;
                }
                // Entry may be stale if the player was despawned with its screen.
                if let Some(&entity) = loops.0.get(&cue)
                    && channels.contains(entity)
                {
                    continue;
                }
                let entity = commands
                    .spawn((
                        Name::new(format!("{cue:?} Loop")),
                        SoundChannel(cue),
                        AudioPlayer::new(cue.source(library)),
                        PlaybackSettings::LOOP,
                    ))
                    .id();
                loops.0.insert(cue, entity);
            }
            SoundRequest::Stop(cue) => {
                if let Some(entity) = loops.0.remove(&cue) {
                    commands.entity(entity).try_despawn();
                }
            }
        }
    }
}

// === Plugin ===

pub fn plugin(app: &mut App) {
    app.register_type::<SoundChannel>()
        .add_message::<SoundRequest>()
        .init_resource::<ActiveLoops>();

    // Runs unconditionally so stops issued on the frame a screen closes still land.
    app.add_systems(Update, apply_sound_requests.in_set(GameSet::Audio));
}
