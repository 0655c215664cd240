//! Sprite sheet frame animation.

use std::time::Duration;

use bevy::prelude::*;

use crate::{GameSet, gameplay_running};

/// What happens after the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum AnimationStrategy {
    /// Wrap back to the first frame.
    Loop,
    /// Hold the last frame.
    Freeze,
}

/// Plays a sequence of sprite sheet cells on the entity's `Sprite` atlas.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct FrameAnimation {
    frames: Vec<usize>,
    cursor: usize,
    timer: Timer,
    strategy: AnimationStrategy,
    scale: f32,
}

impl FrameAnimation {
    /// Animation over `frames` (sheet cell indices), each shown for `frame_duration`.
    ///
    /// `frames` must not be empty.
    #[must_use]
    pub fn from_frames(
        frames: &[usize],
        frame_duration: Duration,
        strategy: AnimationStrategy,
    ) -> Self {
        debug_assert!(!frames.is_empty(), "animation needs at least one frame");
        Self {
            frames: frames.to_vec(),
            cursor: 0,
            timer: Timer::new(frame_duration, TimerMode::Repeating),
            strategy,
            scale: 1.0,
        }
    }

    /// Uniform scale applied to the drawn sprite.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub const fn strategy(&self) -> AnimationStrategy {
        self.strategy
    }

    /// Sheet cell currently shown.
    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.frames[self.cursor]
    }

    /// Advances by `delta`, possibly skipping several frames on a long tick.
    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
        for _ in 0..self.timer.times_finished_this_tick() {
            self.step();
        }
    }

    fn step(&mut self) {
        let last = self.frames.len() - 1;
        self.cursor = match self.strategy {
            AnimationStrategy::Loop if self.cursor == last => 0,
            AnimationStrategy::Freeze if self.cursor == last => last,
            _ => self.cursor + 1,
        };
    }
}

/// Advances every frame animation and writes the frame into the sprite atlas.
fn animate_frames(time: Res<Time>, mut query: Query<(&mut FrameAnimation, &mut Sprite)>) {
    for (mut animation, mut sprite) in &mut query {
        animation.tick(time.delta());
        let frame = animation.current_frame();
        if let Some(atlas) = sprite.texture_atlas.as_mut()
            && atlas.index != frame
        {
            atlas.index = frame;
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<FrameAnimation>();
    app.add_systems(
        Update,
        animate_frames
            .in_set(GameSet::Animation)
            .run_if(gameplay_running),
    );
}
