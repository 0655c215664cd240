//! The visible play area and `ExitViewport` dispatch.

use bevy::prelude::*;

use crate::{GameSet, gameplay_running};

/// Play area used until the camera reports its real extent.
const DEFAULT_PLAY_AREA: Vec2 = Vec2::new(1280.0, 720.0);

/// World-space rectangle currently visible through the camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayArea(pub Rect);

impl Default for PlayArea {
    fn default() -> Self {
        Self(Rect::from_center_size(Vec2::ZERO, DEFAULT_PLAY_AREA))
    }
}

/// Axis-aligned size of an entity, centred on its translation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BoundingBox(pub Vec2);

impl BoundingBox {
    /// World-space rectangle when centred at `center`.
    #[must_use]
    pub fn rect_at(self, center: Vec2) -> Rect {
        Rect::from_center_size(center, self.0)
    }
}

/// Tracks whether the bounding box overlaps the play area, so `ExitViewport`
/// fires once per departure rather than every frame spent outside.
///
/// Starts on screen: an entity spawned outside the play area exits on its
/// first check.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ViewportTracked {
    on_screen: bool,
}

impl Default for ViewportTracked {
    fn default() -> Self {
        Self { on_screen: true }
    }
}

impl ViewportTracked {
    #[must_use]
    pub const fn on_screen(&self) -> bool {
        self.on_screen
    }
}

/// `entity`'s bounding box has just fully left the play area.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitViewport {
    pub entity: Entity,
}

/// Observer for entities that simply vanish once off screen.
pub fn despawn_on_exit(exit: On<ExitViewport>, mut commands: Commands) {
    commands.entity(exit.entity).try_despawn();
}

/// Copies the camera's orthographic extent into [`PlayArea`].
fn sync_play_area(
    camera: Single<(&GlobalTransform, &Projection), With<Camera2d>>,
    mut area: ResMut<PlayArea>,
) {
    let (transform, projection) = *camera;
    let Projection::Orthographic(ortho) = projection else {
        return;
    };
    let offset = transform.translation().truncate();
    area.set_if_neq(PlayArea(Rect::from_corners(
        ortho.area.min + offset,
        ortho.area.max + offset,
    )));
}

/// Triggers `ExitViewport` on the frame a tracked entity stops overlapping the play area.
fn detect_viewport_exits(
    area: Res<PlayArea>,
    mut tracked: Query<(Entity, &Transform, &BoundingBox, &mut ViewportTracked)>,
    mut commands: Commands,
) {
    for (entity, transform, bounds, mut tracked) in &mut tracked {
        let visible = !bounds
            .rect_at(transform.translation.truncate())
            .intersect(area.0)
            .is_empty();
        if visible == tracked.on_screen {
            continue;
        }
        tracked.on_screen = visible;
        if !visible {
            commands.trigger(ExitViewport { entity });
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<BoundingBox>()
        .register_type::<ViewportTracked>()
        .init_resource::<PlayArea>();

    app.add_systems(
        Update,
        (sync_play_area, detect_viewport_exits)
            .chain()
            .in_set(GameSet::Viewport)
            .run_if(gameplay_running),
    );
}
