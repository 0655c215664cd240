//! Shared sprite sheet and sound handles, requested once while loading.

use bevy::prelude::*;

use crate::screens::GameState;

/// Sprite sheet image path.
const SHEET_PATH: &str = "images/spritesheet.png";

/// Sprite sheet cell size (pixels).
pub const SHEET_TILE_SIZE: u32 = 32;

/// Sprite sheet grid columns.
pub const SHEET_COLUMNS: u32 = 10;

/// Sprite sheet grid rows.
pub const SHEET_ROWS: u32 = 10;

const ROCKET_SOUND_PATH: &str = "sounds/rocket.ogg";
const EXPLODE_SOUND_PATH: &str = "sounds/explode.ogg";

/// The game's single sprite sheet, laid out as a uniform grid.
#[derive(Resource, Debug, Clone)]
pub struct GameSheet {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
    pub tile_size: UVec2,
}

impl GameSheet {
    /// Sprite showing `index` of the sheet, drawn at `scale` times the cell size.
    #[must_use]
    pub fn sprite(&self, index: usize, scale: f32) -> Sprite {
        let mut sprite = Sprite::from_atlas_image(
            self.image.clone(),
            TextureAtlas {
                layout: self.layout.clone(),
                index,
            },
        );
        sprite.custom_size = Some(self.tile_size.as_vec2() * scale);
        sprite
    }
}

/// Decoded-on-demand sound sources, looked up by cue.
#[derive(Resource, Debug, Clone)]
pub struct SoundLibrary {
    pub rocket: Handle<AudioSource>,
    pub explode: Handle<AudioSource>,
}

fn load_assets(
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut commands: Commands,
) {
    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(SHEET_TILE_SIZE),
        SHEET_COLUMNS,
        SHEET_ROWS,
        None,
        None,
    ));
    commands.insert_resource(GameSheet {
        image: asset_server.load(SHEET_PATH),
        layout,
        tile_size: UVec2::splat(SHEET_TILE_SIZE),
    });
    commands.insert_resource(SoundLibrary {
        rocket: asset_server.load(ROCKET_SOUND_PATH),
        explode: asset_server.load(EXPLODE_SOUND_PATH),
    });
    info!("requested sprite sheet and sounds");
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Loading), load_assets);
}
