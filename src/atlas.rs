use std::path::Path;

use image::{imageops, RgbaImage};

use crate::error::TextureError;

pub const TILE_SIZE: u32 = 16;
pub const TILE_COUNT: u32 = 3;

/// Loads the atlas at `path` and cuts it into tiles, or returns no tiles if it can't be read.
pub fn load_tiles_or_empty(path: &Path) -> Vec<RgbaImage> {
    match load_tiles(path) {
        Ok(tiles) => {
            log::info!("loaded {} texture tiles from {}", tiles.len(), path.display());
            tiles
        }
        Err(err) => {
            log::error!("{err}; rendering the cube untextured");
            Vec::new()
        }
    }
}

pub fn load_tiles(path: &Path) -> Result<Vec<RgbaImage>, TextureError> {
    let atlas = image::open(path)
        .map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    split_atlas(&atlas)
}

/// Cuts `TILE_COUNT` square tiles from the top of a vertically stacked atlas.
///
/// Each tile is flipped vertically so that face texture coordinates, which put
/// v = 0 on the bottom edge of a face, show it upright.
pub fn split_atlas(atlas: &RgbaImage) -> Result<Vec<RgbaImage>, TextureError> {
    let required_height = TILE_SIZE * TILE_COUNT;
    if atlas.width() < TILE_SIZE || atlas.height() < required_height {
        return Err(TextureError::AtlasTooSmall {
            width: atlas.width(),
            height: atlas.height(),
            required_width: TILE_SIZE,
            required_height,
        });
    }

    Ok((0..TILE_COUNT)
        .map(|i| {
            let tile = imageops::crop_imm(atlas, 0, i * TILE_SIZE, TILE_SIZE, TILE_SIZE).to_image();
            imageops::flip_vertical(&tile)
        })
        .collect())
}
