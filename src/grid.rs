//! Fixed-size byte rasters backing every map overlay.
//!
//! Tiles are stored row-major (`index = y * width + x`). Reads outside the
//! raster return 0 and writes outside it are dropped, so a footprint that
//! hangs off the map edge simply never validates and a stamp near the edge
//! only touches the tiles that exist.

use crate::error::MapError;
use crate::layer::Layer;
use serde::{Deserialize, Serialize};

/// Raw raster as shipped by the game engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub data: Vec<u8>,
}

impl ImageData {
    /// One byte per tile.
    pub fn from_bytes(width: u32, height: u32, data: Vec<u8>) -> Self {
        ImageData {
            width,
            height,
            bits_per_pixel: 8,
            data,
        }
    }

    /// Bit-packed, most significant bit first.
    pub fn from_bits(width: u32, height: u32, data: Vec<u8>) -> Self {
        ImageData {
            width,
            height,
            bits_per_pixel: 1,
            data,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Expand to one byte per tile. Bit-packed images decode to 0/1.
    pub fn decode(&self, layer: Layer) -> Result<Vec<u8>, MapError> {
        let tiles = self.tile_count();
        match self.bits_per_pixel {
            8 => {
                if self.data.len() != tiles {
                    return Err(MapError::DimensionMismatch {
                        layer,
                        expected: tiles,
                        actual: self.data.len(),
                    });
                }
                Ok(self.data.clone())
            }
            1 => {
                let expected = tiles.div_ceil(8);
                if self.data.len() != expected {
                    return Err(MapError::DimensionMismatch {
                        layer,
                        expected,
                        actual: self.data.len(),
                    });
                }
                Ok((0..tiles)
                    .map(|i| (self.data[i / 8] >> (7 - (i % 8))) & 1)
                    .collect())
            }
            other => Err(MapError::UnsupportedBitDepth(other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GridLayer {
    layer: Layer,
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl GridLayer {
    /// A zeroed raster.
    pub fn new(layer: Layer, width: u32, height: u32) -> GridLayer {
        GridLayer {
            layer,
            width,
            height,
            buffer: vec![0; width as usize * height as usize],
        }
    }

    pub fn from_image(layer: Layer, image: &ImageData) -> Result<GridLayer, MapError> {
        let buffer = image.decode(layer)?;
        Ok(GridLayer {
            layer,
            width: image.width,
            height: image.height,
            buffer,
        })
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.index(x, y).map_or(0, |i| self.buffer[i])
    }

    #[inline]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.get(x, y) != 0
    }

    /// Returns false when the tile lies outside the raster and nothing was written.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.buffer[i] = value;
                true
            }
            None => false,
        }
    }

    /// Overwrite the whole raster from a same-sized row-major bitmap.
    pub fn load(&mut self, bitmap: &[u8]) -> Result<(), MapError> {
        if bitmap.len() != self.buffer.len() {
            return Err(MapError::DimensionMismatch {
                layer: self.layer,
                expected: self.buffer.len(),
                actual: bitmap.len(),
            });
        }
        self.buffer.copy_from_slice(bitmap);
        Ok(())
    }

    /// Decode `image` into a bitmap this raster can `load`, without touching
    /// the raster itself.
    pub fn decode_compatible(&self, image: &ImageData) -> Result<Vec<u8>, MapError> {
        if image.width != self.width || image.height != self.height {
            return Err(MapError::DimensionMismatch {
                layer: self.layer,
                expected: self.buffer.len(),
                actual: image.tile_count(),
            });
        }
        image.decode(self.layer)
    }

    pub fn load_image(&mut self, image: &ImageData) -> Result<(), MapError> {
        let decoded = self.decode_compatible(image)?;
        self.load(&decoded)
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn fill(&mut self, value: u8) {
        self.buffer.fill(value);
    }

    pub fn count_set(&self) -> usize {
        self.buffer.iter().filter(|v| **v != 0).count()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), u8)> + '_ {
        let width = self.width as usize;
        self.buffer
            .iter()
            .enumerate()
            .map(move |(i, v)| (((i % width) as i32, (i / width) as i32), *v))
    }
}
