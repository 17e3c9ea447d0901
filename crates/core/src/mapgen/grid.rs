//! Square tile grid produced by generation and consumed by the game engine.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{InvalidMapError, Pos, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn filled(size: usize, tile: Tile) -> Self {
        Self { size, tiles: vec![tile; size * size] }
    }

    pub(crate) fn from_tiles(size: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), size * size);
        Self { size, tiles }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Out-of-bounds reads come back as mountains, so traversal code
    /// never needs a separate edge case for the map border.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        if !self.in_bounds(pos) {
            return Tile::Mountain;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// The two general coordinates in row-major order. Errors unless the
    /// grid holds exactly two general markers.
    pub fn general_positions(&self) -> Result<[Pos; 2], InvalidMapError> {
        let mut found = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                let pos = Pos { y: y as i32, x: x as i32 };
                if matches!(self.tile_at(pos), Tile::General(_)) {
                    found.push(pos);
                }
            }
        }
        match found.as_slice() {
            &[first, second] => Ok([first, second]),
            _ => Err(InvalidMapError { found: found.len() }),
        }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.tiles.len());
        bytes.extend((self.size as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                Tile::Passable => 0,
                Tile::Mountain => 1,
                Tile::City(level) => 2 + level,
                Tile::General(player) => 12 + player,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.size + (pos.x as usize)
    }
}
