//! Reachability gate between the two general tiles.

use crate::types::{InvalidMapError, Pos};

use super::grid::Grid;

/// Whether the two generals can reach each other through non-mountain
/// tiles, stepping in the four cardinal directions. Iterative flood
/// fill with an explicit frontier; the search can touch every cell of
/// the grid, so native recursion would not survive large maps.
pub fn generals_connected(grid: &Grid) -> Result<bool, InvalidMapError> {
    let [start, goal] = grid.general_positions()?;
    let size = grid.size();

    let mut visited = vec![false; size * size];
    visited[(start.y as usize) * size + (start.x as usize)] = true;
    let mut frontier = vec![start];

    while let Some(pos) = frontier.pop() {
        if pos == goal {
            return Ok(true);
        }
        for next in neighbors(pos) {
            if !grid.in_bounds(next) {
                continue;
            }
            let idx = (next.y as usize) * size + (next.x as usize);
            if visited[idx] || grid.tile_at(next).blocks_movement() {
                continue;
            }
            visited[idx] = true;
            frontier.push(next);
        }
    }

    Ok(false)
}

fn neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn grid_with_generals(size: usize, first: Pos, second: Pos) -> Grid {
        let mut grid = Grid::filled(size, Tile::Passable);
        grid.set_tile(first, Tile::General(0));
        grid.set_tile(second, Tile::General(1));
        grid
    }

    #[test]
    fn open_grid_is_connected() {
        let grid = grid_with_generals(5, Pos { y: 0, x: 0 }, Pos { y: 4, x: 4 });
        assert_eq!(generals_connected(&grid), Ok(true));
    }

    #[test]
    fn full_mountain_wall_disconnects() {
        let mut grid = grid_with_generals(5, Pos { y: 0, x: 0 }, Pos { y: 0, x: 4 });
        for y in 0..5 {
            grid.set_tile(Pos { y, x: 2 }, Tile::Mountain);
        }
        assert_eq!(generals_connected(&grid), Ok(false));
    }

    #[test]
    fn adjacent_generals_connect_even_when_everything_else_is_mountain() {
        let mut grid = Grid::filled(4, Tile::Mountain);
        grid.set_tile(Pos { y: 2, x: 1 }, Tile::General(0));
        grid.set_tile(Pos { y: 2, x: 2 }, Tile::General(1));
        assert_eq!(generals_connected(&grid), Ok(true));
    }

    #[test]
    fn cities_are_traversable() {
        let mut grid = Grid::filled(3, Tile::Mountain);
        grid.set_tile(Pos { y: 0, x: 0 }, Tile::General(0));
        grid.set_tile(Pos { y: 0, x: 1 }, Tile::City(9));
        grid.set_tile(Pos { y: 0, x: 2 }, Tile::General(1));
        assert_eq!(generals_connected(&grid), Ok(true));
    }

    #[test]
    fn wrong_general_count_is_rejected() {
        let grid = Grid::filled(3, Tile::Passable);
        assert_eq!(generals_connected(&grid), Err(InvalidMapError { found: 0 }));

        let mut crowded = grid_with_generals(3, Pos { y: 0, x: 0 }, Pos { y: 1, x: 1 });
        crowded.set_tile(Pos { y: 2, x: 2 }, Tile::General(0));
        assert_eq!(generals_connected(&crowded), Err(InvalidMapError { found: 3 }));
    }

    #[test]
    fn input_grid_is_not_mutated() {
        let grid = grid_with_generals(6, Pos { y: 0, x: 0 }, Pos { y: 5, x: 5 });
        let before = grid.canonical_bytes();
        generals_connected(&grid).expect("two generals");
        assert_eq!(before, grid.canonical_bytes());
    }

    #[test]
    fn large_open_grid_completes_without_deep_recursion() {
        let grid = grid_with_generals(200, Pos { y: 0, x: 0 }, Pos { y: 199, x: 199 });
        assert_eq!(generals_connected(&grid), Ok(true));
    }
}
