//! Tests for topology-aware neighbor lookup

#[cfg(test)]
mod tests {
    use gameboards::algorithm::adjacency::{neighbor_coordinates, neighbor_ids, neighbors_of};
    use gameboards::io::configuration::BoardConfig;
    use gameboards::spatial::coordinate::GridCoordinate;
    use gameboards::spatial::geometry::{HexOrientation, Topology};
    use gameboards::spatial::registry::{Board, TileId};

    fn board(topology: Topology, rows: usize, columns: usize) -> Board {
        let Ok(board) = Board::build(&BoardConfig::new(rows, columns, topology)) else {
            unreachable!("valid configuration")
        };
        board
    }

    fn coordinates(pairs: &[(i32, i32)]) -> Vec<GridCoordinate> {
        pairs.iter().copied().map(GridCoordinate::from).collect()
    }

    #[test]
    fn test_rectangle_neighbors() {
        let board = board(Topology::Rectangle, 5, 6);

        assert_eq!(
            neighbor_coordinates(&board, GridCoordinate::new(2, 3)),
            coordinates(&[(3, 3), (1, 3), (2, 4), (2, 2)])
        );
        assert_eq!(
            neighbor_coordinates(&board, GridCoordinate::new(0, 0)),
            coordinates(&[(1, 0), (0, 1)])
        );
    }

    // Tests flat-top neighbors follow row parity
    // Verified by swapping the even and odd row tables
    #[test]
    fn test_flat_top_neighbors() {
        let board = board(Topology::Hexagon(HexOrientation::FlatTop), 5, 6);

        assert_eq!(
            neighbor_coordinates(&board, GridCoordinate::new(2, 2)),
            coordinates(&[(0, 2), (1, 1), (3, 1), (4, 2), (3, 2), (1, 2)])
        );
        assert_eq!(
            neighbor_coordinates(&board, GridCoordinate::new(3, 2)),
            coordinates(&[(1, 2), (2, 2), (4, 2), (5, 2), (4, 3), (2, 3)])
                .into_iter()
                .filter(|coordinate| board.contains(*coordinate))
                .collect::<Vec<_>>()
        );
        assert_eq!(
            neighbor_coordinates(&board, GridCoordinate::new(0, 0)),
            coordinates(&[(2, 0), (1, 0)])
        );
    }

    #[test]
    fn test_pointy_top_neighbors() {
        let board = board(Topology::Hexagon(HexOrientation::PointyTop), 5, 6);

        assert_eq!(
            neighbor_coordinates(&board, GridCoordinate::new(2, 2)),
            coordinates(&[(2, 0), (1, 1), (1, 3), (2, 4), (2, 3), (2, 1)])
        );
        assert_eq!(
            neighbor_coordinates(&board, GridCoordinate::new(2, 3)),
            coordinates(&[(2, 1), (2, 2), (2, 4), (2, 5), (3, 4), (3, 2)])
        );
    }

    // Tests adjacency is symmetric and never reflexive on every topology
    #[test]
    fn test_adjacency_symmetric() {
        for topology in [
            Topology::Rectangle,
            Topology::Hexagon(HexOrientation::FlatTop),
            Topology::Hexagon(HexOrientation::PointyTop),
        ] {
            let board = board(topology, 7, 5);
            for tile in board.tiles() {
                let neighbors = neighbors_of(&board, tile.id());
                assert!(!neighbors.contains(tile.id()));
                for neighbor in neighbors.iter() {
                    assert!(
                        neighbors_of(&board, neighbor).contains(tile.id()),
                        "{topology}: {neighbor:?} does not list {:?}",
                        tile.id()
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_tiles_have_no_neighbors() {
        let board = board(Topology::Rectangle, 2, 2);

        assert!(neighbor_ids(&board, GridCoordinate::new(5, 5)).is_empty());
        assert!(neighbors_of(&board, TileId::new(99)).is_empty());
    }

    #[test]
    fn test_single_tile_board() {
        let board = board(Topology::Hexagon(HexOrientation::FlatTop), 1, 1);

        assert!(neighbors_of(&board, TileId::new(0)).is_empty());
    }
}
