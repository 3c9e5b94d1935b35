//! Tests for the JSON maze record

#[cfg(test)]
mod tests {
    use mazetile::MazeError;
    use mazetile::algorithm::generation::RecursiveBacktracker;
    use mazetile::io::serialization::{
        MazeRecord, WallsRecord, from_json, load_json, save_json, to_json,
    };
    use mazetile::spatial::{Direction, Maze, Walls};
    use tempfile::TempDir;

    fn generated(width: usize, height: usize, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height, 10).unwrap();
        RecursiveBacktracker::new(seed).generate(&mut maze).unwrap();
        maze
    }

    fn same_walls(left: &Maze, right: &Maze) -> bool {
        left.dimensions() == right.dimensions()
            && left.cell_size() == right.cell_size()
            && left
                .cells()
                .zip(right.cells())
                .all(|(a, b)| a.position() == b.position() && a.walls() == b.walls())
    }

    // Tests a generated maze survives a JSON round trip
    // Verified by dropping the east flag when encoding
    #[test]
    fn test_round_trip_preserves_walls() {
        let maze = generated(7, 4, 31);
        let decoded = from_json(&to_json(&maze).unwrap()).unwrap();
        assert!(same_walls(&maze, &decoded));
        assert!(decoded.path().is_empty());
    }

    // Tests wall flags are keyed by direction letter
    // Verified by serializing the field names
    #[test]
    fn test_wall_keys() {
        let mut maze = Maze::new(2, 1, 10).unwrap();
        maze.carve([0, 0], Direction::East).unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&maze).unwrap()).unwrap();

        let walls = &value["cells"][0][0]["walls"];
        assert_eq!(walls["N"], serde_json::Value::Bool(true));
        assert_eq!(walls["E"], serde_json::Value::Bool(false));
        assert_eq!(walls["S"], serde_json::Value::Bool(true));
        assert_eq!(walls["W"], serde_json::Value::Bool(true));
        assert_eq!(value["grid_width"], serde_json::json!(2));
        assert_eq!(value["grid_height"], serde_json::json!(1));
        assert_eq!(value["cell_size"], serde_json::json!(10));
    }

    // Tests conversion between wall flags and their record
    // Verified by swapping east and west in the conversion
    #[test]
    fn test_walls_record_conversion() {
        let walls = Walls::from_flags([true, false, true, false]);
        let record = WallsRecord::from(walls);
        assert!(record.north && !record.east && record.south && !record.west);
        assert_eq!(Walls::from(record), walls);
    }

    // Tests the record lists one row per grid row
    // Verified by flattening cells into a single list
    #[test]
    fn test_record_shape() {
        let record = MazeRecord::from_maze(&generated(3, 2, 5));
        assert_eq!(record.cells.len(), 2);
        assert!(record.cells.iter().all(|row| row.len() == 3));
        assert_eq!((record.cells[1][2].row, record.cells[1][2].col), (1, 2));
    }

    // Tests records whose neighbors disagree are rejected
    // Verified by skipping the symmetry check
    #[test]
    fn test_asymmetric_walls_rejected() {
        let mut record = MazeRecord::from_maze(&Maze::new(2, 2, 10).unwrap());
        record.cells[0][0].walls.east = false;

        let result = record.into_maze();
        assert!(matches!(result, Err(MazeError::InvalidRecord { .. })));
    }

    // Tests missing rows and short rows are rejected
    // Verified by padding missing cells with closed walls
    #[test]
    fn test_missized_records_rejected() {
        let mut missing_row = MazeRecord::from_maze(&Maze::new(3, 3, 10).unwrap());
        missing_row.cells.pop();
        assert!(matches!(
            missing_row.into_maze(),
            Err(MazeError::InvalidRecord { .. })
        ));

        let mut short_row = MazeRecord::from_maze(&Maze::new(3, 3, 10).unwrap());
        short_row.cells[1].pop();
        assert!(matches!(
            short_row.into_maze(),
            Err(MazeError::InvalidRecord { .. })
        ));
    }

    // Tests a cell stored at the wrong position is rejected
    // Verified by trusting list order over stored coordinates
    #[test]
    fn test_misplaced_cell_rejected() {
        let mut record = MazeRecord::from_maze(&Maze::new(2, 2, 10).unwrap());
        record.cells[0].swap(0, 1);
        assert!(matches!(
            record.into_maze(),
            Err(MazeError::InvalidRecord { .. })
        ));
    }

    // Tests invalid dimensions and malformed text fail to decode
    // Verified by accepting a zero-width record
    #[test]
    fn test_invalid_input_rejected() {
        let zero = r#"{"grid_width":0,"grid_height":1,"cell_size":10,"cells":[[]]}"#;
        assert!(matches!(
            from_json(zero),
            Err(MazeError::InvalidDimensions { .. })
        ));
        let huge = r#"{"grid_width":4294967295,"grid_height":4294967295,"cell_size":1,"cells":[]}"#;
        assert!(matches!(
            from_json(huge),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            from_json("{ not json"),
            Err(MazeError::Serialization { .. })
        ));
    }

    // Tests saving and loading through a file
    // Verified by writing compact JSON the loader cannot parse
    #[test]
    fn test_save_and_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("maze.json");
        let maze = generated(5, 6, 77);

        save_json(&maze, &path).unwrap();
        let loaded = load_json(&path).unwrap();
        assert!(same_walls(&maze, &loaded));
    }

    // Tests load errors name the offending file
    // Verified by reporting the in-memory placeholder path
    #[test]
    fn test_load_errors_carry_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            load_json(&missing),
            Err(MazeError::FileSystem { .. })
        ));

        let garbled = temp_dir.path().join("garbled.json");
        std::fs::write(&garbled, "[1, 2").unwrap();
        match load_json(&garbled) {
            Err(MazeError::Serialization { path, .. }) => assert_eq!(path, garbled),
            other => unreachable!("Expected Serialization error, got {other:?}"),
        }
    }
}
