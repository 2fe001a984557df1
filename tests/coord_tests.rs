use broadside::{Coord, CoordError, BOARD_SIZE};

#[test]
fn test_roundtrip_all_cells() {
    for x in 0..BOARD_SIZE as u8 {
        for y in 0..BOARD_SIZE as u8 {
            let coord = Coord::new(x, y).unwrap();
            let encoded = coord.to_string();
            let decoded: Coord = encoded.parse().unwrap();
            assert_eq!(decoded, coord, "roundtrip failed for {}", encoded);
        }
    }
}

#[test]
fn test_notation_corners() {
    assert_eq!("A1".parse::<Coord>().unwrap(), Coord::new(0, 0).unwrap());
    assert_eq!("J10".parse::<Coord>().unwrap(), Coord::new(9, 9).unwrap());
    assert_eq!(Coord::new(4, 4).unwrap().to_string(), "E5");
    assert_eq!(Coord::new(9, 9).unwrap().to_string(), "J10");
}

#[test]
fn test_rejects_bad_length() {
    assert_eq!("".parse::<Coord>().unwrap_err(), CoordError::BadLength(0));
    assert_eq!("A".parse::<Coord>().unwrap_err(), CoordError::BadLength(1));
    assert_eq!(
        "A100".parse::<Coord>().unwrap_err(),
        CoordError::BadLength(4)
    );
}

#[test]
fn test_rejects_bad_column() {
    assert_eq!("K5".parse::<Coord>().unwrap_err(), CoordError::BadColumn('K'));
    assert_eq!("a5".parse::<Coord>().unwrap_err(), CoordError::BadColumn('a'));
    assert_eq!("15".parse::<Coord>().unwrap_err(), CoordError::BadColumn('1'));
}

#[test]
fn test_rejects_bad_row() {
    assert_eq!("A0".parse::<Coord>().unwrap_err(), CoordError::BadRow);
    assert_eq!("A11".parse::<Coord>().unwrap_err(), CoordError::BadRow);
    assert_eq!("AB".parse::<Coord>().unwrap_err(), CoordError::BadRow);
}

#[test]
fn test_new_rejects_out_of_bounds() {
    assert_eq!(
        Coord::new(10, 0).unwrap_err(),
        CoordError::OutOfBounds { x: 10, y: 0 }
    );
    assert_eq!(
        Coord::new(0, 10).unwrap_err(),
        CoordError::OutOfBounds { x: 0, y: 10 }
    );
}
