//! Eight-way compass on the rotated grid, and the wire/config forms of a direction.

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Ordinals are significant: they give the wire char (`'a' + ordinal`) and
/// the odd ones form the restricted (diagonal) subset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

use Direction::*;

impl Direction {
    pub const ALL: [Direction; 8] = [East, SouthEast, South, SouthWest, West, NorthWest, North, NorthEast];
    pub const RESTRICTED: [Direction; 4] = [SouthEast, SouthWest, NorthWest, NorthEast];

    #[inline]
    pub fn ordinal(self) -> usize { self as usize }

    #[inline]
    pub fn from_ordinal(ordinal: usize) -> Direction { Self::ALL[ordinal % 8] }

    #[inline]
    pub fn to_char(self) -> char { (b'a' + self as u8) as char }

    pub fn from_char(c: char) -> Result<Direction, PathError> {
        match c {
            'a'..='h' => Ok(Self::ALL[(c as u8 - b'a') as usize]),
            _ => Err(PathError::InvalidDirection(c)),
        }
    }

    pub fn opposite(self) -> Direction { Self::from_ordinal(self.ordinal() + 4) }

    /// Quarter turn clockwise.
    pub fn orthogonal(self) -> Direction { Self::from_ordinal(self.ordinal() + 2) }

    /// Diagonal directions, the only ones allowed on fight grids.
    pub fn restricted(self) -> bool { self.ordinal() % 2 == 1 }

    pub fn restricted_directions() -> Vec<Direction> { Self::RESTRICTED.to_vec() }

    /// Cell id delta of one step on a map `width` cells wide.
    pub fn next_cell_increment(self, width: usize) -> i64 {
        let w = width as i64;
        match self {
            East => 1,
            SouthEast => w,
            South => 2 * w - 1,
            SouthWest => w - 1,
            West => -1,
            NorthWest => -w,
            North => -(2 * w - 1),
            NorthEast => -(w - 1),
        }
    }

    fn from_token(token: &str) -> Option<Direction> {
        match token.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "east" => Some(East),
            "south_east" | "southeast" => Some(SouthEast),
            "south" => Some(South),
            "south_west" | "southwest" => Some(SouthWest),
            "west" => Some(West),
            "north_west" | "northwest" => Some(NorthWest),
            "north" => Some(North),
            "north_east" | "northeast" => Some(NorthEast),
            _ => None,
        }
    }
}

/// Parse a direction set from configuration text.
/// Accepts `restricted`, `all`, or a comma-separated list of names (case-insensitive).
/// Unknown tokens are ignored; duplicates keep their first position.
pub fn decode_directions_str(s: Option<&str>) -> Vec<Direction> {
    let Some(raw) = s else { return Vec::new(); };
    let stripped = raw.trim();
    match stripped.to_ascii_lowercase().as_str() {
        "" => return Vec::new(),
        "restricted" | "diagonals" => return Direction::restricted_directions(),
        "all" => return Direction::ALL.to_vec(),
        _ => {}
    }
    let mut directions = Vec::new();
    for direction in stripped.split(',').filter_map(Direction::from_token) {
        if !directions.contains(&direction) {
            directions.push(direction);
        }
    }
    directions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_follow_ordinals() {
        let chars: String = Direction::ALL.iter().map(|d| d.to_char()).collect();
        assert_eq!(chars, "abcdefgh");
        for d in Direction::ALL {
            assert_eq!(Direction::from_char(d.to_char()).unwrap(), d);
        }
        assert_eq!(Direction::from_char('i'), Err(PathError::InvalidDirection('i')));
        assert_eq!(Direction::from_char('A'), Err(PathError::InvalidDirection('A')));
    }

    #[test]
    fn opposite_and_orthogonal() {
        assert_eq!(East.opposite(), West);
        assert_eq!(NorthEast.opposite(), SouthWest);
        assert_eq!(East.orthogonal(), South);
        assert_eq!(NorthWest.orthogonal(), NorthEast);
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn restricted_are_diagonals() {
        assert_eq!(Direction::restricted_directions(), vec![SouthEast, SouthWest, NorthWest, NorthEast]);
        assert!(!East.restricted());
        assert!(SouthEast.restricted());
    }

    #[test]
    fn increments_for_width_15() {
        let incs: Vec<i64> = Direction::ALL.iter().map(|d| d.next_cell_increment(15)).collect();
        assert_eq!(incs, vec![1, 15, 29, 14, -1, -15, -29, -14]);
        for d in Direction::ALL {
            assert_eq!(d.next_cell_increment(15), -d.opposite().next_cell_increment(15));
        }
    }

    #[test]
    fn decode_directions_from_tokens() {
        assert_eq!(decode_directions_str(Some("restricted")), Direction::restricted_directions());
        assert_eq!(decode_directions_str(Some(" ALL ")), Direction::ALL.to_vec());
        assert_eq!(decode_directions_str(Some("east, north_west,NorthEast, east")), vec![East, NorthWest, NorthEast]);
        assert_eq!(decode_directions_str(Some("south-west,unknown")), vec![SouthWest]);
        assert!(decode_directions_str(Some("   ")).is_empty());
        assert!(decode_directions_str(None).is_empty());
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&SouthWest).unwrap(), "\"south_west\"");
        assert_eq!(serde_json::from_str::<Direction>("\"north_east\"").unwrap(), NorthEast);
    }
}
