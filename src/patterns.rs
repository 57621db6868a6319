//! Built-in seed patterns.
//!
//! Cells are `(row, col)` offsets from the pattern's origin. Each pattern
//! carries the origin it is placed at by default on the standard board.

pub struct Pattern {
    pub name: &'static str,
    pub origin: (usize, usize),
    pub cells: &'static [(usize, usize)],
}

/// The startup seed: an R-pentomino whose cells land on
/// (9,25) (10,24) (10,25) (11,25) (11,26).
pub const DEFAULT_PATTERN: Pattern = Pattern {
    name: "r-pentomino",
    origin: (9, 24),
    cells: &[(0, 1), (1, 0), (1, 1), (2, 1), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[
    DEFAULT_PATTERN,
    Pattern {
        name: "glider",
        origin: (1, 1),
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        origin: (19, 39),
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        origin: (19, 38),
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        origin: (18, 38),
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
];

/// Name accepted by `--pattern` for a random soup instead of a fixed shape.
pub const RANDOM: &str = "random";

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name).chain(std::iter::once(RANDOM))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_cells() {
        let (r0, c0) = DEFAULT_PATTERN.origin;
        let mut placed: Vec<_> = DEFAULT_PATTERN
            .cells
            .iter()
            .map(|&(r, c)| (r0 + r, c0 + c))
            .collect();
        placed.sort();
        assert_eq!(placed, vec![(9, 25), (10, 24), (10, 25), (11, 25), (11, 26)]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("Glider").map(|p| p.name), Some("glider"));
        assert!(find("gosper").is_none());
    }

    #[test]
    fn test_names_include_random() {
        let all: Vec<_> = names().collect();
        assert_eq!(all.first(), Some(&"r-pentomino"));
        assert_eq!(all.last(), Some(&RANDOM));
    }
}
