//! The standard card set: 90 development cards and 10 patrons.
//!
//! Rows use the printed card layout: tier, produced color, points, then
//! cost per color in the order black, blue, white, green, red.

/// `(tier, color, points, black, blue, white, green, red)`
pub(crate) type CardRow = (u8, &'static str, u8, u8, u8, u8, u8, u8);

/// `(black, blue, white, green, red)` discount requirements.
pub(crate) type PatronRow = (u8, u8, u8, u8, u8);

#[rustfmt::skip]
pub(crate) const STANDARD_CARDS: [CardRow; 90] = [
    // Tier 1
    (1, "Black", 0, 0, 1, 1, 1, 1),
    (1, "Black", 0, 0, 2, 1, 1, 1),
    (1, "Black", 0, 0, 2, 2, 0, 1),
    (1, "Black", 0, 1, 0, 0, 1, 3),
    (1, "Black", 0, 0, 0, 0, 2, 1),
    (1, "Black", 0, 0, 0, 2, 2, 0),
    (1, "Black", 0, 0, 0, 0, 3, 0),
    (1, "Black", 1, 0, 4, 0, 0, 0),
    (1, "Blue",  0, 1, 0, 1, 1, 1),
    (1, "Blue",  0, 1, 0, 1, 1, 2),
    (1, "Blue",  0, 0, 0, 1, 2, 2),
    (1, "Blue",  0, 0, 1, 0, 3, 1),
    (1, "Blue",  0, 2, 0, 1, 0, 0),
    (1, "Blue",  0, 2, 0, 0, 2, 0),
    (1, "Blue",  0, 3, 0, 0, 0, 0),
    (1, "Blue",  1, 0, 0, 0, 0, 4),
    (1, "White", 0, 1, 1, 0, 1, 1),
    (1, "White", 0, 1, 1, 0, 2, 1),
    (1, "White", 0, 1, 2, 0, 2, 0),
    (1, "White", 0, 1, 1, 3, 0, 0),
    (1, "White", 0, 1, 0, 0, 0, 2),
    (1, "White", 0, 2, 2, 0, 0, 0),
    (1, "White", 0, 0, 3, 0, 0, 0),
    (1, "White", 1, 0, 0, 0, 4, 0),
    (1, "Green", 0, 1, 1, 1, 0, 1),
    (1, "Green", 0, 2, 1, 1, 0, 1),
    (1, "Green", 0, 2, 1, 0, 0, 2),
    (1, "Green", 0, 0, 3, 1, 1, 0),
    (1, "Green", 0, 0, 1, 2, 0, 0),
    (1, "Green", 0, 0, 2, 0, 0, 2),
    (1, "Green", 0, 0, 0, 0, 0, 3),
    (1, "Green", 1, 4, 0, 0, 0, 0),
    (1, "Red",   0, 1, 1, 1, 1, 0),
    (1, "Red",   0, 1, 1, 2, 1, 0),
    (1, "Red",   0, 2, 0, 2, 1, 0),
    (1, "Red",   0, 3, 0, 1, 0, 1),
    (1, "Red",   0, 0, 2, 0, 1, 0),
    (1, "Red",   0, 0, 0, 2, 0, 2),
    (1, "Red",   0, 0, 0, 3, 0, 0),
    (1, "Red",   1, 0, 0, 4, 0, 0),
    // Tier 2
    (2, "Black", 1, 0, 2, 3, 2, 0),
    (2, "Black", 1, 2, 0, 3, 3, 0),
    (2, "Black", 2, 0, 1, 0, 4, 2),
    (2, "Black", 2, 0, 0, 0, 5, 3),
    (2, "Black", 2, 0, 0, 5, 0, 0),
    (2, "Black", 3, 6, 0, 0, 0, 0),
    (2, "Blue",  1, 0, 2, 0, 2, 3),
    (2, "Blue",  1, 3, 2, 0, 3, 0),
    (2, "Blue",  2, 0, 3, 5, 0, 0),
    (2, "Blue",  2, 4, 0, 2, 0, 1),
    (2, "Blue",  2, 0, 5, 0, 0, 0),
    (2, "Blue",  3, 0, 6, 0, 0, 0),
    (2, "White", 1, 2, 0, 0, 3, 2),
    (2, "White", 1, 0, 3, 2, 0, 3),
    (2, "White", 2, 2, 0, 0, 1, 4),
    (2, "White", 2, 3, 0, 0, 0, 5),
    (2, "White", 2, 0, 0, 0, 0, 5),
    (2, "White", 3, 0, 0, 6, 0, 0),
    (2, "Green", 1, 0, 0, 3, 2, 3),
    (2, "Green", 1, 2, 3, 2, 0, 0),
    (2, "Green", 2, 1, 2, 4, 0, 0),
    (2, "Green", 2, 0, 5, 0, 3, 0),
    (2, "Green", 2, 0, 0, 0, 5, 0),
    (2, "Green", 3, 0, 0, 0, 6, 0),
    (2, "Red",   1, 3, 0, 2, 0, 2),
    (2, "Red",   1, 3, 3, 0, 0, 2),
    (2, "Red",   2, 0, 4, 1, 2, 0),
    (2, "Red",   2, 5, 0, 3, 0, 0),
    (2, "Red",   2, 5, 0, 0, 0, 0),
    (2, "Red",   3, 0, 0, 0, 0, 6),
    // Tier 3
    (3, "Black", 3, 0, 3, 3, 5, 3),
    (3, "Black", 4, 0, 0, 0, 0, 7),
    (3, "Black", 4, 3, 0, 0, 3, 6),
    (3, "Black", 5, 3, 0, 0, 0, 7),
    (3, "Blue",  3, 5, 0, 3, 3, 3),
    (3, "Blue",  4, 0, 0, 7, 0, 0),
    (3, "Blue",  4, 3, 3, 6, 0, 0),
    (3, "Blue",  5, 0, 3, 7, 0, 0),
    (3, "White", 3, 3, 3, 0, 3, 5),
    (3, "White", 4, 7, 0, 0, 0, 0),
    (3, "White", 4, 6, 0, 3, 0, 3),
    (3, "White", 5, 7, 0, 3, 0, 0),
    (3, "Green", 3, 3, 3, 5, 0, 3),
    (3, "Green", 4, 0, 7, 0, 0, 0),
    (3, "Green", 4, 0, 6, 3, 3, 0),
    (3, "Green", 5, 0, 7, 0, 3, 0),
    (3, "Red",   3, 3, 5, 3, 3, 0),
    (3, "Red",   4, 0, 0, 0, 7, 0),
    (3, "Red",   4, 0, 3, 0, 6, 3),
    (3, "Red",   5, 0, 0, 0, 7, 3),
];

#[rustfmt::skip]
pub(crate) const STANDARD_PATRONS: [PatronRow; 10] = [
    (0, 0, 0, 4, 4),
    (4, 0, 0, 0, 4),
    (0, 4, 0, 4, 0),
    (0, 4, 4, 0, 0),
    (4, 0, 4, 0, 0),
    (3, 3, 3, 0, 0),
    (3, 0, 3, 0, 3),
    (0, 3, 0, 3, 3),
    (3, 0, 0, 3, 3),
    (0, 3, 3, 3, 0),
];

/// Artwork pool per produced color, as `(color, image ids)`.
pub(crate) const IMAGE_POOLS: [(&str, &[u32]); 5] = [
    ("Black", &[1019, 1033, 1075, 1078]),
    ("Blue", &[1015, 1031, 1036, 1038, 1041]),
    ("White", &[1000, 1021, 1035, 1052]),
    ("Green", &[1003, 101, 1012, 1039, 1053]),
    ("Red", &[1028, 1032, 1047, 1055, 1073]),
];
