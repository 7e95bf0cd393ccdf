/// The twelve sticker colors of the puzzle.
///
/// The geometry core stores these per face and never interprets them
/// numerically; the RGB triples are for rendering consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceColor {
    #[default]
    White,
    Yellow,
    DarkBlue,
    Red,
    DarkGreen,
    Purple,
    Gray,
    LightBlue,
    Orange,
    LightGreen,
    Pink,
    Beige,
}

impl FaceColor {
    /// Every palette entry, in solved-state order.
    pub const ALL: [FaceColor; 12] = [
        FaceColor::White,
        FaceColor::Yellow,
        FaceColor::DarkBlue,
        FaceColor::Red,
        FaceColor::DarkGreen,
        FaceColor::Purple,
        FaceColor::Gray,
        FaceColor::LightBlue,
        FaceColor::Orange,
        FaceColor::LightGreen,
        FaceColor::Pink,
        FaceColor::Beige,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FaceColor::White => "white",
            FaceColor::Yellow => "yellow",
            FaceColor::DarkBlue => "dark blue",
            FaceColor::Red => "red",
            FaceColor::DarkGreen => "dark green",
            FaceColor::Purple => "purple",
            FaceColor::Gray => "gray",
            FaceColor::LightBlue => "light blue",
            FaceColor::Orange => "orange",
            FaceColor::LightGreen => "light green",
            FaceColor::Pink => "pink",
            FaceColor::Beige => "beige",
        }
    }

    /// `[r, g, b]` components.
    #[must_use]
    pub fn rgb(self) -> [u8; 3] {
        match self {
            FaceColor::White => [0xff, 0xff, 0xff],
            FaceColor::Yellow => [0xff, 0xeb, 0x3b],
            FaceColor::DarkBlue => [0x1a, 0x23, 0x7e],
            FaceColor::Red => [0xd3, 0x2f, 0x2f],
            FaceColor::DarkGreen => [0x1b, 0x5e, 0x20],
            FaceColor::Purple => [0x7b, 0x1f, 0xa2],
            FaceColor::Gray => [0x9e, 0x9e, 0x9e],
            FaceColor::LightBlue => [0x4f, 0xc3, 0xf7],
            FaceColor::Orange => [0xff, 0x98, 0x00],
            FaceColor::LightGreen => [0x8b, 0xc3, 0x4a],
            FaceColor::Pink => [0xf0, 0x62, 0x92],
            FaceColor::Beige => [0xf5, 0xf5, 0xdc],
        }
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub fn hex(self) -> u32 {
        let [r, g, b] = self.rgb();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }
}

/// Solved-state palette: entry `m` colors every cell of major face `m`.
#[must_use]
pub fn solved_state_colors() -> [FaceColor; 12] {
    FaceColor::ALL
}
