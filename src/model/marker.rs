use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoloonColor {
    Blue,
    Red,
    Purple,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComethDirection {
    Up,
    Down,
    Right,
    Left,
}

impl SoloonColor {
    pub const ALL: [SoloonColor; 4] = [Self::Blue, Self::Red, Self::Purple, Self::White];

    /// Wire form sent in the `color` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoloonColor::Blue => "blue",
            SoloonColor::Red => "red",
            SoloonColor::Purple => "purple",
            SoloonColor::White => "white",
        }
    }
}

impl ComethDirection {
    pub const ALL: [ComethDirection; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Wire form sent in the `direction` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComethDirection::Up => "up",
            ComethDirection::Down => "down",
            ComethDirection::Right => "right",
            ComethDirection::Left => "left",
        }
    }
}

// Goal maps spell these in uppercase, the API wants lowercase; accept both.
impl FromStr for SoloonColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown soloon color '{}'", s))
    }
}

impl FromStr for ComethDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown cometh direction '{}'", s))
    }
}
