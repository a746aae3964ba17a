#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

/// `X` always opens a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndType {
    Row,
    Column,
    MajorDiagonal,
    MinorDiagonal,
    Tie,
}

/// Identifies the line that ended a game.
///
/// `index` is the row for [`EndType::Row`] and the column for
/// [`EndType::Column`]. The diagonals and the tie carry fixed values
/// (`0`, `2` and `-1`) that renderers match on as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndInfo {
    pub end_type: EndType,
    pub index: i32,
}

impl EndInfo {
    pub const MAJOR_DIAGONAL_INDEX: i32 = 0;
    pub const MINOR_DIAGONAL_INDEX: i32 = 2;
    pub const TIE_INDEX: i32 = -1;

    pub fn row(row: usize) -> Self {
        Self { end_type: EndType::Row, index: row as i32 }
    }

    pub fn column(column: usize) -> Self {
        Self { end_type: EndType::Column, index: column as i32 }
    }

    pub fn major_diagonal() -> Self {
        Self { end_type: EndType::MajorDiagonal, index: Self::MAJOR_DIAGONAL_INDEX }
    }

    pub fn minor_diagonal() -> Self {
        Self { end_type: EndType::MinorDiagonal, index: Self::MINOR_DIAGONAL_INDEX }
    }

    pub fn tie() -> Self {
        Self { end_type: EndType::Tie, index: Self::TIE_INDEX }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a tie.
    pub winner: Option<Player>,
    pub end_info: EndInfo,
}

impl GameResult {
    pub fn win(winner: Player, end_info: EndInfo) -> Self {
        Self { winner: Some(winner), end_info }
    }

    pub fn tie() -> Self {
        Self { winner: None, end_info: EndInfo::tie() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    MoveMade { row: usize, column: usize },
    GameFinished(GameResult),
    GameRestarted,
}
