/// State of a single position in the grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// A wall. Never yielded as a neighbor.
    #[default]
    Blocked,
    /// A carved passage.
    Open,
    /// The cell every search starts from.
    Start,
    /// The cell every search is looking for.
    Goal,
    /// Start and goal on the same cell, which only happens in a 3x3 maze.
    StartGoal,
}

impl GridCell {
    pub fn is_blocked(self) -> bool {
        self == GridCell::Blocked
    }

    pub fn is_start(self) -> bool {
        matches!(self, GridCell::Start | GridCell::StartGoal)
    }

    pub fn is_goal(self) -> bool {
        matches!(self, GridCell::Goal | GridCell::StartGoal)
    }

    /// Whether a search may step onto this cell from a neighbor.
    /// The start is excluded since every search begins there.
    pub fn is_enterable(self) -> bool {
        matches!(self, GridCell::Open | GridCell::Goal)
    }

    /// Character used by the text layout format.
    pub fn to_char(self) -> char {
        match self {
            GridCell::Blocked => '#',
            GridCell::Open => '.',
            GridCell::Start => 'S',
            GridCell::Goal => 'G',
            GridCell::StartGoal => '@',
        }
    }

    pub fn from_char(c: char) -> Option<GridCell> {
        match c {
            '#' => Some(GridCell::Blocked),
            '.' | ' ' => Some(GridCell::Open),
            'S' => Some(GridCell::Start),
            'G' => Some(GridCell::Goal),
            '@' => Some(GridCell::StartGoal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_goal_counts_as_both() {
        assert!(GridCell::StartGoal.is_start());
        assert!(GridCell::StartGoal.is_goal());
        assert!(!GridCell::StartGoal.is_enterable());
    }

    #[test]
    fn test_only_open_and_goal_are_enterable() {
        assert!(GridCell::Open.is_enterable());
        assert!(GridCell::Goal.is_enterable());
        assert!(!GridCell::Start.is_enterable());
        assert!(!GridCell::Blocked.is_enterable());
    }

    #[test]
    fn test_char_mapping_is_consistent() {
        for cell in [
            GridCell::Blocked,
            GridCell::Open,
            GridCell::Start,
            GridCell::Goal,
            GridCell::StartGoal,
        ] {
            assert_eq!(GridCell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(GridCell::from_char(' '), Some(GridCell::Open));
        assert_eq!(GridCell::from_char('x'), None);
    }
}
