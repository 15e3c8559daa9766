//! Discrete compass actions and path-to-action translation.

use std::fmt;

use delve_core::Point;

/// A single-step compass action.
///
/// The discriminants are the discrete action IDs consumed by the agent
/// environment; their values and order are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Action {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    NorthEast = 4,
    SouthEast = 5,
    SouthWest = 6,
    NorthWest = 7,
}

impl Action {
    /// All actions in discriminant order.
    pub const ALL: [Action; 8] = [
        Action::North,
        Action::East,
        Action::South,
        Action::West,
        Action::NorthEast,
        Action::SouthEast,
        Action::SouthWest,
        Action::NorthWest,
    ];

    /// The action's numeric ID.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Unit displacement of the action. North decreases `y`.
    pub const fn delta(self) -> Point {
        match self {
            Action::North => Point::new(0, -1),
            Action::East => Point::new(1, 0),
            Action::South => Point::new(0, 1),
            Action::West => Point::new(-1, 0),
            Action::NorthEast => Point::new(1, -1),
            Action::SouthEast => Point::new(1, 1),
            Action::SouthWest => Point::new(-1, 1),
            Action::NorthWest => Point::new(-1, -1),
        }
    }

    /// The action matching a unit displacement, if there is one.
    pub fn from_delta(d: Point) -> Option<Action> {
        let action = match (d.x, d.y) {
            (0, -1) => Action::North,
            (1, 0) => Action::East,
            (0, 1) => Action::South,
            (-1, 0) => Action::West,
            (1, -1) => Action::NorthEast,
            (1, 1) => Action::SouthEast,
            (-1, 1) => Action::SouthWest,
            (-1, -1) => Action::NorthWest,
            _ => return None,
        };
        Some(action)
    }

    /// Position reached by taking the action from `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::North => "N",
            Action::East => "E",
            Action::South => "S",
            Action::West => "W",
            Action::NorthEast => "NE",
            Action::SouthEast => "SE",
            Action::SouthWest => "SW",
            Action::NorthWest => "NW",
        };
        f.write_str(s)
    }
}

/// A path segment that is not one of the eight unit moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepError {
    pub from: Point,
    pub to: Point,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path step from {} to {} is not a unit move",
            self.from, self.to
        )
    }
}

impl std::error::Error for StepError {}

/// Translate a path into the action taken between each consecutive pair.
///
/// `path` holds the positions after `start`; the result has exactly one
/// action per element. A displacement that is not one of the eight unit
/// steps (a repeated position included) is a [`StepError`].
pub fn actions_from_path(start: Point, path: &[Point]) -> Result<Vec<Action>, StepError> {
    let mut actions = Vec::with_capacity(path.len());
    let mut prev = start;
    for &p in path {
        let action = Action::from_delta(p - prev).ok_or(StepError { from: prev, to: p })?;
        actions.push(action);
        prev = p;
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn discriminants_match_the_contract() {
        let ids: Vec<u8> = Action::ALL.iter().map(|a| a.index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(Action::North.index(), 0);
        assert_eq!(Action::NorthEast.index(), 4);
        assert_eq!(Action::NorthWest.index(), 7);
    }

    #[test]
    fn every_unit_delta_maps_to_its_action() {
        let cases = [
            (p(0, -1), Action::North),
            (p(1, 0), Action::East),
            (p(0, 1), Action::South),
            (p(-1, 0), Action::West),
            (p(1, -1), Action::NorthEast),
            (p(1, 1), Action::SouthEast),
            (p(-1, 1), Action::SouthWest),
            (p(-1, -1), Action::NorthWest),
        ];
        for (delta, action) in cases {
            assert_eq!(Action::from_delta(delta), Some(action), "{delta}");
            assert_eq!(action.delta(), delta);
        }
    }

    #[test]
    fn non_unit_deltas_have_no_action() {
        for delta in [p(0, 0), p(2, 0), p(0, -2), p(1, -2), p(-3, 3)] {
            assert_eq!(Action::from_delta(delta), None, "{delta}");
        }
    }

    #[test]
    fn display_abbreviations() {
        let names: Vec<String> = Action::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["N", "E", "S", "W", "NE", "SE", "SW", "NW"]);
    }

    #[test]
    fn single_step_translations() {
        assert_eq!(
            actions_from_path(p(0, 0), &[p(0, -1)]),
            Ok(vec![Action::North])
        );
        assert_eq!(
            actions_from_path(p(0, 0), &[p(1, 1)]),
            Ok(vec![Action::SouthEast])
        );
    }

    #[test]
    fn one_action_per_segment() {
        let path = [p(1, 0), p(2, 0), p(2, 1), p(1, 2)];
        let actions = actions_from_path(p(0, 0), &path).unwrap();
        assert_eq!(actions.len(), path.len());
        assert_eq!(
            actions,
            vec![Action::East, Action::East, Action::South, Action::SouthWest]
        );
    }

    #[test]
    fn empty_path_yields_no_actions() {
        assert_eq!(actions_from_path(p(3, 3), &[]), Ok(vec![]));
    }

    #[test]
    fn non_unit_step_is_an_error() {
        let err = actions_from_path(p(0, 0), &[p(1, 0), p(3, 0)]).unwrap_err();
        assert_eq!(
            err,
            StepError {
                from: p(1, 0),
                to: p(3, 0)
            }
        );
        assert!(err.to_string().contains("not a unit move"));
    }

    #[test]
    fn repeated_position_is_an_error() {
        assert!(actions_from_path(p(2, 2), &[p(2, 2)]).is_err());
    }

    #[test]
    fn replaying_actions_reproduces_the_path() {
        let start = p(1, 1);
        let path = [p(2, 2), p(3, 2), p(3, 1), p(2, 0), p(1, 0)];
        let actions = actions_from_path(start, &path).unwrap();

        let mut pos = start;
        let replayed: Vec<Point> = actions
            .iter()
            .map(|a| {
                pos = a.apply(pos);
                pos
            })
            .collect();
        assert_eq!(replayed, path);
    }
}
