/// Whether a run minimizes or maximizes the objective.
///
/// The solver always minimizes internally. Each objective is multiplied by
/// [`Direction::coefficient`] on the way in, and the same multiplication
/// undoes it for anything reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Returns `+1` for minimization and `-1` for maximization.
    #[must_use]
    pub fn coefficient(self) -> f64 {
        match self {
            Self::Minimize => 1.0,
            Self::Maximize => -1.0,
        }
    }

    /// Maps a value between the caller's scale and the internal
    /// "lower is better" scale. The mapping is its own inverse.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        self.coefficient() * value
    }
}
