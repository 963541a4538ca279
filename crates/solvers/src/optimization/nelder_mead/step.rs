use std::fmt;

/// The simplex move that produced an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Evaluation of a starting vertex.
    Init,

    /// Reflection of the worst vertex through the centroid.
    Reflect,

    /// Expansion past the reflected point.
    Expand,

    /// Contraction between the centroid and the reflected point.
    OutsideContraction,

    /// Contraction between the centroid and the worst vertex.
    InsideContraction,

    /// A vertex pulled halfway (by default) toward the best vertex.
    Shrink,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Reflect => "reflect",
            Self::Expand => "expand",
            Self::OutsideContraction => "outside contraction",
            Self::InsideContraction => "inside contraction",
            Self::Shrink => "shrink",
        };
        f.write_str(name)
    }
}
