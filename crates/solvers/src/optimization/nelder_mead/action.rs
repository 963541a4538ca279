/// Actions an observer can take during a Nelder-Mead run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Score this point as infeasible.
    ///
    /// The point gets the worst possible value, so the simplex logic rejects
    /// it wherever an alternative exists. Its evaluation never becomes the
    /// reported best.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors when the failed region can
    ///   safely be treated as out of bounds.
    /// - Carving regions out of the search even when evaluation succeeded.
    AssumeWorse,
}
