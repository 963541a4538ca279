use amoeba_core::Observer;
use amoeba_solvers::optimization::Params;
use log::{Level, log, log_enabled};

use crate::traits::{HasIndex, HasObjective, HasPosition};

/// An observer that forwards every evaluation to the `log` facade.
///
/// Records are emitted at [`Level::Info`] unless another level is chosen
/// with [`with_level`][LogObserver::with_level]. Each record names the
/// parameters:
///
/// ```text
/// eval 7: x = 2.98161, y = -1.87702 -> 0.01547
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver<const N: usize> {
    names: Vec<String>,
    level: Level,
}

impl<const N: usize> LogObserver<N> {
    /// Creates an observer that logs at info level.
    pub fn new(params: &Params<N>) -> Self {
        Self {
            names: params.names().to_vec(),
            level: Level::Info,
        }
    }

    /// Sets the level records are emitted at.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Formats one evaluation.
    #[must_use]
    pub fn describe(&self, index: usize, x: &[f64; N], objective: f64) -> String {
        let position = self
            .names
            .iter()
            .zip(x)
            .map(|(name, xi)| format!("{name} = {xi:.5}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("eval {index}: {position} -> {objective:.5}")
    }
}

impl<E, A, const N: usize> Observer<E, A> for LogObserver<N>
where
    E: HasIndex + HasPosition<N> + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if log_enabled!(self.level) {
            let record = self.describe(event.index(), event.position(), event.objective());
            log!(self.level, "{record}");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_named_positions() {
        let params = Params::new([("x", [-10.0, 10.0]), ("y", [-10.0, 10.0])]).unwrap();
        let observer = LogObserver::new(&params);

        assert_eq!(
            observer.describe(7, &[2.5, -1.0], 0.125),
            "eval 7: x = 2.50000, y = -1.00000 -> 0.12500"
        );
        assert_eq!(
            observer.describe(8, &[20.0, 0.0], f64::INFINITY),
            "eval 8: x = 20.00000, y = 0.00000 -> inf"
        );
    }

    #[test]
    fn defaults_to_info() {
        let params = Params::new([("x", [0.0, 1.0])]).unwrap();

        assert_eq!(LogObserver::new(&params).level, Level::Info);
        assert_eq!(
            LogObserver::new(&params).with_level(Level::Debug).level,
            Level::Debug
        );
    }
}
