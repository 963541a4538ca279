//! Tabular progress output.

use std::io::{self, Write};

use amoeba_core::Observer;
use amoeba_solvers::optimization::{Params, nelder_mead::Point};

use crate::traits::{HasIndex, HasObjective, HasPosition};

const WIDTH: usize = 15;

/// An observer that writes one table row per evaluation.
///
/// Each row holds the evaluation index, the position (one column per
/// parameter), and the objective, with values printed to five decimals:
///
/// ```text
///  Eval |               x |               y |          ObjVal
/// ------------------------------------------------------------
///     0 |         3.42110 |        -7.95012 |        36.43307
/// ```
///
/// Writing happens inside the solver loop, where errors cannot be returned.
/// The first write error is kept, later rows are dropped, and
/// [`finish`][ProgressTable::finish] reports it.
///
/// Pass `&mut ProgressTable` as the observer to keep using the table (for
/// example to write the [`best`][ProgressTable::best] footer) after the run.
///
/// # Example
///
/// ```
/// use amoeba_core::ObjectiveFn;
/// use amoeba_observers::ProgressTable;
/// use amoeba_solvers::optimization::{Params, nelder_mead::{Config, Optimizer}};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let objective = ObjectiveFn::new(|x: &[f64; 1]| (x[0] - 1.0).powi(2));
/// let params = Params::new([("x", [-5.0, 5.0])])?;
///
/// let mut table = ProgressTable::new(Vec::new(), &params);
/// table.header()?;
///
/// let mut optimizer = Optimizer::new(&objective, &objective, params, &mut StdRng::seed_from_u64(0));
/// let solution = optimizer.minimize(&Config::with_max_iters(10), &mut table)?;
/// table.best(&solution.best())?;
///
/// let text = String::from_utf8(table.finish()?)?;
/// assert!(text.starts_with(" Eval |"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ProgressTable<W, const N: usize> {
    writer: W,
    names: Vec<String>,
    error: Option<io::Error>,
}

impl<W: Write, const N: usize> ProgressTable<W, N> {
    /// Creates a table with one column per parameter in `params`.
    pub fn new(writer: W, params: &Params<N>) -> Self {
        Self {
            writer,
            names: params.names().to_vec(),
            error: None,
        }
    }

    /// Writes the column titles and a separator line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn header(&mut self) -> io::Result<()> {
        let columns = self
            .names
            .iter()
            .map(|name| format!("{name:>WIDTH$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(self.writer, "{:>5} | {columns} | {:>WIDTH$}", "Eval", "ObjVal")?;
        writeln!(self.writer, "{}", "-".repeat(20 + 20 * N))
    }

    /// Writes a single row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn row(&mut self, index: usize, x: &[f64; N], objective: f64) -> io::Result<()> {
        writeln!(
            self.writer,
            "{index:5} | {} | {objective:>WIDTH$.5}",
            format_position(x)
        )
    }

    /// Writes a footer naming the best point of a run.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn best(&mut self, point: &Point<N>) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Best Point: {} | {:>WIDTH$.5}",
            format_position(&point.x),
            point.objective
        )
    }

    /// Returns the writer, or the first error hit while observing.
    ///
    /// # Errors
    ///
    /// Returns the first write error that occurred during a run.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.writer),
        }
    }
}

fn format_position<const N: usize>(x: &[f64; N]) -> String {
    x.iter()
        .map(|xi| format!("{xi:>WIDTH$.5}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl<W, E, A, const N: usize> Observer<E, A> for ProgressTable<W, N>
where
    W: Write,
    E: HasIndex + HasPosition<N> + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_none() {
            if let Err(error) = self.row(event.index(), event.position(), event.objective()) {
                self.error = Some(error);
            }
        }
        None
    }
}

/// Allows `&mut ProgressTable` to be passed to solvers that take an observer
/// by value, so the table can still be used after the run completes.
impl<W, E, A, const N: usize> Observer<E, A> for &mut ProgressTable<W, N>
where
    W: Write,
    E: HasIndex + HasPosition<N> + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use amoeba_core::ObjectiveFn;
    use amoeba_solvers::optimization::nelder_mead::{Config, Optimizer};

    fn output<const N: usize>(table: ProgressTable<Vec<u8>, N>) -> String {
        String::from_utf8(table.finish().unwrap()).unwrap()
    }

    #[test]
    fn header_names_every_parameter() {
        let params = Params::new([("alpha", [0.0, 1.0]), ("beta", [0.0, 1.0])]).unwrap();
        let mut table = ProgressTable::new(Vec::new(), &params);
        table.header().unwrap();

        let text = output(table);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(" Eval |           alpha |            beta |          ObjVal")
        );
        assert_eq!(lines.next(), Some("-".repeat(60).as_str()));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn rows_use_fixed_width_columns() {
        let params = Params::new([("x", [-10.0, 10.0])]).unwrap();
        let mut table = ProgressTable::new(Vec::new(), &params);
        table.row(3, &[1.5], -0.25).unwrap();
        table.row(12, &[-7.0], f64::INFINITY).unwrap();

        assert_eq!(
            output(table),
            "    3 |         1.50000 |        -0.25000\n   \
             12 |        -7.00000 |             inf\n"
        );
    }

    #[test]
    fn writes_one_row_per_evaluation() {
        let objective = ObjectiveFn::new(|x: &[f64; 1]| (x[0] - 5.0).powi(2));
        let params = Params::new([("x", [0.0, 10.0])]).unwrap();
        let mut table = ProgressTable::new(Vec::new(), &params);

        let mut optimizer =
            Optimizer::from_vertices(&objective, &objective, params, vec![[1.0], [9.0]]).unwrap();
        let solution = optimizer
            .minimize(&Config::with_max_iters(5), &mut table)
            .unwrap();
        table.best(&solution.best()).unwrap();

        let text = output(table);
        let lines: Vec<&str> = text.lines().collect();

        // 12 evaluations, a blank line, and the footer.
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "    0 |         1.00000 |        16.00000");
        assert_eq!(lines[2], "    2 |        -7.00000 |             inf");
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], "Best Point:         5.00000 |         0.00000");
    }

    #[test]
    fn maximization_rows_show_the_objective() {
        let objective = ObjectiveFn::new(|x: &[f64; 1]| x[0]);
        let params = Params::new([("x", [0.0, 1.0])]).unwrap();
        let mut table = ProgressTable::new(Vec::new(), &params);

        let mut optimizer =
            Optimizer::from_vertices(&objective, &objective, params, vec![[0.25], [2.0]]).unwrap();
        optimizer
            .maximize(&Config::with_max_iters(0), &mut table)
            .unwrap();

        assert_eq!(
            output(table),
            "    0 |         0.25000 |         0.25000\n    \
             1 |         2.00000 |            -inf\n"
        );
    }

    #[test]
    fn finish_hands_back_the_writer() {
        let params = Params::new([("x", [0.0, 1.0])]).unwrap();
        let mut table = ProgressTable::new(Vec::new(), &params);
        table.row(0, &[0.5], 0.5).unwrap();

        let mut writer = table.finish().unwrap();
        writer.flush().unwrap();
        writeln!(writer, "done").unwrap();

        assert_eq!(
            String::from_utf8(writer).unwrap(),
            "    0 |         0.50000 |         0.50000\ndone\n"
        );
    }

    /// A writer that always fails.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_the_first_write_error() {
        let objective = ObjectiveFn::new(|x: &[f64; 1]| x[0]);
        let params = Params::new([("x", [0.0, 1.0])]).unwrap();
        let mut table = ProgressTable::new(Broken, &params);

        let mut optimizer =
            Optimizer::from_vertices(&objective, &objective, params, vec![[0.0], [1.0]]).unwrap();
        optimizer
            .minimize(&Config::with_max_iters(3), &mut table)
            .expect("write errors do not abort the run");

        let error = table.finish().err().expect("error is reported");
        assert_eq!(error.to_string(), "broken pipe");
    }
}
