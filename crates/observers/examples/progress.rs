//! Optimizes Himmelblau's function and reports progress.
//!
//! The minimization prints a progress table to stdout. The maximization
//! reports through the `log` facade, so set `RUST_LOG` to see it.
//!
//! # Usage
//!
//! ```text
//! cargo run --example progress
//! cargo run --example progress -- 42
//! RUST_LOG=info cargo run --example progress
//! RUST_LOG=debug cargo run --example progress
//! ```
//!
//! The optional argument seeds the random starting simplex.

use std::{
    error::Error,
    io::{self, Write},
};

use amoeba_core::ObjectiveFn;
use amoeba_observers::{LogObserver, ProgressTable};
use amoeba_solvers::optimization::{
    Params,
    nelder_mead::{Config, Optimizer},
};
use rand::{SeedableRng, rngs::StdRng};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<u64>)
        .transpose()?
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);

    // Four minima with value 0 and one local maximum near (-0.27, -0.92).
    let himmelblau = ObjectiveFn::new(|x: &[f64; 2]| {
        (x[0] * x[0] + x[1] - 11.0).powi(2) + (x[0] + x[1] * x[1] - 7.0).powi(2)
    });

    minimize(&himmelblau, &mut rng)?;
    maximize(&himmelblau, &mut rng)?;

    Ok(())
}

fn minimize<F>(objective: &ObjectiveFn<F, 2>, rng: &mut StdRng) -> Result<(), Box<dyn Error>>
where
    F: Fn(&[f64; 2]) -> f64,
{
    let params = Params::new([("x", [-5.0, 5.0]), ("y", [-5.0, 5.0])])?;

    let mut table = ProgressTable::new(io::stdout().lock(), &params);
    table.header()?;

    let mut optimizer = Optimizer::new(objective, objective, params, rng);
    let solution = optimizer.minimize(&Config::with_max_iters(60), &mut table)?;
    table.best(&solution.best())?;
    table.finish()?.flush()?;

    println!("{} evaluations\n", solution.evals);
    Ok(())
}

fn maximize<F>(objective: &ObjectiveFn<F, 2>, rng: &mut StdRng) -> Result<(), Box<dyn Error>>
where
    F: Fn(&[f64; 2]) -> f64,
{
    let params = Params::new([("x", [-1.0, 0.5]), ("y", [-2.0, 0.0])])?;
    let logger = LogObserver::new(&params);

    let mut optimizer = Optimizer::new(objective, objective, params, rng);
    let solution = optimizer.maximize(&Config::with_max_iters(60), logger)?;

    println!(
        "Local maximum: f({:.5}, {:.5}) = {:.5}",
        solution.x[0], solution.x[1], solution.objective
    );
    Ok(())
}
