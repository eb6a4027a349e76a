//! Dual scalarization algorithms

use num_traits::Float;
use totsu_core::LinAlgEx;
use crate::lp::{LinProg, LpOutcome, LpSolver, Var};
use crate::SetRelError;

mod direct;
mod nested;
mod generator;

pub use direct::*;
pub use nested::*;
pub use generator::*;

//

/// Evaluation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalState
{
    /// Not evaluated yet.
    Unsolved,
    /// Characterization value is available.
    Solved,
    /// The last evaluation returned an error; no value is kept.
    Failed,
}

/// Record of the last evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation<F>
{
    state: EvalState,
    value: Option<F>,
    adopted: Vec<usize>,
    subvalues: Vec<F>,
}

impl<F: Float> Evaluation<F>
{
    fn new() -> Self
    {
        Evaluation {
            state: EvalState::Unsolved,
            value: None,
            adopted: Vec::new(),
            subvalues: Vec::new(),
        }
    }

    fn restart(&mut self)
    {
        *self = Self::new();
    }

    fn solved(&mut self, value: F, adopted: Vec<usize>) -> F
    {
        self.state = EvalState::Solved;
        self.value = Some(value);
        self.adopted = adopted;
        value
    }

    fn failed(&mut self, err: SetRelError) -> SetRelError
    {
        log::error!("{}", err);
        self.state = EvalState::Failed;
        self.value = None;
        self.adopted.clear();
        err
    }

    pub fn state(&self) -> EvalState
    {
        self.state
    }

    /// Characterization value in \\(\mathbb{R} \cup \lbrace \pm\infty \rbrace\\),
    /// `None` unless [`EvalState::Solved`].
    pub fn value(&self) -> Option<F>
    {
        self.value
    }

    /// Indices of directions or generators attaining the characterization value.
    pub fn adopted(&self) -> &[usize]
    {
        &self.adopted
    }

    /// Per-direction (or per-generator) optimal values, with \\(+\infty\\) for unbounded
    /// and \\(-\infty\\) for infeasible subproblems.
    pub fn subvalues(&self) -> &[F]
    {
        &self.subvalues
    }
}

//

/// Set relation characterization trait.
pub trait SetRelChar<L: LinAlgEx>
{
    /// Solves every subproblem with `solver` and aggregates them.
    ///
    /// Returns the characterization value, also kept in [`SetRelChar::evaluation`].
    /// Calling again re-solves from scratch.
    fn evaluate<S: LpSolver<L::F>>(&mut self, solver: S) -> Result<L::F, SetRelError>;

    fn evaluation(&self) -> &Evaluation<L::F>;

    fn value(&self) -> Option<L::F>
    {
        self.evaluation().value()
    }
}

//

fn report_level(verbose: bool) -> log::Level
{
    if verbose {
        log::Level::Info
    }
    else {
        log::Level::Debug
    }
}

/// Maps a subproblem outcome to an extended real:
/// optimal value, \\(+\infty\\) if unbounded, \\(-\infty\\) if infeasible,
/// `None` otherwise.
fn settle<F>(lp: &LinProg<F>, outcome: &LpOutcome<F>, label: &str, shown: &[Var], verbose: bool) -> Option<F>
where F: Float + core::fmt::Display
{
    let lvl = report_level(verbose);

    match outcome {
        LpOutcome::Optimal { objective, values } => {
            log::log!(lvl, "[{}] {} {}", label, outcome.status(), objective);
            log::log!(lvl, "   ( {} )", lp.assignment(shown, values));
            Some(*objective)
        },
        LpOutcome::Unbounded => {
            log::log!(lvl, "[{}] {}", label, outcome.status());
            Some(F::infinity())
        },
        LpOutcome::Infeasible => {
            log::log!(lvl, "[{}] {}", label, outcome.status());
            Some(F::neg_infinity())
        },
        LpOutcome::Other => {
            log::warn!("[{}] {}", label, outcome.status());
            None
        },
    }
}

fn report_adopted(adopted: &[usize], verbose: bool)
{
    let lvl = report_level(verbose);

    for i in adopted {
        log::log!(lvl, "sub{} is adopted", i + 1);
    }
}
