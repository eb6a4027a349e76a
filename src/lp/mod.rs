//! Linear programs and the solver seam

mod linprog;
mod totsu_lp;

pub use linprog::*;
pub use totsu_lp::*;

//

/// Termination status of a linear program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpStatus
{
    Optimal,
    Infeasible,
    Unbounded,
    /// Anything else the solver reports, e.g. an iteration limit.
    Other,
}

impl core::fmt::Display for LpStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            LpStatus::Optimal    => "Optimal",
            LpStatus::Infeasible => "Infeasible",
            LpStatus::Unbounded  => "Unbounded",
            LpStatus::Other      => "Other",
        })
    }
}

/// Result of solving a [`LinProg`].
#[derive(Debug, Clone, PartialEq)]
pub enum LpOutcome<F>
{
    /// `values` is indexed by [`Var::index`].
    Optimal { objective: F, values: Vec<F> },
    Infeasible,
    Unbounded,
    Other,
}

impl<F> LpOutcome<F>
{
    pub fn status(&self) -> LpStatus
    {
        match self {
            LpOutcome::Optimal { .. } => LpStatus::Optimal,
            LpOutcome::Infeasible => LpStatus::Infeasible,
            LpOutcome::Unbounded => LpStatus::Unbounded,
            LpOutcome::Other => LpStatus::Other,
        }
    }
}

/// Linear program solver trait.
///
/// Each call is independent: no state carries over from one problem to the next.
pub trait LpSolver<F>
{
    /// Solves `lp`.
    ///
    /// Returns the [`LpOutcome`] with objective value and variable values when optimal.
    fn solve(&self, lp: &LinProg<F>) -> LpOutcome<F>;
}

impl<F, S: LpSolver<F> + ?Sized> LpSolver<F> for &S
{
    fn solve(&self, lp: &LinProg<F>) -> LpOutcome<F>
    {
        (**self).solve(lp)
    }
}
