use core::fmt::Display;
use num_traits::{Float, One};
use totsu_core::LinAlgEx;
use crate::lp::{LinExpr, LinProg, LpOutcome, LpSolver, LpStatus, Sense, Var};
use crate::{Directions, Extremum, Polyhedron, SetRelError, SetRelParam};
use super::{Evaluation, SetRelChar, settle, report_adopted, report_level};

//

/// Nested dual characterization
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// First, for each direction \\(C_i\\), the inner problem
/// \\[
/// r_i = \max \left\lbrace -{C_i \cdot y \over C_i \cdot k} : A_2 y \preceq b_2 \right\rbrace
/// \\]
/// is solved. If some \\(r_i = +\infty\\), the value is \\(+\infty\\) without further problem.
/// Otherwise, the outer problem
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & t \\\\
/// {\rm subject \ to} & {C_i \cdot x \over C_i \cdot k} + r_i + e_i = t, \quad e_i \ge 0 \quad (\forall i) \\\\
/// & A_1 x \preceq b_1
/// \end{array}
/// \\]
/// couples all directions, and its optimal \\(t\\) is the value.
pub struct NestedDual<L: LinAlgEx>
{
    s1: Polyhedron<L>,
    s2: Polyhedron<L>,
    dirs: Directions<L>,
    /// evaluation parameters.
    pub par: SetRelParam<L::F>,
    eval: Evaluation<L::F>,
}

impl<L: LinAlgEx> NestedDual<L>
{
    /// Creates an instance.
    ///
    /// Returns [`NestedDual`], or [`SetRelError::DimensionMismatch`]
    /// if `s1` or `s2` does not live in the space of `dirs`.
    /// * `s1` is \\(S_1 = \lbrace x : A_1 x \preceq b_1 \rbrace\\).
    /// * `s2` is \\(S_2 = \lbrace y : A_2 y \preceq b_2 \rbrace\\).
    /// * `dirs` is the direction cone \\(C\\) with the reference vector \\(k\\).
    pub fn new(s1: Polyhedron<L>, s2: Polyhedron<L>, dirs: Directions<L>) -> Result<Self, SetRelError>
    {
        for s in [&s1, &s2] {
            if s.dim() != dirs.dim() {
                return Err(SetRelError::DimensionMismatch { expected: dirs.dim(), found: s.dim() });
            }
        }

        Ok(NestedDual {
            s1, s2, dirs,
            par: SetRelParam::default(),
            eval: Evaluation::new(),
        })
    }

    /// Changes evaluation parameters.
    ///
    /// Returns [`NestedDual`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SetRelParam<L::F>)
    {
        f(&mut self.par);
        self
    }

    fn inner(&self, i: usize) -> (LinProg<L::F>, Vec<Var>)
    {
        let mut lp = LinProg::new(Sense::Maximize);
        let y = lp.vars("y", self.s2.dim());

        lp.set_objective(self.dirs.functional(i, -L::F::one(), &y));
        self.s2.constrain(&mut lp, &y);

        (lp, y)
    }

    fn outer(&self, r: &[L::F]) -> (LinProg<L::F>, Vec<Var>, Var, Vec<Var>)
    {
        let f1 = L::F::one();

        let mut lp = LinProg::new(Sense::Minimize);
        let x = lp.vars("x", self.s1.dim());
        let t = lp.var("t");
        // slack
        let e: Vec<Var> = (0.. self.dirs.len()).map(|i| lp.var_nonneg(&format!("e_{}", i + 1))).collect();

        lp.set_objective(LinExpr::new().term(t, f1));

        // C_i x / C_i k - t + e_i == -r_i
        for (i, e_i) in e.iter().enumerate() {
            let expr = self.dirs.functional(i, f1, &x).term(t, -f1).term(*e_i, f1);
            lp.eq(expr, -r[i]);
        }

        self.s1.constrain(&mut lp, &x);

        (lp, x, t, e)
    }
}

impl<L: LinAlgEx> SetRelChar<L> for NestedDual<L>
where L::F: Float + Display
{
    fn evaluate<S: LpSolver<L::F>>(&mut self, solver: S) -> Result<L::F, SetRelError>
    {
        self.eval.restart();

        let verbose = self.par.verbose;

        // stage 1
        for i in 0.. self.dirs.len() {
            let (lp, y) = self.inner(i);
            let outcome = solver.solve(&lp);

            let label = format!("sub{}", i + 1);
            match settle(&lp, &outcome, &label, &y, verbose) {
                Some(r) => self.eval.subvalues.push(r),
                None => return Err(self.eval.failed(SetRelError::SubproblemFailed { index: i })),
            }
        }

        // an unbounded inner problem decides the value alone; an infeasible one means S2 is empty
        for extreme in [L::F::infinity(), L::F::neg_infinity()] {
            let hit: Vec<usize> = self.eval.subvalues.iter().enumerate()
                .filter(|(_, r)| **r == extreme)
                .map(|(i, _)| i)
                .collect();

            if !hit.is_empty() {
                log::log!(report_level(verbose), "outer problem skipped");
                report_adopted(&hit, verbose);
                return Ok(self.eval.solved(extreme, hit));
            }
        }

        // stage 2
        let (lp, x, t, e) = self.outer(&self.eval.subvalues);
        let outcome = solver.solve(&lp);

        match outcome {
            LpOutcome::Optimal { objective, values } => {
                let lvl = report_level(verbose);
                log::log!(lvl, "[outer] {} {}", LpStatus::Optimal, objective);
                let mut shown = x;
                shown.push(t);
                log::log!(lvl, "   ( {} )", lp.assignment(&shown, &values));

                // directions whose slack vanishes
                let mut ext = Extremum::new(self.par.eps_tie);
                for (i, e_i) in e.iter().enumerate() {
                    ext.push(i, -values[e_i.index()]);
                }
                let adopted = ext.indices();
                for &i in &adopted {
                    log::log!(lvl, "sub{} is adopted: {}", i + 1, self.eval.subvalues[i]);
                }

                Ok(self.eval.solved(objective, adopted))
            },
            o => Err(self.eval.failed(SetRelError::OuterStageFailed { status: o.status() })),
        }
    }

    fn evaluation(&self) -> &Evaluation<L::F>
    {
        &self.eval
    }
}
