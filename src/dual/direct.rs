use core::fmt::Display;
use num_traits::{Float, One};
use totsu_core::LinAlgEx;
use crate::lp::{LinProg, LpSolver, Sense, Var};
use crate::{Directions, Extremum, Polyhedron, SetRelError, SetRelParam};
use super::{Evaluation, SetRelChar, settle, report_adopted};

//

/// Direct dual characterization
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// For each direction \\(C_i\\) solves
/// \\[
/// \begin{array}{ll}
/// {\rm maximize} & {C_i \cdot (x - y) \over C_i \cdot k} \\\\
/// {\rm subject \ to} & A_1 x \preceq b_1 \\\\
/// & A_2 y \preceq b_2,
/// \end{array}
/// \\]
/// and takes the maximum over \\(i\\).
pub struct DirectDual<L: LinAlgEx>
{
    s1: Polyhedron<L>,
    s2: Polyhedron<L>,
    dirs: Directions<L>,
    /// evaluation parameters.
    pub par: SetRelParam<L::F>,
    eval: Evaluation<L::F>,
}

impl<L: LinAlgEx> DirectDual<L>
{
    /// Creates an instance.
    ///
    /// Returns [`DirectDual`], or [`SetRelError::DimensionMismatch`]
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

        Ok(DirectDual {
            s1, s2, dirs,
            par: SetRelParam::default(),
            eval: Evaluation::new(),
        })
    }

    /// Changes evaluation parameters.
    ///
    /// Returns [`DirectDual`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SetRelParam<L::F>)
    {
        f(&mut self.par);
        self
    }

    fn subproblem(&self, i: usize) -> (LinProg<L::F>, Vec<Var>)
    {
        let f1 = L::F::one();

        let mut lp = LinProg::new(Sense::Maximize);
        let x = lp.vars("x", self.s1.dim());
        let y = lp.vars("y", self.s2.dim());

        let mut obj = self.dirs.functional(i, f1, &x);
        obj.add_dot(&y, self.dirs.normalized(i).into_iter().map(|c| -c));
        lp.set_objective(obj);

        self.s1.constrain(&mut lp, &x);
        self.s2.constrain(&mut lp, &y);

        let shown = x.into_iter().chain(y).collect();
        (lp, shown)
    }
}

impl<L: LinAlgEx> SetRelChar<L> for DirectDual<L>
where L::F: Float + Display
{
    fn evaluate<S: LpSolver<L::F>>(&mut self, solver: S) -> Result<L::F, SetRelError>
    {
        self.eval.restart();

        let mut ext = Extremum::new(self.par.eps_tie);

        for i in 0.. self.dirs.len() {
            let (lp, shown) = self.subproblem(i);
            let outcome = solver.solve(&lp);

            let label = format!("sub{}", i + 1);
            let r = match settle(&lp, &outcome, &label, &shown, self.par.verbose) {
                Some(r) => r,
                None => return Err(self.eval.failed(SetRelError::SubproblemFailed { index: i })),
            };

            self.eval.subvalues.push(r);
            ext.push(i, r);
        }

        // dirs is never empty
        let value = ext.value().unwrap_or(L::F::neg_infinity());
        let adopted = ext.indices();
        report_adopted(&adopted, self.par.verbose);

        Ok(self.eval.solved(value, adopted))
    }

    fn evaluation(&self) -> &Evaluation<L::F>
    {
        &self.eval
    }
}
