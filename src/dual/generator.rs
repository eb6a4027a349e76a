use core::fmt::Display;
use num_traits::{Float, One};
use totsu_core::LinAlgEx;
use crate::lp::{LinExpr, LinProg, LpSolver, Sense, Var};
use crate::{Directions, Extremum, Generators, Polyhedron, SetRelError, SetRelParam};
use super::{Evaluation, SetRelChar, settle, report_adopted};

//

/// Generator-based dual characterization
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// \\(S_2\\) is given by generator points \\(v_g \in V_2\\), assuming
/// \\(S_2 = {\rm co}\, V_2 + {\rm cone}\, W_2\\) with \\(W_2\\) already inside the cone
/// spanned by \\(C\\) and the recession directions of \\(S_1\\). This is not checked.
///
/// For each generator \\(v_g\\) solves
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & t \\\\
/// {\rm subject \ to} & {C_i \cdot (x - v_g) \over C_i \cdot k} \le t \quad (\forall i) \\\\
/// & A_1 x \preceq b_1,
/// \end{array}
/// \\]
/// and takes the maximum over \\(g\\).
/// Every subproblem maps to an extended real by the same rule regardless of
/// [`SetRelParam::verbose`]: optimal \\(t\\), \\(+\infty\\) if unbounded, \\(-\infty\\) if infeasible.
pub struct GeneratorDual<L: LinAlgEx>
{
    s1: Polyhedron<L>,
    v2: Generators<L>,
    dirs: Directions<L>,
    /// evaluation parameters.
    pub par: SetRelParam<L::F>,
    eval: Evaluation<L::F>,
}

impl<L: LinAlgEx> GeneratorDual<L>
{
    /// Creates an instance.
    ///
    /// Returns [`GeneratorDual`], or [`SetRelError::DimensionMismatch`]
    /// if `s1` or `v2` does not live in the space of `dirs`.
    /// * `s1` is \\(S_1 = \lbrace x : A_1 x \preceq b_1 \rbrace\\).
    /// * `v2` is the generator set \\(V_2\\) of \\(S_2\\).
    /// * `dirs` is the direction cone \\(C\\) with the reference vector \\(k\\).
    pub fn new(s1: Polyhedron<L>, v2: Generators<L>, dirs: Directions<L>) -> Result<Self, SetRelError>
    {
        if s1.dim() != dirs.dim() {
            return Err(SetRelError::DimensionMismatch { expected: dirs.dim(), found: s1.dim() });
        }
        if v2.dim() != dirs.dim() {
            return Err(SetRelError::DimensionMismatch { expected: dirs.dim(), found: v2.dim() });
        }

        Ok(GeneratorDual {
            s1, v2, dirs,
            par: SetRelParam::default(),
            eval: Evaluation::new(),
        })
    }

    /// Changes evaluation parameters.
    ///
    /// Returns [`GeneratorDual`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SetRelParam<L::F>)
    {
        f(&mut self.par);
        self
    }

    fn subproblem(&self, g: usize) -> (LinProg<L::F>, Vec<Var>)
    {
        let f1 = L::F::one();
        let v = self.v2.point(g);

        let mut lp = LinProg::new(Sense::Minimize);
        let x = lp.vars("x", self.s1.dim());
        let t = lp.var("t");

        lp.set_objective(LinExpr::new().term(t, f1));

        // C_i x / C_i k - t <= C_i v / C_i k
        for i in 0.. self.dirs.len() {
            let expr = self.dirs.functional(i, f1, &x).term(t, -f1);
            lp.le(expr, self.dirs.eval(i, &v));
        }

        self.s1.constrain(&mut lp, &x);

        let mut shown = x;
        shown.push(t);
        (lp, shown)
    }
}

impl<L: LinAlgEx> SetRelChar<L> for GeneratorDual<L>
where L::F: Float + Display
{
    fn evaluate<S: LpSolver<L::F>>(&mut self, solver: S) -> Result<L::F, SetRelError>
    {
        self.eval.restart();

        let mut ext = Extremum::new(self.par.eps_tie);

        for g in 0.. self.v2.len() {
            let (lp, shown) = self.subproblem(g);
            let outcome = solver.solve(&lp);

            let label = format!("sub{}", g + 1);
            let r = match settle(&lp, &outcome, &label, &shown, self.par.verbose) {
                Some(r) => r,
                None => return Err(self.eval.failed(SetRelError::SubproblemFailed { index: g })),
            };

            self.eval.subvalues.push(r);
            ext.push(g, r);
        }

        // v2 is never empty
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
