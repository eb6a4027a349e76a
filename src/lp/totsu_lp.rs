use core::fmt::{Debug, LowerExp};
use core::marker::PhantomData;
use num_traits::{Float, Zero, One};
use totsu::prelude::*;
use totsu::{MatBuild, ProbLP};
use totsu_core::LinAlgEx;
use super::{LinExpr, LinProg, LpOutcome, LpSolver, Relation, Sense};

//

/// [`LpSolver`] backed by the first-order conic solver of `totsu`.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// A [`LinProg`] with variables \\(x \in \mathbb{R}^n\\) is passed to [`ProbLP`] as
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \pm c^Tx \\\\
/// {\rm subject \ to} & G x \preceq h \\\\
/// & A x = b,
/// \end{array}
/// \\]
/// where the sign of \\(c\\) is flipped for maximization,
/// \\(G, h\\) gather the inequality constraints followed by \\(-x_j \le 0\\) for each non-negative variable,
/// and \\(A, b\\) gather the equality constraints.
///
/// `totsu` may stop at its iteration limit without an infeasibility certificate,
/// typically when an infeasible block of variables sits beside a feasible one.
/// Such a problem is then checked by the phase-one problem
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \mathbb{1}^T s + \mathbb{1}^T s' \\\\
/// {\rm subject \ to} & G x - s \preceq h \\\\
/// & A x - s + s' = b \\\\
/// & s, s' \succeq 0,
/// \end{array}
/// \\]
/// which is always feasible and bounded.
/// A residual above [`TotsuLp::eps_feas`] (relative to the largest right-hand side) reports [`LpOutcome::Infeasible`].
pub struct TotsuLp<L: LinAlgEx>
{
    ph_l: PhantomData<L>,
    /// solver parameters of `totsu`.
    pub par: SolverParam<L::F>,
    /// Tolerance of the phase-one residual.
    pub eps_feas: L::F,
}

fn eps_feas_default<F: Float>() -> F
{
    let ten = F::from(10).unwrap();

    ten.powi(-4)
}

impl<L: LinAlgEx> TotsuLp<L>
{
    /// Creates an instance with the default [`SolverParam`], except that
    /// `max_iter` is limited to `100_000` so that every call terminates.
    pub fn new() -> Self
    {
        let mut par = SolverParam::default();
        par.max_iter = Some(100_000);

        TotsuLp {
            ph_l: PhantomData,
            par,
            eps_feas: eps_feas_default(),
        }
    }

    /// Changes solver parameters.
    ///
    /// Returns [`TotsuLp`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SolverParam<L::F>)
    {
        f(&mut self.par);
        self
    }

    fn build(lp: &LinProg<L::F>) -> ProbLP<L>
    {
        let f0 = L::F::zero();
        let f1 = L::F::one();

        let n = lp.num_vars();
        let nonneg: Vec<usize> = lp.all_vars().filter(|v| lp.is_nonneg(*v)).map(|v| v.index()).collect();
        let n_le = lp.constraints().iter().filter(|c| c.rel == Relation::Le).count();
        let n_eq = lp.constraints().len() - n_le;
        let m = n_le + nonneg.len();
        let p = n_eq;

        let sign = match lp.sense() {
            Sense::Minimize => f1,
            Sense::Maximize => -f1,
        };

        let mut vec_c = MatBuild::<L>::new(MatType::General(n, 1));
        for (v, a) in lp.objective().terms() {
            vec_c[(v.index(), 0)] = vec_c[(v.index(), 0)] + sign * *a;
        }

        let mut mat_g = MatBuild::<L>::new(MatType::General(m, n));
        let mut vec_h = MatBuild::<L>::new(MatType::General(m, 1));
        let mut mat_a = MatBuild::<L>::new(MatType::General(p, n));
        let mut vec_b = MatBuild::<L>::new(MatType::General(p, 1));

        let (mut r_le, mut r_eq) = (0, 0);
        for c in lp.constraints() {
            // constant part moves to the right-hand side
            let rhs = c.rhs - c.expr.constant_value();
            match c.rel {
                Relation::Le => {
                    for (v, a) in c.expr.terms() {
                        mat_g[(r_le, v.index())] = mat_g[(r_le, v.index())] + *a;
                    }
                    vec_h[(r_le, 0)] = rhs;
                    r_le += 1;
                },
                Relation::Eq => {
                    for (v, a) in c.expr.terms() {
                        mat_a[(r_eq, v.index())] = mat_a[(r_eq, v.index())] + *a;
                    }
                    vec_b[(r_eq, 0)] = rhs;
                    r_eq += 1;
                },
            }
        }

        // -x_j <= 0
        for j in nonneg {
            mat_g[(r_le, j)] = -f1;
            vec_h[(r_le, 0)] = f0;
            r_le += 1;
        }
        debug_assert_eq!(r_le, m);
        debug_assert_eq!(r_eq, p);

        ProbLP::new(vec_c, mat_g, vec_h, mat_a, vec_b)
    }

    /// Relaxes every constraint of `lp` by non-negative slacks, whose sum is minimized.
    fn phase_one(lp: &LinProg<L::F>) -> LinProg<L::F>
    {
        let f1 = L::F::one();

        // same variables first, so handles of `lp` stay valid
        let mut p1 = LinProg::new(Sense::Minimize);
        for v in lp.all_vars() {
            if lp.is_nonneg(v) {
                p1.var_nonneg(lp.name(v));
            }
            else {
                p1.var(lp.name(v));
            }
        }

        let mut obj = LinExpr::new();
        for (r, c) in lp.constraints().iter().enumerate() {
            let s = p1.var_nonneg(&format!("s_{}", r + 1));
            obj.add_term(s, f1);
            let mut expr = c.expr.clone().term(s, -f1);

            match c.rel {
                Relation::Le => {
                    p1.le(expr, c.rhs);
                },
                Relation::Eq => {
                    let s_ = p1.var_nonneg(&format!("s'_{}", r + 1));
                    obj.add_term(s_, f1);
                    expr.add_term(s_, f1);
                    p1.eq(expr, c.rhs);
                },
            }
        }
        p1.set_objective(obj);

        p1
    }
}

impl<L: LinAlgEx> Default for TotsuLp<L>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<L: LinAlgEx> TotsuLp<L>
where L::F: Float + Debug + LowerExp
{
    fn run(&self, lp: &LinProg<L::F>) -> Result<Vec<L::F>, SolverError>
    {
        let n = lp.num_vars();
        let mut prob = Self::build(lp);

        let s = Solver::<L>::new().par(|p| {
            *p = self.par.clone();
        });

        let (x, _) = s.solve(prob.problem())?;
        Ok(x[0.. n].to_vec())
    }

    fn check_feasibility(&self, lp: &LinProg<L::F>) -> LpOutcome<L::F>
    {
        let p1 = Self::phase_one(lp);

        match self.run(&p1) {
            Ok(values) => {
                let resid = p1.objective().eval(&values);
                let scale = lp.constraints().iter()
                    .fold(L::F::one(), |acc, c| acc.max((c.rhs - c.expr.constant_value()).abs()));

                if resid > self.eps_feas * scale {
                    log::debug!("phase-one residual {:?}: infeasible", resid);
                    LpOutcome::Infeasible
                }
                else {
                    log::error!("LP not resolved: {}", SolverError::ExcessIter);
                    LpOutcome::Other
                }
            },
            Err(e) => {
                log::error!("LP not resolved, phase one: {}", e);
                LpOutcome::Other
            },
        }
    }
}

impl<L: LinAlgEx> LpSolver<L::F> for TotsuLp<L>
where L::F: Float + Debug + LowerExp
{
    fn solve(&self, lp: &LinProg<L::F>) -> LpOutcome<L::F>
    {
        match self.run(lp) {
            Ok(values) => {
                let objective = lp.objective().eval(&values);
                LpOutcome::Optimal { objective, values }
            },
            Err(SolverError::Infeasible) => LpOutcome::Infeasible,
            Err(SolverError::Unbounded) => LpOutcome::Unbounded,
            Err(SolverError::ExcessIter) => {
                log::debug!("{}: checking feasibility", SolverError::ExcessIter);
                self.check_feasibility(lp)
            },
            Err(e) => {
                log::error!("LP not resolved: {}", e);
                LpOutcome::Other
            },
        }
    }
}

//

#[test]
fn test_totsu_lp1()
{
    use float_eq::assert_float_eq;
    use super::LinExpr;

    type L = FloatGeneric<f64>;

    // maximize x_1 + 2 x_2 s.t. x_1 + x_2 <= 1, x_1 == 0.25, x_2 >= 0
    let mut lp = LinProg::new(Sense::Maximize);
    let x1 = lp.var("x_1");
    let x2 = lp.var_nonneg("x_2");
    lp.set_objective(LinExpr::new().term(x1, 1.).term(x2, 2.));
    lp.le(LinExpr::new().term(x1, 1.).term(x2, 1.), 1.);
    lp.eq(LinExpr::new().term(x1, 1.), 0.25);

    let s = TotsuLp::<L>::new().par(|p| {p.max_iter = Some(100_000)});
    match s.solve(&lp) {
        LpOutcome::Optimal { objective, values } => {
            assert_float_eq!(objective, 1.75, abs <= 1e-3);
            assert_float_eq!(values[0..2], [0.25, 0.75].as_ref(), abs_all <= 1e-3);
        },
        o => panic!("unexpected {:?}", o.status()),
    }
}

#[test]
fn test_totsu_lp2()
{
    use super::LinExpr;

    let mut lp = LinProg::<f64>::new(Sense::Maximize);
    let x = lp.var("x");
    let e = lp.var_nonneg("e");
    lp.set_objective(LinExpr::new().term(x, 1.));
    lp.le(LinExpr::new().term(x, 1.), 3.);
    lp.eq(LinExpr::new().term(x, 1.).term(e, 1.), 1.);

    let p1 = TotsuLp::<FloatGeneric<f64>>::phase_one(&lp);

    // x, e, then s_1, s_2, s'_2
    assert_eq!(p1.sense(), Sense::Minimize);
    assert_eq!(p1.num_vars(), 5);
    assert!(!p1.is_nonneg(x));
    assert!(p1.is_nonneg(e));
    assert_eq!(p1.name(x), "x");
    assert_eq!(p1.constraints().len(), 2);
    assert_eq!(p1.constraints()[1].expr.terms().len(), 4);
    // x = 3, e = 0 leaves only the equality violated by 2
    assert_eq!(p1.objective().eval(&[3., 0., 0., 0., 2.]), 2.);
}

#[test]
fn test_totsu_lp3()
{
    use super::LinExpr;

    type L = FloatGeneric<f64>;

    let _ = env_logger::builder().is_test(true).try_init();

    // x <= -1, x >= 1 beside a feasible -1 <= y <= 1
    let mut lp = LinProg::new(Sense::Maximize);
    let x = lp.var("x");
    let y = lp.var("y");
    lp.set_objective(LinExpr::new().term(x, 1.).term(y, -1.));
    lp.le(LinExpr::new().term(x, 1.), -1.);
    lp.le(LinExpr::new().term(x, -1.), -1.);
    lp.le(LinExpr::new().term(y, 1.), 1.);
    lp.le(LinExpr::new().term(y, -1.), 1.);

    let s = TotsuLp::<L>::new();
    assert_eq!(s.par.max_iter, Some(100_000));
    assert_eq!(s.solve(&lp).status(), super::LpStatus::Infeasible);
}
