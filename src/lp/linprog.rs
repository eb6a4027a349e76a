use num_traits::Float;

/// Handle of a decision variable, valid only within the [`LinProg`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Var(usize);

impl Var
{
    /// Position of the variable in a solution vector.
    pub fn index(self) -> usize
    {
        self.0
    }
}

//

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense
{
    Minimize,
    Maximize,
}

/// Relation between a linear expression and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation
{
    /// \\( a^T x \le r \\)
    Le,
    /// \\( a^T x = r \\)
    Eq,
}

//

/// Linear expression \\( \sum_j a_j x_j + d \\).
#[derive(Debug, Clone, PartialEq)]
pub struct LinExpr<F>
{
    terms: Vec<(Var, F)>,
    constant: F,
}

impl<F: Float> LinExpr<F>
{
    /// Creates an empty expression.
    pub fn new() -> Self
    {
        LinExpr {
            terms: Vec::new(),
            constant: F::zero(),
        }
    }

    /// Adds \\( a x \\).
    ///
    /// * `var` is \\(x\\).
    /// * `coef` is \\(a\\).
    pub fn add_term(&mut self, var: Var, coef: F)
    {
        if coef != F::zero() {
            self.terms.push((var, coef));
        }
    }
    /// Builder pattern of [`LinExpr::add_term`].
    pub fn term(mut self, var: Var, coef: F) -> Self
    {
        self.add_term(var, coef);
        self
    }

    /// Adds \\( \sum_j a_j x_j \\) over zipped `vars` and `coefs`.
    pub fn add_dot<I>(&mut self, vars: &[Var], coefs: I)
    where I: IntoIterator<Item=F>
    {
        for (v, a) in vars.iter().zip(coefs) {
            self.add_term(*v, a);
        }
    }
    /// Builder pattern of [`LinExpr::add_dot`].
    pub fn dot<I>(mut self, vars: &[Var], coefs: I) -> Self
    where I: IntoIterator<Item=F>
    {
        self.add_dot(vars, coefs);
        self
    }

    /// Adds a constant \\(d\\).
    pub fn add_constant(&mut self, d: F)
    {
        self.constant = self.constant + d;
    }
    /// Builder pattern of [`LinExpr::add_constant`].
    pub fn constant(mut self, d: F) -> Self
    {
        self.add_constant(d);
        self
    }

    pub fn terms(&self) -> &[(Var, F)]
    {
        &self.terms
    }

    pub fn constant_value(&self) -> F
    {
        self.constant
    }

    /// Evaluates the expression.
    ///
    /// Returns \\( \sum_j a_j x_j + d \\).
    /// * `values` is a solution vector indexed by [`Var::index`].
    pub fn eval(&self, values: &[F]) -> F
    {
        self.terms.iter().fold(self.constant, |acc, (v, a)| acc + *a * values[v.index()])
    }
}

impl<F: Float> Default for LinExpr<F>
{
    fn default() -> Self
    {
        Self::new()
    }
}

//

/// Linear constraint `expr (<= | ==) rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint<F>
{
    pub expr: LinExpr<F>,
    pub rel: Relation,
    pub rhs: F,
}

//

/// Linear program over a private arena of named decision variables.
///
/// Every subproblem builds its own [`LinProg`], so handles never alias across problems.
#[derive(Debug, Clone)]
pub struct LinProg<F>
{
    sense: Sense,
    names: Vec<String>,
    nonneg: Vec<bool>,
    objective: LinExpr<F>,
    constraints: Vec<Constraint<F>>,
}

impl<F: Float> LinProg<F>
{
    /// Creates a problem with no variable and a zero objective.
    pub fn new(sense: Sense) -> Self
    {
        LinProg {
            sense,
            names: Vec::new(),
            nonneg: Vec::new(),
            objective: LinExpr::new(),
            constraints: Vec::new(),
        }
    }

    fn push_var(&mut self, name: String, nonneg: bool) -> Var
    {
        let v = Var(self.names.len());
        self.names.push(name);
        self.nonneg.push(nonneg);
        v
    }

    /// Adds an unrestricted variable.
    pub fn var(&mut self, name: &str) -> Var
    {
        self.push_var(name.to_string(), false)
    }

    /// Adds a variable constrained to be non-negative.
    pub fn var_nonneg(&mut self, name: &str) -> Var
    {
        self.push_var(name.to_string(), true)
    }

    /// Adds `n` unrestricted variables named `prefix_1` to `prefix_n`.
    pub fn vars(&mut self, prefix: &str, n: usize) -> Vec<Var>
    {
        (0.. n).map(|j| self.push_var(format!("{}_{}", prefix, j + 1), false)).collect()
    }

    pub fn set_objective(&mut self, expr: LinExpr<F>)
    {
        self.objective = expr;
    }

    /// Adds `expr <= rhs`.
    pub fn le(&mut self, expr: LinExpr<F>, rhs: F)
    {
        self.constraints.push(Constraint { expr, rel: Relation::Le, rhs });
    }

    /// Adds `expr == rhs`.
    pub fn eq(&mut self, expr: LinExpr<F>, rhs: F)
    {
        self.constraints.push(Constraint { expr, rel: Relation::Eq, rhs });
    }

    pub fn sense(&self) -> Sense
    {
        self.sense
    }

    pub fn num_vars(&self) -> usize
    {
        self.names.len()
    }

    /// Iterates every variable handle in creation order.
    pub fn all_vars(&self) -> impl Iterator<Item=Var>
    {
        (0.. self.names.len()).map(Var)
    }

    pub fn name(&self, var: Var) -> &str
    {
        &self.names[var.index()]
    }

    pub fn is_nonneg(&self, var: Var) -> bool
    {
        self.nonneg[var.index()]
    }

    pub fn objective(&self) -> &LinExpr<F>
    {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint<F>]
    {
        &self.constraints
    }

    /// Formats `name=value` pairs of `vars`, for reports.
    pub fn assignment(&self, vars: &[Var], values: &[F]) -> String
    where F: core::fmt::Display
    {
        let mut s = String::new();
        for v in vars {
            if !s.is_empty() {
                s.push(' ');
            }
            s.push_str(&format!("{}={}", self.name(*v), values[v.index()]));
        }
        s
    }
}

//

#[test]
fn test_linprog1()
{
    let mut lp = LinProg::<f64>::new(Sense::Maximize);
    let x = lp.vars("x", 2);
    let t = lp.var("t");
    let e = lp.var_nonneg("e_1");

    assert_eq!(lp.num_vars(), 4);
    assert_eq!(lp.name(x[1]), "x_2");
    assert_eq!(lp.name(t), "t");
    assert!(lp.is_nonneg(e));
    assert!(!lp.is_nonneg(x[0]));

    let expr = LinExpr::new().dot(&x, [2., 0.]).term(t, -1.).constant(0.5);
    // zero coefficient is dropped
    assert_eq!(expr.terms().len(), 2);
    assert_eq!(expr.eval(&[1., 7., 3., 0.]), 2. - 3. + 0.5);

    lp.eq(expr, 1.);
    lp.le(LinExpr::new().term(e, 1.), 4.);
    assert_eq!(lp.constraints()[0].rel, Relation::Eq);
    assert_eq!(lp.constraints()[1].rel, Relation::Le);
    assert_eq!(lp.assignment(&x, &[1., 7., 3., 0.]), "x_1=1 x_2=7");
}
