use num_traits::Zero;
use totsu::MatBuild;
use totsu_core::LinAlgEx;
use crate::lp::{LinExpr, LinProg, Var};
use crate::SetRelError;

//

/// Dot product of row `r` of `mat` and `x`.
pub(crate) fn row_dot<L: LinAlgEx>(mat: &MatBuild<L>, r: usize, x: &[L::F]) -> L::F
{
    let (_, nc) = mat.size();
    assert_eq!(nc, x.len());

    (0.. nc).fold(L::F::zero(), |acc, c| acc + mat[(r, c)] * x[c])
}

/// Row `r` of `mat` as an owned vector.
pub(crate) fn row_vec<L: LinAlgEx>(mat: &MatBuild<L>, r: usize) -> Vec<L::F>
{
    let (_, nc) = mat.size();

    (0.. nc).map(|c| mat[(r, c)]).collect()
}

//

/// Polyhedron in H-representation
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The set is
/// \\[
/// \lbrace x \in \mathbb{R}^n : A x \preceq b \rbrace
/// \\]
/// where \\( A \in \mathbb{R}^{m \times n},\ b \in \mathbb{R}^m \\).
/// \\(m = 0\\) describes the whole space.
#[derive(Clone)]
pub struct Polyhedron<L: LinAlgEx>
{
    mat_a: MatBuild<L>,
    vec_b: MatBuild<L>,
}

impl<L: LinAlgEx> Polyhedron<L>
{
    /// Creates a polyhedron with given data.
    ///
    /// Returns a [`Polyhedron`] instance, or [`SetRelError::DimensionMismatch`]
    /// if `vec_b` is not a column of as many rows as `mat_a`.
    /// * `mat_a` is \\(A\\).
    /// * `vec_b` is \\(b\\).
    pub fn new(mat_a: MatBuild<L>, vec_b: MatBuild<L>) -> Result<Self, SetRelError>
    {
        let (m, _) = mat_a.size();
        let (m_, one) = vec_b.size();

        if m_ != m {
            log::error!("Size mismatch: mat_a{:?}, vec_b{:?}", mat_a.size(), vec_b.size());
            return Err(SetRelError::DimensionMismatch { expected: m, found: m_ });
        }
        if one != 1 {
            log::error!("Size mismatch: vec_b{:?} is not a column", vec_b.size());
            return Err(SetRelError::DimensionMismatch { expected: 1, found: one });
        }

        Ok(Polyhedron { mat_a, vec_b })
    }

    /// Ambient dimension \\(n\\).
    pub fn dim(&self) -> usize
    {
        self.mat_a.size().1
    }

    /// Number of inequalities \\(m\\).
    pub fn num_rows(&self) -> usize
    {
        self.mat_a.size().0
    }

    /// Adds \\( A x \preceq b \\) to `lp`.
    ///
    /// * `vars` are the variables standing for \\(x\\), `self.dim()` of them.
    pub fn constrain(&self, lp: &mut LinProg<L::F>, vars: &[Var])
    {
        assert_eq!(vars.len(), self.dim());

        for r in 0.. self.num_rows() {
            let expr = LinExpr::new().dot(vars, row_vec(&self.mat_a, r));
            lp.le(expr, self.vec_b[(r, 0)]);
        }
    }
}

//

/// Generator set \\(V_2\\)
///
/// Each row of the matrix is one generator point.
/// The cone part of the generated set is not stored; it is the caller's responsibility
/// that it lies in the cone spanned by the direction vectors and the recession directions of the other set.
#[derive(Clone)]
pub struct Generators<L: LinAlgEx>
{
    mat_v: MatBuild<L>,
}

impl<L: LinAlgEx> Generators<L>
{
    /// Creates a generator set.
    ///
    /// Returns a [`Generators`] instance, or [`SetRelError::EmptyGenerators`] if `mat_v` has no row.
    /// * `mat_v` has one generator per row.
    pub fn new(mat_v: MatBuild<L>) -> Result<Self, SetRelError>
    {
        if mat_v.size().0 == 0 {
            return Err(SetRelError::EmptyGenerators);
        }

        Ok(Generators { mat_v })
    }

    pub fn dim(&self) -> usize
    {
        self.mat_v.size().1
    }

    /// Number of generators.
    pub fn len(&self) -> usize
    {
        self.mat_v.size().0
    }

    /// An empty set is rejected on creation, so this is `false` for every instance.
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Generator `g` as an owned vector.
    pub fn point(&self, g: usize) -> Vec<L::F>
    {
        row_vec(&self.mat_v, g)
    }
}

//

#[test]
fn test_polyhedron1()
{
    use totsu::prelude::*;

    type L = FloatGeneric<f64>;

    // unit square
    let mat_a = MatBuild::<L>::new(MatType::General(4, 2)).iter_rowmaj(&[
         1.,  0.,
         0.,  1.,
        -1.,  0.,
         0., -1.,
    ]);
    let vec_b = MatBuild::<L>::new(MatType::General(4, 1)).iter_colmaj(&[1., 1., 1., 1.]);
    let s = Polyhedron::new(mat_a.clone(), vec_b).unwrap();

    assert_eq!(s.dim(), 2);
    assert_eq!(s.num_rows(), 4);

    let mut lp = LinProg::<f64>::new(crate::lp::Sense::Minimize);
    let x = lp.vars("x", 2);
    s.constrain(&mut lp, &x);
    assert_eq!(lp.constraints().len(), 4);
    assert_eq!(lp.constraints()[2].expr.terms(), &[(x[0], -1.)]);

    let short_b = MatBuild::<L>::new(MatType::General(3, 1));
    assert_eq!(
        Polyhedron::new(mat_a, short_b).err(),
        Some(SetRelError::DimensionMismatch { expected: 4, found: 3 })
    );
}

#[test]
fn test_generators1()
{
    use totsu::prelude::*;

    type L = FloatGeneric<f64>;

    let mat_v = MatBuild::<L>::new(MatType::General(2, 3)).iter_rowmaj(&[
        1., 2., 3.,
        4., 5., 6.,
    ]);
    let v = Generators::new(mat_v).unwrap();
    assert_eq!(v.len(), 2);
    assert!(!v.is_empty());
    assert_eq!(v.dim(), 3);
    assert_eq!(v.point(1), vec![4., 5., 6.]);

    let empty = MatBuild::<L>::new(MatType::General(0, 3));
    assert_eq!(Generators::new(empty).err(), Some(SetRelError::EmptyGenerators));
}
