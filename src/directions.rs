use num_traits::{Float, ToPrimitive, Zero};
use totsu::MatBuild;
use totsu_core::LinAlgEx;
use crate::lp::{LinExpr, Var};
use crate::polyhedron::{row_dot, row_vec};
use crate::SetRelError;

/// Direction cone \\(C\\) and reference vector \\(k\\)
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Each row \\(C_i\\) gives the scalarizing functional
/// \\[
/// z \mapsto {C_i \cdot z \over C_i \cdot k}.
/// \\]
/// The denominators \\(C_i \cdot k\\) are computed and checked once on creation.
#[derive(Clone)]
pub struct Directions<L: LinAlgEx>
{
    mat_c: MatBuild<L>,
    denom: Vec<L::F>,
}

impl<L: LinAlgEx> Directions<L>
{
    /// Creates a direction cone with a reference vector.
    ///
    /// Returns a [`Directions`] instance or
    /// * [`SetRelError::EmptyDirections`] if `mat_c` has no row,
    /// * [`SetRelError::DimensionMismatch`] if `vec_k` is not a column of the length of a row of `mat_c`,
    /// * [`SetRelError::ZeroDenominator`] if some \\(C_i \cdot k\\) is zero or not finite.
    ///
    /// * `mat_c` has one direction \\(C_i\\) per row.
    /// * `vec_k` is \\(k\\).
    pub fn new(mat_c: MatBuild<L>, vec_k: MatBuild<L>) -> Result<Self, SetRelError>
    {
        let (d, n) = mat_c.size();

        if d == 0 {
            return Err(SetRelError::EmptyDirections);
        }
        if vec_k.size() != (n, 1) {
            log::error!("Size mismatch: mat_c{:?}, vec_k{:?}", mat_c.size(), vec_k.size());
            return Err(SetRelError::DimensionMismatch { expected: n, found: vec_k.size().0 });
        }

        let k: Vec<L::F> = (0.. n).map(|r| vec_k[(r, 0)]).collect();

        let mut denom = Vec::with_capacity(d);
        for i in 0.. d {
            let ck = row_dot(&mat_c, i, &k);
            if ck == L::F::zero() || !ck.is_finite() {
                log::error!("C[{}]·k = {:?}", i, ck.to_f64());
                return Err(SetRelError::ZeroDenominator { index: i });
            }
            denom.push(ck);
        }

        Ok(Directions { mat_c, denom })
    }

    /// Number of directions.
    pub fn len(&self) -> usize
    {
        self.denom.len()
    }

    /// An empty cone is rejected on creation, so this is `false` for every instance.
    pub fn is_empty(&self) -> bool
    {
        self.denom.is_empty()
    }

    /// Ambient dimension.
    pub fn dim(&self) -> usize
    {
        self.mat_c.size().1
    }

    /// Coefficients of \\(C_i / (C_i \cdot k)\\).
    pub fn normalized(&self, i: usize) -> Vec<L::F>
    {
        let den = self.denom[i];

        row_vec(&self.mat_c, i).into_iter().map(|c| c / den).collect()
    }

    /// Evaluates \\(C_i \cdot z / (C_i \cdot k)\\) at a fixed point.
    pub fn eval(&self, i: usize, z: &[L::F]) -> L::F
    {
        row_dot(&self.mat_c, i, z) / self.denom[i]
    }

    /// Builds \\(\alpha\, C_i \cdot z / (C_i \cdot k)\\) over variables `vars` standing for \\(z\\).
    pub fn functional(&self, i: usize, alpha: L::F, vars: &[Var]) -> LinExpr<L::F>
    {
        assert_eq!(vars.len(), self.dim());

        LinExpr::new().dot(vars, self.normalized(i).into_iter().map(|c| alpha * c))
    }
}

//

#[test]
fn test_directions1()
{
    use float_eq::assert_float_eq;
    use totsu::prelude::*;
    use crate::lp::{LinProg, Sense};

    type L = FloatGeneric<f64>;

    let mat_c = MatBuild::<L>::new(MatType::General(2, 2)).iter_rowmaj(&[
        1., 0.,
        1., 3.,
    ]);
    let vec_k = MatBuild::<L>::new(MatType::General(2, 1)).iter_colmaj(&[2., 1.]);
    let c = Directions::new(mat_c, vec_k).unwrap();

    assert_eq!(c.len(), 2);
    assert!(!c.is_empty());
    assert_eq!(c.dim(), 2);
    // C_0 / 2, C_1 / 5
    assert_float_eq!(c.normalized(0)[0..2], [0.5, 0.].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(c.normalized(1)[0..2], [0.2, 0.6].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(c.eval(1, &[1., 1.]), 0.8, abs <= 1e-12);

    let mut lp = LinProg::<f64>::new(Sense::Maximize);
    let z = lp.vars("z", 2);
    let f = c.functional(1, -1., &z);
    assert_float_eq!(f.eval(&[1., 1.]), -0.8, abs <= 1e-12);
}

#[test]
fn test_directions2()
{
    use totsu::prelude::*;

    type L = FloatGeneric<f64>;

    let vec_k = MatBuild::<L>::new(MatType::General(2, 1)).iter_colmaj(&[1., 1.]);

    // C[1]·k = 0
    let mat_c = MatBuild::<L>::new(MatType::General(2, 2)).iter_rowmaj(&[
        1.,  0.,
        1., -1.,
    ]);
    assert_eq!(
        Directions::new(mat_c, vec_k.clone()).err(),
        Some(SetRelError::ZeroDenominator { index: 1 })
    );

    let mat_c = MatBuild::<L>::new(MatType::General(0, 2));
    assert_eq!(Directions::new(mat_c, vec_k.clone()).err(), Some(SetRelError::EmptyDirections));

    let mat_c = MatBuild::<L>::new(MatType::General(1, 3)).iter_rowmaj(&[1., 1., 1.]);
    assert_eq!(
        Directions::new(mat_c, vec_k).err(),
        Some(SetRelError::DimensionMismatch { expected: 3, found: 2 })
    );
}
