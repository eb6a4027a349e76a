/*!
Sublinear scalarization of **set relations** between convex polyhedra.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

Given sets \\(S_1, S_2\\), a direction cone \\(C = \lbrace C_i \rbrace\\) and a reference vector \\(k\\)
with \\(C_i \cdot k \ne 0\\),
this crate computes a characterization value in \\(\mathbb{R} \cup \lbrace \pm\infty \rbrace\\)
whose sign and finiteness decide whether \\(S_1\\) is smaller than or equal to \\(S_2\\)
in the set-relation order induced by \\(C\\).
Each value is obtained from linear programs on the scalarizing functionals
\\(z \mapsto C_i \cdot z / (C_i \cdot k)\\), solved by [`totsu`].

# General usage

1. Describe \\(S_1\\) (and \\(S_2\\)) as a [`Polyhedron`] \\(\lbrace x : A x \preceq b \rbrace\\),
   or \\(S_2\\) by its generator points as [`Generators`], using [`totsu::MatBuild`] matrices.
1. Describe \\(C\\) and \\(k\\) as [`Directions`].
1. Choose one of the algorithms:
   * [`DirectDual`] - one LP per direction, combined by maximum.
   * [`NestedDual`] - one inner LP per direction, then one outer LP combining them.
   * [`GeneratorDual`] - one LP per generator point of \\(S_2\\), combined by maximum.
1. Invoke [`SetRelChar::evaluate`] with an [`lp::LpSolver`], typically [`lp::TotsuLp`].

Subproblems that are unbounded count as \\(+\infty\\), infeasible ones as \\(-\infty\\).
Set [`SetRelParam::verbose`] to report every subproblem and the adopted indices through the `log` crate.

# Examples

The unit square against the square \\([0, 2]^2\\):

```
use float_eq::assert_float_eq;
use setrel::prelude::*;
use setrel::*;

//env_logger::init(); // Use any logger crate as `setrel` uses `log` crate.

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;

let square = |lo: f64, hi: f64| {
    let mat_a = AMatBuild::new(MatType::General(4, 2)).iter_rowmaj(&[
         1.,  0.,
         0.,  1.,
        -1.,  0.,
         0., -1.,
    ]);
    let vec_b = AMatBuild::new(MatType::General(4, 1)).iter_colmaj(&[hi, hi, -lo, -lo]);
    Polyhedron::new(mat_a, vec_b).unwrap()
};

let mat_c = AMatBuild::new(MatType::General(2, 2)).iter_rowmaj(&[
    1., 0.,
    0., 1.,
]);
let vec_k = AMatBuild::new(MatType::General(2, 1)).iter_colmaj(&[1., 1.]);
let dirs = Directions::new(mat_c, vec_k).unwrap();

let s = TotsuLp::<La>::new().par(|p| {
    p.max_iter = Some(100_000);
});
let mut d = DirectDual::new(square(-1., 1.), square(0., 2.), dirs).unwrap();
let value = d.evaluate(&s).unwrap();

assert_float_eq!(value, 1., abs <= 1e-3);
```
*/

mod setrel_error;

pub use setrel_error::*;

//

mod param;

pub use param::*;

//

mod polyhedron;
mod directions;

pub use polyhedron::*;
pub use directions::*;

//

mod aggregate;

pub use aggregate::*;

//

pub mod lp;

//

mod dual;

pub use dual::*;

/// Prelude
pub mod prelude
{
    pub use totsu::MatBuild;
    pub use totsu_core::{FloatGeneric, MatType};
    pub use crate::lp::{LpSolver, TotsuLp};
    pub use crate::dual::SetRelChar;
}
