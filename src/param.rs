use num_traits::Float;

/// Evaluation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRelParam<F: Float>
{
    /// Reports every subproblem and the adopted indices at `info` level instead of `debug`.
    /// Never changes the computed value.
    pub verbose: bool,
    /// Relative tolerance under which two subproblem values are regarded as tied,
    /// also used to detect zero slacks of the nested algorithm.
    pub eps_tie: F,
}

impl<F: Float> Default for SetRelParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        SetRelParam {
            verbose: false,
            eps_tie: ten.powi(-6),
        }
    }
}
