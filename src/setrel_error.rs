use crate::lp::LpStatus;

/// Set relation characterization errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetRelError
{
    /// No direction vector in \\(C\\).
    EmptyDirections,
    /// No generator vector in \\(V_2\\).
    EmptyGenerators,
    /// \\(C_i \cdot k\\) is zero or not finite.
    ZeroDenominator { index: usize },
    /// Ambient dimensions of the inputs disagree.
    DimensionMismatch { expected: usize, found: usize },

    /// A subproblem ended neither optimal, infeasible nor unbounded.
    SubproblemFailed { index: usize },
    /// The combining LP of the nested algorithm did not reach an optimum.
    OuterStageFailed { status: LpStatus },
}

impl core::fmt::Display for SetRelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self {
            SetRelError::EmptyDirections =>
                write!(f, "EmptyDirections: direction cone has no vector"),
            SetRelError::EmptyGenerators =>
                write!(f, "EmptyGenerators: generator set has no vector"),
            SetRelError::ZeroDenominator { index } =>
                write!(f, "ZeroDenominator: C[{}]·k is zero or not finite", index),
            SetRelError::DimensionMismatch { expected, found } =>
                write!(f, "DimensionMismatch: expected dimension {}, found {}", expected, found),
            SetRelError::SubproblemFailed { index } =>
                write!(f, "SubproblemFailed: subproblem #{} was not resolved by the LP solver", index + 1),
            SetRelError::OuterStageFailed { status } =>
                write!(f, "OuterStageFailed: outer LP ended with status {}", status),
        }
    }
}

impl std::error::Error for SetRelError {}
