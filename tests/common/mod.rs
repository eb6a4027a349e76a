#![allow(dead_code)]

use std::cell::RefCell;
use setrel::prelude::*;
use setrel::lp::{LinProg, LpOutcome, Sense};
use setrel::*;

pub type La = FloatGeneric<f64>;
pub type AMatBuild = MatBuild<La>;

pub fn solver() -> TotsuLp<La>
{
    TotsuLp::new().par(|p| {p.max_iter = Some(100_000)})
}

/// \\([lo, hi]^2\\)
pub fn square(lo: f64, hi: f64) -> Polyhedron<La>
{
    let mat_a = AMatBuild::new(MatType::General(4, 2)).iter_rowmaj(&[
         1.,  0.,
         0.,  1.,
        -1.,  0.,
         0., -1.,
    ]);
    let vec_b = AMatBuild::new(MatType::General(4, 1)).iter_colmaj(&[
        hi, hi, -lo, -lo,
    ]);
    Polyhedron::new(mat_a, vec_b).unwrap()
}

/// \\(\lbrace x \in \mathbb{R} : A x \le b \rbrace\\) from rows `a`, `b`.
pub fn line(a: &[f64], b: &[f64]) -> Polyhedron<La>
{
    let mat_a = AMatBuild::new(MatType::General(a.len(), 1)).iter_colmaj(a);
    let vec_b = AMatBuild::new(MatType::General(b.len(), 1)).iter_colmaj(b);
    Polyhedron::new(mat_a, vec_b).unwrap()
}

pub fn directions(n: usize, c: &[f64], k: &[f64]) -> Directions<La>
{
    let mat_c = AMatBuild::new(MatType::General(c.len() / n, n)).iter_rowmaj(c);
    let vec_k = AMatBuild::new(MatType::General(n, 1)).iter_colmaj(k);
    Directions::new(mat_c, vec_k).unwrap()
}

pub fn generators(n: usize, v: &[f64]) -> Generators<La>
{
    let mat_v = AMatBuild::new(MatType::General(v.len() / n, n)).iter_rowmaj(v);
    Generators::new(mat_v).unwrap()
}

//

/// Records the sense of every problem passed through to the inner solver.
pub struct Spy<S>
{
    inner: S,
    pub calls: RefCell<Vec<Sense>>,
}

impl<S> Spy<S>
{
    pub fn new(inner: S) -> Self
    {
        Spy { inner, calls: RefCell::new(Vec::new()) }
    }

    pub fn count(&self, sense: Sense) -> usize
    {
        self.calls.borrow().iter().filter(|s| **s == sense).count()
    }
}

impl<S: LpSolver<f64>> LpSolver<f64> for Spy<S>
{
    fn solve(&self, lp: &LinProg<f64>) -> LpOutcome<f64>
    {
        self.calls.borrow_mut().push(lp.sense());
        self.inner.solve(lp)
    }
}

/// Replies with a fixed sequence of outcomes, one per call.
///
/// An optimal reply with empty `values` is filled with zeros for every variable.
pub struct Scripted
{
    script: Vec<LpOutcome<f64>>,
    next: RefCell<usize>,
}

impl Scripted
{
    pub fn new(script: Vec<LpOutcome<f64>>) -> Self
    {
        Scripted { script, next: RefCell::new(0) }
    }
}

impl LpSolver<f64> for Scripted
{
    fn solve(&self, lp: &LinProg<f64>) -> LpOutcome<f64>
    {
        let mut next = self.next.borrow_mut();
        let reply = self.script[*next].clone();
        *next += 1;

        match reply {
            LpOutcome::Optimal { objective, values } if values.is_empty() => {
                LpOutcome::Optimal { objective, values: vec![0.; lp.num_vars()] }
            },
            r => r,
        }
    }
}

pub fn optimal(objective: f64) -> LpOutcome<f64>
{
    LpOutcome::Optimal { objective, values: Vec::new() }
}
