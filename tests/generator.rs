use float_eq::assert_float_eq;
use setrel::prelude::*;
use setrel::lp::{LpOutcome, Sense};
use setrel::*;

mod common;
use common::*;

//

#[test]
fn test_generator1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // unit square against the corners of [0, 2]^2
    let s1 = square(-1., 1.);
    let v2 = generators(2, &[
        0., 0.,
        2., 0.,
        0., 2.,
        2., 2.,
    ]);
    let dirs = directions(2, &[
        1., 0.,
        0., 1.,
    ], &[1., 1.]);

    let mut d = GeneratorDual::new(s1, v2, dirs).unwrap().par(|p| {
        p.verbose = true;
        p.eps_tie = 1e-3;
    });
    let rslt = d.evaluate(&solver()).unwrap();
    println!("{}", rslt);

    assert_float_eq!(rslt, -1., abs <= 1e-3);
    assert_eq!(d.evaluation().state(), EvalState::Solved);
    assert_float_eq!(d.evaluation().subvalues()[0..4], [-1., -1., -1., -3.].as_ref(), abs_all <= 1e-3);
    assert_eq!(d.evaluation().adopted(), &[0, 1, 2]);
}

//

#[test]
fn test_generator2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let v2 = generators(2, &[
        2., 2.,
        0., 2.,
        2., 0.,
        0., 0.,
    ]);
    let dirs = directions(2, &[
        1., 0.,
        0., 1.,
    ], &[1., 1.]);

    let mut d = GeneratorDual::new(square(-1., 1.), v2, dirs).unwrap().par(|p| {
        p.eps_tie = 1e-3;
    });
    let rslt = d.evaluate(&solver()).unwrap();
    println!("{}", rslt);

    assert_float_eq!(rslt, -1., abs <= 1e-3);
    assert_eq!(d.evaluation().adopted(), &[1, 2, 3]);
}

//

#[test]
fn test_generator3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // same mapping whether verbose or not
    for verbose in [false, true] {
        let v2 = generators(1, &[0., 1., 2.]);
        let dirs = directions(1, &[1.], &[1.]);

        let s = Spy::new(Scripted::new(vec![
            optimal(0.5),
            LpOutcome::Unbounded,
            LpOutcome::Infeasible,
        ]));
        let mut d = GeneratorDual::new(line(&[1.], &[1.]), v2, dirs).unwrap().par(|p| {
            p.verbose = verbose;
        });
        let rslt = d.evaluate(&s).unwrap();

        assert_eq!(rslt, f64::INFINITY);
        assert_eq!(d.evaluation().subvalues(), &[0.5, f64::INFINITY, f64::NEG_INFINITY]);
        assert_eq!(d.evaluation().adopted(), &[1]);
        assert_eq!(s.count(Sense::Minimize), 3);
    }
}

//

#[test]
fn test_generator4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x <= -1, x >= 1
    let s1 = line(&[1., -1.], &[-1., -1.]);
    let v2 = generators(1, &[0.]);
    let dirs = directions(1, &[1.], &[1.]);

    let mut d = GeneratorDual::new(s1, v2, dirs).unwrap();
    let rslt = d.evaluate(&solver()).unwrap();
    println!("{}", rslt);

    assert_eq!(rslt, f64::NEG_INFINITY);
    assert_eq!(d.value(), Some(f64::NEG_INFINITY));
}

//

#[test]
fn test_generator5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let v2 = generators(3, &[0., 0., 0.]);
    let dirs = directions(2, &[1., 0.], &[1., 1.]);

    let rslt = GeneratorDual::new(square(-1., 1.), v2, dirs).err();

    assert_eq!(rslt, Some(SetRelError::DimensionMismatch { expected: 2, found: 3 }));
}

//

#[test]
fn test_generator6()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let v2 = generators(1, &[0., 1.]);
    let dirs = directions(1, &[1.], &[1.]);

    let s = Scripted::new(vec![
        LpOutcome::Other,
        optimal(1.),
    ]);
    let mut d = GeneratorDual::new(line(&[1.], &[1.]), v2, dirs).unwrap();
    let rslt = d.evaluate(&s).err();

    assert_eq!(rslt, Some(SetRelError::SubproblemFailed { index: 0 }));
    assert_eq!(d.evaluation().state(), EvalState::Failed);
}
