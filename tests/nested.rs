use float_eq::assert_float_eq;
use setrel::prelude::*;
use setrel::lp::{LpOutcome, LpStatus, Sense};
use setrel::*;

mod common;
use common::*;

//

#[test]
fn test_nested1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // unit square against [0, 2]^2
    let s1 = square(-1., 1.);
    let s2 = square(0., 2.);
    let dirs = directions(2, &[
        1., 0.,
        0., 1.,
    ], &[1., 1.]);

    let mut d = NestedDual::new(s1, s2, dirs).unwrap().par(|p| {
        p.verbose = true;
        p.eps_tie = 1e-3;
    });
    let rslt = d.evaluate(&solver()).unwrap();
    println!("{}", rslt);

    assert_float_eq!(rslt, -1., abs <= 1e-3);
    assert_eq!(d.evaluation().state(), EvalState::Solved);
    assert_float_eq!(d.evaluation().subvalues()[0..2], [0., 0.].as_ref(), abs_all <= 1e-3);
    assert_eq!(d.evaluation().adopted(), &[0, 1]);
}

//

#[test]
fn test_nested2()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // y <= 1 has no lower bound
    let s1 = line(&[1., -1.], &[1., 1.]);
    let s2 = line(&[1.], &[1.]);
    let dirs = directions(1, &[1.], &[1.]);

    let s = Spy::new(solver());
    let mut d = NestedDual::new(s1, s2, dirs).unwrap();
    let rslt = d.evaluate(&s).unwrap();
    println!("{}", rslt);

    assert_eq!(rslt, f64::INFINITY);
    assert_eq!(d.evaluation().adopted(), &[0]);
    assert_eq!(s.count(Sense::Minimize), 0);
    assert_eq!(s.calls.borrow().len(), 1);
}

//

#[test]
fn test_nested3()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let dirs = directions(1, &[1., 1., 1.], &[1.]);

    // every inner problem runs before the outer one is skipped
    let s = Spy::new(Scripted::new(vec![
        optimal(0.5),
        LpOutcome::Unbounded,
        optimal(1.),
    ]));
    let mut d = NestedDual::new(line(&[1.], &[1.]), line(&[-1.], &[1.]), dirs).unwrap();
    let rslt = d.evaluate(&s).unwrap();

    assert_eq!(rslt, f64::INFINITY);
    assert_eq!(d.evaluation().subvalues(), &[0.5, f64::INFINITY, 1.]);
    assert_eq!(d.evaluation().adopted(), &[1]);
    assert_eq!(s.count(Sense::Maximize), 3);
    assert_eq!(s.count(Sense::Minimize), 0);
}

//

#[test]
fn test_nested4()
{
    let _ = env_logger::builder().is_test(true).try_init();

    for (outer, status) in [
        (LpOutcome::Other, LpStatus::Other),
        (LpOutcome::Infeasible, LpStatus::Infeasible),
    ] {
        let dirs = directions(1, &[1., 1.], &[1.]);

        let s = Spy::new(Scripted::new(vec![
            optimal(0.),
            optimal(0.),
            outer,
        ]));
        let mut d = NestedDual::new(line(&[1.], &[1.]), line(&[-1.], &[1.]), dirs).unwrap();
        let rslt = d.evaluate(&s).err();

        assert_eq!(rslt, Some(SetRelError::OuterStageFailed { status }));
        assert_eq!(d.evaluation().state(), EvalState::Failed);
        assert_eq!(d.value(), None);
        assert_eq!(s.count(Sense::Minimize), 1);
    }
}

//

#[test]
fn test_nested5()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let dirs = directions(1, &[1., 1.], &[1.]);

    // empty S2
    let s = Spy::new(Scripted::new(vec![
        optimal(0.),
        LpOutcome::Infeasible,
    ]));
    let mut d = NestedDual::new(line(&[1.], &[1.]), line(&[-1.], &[1.]), dirs).unwrap();
    let rslt = d.evaluate(&s).unwrap();

    assert_eq!(rslt, f64::NEG_INFINITY);
    assert_eq!(d.evaluation().adopted(), &[1]);
    assert_eq!(s.count(Sense::Minimize), 0);
}

//

#[test]
fn test_nested6()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut d = NestedDual::new(square(-1., 1.), square(0., 2.), directions(2, &[
        1., 0.,
        1., 1.,
    ], &[1., 2.])).unwrap();

    let s = solver();
    let rslt1 = d.evaluate(&s).unwrap();
    let rslt2 = d.evaluate(&s).unwrap();
    println!("{} {}", rslt1, rslt2);

    assert_float_eq!(rslt1, rslt2, abs <= 1e-9);
    assert_eq!(d.evaluation().subvalues().len(), 2);
}

//

#[test]
fn test_nested7()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let dirs = directions(2, &[1., 0.], &[1., 1.]);

    let rslt = NestedDual::new(square(-1., 1.), line(&[1.], &[1.]), dirs).err();

    assert_eq!(rslt, Some(SetRelError::DimensionMismatch { expected: 2, found: 1 }));
}
