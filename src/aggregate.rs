use num_traits::Float;

/// Checks if `a` and `b` agree within relative tolerance `eps`.
///
/// Infinities agree only with themselves.
pub fn is_tied<F: Float>(a: F, b: F, eps: F) -> bool
{
    if a == b {
        true
    }
    else if a.is_infinite() || b.is_infinite() {
        false
    }
    else {
        let scale = F::one().max(a.abs()).max(b.abs());
        (a - b).abs() <= eps * scale
    }
}

//

/// Running maximum over indexed values, keeping every index tied with it.
///
/// Values are pushed once in a single pass;
/// indices that fall out of tolerance of a newly raised maximum are dropped on the way.
#[derive(Debug, Clone)]
pub struct Extremum<F>
{
    eps: F,
    best: Option<F>,
    tied: Vec<(usize, F)>,
}

impl<F: Float> Extremum<F>
{
    /// Creates an empty tracker.
    ///
    /// * `eps` is the relative tolerance of ties, see [`is_tied`].
    pub fn new(eps: F) -> Self
    {
        Extremum {
            eps,
            best: None,
            tied: Vec::new(),
        }
    }

    pub fn push(&mut self, index: usize, v: F)
    {
        match self.best {
            None => {
                self.best = Some(v);
                self.tied.push((index, v));
            },
            Some(best) => {
                if v > best {
                    let eps = self.eps;
                    self.best = Some(v);
                    self.tied.retain(|&(_, u)| is_tied(u, v, eps));
                    self.tied.push((index, v));
                }
                else if is_tied(v, best, self.eps) {
                    self.tied.push((index, v));
                }
            },
        }
    }

    /// Maximum pushed so far, `None` if nothing was pushed.
    pub fn value(&self) -> Option<F>
    {
        self.best
    }

    /// Indices attaining the maximum, in push order.
    pub fn indices(&self) -> Vec<usize>
    {
        self.tied.iter().map(|&(i, _)| i).collect()
    }
}

//

#[test]
fn test_extremum1()
{
    let mut m = Extremum::new(1e-6);
    assert_eq!(m.value(), None);

    m.push(0, 1.0);
    m.push(1, 3.0);
    m.push(2, 3.0 - 1e-9);
    m.push(3, -f64::INFINITY);
    m.push(4, 2.0);
    assert_eq!(m.value(), Some(3.0));
    assert_eq!(m.indices(), vec![1, 2]);

    m.push(5, f64::INFINITY);
    m.push(6, f64::INFINITY);
    assert_eq!(m.value(), Some(f64::INFINITY));
    assert_eq!(m.indices(), vec![5, 6]);
}

#[test]
fn test_extremum2()
{
    // a slightly larger value keeps earlier ties within tolerance
    let mut m = Extremum::new(1e-3);
    m.push(0, 1.0);
    m.push(1, 1.0005);
    m.push(2, 1.0012);
    assert_eq!(m.value(), Some(1.0012));
    assert_eq!(m.indices(), vec![1, 2]);

    let mut m = Extremum::new(0.);
    m.push(0, -f64::INFINITY);
    m.push(1, -f64::INFINITY);
    assert_eq!(m.value(), Some(-f64::INFINITY));
    assert_eq!(m.indices(), vec![0, 1]);
}

#[test]
fn test_is_tied1()
{
    assert!(is_tied(1e6, 1e6 + 0.5, 1e-6));
    assert!(!is_tied(1.0, 1.1, 1e-6));
    assert!(!is_tied(f64::INFINITY, 1e300, 1e-6));
    assert!(is_tied(0.0, 1e-7, 1e-6));
}
