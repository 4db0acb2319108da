/// Evenly spaced samples, like numpy.linspace
pub struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            // REVIEW: try_from instead of cast?
            let num_steps = (n - 1) as f64;
            (max - min) / num_steps
        } else {
            0.
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }

    /// Samples `min, min + step, ...` up to and including `max` when it is reachable,
    /// like numpy.arange over a closed range.
    pub fn stepped(min: f64, max: f64, step: f64) -> Self {
        // A tiny slack keeps e.g. (1.0 - 0.0) / 0.1 == 9.999999999999998 from dropping the last sample
        let num = ((max - min) / step + 1e-9).floor() as usize + 1;

        Linspace::new(min, min + step * (num - 1) as f64, num)
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace() {
    assert_eq!(Linspace::new(0., 1., 5).collect::<Vec<_>>(), vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(Linspace::new(3., 7., 1).collect::<Vec<_>>(), vec![3.]);
    assert_eq!(Linspace::new(3., 7., 0).count(), 0);
}

#[test]
fn test_stepped() {
    let points: Vec<_> = Linspace::stepped(50., 200., 1.).collect();

    assert_eq!(points.len(), 151);
    assert_eq!(points[0], 50.);
    assert_eq!(points[150], 200.);

    // The end is excluded when the step does not land on it
    assert_eq!(Linspace::stepped(0., 10., 3.).collect::<Vec<_>>(), vec![0., 3., 6., 9.]);
    assert_eq!(Linspace::stepped(0., 1., 0.1).count(), 11);
}
