use num::Float;

/// Similar to numpy.interp: values left of the first coordinate take its `y`,
/// values right of the last take the last `y`.
pub(crate) fn interp<F>(x_input: impl IntoIterator<Item = F>, coords: impl IntoIterator<Item = (F, F)> + Clone) -> Vec<F>
where
    F: Float,
{
    x_input
        .into_iter()
        .map(|x| {
            let mut iter = coords.clone().into_iter().enumerate().peekable();

            while let Some((i, (x1, y1))) = iter.next() {
                // Base cases
                if i == 0 && x < x1 {
                    return y1;
                }
                // Sample hits are exact, not y1 + (y2 - y1)
                if x == x1 || (iter.peek().is_none() && x > x1) {
                    return y1;
                }

                let Some(&(_, (x2, y2))) = iter.peek() else {
                    continue;
                };

                // Actual interpolation
                if x1 < x && x < x2 {
                    let y = y1 + (x - x1) * (y2 - y1) / (x2 - x1);

                    return y;
                }
            }

            // Only reachable for NaN inputs or empty coordinates
            F::nan()
        })
        .collect()
}

/// Interpolates a single point on the piecewise-linear curve `(xp, fp)`
pub(crate) fn interp_at<F: Float>(x: F, xp: &[F], fp: &[F]) -> F {
    debug_assert_eq!(xp.len(), fp.len());

    interp(Some(x), xp.iter().copied().zip(fp.iter().copied()))
        .into_iter()
        .next()
        .unwrap_or_else(F::nan)
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];

    assert_eq!(
        interp(x, xs.into_iter().zip(ys.into_iter())),
        vec![3., 3., 2.5, 0.5599999999999996, 0.]
    );

    let x = [2.5, -1., 7.5];
    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];

    assert_eq!(interp(x, xs.into_iter().zip(ys.into_iter())), vec![4., 0., 2.]);
}

#[test]
fn test_interp_at() {
    let xp = [0., 10., 20.];
    let fp = [0., 1., 0.];

    assert_eq!(interp_at(5., &xp, &fp), 0.5);
    assert_eq!(interp_at(20., &xp, &fp), 0.);
    assert_eq!(interp_at(25., &xp, &fp), 0.);
    assert!(interp_at(f64::NAN, &xp, &fp).is_nan());
}
