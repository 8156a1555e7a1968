//! Cubic spline interpolation and integration.
//!
//! The temperature profiles below the thermosphere are defined by a handful of
//! nodes joined by a cubic spline in a transformed altitude coordinate. The
//! density profiles need both the interpolated temperature and the integral of
//! its reciprocal, so the spline supports both.

/// A cubic spline through `N` nodes with precomputed second derivatives.
///
/// # Example
/// ```
/// use rsmsis_core::spline::CubicSpline;
///
/// // A straight line is reproduced exactly by a natural spline
/// let spline = CubicSpline::new([0.0, 1.0, 2.0], [0.0, 2.0, 4.0], None, None);
/// assert!((spline.interpolate(1.5) - 3.0).abs() < 1e-12);
/// assert!((spline.integrate(2.0) - 4.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicSpline<const N: usize> {
    x: [f64; N],
    y: [f64; N],
    y2: [f64; N],
}

impl<const N: usize> CubicSpline<N> {
    /// Fit a spline through `(x, y)`.
    ///
    /// `start_slope` and `end_slope` fix the first derivative at the end nodes;
    /// `None` gives a natural end (zero second derivative).
    ///
    /// # Panics
    /// Panics if fewer than two nodes are supplied.
    pub fn new(x: [f64; N], y: [f64; N], start_slope: Option<f64>, end_slope: Option<f64>) -> Self {
        assert!(N >= 2, "A spline needs at least two nodes");

        let mut y2 = [0.0; N];
        let mut u = [0.0; N];

        if let Some(slope) = start_slope {
            y2[0] = -0.5;
            u[0] = (3.0 / (x[1] - x[0])) * ((y[1] - y[0]) / (x[1] - x[0]) - slope);
        }

        for i in 1..N - 1 {
            let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            u[i] = (6.0
                * ((y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]))
                / (x[i + 1] - x[i - 1])
                - sig * u[i - 1])
                / p;
        }

        let (qn, un) = match end_slope {
            Some(slope) => (
                0.5,
                (3.0 / (x[N - 1] - x[N - 2])) * (slope - (y[N - 1] - y[N - 2]) / (x[N - 1] - x[N - 2])),
            ),
            None => (0.0, 0.0),
        };

        y2[N - 1] = (un - qn * u[N - 2]) / (qn * y2[N - 2] + 1.0);
        for k in (0..N - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }

        Self { x, y, y2 }
    }

    /// Second derivatives at the nodes
    pub fn second_derivatives(&self) -> &[f64; N] {
        &self.y2
    }

    /// Interpolated value at `x`.
    ///
    /// Outside the node range the end cubic is extrapolated.
    pub fn interpolate(&self, x: f64) -> f64 {
        let xa = &self.x;
        let mut klo = 0;
        let mut khi = N - 1;
        while khi - klo > 1 {
            let k = (khi + klo) / 2;
            if xa[k] > x {
                khi = k;
            } else {
                klo = k;
            }
        }

        let h = xa[khi] - xa[klo];
        debug_assert!(h != 0.0, "Spline nodes must be distinct");
        let a = (xa[khi] - x) / h;
        let b = (x - xa[klo]) / h;
        a * self.y[klo]
            + b * self.y[khi]
            + ((a * a * a - a) * self.y2[klo] + (b * b * b - b) * self.y2[khi]) * h * h / 6.0
    }

    /// Integral of the spline from the first node to `x`.
    ///
    /// Zero when `x` is at or before the first node. Beyond the last node the
    /// final interval's cubic is integrated.
    pub fn integrate(&self, x: f64) -> f64 {
        let xa = &self.x;
        let ya = &self.y;
        let y2a = &self.y2;

        let mut total = 0.0;
        let mut klo = 0;
        let mut khi = 1;
        while x > xa[klo] && khi < N {
            let xx = if khi < N - 1 { x.min(xa[khi]) } else { x };

            let h = xa[khi] - xa[klo];
            let a = (xa[khi] - xx) / h;
            let b = (xx - xa[klo]) / h;
            let a2 = a * a;
            let b2 = b * b;
            total += ((1.0 - a2) * ya[klo] / 2.0
                + b2 * ya[khi] / 2.0
                + ((-(1.0 + a2 * a2) / 4.0 + a2 / 2.0) * y2a[klo] + (b2 * b2 / 4.0 - b2 / 2.0) * y2a[khi])
                    * h
                    * h
                    / 6.0)
                * h;
            klo += 1;
            khi += 1;
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_passes_through_nodes() {
        let x = [0.0, 0.5, 1.2, 2.0, 3.0];
        let y = [1.0, 0.3, -0.2, 0.8, 1.5];
        let spline = CubicSpline::new(x, y, Some(0.1), Some(-0.4));
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert!(is_close!(spline.interpolate(*xi), *yi, abs_tol = 1e-12));
        }
    }

    #[test]
    fn test_natural_ends() {
        let spline = CubicSpline::new([0.0, 1.0, 3.0, 4.0], [0.0, 1.0, -1.0, 2.0], None, None);
        let y2 = spline.second_derivatives();
        assert_eq!(y2[0], 0.0);
        assert!(is_close!(y2[3], 0.0, abs_tol = 1e-12));
    }

    #[test]
    fn test_reproduces_quadratic_with_exact_slopes() {
        // y = x², y' = 2x
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = x.map(|v| v * v);
        let spline = CubicSpline::new(x, y, Some(0.0), Some(8.0));

        assert!(is_close!(spline.interpolate(2.5), 6.25, rel_tol = 1e-10));
        assert!(is_close!(spline.integrate(3.0), 9.0, rel_tol = 1e-10));
        assert!(is_close!(spline.integrate(1.5), 1.125, rel_tol = 1e-10));
    }

    #[test]
    fn test_integral_before_first_node_is_zero() {
        let spline = CubicSpline::new([1.0, 2.0, 3.0], [1.0, 1.0, 1.0], None, None);
        assert_eq!(spline.integrate(0.5), 0.0);
        assert_eq!(spline.integrate(1.0), 0.0);
    }

    #[test]
    fn test_integral_of_constant() {
        let spline = CubicSpline::new([0.0, 1.0, 2.5, 4.0], [2.0; 4], Some(0.0), Some(0.0));
        assert!(is_close!(spline.integrate(2.0), 4.0, rel_tol = 1e-12));
        assert!(is_close!(spline.integrate(4.0), 8.0, rel_tol = 1e-12));
    }

    #[test]
    fn test_natural_spline_overshoots_uneven_nodes() {
        // Linear interpolation would give 1.5
        let spline = CubicSpline::new([0.0, 0.1, 0.7, 1.0], [3.0, 2.0, 1.0, 0.0], None, None);
        assert!(is_close!(spline.interpolate(0.4), 0.9583333333333334, rel_tol = 1e-12));
    }
}
