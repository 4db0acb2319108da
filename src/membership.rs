use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// Serialized form of a membership function, validated on conversion
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Triangular([f64; 3]),
    Trapezoidal([f64; 4]),
}

/// A piecewise-linear membership function.
///
/// A trapezoid `[a, b, c, d]` rises from 0 at `a` to 1 at `b`, holds 1 until `c` and
/// falls back to 0 at `d`. A triangle `[a, b, c]` is the trapezoid `[a, b, b, c]`.
/// Equal adjacent break-points turn the ramp between them into a step.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "Shape", into = "Shape")]
pub struct MembershipFunction {
    shape: Shape,
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::try_from(Shape::Triangular([a, b, c]))
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        Self::try_from(Shape::Trapezoidal([a, b, c, d]))
    }

    pub(crate) const fn unchecked(shape: Shape) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn breakpoints(&self) -> &[f64] {
        match &self.shape {
            Shape::Triangular(points) => points,
            Shape::Trapezoidal(points) => points,
        }
    }

    /// Corners of the equivalent trapezoid
    fn corners(&self) -> [f64; 4] {
        match self.shape {
            Shape::Triangular([a, b, c]) => [a, b, b, c],
            Shape::Trapezoidal(points) => points,
        }
    }

    /// Degree of membership of a single point
    pub fn degree(&self, x: f64) -> f64 {
        let [a, b, c, d] = self.corners();

        if x < a || x > d {
            0.
        } else if b <= x && x <= c {
            1.
        } else if x < b {
            // a <= x < b, so b > a
            (x - a) / (b - a)
        } else {
            // c < x <= d, so d > c
            (d - x) / (d - c)
        }
    }

    /// Degrees for every point of `universe`, in the same order
    pub fn evaluate(&self, universe: &[f64]) -> Vec<f64> {
        universe.iter().map(|&x| self.degree(x)).collect()
    }
}

impl TryFrom<Shape> for MembershipFunction {
    type Error = FuzzyError;

    fn try_from(shape: Shape) -> Result<Self> {
        let this = Self { shape };
        let points = this.breakpoints();

        if points.iter().any(|p| !p.is_finite()) || points.windows(2).any(|w| w[0] > w[1]) {
            return Err(FuzzyError::MalformedMembershipFunction(points.to_vec()));
        }

        Ok(this)
    }
}

impl From<MembershipFunction> for Shape {
    fn from(function: MembershipFunction) -> Self {
        function.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trapezoid() {
        let mf = MembershipFunction::trapezoidal(4., 8., 12., 16.).unwrap();

        assert_eq!(mf.evaluate(&[0., 4., 6., 8., 10., 12., 15., 16., 20.]), vec![
            0., 0., 0.5, 1., 1., 1., 0.25, 0., 0.
        ]);
    }

    #[test]
    fn test_triangle() {
        let mf = MembershipFunction::triangular(90., 120., 150.).unwrap();

        assert_eq!(mf.degree(90.), 0.);
        assert_eq!(mf.degree(105.), 0.5);
        assert_eq!(mf.degree(120.), 1.);
        assert_eq!(mf.degree(150.), 0.);
        assert_eq!(mf.degree(151.), 0.);
    }

    #[test]
    fn test_shoulders_are_steps() {
        let left = MembershipFunction::trapezoidal(0., 0., 2., 8.).unwrap();
        let right = MembershipFunction::triangular(50., 100., 100.).unwrap();

        assert_eq!(left.degree(0.), 1.);
        assert_eq!(left.degree(5.), 0.5);
        assert_eq!(right.degree(100.), 1.);
        assert_eq!(right.degree(75.), 0.5);
        assert_eq!(right.degree(100.5), 0.);
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            MembershipFunction::triangular(10., 5., 20.),
            Err(FuzzyError::MalformedMembershipFunction(points)) if points == vec![10., 5., 20.]
        ));
        assert!(MembershipFunction::trapezoidal(0., f64::NAN, 1., 2.).is_err());
        assert!(serde_json::from_str::<MembershipFunction>(r#"{"trapezoidal": [4, 3, 2, 1]}"#).is_err());
    }

    #[test]
    fn test_serde() {
        let mf: MembershipFunction = serde_json::from_str(r#"{"triangular": [4, 6, 8]}"#).unwrap();

        assert_eq!(mf, MembershipFunction::triangular(4., 6., 8.).unwrap());
        assert_eq!(serde_json::to_string(&mf).unwrap(), r#"{"triangular":[4.0,6.0,8.0]}"#);
    }
}
