use std::ops::{Deref, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};
use crate::linspace::Linspace;

/// How a universe is written down in a configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UniverseSpec {
    /// `{"range": [min, max], "step": 1}`, numpy.arange over the closed range
    Range { range: [f64; 2], step: f64 },
    /// `{"points": [...]}`, arbitrary spacing
    Points { points: Vec<f64> },
}

/// Strictly increasing sample points, at least two of them
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "UniverseSpec", into = "UniverseSpec")]
pub struct Universe(Vec<f64>);

impl Universe {
    pub fn new(points: Vec<f64>) -> Result<Self> {
        if points.len() < 2 {
            return Err(FuzzyError::InvalidUniverse("needs at least two points"));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(FuzzyError::InvalidUniverse("points must be finite"));
        }
        if points.windows(2).any(|w| w[0] >= w[1]) {
            return Err(FuzzyError::InvalidUniverse("points must be strictly increasing"));
        }

        Ok(Self(points))
    }

    /// Samples `range` every `step`, keeping `max` only when a step lands on it
    pub fn stepped(range: RangeInclusive<f64>, step: f64) -> Result<Self> {
        let (min, max) = range.into_inner();

        if !(step.is_finite() && step > 0.) {
            return Err(FuzzyError::InvalidUniverse("step must be positive"));
        }
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(FuzzyError::InvalidUniverse("range must be finite and non-empty"));
        }

        Self::new(Linspace::stepped(min, max, step).collect())
    }

    pub(crate) fn stepped_unchecked(min: f64, max: f64, step: f64) -> Self {
        Self(Linspace::stepped(min, max, step).collect())
    }

    pub fn min(&self) -> f64 {
        self.0[0]
    }

    pub fn max(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn midpoint(&self) -> f64 {
        (self.min() + self.max()) / 2.
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min() <= x && x <= self.max()
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min(), self.max())
    }

    pub fn points(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for Universe {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<UniverseSpec> for Universe {
    type Error = FuzzyError;

    fn try_from(spec: UniverseSpec) -> Result<Self> {
        match spec {
            UniverseSpec::Range { range: [min, max], step } => Self::stepped(min..=max, step),
            UniverseSpec::Points { points } => Self::new(points),
        }
    }
}

impl From<Universe> for UniverseSpec {
    fn from(universe: Universe) -> Self {
        UniverseSpec::Points { points: universe.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped() {
        let universe = Universe::stepped(0. ..=20., 1.).unwrap();

        assert_eq!(universe.len(), 21);
        assert_eq!(universe.min(), 0.);
        assert_eq!(universe.max(), 20.);
        assert_eq!(universe.midpoint(), 10.);
        assert_eq!(universe.clamp(-3.), 0.);
        assert_eq!(universe.clamp(25.), 20.);
    }

    #[test]
    fn test_invalid() {
        assert!(Universe::new(vec![1.]).is_err());
        assert!(Universe::new(vec![1., 1., 2.]).is_err());
        assert!(Universe::new(vec![3., 2.]).is_err());
        assert!(Universe::new(vec![0., f64::INFINITY]).is_err());
        assert!(Universe::stepped(0. ..=10., 0.).is_err());
        assert!(Universe::stepped(10. ..=0., 1.).is_err());
    }

    #[test]
    fn test_from_json() {
        let stepped: Universe = serde_json::from_str(r#"{"range": [0, 10], "step": 2.5}"#).unwrap();
        let points: Universe = serde_json::from_str(r#"{"points": [0, 1, 4, 9]}"#).unwrap();

        assert_eq!(stepped.points(), &[0., 2.5, 5., 7.5, 10.]);
        assert_eq!(points.points(), &[0., 1., 4., 9.]);
        assert!(serde_json::from_str::<Universe>(r#"{"points": [2, 1]}"#).is_err());
    }
}
