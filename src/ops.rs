use num::Float;
use tracing::debug;

use crate::error::{FuzzyError, Result};
use crate::math::interp_at;
use crate::outputs::CrispResult;
use crate::universe::Universe;

/// Fuzzy AND, the minimum of two degrees
pub fn and<F: Float>(a: F, b: F) -> F {
    F::min(a, b)
}

/// Fuzzy OR, the maximum of two degrees
pub fn or<F: Float>(a: F, b: F) -> F {
    F::max(a, b)
}

/// Fuzzy NOT, the complement of a degree
pub fn not<F: Float>(a: F) -> F {
    F::one() - a
}

/// Elementwise [`and`]
pub fn and_each<F: Float>(u: &[F], v: &[F]) -> Result<Vec<F>> {
    zip_with(u, v, and)
}

/// Elementwise [`or`]
pub fn or_each<F: Float>(u: &[F], v: &[F]) -> Result<Vec<F>> {
    zip_with(u, v, or)
}

/// Elementwise [`not`]
pub fn not_each<F: Float>(u: &[F]) -> Vec<F> {
    u.iter().copied().map(not).collect()
}

fn zip_with<F: Float>(u: &[F], v: &[F], op: impl Fn(F, F) -> F) -> Result<Vec<F>> {
    if u.len() != v.len() {
        return Err(FuzzyError::LengthMismatch {
            left: u.len(),
            right: v.len(),
        });
    }

    Ok(u.iter().zip(v).map(|(&u, &v)| op(u, v)).collect())
}

/// And operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AndOp {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => ProductionLink::Min.apply(u, v),
            Self::Prod => ProductionLink::Prod.apply(u, v),
            Self::BoundedProd => ProductionLink::BoundedProd.apply(u, v),
            Self::DrasticProd => ProductionLink::DrasticProd.apply(u, v),
        }
    }
}

/// Or operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrOp {
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl OrOp {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => ProductionLink::Max.apply(u, v),
            Self::ProbOr => ProductionLink::ProbOr.apply(u, v),
            Self::BoundedSum => ProductionLink::BoundedSum.apply(u, v),
            Self::DrasticSum => ProductionLink::DrasticSum.apply(u, v),
        }
    }
}

/// How a rule's firing strength shapes its consequence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImplicationOp {
    /// Mamdani: clip the consequence at the firing strength
    #[default]
    Min,
    /// Larsen: scale the consequence by the firing strength
    Prod,
}

impl ImplicationOp {
    pub fn call<F: Float>(self, strength: F, consequence: &[F]) -> Vec<F> {
        consequence
            .iter()
            .map(|&v| match self {
                Self::Min => and(strength, v),
                Self::Prod => strength * v,
            })
            .collect()
    }
}

/// Method for aggregating the consequences of the fuzzy rules
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductionLink {
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl ProductionLink {
    pub fn apply<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => or(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if v == F::zero() {
                    u
                } else if u == F::zero() {
                    v
                } else {
                    F::one()
                }
            },
            Self::Min => and(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if v == F::one() {
                    u
                } else if u == F::one() {
                    v
                } else {
                    F::zero()
                }
            },
        }
    }

    /// Pointwise over two memberships sampled on the same universe
    pub fn call<F: Float>(
        self,
        u: impl IntoIterator<Item = F>,
        v: impl IntoIterator<Item = F>,
    ) -> impl Iterator<Item = F> {
        u.into_iter().zip(v).map(move |(u, v)| self.apply(u, v))
    }
}

/// Method for defuzzifcating the resulting membership function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DefuzzificationOp {
    /// Mean of the universe weighted by membership
    #[default]
    Centroid,
    /// Center of Gravity of the area under the piecewise-linear membership
    Cog,
    /// Bisector of Area
    Boa,
    /// Mean of the values for which the membership function is maximum
    Mom,
    /// Largest value for which the membership function is maximum
    Lom,
    /// Smallest value for which the membership function is maximum
    Som,
}

impl DefuzzificationOp {
    /// Reduces `membership` over `universe` to one value and the membership degree there.
    ///
    /// An all-zero membership has no centroid; the midpoint of the universe is used instead.
    pub fn defuzzify(self, universe: &Universe, membership: &[f64]) -> Result<CrispResult> {
        if universe.len() != membership.len() {
            return Err(FuzzyError::LengthMismatch {
                left: universe.len(),
                right: membership.len(),
            });
        }

        if membership.iter().all(|&m| m == 0.) {
            let value = universe.midpoint();

            debug!(value, method = ?self, "aggregated set is empty, using universe midpoint");

            return Ok(CrispResult { value, degree: 0. });
        }

        let value = self.call(universe, membership);

        Ok(CrispResult {
            value,
            degree: interp_at(value, universe, membership),
        })
    }

    /// Expects at least two samples, one of them nonzero
    fn call(self, universe: &[f64], membership: &[f64]) -> f64 {
        match self {
            Self::Centroid => {
                let num = universe.iter().zip(membership).map(|(u, m)| u * m).sum::<f64>();
                let den = membership.iter().sum::<f64>();

                num / den
            },
            Self::Cog => {
                let n_areas = universe.len() - 1;
                let mut areas = Vec::with_capacity(n_areas);
                let mut centroids = Vec::with_capacity(n_areas);

                for i in 0..n_areas {
                    let base = universe[i + 1] - universe[i];
                    let area_rect = f64::min(membership[i], membership[i + 1]) * base;
                    let center_rect = universe[i] + base / 2.;
                    let (area_tria, center_tri) = if membership[i + 1] == membership[i] {
                        (0., 0.)
                    } else if membership[i + 1] > membership[i] {
                        (base * (membership[i + 1] - membership[i]).abs() / 2., universe[i] + 2. / 3. * base)
                    } else {
                        (base * (membership[i + 1] - membership[i]).abs() / 2., universe[i] + 1. / 3. * base)
                    };
                    let area = area_rect + area_tria;
                    let center = if area == 0. {
                        0.
                    } else {
                        (area_rect * center_rect + area_tria * center_tri) / area
                    };

                    areas.push(area);
                    centroids.push(center);
                }

                let den = areas.iter().sum::<f64>();
                let num = areas.iter().zip(&centroids).map(|(area, cent)| area * cent).sum::<f64>();

                num / den
            },
            Self::Boa => {
                let n_areas = universe.len() - 1;
                let areas: Vec<f64> = (0..n_areas)
                    .map(|i| (membership[i] + membership[i + 1]) * (universe[i + 1] - universe[i]) / 2.)
                    .collect();
                let target = areas.iter().sum::<f64>() / 2.;
                let mut cum_area = 0.;
                let mut i_area = 0;

                for (i, area) in areas.iter().enumerate() {
                    cum_area += area;
                    i_area = i;
                    if cum_area >= target {
                        break;
                    }
                }

                // Area still needed inside the crossing segment, where the degree is linear:
                // m0 * s + slope / 2 * s^2 = rest
                let rest = target - (cum_area - areas[i_area]);
                let (m0, m1) = (membership[i_area], membership[i_area + 1]);
                let base = universe[i_area + 1] - universe[i_area];
                let slope = (m1 - m0) / base;
                let root = f64::sqrt(f64::max(0., m0 * m0 + 2. * slope * rest));
                let s = if rest > 0. { 2. * rest / (m0 + root) } else { 0. };

                universe[i_area] + s.clamp(0., base)
            },
            Self::Mom => {
                let maximum = membership.iter().copied().fold(0., f64::max);
                let (len, sum) = universe
                    .iter()
                    .zip(membership)
                    .filter(|&(_, &m)| m == maximum)
                    .fold((0usize, 0.), |(len, sum), (u, _)| (len + 1, sum + u));

                sum / len as f64
            },
            Self::Lom | Self::Som => {
                let maximum = membership.iter().copied().fold(0., f64::max);
                let mut at_max = universe.iter().zip(membership).filter(|&(_, &m)| m == maximum).map(|(u, _)| *u);

                let found = if self == Self::Lom { at_max.last() } else { at_max.next() };

                // All-zero memberships are handled by the caller, so some sample reaches the maximum
                found.unwrap_or(f64::NAN)
            },
        }
    }
}
