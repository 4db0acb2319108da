use std::collections::HashMap;

use crate::terms::{Memberships, Term};
use crate::variable::VariableKey;

/// A defuzzified value and the aggregated membership degree at that value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrispResult {
    pub value: f64,
    pub degree: f64,
}

/// What one rule contributed to the output
#[derive(Clone, Debug, PartialEq)]
pub struct RuleActivation {
    pub consequence: Term,
    pub firing_strength: f64,
    /// The consequence's membership after implication
    pub clipped: Vec<f64>,
}

/// Result of an evaluation, with every intermediate needed to plot it
#[derive(Debug)]
pub struct Outputs {
    fuzzified: HashMap<VariableKey, Memberships>,
    activations: Vec<RuleActivation>,
    aggregated: Vec<f64>,
    result: CrispResult,
}

impl Outputs {
    pub(crate) fn new(
        fuzzified: HashMap<VariableKey, Memberships>,
        activations: Vec<RuleActivation>,
        aggregated: Vec<f64>,
        result: CrispResult,
    ) -> Self {
        Self {
            fuzzified,
            activations,
            aggregated,
            result,
        }
    }

    /// Degrees of the crisp input in each term of `var`
    pub fn fuzzified(&self, var: VariableKey) -> Option<&Memberships> {
        self.fuzzified.get(&var)
    }

    /// Per rule, in rule order
    pub fn activations(&self) -> &[RuleActivation] {
        &self.activations
    }

    pub fn firing_strengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.activations.iter().map(|a| a.firing_strength)
    }

    /// The aggregated output set, one degree per output universe sample
    pub fn aggregated(&self) -> &[f64] {
        &self.aggregated
    }

    pub fn result(&self) -> CrispResult {
        self.result
    }

    pub fn value(&self) -> f64 {
        self.result.value
    }
}
