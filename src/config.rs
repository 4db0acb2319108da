//! Serializable description of a fuzzy system.
//!
//! ```json
//! {
//!   "inputs": [{
//!     "name": "test_difficulty",
//!     "universe": {"range": [0, 10], "step": 1},
//!     "terms": {"low": {"trapezoidal": [0, 0, 3, 5]}}
//!   }],
//!   "output": {
//!     "name": "acceptance_probability",
//!     "universe": {"range": [0, 100], "step": 1},
//!     "terms": {"low": {"triangular": [0, 0, 50]}}
//!   },
//!   "rules": [{"if": {"not": {"is": ["test_difficulty", "low"]}}, "then": "low"}]
//! }
//! ```

use std::collections::BTreeMap;
use std::ops::Not;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::membership::{MembershipFunction, Shape};
use crate::terms::Term;
use crate::universe::Universe;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SystemConfig {
    pub inputs: Vec<VariableConfig>,
    pub output: VariableConfig,
    pub rules: Vec<RuleConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableConfig {
    pub name: String,
    pub universe: Universe,
    /// One membership function per label, so labels are unique
    pub terms: BTreeMap<Term, MembershipFunction>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RuleConfig {
    #[serde(rename = "if")]
    pub premise: ExprConfig,
    #[serde(rename = "then")]
    pub consequence: Term,
}

/// A rule premise naming variables by name
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExprConfig {
    Is(String, Term),
    And(Box<ExprConfig>, Box<ExprConfig>),
    Or(Box<ExprConfig>, Box<ExprConfig>),
    Not(Box<ExprConfig>),
}

impl ExprConfig {
    pub fn is(variable: impl Into<String>, term: Term) -> Self {
        ExprConfig::Is(variable.into(), term)
    }

    pub fn and(self, rhs: ExprConfig) -> Self {
        ExprConfig::And(Box::new(self), Box::new(rhs))
    }

    pub fn or(self, rhs: ExprConfig) -> Self {
        ExprConfig::Or(Box::new(self), Box::new(rhs))
    }
}

impl Not for ExprConfig {
    type Output = ExprConfig;

    fn not(self) -> ExprConfig {
        ExprConfig::Not(Box::new(self))
    }
}

impl SystemConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The test acceptance system: participant count, available slots and test
    /// difficulty deciding the acceptance probability in percent.
    pub fn acceptance() -> Self {
        use Term::*;

        let participants = ExprConfig::is("participants", High);
        let few_slots = ExprConfig::is("available_slots", Low);

        SystemConfig {
            inputs: vec![
                variable("participants", (50., 200.), [
                    (Low, trapezoidal(50., 50., 75., 110.)),
                    (Medium, triangular(90., 120., 150.)),
                    (High, trapezoidal(130., 160., 200., 200.)),
                ]),
                variable("available_slots", (0., 20.), [
                    (Low, trapezoidal(0., 0., 2., 8.)),
                    (Medium, trapezoidal(4., 8., 12., 16.)),
                    (High, trapezoidal(13., 17., 20., 20.)),
                ]),
                variable("test_difficulty", (0., 10.), [
                    (Low, trapezoidal(0., 0., 3., 5.)),
                    (Medium, triangular(4., 6., 8.)),
                    (High, trapezoidal(7., 9., 10., 10.)),
                ]),
            ],
            output: variable("acceptance_probability", (0., 100.), [
                (Low, triangular(0., 0., 50.)),
                (Medium, triangular(10., 50., 90.)),
                (High, triangular(50., 100., 100.)),
            ]),
            rules: vec![
                RuleConfig {
                    premise: participants
                        .clone()
                        .or(few_slots.clone())
                        .or(ExprConfig::is("test_difficulty", High)),
                    consequence: Low,
                },
                RuleConfig {
                    premise: ExprConfig::is("participants", Medium)
                        .or(ExprConfig::is("test_difficulty", Medium))
                        .and(!few_slots.clone()),
                    consequence: Medium,
                },
                RuleConfig {
                    premise: ExprConfig::is("test_difficulty", Low).or((!participants).or(!few_slots)),
                    consequence: High,
                },
            ],
        }
    }
}

// Only for the built-in constants, which are valid
fn variable(name: &str, (min, max): (f64, f64), terms: [(Term, Shape); 3]) -> VariableConfig {
    VariableConfig {
        name: name.to_owned(),
        universe: Universe::stepped_unchecked(min, max, 1.),
        terms: terms
            .into_iter()
            .map(|(term, shape)| (term, MembershipFunction::unchecked(shape)))
            .collect(),
    }
}

fn triangular(a: f64, b: f64, c: f64) -> Shape {
    Shape::Triangular([a, b, c])
}

fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Shape {
    Shape::Trapezoidal([a, b, c, d])
}
