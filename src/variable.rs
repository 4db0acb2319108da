use fixed_map::Map as FixedMap;
use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use crate::error::{FuzzyError, Result};
use crate::math::interp_at;
use crate::membership::MembershipFunction;
use crate::terms::{Memberships, Term, Terms};
use crate::universe::Universe;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

#[derive(Clone, Debug)]
pub(crate) struct Membership {
    pub(crate) function: MembershipFunction,
    pub(crate) curve: Vec<f64>,
}

/// A named universe with one membership function per term, sampled over the universe.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: FixedMap<Term, Membership>,
}

impl LinguisticVariable {
    /// Fails if any break-point lies outside the universe
    pub fn new(name: impl Into<String>, universe: Universe, terms: Terms) -> Result<Self> {
        let mut memberships = FixedMap::new();

        for (term, function) in terms.0.iter() {
            if let Some(&point) = function.breakpoints().iter().find(|p| !universe.contains(**p)) {
                return Err(FuzzyError::BreakpointOutOfRange {
                    term,
                    point,
                    min: universe.min(),
                    max: universe.max(),
                });
            }

            let curve = function.evaluate(&universe);

            memberships.insert(
                term,
                Membership {
                    function: *function,
                    curve,
                },
            );
        }

        Ok(Self {
            name: name.into(),
            universe,
            terms: memberships,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn has_term(&self, term: Term) -> bool {
        self.terms.contains_key(term)
    }

    pub fn function(&self, term: Term) -> Option<&MembershipFunction> {
        self.terms.get(term).map(|m| &m.function)
    }

    /// The term's membership function sampled over the universe
    pub fn curve(&self, term: Term) -> Option<&[f64]> {
        self.terms.get(term).map(|m| &*m.curve)
    }

    pub fn curves(&self) -> impl Iterator<Item = (Term, &[f64])> + '_ {
        self.terms.iter().map(|(term, m)| (term, &*m.curve))
    }

    /// Degree of membership of `value` in every term.
    ///
    /// Values outside the universe are clamped to its nearest end instead of rejected.
    pub fn fuzzify(&self, value: f64) -> Memberships {
        let clamped = self.universe.clamp(value);

        if clamped != value {
            debug!(variable = %self.name, value, clamped, "input outside universe, clamping");
        }

        let mut degrees = Memberships::new();

        for (term, membership) in self.terms.iter() {
            degrees.insert(term, interp_at(clamped, &self.universe, &membership.curve).clamp(0., 1.));
        }

        degrees
    }
}

#[derive(Clone, Debug, Default)]
pub struct Variables(pub(crate) SlotMap<VariableKey, LinguisticVariable>);

impl Variables {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    /// Variable names are unique
    pub fn add(&mut self, variable: LinguisticVariable) -> Result<VariableKey> {
        if self.find(variable.name()).is_some() {
            return Err(FuzzyError::DuplicateVariable(variable.name));
        }

        Ok(self.0.insert(variable))
    }

    pub fn find(&self, name: &str) -> Option<VariableKey> {
        self.0.iter().find(|(_, var)| var.name == name).map(|(key, _)| key)
    }

    pub fn get(&self, key: VariableKey) -> Option<&LinguisticVariable> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableKey, &LinguisticVariable)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
