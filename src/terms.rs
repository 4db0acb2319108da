use std::fmt;

use fixed_map::Key;
use fixed_map::Map as FixedMap;
use serde::{Deserialize, Serialize};

use crate::membership::MembershipFunction;

/// Linguistic label of a fuzzy set
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Key, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Low,
    Medium,
    High,
}

impl Term {
    pub const ALL: [Term; 3] = [Term::Low, Term::Medium, Term::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Degree of membership per term, e.g. a fuzzified crisp value
pub type Memberships = FixedMap<Term, f64>;

/// Membership functions to build a variable from
#[derive(Clone, Debug, Default)]
pub struct Terms(pub(crate) FixedMap<Term, MembershipFunction>);

impl Terms {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    /// Returns the previous function if the term was already present
    pub fn insert(&mut self, term: Term, function: MembershipFunction) -> Option<MembershipFunction> {
        self.0.insert(term, function)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Term, MembershipFunction)> for Terms {
    fn from_iter<I: IntoIterator<Item = (Term, MembershipFunction)>>(iter: I) -> Self {
        let mut terms = Terms::new();

        for (term, function) in iter {
            terms.insert(term, function);
        }

        terms
    }
}
