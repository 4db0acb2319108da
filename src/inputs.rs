use std::collections::HashMap;

use crate::variable::VariableKey;

/// Crisp values for the input variables of one evaluation.
///
/// Keys belong to the [`FuzzySystem`](crate::FuzzySystem) that produced them. Evaluation
/// rejects keys that are not inputs of the evaluated system, but a key taken from another
/// system that happens to match one of its inputs cannot be told apart.
#[derive(Clone, Debug, Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    // TODO: K: VariableKind {Crisp, Fuzzy}, val: K::Value {f64, Vec<(f64, f64)>}
    pub fn add(&mut self, var: VariableKey, val: f64) -> &mut Self {
        self.0.insert(var, val);
        self
    }

    pub fn get(&self, var: VariableKey) -> Option<f64> {
        self.0.get(&var).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = VariableKey> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(VariableKey, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (VariableKey, f64)>>(iter: I) -> Self {
        Inputs(iter.into_iter().collect())
    }
}
