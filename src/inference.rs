use std::collections::HashMap;

use tracing::{debug, debug_span, trace};

use crate::dsl::Expr;
use crate::error::{FuzzyError, Result};
use crate::inputs::Inputs;
use crate::ops::{self, AndOp, DefuzzificationOp, ImplicationOp, OrOp, ProductionLink};
use crate::outputs::{Outputs, RuleActivation};
use crate::system::FuzzySystem;
use crate::terms::Memberships;
use crate::variable::VariableKey;

/// Mamdani inference: fuzzify crisp inputs, fire every rule, shape each rule's
/// consequence by its firing strength, aggregate and defuzzify.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MamdaniInference {
    and_op: AndOp,
    or_op: OrOp,
    imp_op: ImplicationOp,
    prod_link: ProductionLink,
    defuzz_op: DefuzzificationOp,
}

impl MamdaniInference {
    pub fn new(
        and_op: AndOp,
        or_op: OrOp,
        imp_op: ImplicationOp,
        prod_link: ProductionLink,
        defuzz_op: DefuzzificationOp,
    ) -> Self {
        Self {
            and_op,
            or_op,
            imp_op,
            prod_link,
            defuzz_op,
        }
    }

    pub fn with_defuzzification(self, defuzz_op: DefuzzificationOp) -> Self {
        Self { defuzz_op, ..self }
    }

    pub fn eval(&self, system: &FuzzySystem, inputs: &Inputs) -> Result<Outputs> {
        let _span = debug_span!("eval", rules = system.rules().len()).entered();

        // Fuzzificate Facts
        let mut fuzzified = HashMap::with_capacity(system.inputs().len());

        for &key in system.inputs() {
            let var = &system.variables().0[key];
            let value = inputs
                .get(key)
                .ok_or_else(|| FuzzyError::MissingInput(var.name().to_owned()))?;

            if !value.is_finite() {
                return Err(FuzzyError::NonFiniteInput(var.name().to_owned()));
            }

            let degrees = var.fuzzify(value);

            debug!(variable = var.name(), value, ?degrees, "fuzzified");
            fuzzified.insert(key, degrees);
        }

        if let Some(key) = inputs.keys().find(|key| !fuzzified.contains_key(key)) {
            let name = system.variable(key).map_or_else(|| format!("{key:?}"), |var| var.name().to_owned());

            return Err(FuzzyError::UnknownInput(name));
        }

        // Fire Rules and Compute Implication
        let output = system.output_variable();
        let mut activations = Vec::with_capacity(system.rules().len());

        for (i, rule) in system.rules().iter().enumerate() {
            let firing_strength = self.fire(rule.premise(), &fuzzified);
            // Consequences are checked against the output variable when the system is built
            let Some(consequence) = output.curve(rule.consequence()) else {
                return Err(FuzzyError::InvalidConsequence {
                    variable: output.name().to_owned(),
                    term: rule.consequence(),
                });
            };

            trace!(rule = i, consequence = %rule.consequence(), firing_strength, "fired");

            activations.push(RuleActivation {
                consequence: rule.consequence(),
                firing_strength,
                clipped: self.imp_op.call(firing_strength, consequence),
            });
        }

        // Aggregate Collected Memberships
        let aggregated = activations
            .iter()
            .map(|a| a.clipped.clone())
            .reduce(|agg, clipped| self.prod_link.call(agg, clipped).collect())
            .unwrap_or_else(|| vec![0.; output.universe().len()]);

        // Defuzzificate
        let result = self.defuzz_op.defuzzify(output.universe(), &aggregated)?;

        debug!(value = result.value, degree = result.degree, "defuzzified");

        Ok(Outputs::new(fuzzified, activations, aggregated, result))
    }

    /// Firing strength of a premise given the fuzzified inputs
    fn fire(&self, expr: &Expr, fuzzified: &HashMap<VariableKey, Memberships>) -> f64 {
        match expr {
            // Premises are checked against the variables when the system is built
            Expr::Is(var_key, term) => fuzzified
                .get(var_key)
                .and_then(|degrees| degrees.get(*term))
                .copied()
                .unwrap_or(0.),
            Expr::And(lhs, rhs) => self.and_op.apply(self.fire(lhs, fuzzified), self.fire(rhs, fuzzified)),
            Expr::Or(lhs, rhs) => self.or_op.apply(self.fire(lhs, fuzzified), self.fire(rhs, fuzzified)),
            Expr::Not(expr) => ops::not(self.fire(expr, fuzzified)),
        }
    }
}
