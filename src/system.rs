use crate::config::{ExprConfig, SystemConfig, VariableConfig};
use crate::dsl::Expr;
use crate::error::{FuzzyError, Result};
use crate::inputs::Inputs;
use crate::rules::Rules;
use crate::variable::{LinguisticVariable, VariableKey, Variables};

/// Input and output variables plus the rules linking them. Immutable once built.
#[derive(Clone, Debug)]
pub struct FuzzySystem {
    variables: Variables,
    inputs: Vec<VariableKey>,
    output: VariableKey,
    rules: Rules,
}

impl FuzzySystem {
    /// Every variable other than `output` is an input. Rule premises may only name
    /// existing input variables and their terms, and rules conclude terms of `output`.
    pub fn new(variables: Variables, output: VariableKey, rules: Rules) -> Result<Self> {
        let Some(output_var) = variables.get(output) else {
            return Err(FuzzyError::UnknownVariable(format!("{output:?}")));
        };

        for rule in rules.iter() {
            for (var_key, term) in rule.premise().propositions() {
                let var = variables
                    .get(var_key)
                    .ok_or_else(|| FuzzyError::UnknownVariable(format!("{var_key:?}")))?;

                if var_key == output {
                    return Err(FuzzyError::OutputInPremise(var.name().to_owned()));
                }

                if !var.has_term(term) {
                    return Err(FuzzyError::UnknownTerm {
                        variable: var.name().to_owned(),
                        term,
                    });
                }
            }

            if !output_var.has_term(rule.consequence()) {
                return Err(FuzzyError::InvalidConsequence {
                    variable: output_var.name().to_owned(),
                    term: rule.consequence(),
                });
            }
        }

        let inputs = variables.iter().map(|(key, _)| key).filter(|key| *key != output).collect();

        Ok(Self {
            variables,
            inputs,
            output,
            rules,
        })
    }

    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        let mut variables = Variables::new();

        for var in &config.inputs {
            variables.add(build_variable(var)?)?;
        }

        let output = variables.add(build_variable(&config.output)?)?;
        let mut rules = Rules::with_capacity(config.rules.len());

        for rule in &config.rules {
            rules.add(resolve(&rule.premise, &variables)?, rule.consequence);
        }

        Self::new(variables, output, rules)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variable(&self, key: VariableKey) -> Option<&LinguisticVariable> {
        self.variables.get(key)
    }

    pub fn find(&self, name: &str) -> Option<VariableKey> {
        self.variables.find(name)
    }

    pub fn inputs(&self) -> &[VariableKey] {
        &self.inputs
    }

    pub fn output(&self) -> VariableKey {
        self.output
    }

    pub fn output_variable(&self) -> &LinguisticVariable {
        &self.variables.0[self.output]
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Crisp inputs keyed by variable name
    pub fn inputs_by_name<'a>(&self, values: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Inputs> {
        values
            .into_iter()
            .map(|(name, value)| match self.find(name) {
                Some(key) if key != self.output => Ok((key, value)),
                Some(_) => Err(FuzzyError::UnknownInput(name.to_owned())),
                None => Err(FuzzyError::UnknownVariable(name.to_owned())),
            })
            .collect()
    }
}

fn build_variable(config: &VariableConfig) -> Result<LinguisticVariable> {
    let terms = config.terms.iter().map(|(&term, &function)| (term, function)).collect();

    LinguisticVariable::new(config.name.clone(), config.universe.clone(), terms)
}

fn resolve(expr: &ExprConfig, variables: &Variables) -> Result<Expr> {
    Ok(match expr {
        ExprConfig::Is(name, term) => variables
            .find(name)
            .ok_or_else(|| FuzzyError::UnknownVariable(name.clone()))?
            .is(*term),
        ExprConfig::And(lhs, rhs) => resolve(lhs, variables)?.and(resolve(rhs, variables)?),
        ExprConfig::Or(lhs, rhs) => resolve(lhs, variables)?.or(resolve(rhs, variables)?),
        ExprConfig::Not(expr) => !resolve(expr, variables)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::terms::Term;

    #[test]
    fn test_acceptance_system() {
        let system = FuzzySystem::from_config(&SystemConfig::acceptance()).unwrap();

        assert_eq!(system.inputs().len(), 3);
        assert_eq!(system.rules().len(), 3);
        assert_eq!(system.output_variable().name(), "acceptance_probability");
        assert_eq!(system.output_variable().universe().len(), 101);

        let names: Vec<_> = system.inputs().iter().map(|&key| system.variable(key).unwrap().name()).collect();

        assert_eq!(names, ["participants", "available_slots", "test_difficulty"]);
    }

    #[test]
    fn test_unknown_variable_in_rule() {
        let mut config = SystemConfig::acceptance();

        config.rules.push(RuleConfig {
            premise: ExprConfig::is("weather", Term::High),
            consequence: Term::Low,
        });

        assert!(matches!(
            FuzzySystem::from_config(&config),
            Err(FuzzyError::UnknownVariable(name)) if name == "weather"
        ));
    }

    #[test]
    fn test_unknown_term() {
        let mut config = SystemConfig::acceptance();

        config.inputs[1].terms.remove(&Term::Low);

        assert!(matches!(
            FuzzySystem::from_config(&config),
            Err(FuzzyError::UnknownTerm { variable, term: Term::Low }) if variable == "available_slots"
        ));
    }

    #[test]
    fn test_output_in_premise() {
        let mut config = SystemConfig::acceptance();

        config.rules.push(RuleConfig {
            premise: ExprConfig::is("acceptance_probability", Term::Low),
            consequence: Term::Low,
        });

        assert!(matches!(
            FuzzySystem::from_config(&config),
            Err(FuzzyError::OutputInPremise(name)) if name == "acceptance_probability"
        ));
    }

    #[test]
    fn test_invalid_consequence() {
        let mut config = SystemConfig::acceptance();

        config.output.terms.remove(&Term::Medium);

        assert!(matches!(
            FuzzySystem::from_config(&config),
            Err(FuzzyError::InvalidConsequence { variable, term: Term::Medium }) if variable == "acceptance_probability"
        ));
    }

    #[test]
    fn test_inputs_by_name() {
        let system = FuzzySystem::from_config(&SystemConfig::acceptance()).unwrap();
        let inputs = system.inputs_by_name([("participants", 150.), ("test_difficulty", 6.)]).unwrap();

        assert_eq!(inputs.get(system.find("participants").unwrap()), Some(150.));
        assert_eq!(inputs.get(system.find("available_slots").unwrap()), None);
        assert!(matches!(
            system.inputs_by_name([("weather", 1.)]),
            Err(FuzzyError::UnknownVariable(name)) if name == "weather"
        ));
        assert!(matches!(
            system.inputs_by_name([("acceptance_probability", 1.)]),
            Err(FuzzyError::UnknownInput(name)) if name == "acceptance_probability"
        ));
    }
}
