use approx::assert_abs_diff_eq;
use fuzzy_acceptance::config::{ExprConfig, RuleConfig};
use fuzzy_acceptance::{
    AcceptanceModel, DefuzzificationOp, FuzzyError, FuzzySystem, Inputs, MamdaniInference, SystemConfig, Term,
};

#[test]
fn test_reference_scenario() {
    let model = AcceptanceModel::new().unwrap();
    let outputs = model.evaluate(150., 15., 6.).unwrap();

    assert!(outputs.aggregated().iter().any(|&d| d > 0.));
    assert!(outputs.value() > 0. && outputs.value() < 100.);
    assert_abs_diff_eq!(outputs.value(), 51.87697415224092, epsilon = 1e-9);
    assert_eq!(outputs.activations().len(), 3);
    assert_eq!(
        outputs.activations().iter().map(|a| a.consequence).collect::<Vec<_>>(),
        [Term::Low, Term::Medium, Term::High]
    );
}

#[test]
fn test_inputs_outside_universe_are_clamped() {
    let model = AcceptanceModel::new().unwrap();
    let clamped = model.evaluate(250., -4., 12.).unwrap();
    let bounds = model.evaluate(200., 0., 10.).unwrap();

    assert_eq!(clamped.value(), bounds.value());
    assert_eq!(clamped.aggregated(), bounds.aggregated());
}

#[test]
fn test_worst_case_is_low() {
    let model = AcceptanceModel::new().unwrap();
    let worst = model.evaluate(200., 0., 10.).unwrap();
    let best = model.evaluate(50., 20., 0.).unwrap();

    // Many participants, no slots and a hard test only fire the "low" rule
    assert_eq!(worst.firing_strengths().collect::<Vec<_>>(), [1., 0., 0.]);
    assert!(worst.value() < 50.);
    assert!(best.value() > worst.value());
}

#[test]
fn test_degenerate_aggregate_falls_back_to_midpoint() {
    let mut config = SystemConfig::acceptance();

    // None of the built-in rules can fire at once: rule C is 0 only when
    // participants are fully high, which fires rule A. Use a rule that can stay silent.
    config.rules = vec![RuleConfig {
        premise: ExprConfig::is("participants", Term::Low).and(ExprConfig::is("available_slots", Term::High)),
        consequence: Term::High,
    }];

    let system = FuzzySystem::from_config(&config).unwrap();
    let inputs: Inputs = [("participants", 200.), ("available_slots", 0.), ("test_difficulty", 5.)]
        .into_iter()
        .map(|(name, value)| (system.find(name).unwrap(), value))
        .collect();

    for op in [DefuzzificationOp::Centroid, DefuzzificationOp::Cog, DefuzzificationOp::Mom] {
        let outputs = MamdaniInference::default().with_defuzzification(op).eval(&system, &inputs).unwrap();

        assert!(outputs.aggregated().iter().all(|&d| d == 0.));
        assert_eq!(outputs.value(), 50.);
        assert_eq!(outputs.result().degree, 0.);
    }
}

#[test]
fn test_no_rules_gives_midpoint() {
    let mut config = SystemConfig::acceptance();

    config.rules.clear();

    let model = AcceptanceModel::from_config(&config, MamdaniInference::default()).unwrap();

    assert_eq!(model.evaluate(120., 10., 5.).unwrap().value(), 50.);
}

#[test]
fn test_membership_curves_for_plotting() {
    let model = AcceptanceModel::new().unwrap();
    let system = model.system();
    let participants = system.variable(model.participants()).unwrap();

    assert_eq!(participants.universe().len(), 151);
    for (_, curve) in participants.curves() {
        assert_eq!(curve.len(), 151);
        assert!(curve.iter().all(|d| (0. ..=1.).contains(d)));
    }

    let output = system.output_variable();

    assert_eq!(output.curve(Term::Medium).unwrap()[50], 1.);
    assert_eq!(output.curve(Term::High).unwrap()[100], 1.);
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "inputs": [{
            "name": "temperature",
            "universe": {"range": [0, 40], "step": 0.5},
            "terms": {
                "low": {"trapezoidal": [0, 0, 10, 20]},
                "high": {"trapezoidal": [20, 30, 40, 40]}
            }
        }],
        "output": {
            "name": "fan_speed",
            "universe": {"points": [0, 25, 50, 75, 100]},
            "terms": {
                "low": {"triangular": [0, 0, 50]},
                "high": {"triangular": [50, 100, 100]}
            }
        },
        "rules": [
            {"if": {"is": ["temperature", "low"]}, "then": "low"},
            {"if": {"not": {"is": ["temperature", "low"]}}, "then": "high"}
        ]
    }"#;
    let config = SystemConfig::from_json(json).unwrap();
    let system = FuzzySystem::from_config(&config).unwrap();
    let temperature = system.find("temperature").unwrap();
    let mut inputs = Inputs::new();

    inputs.add(temperature, 5.);

    let cold = MamdaniInference::default().eval(&system, &inputs).unwrap();

    inputs.add(temperature, 35.);

    let hot = MamdaniInference::default().eval(&system, &inputs).unwrap();

    assert!(cold.value() < 50.);
    assert!(hot.value() > 50.);

    // Not an acceptance system
    assert!(matches!(
        AcceptanceModel::from_config(&config, MamdaniInference::default()),
        Err(FuzzyError::UnknownVariable(_))
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(SystemConfig::from_json("{"), Err(FuzzyError::Config(_))));
}
