use crate::config::SystemConfig;
use crate::error::{FuzzyError, Result};
use crate::inference::MamdaniInference;
use crate::inputs::Inputs;
use crate::outputs::Outputs;
use crate::system::FuzzySystem;
use crate::variable::VariableKey;

pub const PARTICIPANTS: &str = "participants";
pub const AVAILABLE_SLOTS: &str = "available_slots";
pub const TEST_DIFFICULTY: &str = "test_difficulty";
pub const ACCEPTANCE_PROBABILITY: &str = "acceptance_probability";

/// Acceptance probability (0 to 100) from participant count, available
/// slots and test difficulty.
///
/// Inputs outside their universes (`[50, 200]`, `[0, 20]` and `[0, 10]` for the
/// built-in configuration) are clamped to the nearest end.
#[derive(Clone, Debug)]
pub struct AcceptanceModel {
    system: FuzzySystem,
    engine: MamdaniInference,
    participants: VariableKey,
    available_slots: VariableKey,
    test_difficulty: VariableKey,
}

impl AcceptanceModel {
    /// The built-in configuration with min/max operators and centroid defuzzification
    pub fn new() -> Result<Self> {
        Self::from_config(&SystemConfig::acceptance(), MamdaniInference::default())
    }

    /// `config` must define the three input variables and the output variable by their usual names
    pub fn from_config(config: &SystemConfig, engine: MamdaniInference) -> Result<Self> {
        let system = FuzzySystem::from_config(config)?;
        let find = |name: &str| system.find(name).ok_or_else(|| FuzzyError::UnknownVariable(name.to_owned()));
        let participants = find(PARTICIPANTS)?;
        let available_slots = find(AVAILABLE_SLOTS)?;
        let test_difficulty = find(TEST_DIFFICULTY)?;

        if system.output_variable().name() != ACCEPTANCE_PROBABILITY {
            return Err(FuzzyError::UnknownVariable(ACCEPTANCE_PROBABILITY.to_owned()));
        }

        Ok(Self {
            system,
            engine,
            participants,
            available_slots,
            test_difficulty,
        })
    }

    pub fn evaluate(&self, participants: f64, available_slots: f64, test_difficulty: f64) -> Result<Outputs> {
        let mut inputs = Inputs::new();

        inputs
            .add(self.participants, participants)
            .add(self.available_slots, available_slots)
            .add(self.test_difficulty, test_difficulty);

        self.engine.eval(&self.system, &inputs)
    }

    pub fn system(&self) -> &FuzzySystem {
        &self.system
    }

    pub fn participants(&self) -> VariableKey {
        self.participants
    }

    pub fn available_slots(&self) -> VariableKey {
        self.available_slots
    }

    pub fn test_difficulty(&self) -> VariableKey {
        self.test_difficulty
    }
}
