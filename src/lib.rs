//! Mamdani fuzzy inference over triangular and trapezoidal membership functions.
//!
//! The built-in [`AcceptanceModel`] estimates the probability (0 to 100) that a
//! participant is accepted, from the number of participants, the number of
//! available slots and the difficulty of the test:
//!
//! ```
//! use fuzzy_acceptance::AcceptanceModel;
//!
//! let model = AcceptanceModel::new()?;
//! let outputs = model.evaluate(150., 15., 6.)?;
//!
//! assert!(outputs.value() > 0. && outputs.value() < 100.);
//! # Ok::<(), fuzzy_acceptance::FuzzyError>(())
//! ```
//!
//! Other systems are described with a [`SystemConfig`], built into a
//! [`FuzzySystem`] and evaluated with a [`MamdaniInference`]. Every intermediate
//! (fuzzified inputs, per-rule clipped curves, the aggregated set) is kept in the
//! returned [`Outputs`] for plotting.

mod acceptance;
pub mod config;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
pub mod ops;
mod outputs;
mod rules;
mod system;
mod terms;
mod universe;
mod variable;

pub use acceptance::{AcceptanceModel, ACCEPTANCE_PROBABILITY, AVAILABLE_SLOTS, PARTICIPANTS, TEST_DIFFICULTY};
pub use config::SystemConfig;
pub use dsl::Expr;
pub use error::{FuzzyError, Result};
pub use inference::MamdaniInference;
pub use inputs::Inputs;
pub use membership::{MembershipFunction, Shape};
pub use ops::{AndOp, DefuzzificationOp, ImplicationOp, OrOp, ProductionLink};
pub use outputs::{CrispResult, Outputs, RuleActivation};
pub use rules::{Rule, Rules};
pub use system::FuzzySystem;
pub use terms::{Memberships, Term, Terms};
pub use universe::{Universe, UniverseSpec};
pub use variable::{LinguisticVariable, VariableKey, Variables};
