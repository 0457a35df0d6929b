//! Signal evaluation interfaces.

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{SignalEngine, MIN_BARS};
pub use rules::{decide, evaluate_rules, RuleInputs, Signal, SignalKind};
pub use scoring::{composite_score, RiskWeights};
