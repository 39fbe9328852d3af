//! Stateful hill-climbing engine
//!
//! - [`Propagation`]: the step-driven engine holding the best and current records
//! - [`SearchStrategy`]: parent generation, mutation, scoring and observers
//! - [`SimpleStrategy`]: a strategy assembled from closures

pub mod engine;
pub mod record;
pub mod strategy;

pub use engine::Propagation;
pub use record::PropagationRecord;
pub use strategy::{SearchStrategy, SimpleStrategy, StrategyRecord};
