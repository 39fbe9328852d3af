//! Problem-specific fitness calculators for the propagate engine
//!
//! - [`ArrayMatch`]: how many positions agree with a target sequence
//! - [`ArrayOrder`]: how close a sequence is to being sorted
//! - [`TargetGenerator`]: random targets for [`ArrayMatch`] problems

pub mod array_match;
pub mod array_order;
pub mod target;

pub use array_match::ArrayMatch;
pub use array_order::{ArrayOrder, ArrayOrderFitness, GeneDistance, OrderValue};
pub use target::TargetGenerator;
