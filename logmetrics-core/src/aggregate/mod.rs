//! Aggregation Engine
//!
//! One pass over the record stream, front to back. Each record is looked at
//! once and then dropped; the only thing that survives between records is an
//! [`AggregationState`]:
//!
//! records
//! Aggregator::observe
//! AggregationState
//! AggregationState::result
//! MetricReport
//!
//! The first malformed record aborts the pass. There is no skip-and-continue,
//! a count computed over part of a corrupt log is never reported.

mod engine;
mod state;

pub use engine::{Aggregator, aggregate};
pub use state::AggregationState;
