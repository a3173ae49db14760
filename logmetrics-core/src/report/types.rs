use crate::aggregate::AggregationState;
use crate::query::{Query, QUERY_DATE_FORMAT};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The answer to one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricReport {
    pub query: Query,
    pub value: u64,
    /// Data rows consumed to get here.
    pub records: u64,
}

impl MetricReport {
    pub fn new(query: Query, state: &AggregationState) -> Self {
        Self {
            value: state.result(&query),
            records: state.records_seen,
            query,
        }
    }
}

impl fmt::Display for MetricReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value;
        match &self.query {
            Query::UsersAccessed => write!(
                f,
                "The number of unique users that have accessed the system is: {value}"
            ),
            Query::SizeThreshold {
                action,
                comparison,
                threshold,
            } => write!(
                f,
                "The number of {} {} {threshold}kB is: {value}",
                action.plural(),
                comparison.symbol()
            ),
            Query::UserActionOnDate { action, user, date } => write!(
                f,
                "The number of {} by {user} on {} is: {value}",
                action.plural(),
                date.format(QUERY_DATE_FORMAT)
            ),
        }
    }
}
