use crate::query::Query;
use std::collections::HashSet;

/// Running totals for one pass. Every field only ever grows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregationState {
    pub unique_users: HashSet<String>,
    pub match_count: u64,
    pub records_seen: u64,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The metric `query` asks for.
    pub fn result(&self, query: &Query) -> u64 {
        match query {
            Query::UsersAccessed => self.unique_users.len() as u64,
            Query::SizeThreshold { .. } | Query::UserActionOnDate { .. } => self.match_count,
        }
    }
}
