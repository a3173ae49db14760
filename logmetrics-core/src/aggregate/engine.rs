use crate::aggregate::state::AggregationState;
use crate::query::Query;
use crate::record::{LogRecord, RecordFormatError};

/// Applies the update rule of one query to records as they arrive.
pub struct Aggregator<'q> {
    query: &'q Query,
    state: AggregationState,
}

impl<'q> Aggregator<'q> {
    pub fn new(query: &'q Query) -> Self {
        Self {
            query,
            state: AggregationState::new(),
        }
    }

    pub fn observe(&mut self, record: &LogRecord) {
        self.state.records_seen += 1;

        // Kept for every query kind, only read back for usersAccessed.
        if !self.state.unique_users.contains(&record.user) {
            self.state.unique_users.insert(record.user.clone());
        }

        if matches(self.query, record) {
            self.state.match_count += 1;
        }
    }

    pub fn into_state(self) -> AggregationState {
        self.state
    }
}

fn matches(query: &Query, record: &LogRecord) -> bool {
    match query {
        Query::UsersAccessed => false,

        Query::SizeThreshold {
            action,
            comparison,
            threshold,
        } => record.action == Some(*action) && comparison.holds(record.size_kb, *threshold),

        Query::UserActionOnDate { action, user, date } => {
            record.action == Some(*action) && record.user == *user && record.date() == *date
        }
    }
}

/// Run `query` over `records` in a single pass, stopping at the first error.
pub fn aggregate<I>(query: &Query, records: I) -> Result<AggregationState, RecordFormatError>
where
    I: IntoIterator<Item = Result<LogRecord, RecordFormatError>>,
{
    let mut aggregator = Aggregator::new(query);
    for record in records {
        aggregator.observe(&record?);
    }
    Ok(aggregator.into_state())
}
