use chrono::NaiveDate;
use std::fmt;

/// Date layout used inside `OnDate[...]`, e.g. `01 02 2006`.
pub const QUERY_DATE_FORMAT: &str = "%d %m %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Upload,
    Download,
}

impl Action {
    /// Maps the log's `action` column. Anything other than the exact lowercase
    /// `upload` / `download` is not an action we count.
    pub fn from_field(s: &str) -> Option<Self> {
        match s {
            "upload" => Some(Action::Upload),
            "download" => Some(Action::Download),
            _ => None,
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Action::Upload => "uploads",
            Action::Download => "downloads",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    LessThan,
    GreaterThan,
}

impl Comparison {
    /// Strict comparison, equality never matches.
    pub fn holds(self, size_kb: u64, threshold: i64) -> bool {
        let size = i128::from(size_kb);
        let threshold = i128::from(threshold);
        match self {
            Comparison::LessThan => size < threshold,
            Comparison::GreaterThan => size > threshold,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::LessThan => "<",
            Comparison::GreaterThan => ">",
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Comparison::LessThan => "LessThan",
            Comparison::GreaterThan => "GreaterThan",
        }
    }
}

/// Parsed intent of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    UsersAccessed,
    SizeThreshold {
        action: Action,
        comparison: Comparison,
        threshold: i64,
    },
    UserActionOnDate {
        action: Action,
        user: String,
        date: NaiveDate,
    },
}

impl Query {
    pub fn kind(&self) -> &'static str {
        match self {
            Query::UsersAccessed => "users_accessed",
            Query::SizeThreshold { .. } => "size_threshold",
            Query::UserActionOnDate { .. } => "user_action_on_date",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::UsersAccessed => f.write_str("usersAccessed"),
            Query::SizeThreshold {
                action,
                comparison,
                threshold,
            } => write!(f, "{}{}[{threshold}]", action.plural(), comparison.keyword()),
            Query::UserActionOnDate { action, user, date } => write!(
                f,
                "{}ByUser[{user}]OnDate[{}]",
                action.plural(),
                date.format(QUERY_DATE_FORMAT)
            ),
        }
    }
}
