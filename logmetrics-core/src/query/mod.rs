//! Query Interpreter
//!
//! A metrics query is a single free-form string such as `usersAccessed` or
//! `uploadsGreaterThan[500]`. The vocabulary is closed and small, so instead of a
//! general parser this module scans for one of a handful of keywords and pulls
//! bracketed parameters out of the rest of the string.
//!
//! Supported forms:
//!
//! usersAccessed
//! uploadsGreaterThan[N]      uploadsLessThan[N]
//! downloadsGreaterThan[N]    downloadsLessThan[N]
//! uploadsByUser[USER]OnDate[DD MM YYYY]
//! downloadsByUser[USER]OnDate[DD MM YYYY]
//!
//! The user/date forms also accept `uploadsByUserOnDate{r[USER]e[DD MM YYYY]}`.
//! What matters is the `r[...]` and `e[...]` sub-tags.

mod error;
mod parse;
mod types;

pub use error::QueryFormatError;
pub use parse::parse_query;
pub use types::{Action, Comparison, QUERY_DATE_FORMAT, Query};
