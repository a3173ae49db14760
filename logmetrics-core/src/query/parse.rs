use crate::query::error::QueryFormatError;
use crate::query::types::{Action, Comparison, Query, QUERY_DATE_FORMAT};
use chrono::NaiveDate;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
enum Keyword {
    UsersAccessed,
    Threshold(Action, Comparison),
    ByUserOnDate(Action),
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("usersAccessed", Keyword::UsersAccessed),
    (
        "uploadsGreaterThan",
        Keyword::Threshold(Action::Upload, Comparison::GreaterThan),
    ),
    (
        "uploadsLessThan",
        Keyword::Threshold(Action::Upload, Comparison::LessThan),
    ),
    (
        "downloadsGreaterThan",
        Keyword::Threshold(Action::Download, Comparison::GreaterThan),
    ),
    (
        "downloadsLessThan",
        Keyword::Threshold(Action::Download, Comparison::LessThan),
    ),
    ("uploadsByUser", Keyword::ByUserOnDate(Action::Upload)),
    ("downloadsByUser", Keyword::ByUserOnDate(Action::Download)),
];

/// Second keyword every user/date query must carry.
const ON_DATE: &str = "OnDate";

const USER_TAG: &str = "r[";
const DATE_TAG: &str = "e[";

pub fn parse_query(raw: &str) -> Result<Query, QueryFormatError> {
    // Parameters are opaque, so a user named `usersAccessedBot` is not a keyword.
    let outside = outside_params(raw);

    let mut matched = KEYWORDS
        .iter()
        .filter(|(keyword, _)| outside.contains(*keyword))
        .map(|(_, kind)| *kind);

    // Exactly one keyword family, anything else is unknown or ambiguous.
    let (Some(keyword), None) = (matched.next(), matched.next()) else {
        return Err(QueryFormatError::unsupported(raw));
    };

    match keyword {
        Keyword::UsersAccessed => Ok(Query::UsersAccessed),

        Keyword::Threshold(action, comparison) => {
            let threshold = bracketed(raw)
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| QueryFormatError::InvalidThreshold {
                    query: raw.to_string(),
                })?;

            Ok(Query::SizeThreshold {
                action,
                comparison,
                threshold,
            })
        }

        Keyword::ByUserOnDate(action) => {
            if !outside.contains(ON_DATE) {
                return Err(QueryFormatError::unsupported(raw));
            }
            let (user, date) = user_and_date(raw)?;

            Ok(Query::UserActionOnDate {
                action,
                user: user.to_string(),
                date,
            })
        }
    }
}

/// `raw` with every `[...]` parameter cut out. An unclosed `[` drops the rest.
fn outside_params(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        match rest[open..].find(']') {
            Some(close) => rest = &rest[open + close + 1..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Text between the first `[` and the first `]` that follows it.
fn bracketed(s: &str) -> Option<&str> {
    let start = s.find('[')?;
    let rest = &s[start + 1..];
    let end = rest.find(']')?;
    Some(&rest[..end])
}

fn user_and_date(raw: &str) -> Result<(&str, NaiveDate), QueryFormatError> {
    let missing_user = || QueryFormatError::MissingUser {
        query: raw.to_string(),
    };
    let missing_date = || QueryFormatError::MissingDate {
        query: raw.to_string(),
    };

    let user_open = raw.find(USER_TAG).ok_or_else(missing_user)? + USER_TAG.len();
    let after_user = &raw[user_open..];

    // The date tag is the last one, so a user name may itself contain `e[`.
    let date_open = after_user.rfind(DATE_TAG).ok_or_else(missing_date)?;

    let user_region = &after_user[..date_open];
    let user_end = user_region.rfind(']').ok_or_else(missing_user)?;
    let user = &user_region[..user_end];
    if user.is_empty() {
        return Err(missing_user());
    }

    let date_rest = &after_user[date_open + DATE_TAG.len()..];
    let date_end = date_rest.find(']').ok_or_else(missing_date)?;
    let date = parse_query_date(&date_rest[..date_end]).ok_or_else(|| {
        QueryFormatError::InvalidDate {
            query: raw.to_string(),
            date: date_rest[..date_end].to_string(),
        }
    })?;

    Ok((user, date))
}

/// Fixed width `DD MM YYYY`; chrono alone would also take `1 2 2006`.
fn parse_query_date(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, QUERY_DATE_FORMAT).ok()?;
    (date.format(QUERY_DATE_FORMAT).to_string() == s).then_some(date)
}

impl FromStr for Query {
    type Err = QueryFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_query(s)
    }
}
