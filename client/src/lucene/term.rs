use std::{
    fmt::Display,
    ops::Not,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, NaiveDate, Utc};

use crate::lucene::render::{render_group, Render};

/// Characters with a meaning in the Lucene query syntax. Inside an unquoted
/// token each of these (and any whitespace) is preceded by a backslash.
pub const RESERVED: &[char] = &[
    '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\',
    '/',
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Escape every reserved character and whitespace in `text` with a backslash.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if RESERVED.contains(&c) || c.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Inside a quoted phrase only the quote and the escape character itself are special.
fn escape_phrase(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// The closed set of value kinds a [`Term`] can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum TermValue {
    /// Free text; quoted when it contains whitespace, escaped otherwise.
    Text(String),
    Int(i32),
    Long(i64),
    Float(f64),
    Bool(bool),
    /// A year on its own, e.g. `1969`.
    Year(i32),
    /// A calendar date without a time component.
    Date(NaiveDate),
    /// A point in time; only its UTC calendar day is searched on.
    Instant(SystemTime),
    /// An MBID or similar identifier, never escaped.
    Id(String),
    /// Already valid query syntax, written as-is.
    Raw(String),
}

/// One value in a Lucene query: a single token, a quoted phrase, or a compound
/// built from other terms.
///
/// Terms are immutable; every operation returns a new term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Unquoted token, reserved characters are escaped when rendered.
    Single(String),
    /// Double-quoted phrase.
    Phrase(String),
    /// Rendered verbatim.
    Raw(String),
    /// `(a AND b AND c)`
    And(Vec<Term>),
    /// `(a OR b OR c)`
    Or(Vec<Term>),
    /// `+term`
    Require(Box<Term>),
    /// `NOT term`
    Not(Box<Term>),
    /// `term^boost`, raising the term's relevance.
    Boost { term: Box<Term>, boost: u32 },
    /// `-term`
    Prohibit(Box<Term>),
    /// `[from TO to]` when inclusive, `{from TO to}` otherwise.
    Range {
        from: Box<Term>,
        to: Box<Term>,
        inclusive: bool,
    },
}

impl Term {
    /// Build a term from any supported value kind. Never fails.
    pub fn make<V: Into<TermValue>>(value: V) -> Self {
        match value.into() {
            TermValue::Text(text) => Self::text(&text),
            TermValue::Int(n) => Self::number(i64::from(n)),
            TermValue::Long(n) => Self::number(n),
            TermValue::Float(n) => Term::Phrase(n.to_string()),
            TermValue::Bool(b) => Term::Single(b.to_string()),
            TermValue::Year(year) => Term::Single(year.to_string()),
            TermValue::Date(date) => Term::Phrase(date.format(DATE_FORMAT).to_string()),
            TermValue::Instant(instant) => {
                Term::Phrase(utc_day(instant).format(DATE_FORMAT).to_string())
            }
            TermValue::Id(id) | TermValue::Raw(id) => Term::Raw(id),
        }
    }

    /// A [`Term::Phrase`] if the trimmed text contains whitespace (or is empty),
    /// otherwise a [`Term::Single`].
    pub fn text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            Term::Phrase(trimmed.to_string())
        } else {
            Term::Single(trimmed.to_string())
        }
    }

    // A leading minus would read as the prohibit operator, so negatives are quoted.
    fn number(n: i64) -> Self {
        if n < 0 {
            Term::Phrase(n.to_string())
        } else {
            Term::Single(n.to_string())
        }
    }

    pub fn single<S: Into<String>>(text: S) -> Self {
        Term::Single(text.into())
    }

    pub fn phrase<S: Into<String>>(text: S) -> Self {
        Term::Phrase(text.into())
    }

    pub fn raw<S: Into<String>>(text: S) -> Self {
        Term::Raw(text.into())
    }

    /// Combine into a flat AND group, appending to an existing group on either side.
    pub fn and<T: Into<Term>>(self, other: T) -> Self {
        match (self, other.into()) {
            (Term::And(mut left), Term::And(right)) => {
                left.extend(right);
                Term::And(left)
            }
            (Term::And(mut left), right) => {
                left.push(right);
                Term::And(left)
            }
            (left, Term::And(right)) => {
                let mut terms = Vec::with_capacity(right.len() + 1);
                terms.push(left);
                terms.extend(right);
                Term::And(terms)
            }
            (left, right) => Term::And(vec![left, right]),
        }
    }

    /// Combine into a flat OR group, appending to an existing group on either side.
    pub fn or<T: Into<Term>>(self, other: T) -> Self {
        match (self, other.into()) {
            (Term::Or(mut left), Term::Or(right)) => {
                left.extend(right);
                Term::Or(left)
            }
            (Term::Or(mut left), right) => {
                left.push(right);
                Term::Or(left)
            }
            (left, Term::Or(right)) => {
                let mut terms = Vec::with_capacity(right.len() + 1);
                terms.push(left);
                terms.extend(right);
                Term::Or(terms)
            }
            (left, right) => Term::Or(vec![left, right]),
        }
    }

    /// Mark the term as required. Replaces an existing `+`/`-` prefix.
    pub fn require(self) -> Self {
        Term::Require(Box::new(self.undecorated()))
    }

    /// Mark the term as prohibited. Replaces an existing `+`/`-` prefix.
    pub fn prohibit(self) -> Self {
        Term::Prohibit(Box::new(self.undecorated()))
    }

    /// `term^boost`. Boosting an already boosted term replaces its factor.
    pub fn boost(self, boost: u32) -> Self {
        let term = match self {
            Term::Boost { term, .. } => term,
            other => Box::new(other),
        };
        Term::Boost { term, boost }
    }

    pub fn inclusive<T: Into<Term>>(self, to: T) -> Self {
        Term::Range {
            from: Box::new(self),
            to: Box::new(to.into()),
            inclusive: true,
        }
    }

    pub fn exclusive<T: Into<Term>>(self, to: T) -> Self {
        Term::Range {
            from: Box::new(self),
            to: Box::new(to.into()),
            inclusive: false,
        }
    }

    fn undecorated(self) -> Self {
        match self {
            Term::Require(inner) | Term::Prohibit(inner) => *inner,
            other => other,
        }
    }
}

impl Render for Term {
    fn render_into(&self, out: &mut String) {
        match self {
            Term::Single(text) if text.is_empty() => out.push_str("\"\""),
            Term::Single(text) => out.push_str(&escape(text)),
            Term::Phrase(text) => {
                out.push('"');
                out.push_str(&escape_phrase(text));
                out.push('"');
            }
            Term::Raw(text) => out.push_str(text),
            Term::And(terms) => render_group(out, '(', " AND ", terms, ')'),
            Term::Or(terms) => render_group(out, '(', " OR ", terms, ')'),
            Term::Require(inner) => {
                out.push('+');
                inner.render_into(out);
            }
            Term::Prohibit(inner) => {
                out.push('-');
                inner.render_into(out);
            }
            Term::Not(inner) => {
                out.push_str("NOT ");
                inner.render_into(out);
            }
            Term::Boost { term, boost } => {
                term.render_into(out);
                out.push('^');
                out.push_str(&boost.to_string());
            }
            Term::Range {
                from,
                to,
                inclusive,
            } => {
                out.push(if *inclusive { '[' } else { '{' });
                from.render_into(out);
                out.push_str(" TO ");
                to.render_into(out);
                out.push(if *inclusive { ']' } else { '}' });
            }
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// `!term` renders `NOT term`.
impl Not for Term {
    type Output = Term;

    fn not(self) -> Term {
        Term::Not(Box::new(self))
    }
}

// The UTC calendar day of `instant`, clamped to the representable date range.
fn utc_day(instant: SystemTime) -> NaiveDate {
    let (seconds, after_epoch) = match instant.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (i64::try_from(elapsed.as_secs()).ok(), true),
        Err(err) => {
            let before = err.duration();
            let whole = i64::try_from(before.as_secs()).ok();
            // a fraction of a second before midnight still belongs to the previous day
            let seconds = whole.and_then(|s| s.checked_add(i64::from(before.subsec_nanos() > 0)));
            (seconds.and_then(i64::checked_neg), false)
        }
    };
    match seconds.and_then(|s| DateTime::<Utc>::from_timestamp(s, 0)) {
        Some(datetime) => datetime.date_naive(),
        None if after_epoch => NaiveDate::MAX,
        None => NaiveDate::MIN,
    }
}

impl From<TermValue> for Term {
    fn from(value: TermValue) -> Self {
        Term::make(value)
    }
}

/// Implements `From<$ty> for TermValue` and `From<$ty> for Term` in one go.
macro_rules! impl_term_value {
    ($($ty:ty => |$v:ident| $body:expr;)*) => {
        $(
            impl From<$ty> for $crate::lucene::TermValue {
                fn from($v: $ty) -> Self {
                    $body
                }
            }

            impl From<$ty> for $crate::lucene::Term {
                fn from(value: $ty) -> Self {
                    $crate::lucene::Term::make(value)
                }
            }
        )*
    };
}
pub(crate) use impl_term_value;

impl_term_value! {
    &str => |v| TermValue::Text(v.to_string());
    String => |v| TermValue::Text(v);
    &String => |v| TermValue::Text(v.clone());
    i32 => |v| TermValue::Int(v);
    u32 => |v| TermValue::Long(i64::from(v));
    i64 => |v| TermValue::Long(v);
    f64 => |v| TermValue::Float(v);
    bool => |v| TermValue::Bool(v);
    NaiveDate => |v| TermValue::Date(v);
    SystemTime => |v| TermValue::Instant(v);
}
