use std::fmt::Display;

use crate::lucene::{
    render::{render_group, render_joined, Render},
    Term,
};

/// A named predicate (`name:term`) or a composite built from other fields.
///
/// Lucene scopes a field name to the single term that follows it, so
/// `title:The Right Way` only searches `title` for "The". Multi-word values
/// must be quoted or grouped, which [`Term`] and [`Field::with_terms`] take care of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// `name:term`, or `name:(t1 t2)` for several terms. An empty name searches
    /// the default field and renders the bare term(s). Without any term the leaf
    /// matches documents lacking the field: `-name:*`.
    Leaf { name: String, terms: Vec<Term> },
    /// `(a AND b AND c)`
    And(Vec<Field>),
    /// `(a OR b OR c)`
    Or(Vec<Field>),
    /// `+field`
    Require(Box<Field>),
    /// `-field`
    Prohibit(Box<Field>),
}

impl Field {
    pub fn new<N: Into<String>, T: Into<Term>>(name: N, term: T) -> Self {
        Field::Leaf {
            name: name.into(),
            terms: vec![term.into()],
        }
    }

    /// Matches only documents that have no value for `name`.
    pub fn absent<N: Into<String>>(name: N) -> Self {
        Field::Leaf {
            name: name.into(),
            terms: Vec::new(),
        }
    }

    /// A leaf searching `name` for any of several terms.
    pub fn with_terms<N, I>(name: N, first: Term, rest: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = Term>,
    {
        let mut terms = vec![first];
        terms.extend(rest);
        Field::Leaf {
            name: name.into(),
            terms,
        }
    }

    /// Combine into a flat AND group, appending to an existing group on either side.
    pub fn and(self, other: Field) -> Self {
        match (self, other) {
            (Field::And(mut left), Field::And(right)) => {
                left.extend(right);
                Field::And(left)
            }
            (Field::And(mut left), right) => {
                left.push(right);
                Field::And(left)
            }
            (left, Field::And(right)) => {
                let mut fields = Vec::with_capacity(right.len() + 1);
                fields.push(left);
                fields.extend(right);
                Field::And(fields)
            }
            (left, right) => Field::And(vec![left, right]),
        }
    }

    /// Combine into a flat OR group, appending to an existing group on either side.
    pub fn or(self, other: Field) -> Self {
        match (self, other) {
            (Field::Or(mut left), Field::Or(right)) => {
                left.extend(right);
                Field::Or(left)
            }
            (Field::Or(mut left), right) => {
                left.push(right);
                Field::Or(left)
            }
            (left, Field::Or(right)) => {
                let mut fields = Vec::with_capacity(right.len() + 1);
                fields.push(left);
                fields.extend(right);
                Field::Or(fields)
            }
            (left, right) => Field::Or(vec![left, right]),
        }
    }

    /// `+field`. An existing `+`/`-` prefix is replaced rather than stacked.
    pub fn require(self) -> Self {
        Field::Require(Box::new(self.undecorated()))
    }

    /// `-field`. An existing `+`/`-` prefix is replaced rather than stacked.
    pub fn prohibit(self) -> Self {
        Field::Prohibit(Box::new(self.undecorated()))
    }

    fn undecorated(self) -> Self {
        match self {
            Field::Require(inner) | Field::Prohibit(inner) => *inner,
            other => other,
        }
    }
}

impl Render for Field {
    fn render_into(&self, out: &mut String) {
        match self {
            Field::Leaf { name, terms } if terms.is_empty() => {
                out.push('-');
                out.push_str(name);
                out.push_str(":*");
            }
            Field::Leaf { name, terms } => {
                if !name.is_empty() {
                    out.push_str(name);
                    out.push(':');
                }
                if terms.len() > 1 {
                    render_group(out, '(', " ", terms, ')');
                } else {
                    render_joined(out, " ", terms);
                }
            }
            Field::And(fields) => render_group(out, '(', " AND ", fields, ')'),
            Field::Or(fields) => render_group(out, '(', " OR ", fields, ')'),
            Field::Require(inner) => {
                out.push('+');
                inner.render_into(out);
            }
            Field::Prohibit(inner) => {
                out.push('-');
                inner.render_into(out);
            }
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(title: &str) -> Field {
        Field::new("album", title)
    }

    fn beatles() -> Field {
        Field::new("artist", "The Beatles")
    }

    #[test]
    fn test_leaf_field() {
        assert_eq!(
            Field::new("title", "The Right Way").render(),
            "title:\"The Right Way\""
        );
        assert_eq!(album("Aqualung").render(), "album:Aqualung");
        assert_eq!(Field::new("ended", true).render(), "ended:true");
        assert_eq!(
            Field::new("text", Term::make("Hello").require()).render(),
            "text:+Hello"
        );
        assert_eq!(
            Field::new("date", Term::make("20200102").inclusive("20200104")).render(),
            "date:[20200102 TO 20200104]"
        );
    }

    #[test]
    fn test_default_field_has_no_colon() {
        assert_eq!(Field::new("", "Aqualung").render(), "Aqualung");
        assert_eq!(Field::new("", "Thick as a Brick").render(), "\"Thick as a Brick\"");
    }

    #[test]
    fn test_multiple_terms() {
        let field = Field::with_terms(
            "title",
            Term::make("The Right Way"),
            [Term::make("Up Again"), Term::make("And Again")],
        );
        assert_eq!(
            field.render(),
            "title:(\"The Right Way\" \"Up Again\" \"And Again\")"
        );
        let field = Field::with_terms(
            "title",
            Term::make("The Right Way"),
            [Term::make("Up Again").prohibit()],
        );
        assert_eq!(field.render(), "title:(\"The Right Way\" -\"Up Again\")");
    }

    #[test]
    fn test_and_or_fields() {
        assert_eq!(
            album("Revolver").and(beatles()).render(),
            "(album:Revolver AND artist:\"The Beatles\")"
        );
        assert_eq!(
            album("Revolver").or(beatles()).render(),
            "(album:Revolver OR artist:\"The Beatles\")"
        );
    }

    #[test]
    fn test_and_flattens_left_and_right() {
        let left = Field::new("a", "1").and(Field::new("b", "2"));
        assert_eq!(
            left.clone().and(Field::new("c", "3")).render(),
            "(a:1 AND b:2 AND c:3)"
        );
        assert_eq!(
            Field::new("c", "3").and(left.clone()).render(),
            "(c:3 AND a:1 AND b:2)"
        );
        let right = Field::new("c", "3").and(Field::new("d", "4"));
        assert_eq!(left.and(right).render(), "(a:1 AND b:2 AND c:3 AND d:4)");
    }

    #[test]
    fn test_and_or_nest_without_merging() {
        let either = album("Revolver").or(album("Rubber Soul"));
        assert_eq!(
            beatles().and(either).render(),
            "(artist:\"The Beatles\" AND (album:Revolver OR album:\"Rubber Soul\"))"
        );
        let both = beatles().and(album("Revolver"));
        assert_eq!(
            both.or(album("Rubber Soul")).render(),
            "((artist:\"The Beatles\" AND album:Revolver) OR album:\"Rubber Soul\")"
        );
    }

    #[test]
    fn test_decorators_replace_instead_of_stacking() {
        let field = album("Revolver");
        assert_eq!(field.clone().prohibit().render(), "-album:Revolver");
        assert_eq!(
            field.clone().prohibit().prohibit().render(),
            field.clone().prohibit().render()
        );
        assert_eq!(field.clone().require().require().render(), "+album:Revolver");
        assert_eq!(field.prohibit().require().render(), "+album:Revolver");
    }

    #[test]
    fn test_decorated_group_keeps_parentheses() {
        let either = Field::new("secondarytype", "Compilation")
            .or(Field::new("secondarytype", "Interview"));
        assert_eq!(
            either.prohibit().render(),
            "-(secondarytype:Compilation OR secondarytype:Interview)"
        );
    }

    #[test]
    fn test_absent_field() {
        assert_eq!(Field::absent("comment").render(), "-comment:*");
        let either = Field::new("comment", "live").or(Field::absent("comment"));
        assert_eq!(either.render(), "(comment:live OR -comment:*)");
    }
}
