//! Search builders, one per entity kind, on top of the Lucene core.
//!
//! Each builder method both creates a field and registers it in the builder's
//! [`Query`], returning a [`FieldId`] handle. The combinators on
//! [`EntitySearch`] take handles of fields that are already registered and
//! replace them with the combined field:
//!
//! ```
//! use brainz_client::prelude::*;
//!
//! let query = ReleaseGroupSearch::compose(|s| {
//!     let compilation = s.secondary_type(ReleaseGroupType::Compilation);
//!     let interview = s.secondary_type(ReleaseGroupType::Interview);
//!     let either = s.or(compilation, interview);
//!     s.not(either);
//! });
//! assert_eq!(query, "-(secondarytype:Compilation OR secondarytype:Interview)");
//! ```
//!
//! A builder lives for one search: create it, call its operations, render it.

use std::{fmt::Display, marker::PhantomData};

use crate::{
    entity::Entity,
    lucene::{Field, FieldId, Query, QueryError, Render, Term},
};

/// A search key of one entity kind, e.g. `arid` for an artist's MBID. The
/// empty key searches the entity's default fields.
pub trait SearchField: Copy + AsRef<str> {
    fn value(&self) -> &str {
        self.as_ref()
    }
}

/// Scoped helpers handed to the `*_with` builder operations for composing
/// terms that go under a single search key.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermBuilder;

impl TermBuilder {
    pub fn term<T: Into<Term>>(self, value: T) -> Term {
        value.into()
    }

    pub fn single<S: Into<String>>(self, text: S) -> Term {
        Term::single(text)
    }

    pub fn phrase<S: Into<String>>(self, text: S) -> Term {
        Term::phrase(text)
    }

    pub fn raw<S: Into<String>>(self, text: S) -> Term {
        Term::raw(text)
    }

    /// `(a OR b)`, flattened into an existing OR group.
    pub fn or<A: Into<Term>, B: Into<Term>>(self, a: A, b: B) -> Term {
        a.into().or(b)
    }

    /// `(a AND b)`, flattened into an existing AND group.
    pub fn and<A: Into<Term>, B: Into<Term>>(self, a: A, b: B) -> Term {
        a.into().and(b)
    }

    /// `[from TO to]`
    pub fn inclusive<A: Into<Term>, B: Into<Term>>(self, from: A, to: B) -> Term {
        from.into().inclusive(to)
    }

    /// `{from TO to}`
    pub fn exclusive<A: Into<Term>, B: Into<Term>>(self, from: A, to: B) -> Term {
        from.into().exclusive(to)
    }

    /// `value^boost`
    pub fn boost<T: Into<Term>>(self, value: T, boost: u32) -> Term {
        value.into().boost(boost)
    }

    /// `NOT value`
    pub fn not<T: Into<Term>>(self, value: T) -> Term {
        !value.into()
    }
}

/// The query plus the combinators shared by every entity builder.
///
/// The combinators panic when given a handle that is not registered in this
/// query: that can only come from a bug in the calling code, never from user
/// input. [`Query`]'s `try_*` methods return the error instead.
#[derive(Debug, Clone)]
pub struct BaseSearch<F> {
    query: Query,
    marker: PhantomData<F>,
}

impl<F> Default for BaseSearch<F> {
    fn default() -> Self {
        Self {
            query: Query::new(),
            marker: PhantomData,
        }
    }
}

impl<F: SearchField> BaseSearch<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build `key:term` and register it as a top-level field.
    pub fn add<T: Into<Term>>(&mut self, key: F, term: T) -> FieldId {
        self.query.add(Field::new(key.value(), term))
    }

    /// Register `-key:*`, matching only results without a value for `key`.
    pub fn absent(&mut self, key: F) -> FieldId {
        self.query.add(Field::absent(key.value()))
    }

    /// # Panics
    /// If either handle is not registered in this builder, or both are the same handle.
    #[track_caller]
    pub fn and(&mut self, left: FieldId, right: FieldId) -> FieldId {
        match self.query.try_and(left, right) {
            Ok(id) => id,
            Err(err) => misuse(err),
        }
    }

    /// # Panics
    /// If either handle is not registered in this builder, or both are the same handle.
    #[track_caller]
    pub fn or(&mut self, left: FieldId, right: FieldId) -> FieldId {
        match self.query.try_or(left, right) {
            Ok(id) => id,
            Err(err) => misuse(err),
        }
    }

    /// # Panics
    /// If the handle is not registered in this builder.
    #[track_caller]
    pub fn require(&mut self, id: FieldId) -> FieldId {
        match self.query.try_require(id) {
            Ok(id) => id,
            Err(err) => misuse(err),
        }
    }

    /// # Panics
    /// If the handle is not registered in this builder.
    #[track_caller]
    pub fn prohibit(&mut self, id: FieldId) -> FieldId {
        match self.query.try_prohibit(id) {
            Ok(id) => id,
            Err(err) => misuse(err),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

impl<F> Display for BaseSearch<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query.render())
    }
}

#[cold]
#[track_caller]
fn misuse(err: QueryError) -> ! {
    panic!("search combinator misuse: {}", err)
}

/// The usage contract shared by every entity builder: populate through the
/// entity's own operations, combine with the methods below, then [`build`].
///
/// [`build`]: EntitySearch::build
pub trait EntitySearch: Default + Display {
    type Field: SearchField;

    /// The entity kind this builder searches.
    const ENTITY: Entity;

    fn base(&self) -> &BaseSearch<Self::Field>;

    fn base_mut(&mut self) -> &mut BaseSearch<Self::Field>;

    /// Register `key:term`. Prefer the entity's named operations.
    fn add<T: Into<Term>>(&mut self, key: Self::Field, term: T) -> FieldId {
        self.base_mut().add(key, term)
    }

    /// Register `-key:*` for results that have no value for `key`.
    fn absent(&mut self, key: Self::Field) -> FieldId {
        self.base_mut().absent(key)
    }

    /// Replace `left` with `(left AND right)` and drop `right`'s own entry.
    #[track_caller]
    fn and(&mut self, left: FieldId, right: FieldId) -> FieldId {
        self.base_mut().and(left, right)
    }

    /// Replace `left` with `(left OR right)` and drop `right`'s own entry.
    #[track_caller]
    fn or(&mut self, left: FieldId, right: FieldId) -> FieldId {
        self.base_mut().or(left, right)
    }

    /// Replace the field with `+field`.
    #[track_caller]
    fn require(&mut self, id: FieldId) -> FieldId {
        self.base_mut().require(id)
    }

    /// Replace the field with `-field`.
    #[track_caller]
    fn prohibit(&mut self, id: FieldId) -> FieldId {
        self.base_mut().prohibit(id)
    }

    /// Same as [`EntitySearch::prohibit`].
    #[track_caller]
    fn not(&mut self, id: FieldId) -> FieldId {
        self.base_mut().prohibit(id)
    }

    fn query(&self) -> &Query {
        self.base().query()
    }

    /// Render the query string.
    fn build(&self) -> String {
        let rendered = self.base().query().render();
        brainz_log!(debug, "Search", Self::ENTITY, "query={}", rendered);
        rendered
    }

    /// Create a builder, let `populate` fill it and render the result.
    fn compose<B: FnOnce(&mut Self)>(populate: B) -> String {
        let mut search = Self::default();
        populate(&mut search);
        search.build()
    }
}

/// Declares an entity builder struct wired to its search key enum.
macro_rules! entity_search {
    ($(#[$doc:meta])* $name:ident($entity:expr, $field:ty)) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            base: $crate::search::BaseSearch<$field>,
        }

        impl $crate::search::EntitySearch for $name {
            type Field = $field;
            const ENTITY: $crate::entity::Entity = $entity;

            fn base(&self) -> &$crate::search::BaseSearch<$field> {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::search::BaseSearch<$field> {
                &mut self.base
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.base, f)
            }
        }
    };
}

/// Generates a value operation and a `*_with` closure operation per search key.
macro_rules! search_ops {
    ($field:ident; $($(#[$doc:meta])* $op:ident, $with:ident => $key:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $op<V: Into<$ty>>(&mut self, value: V) -> $crate::lucene::FieldId {
                let value: $ty = value.into();
                $crate::search::EntitySearch::add(self, $field::$key, value)
            }

            $(#[$doc])*
            pub fn $with<B>(&mut self, build: B) -> $crate::lucene::FieldId
            where
                B: FnOnce($crate::search::TermBuilder) -> $crate::lucene::Term,
            {
                let term = build($crate::search::TermBuilder);
                $crate::search::EntitySearch::add(self, $field::$key, term)
            }
        )*
    };
}

mod annotation;
mod area;
mod artist;
mod cdstub;
mod event;
mod instrument;
mod label;
mod place;
mod recording;
mod release;
mod release_group;
mod series;
mod tag;
mod work;

pub use annotation::{AnnotationField, AnnotationSearch};
pub use area::{AreaField, AreaSearch};
pub use artist::{ArtistField, ArtistSearch};
pub use cdstub::{CdStubField, CdStubSearch};
pub use event::{EventField, EventSearch};
pub use instrument::{InstrumentField, InstrumentSearch};
pub use label::{LabelField, LabelSearch};
pub use place::{PlaceField, PlaceSearch};
pub use recording::{RecordingField, RecordingSearch};
pub use release::{ReleaseField, ReleaseSearch};
pub use release_group::{ReleaseGroupField, ReleaseGroupSearch};
pub use series::{SeriesField, SeriesSearch};
pub use tag::{TagField, TagSearch};
pub use work::{WorkField, WorkSearch};


#[cfg(test)]
pub(crate) mod test_support {
    use strum::IntoEnumIterator;

    use super::SearchField;

    /// Each non-default key of `F` must appear once as `key:value`, and whatever
    /// is left over must be the bare `value` contributed by the default key.
    pub(crate) fn assert_covers_all_keys<F>(rendered: &str, value: &str)
    where
        F: SearchField + IntoEnumIterator,
    {
        let mut rest = format!(" {} ", rendered);
        for key in F::iter().filter(|key| !key.value().is_empty()) {
            let expected = format!(" {}:{} ", key.value(), value);
            assert!(
                rest.contains(&expected),
                "missing `{}` in {}",
                expected.trim(),
                rendered
            );
            rest = rest.replacen(&expected, " ", 1);
        }
        assert_eq!(rest.trim(), value);
    }
}
