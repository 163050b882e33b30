use std::{
    fmt::Display,
    sync::atomic::{AtomicU32, Ordering},
};

use crate::lucene::{render::Render, Field, Term};

static NEXT_QUERY: AtomicU32 = AtomicU32::new(0);

/// Handle to a field stored in a [`Query`].
///
/// Handles are only meaningful for the query that issued them. A handle stops
/// being registered once its field has been removed, replaced, or consumed by a
/// combinator; the combinator hands back a new handle for the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    query: u32,
    index: usize,
}

impl Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}.{}", self.query, self.index)
    }
}

/// Describes a combinator applied to fields the query does not currently hold
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("field {0} is not registered in this query")]
    Unregistered(FieldId),
    #[error("field {0} was issued by another query")]
    ForeignHandle(FieldId),
    #[error("field {0} cannot be combined with itself")]
    SelfCombination(FieldId),
}

///
/// Query is the ordered collection of top-level fields for a single search.
///
/// Fields live in an arena and are addressed by a [`FieldId`] carrying the
/// issuing query's id; `entries` lists the handles that are currently part of
/// the query, in insertion order. A slot is emptied as soon as its field is
/// removed or consumed. Rendering joins the entries with a single space, which
/// the remote service reads as an implicit AND.
///
#[derive(Debug, Clone)]
pub struct Query {
    /// Distinguishes this query's handles from every other query's
    owner: u32,
    /// Fields created through this query; `None` once removed or consumed
    arena: Vec<Option<Field>>,
    /// Registered handles in rendering order
    entries: Vec<FieldId>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            owner: NEXT_QUERY.fetch_add(1, Ordering::Relaxed),
            arena: Vec::new(),
            entries: Vec::new(),
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query of leaf fields from `(name, value)` pairs.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Term>,
    {
        pairs
            .into_iter()
            .map(|(name, value)| Field::new(name, value))
            .collect()
    }

    /// Register `field` as a new top-level entry.
    pub fn add(&mut self, field: Field) -> FieldId {
        let id = self.store(field);
        self.entries.push(id);
        id
    }

    /// Unregister `id` and drop its field. Returns false if it was not registered.
    pub fn remove(&mut self, id: FieldId) -> bool {
        self.detach(id).is_some()
    }

    /// Put `replacement` where `original` was, or append it if `original` is not registered.
    pub fn replace(&mut self, original: FieldId, replacement: Field) -> FieldId {
        let id = self.store(replacement);
        match self.position(original) {
            Some(index) => {
                self.entries[index] = id;
                self.arena[original.index] = None;
            }
            None => self.entries.push(id),
        }
        id
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.position(id).is_some()
    }

    /// The field behind `id` while it is registered.
    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.position(id)?;
        self.arena[id.index].as_ref()
    }

    /// Registered fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> + '_ {
        self.entries
            .iter()
            .filter_map(move |id| self.arena[id.index].as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace `left` with the AND group of `left` and `right`, dropping `right`'s own entry.
    pub fn try_and(&mut self, left: FieldId, right: FieldId) -> Result<FieldId, QueryError> {
        self.combine(left, right, Field::and)
    }

    /// Replace `left` with the OR group of `left` and `right`, dropping `right`'s own entry.
    pub fn try_or(&mut self, left: FieldId, right: FieldId) -> Result<FieldId, QueryError> {
        self.combine(left, right, Field::or)
    }

    /// Replace `id` in place with its required (`+`) form.
    pub fn try_require(&mut self, id: FieldId) -> Result<FieldId, QueryError> {
        self.decorate(id, Field::require)
    }

    /// Replace `id` in place with its prohibited (`-`) form.
    pub fn try_prohibit(&mut self, id: FieldId) -> Result<FieldId, QueryError> {
        self.decorate(id, Field::prohibit)
    }

    fn combine(
        &mut self,
        left: FieldId,
        right: FieldId,
        op: fn(Field, Field) -> Field,
    ) -> Result<FieldId, QueryError> {
        self.check(left)?;
        self.check(right)?;
        if left == right {
            return Err(QueryError::SelfCombination(left));
        }
        let right_field = self.detach(right).ok_or(QueryError::Unregistered(right))?;
        let left_field = self.take(left).ok_or(QueryError::Unregistered(left))?;
        Ok(self.replace(left, op(left_field, right_field)))
    }

    fn decorate(&mut self, id: FieldId, op: fn(Field) -> Field) -> Result<FieldId, QueryError> {
        self.check(id)?;
        let field = self.take(id).ok_or(QueryError::Unregistered(id))?;
        Ok(self.replace(id, op(field)))
    }

    fn check(&self, id: FieldId) -> Result<(), QueryError> {
        if id.query != self.owner {
            Err(QueryError::ForeignHandle(id))
        } else if !self.contains(id) {
            Err(QueryError::Unregistered(id))
        } else {
            Ok(())
        }
    }

    // Moves the field out of its slot and leaves the entry registered.
    fn take(&mut self, id: FieldId) -> Option<Field> {
        self.position(id)?;
        self.arena[id.index].take()
    }

    // Unregisters the entry and moves its field out.
    fn detach(&mut self, id: FieldId) -> Option<Field> {
        let index = self.position(id)?;
        self.entries.remove(index);
        self.arena[id.index].take()
    }

    fn store(&mut self, field: Field) -> FieldId {
        self.arena.push(Some(field));
        FieldId {
            query: self.owner,
            index: self.arena.len() - 1,
        }
    }

    fn position(&self, id: FieldId) -> Option<usize> {
        if id.query != self.owner {
            return None;
        }
        self.entries.iter().position(|entry| *entry == id)
    }
}

impl FromIterator<Field> for Query {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut query = Query::new();
        for field in iter {
            query.add(field);
        }
        query
    }
}

impl Render for Query {
    fn render_into(&self, out: &mut String) {
        for (index, field) in self.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            field.render_into(out);
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
