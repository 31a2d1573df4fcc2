use crate::errors::SequenceError;
use crate::types::Flattened;

/// A value that is either a single atom or an ordered sequence of nested
/// values.
///
/// The two variants are the whole classification: there is no runtime
/// "is this iterable" probe. Text enters the union as an atom by
/// construction (`&str` and `String` convert to `Atom`), so it is never
/// split into characters even though it is iterable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<T> {
    /// A single indivisible value.
    Atom(T),
    /// An ordered sequence of nested values.
    Seq(Vec<Value<T>>),
}

impl<T> Value<T> {
    /// Wraps already-nested values as a sequence.
    pub fn seq(items: Vec<Value<T>>) -> Self {
        Value::Seq(items)
    }

    /// True if this value is a single atom.
    pub fn is_atom(&self) -> bool {
        matches!(self, Value::Atom(_))
    }

    /// True if this value is a sequence.
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Returns the atom payload, if this value is one.
    pub fn as_atom(&self) -> Option<&T> {
        match self {
            Value::Atom(value) => Some(value),
            Value::Seq(_) => None,
        }
    }
}

impl From<&str> for Value<String> {
    fn from(text: &str) -> Self {
        Value::Atom(text.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(text: String) -> Self {
        Value::Atom(text)
    }
}

impl<T> From<Vec<T>> for Value<T> {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Value::Atom).collect())
    }
}

/// Flattens a head value and a sequence of tail values into one flat
/// sequence.
///
/// Each input contributes one level: a `Seq` contributes its elements
/// individually (sequences nested inside it are kept as-is), an `Atom`
/// contributes itself. Output order is encounter order, head first, then
/// the tail values in order.
///
/// An absent (`None`) head or tail element fails with
/// [`SequenceError::InvalidInput`].
pub fn flatten<T>(
    head: Option<Value<T>>,
    tail: impl IntoIterator<Item = Option<Value<T>>>,
) -> Result<Flattened<T>, SequenceError> {
    let mut flat = Vec::new();
    let head = head
        .ok_or_else(|| SequenceError::InvalidInput("head value is absent".to_string()))?;
    append_one_level(head, &mut flat);
    for (index, value) in tail.into_iter().enumerate() {
        let value = value.ok_or_else(|| {
            SequenceError::InvalidInput(format!("tail value at index {index} is absent"))
        })?;
        append_one_level(value, &mut flat);
    }
    Ok(flat)
}

fn append_one_level<T>(value: Value<T>, out: &mut Vec<Value<T>>) {
    match value {
        Value::Seq(items) => out.extend(items),
        atom => out.push(atom),
    }
}
