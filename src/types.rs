use crate::flatten::Value;

/// A single cartesian-product tuple; position `i` holds an element drawn
/// from input sequence `i`.
/// Example: `vec![1, 3]` from inputs `[[1, 2], [3, 4]]`.
pub type Tuple<T> = Vec<T>;

/// Flat result of a one-level flatten pass.
/// Example: `[Atom("The"), Atom("cat"), Atom("sat")]`.
pub type Flattened<T> = Vec<Value<T>>;
