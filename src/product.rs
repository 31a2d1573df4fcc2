use crate::types::Tuple;

/// Builds the n-ary cartesian product of `sequences`.
///
/// The result is a left fold starting from a single empty tuple (the
/// multiplicative identity): each input sequence cross-joins the running
/// accumulator, appending each of its elements to each accumulated tuple.
/// Tuples come out in row-major order, the last input varying fastest.
///
/// The product of zero sequences is the single empty tuple; any empty input
/// sequence collapses the whole result to nothing.
pub fn cartesian_product<T: Clone>(sequences: &[Vec<T>]) -> Vec<Tuple<T>> {
    let identity: Vec<Tuple<T>> = vec![Vec::new()];
    sequences.iter().fold(identity, |accumulator, sequence| {
        accumulator
            .iter()
            .flat_map(|tuple| {
                sequence.iter().map(|item| {
                    let mut extended = tuple.clone();
                    extended.push(item.clone());
                    extended
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_come_out_in_row_major_order() {
        let product = cartesian_product(&[vec![1, 2], vec![3, 4]]);
        assert_eq!(product, vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]);
    }

    #[test]
    fn zero_sequences_yield_the_identity_tuple() {
        let product: Vec<Tuple<u8>> = cartesian_product(&[]);
        assert_eq!(product, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn any_empty_sequence_collapses_the_product() {
        let product = cartesian_product(&[vec![1, 2], vec![], vec![3]]);
        assert!(product.is_empty());
    }

    #[test]
    fn tuple_width_matches_input_count() {
        let product = cartesian_product(&[vec!["a"], vec!["b", "c"], vec!["d"]]);
        assert_eq!(product.len(), 2);
        assert!(product.iter().all(|tuple| tuple.len() == 3));
    }
}
