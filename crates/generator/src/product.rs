/// Cartesian product of `lists`, as tuples in input order.
///
/// The first list varies slowest. Duplicate-free inputs give a duplicate-free
/// product; any empty input gives an empty product.
pub fn cartesian_product<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    lists.iter().fold(vec![Vec::new()], |acc, list| {
        acc.iter()
            .flat_map(|prefix| {
                list.iter().map(move |item| {
                    let mut tuple = Vec::with_capacity(prefix.len() + 1);
                    tuple.extend_from_slice(prefix);
                    tuple.push(item.clone());
                    tuple
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_order_outer_slowest() {
        let product = cartesian_product(&[vec!["a", "b"], vec!["x", "y"]]);
        assert_eq!(
            product,
            vec![
                vec!["a", "x"],
                vec!["a", "y"],
                vec!["b", "x"],
                vec!["b", "y"],
            ]
        );
    }

    #[test]
    fn test_product_size_three_lists() {
        let product = cartesian_product(&[vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]]);
        assert_eq!(product.len(), 3 * 2 * 4);
        assert!(product.iter().all(|t| t.len() == 3));
    }

    #[test]
    fn test_product_with_empty_list() {
        let product = cartesian_product(&[vec!["a"], Vec::new()]);
        assert!(product.is_empty());
    }

    #[test]
    fn test_product_single_list() {
        let product = cartesian_product(&[vec!["london", "leeds"]]);
        assert_eq!(product, vec![vec!["london"], vec!["leeds"]]);
    }
}
