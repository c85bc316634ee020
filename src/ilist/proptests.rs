//! Property-based tests for attribute broadcasts.

#[cfg(test)]
mod tests {
    use crate::{IList, IListError};
    use proptest::prelude::*;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        a: i64,
        b: String,
    }

    crate::impl_attributes!(Pair => Value { a: |p| json!(p.a), b: |p| json!(p.b) });

    fn pairs() -> impl Strategy<Value = Vec<Pair>> {
        prop::collection::vec(
            (any::<i64>(), "[a-z]{0,8}").prop_map(|(a, b)| Pair { a, b }),
            0..32,
        )
    }

    proptest! {
        #[test]
        fn test_broadcast_matches_elements(items in pairs()) {
            let list = IList::from(items.clone());
            let values = list.get_attribute("a").unwrap();
            prop_assert_eq!(values.len(), items.len());
            for (value, item) in values.iter().zip(&items) {
                prop_assert_eq!(value, &json!(item.a));
            }
        }

        #[test]
        fn test_missing_attribute_reports_first_offender(
            before in 0usize..8,
            after in 0usize..8,
        ) {
            let mut list: IList<Value> = (0..before).map(|i| json!({ "a": i })).collect();
            list.append(json!({ "z": 0 }));
            list.extend((0..after).map(|i| json!({ "a": i })));

            let err = list.get_attribute("a").unwrap_err();
            prop_assert_eq!(err, IListError::attribute_missing(before, "a"));
        }

        #[test]
        fn test_append_extends_broadcast(items in pairs(), a in any::<i64>()) {
            let mut list = IList::from(items);
            let before = list.get_attribute("a").unwrap();
            list.append(Pair { a, b: String::new() });
            let after = list.get_attribute("a").unwrap();

            prop_assert_eq!(after.len(), before.len() + 1);
            prop_assert_eq!(&after.as_slice()[..before.len()], before.as_slice());
            prop_assert_eq!(after.as_slice().last(), Some(&json!(a)));
        }

        #[test]
        fn test_remove_shrinks_broadcast(items in pairs(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!items.is_empty());
            let index = pick.index(items.len());
            let mut list = IList::from(items.clone());

            let removed = list.remove_at(index).unwrap();
            prop_assert_eq!(&removed, &items[index]);

            let values = list.get_attribute("b").unwrap();
            let mut expected: Vec<Value> = items.iter().map(|p| json!(p.b)).collect();
            expected.remove(index);
            prop_assert_eq!(values, expected);
        }

        #[test]
        fn test_out_of_range_leaves_list_unchanged(
            items in prop::collection::vec(any::<i32>(), 0..16),
            extra in 0usize..8,
        ) {
            let mut list = IList::from(items.clone());
            let index = items.len() + extra;

            prop_assert!(list.get(index).is_err());
            prop_assert!(list.set(index, 0).is_err());
            prop_assert!(list.remove_at(index).is_err());
            prop_assert_eq!(list.insert(index + 1, 0), Err(IListError::index_out_of_range(index + 1, items.len())));
            prop_assert_eq!(list, items);
        }
    }
}
