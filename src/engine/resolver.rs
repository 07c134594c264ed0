use crate::content::Dataset;
use crate::engine::category::{CategoryId, Extraction};

/// Items for a category, in dataset order. Pure function of its inputs:
/// paired categories take the first `ceil(n/2)` items or the remainder, so
/// the two halves concatenate back to the original group.
pub fn resolve(dataset: &Dataset, category: CategoryId) -> Vec<String> {
    match category.extraction() {
        Extraction::Whole(group) => dataset.group(group).to_vec(),
        Extraction::FirstHalf(group) => {
            let items = dataset.group(group);
            items[..split_point(items.len())].to_vec()
        }
        Extraction::SecondHalf(group) => {
            let items = dataset.group(group);
            items[split_point(items.len())..].to_vec()
        }
    }
}

/// String-id entry point for callers at the navigation boundary (CLI jump,
/// tests). An unrecognized id is a valid "no items" result, not a fault.
pub fn resolve_id(dataset: &Dataset, id: &str) -> Vec<String> {
    CategoryId::from_id(id)
        .map(|category| resolve(dataset, category))
        .unwrap_or_default()
}

fn split_point(len: usize) -> usize {
    len.div_ceil(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Group;

    fn dataset_with(group: Group, items: &[&str]) -> Dataset {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        let mut dataset = Dataset::default();
        match group {
            Group::Basic => dataset.basic = items,
            Group::Pronouns => dataset.pronouns = items,
            Group::Verbs => dataset.verbs = items,
            Group::Nouns => dataset.nouns = items,
            Group::Determiners => dataset.determiners = items,
            Group::Adjectives => dataset.adjectives = items,
            Group::Adverbs => dataset.adverbs = items,
            Group::Prepositions => dataset.prepositions = items,
        }
        dataset
    }

    #[test]
    fn test_atomic_category_returns_group_unchanged() {
        let dataset = dataset_with(Group::Adverbs, &["now", "today", "always"]);
        assert_eq!(
            resolve(&dataset, CategoryId::Adverbs),
            vec!["now", "today", "always"]
        );
    }

    #[test]
    fn test_first_half_of_ten_items_is_first_five() {
        let items = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let dataset = dataset_with(Group::Adjectives, &items);
        assert_eq!(
            resolve(&dataset, CategoryId::Adjectives1),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn test_odd_length_split_favors_first_half() {
        let dataset = dataset_with(Group::Verbs, &["a", "b", "c", "d", "e"]);
        let first = resolve(&dataset, CategoryId::Verbs1);
        let second = resolve(&dataset, CategoryId::Verbs2);
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_halves_concatenate_to_original_group() {
        for len in 0..9 {
            let items: Vec<String> = (0..len).map(|i| format!("item{i}")).collect();
            let refs: Vec<&str> = items.iter().map(|s| s.as_str()).collect();
            let dataset = dataset_with(Group::Nouns, &refs);

            let mut rejoined = resolve(&dataset, CategoryId::Nouns1);
            rejoined.extend(resolve(&dataset, CategoryId::Nouns2));
            assert_eq!(rejoined, items, "length {len}");
        }
    }

    #[test]
    fn test_resolution_is_length_aligned_across_datasets() {
        let native = dataset_with(Group::Pronouns, &["I", "you", "he", "we"]);
        let target = dataset_with(Group::Pronouns, &["ben", "sen", "o", "biz"]);
        for category in CategoryId::ALL {
            assert_eq!(
                resolve(&native, category).len(),
                resolve(&target, category).len(),
                "{category:?}"
            );
        }
    }

    #[test]
    fn test_unknown_id_resolves_to_empty() {
        let dataset = dataset_with(Group::Basic, &["hello"]);
        assert!(resolve_id(&dataset, "xyz").is_empty());
    }

    #[test]
    fn test_known_id_resolves_like_typed_category() {
        let dataset = dataset_with(Group::Basic, &["hello", "goodbye"]);
        assert_eq!(
            resolve_id(&dataset, "basic"),
            resolve(&dataset, CategoryId::Basic)
        );
    }

    #[test]
    fn test_missing_group_yields_empty_not_panic() {
        let dataset = Dataset::default();
        assert!(resolve(&dataset, CategoryId::Verbs2).is_empty());
    }
}
