//! Checks over the bundled content packs. Question correctness rests on the
//! authored guarantee that every language's groups line up index-for-index;
//! these tests make that guarantee hold for the assets we actually ship.

use quizling::content::{Dataset, Domain, Group, LanguageCode};
use quizling::engine::category::CategoryId;
use quizling::engine::resolver;

const DOMAINS: [Domain; 2] = [Domain::Words, Domain::Sentences];

const GROUPS: [Group; 8] = [
    Group::Basic,
    Group::Pronouns,
    Group::Verbs,
    Group::Nouns,
    Group::Determiners,
    Group::Adjectives,
    Group::Adverbs,
    Group::Prepositions,
];

fn load(domain: Domain, language: LanguageCode) -> Dataset {
    Dataset::load(domain, language)
        .unwrap_or_else(|| panic!("missing {} dataset for {language}", domain.asset_dir()))
}

#[test]
fn every_language_ships_length_aligned_groups() {
    for domain in DOMAINS {
        let reference = load(domain, LanguageCode::En);
        for language in LanguageCode::ALL {
            let dataset = load(domain, language);
            for group in GROUPS {
                assert_eq!(
                    dataset.group(group).len(),
                    reference.group(group).len(),
                    "{}/{language} group {group:?} is misaligned with en",
                    domain.asset_dir(),
                );
            }
        }
    }
}

#[test]
fn every_category_resolves_nonempty_for_every_language() {
    for domain in DOMAINS {
        for language in LanguageCode::ALL {
            let dataset = load(domain, language);
            for category in CategoryId::ALL {
                assert!(
                    !resolver::resolve(&dataset, category).is_empty(),
                    "{}/{language} category {} resolved to nothing",
                    domain.asset_dir(),
                    category.id(),
                );
            }
        }
    }
}

#[test]
fn category_resolution_is_length_aligned_across_all_languages() {
    for domain in DOMAINS {
        let reference = load(domain, LanguageCode::En);
        for category in CategoryId::ALL {
            let expected = resolver::resolve(&reference, category).len();
            for language in LanguageCode::ALL {
                let dataset = load(domain, language);
                assert_eq!(
                    resolver::resolve(&dataset, category).len(),
                    expected,
                    "{}/{language} category {}",
                    domain.asset_dir(),
                    category.id(),
                );
            }
        }
    }
}

#[test]
fn paired_halves_rebuild_their_group() {
    let pairs = [
        (CategoryId::Pronouns1, CategoryId::Pronouns2, Group::Pronouns),
        (CategoryId::Verbs1, CategoryId::Verbs2, Group::Verbs),
        (CategoryId::Nouns1, CategoryId::Nouns2, Group::Nouns),
        (
            CategoryId::Adjectives1,
            CategoryId::Adjectives2,
            Group::Adjectives,
        ),
    ];
    for domain in DOMAINS {
        for language in LanguageCode::ALL {
            let dataset = load(domain, language);
            for (first, second, group) in pairs {
                let mut rejoined = resolver::resolve(&dataset, first);
                rejoined.extend(resolver::resolve(&dataset, second));
                assert_eq!(
                    rejoined,
                    dataset.group(group),
                    "{}/{language} {group:?} halves do not rebuild the group",
                    domain.asset_dir(),
                );
            }
        }
    }
}

#[test]
fn unknown_category_id_is_empty_for_every_language() {
    for domain in DOMAINS {
        for language in LanguageCode::ALL {
            let dataset = load(domain, language);
            assert!(resolver::resolve_id(&dataset, "xyz").is_empty());
        }
    }
}
