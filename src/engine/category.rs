use crate::content::Group;

/// The twelve practice categories offered on the category screens. Four of
/// the underlying groups are large enough to be served in two halves, so
/// eight groups fan out to twelve categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryId {
    Basic,
    Pronouns1,
    Pronouns2,
    Verbs1,
    Verbs2,
    Nouns1,
    Nouns2,
    Determiners,
    Adjectives1,
    Adjectives2,
    Adverbs,
    Prepositions,
}

/// How a category's items are carved out of a dataset group. Both item
/// domains share this one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extraction {
    Whole(Group),
    FirstHalf(Group),
    SecondHalf(Group),
}

impl CategoryId {
    /// Catalog in display order.
    pub const ALL: [CategoryId; 12] = [
        CategoryId::Basic,
        CategoryId::Pronouns1,
        CategoryId::Pronouns2,
        CategoryId::Verbs1,
        CategoryId::Verbs2,
        CategoryId::Nouns1,
        CategoryId::Nouns2,
        CategoryId::Determiners,
        CategoryId::Adjectives1,
        CategoryId::Adjectives2,
        CategoryId::Adverbs,
        CategoryId::Prepositions,
    ];

    /// Stable identifier, also the i18n key for the category title.
    pub fn id(self) -> &'static str {
        match self {
            CategoryId::Basic => "basic",
            CategoryId::Pronouns1 => "pronouns1",
            CategoryId::Pronouns2 => "pronouns2",
            CategoryId::Verbs1 => "verbs1",
            CategoryId::Verbs2 => "verbs2",
            CategoryId::Nouns1 => "nouns1",
            CategoryId::Nouns2 => "nouns2",
            CategoryId::Determiners => "determiners",
            CategoryId::Adjectives1 => "adjectives1",
            CategoryId::Adjectives2 => "adjectives2",
            CategoryId::Adverbs => "adverbs",
            CategoryId::Prepositions => "prepositions",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    pub fn extraction(self) -> Extraction {
        match self {
            CategoryId::Basic => Extraction::Whole(Group::Basic),
            CategoryId::Pronouns1 => Extraction::FirstHalf(Group::Pronouns),
            CategoryId::Pronouns2 => Extraction::SecondHalf(Group::Pronouns),
            CategoryId::Verbs1 => Extraction::FirstHalf(Group::Verbs),
            CategoryId::Verbs2 => Extraction::SecondHalf(Group::Verbs),
            CategoryId::Nouns1 => Extraction::FirstHalf(Group::Nouns),
            CategoryId::Nouns2 => Extraction::SecondHalf(Group::Nouns),
            CategoryId::Determiners => Extraction::Whole(Group::Determiners),
            CategoryId::Adjectives1 => Extraction::FirstHalf(Group::Adjectives),
            CategoryId::Adjectives2 => Extraction::SecondHalf(Group::Adjectives),
            CategoryId::Adverbs => Extraction::Whole(Group::Adverbs),
            CategoryId::Prepositions => Extraction::Whole(Group::Prepositions),
        }
    }
}
