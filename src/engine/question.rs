use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Attempts at drawing a distractor before accepting a short option list.
/// Small pools can stall the draw loop forever without this bound.
const MAX_DISTRACTOR_ATTEMPTS: usize = 50;

/// One quiz round: a target-language prompt and shuffled native-language
/// options, exactly one of which is the translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub correct: String,
    pub options: Vec<String>,
}

/// Draw a fresh question from a pair of index-aligned sequences. Returns
/// `None` when either side has no items. Stateless across calls: every round
/// draws independently, so repeats are possible.
pub fn next_question(
    native_items: &[String],
    target_items: &[String],
    rng: &mut SmallRng,
) -> Option<Question> {
    let len = native_items.len().min(target_items.len());
    if len == 0 {
        return None;
    }

    let index = rng.gen_range(0..len);
    let correct = native_items[index].clone();
    let prompt = target_items[index].clone();

    let mut wrong: Vec<String> = Vec::with_capacity(3);
    for _ in 0..MAX_DISTRACTOR_ATTEMPTS {
        if wrong.len() == 3 {
            break;
        }
        let candidate = &native_items[rng.gen_range(0..native_items.len())];
        if *candidate != correct && !wrong.contains(candidate) {
            wrong.push(candidate.clone());
        }
    }

    let mut options = Vec::with_capacity(wrong.len() + 1);
    options.push(correct.clone());
    options.extend(wrong);
    // Fisher-Yates, so every permutation is equally likely.
    options.shuffle(rng);

    Some(Question {
        prompt,
        correct,
        options,
    })
}
