use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pool(table: u32, seed: u64) -> QuestionPool {
    QuestionPool::generate(table, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn contains_current_question_exactly_once() {
    let pool = pool(5, 3);
    let mut rng = StdRng::seed_from_u64(4);
    for position in 0..pool.len() {
        let choices = ChoiceSet::sample(&pool, position, &mut rng);
        let occurrences = choices
            .options()
            .iter()
            .filter(|q| **q == pool[position])
            .count();
        assert_eq!(occurrences, 1);
        assert_eq!(choices.question(), Some(&pool[position]));
        let index = choices.correct_index().unwrap();
        assert_eq!(choices[index], pool[position]);
    }
}

#[test]
fn size_shrinks_at_end_of_pool() {
    let pool = pool(1, 5);
    let mut rng = StdRng::seed_from_u64(6);
    for position in 0..pool.len() {
        let choices = ChoiceSet::sample(&pool, position, &mut rng);
        assert_eq!(choices.len(), MAX_CHOICES.min(pool.len() - position));
    }
}

#[test]
fn options_come_from_window_at_position() {
    let pool = pool(2, 8);
    let mut rng = StdRng::seed_from_u64(9);
    let choices = ChoiceSet::sample(&pool, 10, &mut rng);
    for option in choices.options() {
        assert!(pool.window(10, MAX_CHOICES).contains(option));
    }
}

#[test]
fn resampling_keeps_membership() {
    let pool = pool(12, 10);
    let mut rng = StdRng::seed_from_u64(11);
    let first = ChoiceSet::sample(&pool, 20, &mut rng);
    let second = ChoiceSet::sample(&pool, 20, &mut rng);
    assert!(first.has_same_options(&second));
}

#[test]
fn past_end_of_pool_is_empty() {
    let pool = pool(1, 12);
    let mut rng = StdRng::seed_from_u64(13);
    let choices = ChoiceSet::sample(&pool, pool.len(), &mut rng);
    assert!(choices.is_empty());
    assert_eq!(choices.correct_index(), None);
}
