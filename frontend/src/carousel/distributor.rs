use std::num::NonZeroUsize;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::TextItem;

/// Uniformly random permutation of `pool` (Fisher-Yates). The input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(pool: &[TextItem], rng: &mut R) -> Vec<TextItem> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Splits `pool` into `column_count` columns of equal length.
///
/// The pool is shuffled, dealt round-robin, and every column shorter than the
/// longest one is padded with items drawn with replacement from the shuffled
/// pool. An empty pool gives `column_count` empty columns.
pub fn distribute<R: Rng + ?Sized>(
    pool: &[TextItem],
    column_count: NonZeroUsize,
    rng: &mut R,
) -> Vec<Vec<TextItem>> {
    let count = column_count.get();
    let shuffled = shuffle(pool, rng);

    let mut columns: Vec<Vec<TextItem>> = vec![Vec::new(); count];
    for (position, item) in shuffled.iter().enumerate() {
        columns[position % count].push(item.clone());
    }

    let max_len = columns.iter().map(Vec::len).max().unwrap_or(0);
    let mut padded = 0;
    for column in &mut columns {
        while column.len() < max_len {
            match shuffled.choose(rng) {
                Some(item) => column.push(item.clone()),
                None => break,
            }
            padded += 1;
        }
    }

    debug!(
        "Distributed {} items into {} columns of {} ({} padded)",
        pool.len(),
        count,
        max_len,
        padded
    );
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_POOL;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::borrow::Cow;
    use std::collections::HashMap;

    fn pool(len: u32) -> Vec<TextItem> {
        (1..=len)
            .map(|id| TextItem {
                id,
                text: Cow::Owned(format!("item {id}")),
            })
            .collect()
    }

    fn columns(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn sorted_ids(items: &[TextItem]) -> Vec<u32> {
        let mut ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 2, 9, 10] {
            let pool = pool(len);
            let shuffled = shuffle(&pool, &mut rng);
            assert_eq!(sorted_ids(&shuffled), sorted_ids(&pool));
        }
    }

    #[test]
    fn shuffle_hits_every_permutation_evenly() {
        let pool = pool(3);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<u32>, u32> = HashMap::new();
        for _ in 0..6000 {
            let order = shuffle(&pool, &mut rng).iter().map(|item| item.id).collect();
            *counts.entry(order).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (order, count) in counts {
            assert!((800..1200).contains(&count), "{order:?} seen {count} times");
        }
    }

    #[test]
    fn columns_have_equal_length_and_cover_the_pool_once() {
        let mut rng = StdRng::seed_from_u64(1);
        for len in 1..=12u32 {
            let pool = pool(len);
            for count in 1..=len as usize {
                let result = distribute(&pool, columns(count), &mut rng);
                let expected_len = (len as usize + count - 1) / count;
                assert_eq!(result.len(), count);
                assert!(result.iter().all(|column| column.len() == expected_len));

                // Column c receives ceil((len - c) / count) round-robin items before padding.
                let first_round: Vec<TextItem> = result
                    .iter()
                    .enumerate()
                    .flat_map(|(c, column)| {
                        let dealt = (len as usize - c + count - 1) / count;
                        column[..dealt].to_vec()
                    })
                    .collect();
                assert_eq!(sorted_ids(&first_round), sorted_ids(&pool));
            }
        }
    }

    #[test]
    fn ten_items_in_three_columns() {
        let mut rng = StdRng::seed_from_u64(2024);
        let result = distribute(DEFAULT_POOL, columns(3), &mut rng);

        assert!(result.iter().all(|column| column.len() == 4));
        let all: Vec<TextItem> = result.concat();
        assert_eq!(all.len(), 12);
        for id in 1..=10 {
            assert!(all.iter().any(|item| item.id == id), "id {id} missing");
        }
        assert!(all.iter().all(|item| DEFAULT_POOL.contains(item)));
    }

    #[test]
    fn repeated_runs_are_not_identical() {
        let mut rng = StdRng::seed_from_u64(99);
        let first = distribute(DEFAULT_POOL, columns(3), &mut rng);
        let differs = (0..20).any(|_| distribute(DEFAULT_POOL, columns(3), &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn input_pool_is_not_mutated() {
        let pool = pool(10);
        let before = pool.clone();
        let mut rng = StdRng::seed_from_u64(5);
        let _ = distribute(&pool, columns(4), &mut rng);
        assert_eq!(pool, before);
    }

    #[test]
    fn more_columns_than_items_pads_empty_columns() {
        let pool = pool(2);
        let mut rng = StdRng::seed_from_u64(3);
        let result = distribute(&pool, columns(5), &mut rng);
        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|column| column.len() == 1));
        assert!(result.concat().iter().all(|item| pool.contains(item)));
    }

    #[test]
    fn empty_pool_gives_empty_columns() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = distribute(&[], columns(3), &mut rng);
        assert_eq!(result, vec![Vec::<TextItem>::new(); 3]);
    }
}
