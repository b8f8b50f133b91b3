use crate::TaskIdGenerator;

use std::collections::HashSet;

#[test]
fn test_generated_ids_are_strictly_increasing() {
    let ids = TaskIdGenerator::new();

    let minted: Vec<i64> = (0..1000).map(|_| ids.next_id()).collect();

    assert!(minted.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(minted.iter().collect::<HashSet<_>>().len(), 1000);
}

#[test]
fn test_observed_id_is_never_reissued() {
    let ids = TaskIdGenerator::new();
    let far_future = i64::MAX / 2;

    ids.observe(far_future);

    assert!(ids.next_id() > far_future);
}
