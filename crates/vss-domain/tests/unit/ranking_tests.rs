//! Unit tests for the RankedResult value object

use vss_domain::{ObjectKey, RankedEntry, RankedResult};

fn entry(key: &str, index: usize, score: f32) -> RankedEntry {
    RankedEntry {
        key: ObjectKey::from(key),
        index,
        score,
    }
}

#[test]
fn test_accessors_follow_rank_order() {
    let ranking = RankedResult::from_sorted(vec![
        entry("a.png", 0, 1.0),
        entry("c.png", 2, 0.7),
        entry("b.png", 1, 0.0),
    ]);

    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking.indices().collect::<Vec<_>>(), vec![0, 2, 1]);
    assert_eq!(
        ranking.keys().map(ObjectKey::as_str).collect::<Vec<_>>(),
        vec!["a.png", "c.png", "b.png"]
    );
    assert_eq!(ranking.scores().collect::<Vec<_>>(), vec![1.0, 0.7, 0.0]);
}

#[test]
fn test_top_is_clamped() {
    let ranking = RankedResult::from_sorted(vec![entry("a.png", 0, 0.5)]);
    assert_eq!(ranking.top(10).len(), 1);
    assert!(RankedResult::empty().top(3).is_empty());
}
