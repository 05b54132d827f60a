//! Unit tests for EmbeddingVector normalization

use vss_domain::EmbeddingVector;
use vss_domain::error::Error;

#[test]
fn test_normalized_vectors_have_unit_norm() {
    let raws: Vec<Vec<f32>> = vec![
        vec![1.0, 0.0],
        vec![0.707, 0.707],
        vec![-3.0, 4.0, 12.0],
        (0..512).map(|i| (i as f32 * 0.37).sin() * 50.0).collect(),
        vec![1e-6, 2e-6, -1e-6],
    ];

    for raw in raws {
        let v = EmbeddingVector::normalized(raw, "test").unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-6, "norm was {}", v.norm());
        assert!(v.is_unit());
    }
}

#[test]
fn test_zero_vector_is_degenerate() {
    match EmbeddingVector::normalized(vec![0.0; 512], "dark.png") {
        Err(Error::DegenerateVector { subject, .. }) => assert_eq!(subject, "dark.png"),
        other => panic!("expected degenerate vector error, got {other:?}"),
    }
}

#[test]
fn test_dot_of_unit_vectors_is_cosine() {
    let a = EmbeddingVector::normalized(vec![1.0, 0.0], "a").unwrap();
    let c = EmbeddingVector::normalized(vec![0.707, 0.707], "c").unwrap();
    assert!((a.dot(&a) - 1.0).abs() < 1e-6);
    assert!((a.dot(&c) - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-4);
}

#[test]
fn test_scaling_does_not_change_direction() {
    let a = EmbeddingVector::normalized(vec![0.2, 0.4, 0.4], "a").unwrap();
    let b = EmbeddingVector::normalized(vec![20.0, 40.0, 40.0], "b").unwrap();
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert!((x - y).abs() < 1e-6);
    }
}
