use isometry_core::constants::RESOLUTION;
use isometry_core::math::almost_equal;
use isometry_core::test_helpers::{assert_ulp_le, assert_vector_ulp_le};
use isometry_core::{IsometryError, Matrix3, Vector3};

fn samples() -> Vec<Vector3> {
    vec![
        Vector3::ZERO,
        Vector3::UNIT_X,
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 9.75),
        Vector3::new(0.1, 0.2, 0.3),
        Vector3::new(1e6, -1e-6, 42.0),
        Vector3::new(-7.0, -8.0, -9.0),
    ]
}

// --- Addition ---

#[test]
fn addition_is_commutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a, "{:?} + {:?}", a, b);
        }
    }
}

#[test]
fn addition_is_associative_within_tolerance() {
    let a = Vector3::new(0.1, 0.7, 1.3);
    let b = Vector3::new(0.2, 0.11, 2.9);
    let c = Vector3::new(0.3, 0.05, 4.1);
    assert_eq!((a + b) + c, a + (b + c));
}

#[test]
fn zero_and_one_are_identities() {
    for a in samples() {
        assert_eq!(a + Vector3::ZERO, a);
        assert_eq!(a * 1.0, a);
        assert_eq!(1.0 * a, a);
        assert_eq!(a - a, Vector3::ZERO);
    }
}

#[test]
fn compound_forms_match_binary_forms() {
    let a = Vector3::new(1.5, -2.0, 8.0);
    let b = Vector3::new(0.5, 4.0, -2.0);

    let mut v = a;
    v += b;
    assert_eq!(v, a + b);

    let mut v = a;
    v -= b;
    assert_eq!(v, a - b);

    let mut v = a;
    v *= b;
    assert_eq!(v, a * b);

    let mut v = a;
    v /= b;
    assert_eq!(v, a / b);

    let mut v = a;
    v *= -3.0;
    assert_eq!(v, a * -3.0);
}

// --- Geometric products ---

#[test]
fn unit_axes_cross_cyclically() {
    assert_eq!(Vector3::UNIT_X.cross(&Vector3::UNIT_Y), Vector3::UNIT_Z);
    assert_eq!(Vector3::UNIT_Y.cross(&Vector3::UNIT_Z), Vector3::UNIT_X);
    assert_eq!(Vector3::UNIT_Z.cross(&Vector3::UNIT_X), Vector3::UNIT_Y);
    assert_eq!(Vector3::UNIT_Y.cross(&Vector3::UNIT_X), -Vector3::UNIT_Z);
}

#[test]
fn cross_product_is_orthogonal_to_both_operands() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-4.0, 0.5, 2.0);
    let c = a.cross(&b);
    assert_eq!(c.dot(&a), 0.0);
    assert_eq!(c.dot(&b), 0.0);
    assert_eq!(a.cross(&a), Vector3::ZERO);
}

#[test]
fn unit_axes_are_orthogonal() {
    assert_eq!(Vector3::UNIT_X.dot(&Vector3::UNIT_Y), 0.0);
    assert_eq!(Vector3::UNIT_Y.dot(&Vector3::UNIT_Z), 0.0);
    assert_eq!(Vector3::UNIT_Z.dot(&Vector3::UNIT_X), 0.0);
}

#[test]
fn dot_with_self_is_norm_squared() {
    for v in samples() {
        let norm = v.norm();
        assert!(
            almost_equal(v.dot(&v), norm * norm, RESOLUTION),
            "{:?}: dot={} norm^2={}",
            v,
            v.dot(&v),
            norm * norm
        );
    }
}

#[test]
fn three_four_five_triangle() {
    assert_eq!(Vector3::new(3.0, 4.0, 0.0).norm(), 5.0);
    assert_ulp_le(Vector3::new(1.0, 1.0, 1.0).norm(), 3f64.sqrt(), 0, "unit cube diagonal");
}

// --- Construction and access ---

#[test]
fn indexing_agrees_with_accessors() {
    for v in samples() {
        assert_eq!(v[0], v.x());
        assert_eq!(v[1], v.y());
        assert_eq!(v[2], v.z());
        assert_eq!(v.get(0).unwrap(), v.x());
        assert_eq!(v.get(1).unwrap(), v.y());
        assert_eq!(v.get(2).unwrap(), v.z());
    }
}

#[test]
fn index_three_is_out_of_range() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v.get(3), Err(IsometryError::out_of_range("Vector3::get", 3)));
}

#[test]
fn literal_of_wrong_length_is_rejected() {
    for values in [&[1.0, 2.0][..], &[1.0, 2.0, 3.0, 4.0][..]] {
        let err = Vector3::from_slice(values).unwrap_err();
        assert!(err.is_invalid_argument(), "{}", err);
    }
}

#[test]
fn literal_of_three_matches_scalar_constructor() {
    let from_literal = Vector3::try_from(&[1.5, -2.5, 3.5][..]).unwrap();
    assert_eq!(from_literal, Vector3::new(1.5, -2.5, 3.5));
    assert_eq!(from_literal.to_array(), [1.5, -2.5, 3.5]);
}

#[test]
fn accessor_round_trip() {
    for v in samples() {
        assert_eq!(Vector3::new(v.x(), v.y(), v.z()), v);
    }
}

#[test]
fn copies_are_independent() {
    let original = Vector3::new(1.0, 2.0, 3.0);
    let mut copy = original;
    copy.set_x(100.0);
    assert_eq!(original.x(), 1.0);
    assert_eq!(copy.x(), 100.0);
}

// --- Tolerance boundary ---

#[test]
fn drift_within_tolerance_compares_equal() {
    let a = Vector3::new(1.0, 10.0, 100.0);
    // Bound per component is EPSILON * |a + b| * 4, roughly 8 EPSILON * |a|.
    let b = Vector3::new(
        1.0 + 4.0 * f64::EPSILON,
        10.0 * (1.0 + 4.0 * f64::EPSILON),
        100.0 * (1.0 + 4.0 * f64::EPSILON),
    );
    assert_eq!(a, b);
}

#[test]
fn drift_an_order_of_magnitude_beyond_tolerance_compares_unequal() {
    let a = Vector3::new(1.0, 10.0, 100.0);
    let bound = |c: f64| f64::EPSILON * (2.0 * c) * f64::from(RESOLUTION);

    let mut b = a;
    b.set_x(1.0 + 10.0 * bound(1.0));
    assert_ne!(a, b);

    let mut b = a;
    b.set_z(100.0 + 10.0 * bound(100.0));
    assert_ne!(a, b);
}

#[test]
fn chained_arithmetic_stays_equal() {
    let v = Vector3::new(0.1, 0.2, 0.3);
    let round_trip = (v * 3.0 + v * 7.0) / Vector3::new(10.0, 10.0, 10.0);
    assert_eq!(round_trip, v);
    assert_vector_ulp_le(&round_trip, &v, 8, "scale and divide");
}

// --- Matrix3 ---

#[test]
fn identity_and_zero_determinants() {
    assert_eq!(Matrix3::IDENTITY.det(), 1.0);
    assert_eq!(Matrix3::ZERO.det(), 0.0);
}

#[test]
fn determinant_of_rotation_is_one() {
    let (s, c) = 0.3f64.sin_cos();
    let rotation = Matrix3::from_row_major([c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0]);
    assert!(almost_equal(rotation.det(), 1.0, RESOLUTION));
}

#[test]
fn columns_are_synthesized_from_rows() {
    let m = Matrix3::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    for i in 0..3 {
        let col = m.col(i).unwrap();
        for (j, row) in m.rows().iter().enumerate() {
            assert_eq!(col[j], row[i]);
        }
    }
    assert!(m.col(3).unwrap_err().is_out_of_range());
    assert!(m.row(3).unwrap_err().is_out_of_range());
}

#[test]
fn matrix_literal_must_have_nine_values() {
    let err = Matrix3::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, IsometryError::invalid_argument("Matrix3::from_slice", 9, 3));
}

#[test]
fn matrix_arithmetic_is_row_wise() {
    let a = Matrix3::from_row_major([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let b = Matrix3::ONES * 2.0;
    for (i, (ra, rb)) in a.rows().iter().zip(b.rows().iter()).enumerate() {
        assert_eq!((a + b)[i], *ra + *rb);
        assert_eq!((a - b)[i], *ra - *rb);
        assert_eq!((a * b)[i], *ra * *rb);
        assert_eq!((a / b)[i], *ra / *rb);
    }
}

#[test]
fn matrix_equality_tolerates_drift() {
    let tenth = Matrix3::ONES * 0.1;
    assert_eq!(tenth * 3.0, Matrix3::ONES * 0.3);
    assert_ne!(tenth, Matrix3::ONES * 0.1000001);
}

#[test]
fn constants_are_usable_across_threads() {
    let handle = std::thread::spawn(|| Matrix3::IDENTITY.det() + Vector3::UNIT_Z.norm());
    assert_eq!(handle.join().unwrap(), 2.0);
}
