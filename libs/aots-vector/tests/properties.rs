use aots_vector::{BinaryOp, UnaryOp, Value, Vector3, VectorError};
use approx::{assert_abs_diff_eq, assert_relative_eq};
use config::constants::EPSILON;

fn samples() -> Vec<Vector3> {
    vec![
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 7.0),
        Vector3::new(0.1, 0.2, 0.3),
        Vector3::new(1e3, -2e-3, 5.5),
        Vector3::zero(),
    ]
}

#[test]
fn construction_round_trips_components() {
    let inputs = [
        (Value::from(7), 7.0),
        (Value::from("-1.25"), -1.25),
        (Value::from(true), 1.0),
    ];
    let v = Vector3::try_new(&inputs[0].0, &inputs[1].0, &inputs[2].0).unwrap();
    for (i, (_, expected)) in inputs.iter().enumerate() {
        assert_eq!(v.get(i as i64), Ok(*expected));
    }
}

#[test]
fn indexing_outside_range_or_with_non_integers_fails() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    for index in [-3_i64, -1, 3, 100, i64::MAX, i64::MIN] {
        assert!(matches!(v.get(index), Err(VectorError::IndexOutOfRange { .. })));
        assert!(matches!(v.set(index, 0), Err(VectorError::IndexOutOfRange { .. })));
    }
    for index in [
        Value::from(0.0),
        Value::from("1"),
        Value::None,
        Value::from(v),
    ] {
        assert!(matches!(v.get(index.clone()), Err(VectorError::TypeMismatch(_))));
        assert!(matches!(v.set(index, 0), Err(VectorError::TypeMismatch(_))));
    }
}

#[test]
fn boolean_indices_select_first_and_second_components() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v.get(true), Ok(2.0));
    assert_eq!(v.get(false), Ok(1.0));
    v.set(true, 20).unwrap();
    assert_eq!(v, Vector3::new(1.0, 20.0, 3.0));
}

#[test]
fn addition_is_commutative_and_associative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a);
            for c in samples() {
                assert!(((a + b) + c).approx_eq(&(a + (b + c))));
            }
        }
    }
}

#[test]
fn subtraction_is_addition_of_negation() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a - b, a + (-b));
        }
    }
}

#[test]
fn vector_product_is_dot_product() {
    for a in samples() {
        for b in samples() {
            let expected = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
            assert_relative_eq!(a * b, expected);
        }
    }
}

#[test]
fn cross_product_is_orthogonal_to_inputs() {
    let pairs = [
        (Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)),
        (Vector3::new(-4.5, 0.25, 7.0), Vector3::new(0.1, 0.2, 0.3)),
        (Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0)),
    ];
    for (a, b) in pairs {
        let c = a.cross(&b);
        assert_abs_diff_eq!(c * a, 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c * b, 0.0, epsilon = EPSILON);
    }
}

#[test]
fn magnitude_of_three_four_five() {
    let v = Vector3::try_new(3, 4, 0).unwrap();
    assert_eq!(v.magnitude(), 5.0);
    assert_eq!(v.unary(UnaryOp::Abs), Ok(Value::Float(5.0)));
}

#[test]
fn in_place_add_preserves_the_instance() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    let w = Vector3::new(0.5, 0.5, 0.5);
    let expected = v + w;
    let address: *const Vector3 = &v;
    let handle = &mut v;
    handle.in_place(BinaryOp::Add, &Value::from(w)).unwrap();
    assert!(std::ptr::eq(address, &*handle));
    assert_eq!(*handle, expected);
}

#[test]
fn worked_examples() {
    let sum = Vector3::try_new(1, 2, 3).unwrap() + Vector3::try_new(4, 5, 6).unwrap();
    assert_eq!(sum.repr(), "vector(5.0, 7.0, 9.0)");

    let cross = Vector3::new(1.0, 0.0, 0.0).cross(&Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(cross.repr(), "vector(0.0, 0.0, 1.0)");
}

#[test]
fn repr_reconstructs_an_equal_vector() {
    for v in samples() {
        let rebuilt: Vector3 = v.repr().parse().unwrap();
        assert_eq!(rebuilt, v);
    }
}
