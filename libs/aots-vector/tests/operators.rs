use aots_vector::{BinaryOp, Operator, OperatorForm, UnaryOp, Value, Vector3, VectorError};

fn vector(x: f64, y: f64, z: f64) -> Value {
    Value::from(Vector3::new(x, y, z))
}

#[test]
fn unsupported_binary_operators_signal_in_every_form() {
    let unsupported = [
        BinaryOp::FloorDiv,
        BinaryOp::Mod,
        BinaryOp::DivMod,
        BinaryOp::Pow,
        BinaryOp::LShift,
        BinaryOp::RShift,
        BinaryOp::And,
        BinaryOp::Xor,
        BinaryOp::Or,
    ];
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    let rhs = Value::from(2);
    for op in unsupported {
        assert_eq!(
            v.binary(op, &rhs),
            Err(VectorError::Unsupported {
                operator: Operator::Binary(op),
                form: OperatorForm::Forward,
            })
        );
        assert_eq!(
            v.reflected(op, &rhs),
            Err(VectorError::Unsupported {
                operator: Operator::Binary(op),
                form: OperatorForm::Reflected,
            })
        );
        assert_eq!(
            v.in_place(op, &rhs),
            Err(VectorError::Unsupported {
                operator: Operator::Binary(op),
                form: OperatorForm::InPlace,
            })
        );
    }
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn only_add_and_sub_have_in_place_forms() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    for op in [BinaryOp::Mul, BinaryOp::MatMul, BinaryOp::TrueDiv] {
        let err = v.in_place(op, &vector(1.0, 1.0, 1.0)).unwrap_err();
        assert!(err.is_unsupported(), "{op}: {err}");
    }
    v.in_place(BinaryOp::Sub, &vector(1.0, 1.0, 1.0)).unwrap();
    assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
}

#[test]
fn reflected_true_division_is_unsupported() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let err = v.reflected(BinaryOp::TrueDiv, &Value::from(1)).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn unsupported_unary_operators_and_conversions() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    for op in [
        UnaryOp::Invert,
        UnaryOp::Complex,
        UnaryOp::Int,
        UnaryOp::Index,
        UnaryOp::Round,
        UnaryOp::Trunc,
        UnaryOp::Floor,
        UnaryOp::Ceil,
    ] {
        assert_eq!(
            v.unary(op),
            Err(VectorError::Unsupported {
                operator: Operator::Unary(op),
                form: OperatorForm::Forward,
            })
        );
    }
}

#[test]
fn supported_unary_operators() {
    let v = Vector3::new(1.0, -2.0, 2.0);
    assert_eq!(v.unary(UnaryOp::Neg), Ok(vector(-1.0, 2.0, -2.0)));
    assert_eq!(v.unary(UnaryOp::Pos), Ok(vector(1.0, -2.0, 2.0)));
    assert_eq!(v.unary(UnaryOp::Abs), Ok(Value::Float(3.0)));
    assert_eq!(v.unary(UnaryOp::Float), Ok(Value::Float(3.0)));
}

#[test]
fn scalar_multiplication_commutes_in_both_apis() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(2.0 * v, v * 2.0);
    assert_eq!(
        v.reflected(BinaryOp::Mul, &Value::from(2.0)),
        v.binary(BinaryOp::Mul, &Value::from(2.0))
    );
}

#[test]
fn reflected_cross_reduces_to_forward_cross() {
    let u = Vector3::new(1.0, 2.0, 3.0);
    let w = Vector3::new(-2.0, 0.5, 4.0);
    // The reflected form intentionally keeps the operand order of the forward form.
    assert_eq!(
        w.reflected(BinaryOp::MatMul, &Value::from(u)),
        Ok(Value::from(w.cross(&u)))
    );
    assert_ne!(w.cross(&u), u.cross(&w));
}

#[test]
fn cross_with_non_vector_is_a_type_mismatch() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let scalar = Value::from(1);
    for result in [
        v.binary(BinaryOp::MatMul, &scalar),
        v.reflected(BinaryOp::MatMul, &scalar),
    ] {
        assert!(matches!(result, Err(VectorError::TypeMismatch(_))));
    }
}

#[test]
fn type_mismatch_messages_name_the_operand_type() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let err = v.binary(BinaryOp::Add, &Value::from("text")).unwrap_err();
    assert!(err.to_string().contains("str"), "{err}");
    let err = v.reflected(BinaryOp::Sub, &Value::from(4)).unwrap_err();
    assert!(err.to_string().contains("int"), "{err}");
}
