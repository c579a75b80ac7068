use exact_fraction::{float_ops, Fraction, FractionError};

fn frac(n: i32, d: i32) -> Fraction {
    Fraction::new(n, d).unwrap()
}

#[test]
fn documented_identities() -> Result<(), FractionError> {
    assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
    assert_eq!(frac(2, 4), frac(1, 2));
    assert_eq!(frac(1, 2) * frac(2, 1), frac(1, 1));
    assert_eq!(frac(1, 2) / frac(1, 2), frac(1, 1));
    assert_eq!(Fraction::from_f32(0.5)?, frac(1, 2));
    assert_eq!(Fraction::from_f32(0.333)?, frac(333, 1000));
    Ok(())
}

#[test]
fn documented_failures() {
    assert_eq!(
        frac(1, 2).try_div(&frac(0, 5)),
        Err(FractionError::DivisionByZero)
    );
    assert!(matches!(
        Fraction::new(3, 0),
        Err(FractionError::InvalidArgument(_))
    ));
    let near = frac(1 << 16, (1 << 16) - 1);
    assert!(matches!(near.try_mul(&near), Err(FractionError::Overflow(_))));
    assert_eq!(
        float_ops::div_float(&near, 0.0),
        Err(FractionError::DivisionByZero)
    );
}

#[test]
fn increment_decrement() -> Result<(), FractionError> {
    let mut f = frac(1, 2);
    assert_eq!(f.post_increment()?, frac(1, 2));
    assert_eq!(f, frac(3, 2));

    let mut f = frac(1, 2);
    assert_eq!(*f.decrement()?, frac(-1, 2));
    assert_eq!(f, frac(-1, 2));
    Ok(())
}

#[test]
fn results_never_wrap() {
    let max = frac(i32::MAX, 1);
    let min = frac(i32::MIN, 1);
    let cases = [
        max.try_add(&max),
        min.try_add(&min),
        max.try_sub(&min),
        min.try_sub(&max),
        max.try_mul(&frac(2, 1)),
        min.try_mul(&frac(-1, 1)),
        max.try_div(&frac(1, 2)),
        min.try_div(&frac(-1, 1)),
        frac(1, i32::MAX).try_mul(&frac(1, 2)),
    ];
    for (idx, case) in cases.into_iter().enumerate() {
        assert!(
            matches!(case, Err(FractionError::Overflow(_))),
            "case {}: {:?}",
            idx,
            case
        );
    }
}

#[test]
fn extreme_values_that_fit() -> Result<(), FractionError> {
    let max = frac(i32::MAX, 1);
    let min = frac(i32::MIN, 1);
    assert_eq!(max.try_add(&min)?, frac(-1, 1));
    assert_eq!(min.try_div(&min)?, Fraction::ONE);
    assert_eq!(max.try_mul(&frac(1, i32::MAX))?, Fraction::ONE);
    assert_eq!(min.try_mul(&frac(1, 2))?, frac(-(1 << 30), 1));
    assert!(min < max);
    Ok(())
}

#[test]
fn parse_then_format() -> Result<(), FractionError> {
    let mut input = "10 -4\n7 21\n".as_bytes();
    let mut seen = Vec::new();
    let mut f = Fraction::default();
    while f.read_from(&mut input).is_ok() {
        seen.push(f.to_string());
    }
    assert_eq!(seen, vec!["-5/2", "1/3"]);
    Ok(())
}
