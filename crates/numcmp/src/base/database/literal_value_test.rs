use super::{ColumnType, IntegerType, LiteralValue};
use crate::base::{decode::InexactValue, numeric::Numeric};
use core::str::FromStr;

#[test]
fn literals_report_their_column_types() {
    assert_eq!(LiteralValue::from(1_i16).column_type(), ColumnType::SmallInt);
    assert_eq!(LiteralValue::from(1_i32).column_type(), ColumnType::Int);
    assert_eq!(LiteralValue::from(1_i64).column_type(), ColumnType::BigInt);
    assert_eq!(
        LiteralValue::from(Numeric::nan()).column_type(),
        ColumnType::Numeric
    );
    assert_eq!(LiteralValue::from(1.5_f32).column_type(), ColumnType::Real);
    assert_eq!(LiteralValue::from(1.5_f64).column_type(), ColumnType::Double);
}

#[test]
fn we_can_split_literals_into_integer_and_inexact_sides() {
    assert_eq!(LiteralValue::SmallInt(-7).as_i64(), Some(-7));
    assert_eq!(LiteralValue::Double(1.0).as_i64(), None);
    assert_eq!(
        LiteralValue::Real(2.5).as_inexact(),
        Some(InexactValue::Real(2.5))
    );
    let numeric = Numeric::from_str("10.5").unwrap();
    assert_eq!(
        LiteralValue::Numeric(numeric.clone()).as_inexact(),
        Some(InexactValue::Numeric(&numeric))
    );
    assert_eq!(LiteralValue::Int(3).as_inexact(), None);
}

#[test]
fn we_can_only_build_integer_literals_that_fit() {
    assert_eq!(
        LiteralValue::from_integer(IntegerType::SmallInt, 32767),
        Some(LiteralValue::SmallInt(32767))
    );
    assert_eq!(LiteralValue::from_integer(IntegerType::SmallInt, 32768), None);
    assert_eq!(
        LiteralValue::from_integer(IntegerType::Int, -2_147_483_648),
        Some(LiteralValue::Int(i32::MIN))
    );
    assert_eq!(
        LiteralValue::from_integer(IntegerType::BigInt, i64::MAX),
        Some(LiteralValue::BigInt(i64::MAX))
    );
}

#[test]
fn numeric_literals_serialize_through_their_text_form() {
    let literal = LiteralValue::Numeric(Numeric::from_str("-12.75").unwrap());
    let json = serde_json::to_string(&literal).unwrap();
    assert_eq!(json, r#"{"Numeric":"-12.75"}"#);
    assert_eq!(serde_json::from_str::<LiteralValue>(&json).unwrap(), literal);
}
