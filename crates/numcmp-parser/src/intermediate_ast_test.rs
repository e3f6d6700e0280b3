use crate::{intermediate_ast::ComparisonOperator, ParseError};
use core::{cmp::Ordering, str::FromStr};

#[test]
fn we_can_parse_and_print_every_operator_symbol() {
    for op in ComparisonOperator::ALL {
        assert_eq!(ComparisonOperator::from_str(op.symbol()).unwrap(), op);
        assert_eq!(op.to_string(), op.symbol());
    }
    assert_eq!(
        ComparisonOperator::from_str("!=").unwrap(),
        ComparisonOperator::NotEqual
    );
    assert_eq!(
        ComparisonOperator::from_str(" >= ").unwrap(),
        ComparisonOperator::GreaterThanOrEqual
    );
}

#[test]
fn we_cannot_parse_unknown_symbols() {
    assert_eq!(
        ComparisonOperator::from_str("=>"),
        Err(ParseError::OperatorParseError("=>".to_string()))
    );
    assert!(serde_json::from_str::<ComparisonOperator>("\"~~\"").is_err());
}

#[test]
fn commuting_an_operator_preserves_its_answer_under_operand_swap() {
    for op in ComparisonOperator::ALL {
        assert_eq!(op.commute().commute(), op);
        for ordering in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(op.accepts(ordering), op.commute().accepts(ordering.reverse()));
        }
    }
}

#[test]
fn only_not_equal_lacks_a_btree_strategy() {
    let strategies: Vec<_> = ComparisonOperator::ALL
        .iter()
        .filter_map(|op| op.btree_strategy())
        .collect();
    assert_eq!(strategies, vec![3, 1, 2, 5, 4]);
    assert_eq!(ComparisonOperator::NotEqual.btree_strategy(), None);
}

#[test]
fn operators_serialize_as_their_symbols() {
    let json = serde_json::to_string(&ComparisonOperator::LessThanOrEqual).unwrap();
    assert_eq!(json, "\"<=\"");
    assert_eq!(
        serde_json::from_str::<ComparisonOperator>(&json).unwrap(),
        ComparisonOperator::LessThanOrEqual
    );
}
