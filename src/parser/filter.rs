// Filter clause parser for the chart config DSL

use super::lexer::{literal, name, ws};
use crate::filter::{FilterClause, FilterOp};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, opt},
    sequence::{pair, preceded},
    IResult,
};

fn filter_op(input: &str) -> IResult<&str, FilterOp> {
    alt((
        map(tag("not_equals"), |_| FilterOp::NotEquals),
        map(tag("equals"), |_| FilterOp::Equals),
        map(tag("not_contains"), |_| FilterOp::NotContains),
        map(tag("contains"), |_| FilterOp::Contains),
        map(tag("is_not_empty"), |_| FilterOp::IsNotEmpty),
        map(tag("is_empty"), |_| FilterOp::IsEmpty),
    ))(input)
}

/// Parse one filter clause.
/// Format: filter(column: Priority, op: equals, value: "High")
/// The value argument may be omitted for is_empty / is_not_empty.
pub fn parse_filter(input: &str) -> IResult<&str, FilterClause> {
    let (input, _) = ws(tag("filter"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, _) = ws(tag("column:"))(input)?;
    let (input, column) = ws(name)(input)?;
    let (input, _) = ws(char(','))(input)?;

    let (input, _) = ws(tag("op:"))(input)?;
    let (input, op) = ws(filter_op)(input)?;

    let (input, value) = opt(preceded(
        pair(ws(char(',')), ws(tag("value:"))),
        ws(literal),
    ))(input)?;

    let (input, _) = ws(char(')'))(input)?;

    Ok((
        input,
        FilterClause {
            column,
            op,
            value: value.unwrap_or_default(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_with_quoted_value() {
        let (_, clause) = parse_filter(r#"filter(column: Priority, op: equals, value: "High")"#).unwrap();
        assert_eq!(clause.column, "Priority");
        assert_eq!(clause.op, FilterOp::Equals);
        assert_eq!(clause.value, "High");
    }

    #[test]
    fn test_parse_filter_with_bare_and_numeric_values() {
        let (_, clause) = parse_filter("filter(column: Tags, op: contains, value: Bug)").unwrap();
        assert_eq!(clause.op, FilterOp::Contains);
        assert_eq!(clause.value, "Bug");

        let (_, clause) = parse_filter("filter(column: Points, op: equals, value: 8)").unwrap();
        assert_eq!(clause.value, "8");
    }

    #[test]
    fn test_parse_filter_without_value() {
        let (_, clause) = parse_filter("filter(column: Tags, op: is_empty)").unwrap();
        assert_eq!(clause.op, FilterOp::IsEmpty);
        assert_eq!(clause.value, "");
    }

    #[test]
    fn test_parse_filter_negated_ops() {
        let (_, clause) = parse_filter("filter(column: Status, op: not_equals, value: Done)").unwrap();
        assert_eq!(clause.op, FilterOp::NotEquals);
        let (_, clause) = parse_filter("filter(column: Tags, op: is_not_empty)").unwrap();
        assert_eq!(clause.op, FilterOp::IsNotEmpty);
    }

    #[test]
    fn test_parse_filter_unknown_op() {
        assert!(parse_filter("filter(column: Status, op: between, value: x)").is_err());
    }

    #[test]
    fn test_parse_filter_missing_column() {
        assert!(parse_filter("filter(op: equals, value: x)").is_err());
    }
}
