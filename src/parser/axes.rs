// Axis selection parser for the chart config DSL

use super::lexer::{name, ws};
use crate::config::YAxis;
use nom::{bytes::complete::tag, character::complete::char, IResult};

/// Parse the axis selection.
/// Format: axes(x: Status, y: count). The y value is a column name or the
/// count sentinel; quoted names allow spaces.
pub fn parse_axes(input: &str) -> IResult<&str, (String, YAxis)> {
    let (input, _) = ws(tag("axes"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, _) = ws(tag("x:"))(input)?;
    let (input, x_column) = ws(name)(input)?;
    let (input, _) = ws(char(','))(input)?;

    let (input, _) = ws(tag("y:"))(input)?;
    let (input, y_name) = ws(name)(input)?;

    let (input, _) = ws(char(')'))(input)?;

    Ok((input, (x_column, YAxis::from(y_name))))
}
