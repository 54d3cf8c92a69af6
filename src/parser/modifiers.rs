// chart(), sort(), and omit_zero() parsers for the chart config DSL

use super::lexer::ws;
use crate::config::{ChartKind, SortOrder};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::map,
    multi::separated_list0,
    sequence::preceded,
    IResult,
};

/// Parse a chart kind selection.
/// Format: chart(bar) | chart(radar) | chart(radial) | chart(heatmap)
pub fn parse_chart(input: &str) -> IResult<&str, ChartKind> {
    let (input, _) = ws(tag("chart"))(input)?;
    let (input, _) = ws(char('('))(input)?;
    let (input, kind) = ws(alt((
        map(tag("bar"), |_| ChartKind::Bar),
        map(tag("radar"), |_| ChartKind::Radar),
        map(tag("radial"), |_| ChartKind::Radial),
        map(tag("heatmap"), |_| ChartKind::Heatmap),
    )))(input)?;
    let (input, _) = ws(char(')'))(input)?;
    Ok((input, kind))
}

fn sort_order(input: &str) -> IResult<&str, SortOrder> {
    alt((
        map(tag("asc"), |_| SortOrder::Asc),
        map(tag("desc"), |_| SortOrder::Desc),
        map(tag("none"), |_| SortOrder::None),
    ))(input)
}

/// Parse sort directions for buckets (x) and legend keys (y).
/// Format: sort(x: asc) or sort(x: asc, y: desc)
pub fn parse_sort(input: &str) -> IResult<&str, (Option<SortOrder>, Option<SortOrder>)> {
    let (input, _) = ws(tag("sort"))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("x:")), ws(sort_order)), |order| {
                ("x", order)
            }),
            map(preceded(ws(tag("y:")), ws(sort_order)), |order| {
                ("y", order)
            }),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut x = None;
    let mut y = None;
    for (key, order) in args {
        match key {
            "x" => x = Some(order),
            "y" => y = Some(order),
            _ => {}
        }
    }

    Ok((input, (x, y)))
}

/// Parse the zero-bucket removal flag.
/// Format: omit_zero()
pub fn parse_omit_zero(input: &str) -> IResult<&str, ()> {
    let (input, _) = ws(tag("omit_zero"))(input)?;
    let (input, _) = ws(char('('))(input)?;
    let (input, _) = ws(char(')'))(input)?;
    Ok((input, ()))
}
