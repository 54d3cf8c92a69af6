// Pipeline parser for the chart config DSL

use super::axes::parse_axes;
use super::filter::parse_filter;
use super::lexer::ws;
use super::modifiers::{parse_chart, parse_omit_zero, parse_sort};
use crate::config::{AxisSpec, ChartConfig, ChartKind, SortOrder, YAxis};
use crate::filter::FilterClause;
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{eof, map},
    error::{Error, ErrorKind},
    multi::separated_list0,
    IResult,
};

#[derive(Debug)]
enum PipelineComponent {
    Axes(String, YAxis),
    Chart(ChartKind),
    Sort(Option<SortOrder>, Option<SortOrder>),
    Filter(FilterClause),
    OmitZero,
}

fn parse_pipeline_component(input: &str) -> IResult<&str, PipelineComponent> {
    alt((
        map(parse_axes, |(x, y)| PipelineComponent::Axes(x, y)),
        map(parse_chart, PipelineComponent::Chart),
        map(parse_sort, |(x, y)| PipelineComponent::Sort(x, y)),
        map(parse_filter, PipelineComponent::Filter),
        map(parse_omit_zero, |_| PipelineComponent::OmitZero),
    ))(input)
}

/// Parse a complete chart configuration.
/// Format: component | component | ...
pub fn parse_chart_config(input: &str) -> IResult<&str, ChartConfig> {
    // Parse list of components separated by "|"
    let (input, components) = separated_list0(ws(tag("|")), parse_pipeline_component)(input)?;

    // Consume trailing whitespace and ensure end of input
    let (input, _) = ws(eof)(input)?;

    // Aggregate components into a ChartConfig
    let mut axes = None;
    let mut kind = ChartKind::default();
    let mut x_sort = SortOrder::None;
    let mut y_sort = SortOrder::None;
    let mut filters = Vec::new();
    let mut omit_zero = false;

    for component in components {
        match component {
            PipelineComponent::Axes(x, y) => axes = Some((x, y)),
            PipelineComponent::Chart(k) => kind = k,
            PipelineComponent::Sort(x, y) => {
                if let Some(order) = x {
                    x_sort = order;
                }
                if let Some(order) = y {
                    y_sort = order;
                }
            }
            PipelineComponent::Filter(clause) => filters.push(clause),
            PipelineComponent::OmitZero => omit_zero = true,
        }
    }

    // Validation: the axis selection is mandatory
    let (x_column, y_axis) = match axes {
        Some(axes) => axes,
        None => return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    };

    Ok((
        input,
        ChartConfig {
            kind,
            x_axis: AxisSpec {
                column: x_column,
                sort: x_sort,
            },
            y_axis,
            y_sort,
            filters,
            omit_zero,
        },
    ))
}
