use crate::consts::{NUMBER_DATE_COMPONENTS, NUMBER_DATE_SEPARATORS};
use crate::{DateComponent, ParseError, RawDate};

/// Splits a delimited date string into a raw (year, month, day) triple.
///
/// `order` names the component held by each of the three segments, e.g.
/// [`DateComponent::MONTH_DAY_YEAR`] for `8/15/1991`. Only the shape is
/// checked here; range validation is left to derivation.
///
/// # Errors
/// Returns a `ParseError` if the input is empty, `separator` does not occur
/// exactly twice, a segment is empty or non-numeric, or `order` repeats a
/// component.
pub fn parse_components(
    order: [DateComponent; NUMBER_DATE_COMPONENTS],
    input: &str,
    separator: char,
) -> Result<RawDate, ParseError> {
    validate_order(order)?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let found = trimmed.matches(separator).count();
    if found != NUMBER_DATE_SEPARATORS {
        return Err(ParseError::SeparatorCount {
            separator,
            expected: NUMBER_DATE_SEPARATORS,
            found,
        });
    }

    let mut raw = RawDate::default();
    for (component, segment) in order.into_iter().zip(trimmed.split(separator)) {
        raw.set(component, parse_segment(component, segment.trim())?);
    }
    Ok(raw)
}

fn validate_order(order: [DateComponent; NUMBER_DATE_COMPONENTS]) -> Result<(), ParseError> {
    let named = |component| order.iter().filter(|c| **c == component).count() == 1;
    if named(DateComponent::Year) && named(DateComponent::Month) && named(DateComponent::Day) {
        Ok(())
    } else {
        Err(ParseError::InvalidOrder)
    }
}

fn parse_segment(component: DateComponent, segment: &str) -> Result<i32, ParseError> {
    if segment.is_empty() {
        return Err(ParseError::EmptySegment(component));
    }
    segment.parse::<i32>().map_err(|_| ParseError::NonNumeric {
        component,
        segment: segment.to_owned(),
    })
}
