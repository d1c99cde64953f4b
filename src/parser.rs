use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, multispace0, space0, space1},
    combinator::map_res,
    sequence::preceded,
    IResult,
};
use std::path::PathBuf;

/// Parse line ending (handles both \n and \r\n)
fn line_ending(input: &str) -> IResult<&str, &str> {
    alt((tag("\n"), tag("\r\n")))(input)
}

/// Parse a single unsigned 64 bit integer
fn parse_u64(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |s: &str| s.parse::<u64>())(input)
}

/// Parse an `n k` pair
pub fn parse_pair(input: &str) -> IResult<&str, (u64, u64)> {
    let (input, n) = preceded(space0, parse_u64)(input)?;
    let (input, k) = preceded(space1, parse_u64)(input)?;

    Ok((input, (n, k)))
}

/// Parse an `n k expected` validation case
pub fn parse_case(input: &str) -> IResult<&str, (u64, u64, u64)> {
    let (input, (n, k)) = parse_pair(input)?;
    let (input, expected) = preceded(space1, parse_u64)(input)?;

    Ok((input, (n, k, expected)))
}

/// Parse a whole input: one case per line, blank lines allowed anywhere
fn parse_lines<T, F>(input: &str, case: F) -> IResult<&str, Vec<T>>
where
    F: Fn(&str) -> IResult<&str, T>,
{
    let mut items = Vec::new();
    let mut remaining = input;

    loop {
        // Skip blank lines between cases
        let (rest, _) = multispace0(remaining)?;
        remaining = rest;

        if remaining.is_empty() {
            break;
        }

        let (rest, item) = case(remaining)?;
        items.push(item);

        // Each case must end at the end of its line
        let (rest, _) = space0(rest)?;
        remaining = if rest.is_empty() {
            rest
        } else {
            line_ending(rest)?.0
        };
    }

    Ok((remaining, items))
}

/// Parse input containing `n k` pairs, one per line
pub fn parse_pairs(input: &str) -> IResult<&str, Vec<(u64, u64)>> {
    parse_lines(input, parse_pair)
}

/// Parse input containing `n k expected` cases, one per line
pub fn parse_cases(input: &str) -> IResult<&str, Vec<(u64, u64, u64)>> {
    parse_lines(input, parse_case)
}

/// Parse a single `n k` line, requiring the whole line to be consumed
pub fn parse_pair_line(input: &str) -> Result<(u64, u64), Box<dyn std::error::Error>> {
    match parse_pair(input) {
        Ok((rest, pair)) if rest.trim().is_empty() => Ok(pair),
        Ok((rest, _)) => Err(format!("Unexpected trailing input: {:?}", rest.trim()).into()),
        Err(e) => Err(format!("Parse error: {}", e).into()),
    }
}

/// Parse an instance file of `n k` pairs
pub fn parse_pair_file(path: &PathBuf) -> Result<Vec<(u64, u64)>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;

    match parse_pairs(&content) {
        Ok((_, pairs)) => Ok(pairs),
        Err(e) => Err(format!("Parse error: {}", e).into()),
    }
}

/// Parse a validation file of `n k expected` cases
pub fn parse_case_file(path: &PathBuf) -> Result<Vec<(u64, u64, u64)>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;

    match parse_cases(&content) {
        Ok((_, cases)) => Ok(cases),
        Err(e) => Err(format!("Parse error: {}", e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_tolerate_blank_lines_and_padding() {
        let input = "\n  5 2\n\n10\t5   \n67 33";
        let (rest, pairs) = parse_pairs(input).unwrap();
        assert!(rest.is_empty());
        assert_eq!(pairs, vec![(5, 2), (10, 5), (67, 33)]);
    }

    #[test]
    fn extra_column_in_pair_file_is_rejected() {
        assert!(parse_pairs("5 2 10\n").is_err());
    }

    #[test]
    fn missing_column_in_case_file_is_rejected() {
        assert!(parse_cases("5 2\n").is_err());
    }

    #[test]
    fn pair_line_rejects_trailing_garbage() {
        assert!(parse_pair_line("5 2").is_ok());
        assert!(parse_pair_line(" 5  2 ").is_ok());
        assert!(parse_pair_line("5 2 junk").is_err());
        assert!(parse_pair_line("five 2").is_err());
    }
}
