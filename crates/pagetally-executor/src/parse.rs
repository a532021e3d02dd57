use pagetally_common::{Error, Record, Result};

const NULL_TOKENS: [&str; 4] = ["null", "none", "nil", "-"];

/// Reads records from free text.
///
/// Tokens are separated by commas, whitespace or newlines. `null`, `none`,
/// `nil` and a lone `-` are absent records; signed integers are present ones.
/// Negative integers parse fine and are left for the aggregation to skip.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_record(i + 1, token))
        .collect()
}

fn parse_record(position: usize, token: &str) -> Result<Record> {
    if NULL_TOKENS.iter().any(|n| token.eq_ignore_ascii_case(n)) {
        return Ok(None);
    }
    token
        .parse::<i64>()
        .map(Some)
        .map_err(|_| Error::invalid_record(position, token))
}
