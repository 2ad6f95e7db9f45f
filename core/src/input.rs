use crate::error::SubmissionError;

pub const SUBMISSION_KEYS: [&str; 3] = ["date", "in", "out"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    /// `key:value` pairs in line order, keys lowercased.
    pub metadata: Vec<(String, String)>,
}

/// Splits words into a free-text name and `key:value` pairs.
/// Only the first colon separates, so `in:09:30` keeps its clock value.
pub fn parse_args(args: &[&str]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = Vec::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() && key.chars().all(|c| c.is_alphabetic()) {
                metadata.push((key.to_lowercase(), value.to_string()));
                continue;
            }
        }
        name_parts.push(*arg);
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
    }
}

pub fn parse_line(line: &str) -> ParsedInput {
    let args: Vec<&str> = line.split_whitespace().collect();
    parse_args(&args)
}

pub fn expand_key(key: &str, candidates: &[&'static str]) -> Result<&'static str, SubmissionError> {
    if let Some(exact) = candidates.iter().find(|&&c| c == key) {
        return Ok(*exact);
    }

    let matches: Vec<&'static str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(SubmissionError::UnknownKey(key.to_string())),
        _ => Err(SubmissionError::AmbiguousKey {
            key: key.to_string(),
            candidates: matches,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission_line() {
        let parsed = parse_line("Ana Maria date:2024-03-04 in:09:00 out:17:30");
        assert_eq!(parsed.name, "Ana Maria");
        assert_eq!(
            parsed.metadata,
            vec![
                ("date".to_string(), "2024-03-04".to_string()),
                ("in".to_string(), "09:00".to_string()),
                ("out".to_string(), "17:30".to_string()),
            ]
        );
    }

    #[test]
    fn test_bare_clock_value_stays_in_name() {
        let parsed = parse_line("Ben 09:00");
        assert_eq!(parsed.name, "Ben 09:00");
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn test_expand_key() {
        assert_eq!(expand_key("d", &SUBMISSION_KEYS).unwrap(), "date");
        assert_eq!(expand_key("i", &SUBMISSION_KEYS).unwrap(), "in");
        assert_eq!(expand_key("ou", &SUBMISSION_KEYS).unwrap(), "out");
        assert_eq!(expand_key("out", &SUBMISSION_KEYS).unwrap(), "out");

        assert_eq!(
            expand_key("x", &SUBMISSION_KEYS),
            Err(SubmissionError::UnknownKey("x".to_string()))
        );
        assert!(matches!(
            expand_key("", &SUBMISSION_KEYS),
            Err(SubmissionError::AmbiguousKey { .. })
        ));
    }
}
