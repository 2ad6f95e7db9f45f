use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::SubmissionError;
use crate::input::{expand_key, parse_line, SUBMISSION_KEYS};
use crate::time::{parse_clock_time, parse_date};

/// A validated clock-in/clock-out submission. End before start is accepted as is.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub person: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Submission {
    pub fn new(
        person: &str,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, SubmissionError> {
        let person = person.trim();
        if person.is_empty() {
            return Err(SubmissionError::EmptyPerson);
        }
        Ok(Self {
            person: person.to_string(),
            date,
            start,
            end,
        })
    }

    /// Builds a submission from the four raw form fields.
    pub fn from_fields(
        person: &str,
        date: &str,
        start: &str,
        end: &str,
        today: NaiveDate,
    ) -> Result<Self, SubmissionError> {
        if person.trim().is_empty() {
            return Err(SubmissionError::EmptyPerson);
        }
        let date = parse_date(date, today)?;
        let start = parse_clock_time(start)?;
        let end = parse_clock_time(end)?;
        Self::new(person, date, start, end)
    }

    /// Parses `Name date:YYYY-MM-DD in:HH:MM out:HH:MM`; keys may be abbreviated.
    pub fn from_line(line: &str, today: NaiveDate) -> Result<Self, SubmissionError> {
        let parsed = parse_line(line);

        let mut date = None;
        let mut start = None;
        let mut end = None;
        for (key, value) in parsed.metadata {
            let field = expand_key(&key, &SUBMISSION_KEYS)?;
            let slot = match field {
                "date" => &mut date,
                "in" => &mut start,
                _ => &mut end,
            };
            if slot.replace(value).is_some() {
                return Err(SubmissionError::DuplicateField(field));
            }
        }

        if parsed.name.trim().is_empty() {
            return Err(SubmissionError::EmptyPerson);
        }
        let date = date.ok_or(SubmissionError::MissingField("date"))?;
        let start = start.ok_or(SubmissionError::MissingField("in"))?;
        let end = end.ok_or(SubmissionError::MissingField("out"))?;

        Self::from_fields(&parsed.name, &date, &start, &end, today)
    }
}

/// One recorded day for one person. Never edited after recording.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub person: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_hours: f64,
    pub daily_compliant: bool,
}
