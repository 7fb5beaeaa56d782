//! Job-type enumeration and its translation-key mapping.
//!
//! Unknown values are passed through unchanged rather than rejected, so
//! legacy or not-yet-mapped values coming from the API still render as text.

#[cfg(test)]
#[path = "job_type_test.rs"]
mod job_type_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Employment category of a job posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
    NotApplicable,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
        JobType::Internship,
        JobType::NotApplicable,
    ];

    /// Wire value as sent by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::Freelance => "freelance",
            Self::Internship => "internship",
            Self::NotApplicable => "not_applicable",
        }
    }

    /// Stable translation key for display labels.
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::FullTime => "job_type.full_time",
            Self::PartTime => "job_type.part_time",
            Self::Contract => "job_type.contract",
            Self::Freelance => "job_type.freelance",
            Self::Internship => "job_type.internship",
            Self::NotApplicable => "job_type.not_applicable",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job type: {0}")]
pub struct ParseJobTypeError(pub String);

impl FromStr for JobType {
    type Err = ParseJobTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseJobTypeError(s.to_owned()))
    }
}

/// Map a raw job-type value to its translation key.
///
/// - `None` or empty input yields an empty string.
/// - Known values yield their fixed key.
/// - Anything else is returned unchanged.
pub fn map_job_type(value: Option<&str>) -> String {
    match value {
        None | Some("") => String::new(),
        Some(raw) => match raw.parse::<JobType>() {
            Ok(job_type) => job_type.translation_key().to_owned(),
            Err(_) => raw.to_owned(),
        },
    }
}
