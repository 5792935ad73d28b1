//! Student assistance request records
//!
//! A `Request` is the only persisted entity. Its JSON layout (camelCase keys,
//! lowercase status, ISO 8601 timestamp) matches the slot written by the
//! original browser dashboard so existing data loads unchanged.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a request (creation time in milliseconds, bumped on collision)
pub type RequestId = u64;

/// Grades offered by the submission form
pub const GRADES: &[&str] = &["1st Grade", "2nd Grade", "3rd Grade", "4th Grade", "5th Grade"];

/// Subjects offered by the submission form
pub const SUBJECTS: &[&str] = &["Mathematics", "English", "Science", "Social Studies", "Hindi"];

/// Status of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Waiting for an admin decision
    Pending,
    /// Accepted by an admin
    Approved,
    /// Declined by an admin
    Rejected,
}

impl RequestStatus {
    pub fn name(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "🕒",
            RequestStatus::Approved => "✅",
            RequestStatus::Rejected => "⛔",
        }
    }

    /// Whether an admin has already decided on the request
    pub fn is_resolved(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

/// Admin decision on a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub fn name(&self) -> &'static str {
        self.status().name()
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            Decision::Approved => RequestStatus::Approved,
            Decision::Rejected => RequestStatus::Rejected,
        }
    }
}

impl From<Decision> for RequestStatus {
    fn from(decision: Decision) -> Self {
        decision.status()
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields a manager fills in when submitting a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFields {
    pub student_name: String,
    pub grade: String,
    pub subject: String,
    pub message: String,
}

impl RequestFields {
    pub fn new(
        student_name: impl Into<String>,
        grade: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            grade: grade.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Form label of the first field that is empty or whitespace-only
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("student name", &self.student_name),
            ("grade", &self.grade),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }
}

/// A student assistance request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: RequestId,
    pub student_name: String,
    pub grade: String,
    pub subject: String,
    pub message: String,
    pub status: RequestStatus,
    /// Username of the manager session that created the request
    pub submitted_by: String,
    #[serde(with = "iso_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Request {
    /// Build a pending request from submitted fields
    ///
    /// The timestamp is truncated to milliseconds, the precision the slot format carries.
    pub fn pending(
        id: RequestId,
        fields: RequestFields,
        submitted_by: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_name: fields.student_name,
            grade: fields.grade,
            subject: fields.subject,
            message: fields.message,
            status: RequestStatus::Pending,
            submitted_by: submitted_by.into(),
            timestamp: timestamp.trunc_subsecs(3),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// ISO 8601 timestamps in the `2024-05-01T10:00:00.000Z` shape
///
/// Millisecond values are written with exactly three fractional digits; anything
/// finer keeps its full precision so that load/save never alters a record.
mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Timelike, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        let format = if ts.nanosecond() % 1_000_000 == 0 {
            SecondsFormat::Millis
        } else {
            SecondsFormat::AutoSi
        };
        serializer.serialize_str(&ts.to_rfc3339_opts(format, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
