// ABOUTME: Partnership, collaborator, and milestone type definitions
// ABOUTME: Serialized field names match the persisted camelCase layout

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from its wire value fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind}: '{value}'. Must be one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        ParseEnumError {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Kind of business relationship
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PartnershipType {
    Strategic,
    Technology,
    Marketing,
    Distribution,
    JointVenture,
}

impl PartnershipType {
    pub const ALL: [PartnershipType; 5] = [
        PartnershipType::Strategic,
        PartnershipType::Technology,
        PartnershipType::Marketing,
        PartnershipType::Distribution,
        PartnershipType::JointVenture,
    ];

    /// Value used in persisted data and exported agreements
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnershipType::Strategic => "strategic",
            PartnershipType::Technology => "technology",
            PartnershipType::Marketing => "marketing",
            PartnershipType::Distribution => "distribution",
            PartnershipType::JointVenture => "joint-venture",
        }
    }

    /// Long label shown by the creation form
    pub fn label(&self) -> &'static str {
        match self {
            PartnershipType::Strategic => "Strategic Partnership",
            PartnershipType::Technology => "Technology Integration",
            PartnershipType::Marketing => "Marketing Collaboration",
            PartnershipType::Distribution => "Distribution Partnership",
            PartnershipType::JointVenture => "Joint Venture",
        }
    }
}

impl Default for PartnershipType {
    fn default() -> Self {
        PartnershipType::Strategic
    }
}

impl fmt::Display for PartnershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PartnershipType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        PartnershipType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                let expected: Vec<&str> = PartnershipType::ALL.iter().map(|t| t.as_str()).collect();
                ParseEnumError::new("partnership type", s, &expected)
            })
    }
}

/// Status options for partnerships
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartnershipStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl PartnershipStatus {
    pub const ALL: [PartnershipStatus; 4] = [
        PartnershipStatus::Pending,
        PartnershipStatus::Active,
        PartnershipStatus::Completed,
        PartnershipStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartnershipStatus::Pending => "pending",
            PartnershipStatus::Active => "active",
            PartnershipStatus::Completed => "completed",
            PartnershipStatus::Cancelled => "cancelled",
        }
    }
}

impl Default for PartnershipStatus {
    fn default() -> Self {
        PartnershipStatus::Pending
    }
}

impl fmt::Display for PartnershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartnershipStatus::Pending => write!(f, "Pending"),
            PartnershipStatus::Active => write!(f, "Active"),
            PartnershipStatus::Completed => write!(f, "Completed"),
            PartnershipStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for PartnershipStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PartnershipStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                ParseEnumError::new(
                    "partnership status",
                    s,
                    &["pending", "active", "completed", "cancelled"],
                )
            })
    }
}

/// Milestone status options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl MilestoneStatus {
    pub const ALL: [MilestoneStatus; 4] = [
        MilestoneStatus::Pending,
        MilestoneStatus::InProgress,
        MilestoneStatus::Completed,
        MilestoneStatus::Blocked,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "pending",
            MilestoneStatus::InProgress => "in-progress",
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Blocked => "blocked",
        }
    }
}

impl Default for MilestoneStatus {
    fn default() -> Self {
        MilestoneStatus::Pending
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneStatus::Pending => write!(f, "Pending"),
            MilestoneStatus::InProgress => write!(f, "In Progress"),
            MilestoneStatus::Completed => write!(f, "Completed"),
            MilestoneStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

impl FromStr for MilestoneStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        MilestoneStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                ParseEnumError::new(
                    "milestone status",
                    s,
                    &["pending", "in-progress", "completed", "blocked"],
                )
            })
    }
}

/// Accepts ids written either as strings or as JSON numbers.
///
/// Older browser exports used millisecond timestamps as ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(u64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
        RawId::Float(id) => id.to_string(),
    })
}

/// A person associated with a partnership
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collaborator {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
}

/// A tracked deliverable of a partnership
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: MilestoneStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A business partnership record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Partnership {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    #[serde(default)]
    pub industry: String,
    pub description: String,
    #[serde(rename = "partnershipType", default)]
    pub partnership_type: PartnershipType,
    #[serde(rename = "expectedValue", default)]
    pub expected_value: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub status: PartnershipStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    /// Reserved for attached documents; always empty for now
    #[serde(default)]
    pub documents: Vec<serde_json::Value>,
}

impl Partnership {
    pub fn collaborator(&self, id: &str) -> Option<&Collaborator> {
        self.collaborators.iter().find(|c| c.id == id)
    }

    pub fn milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }
}

/// Input for creating a new partnership
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnershipCreateInput {
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: String,
    pub industry: Option<String>,
    pub description: String,
    #[serde(rename = "partnershipType")]
    pub partnership_type: Option<PartnershipType>,
    #[serde(rename = "expectedValue")]
    pub expected_value: Option<String>,
    pub timeline: Option<String>,
}

/// Input for updating an existing partnership; `None` leaves a field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnershipUpdateInput {
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    #[serde(rename = "contactEmail")]
    pub contact_email: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "partnershipType")]
    pub partnership_type: Option<PartnershipType>,
    #[serde(rename = "expectedValue")]
    pub expected_value: Option<String>,
    pub timeline: Option<String>,
    pub status: Option<PartnershipStatus>,
    pub collaborators: Option<Vec<Collaborator>>,
    pub milestones: Option<Vec<Milestone>>,
}

impl PartnershipUpdateInput {
    pub fn status(status: PartnershipStatus) -> Self {
        PartnershipUpdateInput {
            status: Some(status),
            ..Default::default()
        }
    }

    /// True when the update would not change anything
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.contact_email.is_none()
            && self.industry.is_none()
            && self.description.is_none()
            && self.partnership_type.is_none()
            && self.expected_value.is_none()
            && self.timeline.is_none()
            && self.status.is_none()
            && self.collaborators.is_none()
            && self.milestones.is_none()
    }
}

/// Input for adding a collaborator to a partnership
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollaboratorCreateInput {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

/// Input for adding a milestone to a partnership
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilestoneCreateInput {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}
