//! Wire types shared between the orchestrators and the server.

use serde::{Deserialize, Serialize};

/// Speaker of a single conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of a conversation. The caller supplies the full ordered history;
/// nothing is persisted between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Which side of a lease the requester is on. Selects the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Tenant,
    Landlord,
}

/// Optional property context attached to a chat request by the UI.
/// Accepted and logged, but not woven into the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_amount: Option<f64>,
}

/// Free-form description of a leasable space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub title: String,
    pub location: String,
    pub price: String,
    pub size: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub amenities: Vec<String>,
    pub description: String,
}

/// Description of the business the requester wants to run in the space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    pub business_type: String,
    pub target_market: String,
    pub expected_revenue: String,
    pub employee_count: String,
    pub operating_hours: String,
    pub special_requirements: Vec<String>,
}

/// Overall risk bucket of a feasibility analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Monthly financial projections within an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjections {
    pub monthly_revenue: String,
    pub operating_costs: String,
    pub net_profit: String,
    pub break_even_months: u32,
}

/// Complete feasibility analysis, produced fresh per request either by the
/// model or by the deterministic fallback. Same wire shape either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityAnalysis {
    /// Estimated chance of success, 0-100.
    pub success_rate: u8,
    /// Estimated market demand, 0-100.
    pub market_demand: u8,
    pub risk_level: RiskLevel,
    pub projected_revenue: String,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub executive_summary: String,
    pub competitor_analysis: String,
    pub financial_projections: FinancialProjections,
}
