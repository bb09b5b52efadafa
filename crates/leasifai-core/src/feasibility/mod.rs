//! Feasibility orchestration: one structured-output provider call with a
//! deterministic fallback analysis when the call or the parse fails.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::Result;
use crate::provider::{GenerateRequest, TextGenerator};
use crate::types::{
    BusinessDetails, FeasibilityAnalysis, FinancialProjections, PropertyDetails, RiskLevel,
};

/// Sampling temperature for feasibility analyses.
const ANALYSIS_TEMPERATURE: f32 = 0.7;

/// How an analysis was obtained. Collapsed to one wire shape at the HTTP
/// boundary; the two branches exist so failure handling is explicit rather
/// than exception-driven.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    /// Parsed from the provider's structured output.
    ModelDerived(FeasibilityAnalysis),
    /// Synthesized from the request after a provider or parse failure.
    Fallback(FeasibilityAnalysis),
}

impl AnalysisOutcome {
    pub fn into_analysis(self) -> FeasibilityAnalysis {
        match self {
            Self::ModelDerived(analysis) | Self::Fallback(analysis) => analysis,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Stateless feasibility orchestrator. One provider call per request, no
/// retries; never fails outright.
pub struct FeasibilityOrchestrator {
    provider: Arc<dyn TextGenerator>,
    model: String,
}

impl FeasibilityOrchestrator {
    pub fn new(provider: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Produce a feasibility analysis for the property/business pairing.
    ///
    /// The model path and the fallback path share the already-parsed request,
    /// so a failed provider call never needs to re-read anything.
    pub async fn analyze(
        &self,
        property: &PropertyDetails,
        business: &BusinessDetails,
    ) -> AnalysisOutcome {
        info!(
            property = %property.title,
            business = %business.business_type,
            "starting feasibility analysis"
        );

        match self.model_analysis(property, business).await {
            Ok(analysis) => {
                info!("feasibility analysis derived from model output");
                AnalysisOutcome::ModelDerived(analysis)
            }
            Err(e) => {
                warn!(error = %e, "model analysis failed, synthesizing fallback");
                AnalysisOutcome::Fallback(fallback_analysis(property, business))
            }
        }
    }

    async fn model_analysis(
        &self,
        property: &PropertyDetails,
        business: &BusinessDetails,
    ) -> Result<FeasibilityAnalysis> {
        let request = GenerateRequest::prompt(
            self.model.clone(),
            analysis_prompt(property, business),
            ANALYSIS_TEMPERATURE,
        );

        let text = self.provider.generate(&request).await?;
        let cleaned = strip_code_fences(&text);
        let analysis: FeasibilityAnalysis = serde_json::from_str(cleaned)?;
        Ok(analysis)
    }
}

/// Build the single analysis prompt embedding every request field.
fn analysis_prompt(property: &PropertyDetails, business: &BusinessDetails) -> String {
    format!(
        r#"As a commercial real estate and business feasibility expert, analyze the following property and business combination:

PROPERTY DETAILS:
- Title: {title}
- Location: {location}
- Price: {price}
- Size: {size}
- Type: {property_type}
- Amenities: {amenities}
- Description: {description}

BUSINESS DETAILS:
- Business Type: {business_type}
- Target Market: {target_market}
- Expected Revenue: {expected_revenue}
- Employee Count: {employee_count}
- Operating Hours: {operating_hours}
- Special Requirements: {special_requirements}

Please provide a comprehensive feasibility analysis. Base your analysis on:
1. Location suitability for the business type
2. Market demand in the area
3. Competition analysis
4. Financial viability
5. Risk factors
6. Growth potential

Respond ONLY with a valid JSON object in this exact format (no markdown, no code blocks):
{{
  "successRate": 75,
  "marketDemand": 68,
  "riskLevel": "medium",
  "projectedRevenue": "$500,000 annually",
  "keyInsights": ["insight1", "insight2", "insight3"],
  "recommendations": ["recommendation1", "recommendation2", "recommendation3"],
  "executiveSummary": "detailed summary paragraph",
  "competitorAnalysis": "analysis of local competition",
  "financialProjections": {{
    "monthlyRevenue": "$42,000",
    "operatingCosts": "$28,000",
    "netProfit": "$14,000",
    "breakEvenMonths": 8
  }}
}}

Provide realistic, data-driven insights based on the property and business details provided."#,
        title = property.title,
        location = property.location,
        price = property.price,
        size = property.size,
        property_type = property.property_type,
        amenities = property.amenities.join(", "),
        description = property.description,
        business_type = business.business_type,
        target_market = business.target_market,
        expected_revenue = business.expected_revenue,
        employee_count = business.employee_count,
        operating_hours = business.operating_hours,
        special_requirements = business.special_requirements.join(", "),
    )
}

/// Strip markdown code fences from model output.
///
/// Models sometimes wrap JSON in ```json ... ``` blocks despite being told
/// not to. Unfenced input comes back unchanged, so fenced and unfenced
/// payloads parse identically.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    if !trimmed.starts_with("```") {
        return trimmed;
    }

    let without_prefix = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);

    match without_prefix.rfind("```") {
        Some(end) => without_prefix[..end].trim(),
        None => without_prefix.trim(),
    }
}

/// Deterministic analysis used when the provider call or parse fails.
/// Built entirely from the already-parsed request fields.
pub fn fallback_analysis(
    property: &PropertyDetails,
    business: &BusinessDetails,
) -> FeasibilityAnalysis {
    let projected_revenue = if business.expected_revenue.is_empty() {
        "$500,000 annually".to_string()
    } else {
        business.expected_revenue.clone()
    };

    FeasibilityAnalysis {
        success_rate: 72,
        market_demand: 65,
        risk_level: RiskLevel::Medium,
        projected_revenue,
        key_insights: vec![
            format!(
                "{} shows good potential for {}",
                property.location, business.business_type
            ),
            format!(
                "Target market of {} aligns well with location demographics",
                business.target_market
            ),
            format!(
                "Property size of {} is suitable for {} employees",
                property.size, business.employee_count
            ),
        ],
        recommendations: vec![
            "Conduct detailed market research in the local area".to_string(),
            "Consider seasonal variations in customer traffic".to_string(),
            "Develop a strong marketing strategy to differentiate from competitors".to_string(),
        ],
        executive_summary: format!(
            "This {} in {} presents a viable opportunity for your {} business. The location and property features align reasonably well with your business requirements. With proper planning and execution, this venture shows moderate to good potential for success.",
            property.property_type, property.location, business.business_type
        ),
        competitor_analysis: format!(
            "The {} area has moderate competition for {} businesses. Success will depend on differentiation through quality service, unique offerings, and effective marketing to your target market of {}.",
            property.location, business.business_type, business.target_market
        ),
        financial_projections: FinancialProjections {
            monthly_revenue: monthly_revenue_estimate(&business.expected_revenue),
            operating_costs: "$28,000".to_string(),
            net_profit: "$14,000".to_string(),
            break_even_months: 8,
        },
    }
}

/// Derive a monthly revenue figure from a free-form annual revenue string.
///
/// Strips everything except digits and the decimal point, divides by 12, and
/// formats with thousands separators. Absent or unparsable input yields the
/// fixed "$42,000" estimate.
fn monthly_revenue_estimate(expected_revenue: &str) -> String {
    let digits: String = expected_revenue
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(annual) if annual.is_finite() => {
            let monthly = (annual / 12.0).round() as u64;
            format!("${}", group_thousands(monthly))
        }
        _ => "$42,000".to_string(),
    }
}

/// Format an integer with comma thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::ChatTurn;

    fn sample_property() -> PropertyDetails {
        PropertyDetails {
            title: "Ayala Corner Unit".to_string(),
            location: "Makati".to_string(),
            price: "$4,500/mo".to_string(),
            size: "120 sqm".to_string(),
            property_type: "Retail".to_string(),
            amenities: vec!["Parking".to_string(), "24/7 Access".to_string()],
            description: "Ground floor retail unit with street frontage".to_string(),
        }
    }

    fn sample_business() -> BusinessDetails {
        BusinessDetails {
            business_type: "Cafe".to_string(),
            target_market: "Office workers".to_string(),
            expected_revenue: "$600,000".to_string(),
            employee_count: "8".to_string(),
            operating_hours: "7am-9pm".to_string(),
            special_requirements: vec!["Ventilation".to_string()],
        }
    }

    fn model_json() -> &'static str {
        r#"{
            "successRate": 81,
            "marketDemand": 74,
            "riskLevel": "low",
            "projectedRevenue": "$720,000 annually",
            "keyInsights": ["High foot traffic"],
            "recommendations": ["Open early"],
            "executiveSummary": "Strong fit.",
            "competitorAnalysis": "Two nearby cafes.",
            "financialProjections": {
                "monthlyRevenue": "$60,000",
                "operatingCosts": "$35,000",
                "netProfit": "$25,000",
                "breakEvenMonths": 6
            }
        }"#
    }

    struct ScriptedProvider(std::result::Result<String, String>);

    #[async_trait::async_trait]
    impl crate::provider::TextGenerator for ScriptedProvider {
        async fn generate(&self, _request: &GenerateRequest) -> crate::error::Result<String> {
            self.0.clone().map_err(Error::Provider)
        }
    }

    #[test]
    fn test_strip_code_fences_clean_input_unchanged() {
        let input = r#"{"successRate": 75}"#;
        assert_eq!(strip_code_fences(input), input);
    }

    #[test]
    fn test_strip_code_fences_json_tag() {
        let input = "```json\n{\"successRate\": 75}\n```";
        assert_eq!(strip_code_fences(input), r#"{"successRate": 75}"#);
    }

    #[test]
    fn test_strip_code_fences_untagged() {
        let input = "```\n{\"successRate\": 75}\n```";
        assert_eq!(strip_code_fences(input), r#"{"successRate": 75}"#);
    }

    #[test]
    fn test_strip_code_fences_unterminated() {
        let input = "```json\n{\"successRate\": 75}";
        assert_eq!(strip_code_fences(input), r#"{"successRate": 75}"#);
    }

    #[tokio::test]
    async fn test_fenced_and_unfenced_parse_identically() {
        let plain = ScriptedProvider(Ok(model_json().to_string()));
        let fenced = ScriptedProvider(Ok(format!("```json\n{}\n```", model_json())));

        let property = sample_property();
        let business = sample_business();

        let from_plain = FeasibilityOrchestrator::new(std::sync::Arc::new(plain), "gpt-4o")
            .analyze(&property, &business)
            .await;
        let from_fenced = FeasibilityOrchestrator::new(std::sync::Arc::new(fenced), "gpt-4o")
            .analyze(&property, &business)
            .await;

        assert!(!from_plain.is_fallback());
        assert!(!from_fenced.is_fallback());
        assert_eq!(from_plain.into_analysis(), from_fenced.into_analysis());
    }

    #[tokio::test]
    async fn test_provider_failure_yields_fallback() {
        let provider = ScriptedProvider(Err("timeout".to_string()));
        let orchestrator = FeasibilityOrchestrator::new(std::sync::Arc::new(provider), "gpt-4o");

        let property = sample_property();
        let business = sample_business();
        let outcome = orchestrator.analyze(&property, &business).await;

        assert!(outcome.is_fallback());
        let analysis = outcome.into_analysis();
        assert_eq!(analysis.success_rate, 72);
        assert_eq!(analysis.market_demand, 65);
        assert_eq!(analysis.risk_level, RiskLevel::Medium);
        assert!(analysis.key_insights[0].contains("Makati"));
        assert!(analysis.key_insights[0].contains("Cafe"));
    }

    #[tokio::test]
    async fn test_unparsable_model_output_yields_fallback() {
        let provider = ScriptedProvider(Ok("Sure! Here's my analysis in prose form.".to_string()));
        let orchestrator = FeasibilityOrchestrator::new(std::sync::Arc::new(provider), "gpt-4o");

        let property = sample_property();
        let business = sample_business();
        let outcome = orchestrator.analyze(&property, &business).await;

        assert!(outcome.is_fallback());
    }

    #[test]
    fn test_fallback_monthly_revenue_from_annual() {
        // $600,000 / 12 = $50,000
        let analysis = fallback_analysis(&sample_property(), &sample_business());
        assert_eq!(analysis.financial_projections.monthly_revenue, "$50,000");
        assert_eq!(analysis.projected_revenue, "$600,000");
    }

    #[test]
    fn test_fallback_defaults_when_revenue_absent() {
        let mut business = sample_business();
        business.expected_revenue = String::new();

        let analysis = fallback_analysis(&sample_property(), &business);
        assert_eq!(analysis.projected_revenue, "$500,000 annually");
        assert_eq!(analysis.financial_projections.monthly_revenue, "$42,000");
    }

    #[test]
    fn test_fallback_defaults_when_revenue_unparsable() {
        let mut business = sample_business();
        business.expected_revenue = "a lot".to_string();

        let analysis = fallback_analysis(&sample_property(), &business);
        assert_eq!(analysis.financial_projections.monthly_revenue, "$42,000");
        // The raw string is still echoed as the projection.
        assert_eq!(analysis.projected_revenue, "a lot");
    }

    #[test]
    fn test_fallback_round_trip_lossless() {
        let analysis = fallback_analysis(&sample_property(), &sample_business());
        let json = serde_json::to_string(&analysis).unwrap();
        let back: FeasibilityAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }

    #[test]
    fn test_fallback_fixed_projection_fields() {
        let analysis = fallback_analysis(&sample_property(), &sample_business());
        assert_eq!(analysis.financial_projections.operating_costs, "$28,000");
        assert_eq!(analysis.financial_projections.net_profit, "$14,000");
        assert_eq!(analysis.financial_projections.break_even_months, 8);
        assert_eq!(analysis.recommendations.len(), 3);
    }

    #[test]
    fn test_prompt_embeds_every_field() {
        let property = sample_property();
        let business = sample_business();
        let prompt = analysis_prompt(&property, &business);

        assert!(prompt.contains("Ayala Corner Unit"));
        assert!(prompt.contains("Makati"));
        assert!(prompt.contains("Parking, 24/7 Access"));
        assert!(prompt.contains("Cafe"));
        assert!(prompt.contains("Office workers"));
        assert!(prompt.contains("$600,000"));
        assert!(prompt.contains("Ventilation"));
        assert!(prompt.contains("no markdown, no code blocks"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(50000), "50,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_monthly_revenue_rounds() {
        // $500,000 / 12 = 41,666.67 -> rounds to 41,667
        assert_eq!(monthly_revenue_estimate("$500,000"), "$41,667");
    }

    #[test]
    fn test_prompt_request_is_single_user_turn() {
        let request = GenerateRequest::prompt("gpt-4o", "analyze", ANALYSIS_TEMPERATURE);
        assert_eq!(request.messages, vec![ChatTurn::user("analyze")]);
        assert!(request.system.is_none());
        assert!(request.max_tokens.is_none());
    }
}
