//! Eligibility report returned by the scoring endpoint.

use serde::Deserialize;
use serde_json::Value;

/// One government scheme as described by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scheme {
    /// Portal scheme id.
    pub id: String,
    /// Scheme name.
    pub name: String,
    /// Scheme category (Education, Health, ...).
    pub category: String,
    /// Short description.
    pub description: String,
    /// Benefit bullet points.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Required documents.
    #[serde(default)]
    pub documents: Vec<String>,
    /// Application URL.
    #[serde(default)]
    pub apply_link: String,
    /// Match annotation ("Eligible", "May be eligible - Check details").
    #[serde(default)]
    pub eligibility_match: Option<String>,
}

/// Server response to a quiz submission.
///
/// The raw payload is carried to the results screen untouched; the typed
/// scheme lists are a best-effort view over it and an unknown shape simply
/// yields empty lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityReport {
    raw: Value,
}

impl EligibilityReport {
    /// Wraps the verbatim server payload.
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Returns the untouched server payload.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Schemes the server marked as matching.
    #[must_use]
    pub fn eligible_schemes(&self) -> Vec<Scheme> {
        self.schemes_at("eligible_schemes")
    }

    /// Near-miss schemes suggested when few matches were found.
    #[must_use]
    pub fn fallback_schemes(&self) -> Vec<Scheme> {
        self.schemes_at("fallback_schemes")
    }

    /// Returns whether the payload parsed into the known report shape.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        self.raw.get("eligible_schemes").is_some_and(Value::is_array)
    }

    fn schemes_at(&self, key: &str) -> Vec<Scheme> {
        self.raw
            .get(key)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}
