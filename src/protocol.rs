use serde::{Deserialize, Serialize};

// ── Recommendation records ─────────────────────────────────────────

/// One construction material as it appears inside a design option.
///
/// All three scores are editorial 0-100 ratings. `cost` is cost
/// efficiency (higher is better value), not a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub category: String,
    pub sustainability: u8,
    pub cost: u8,
    pub performance: u8,
}

/// One design option returned to the client.
///
/// `id` and `image` are positional and assigned by the selector when the
/// list is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub materials: Vec<Material>,
    pub cost_savings: u8,
    pub sustainability_score: u8,
    pub construction_time: String,
}

// ── Selection keys ─────────────────────────────────────────────────

/// The project families that have their own recommendation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Commercial,
    Residential,
    Industrial,
}

impl ProjectType {
    /// Normalize a free-form project type string.
    ///
    /// `office` is an alias for commercial. Missing, empty, or unrecognized
    /// values resolve to `Commercial`. Matching is exact.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("residential") => ProjectType::Residential,
            Some("industrial") => ProjectType::Industrial,
            _ => ProjectType::Commercial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Commercial => "commercial",
            ProjectType::Residential => "residential",
            ProjectType::Industrial => "industrial",
        }
    }
}

/// Tri-state sustainability flag. `Unset` is distinct from an explicit
/// `Standard` and resolves to eco-focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SustainabilityFocus {
    #[default]
    Unset,
    Eco,
    Standard,
}

impl SustainabilityFocus {
    pub fn is_eco(self) -> bool {
        !matches!(self, SustainabilityFocus::Standard)
    }
}

impl From<bool> for SustainabilityFocus {
    fn from(eco: bool) -> Self {
        if eco {
            SustainabilityFocus::Eco
        } else {
            SustainabilityFocus::Standard
        }
    }
}

impl From<Option<bool>> for SustainabilityFocus {
    fn from(flag: Option<bool>) -> Self {
        flag.map_or(SustainabilityFocus::Unset, SustainabilityFocus::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn office_is_commercial() {
        assert_eq!(ProjectType::from_param(Some("office")), ProjectType::Commercial);
        assert_eq!(ProjectType::from_param(Some("commercial")), ProjectType::Commercial);
    }

    #[test]
    fn unknown_and_missing_types_are_commercial() {
        assert_eq!(ProjectType::from_param(None), ProjectType::Commercial);
        assert_eq!(ProjectType::from_param(Some("")), ProjectType::Commercial);
        assert_eq!(ProjectType::from_param(Some("retail")), ProjectType::Commercial);
        // exact match only
        assert_eq!(ProjectType::from_param(Some("Residential")), ProjectType::Commercial);
    }

    #[test]
    fn known_types_resolve() {
        assert_eq!(ProjectType::from_param(Some("residential")), ProjectType::Residential);
        assert_eq!(ProjectType::from_param(Some("industrial")), ProjectType::Industrial);
    }

    #[test]
    fn unset_focus_is_eco_but_explicit_false_is_not() {
        assert!(SustainabilityFocus::from(None).is_eco());
        assert!(SustainabilityFocus::from(Some(true)).is_eco());
        assert!(!SustainabilityFocus::from(Some(false)).is_eco());
        assert_ne!(SustainabilityFocus::from(None), SustainabilityFocus::from(Some(true)));
    }

    #[test]
    fn recommendation_serializes_camel_case() {
        let rec = Recommendation {
            id: "rec-1".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            image: String::new(),
            materials: Vec::new(),
            cost_savings: 10,
            sustainability_score: 80,
            construction_time: "9 months".to_string(),
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["costSavings"], 10);
        assert_eq!(json["sustainabilityScore"], 80);
        assert_eq!(json["constructionTime"], "9 months");
    }
}
