use serde::Serialize;

use crate::protocol::{Material, Recommendation};
use crate::selector;

/// Materials scoring above this are badged "Eco".
const ECO_BADGE_THRESHOLD: u8 = 80;

const DEFAULT_PROJECT_TYPE: &str = "commercial";

// ── Query ───────────────────────────────────────────────────────────────

/// Query parameters of the recommendations page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub project_type: String,
    pub eco: bool,
    pub selected: Option<String>,
}

impl PageQuery {
    /// Build from raw (already decoded) query values. Only the literal
    /// `eco=true` turns the sustainability focus on.
    pub fn from_params(project_type: Option<&str>, eco: Option<&str>, selected: Option<&str>) -> Self {
        let project_type = match project_type {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => DEFAULT_PROJECT_TYPE.to_string(),
        };
        Self {
            project_type,
            eco: eco == Some("true"),
            selected: selected.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }
}

// ── View model ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    Eco,
    Standard,
}

impl Badge {
    fn for_material(material: &Material) -> Self {
        if material.sustainability > ECO_BADGE_THRESHOLD {
            Badge::Eco
        } else {
            Badge::Standard
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMaterial {
    pub name: String,
    pub category: String,
    pub badge: Badge,
}

/// Detail card for the selected design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cost_savings: u8,
    pub sustainability_score: u8,
    pub construction_time: String,
    pub key_materials: Vec<KeyMaterial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBar {
    pub label: &'static str,
    pub value: u8,
}

/// One card of the materials breakdown tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialBreakdown {
    pub name: String,
    pub category: String,
    pub scores: [ScoreBar; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsPage {
    pub project_id: String,
    pub project_type: String,
    pub subtitle: String,
    pub recommendations: Vec<Recommendation>,
    pub selected_id: Option<String>,
    pub selected: Option<DesignDetail>,
    pub breakdown: Vec<MaterialBreakdown>,
}

/// Run the selector for a project and shape the result for the page.
pub fn build(project_id: &str, query: &PageQuery) -> RecommendationsPage {
    let recommendations = selector::select(
        project_id,
        Some(query.project_type.as_str()),
        query.eco.into(),
    );

    let chosen = query
        .selected
        .as_deref()
        .and_then(|id| recommendations.iter().find(|r| r.id == id))
        .or_else(|| recommendations.first());

    let selected = chosen.map(detail);
    let breakdown = chosen
        .map(|rec| rec.materials.iter().map(score_card).collect())
        .unwrap_or_default();

    RecommendationsPage {
        project_id: project_id.to_string(),
        project_type: query.project_type.clone(),
        subtitle: subtitle(&query.project_type, query.eco),
        selected_id: chosen.map(|r| r.id.clone()),
        selected,
        breakdown,
        recommendations,
    }
}

fn subtitle(project_type: &str, eco: bool) -> String {
    let focus = if eco {
        "sustainability focus"
    } else {
        "standard materials"
    };
    format!("Based on {} project type with {}", project_type, focus)
}

fn detail(rec: &Recommendation) -> DesignDetail {
    DesignDetail {
        id: rec.id.clone(),
        title: rec.title.clone(),
        description: rec.description.clone(),
        cost_savings: rec.cost_savings,
        sustainability_score: rec.sustainability_score,
        construction_time: rec.construction_time.clone(),
        key_materials: rec
            .materials
            .iter()
            .map(|m| KeyMaterial {
                name: m.name.clone(),
                category: m.category.clone(),
                badge: Badge::for_material(m),
            })
            .collect(),
    }
}

fn score_card(material: &Material) -> MaterialBreakdown {
    MaterialBreakdown {
        name: material.name.clone(),
        category: material.category.clone(),
        scores: [
            ScoreBar {
                label: "Sustainability",
                value: material.sustainability,
            },
            ScoreBar {
                label: "Cost Efficiency",
                value: material.cost,
            },
            ScoreBar {
                label: "Performance",
                value: material.performance,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_mean_commercial_standard() {
        let query = PageQuery::from_params(None, None, None);
        assert_eq!(query.project_type, "commercial");
        assert!(!query.eco);
        assert_eq!(query.selected, None);

        let page = build("p1", &query);
        assert_eq!(page.recommendations[0].title, "Modern Office Complex");
        assert_eq!(page.subtitle, "Based on commercial project type with standard materials");
    }

    #[test]
    fn only_literal_true_enables_eco() {
        assert!(PageQuery::from_params(None, Some("true"), None).eco);
        assert!(!PageQuery::from_params(None, Some("TRUE"), None).eco);
        assert!(!PageQuery::from_params(None, Some("1"), None).eco);
        assert!(!PageQuery::from_params(None, Some(""), None).eco);
    }

    #[test]
    fn subtitle_keeps_raw_type() {
        let query = PageQuery::from_params(Some("office"), Some("true"), None);
        let page = build("p1", &query);
        assert_eq!(page.project_type, "office");
        assert_eq!(page.subtitle, "Based on office project type with sustainability focus");
        assert_eq!(page.recommendations[0].title, "Eco-Modern Office Tower");
    }

    #[test]
    fn first_design_selected_by_default() {
        let page = build("p1", &PageQuery::from_params(Some("residential"), Some("true"), None));
        assert_eq!(page.selected_id.as_deref(), Some("rec-1"));
        let selected = page.selected.unwrap();
        assert_eq!(selected.title, "Eco-Friendly Apartment Complex");
        assert_eq!(selected.key_materials.len(), 3);
    }

    #[test]
    fn selected_param_picks_design() {
        let query = PageQuery::from_params(Some("industrial"), Some("false"), Some("rec-3"));
        let page = build("p1", &query);
        assert_eq!(page.selected_id.as_deref(), Some("rec-3"));
        assert_eq!(page.selected.unwrap().title, "Flex Industrial Space");
        assert_eq!(page.breakdown[0].name, "Tilt-Up Concrete Panels");
    }

    #[test]
    fn unknown_selection_falls_back_to_first() {
        let query = PageQuery::from_params(Some("industrial"), None, Some("rec-9"));
        let page = build("p1", &query);
        assert_eq!(page.selected_id.as_deref(), Some("rec-1"));
    }

    #[test]
    fn badges_follow_threshold() {
        // Recycled Steel Structure is 85, Insulated Metal Panels 80
        let page = build("p1", &PageQuery::from_params(Some("industrial"), Some("true"), None));
        let selected = page.selected.unwrap();
        assert_eq!(selected.key_materials[0].badge, Badge::Eco);
        assert_eq!(selected.key_materials[1].badge, Badge::Standard);
    }

    #[test]
    fn breakdown_has_three_scores_per_material() {
        let page = build("p1", &PageQuery::from_params(Some("commercial"), Some("true"), None));
        assert_eq!(page.breakdown.len(), 4);
        let clt = &page.breakdown[1];
        assert_eq!(clt.name, "Cross-Laminated Timber");
        let labels: Vec<&str> = clt.scores.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Sustainability", "Cost Efficiency", "Performance"]);
        let values: Vec<u8> = clt.scores.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![95, 80, 85]);
    }

    #[test]
    fn page_serializes_camel_case() {
        let page = build("p1", &PageQuery::from_params(None, None, None));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["projectId"], "p1");
        assert_eq!(json["selectedId"], "rec-1");
        assert_eq!(json["selected"]["keyMaterials"][0]["badge"], "Standard");
    }
}
