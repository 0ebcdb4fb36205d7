//! Mock dashboard content. Every number here is authored demo data.

use serde::Serialize;

// ── Types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    /// Completion, 0-100.
    pub progress: u8,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMaterial {
    pub name: &'static str,
    pub category: &'static str,
    pub sustainable: bool,
    pub cost_efficient: bool,
    pub recommended: bool,
}

/// Dollar cost of one building phase with traditional vs recommended
/// materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostItem {
    pub name: &'static str,
    pub traditional: u64,
    pub recommended: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    pub items: &'static [CostItem],
    pub traditional_total: u64,
    pub recommended_total: u64,
    pub savings_percent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub name: &'static str,
    pub value: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityMetrics {
    pub material_composition: &'static [Slice],
    pub energy_efficiency: &'static [Slice],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: &'static [StatCard],
    pub recent_projects: &'static [ProjectCard],
    pub recent_materials: &'static [RecentMaterial],
    pub cost_analysis: CostAnalysis,
    pub sustainability: SustainabilityMetrics,
}

// ── Content ─────────────────────────────────────────────────────────────

const STATS: &[StatCard] = &[
    StatCard {
        title: "Active Projects",
        value: "12",
        note: "+2 from last month",
    },
    StatCard {
        title: "Material Recommendations",
        value: "145",
        note: "+24 from last month",
    },
    StatCard {
        title: "Cost Savings",
        value: "$42,500",
        note: "+15% from traditional methods",
    },
    StatCard {
        title: "Carbon Reduction",
        value: "28%",
        note: "Compared to industry average",
    },
];

const RECENT_PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "Modern Office Complex",
        description: "Commercial building with sustainable design elements",
        progress: 75,
        image: "https://i.pinimg.com/736x/4c/45/bb/4c45bb709ad7b59f4f4ad095d7e10cc4.jpg?height=100&width=200",
    },
    ProjectCard {
        title: "Residential Apartments",
        description: "Multi-family housing with optimized space utilization",
        progress: 45,
        image: "https://i.pinimg.com/736x/0e/18/1b/0e181bd08272dc148793f99a812872e8.jpg?height=100&width=200",
    },
    ProjectCard {
        title: "Community Center",
        description: "Public space with energy-efficient design",
        progress: 90,
        image: "https://i.pinimg.com/736x/e4/da/f9/e4daf946f9509d92ab7e7b557a0ce489.jpg?height=100&width=200",
    },
    ProjectCard {
        title: "Retail Space Renovation",
        description: "Modernization of existing commercial space",
        progress: 30,
        image: "https://i.pinimg.com/736x/6a/4d/97/6a4d97af2593b3968f0fbbc4d2536143.jpg?height=100&width=200",
    },
];

const RECENT_MATERIALS: &[RecentMaterial] = &[
    RecentMaterial {
        name: "Recycled Composite Panels",
        category: "Exterior",
        sustainable: true,
        cost_efficient: true,
        recommended: true,
    },
    RecentMaterial {
        name: "Low-E Glass Windows",
        category: "Windows",
        sustainable: true,
        cost_efficient: false,
        recommended: true,
    },
    RecentMaterial {
        name: "Bamboo Flooring",
        category: "Flooring",
        sustainable: true,
        cost_efficient: true,
        recommended: true,
    },
    RecentMaterial {
        name: "Structural Steel",
        category: "Structure",
        sustainable: false,
        cost_efficient: true,
        recommended: true,
    },
    RecentMaterial {
        name: "Traditional Concrete",
        category: "Foundation",
        sustainable: false,
        cost_efficient: true,
        recommended: false,
    },
];

const COST_ITEMS: &[CostItem] = &[
    CostItem {
        name: "Foundation",
        traditional: 45_000,
        recommended: 42_000,
    },
    CostItem {
        name: "Structure",
        traditional: 120_000,
        recommended: 105_000,
    },
    CostItem {
        name: "Exterior",
        traditional: 85_000,
        recommended: 72_000,
    },
    CostItem {
        name: "Interior",
        traditional: 95_000,
        recommended: 82_000,
    },
    CostItem {
        name: "MEP",
        traditional: 75_000,
        recommended: 68_000,
    },
];

const MATERIAL_COMPOSITION: &[Slice] = &[
    Slice {
        name: "Renewable Materials",
        value: 65,
        color: "#4ade80",
    },
    Slice {
        name: "Recycled Content",
        value: 15,
        color: "#60a5fa",
    },
    Slice {
        name: "Virgin Materials",
        value: 20,
        color: "#f87171",
    },
];

const ENERGY_EFFICIENCY: &[Slice] = &[
    Slice {
        name: "Energy Efficient",
        value: 75,
        color: "#22c55e",
    },
    Slice {
        name: "Standard Efficiency",
        value: 25,
        color: "#ef4444",
    },
];

// ── Assembly ────────────────────────────────────────────────────────────

pub fn overview() -> DashboardOverview {
    DashboardOverview {
        stats: STATS,
        recent_projects: RECENT_PROJECTS,
        recent_materials: RECENT_MATERIALS,
        cost_analysis: cost_analysis(COST_ITEMS),
        sustainability: SustainabilityMetrics {
            material_composition: MATERIAL_COMPOSITION,
            energy_efficiency: ENERGY_EFFICIENCY,
        },
    }
}

fn cost_analysis(items: &'static [CostItem]) -> CostAnalysis {
    let traditional_total: u64 = items.iter().map(|i| i.traditional).sum();
    let recommended_total: u64 = items.iter().map(|i| i.recommended).sum();
    let savings_percent = if traditional_total == 0 {
        0
    } else {
        traditional_total.saturating_sub(recommended_total) * 100 / traditional_total
    };
    CostAnalysis {
        items,
        traditional_total,
        recommended_total,
        savings_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_stat_cards() {
        let dash = overview();
        let titles: Vec<&str> = dash.stats.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Active Projects", "Material Recommendations", "Cost Savings", "Carbon Reduction"]
        );
    }

    #[test]
    fn project_progress_is_a_percentage() {
        for project in overview().recent_projects {
            assert!(project.progress <= 100, "{}", project.title);
        }
    }

    #[test]
    fn cost_totals_and_savings() {
        let analysis = overview().cost_analysis;
        assert_eq!(analysis.traditional_total, 420_000);
        assert_eq!(analysis.recommended_total, 369_000);
        // 51_000 / 420_000 = 12.14%
        assert_eq!(analysis.savings_percent, 12);
    }

    #[test]
    fn empty_cost_series_has_no_savings() {
        let analysis = cost_analysis(&[]);
        assert_eq!(analysis.traditional_total, 0);
        assert_eq!(analysis.savings_percent, 0);
    }

    #[test]
    fn pie_series_sum_to_one_hundred() {
        let metrics = overview().sustainability;
        for series in [metrics.material_composition, metrics.energy_efficiency] {
            let total: u32 = series.iter().map(|s| s.value as u32).sum();
            assert_eq!(total, 100);
        }
    }

    #[test]
    fn recent_materials_serialize_camel_case() {
        let json = serde_json::to_value(overview()).unwrap();
        assert_eq!(json["recentMaterials"][1]["costEfficient"], false);
        assert_eq!(json["costAnalysis"]["items"][4]["name"], "MEP");
    }
}
