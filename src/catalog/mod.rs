mod tables;

use crate::protocol::{Material, ProjectType};

// ── Static rows ─────────────────────────────────────────────────────────

/// A material row as authored in the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSpec {
    pub name: &'static str,
    pub category: &'static str,
    pub sustainability: u8,
    pub cost: u8,
    pub performance: u8,
}

impl MaterialSpec {
    pub fn to_material(&self) -> Material {
        Material {
            name: self.name.to_string(),
            category: self.category.to_string(),
            sustainability: self.sustainability,
            cost: self.cost,
            performance: self.performance,
        }
    }
}

/// A design option as authored in the static tables. It has no id or image;
/// those are positional and assigned when a response is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub materials: &'static [MaterialSpec],
    pub cost_savings: u8,
    pub sustainability_score: u8,
    pub construction_time: &'static str,
}

pub(crate) const fn material(
    name: &'static str,
    category: &'static str,
    sustainability: u8,
    cost: u8,
    performance: u8,
) -> MaterialSpec {
    MaterialSpec {
        name,
        category,
        sustainability,
        cost,
        performance,
    }
}

// ── Lookup ──────────────────────────────────────────────────────────────

/// Returns the static table for a project type and sustainability focus.
pub fn table(project_type: ProjectType, eco: bool) -> &'static [DesignTemplate] {
    match (project_type, eco) {
        (ProjectType::Commercial, true) => tables::COMMERCIAL_ECO,
        (ProjectType::Commercial, false) => tables::COMMERCIAL_STANDARD,
        (ProjectType::Residential, true) => tables::RESIDENTIAL_ECO,
        (ProjectType::Residential, false) => tables::RESIDENTIAL_STANDARD,
        (ProjectType::Industrial, true) => tables::INDUSTRIAL_ECO,
        (ProjectType::Industrial, false) => tables::INDUSTRIAL_STANDARD,
    }
}

/// The table served whenever selection has to fall back.
pub fn default_table() -> &'static [DesignTemplate] {
    table(ProjectType::Commercial, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [ProjectType; 3] = [
        ProjectType::Commercial,
        ProjectType::Residential,
        ProjectType::Industrial,
    ];

    #[test]
    fn every_table_has_three_or_four_designs() {
        for project_type in ALL_TYPES {
            for eco in [true, false] {
                let len = table(project_type, eco).len();
                assert!((3..=4).contains(&len), "{:?}/{}: {}", project_type, eco, len);
            }
        }
    }

    #[test]
    fn every_design_has_three_or_four_materials_and_bounded_scores() {
        for project_type in ALL_TYPES {
            for eco in [true, false] {
                for design in table(project_type, eco) {
                    assert!((3..=4).contains(&design.materials.len()), "{}", design.title);
                    assert!(design.sustainability_score <= 100);
                    for m in design.materials {
                        assert!(m.sustainability <= 100 && m.cost <= 100 && m.performance <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn eco_tables_score_higher_than_standard() {
        for project_type in ALL_TYPES {
            let avg = |eco: bool| {
                let rows = table(project_type, eco);
                rows.iter().map(|d| d.sustainability_score as u32).sum::<u32>() / rows.len() as u32
            };
            assert!(avg(true) > avg(false), "{:?}", project_type);
        }
    }

    #[test]
    fn default_table_is_eco_commercial() {
        assert_eq!(default_table()[0].title, "Eco-Modern Office Tower");
        assert_eq!(default_table().len(), 4);
        assert_eq!(default_table()[0].materials.len(), 4);
    }

    #[test]
    fn to_material_copies_every_field() {
        let spec = material("Hempcrete", "Insulation", 95, 70, 80);
        let m = spec.to_material();
        assert_eq!(m.name, "Hempcrete");
        assert_eq!(m.category, "Insulation");
        assert_eq!((m.sustainability, m.cost, m.performance), (95, 70, 80));
    }
}
