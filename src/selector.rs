use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{self, DesignTemplate};
use crate::protocol::{ProjectType, Recommendation, SustainabilityFocus};

const MIN_DESIGNS: usize = 3;
const MAX_DESIGNS: usize = 4;
const MIN_MATERIALS: usize = 3;
const MAX_MATERIALS: usize = 4;
const MAX_SCORE: u8 = 100;

/// Reasons a static table cannot be served as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionFailure {
    #[error("table has {0} designs, expected 3-4")]
    TableSize(usize),
    #[error("design '{title}' has {count} materials, expected 3-4")]
    MaterialCount { title: &'static str, count: usize },
    #[error("{field} of '{subject}' is {value}, above 100")]
    ScoreOutOfRange {
        subject: &'static str,
        field: &'static str,
        value: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Matched,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub recommendations: Vec<Recommendation>,
    pub outcome: SelectionOutcome,
}

/// Pick the recommendation list for a project.
///
/// `project_id` never changes the content. The call never fails: any
/// problem with the selected table is logged and the eco commercial table
/// is returned instead.
pub fn select(
    project_id: &str,
    project_type: Option<&str>,
    focus: SustainabilityFocus,
) -> Vec<Recommendation> {
    select_with_outcome(project_id, project_type, focus).recommendations
}

/// Same as [`select`], but also reports whether the fallback table was used.
pub fn select_with_outcome(
    project_id: &str,
    project_type: Option<&str>,
    focus: SustainabilityFocus,
) -> Selection {
    let kind = ProjectType::from_param(project_type);
    let eco = focus.is_eco();
    debug!(
        "Selecting recommendations for project {}: type={} eco={}",
        project_id,
        kind.as_str(),
        eco
    );
    select_from(project_id, catalog::table(kind, eco))
}

fn select_from(project_id: &str, table: &'static [DesignTemplate]) -> Selection {
    match materialize(table) {
        Ok(recommendations) => Selection {
            recommendations,
            outcome: SelectionOutcome::Matched,
        },
        Err(failure) => {
            warn!(
                "Recommendation selection failed for project {}: {}; serving defaults",
                project_id, failure
            );
            Selection {
                recommendations: assign_positions(catalog::default_table()),
                outcome: SelectionOutcome::Fallback,
            }
        }
    }
}

fn materialize(table: &'static [DesignTemplate]) -> Result<Vec<Recommendation>, SelectionFailure> {
    validate(table)?;
    Ok(assign_positions(table))
}

fn validate(table: &[DesignTemplate]) -> Result<(), SelectionFailure> {
    if !(MIN_DESIGNS..=MAX_DESIGNS).contains(&table.len()) {
        return Err(SelectionFailure::TableSize(table.len()));
    }
    for design in table {
        let count = design.materials.len();
        if !(MIN_MATERIALS..=MAX_MATERIALS).contains(&count) {
            return Err(SelectionFailure::MaterialCount {
                title: design.title,
                count,
            });
        }
        check_score(design.title, "sustainabilityScore", design.sustainability_score)?;
        for m in design.materials {
            check_score(m.name, "sustainability", m.sustainability)?;
            check_score(m.name, "cost", m.cost)?;
            check_score(m.name, "performance", m.performance)?;
        }
    }
    Ok(())
}

fn check_score(subject: &'static str, field: &'static str, value: u8) -> Result<(), SelectionFailure> {
    if value > MAX_SCORE {
        return Err(SelectionFailure::ScoreOutOfRange {
            subject,
            field,
            value,
        });
    }
    Ok(())
}

fn assign_positions(table: &[DesignTemplate]) -> Vec<Recommendation> {
    table
        .iter()
        .enumerate()
        .map(|(index, design)| {
            let position = index + 1;
            Recommendation {
                id: format!("rec-{}", position),
                title: design.title.to_string(),
                description: design.description.to_string(),
                image: placeholder_image(position),
                materials: design.materials.iter().map(|m| m.to_material()).collect(),
                cost_savings: design.cost_savings,
                sustainability_score: design.sustainability_score,
                construction_time: design.construction_time.to_string(),
            }
        })
        .collect()
}

fn placeholder_image(position: usize) -> String {
    format!("/placeholder.svg?height=400&width=800&text=Design+{}", position)
}
