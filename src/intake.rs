use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BUDGET_MIN: u64 = 100_000;
pub const BUDGET_MAX: u64 = 10_000_000;
pub const BUDGET_STEP: u64 = 50_000;
pub const BUDGET_DEFAULT: u64 = 500_000;

const PROJECT_ID_LEN: usize = 8;
const PROJECT_ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

// ── Steps ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntakeStep {
    BasicInfo,
    Requirements,
    Preferences,
    Review,
}

impl IntakeStep {
    pub const ALL: [IntakeStep; 4] = [
        IntakeStep::BasicInfo,
        IntakeStep::Requirements,
        IntakeStep::Preferences,
        IntakeStep::Review,
    ];

    /// 1-based position shown in the step indicator.
    pub fn number(self) -> u8 {
        match self {
            IntakeStep::BasicInfo => 1,
            IntakeStep::Requirements => 2,
            IntakeStep::Preferences => 3,
            IntakeStep::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            IntakeStep::BasicInfo => "Basic Info",
            IntakeStep::Requirements => "Requirements",
            IntakeStep::Preferences => "Preferences",
            IntakeStep::Review => "Review",
        }
    }

    /// Stays on `Review` when already there.
    pub fn next(self) -> Self {
        match self {
            IntakeStep::BasicInfo => IntakeStep::Requirements,
            IntakeStep::Requirements => IntakeStep::Preferences,
            IntakeStep::Preferences | IntakeStep::Review => IntakeStep::Review,
        }
    }

    /// Stays on `BasicInfo` when already there.
    pub fn back(self) -> Self {
        match self {
            IntakeStep::BasicInfo | IntakeStep::Requirements => IntakeStep::BasicInfo,
            IntakeStep::Preferences => IntakeStep::Requirements,
            IntakeStep::Review => IntakeStep::Preferences,
        }
    }

    /// Width of the progress bar connecting the step markers.
    pub fn progress_percent(self) -> f32 {
        (self.number() - 1) as f32 * 33.33
    }
}

// ── Form fields ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeProjectType {
    Residential,
    Commercial,
    Institutional,
    Industrial,
    Retail,
}

impl IntakeProjectType {
    pub const ALL: [IntakeProjectType; 5] = [
        IntakeProjectType::Residential,
        IntakeProjectType::Commercial,
        IntakeProjectType::Institutional,
        IntakeProjectType::Industrial,
        IntakeProjectType::Retail,
    ];

    /// Value passed on to the recommendations page as `type`.
    pub fn as_param(self) -> &'static str {
        match self {
            IntakeProjectType::Residential => "residential",
            IntakeProjectType::Commercial => "commercial",
            IntakeProjectType::Institutional => "institutional",
            IntakeProjectType::Industrial => "industrial",
            IntakeProjectType::Retail => "retail",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntakeProjectType::Residential => "Residential",
            IntakeProjectType::Commercial => "Commercial",
            IntakeProjectType::Institutional => "Institutional",
            IntakeProjectType::Industrial => "Industrial",
            IntakeProjectType::Retail => "Retail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Floors {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "11+")]
    ElevenPlus,
}

impl Floors {
    pub const ALL: [Floors; 7] = [
        Floors::One,
        Floors::Two,
        Floors::Three,
        Floors::Four,
        Floors::Five,
        Floors::SixToTen,
        Floors::ElevenPlus,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "3-6months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12months")]
    SixToTwelveMonths,
    #[serde(rename = "1-2years")]
    OneToTwoYears,
    #[serde(rename = "2+years")]
    OverTwoYears,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::ThreeToSixMonths,
        Timeline::SixToTwelveMonths,
        Timeline::OneToTwoYears,
        Timeline::OverTwoYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timeline::ThreeToSixMonths => "3-6 months",
            Timeline::SixToTwelveMonths => "6-12 months",
            Timeline::OneToTwoYears => "1-2 years",
            Timeline::OverTwoYears => "2+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitecturalStyle {
    Modern,
    Contemporary,
    Traditional,
    Industrial,
    Minimalist,
    Classical,
    Other,
}

impl ArchitecturalStyle {
    pub const ALL: [ArchitecturalStyle; 7] = [
        ArchitecturalStyle::Modern,
        ArchitecturalStyle::Contemporary,
        ArchitecturalStyle::Traditional,
        ArchitecturalStyle::Industrial,
        ArchitecturalStyle::Minimalist,
        ArchitecturalStyle::Classical,
        ArchitecturalStyle::Other,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignPriority {
    Aesthetics,
    Functionality,
    Cost,
}

impl DesignPriority {
    pub const ALL: [DesignPriority; 3] = [
        DesignPriority::Aesthetics,
        DesignPriority::Functionality,
        DesignPriority::Cost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DesignPriority::Aesthetics => "Aesthetics",
            DesignPriority::Functionality => "Functionality",
            DesignPriority::Cost => "Cost Efficiency",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DesignPriority::Aesthetics => {
                "Focus on visual appeal and design excellence, with premium materials and finishes."
            }
            DesignPriority::Functionality => {
                "Prioritize practical use of space, efficient layouts, and user experience."
            }
            DesignPriority::Cost => {
                "Optimize for budget constraints while maintaining quality standards."
            }
        }
    }
}

/// Everything the new-project form collects across its four steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeForm {
    pub name: String,
    pub project_type: Option<IntakeProjectType>,
    pub location: String,
    pub description: String,
    pub total_area: Option<u32>,
    pub floors: Option<Floors>,
    pub occupancy: Option<u32>,
    pub budget: u64,
    pub timeline: Option<Timeline>,
    pub sustainability_focus: bool,
    pub material_preferences: String,
    pub special_requirements: String,
    pub style: Option<ArchitecturalStyle>,
    pub priority: Option<DesignPriority>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            project_type: None,
            location: String::new(),
            description: String::new(),
            total_area: None,
            floors: None,
            occupancy: None,
            budget: BUDGET_DEFAULT,
            timeline: None,
            sustainability_focus: false,
            material_preferences: String::new(),
            special_requirements: String::new(),
            style: None,
            priority: None,
        }
    }
}

// ── Submission ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("project name is required")]
    MissingName,
    #[error("project type is required")]
    MissingProjectType,
    #[error("total area must be greater than zero")]
    ZeroArea,
    #[error("occupancy must be greater than zero")]
    ZeroOccupancy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub name: String,
    pub project_type: &'static str,
    pub location: String,
    pub description: String,
    pub total_area: Option<u32>,
    pub floors: Option<Floors>,
    pub occupancy: Option<u32>,
    pub budget: String,
    pub sustainability_focus: &'static str,
    pub timeline: &'static str,
    pub style: Option<ArchitecturalStyle>,
    pub priorities: String,
    pub material_preferences: String,
    pub special_requirements: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedProject {
    pub project_id: String,
    pub recommendations_url: String,
    pub summary: ReviewSummary,
}

/// Validate a completed form and issue a project id with the link to its
/// recommendations.
pub fn submit(form: &IntakeForm) -> Result<SubmittedProject, IntakeError> {
    submit_with_rng(form, &mut rand::thread_rng())
}

pub fn submit_with_rng<R: Rng>(form: &IntakeForm, rng: &mut R) -> Result<SubmittedProject, IntakeError> {
    let project_type = validate(form)?;
    let project_id = new_project_id(rng);
    let recommendations_url = format!(
        "/recommendations/{}?type={}&eco={}",
        urlencoding::encode(&project_id),
        project_type.as_param(),
        form.sustainability_focus
    );
    Ok(SubmittedProject {
        project_id,
        recommendations_url,
        summary: review(form, project_type),
    })
}

fn validate(form: &IntakeForm) -> Result<IntakeProjectType, IntakeError> {
    if form.name.trim().is_empty() {
        return Err(IntakeError::MissingName);
    }
    let project_type = form.project_type.ok_or(IntakeError::MissingProjectType)?;
    if form.total_area == Some(0) {
        return Err(IntakeError::ZeroArea);
    }
    if form.occupancy == Some(0) {
        return Err(IntakeError::ZeroOccupancy);
    }
    Ok(project_type)
}

fn review(form: &IntakeForm, project_type: IntakeProjectType) -> ReviewSummary {
    let priorities = match form.priority {
        Some(p) => p.label().to_string(),
        None => DesignPriority::ALL
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", "),
    };
    ReviewSummary {
        name: form.name.trim().to_string(),
        project_type: project_type.label(),
        location: form.location.trim().to_string(),
        description: form.description.trim().to_string(),
        total_area: form.total_area,
        floors: form.floors,
        occupancy: form.occupancy,
        budget: format_usd(snap_budget(form.budget)),
        sustainability_focus: if form.sustainability_focus { "Yes" } else { "No" },
        timeline: form.timeline.map_or("Not specified", Timeline::label),
        style: form.style,
        priorities,
        material_preferences: form.material_preferences.trim().to_string(),
        special_requirements: form.special_requirements.trim().to_string(),
    }
}

/// Clamp to the slider range and round to the nearest slider step.
pub fn snap_budget(raw: u64) -> u64 {
    let clamped = raw.clamp(BUDGET_MIN, BUDGET_MAX);
    let steps = (clamped - BUDGET_MIN + BUDGET_STEP / 2) / BUDGET_STEP;
    (BUDGET_MIN + steps * BUDGET_STEP).min(BUDGET_MAX)
}

/// `1250000` -> `$1,250,000`
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn new_project_id<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..PROJECT_ID_LEN)
        .map(|_| PROJECT_ID_CHARSET[rng.gen_range(0..PROJECT_ID_CHARSET.len())] as char)
        .collect();
    format!("proj-{}", suffix)
}

// ── Form catalog ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StepInfo {
    pub number: u8,
    pub title: &'static str,
    pub progress: f32,
    pub next: u8,
    pub back: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityInfo {
    pub value: DesignPriority,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRange {
    pub min: u64,
    pub max: u64,
    pub step: u64,
    pub default: u64,
}

/// Step list and option lists the form renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeCatalog {
    pub steps: Vec<StepInfo>,
    pub project_types: &'static [IntakeProjectType],
    pub floors: &'static [Floors],
    pub timelines: &'static [Timeline],
    pub styles: &'static [ArchitecturalStyle],
    pub priorities: Vec<PriorityInfo>,
    pub budget: BudgetRange,
}

pub fn catalog() -> IntakeCatalog {
    IntakeCatalog {
        steps: IntakeStep::ALL
            .iter()
            .map(|s| StepInfo {
                number: s.number(),
                title: s.title(),
                progress: s.progress_percent(),
                next: s.next().number(),
                back: s.back().number(),
            })
            .collect(),
        project_types: &IntakeProjectType::ALL,
        floors: &Floors::ALL,
        timelines: &Timeline::ALL,
        styles: &ArchitecturalStyle::ALL,
        priorities: DesignPriority::ALL
            .iter()
            .map(|&p| PriorityInfo {
                value: p,
                label: p.label(),
                description: p.description(),
            })
            .collect(),
        budget: BudgetRange {
            min: BUDGET_MIN,
            max: BUDGET_MAX,
            step: BUDGET_STEP,
            default: BUDGET_DEFAULT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled_form() -> IntakeForm {
        IntakeForm {
            name: "Harbor Offices".to_string(),
            project_type: Some(IntakeProjectType::Commercial),
            budget: 1_250_000,
            sustainability_focus: true,
            timeline: Some(Timeline::OneToTwoYears),
            ..IntakeForm::default()
        }
    }

    #[test]
    fn steps_are_clamped() {
        assert_eq!(IntakeStep::BasicInfo.back(), IntakeStep::BasicInfo);
        assert_eq!(IntakeStep::Review.next(), IntakeStep::Review);
        let mut step = IntakeStep::BasicInfo;
        for _ in 0..3 {
            step = step.next();
        }
        assert_eq!(step, IntakeStep::Review);
        assert_eq!(step.back(), IntakeStep::Preferences);
    }

    #[test]
    fn progress_grows_by_a_third() {
        assert_eq!(IntakeStep::BasicInfo.progress_percent(), 0.0);
        assert!((IntakeStep::Review.progress_percent() - 99.99).abs() < 0.01);
    }

    #[test]
    fn budget_snaps_to_slider() {
        assert_eq!(snap_budget(0), BUDGET_MIN);
        assert_eq!(snap_budget(50_000_000), BUDGET_MAX);
        assert_eq!(snap_budget(524_999), 500_000);
        assert_eq!(snap_budget(525_000), 550_000);
        assert_eq!(snap_budget(BUDGET_MAX), BUDGET_MAX);
    }

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(500), "$500");
        assert_eq!(format_usd(500_000), "$500,000");
        assert_eq!(format_usd(1_250_000), "$1,250,000");
        assert_eq!(format_usd(10_000_000), "$10,000,000");
    }

    #[test]
    fn submit_requires_name_and_type() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert_eq!(submit(&form), Err(IntakeError::MissingName));

        let mut form = filled_form();
        form.project_type = None;
        assert_eq!(submit(&form), Err(IntakeError::MissingProjectType));

        let mut form = filled_form();
        form.total_area = Some(0);
        assert_eq!(submit(&form), Err(IntakeError::ZeroArea));

        let mut form = filled_form();
        form.occupancy = Some(0);
        assert_eq!(submit(&form), Err(IntakeError::ZeroOccupancy));
    }

    #[test]
    fn submit_builds_recommendations_link() {
        let mut rng = StdRng::seed_from_u64(7);
        let project = submit_with_rng(&filled_form(), &mut rng).unwrap();
        assert!(project.project_id.starts_with("proj-"));
        assert_eq!(project.project_id.len(), 5 + PROJECT_ID_LEN);
        assert_eq!(
            project.recommendations_url,
            format!("/recommendations/{}?type=commercial&eco=true", project.project_id)
        );
    }

    #[test]
    fn seeded_ids_are_reproducible() {
        let a = new_project_id(&mut StdRng::seed_from_u64(42));
        let b = new_project_id(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a[5..].bytes().all(|c| PROJECT_ID_CHARSET.contains(&c)));
    }

    #[test]
    fn review_summary_formats_fields() {
        let project = submit(&filled_form()).unwrap();
        let summary = project.summary;
        assert_eq!(summary.project_type, "Commercial");
        assert_eq!(summary.budget, "$1,250,000");
        assert_eq!(summary.sustainability_focus, "Yes");
        assert_eq!(summary.timeline, "1-2 years");
        assert_eq!(summary.priorities, "Aesthetics, Functionality, Cost Efficiency");
        assert_eq!(summary.floors, None);
    }

    #[test]
    fn review_uses_chosen_priority_and_unspecified_timeline() {
        let mut form = filled_form();
        form.timeline = None;
        form.priority = Some(DesignPriority::Cost);
        form.sustainability_focus = false;
        let summary = submit(&form).unwrap().summary;
        assert_eq!(summary.timeline, "Not specified");
        assert_eq!(summary.priorities, "Cost Efficiency");
        assert_eq!(summary.sustainability_focus, "No");
    }

    #[test]
    fn form_deserializes_with_defaults() {
        let form: IntakeForm = serde_json::from_str(
            r#"{"name":"Depot","projectType":"retail","floors":"6-10","timeline":"2+years"}"#,
        )
        .unwrap();
        assert_eq!(form.project_type, Some(IntakeProjectType::Retail));
        assert_eq!(form.floors, Some(Floors::SixToTen));
        assert_eq!(form.timeline, Some(Timeline::OverTwoYears));
        assert_eq!(form.budget, BUDGET_DEFAULT);
        assert!(!form.sustainability_focus);
    }

    #[test]
    fn unknown_project_type_is_rejected_by_decoding() {
        let result: Result<IntakeForm, _> =
            serde_json::from_str(r#"{"name":"X","projectType":"castle"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn catalog_lists_options() {
        let catalog = catalog();
        assert_eq!(catalog.steps.len(), 4);
        assert_eq!(catalog.steps[3].title, "Review");
        assert_eq!((catalog.steps[0].back, catalog.steps[0].next), (1, 2));
        assert_eq!((catalog.steps[3].back, catalog.steps[3].next), (3, 4));
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["floors"][6], "11+");
        assert_eq!(json["timelines"][0], "3-6months");
        assert_eq!(json["projectTypes"][2], "institutional");
        assert_eq!(json["priorities"][2]["label"], "Cost Efficiency");
        assert_eq!(json["budget"]["default"], 500_000);
    }
}
