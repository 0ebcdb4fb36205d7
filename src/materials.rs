use serde::Serialize;
use thiserror::Error;

const CARD_IMAGE: &str = "/placeholder.svg?height=150&width=300";

/// Materials above this sustainability score appear under the
/// `sustainable` tab.
const SUSTAINABLE_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaterialCard {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub sustainability: u8,
    pub cost: u8,
    pub performance: u8,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

const LIBRARY: &[MaterialCard] = &[
    MaterialCard {
        name: "Cross-Laminated Timber (CLT)",
        category: "Structural",
        description: "Engineered wood product with high strength-to-weight ratio, suitable for walls, floors, and roofs.",
        sustainability: 90,
        cost: 70,
        performance: 85,
        tags: &["Renewable", "Carbon-Negative", "Fire-Resistant"],
        image: CARD_IMAGE,
    },
    MaterialCard {
        name: "Low-E Glass",
        category: "Exterior",
        description: "Energy-efficient glass that minimizes the amount of infrared and ultraviolet light without reducing visible light.",
        sustainability: 85,
        cost: 60,
        performance: 90,
        tags: &["Energy-Efficient", "UV-Blocking", "Insulating"],
        image: CARD_IMAGE,
    },
    MaterialCard {
        name: "Recycled Steel",
        category: "Structural",
        description: "Steel made from scrap metal, reducing energy consumption and mining impact while maintaining strength.",
        sustainability: 80,
        cost: 75,
        performance: 95,
        tags: &["Recycled", "Durable", "High-Strength"],
        image: CARD_IMAGE,
    },
    MaterialCard {
        name: "Bamboo Flooring",
        category: "Interior",
        description: "Sustainable alternative to hardwood flooring with rapid renewability and comparable durability.",
        sustainability: 95,
        cost: 80,
        performance: 75,
        tags: &["Renewable", "Durable", "Low-VOC"],
        image: CARD_IMAGE,
    },
    MaterialCard {
        name: "Hempcrete",
        category: "Insulation",
        description: "Biocomposite material made from hemp hurds and lime, providing thermal insulation and moisture regulation.",
        sustainability: 98,
        cost: 65,
        performance: 80,
        tags: &["Carbon-Negative", "Breathable", "Insulating"],
        image: CARD_IMAGE,
    },
    MaterialCard {
        name: "Recycled Composite Panels",
        category: "Exterior",
        description: "Durable panels made from recycled plastics and wood fibers, resistant to moisture and decay.",
        sustainability: 85,
        cost: 85,
        performance: 90,
        tags: &["Recycled", "Weather-Resistant", "Low-Maintenance"],
        image: CARD_IMAGE,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown materials tab '{0}'")]
pub struct UnknownTab(pub String);

/// Tabs of the materials library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialTab {
    #[default]
    All,
    Structural,
    Exterior,
    Interior,
    Insulation,
    Sustainable,
}

impl MaterialTab {
    pub fn parse(raw: &str) -> Result<Self, UnknownTab> {
        match raw {
            "" | "all" => Ok(MaterialTab::All),
            "structural" => Ok(MaterialTab::Structural),
            "exterior" => Ok(MaterialTab::Exterior),
            "interior" => Ok(MaterialTab::Interior),
            "insulation" => Ok(MaterialTab::Insulation),
            "sustainable" => Ok(MaterialTab::Sustainable),
            other => Err(UnknownTab(other.to_string())),
        }
    }

    fn includes(self, card: &MaterialCard) -> bool {
        match self {
            MaterialTab::All => true,
            MaterialTab::Structural => card.category.eq_ignore_ascii_case("structural"),
            MaterialTab::Exterior => card.category.eq_ignore_ascii_case("exterior"),
            MaterialTab::Interior => card.category.eq_ignore_ascii_case("interior"),
            MaterialTab::Insulation => card.category.eq_ignore_ascii_case("insulation"),
            MaterialTab::Sustainable => card.sustainability > SUSTAINABLE_THRESHOLD,
        }
    }
}

/// Cards on `tab` whose name, description, or tags contain `query`
/// (case-insensitive). A blank query matches everything.
pub fn search(tab: MaterialTab, query: Option<&str>) -> Vec<&'static MaterialCard> {
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
    LIBRARY
        .iter()
        .filter(|card| tab.includes(card))
        .filter(|card| needle.is_empty() || matches_text(card, &needle))
        .collect()
}

fn matches_text(card: &MaterialCard, needle: &str) -> bool {
    card.name.to_lowercase().contains(needle)
        || card.description.to_lowercase().contains(needle)
        || card.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cards: &[&MaterialCard]) -> Vec<&'static str> {
        cards.iter().map(|c| c.name).collect()
    }

    #[test]
    fn all_tab_lists_every_card() {
        assert_eq!(search(MaterialTab::All, None).len(), 6);
    }

    #[test]
    fn structural_tab_matches_category() {
        let cards = search(MaterialTab::Structural, None);
        assert_eq!(names(&cards), vec!["Cross-Laminated Timber (CLT)", "Recycled Steel"]);
    }

    #[test]
    fn sustainable_tab_is_strictly_above_eighty() {
        let cards = search(MaterialTab::Sustainable, None);
        assert!(cards.iter().all(|c| c.sustainability > 80));
        assert!(!names(&cards).contains(&"Recycled Steel"));
        assert_eq!(cards.len(), 5);
    }

    #[test]
    fn query_matches_tags_case_insensitively() {
        let cards = search(MaterialTab::All, Some("carbon-NEGATIVE"));
        assert_eq!(names(&cards), vec!["Cross-Laminated Timber (CLT)", "Hempcrete"]);
    }

    #[test]
    fn query_and_tab_combine() {
        let cards = search(MaterialTab::Exterior, Some("recycled"));
        assert_eq!(names(&cards), vec!["Recycled Composite Panels"]);
        assert!(search(MaterialTab::Insulation, Some("glass")).is_empty());
    }

    #[test]
    fn blank_query_matches_all() {
        assert_eq!(search(MaterialTab::All, Some("   ")).len(), 6);
    }

    #[test]
    fn tab_parsing() {
        assert_eq!(MaterialTab::parse("all"), Ok(MaterialTab::All));
        assert_eq!(MaterialTab::parse(""), Ok(MaterialTab::All));
        assert_eq!(MaterialTab::parse("insulation"), Ok(MaterialTab::Insulation));
        assert_eq!(MaterialTab::parse("roofing"), Err(UnknownTab("roofing".to_string())));
    }
}
