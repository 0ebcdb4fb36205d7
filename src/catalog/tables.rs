//! Authored recommendation content, one table per project type and
//! sustainability focus.

use super::{material, DesignTemplate};

pub(super) static COMMERCIAL_ECO: &[DesignTemplate] = &[
    DesignTemplate {
        title: "Eco-Modern Office Tower",
        description: "A sleek, energy-efficient design with abundant natural light and green spaces integrated throughout the structure.",
        materials: &[
            material("Low-E Double Glazing", "Exterior", 85, 75, 90),
            material("Cross-Laminated Timber", "Structural", 95, 80, 85),
            material("Recycled Steel Reinforcement", "Structural", 80, 85, 95),
            material("Bamboo Flooring", "Interior", 90, 70, 80),
        ],
        cost_savings: 18,
        sustainability_score: 88,
        construction_time: "14 months",
    },
    DesignTemplate {
        title: "Biophilic Business Center",
        description: "A nature-inspired design that maximizes occupant wellbeing through integrated greenery, natural materials, and optimal air quality.",
        materials: &[
            material("Living Green Walls", "Interior/Exterior", 95, 65, 85),
            material("Rammed Earth Walls", "Structural", 90, 75, 80),
            material("Cork Insulation", "Insulation", 95, 70, 85),
        ],
        cost_savings: 12,
        sustainability_score: 92,
        construction_time: "16 months",
    },
    DesignTemplate {
        title: "Smart Tech Office Hub",
        description: "A highly automated building with integrated IoT systems for optimal energy management, space utilization, and occupant comfort.",
        materials: &[
            material("Electrochromic Glass", "Exterior", 85, 60, 95),
            material("Recycled Aluminum Cladding", "Exterior", 80, 85, 90),
            material("Modular Raised Flooring", "Interior", 75, 90, 95),
        ],
        cost_savings: 22,
        sustainability_score: 80,
        construction_time: "12 months",
    },
    DesignTemplate {
        title: "Adaptive Reuse Complex",
        description: "A design that incorporates existing structural elements with modern additions, preserving embodied carbon while creating contemporary spaces.",
        materials: &[
            material("Reclaimed Brick", "Exterior", 95, 85, 85),
            material("Hempcrete", "Insulation", 95, 70, 80),
            material("Recycled Glass Countertops", "Interior", 90, 75, 85),
        ],
        cost_savings: 25,
        sustainability_score: 90,
        construction_time: "10 months",
    },
];

pub(super) static COMMERCIAL_STANDARD: &[DesignTemplate] = &[
    DesignTemplate {
        title: "Modern Office Complex",
        description: "A contemporary office design with efficient space utilization and premium finishes for a professional environment.",
        materials: &[
            material("Structural Steel", "Structural", 60, 85, 95),
            material("Glass Curtain Wall", "Exterior", 65, 70, 85),
            material("Porcelain Tile Flooring", "Interior", 70, 80, 90),
        ],
        cost_savings: 15,
        sustainability_score: 65,
        construction_time: "12 months",
    },
    DesignTemplate {
        title: "Corporate Headquarters",
        description: "An impressive corporate headquarters with grand entrance and flexible office spaces designed for productivity.",
        materials: &[
            material("Precast Concrete Panels", "Exterior", 55, 90, 90),
            material("Aluminum Composite Panels", "Exterior", 60, 85, 85),
            material("Luxury Vinyl Tile", "Interior", 65, 90, 85),
        ],
        cost_savings: 20,
        sustainability_score: 60,
        construction_time: "14 months",
    },
    DesignTemplate {
        title: "Tech Campus Building",
        description: "A modern tech campus building with open floor plans and collaborative spaces designed for innovation.",
        materials: &[
            material("Reinforced Concrete", "Structural", 50, 95, 95),
            material("Insulated Metal Panels", "Exterior", 65, 85, 90),
            material("Carpet Tile", "Interior", 70, 85, 80),
        ],
        cost_savings: 18,
        sustainability_score: 62,
        construction_time: "13 months",
    },
    DesignTemplate {
        title: "Mixed-Use Office Building",
        description: "A versatile building with retail on the ground floor and office spaces above, maximizing revenue potential.",
        materials: &[
            material("Steel Frame", "Structural", 60, 85, 95),
            material("Brick Veneer", "Exterior", 75, 80, 90),
            material("Polished Concrete Floors", "Interior", 70, 95, 85),
        ],
        cost_savings: 22,
        sustainability_score: 68,
        construction_time: "11 months",
    },
];

pub(super) static RESIDENTIAL_ECO: &[DesignTemplate] = &[
    DesignTemplate {
        title: "Eco-Friendly Apartment Complex",
        description: "A sustainable multi-family housing development with passive solar design and community garden spaces.",
        materials: &[
            material("Structural Insulated Panels", "Structural/Insulation", 90, 80, 85),
            material("Triple-Glazed Windows", "Exterior", 95, 70, 90),
            material("Reclaimed Wood Flooring", "Interior", 95, 75, 85),
        ],
        cost_savings: 15,
        sustainability_score: 92,
        construction_time: "16 months",
    },
    DesignTemplate {
        title: "Net-Zero Housing Development",
        description: "A residential community designed to produce as much energy as it consumes through renewable sources.",
        materials: &[
            material("Hempcrete Walls", "Structural/Insulation", 98, 65, 80),
            material("Solar Roof Tiles", "Exterior/Energy", 95, 60, 85),
            material("Bamboo Flooring", "Interior", 90, 80, 85),
        ],
        cost_savings: 10,
        sustainability_score: 95,
        construction_time: "18 months",
    },
    DesignTemplate {
        title: "Biophilic Townhouses",
        description: "A row of townhouses designed with natural materials and abundant connections to nature for healthier living.",
        materials: &[
            material("Cross-Laminated Timber", "Structural", 90, 75, 85),
            material("Green Roof System", "Exterior", 95, 65, 80),
            material("Cork Flooring", "Interior", 90, 80, 85),
        ],
        cost_savings: 12,
        sustainability_score: 90,
        construction_time: "14 months",
    },
    DesignTemplate {
        title: "Passive House Condominiums",
        description: "Ultra-energy efficient condominiums built to Passive House standards with minimal heating and cooling needs.",
        materials: &[
            material("Cellulose Insulation", "Insulation", 95, 85, 90),
            material("Fiberglass-Framed Windows", "Exterior", 85, 75, 95),
            material("Marmoleum Flooring", "Interior", 90, 80, 85),
        ],
        cost_savings: 20,
        sustainability_score: 88,
        construction_time: "15 months",
    },
];

pub(super) static RESIDENTIAL_STANDARD: &[DesignTemplate] = &[
    DesignTemplate {
        title: "Luxury Apartment Complex",
        description: "An upscale residential development with premium finishes and amenities designed for comfort and style.",
        materials: &[
            material("Reinforced Concrete", "Structural", 50, 90, 95),
            material("Stone Veneer", "Exterior", 60, 70, 90),
            material("Engineered Hardwood", "Interior", 65, 75, 85),
        ],
        cost_savings: 12,
        sustainability_score: 58,
        construction_time: "18 months",
    },
    DesignTemplate {
        title: "Modern Townhouse Development",
        description: "Contemporary townhouses with open floor plans and rooftop terraces for urban living.",
        materials: &[
            material("Steel Frame", "Structural", 60, 85, 95),
            material("Fiber Cement Siding", "Exterior", 70, 85, 90),
            material("Porcelain Tile", "Interior", 65, 80, 90),
        ],
        cost_savings: 15,
        sustainability_score: 65,
        construction_time: "14 months",
    },
    DesignTemplate {
        title: "Traditional Condominium Building",
        description: "A classic residential building with timeless design elements and durable construction.",
        materials: &[
            material("Concrete Block", "Structural", 55, 95, 90),
            material("Brick Exterior", "Exterior", 70, 80, 95),
            material("Carpet and Laminate", "Interior", 60, 90, 80),
        ],
        cost_savings: 18,
        sustainability_score: 62,
        construction_time: "16 months",
    },
    DesignTemplate {
        title: "Mixed-Income Housing",
        description: "A residential development designed to accommodate various income levels with efficient use of space.",
        materials: &[
            material("Wood Frame", "Structural", 75, 90, 85),
            material("Vinyl Siding", "Exterior", 55, 95, 85),
            material("Vinyl Plank Flooring", "Interior", 60, 95, 80),
        ],
        cost_savings: 25,
        sustainability_score: 63,
        construction_time: "12 months",
    },
];

pub(super) static INDUSTRIAL_ECO: &[DesignTemplate] = &[
    DesignTemplate {
        title: "Sustainable Manufacturing Facility",
        description: "An eco-friendly industrial building designed for efficient production with minimal environmental impact.",
        materials: &[
            material("Recycled Steel Structure", "Structural", 85, 80, 95),
            material("Insulated Metal Panels", "Exterior", 80, 85, 90),
            material("Polished Concrete", "Interior", 85, 95, 90),
        ],
        cost_savings: 15,
        sustainability_score: 85,
        construction_time: "10 months",
    },
    DesignTemplate {
        title: "Green Logistics Center",
        description: "A distribution facility with energy-efficient systems and sustainable materials for reduced operational costs.",
        materials: &[
            material("Glulam Beams", "Structural", 90, 75, 85),
            material("Cool Roof System", "Exterior", 85, 80, 90),
            material("Recycled Rubber Flooring", "Interior", 90, 85, 85),
        ],
        cost_savings: 18,
        sustainability_score: 88,
        construction_time: "12 months",
    },
    DesignTemplate {
        title: "Solar-Powered Warehouse",
        description: "A warehouse facility with integrated solar panels and daylighting systems for energy independence.",
        materials: &[
            material("Recycled Steel Frame", "Structural", 85, 80, 95),
            material("Photovoltaic Roof Panels", "Exterior/Energy", 95, 60, 85),
            material("Epoxy Flooring", "Interior", 75, 90, 95),
        ],
        cost_savings: 10,
        sustainability_score: 90,
        construction_time: "14 months",
    },
    DesignTemplate {
        title: "Eco-Industrial Park Building",
        description: "A flexible industrial space designed for circular economy principles with shared resources.",
        materials: &[
            material("Hybrid Timber-Steel Structure", "Structural", 90, 75, 90),
            material("Green Wall System", "Exterior", 95, 65, 80),
            material("Bamboo-Composite Panels", "Interior", 90, 75, 85),
        ],
        cost_savings: 12,
        sustainability_score: 92,
        construction_time: "16 months",
    },
];

pub(super) static INDUSTRIAL_STANDARD: &[DesignTemplate] = &[
    DesignTemplate {
        title: "Standard Manufacturing Facility",
        description: "A cost-effective industrial building designed for efficient production and durability.",
        materials: &[
            material("Steel Structure", "Structural", 60, 90, 95),
            material("Metal Siding", "Exterior", 65, 95, 90),
            material("Sealed Concrete", "Interior", 70, 95, 90),
        ],
        cost_savings: 25,
        sustainability_score: 65,
        construction_time: "8 months",
    },
    DesignTemplate {
        title: "Distribution Center",
        description: "A large-scale warehouse facility optimized for logistics operations and storage efficiency.",
        materials: &[
            material("Pre-Engineered Metal Building", "Structural", 55, 95, 90),
            material("Standing Seam Metal Roof", "Exterior", 65, 90, 95),
            material("Heavy-Duty Epoxy Floor", "Interior", 60, 85, 95),
        ],
        cost_savings: 30,
        sustainability_score: 60,
        construction_time: "9 months",
    },
    DesignTemplate {
        title: "Flex Industrial Space",
        description: "A versatile industrial building suitable for various uses from light manufacturing to R&D.",
        materials: &[
            material("Tilt-Up Concrete Panels", "Structural/Exterior", 55, 90, 95),
            material("Membrane Roofing", "Exterior", 60, 95, 85),
            material("Modular Raised Flooring", "Interior", 65, 85, 90),
        ],
        cost_savings: 22,
        sustainability_score: 60,
        construction_time: "10 months",
    },
    DesignTemplate {
        title: "Cold Storage Facility",
        description: "A specialized industrial building designed for temperature-controlled storage with high energy efficiency.",
        materials: &[
            material("Insulated Concrete Forms", "Structural", 70, 80, 95),
            material("High-Performance Insulation", "Insulation", 75, 75, 95),
            material("Insulated Metal Deck", "Exterior", 65, 85, 95),
        ],
        cost_savings: 15,
        sustainability_score: 70,
        construction_time: "12 months",
    },
];
