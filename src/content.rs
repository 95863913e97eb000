//! Boilerplate content tables for the investor brief
//!
//! Category and slug driven copy is stored as ordered rule lists. Rules are
//! checked top to bottom with a case-insensitive substring test and the first
//! match wins; when nothing matches the table's default applies, so every
//! lookup is total. Matching is not anchored to word boundaries, so a category
//! such as "Agroforestry Health Tech" resolves to the agriculture rule.

/// Keyword rule: `content` applies when any keyword occurs in the input.
#[derive(Debug)]
pub struct Rule<T: 'static> {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub content: T,
}

impl<T> Rule<T> {
    /// `value` must already be lowercased.
    fn matches(&self, value: &str) -> bool {
        self.keywords.iter().any(|keyword| value.contains(keyword))
    }
}

/// Ordered rules plus the catch-all used when none match.
#[derive(Debug)]
pub struct RuleTable<T: 'static> {
    pub rules: &'static [Rule<T>],
    pub default: Rule<T>,
}

impl<T> RuleTable<T> {
    pub fn select(&self, value: &str) -> &Rule<T> {
        let value = value.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&value))
            .unwrap_or(&self.default)
    }
}

/// Category-dependent bullet sets.
#[derive(Debug)]
pub struct CategoryContent {
    pub highlights: &'static [&'static str],
    pub why_now: &'static [&'static str],
}

pub static CATEGORY_CONTENT: RuleTable<CategoryContent> = RuleTable {
    rules: &[
        Rule {
            name: "agriculture",
            keywords: &["agri", "agro", "farm", "soil", "crop"],
            content: CategoryContent {
                highlights: &[
                    "Real demand from agricultural operations",
                    "Measurable yield and input-cost improvements at field level",
                    "Recurring revenue from seasonal service and data contracts",
                    "Scalable model across regions with similar crop profiles",
                    "Alignment with sustainability and soil-health incentives",
                ],
                why_now: &[
                    "Input costs and climate volatility are pressuring farm margins",
                    "Growers are adopting data-driven and regenerative practices",
                    "Incentives increasingly reward soil and water outcomes",
                    "Buyers demand traceability from field to shelf",
                ],
            },
        },
        Rule {
            name: "health",
            keywords: &["health", "longevity", "medic", "bio"],
            content: CategoryContent {
                highlights: &[
                    "Data infrastructure for precision medicine",
                    "Preventive, longevity-focused care with recurring engagement",
                    "Clinical partnerships that validate outcomes",
                    "Multiple monetisation paths across B2B and B2C channels",
                    "Defensible data assets that compound over time",
                ],
                why_now: &[
                    "Healthcare is shifting from reactive treatment to prevention",
                    "Demand for personalised health insight is accelerating",
                    "Diagnostic and wearable costs have fallen sharply",
                    "Regulators increasingly recognise real-world evidence",
                ],
            },
        },
        Rule {
            name: "food",
            keywords: &["food", "nutri"],
            content: CategoryContent {
                highlights: &[
                    "Products addressing functional nutrition demand",
                    "Premium positioning with healthy unit economics",
                    "Short supply chain from sourcing to shelf",
                    "Brand extension potential across adjacent categories",
                ],
                why_now: &[
                    "Consumers prioritise nutrient-dense, clean-label foods",
                    "Retail and food-service buyers seek differentiated healthy ranges",
                    "Ingredient innovation is lowering the cost of functional products",
                ],
            },
        },
    ],
    default: Rule {
        name: "default",
        keywords: &[],
        content: CategoryContent {
            highlights: &[
                "Portfolio structure with shared infrastructure",
                "Capital-efficient development stage with defined milestones",
                "Experienced operators supported by the holding company",
                "Clear path to revenue through established partner networks",
            ],
            why_now: &[
                "Market conditions favour disciplined, asset-backed growth",
                "Shared portfolio resources shorten time to market",
                "Early entry offers favourable terms for aligned investors",
            ],
        },
    },
};

/// Revenue model bullets keyed on slug fragments.
pub static REVENUE_MODELS: RuleTable<&'static [&'static str]> = RuleTable {
    rules: &[
        Rule {
            name: "agriculture",
            keywords: &["agri", "farm", "soil"],
            content: &[
                "Subscription fees for agronomic data and advisory services",
                "Per-hectare service contracts with growers and cooperatives",
                "Revenue share on verified yield and carbon outcomes",
                "Licensing of field insights to supply-chain partners",
            ],
        },
        Rule {
            name: "health",
            keywords: &["longevity", "health", "clinic"],
            content: &[
                "Membership programmes for preventive and longevity care",
                "Diagnostic and testing fees",
                "Wellness contracts with employers and insurers",
                "Research and data partnerships",
            ],
        },
        Rule {
            name: "food",
            keywords: &["nutri", "food"],
            content: &[
                "Direct-to-consumer product sales",
                "Wholesale and retail distribution margins",
                "Private-label and co-manufacturing agreements",
            ],
        },
    ],
    default: Rule {
        name: "portfolio",
        keywords: &[],
        content: &[
            "Project-level revenue from core operations",
            "Shared services and infrastructure across the portfolio",
            "Cross-selling with sister companies",
            "Long-term value creation through portfolio synergies",
        ],
    },
};

pub const ROADMAP: [&str; 4] = [
    "Phase 1 – Validation: pilot deployments and proof of demand",
    "Phase 2 – Build-out: core team, infrastructure and first contracts",
    "Phase 3 – Scale: regional expansion and partner distribution",
    "Phase 4 – Maturity: profitability, follow-on funding or strategic exit",
];

pub const RISKS: [&str; 7] = [
    "Market adoption may be slower than projected",
    "Execution risk in scaling operations and team",
    "Regulatory changes affecting the sector",
    "Dependence on key partners and suppliers",
    "Competition from established players and new entrants",
    "Availability of funding for later growth stages",
    "Macroeconomic conditions affecting valuations and demand",
];

pub const DISCLAIMER: &str = "This brief is provided for information purposes only \
and does not constitute an offer to sell or a solicitation of an offer to buy any \
securities. Expressions of interest are non-binding. Figures, timelines and project \
details are indicative and subject to change. Prospective investors should conduct \
their own due diligence and seek independent legal, tax and financial advice.";

/// Holding company details used in the About section and document metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfile {
    pub name: String,
    pub about: String,
}

impl CompanyProfile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let about = format!(
            "{} is a private investment holding company that builds and backs \
             operating businesses in agriculture, health and nutrition. Portfolio \
             projects share infrastructure, talent and distribution, allowing each \
             venture to reach milestones with less capital and lower execution risk.",
            name
        );
        Self { name, about }
    }
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self::new("Portfolio Holdings")
    }
}
