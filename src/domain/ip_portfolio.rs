//! Intellectual property portfolio
//!
//! The canonical table of protectable assets with their protection strategy
//! and 1-10 evaluation scores, plus derived planning views: an executive
//! summary, a per-asset risk assessment, a filing timeline and a six-year
//! investment projection.

pub mod projection;
pub mod risk;
pub mod timeline;

pub use projection::{investment_projection, YearProjection};
pub use risk::{assess_portfolio_risk, assess_risk, RiskAssessment};
pub use timeline::{filing_timeline, Milestone, MilestoneEvent, MilestoneStatus};

use derive_more::Display;
use serde::Serialize;

/// How an asset is protected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum ProtectionKind {
    #[display("Patent")]
    Patent,
    #[display("Patent (or Defensive Pub)")]
    PatentOrDefensivePublication,
    #[display("Trade Secret")]
    TradeSecret,
}

impl ProtectionKind {
    /// Whether the asset goes through a patent filing
    pub fn is_patent(self) -> bool {
        matches!(self, Self::Patent | Self::PatentOrDefensivePublication)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub fn is_high(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum CompetitiveAdvantage {
    Critical,
    High,
    Medium,
    Low,
}

/// Evaluation scores, each on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IpScores {
    pub market_impact: u8,
    pub technical_complexity: u8,
    pub defensibility: u8,
    pub revenue_potential: u8,
}

/// One protectable asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IpAsset {
    pub key: &'static str,
    pub name: &'static str,
    pub protection: ProtectionKind,
    pub priority: Priority,
    pub scores: IpScores,
    pub rationale: &'static str,
    pub timeline_months: u32,
    pub estimated_cost: u32,
    pub competitive_advantage: CompetitiveAdvantage,
}

static IP_PORTFOLIO: [IpAsset; 8] = [
    IpAsset {
        key: "A",
        name: "Telemetry-attested micro-mobility MRV",
        protection: ProtectionKind::Patent,
        priority: Priority::High,
        scores: IpScores {
            market_impact: 9,
            technical_complexity: 8,
            defensibility: 9,
            revenue_potential: 10,
        },
        rationale: "Foundational technology for verifiable credits. Patenting provides public \
                    credibility and legal defense against competitors seeking to build a \
                    similar system.",
        timeline_months: 6,
        estimated_cost: 50_000,
        competitive_advantage: CompetitiveAdvantage::High,
    },
    IpAsset {
        key: "B",
        name: "Degradation-aware charging orchestration",
        protection: ProtectionKind::Patent,
        priority: Priority::High,
        scores: IpScores {
            market_impact: 8,
            technical_complexity: 9,
            defensibility: 8,
            revenue_potential: 9,
        },
        rationale: "Novel method of optimizing charging for SOH and credit yield. Secures a key \
                    operational and financial advantage.",
        timeline_months: 8,
        estimated_cost: 45_000,
        competitive_advantage: CompetitiveAdvantage::High,
    },
    IpAsset {
        key: "C",
        name: "Swap-station integrity & quality-gate MRV",
        protection: ProtectionKind::Patent,
        priority: Priority::High,
        scores: IpScores {
            market_impact: 9,
            technical_complexity: 7,
            defensibility: 9,
            revenue_potential: 8,
        },
        rationale: "Addresses a core market integrity problem (data veracity). This non-obvious \
                    method provides a strong basis for a patentable claim that builds trust with \
                    registries and auditors.",
        timeline_months: 6,
        estimated_cost: 40_000,
        competitive_advantage: CompetitiveAdvantage::High,
    },
    IpAsset {
        key: "E",
        name: "Blended asset valuation for EV portfolios",
        protection: ProtectionKind::Patent,
        priority: Priority::Critical,
        scores: IpScores {
            market_impact: 10,
            technical_complexity: 8,
            defensibility: 8,
            revenue_potential: 10,
        },
        rationale: "The specific, technically-implemented algorithm that creates a securitizable \
                    asset class. Patenting protects this financial innovation from replication.",
        timeline_months: 12,
        estimated_cost: 60_000,
        competitive_advantage: CompetitiveAdvantage::Critical,
    },
    IpAsset {
        key: "F",
        name: "Cross-border data stewarding for climate credits",
        protection: ProtectionKind::Patent,
        priority: Priority::High,
        scores: IpScores {
            market_impact: 8,
            technical_complexity: 9,
            defensibility: 7,
            revenue_potential: 8,
        },
        rationale: "Novel method for handling complex, cross-jurisdictional data flows. Essential \
                    for global operations and provides a legal framework for data governance.",
        timeline_months: 10,
        estimated_cost: 55_000,
        competitive_advantage: CompetitiveAdvantage::Medium,
    },
    IpAsset {
        key: "G",
        name: "Swap-aware OCPP/OCPI gateway for 2W/3W",
        protection: ProtectionKind::PatentOrDefensivePublication,
        priority: Priority::Medium,
        scores: IpScores {
            market_impact: 7,
            technical_complexity: 8,
            defensibility: 6,
            revenue_potential: 7,
        },
        rationale: "A protocol extension that provides a clear technical advancement. Patenting is \
                    preferred, but a defensive publication could be used if standardization is \
                    prioritized.",
        timeline_months: 4,
        estimated_cost: 25_000,
        competitive_advantage: CompetitiveAdvantage::Medium,
    },
    IpAsset {
        key: "H",
        name: "Sodium-ion integration policy",
        protection: ProtectionKind::TradeSecret,
        priority: Priority::Medium,
        scores: IpScores {
            market_impact: 6,
            technical_complexity: 7,
            defensibility: 8,
            revenue_potential: 6,
        },
        rationale: "The specific, proprietary policies and algorithms for optimizing sodium-ion \
                    with Li-ion are performance-enhancing and difficult to reverse-engineer. \
                    Secrecy is key.",
        timeline_months: 2,
        estimated_cost: 5_000,
        competitive_advantage: CompetitiveAdvantage::Medium,
    },
    IpAsset {
        key: "I",
        name: "Calibration tables for losses & swap queue heuristics",
        protection: ProtectionKind::TradeSecret,
        priority: Priority::Medium,
        scores: IpScores {
            market_impact: 5,
            technical_complexity: 6,
            defensibility: 9,
            revenue_potential: 5,
        },
        rationale: "These are operational \"recipes\" that provide a competitive edge. They are \
                    highly specific, easy to keep internal, and provide a marginal but critical \
                    performance advantage.",
        timeline_months: 1,
        estimated_cost: 2_000,
        competitive_advantage: CompetitiveAdvantage::Low,
    },
];

/// The full portfolio in filing order
pub fn assets() -> &'static [IpAsset] {
    &IP_PORTFOLIO
}

/// Find an asset by its letter key
pub fn lookup(key: &str) -> Option<&'static IpAsset> {
    IP_PORTFOLIO.iter().find(|asset| asset.key == key)
}

/// Headline figures for the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub total_assets: usize,
    /// Includes assets that may fall back to a defensive publication
    pub patent_count: usize,
    pub trade_secret_count: usize,
    pub avg_market_impact: f64,
    pub avg_revenue_potential: f64,
    /// Critical or High priority
    pub high_priority_count: usize,
    pub total_estimated_cost: u64,
}

fn mean_score(portfolio: &[IpAsset], score: impl Fn(&IpAsset) -> u8) -> f64 {
    let total: f64 = portfolio.iter().map(|a| f64::from(score(a))).sum();
    total / portfolio.len() as f64
}

pub fn executive_summary() -> ExecutiveSummary {
    let portfolio = assets();
    let total = portfolio.len();

    ExecutiveSummary {
        total_assets: total,
        patent_count: portfolio.iter().filter(|a| a.protection.is_patent()).count(),
        trade_secret_count: portfolio
            .iter()
            .filter(|a| a.protection == ProtectionKind::TradeSecret)
            .count(),
        avg_market_impact: mean_score(portfolio, |a| a.scores.market_impact),
        avg_revenue_potential: mean_score(portfolio, |a| a.scores.revenue_potential),
        high_priority_count: portfolio.iter().filter(|a| a.priority.is_high()).count(),
        total_estimated_cost: portfolio.iter().map(|a| u64::from(a.estimated_cost)).sum(),
    }
}
