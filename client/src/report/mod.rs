//! Static QBV report catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard renders one `CompanyReport` at a time. Reports are
//! compile-time data; `ReportCatalog` is built once in `App` and handed
//! to pages through Leptos context, keyed by `CompanyId`.


mod ghostcat;
mod pinnacle;

use serde::{Deserialize, Serialize};

/// Reporting window shown in the report header.
pub const REPORT_PERIOD: &str = "Q1 2025 - WEEK 9";

/// Baseline period the valuation change is measured against.
pub const VALUATION_BASELINE: &str = "Q4 2024";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyId {
    #[default]
    Pinnacle,
    GhostCat,
}

impl CompanyId {
    pub const ALL: [Self; 2] = [Self::Pinnacle, Self::GhostCat];

    pub fn toggled(self) -> Self {
        match self {
            Self::Pinnacle => Self::GhostCat,
            Self::GhostCat => Self::Pinnacle,
        }
    }

    /// Short name used on the company switch.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pinnacle => "Pinnacle",
            Self::GhostCat => "Ghost-Cat",
        }
    }
}

/// The scored categories of a QBV report, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Awareness,
    Perception,
    Competition,
}

impl ConstructKind {
    pub const ALL: [Self; 3] = [Self::Awareness, Self::Perception, Self::Competition];

    pub fn name(self) -> &'static str {
        match self {
            Self::Awareness => "Awareness",
            Self::Perception => "Perception",
            Self::Competition => "Competition",
        }
    }

    /// Hover text on the score ring.
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Awareness => {
                "Awareness measures your brand's visibility across digital channels including website traffic, social media presence, and industry mentions."
            }
            Self::Perception => {
                "Perception reflects consumer scores, employee ratings, and sentiment analysis from social media and news sources."
            }
            Self::Competition => {
                "Competition evaluates how well you are performing against your closest competitors in the market."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompanySummary {
    pub name: &'static str,
    pub overall_score: u8,
    pub status: &'static str,
    pub key_strengths: &'static [&'static str],
    pub areas_for_improvement: &'static [&'static str],
}

/// Headline brand value figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Valuation {
    pub amount_usd: u64,
    pub change: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Construct {
    pub kind: ConstructKind,
    pub value: u8,
    pub details: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subconstruct {
    pub name: &'static str,
    pub score: u8,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialChannel {
    pub name: &'static str,
    pub score: u8,
    /// Brand color as a CSS hex string.
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AwarenessCompetitor {
    pub name: &'static str,
    pub score: u8,
    pub status: &'static str,
    pub traffic: u8,
    pub engagement: u8,
    pub social: u8,
    pub key_strengths: &'static [&'static str],
    pub areas_for_improvement: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AwarenessData {
    pub score: u8,
    pub traffic: u8,
    pub engagement: u8,
    pub social: u8,
    pub status: &'static str,
    pub social_channels: &'static [SocialChannel],
    pub competitors: &'static [AwarenessCompetitor],
    pub subconstructs: &'static [Subconstruct],
    pub recommendations: &'static [&'static str],
}

/// One sentiment feed (news, a social platform, reviews) with graded findings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentimentSource {
    pub name: &'static str,
    pub score: u8,
    pub label: Option<&'static str>,
    pub note: Option<&'static str>,
    pub positive: &'static [&'static str],
    pub neutral: &'static [&'static str],
    pub negative: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerceptionCompetitor {
    pub name: &'static str,
    pub score: u8,
    /// Values for `PerceptionData::metric_labels`, same order.
    pub metrics: [u8; 2],
    pub status: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerceptionData {
    pub score: u8,
    pub status: &'static str,
    pub details: &'static str,
    pub subconstructs: &'static [Subconstruct],
    pub sources: &'static [SentimentSource],
    pub metric_labels: [&'static str; 2],
    pub competitors: &'static [PerceptionCompetitor],
    pub recommendations: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketPosition {
    pub name: &'static str,
    pub score: u8,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SwotQuadrant {
    #[default]
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl SwotQuadrant {
    pub const ALL: [Self; 4] = [Self::Strengths, Self::Weaknesses, Self::Opportunities, Self::Threats];

    pub fn label(self) -> &'static str {
        match self {
            Self::Strengths => "Strengths",
            Self::Weaknesses => "Weaknesses",
            Self::Opportunities => "Opportunities",
            Self::Threats => "Threats",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swot {
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub opportunities: &'static [&'static str],
    pub threats: &'static [&'static str],
}

impl Swot {
    pub fn items(&self, quadrant: SwotQuadrant) -> &'static [&'static str] {
        match quadrant {
            SwotQuadrant::Strengths => self.strengths,
            SwotQuadrant::Weaknesses => self.weaknesses,
            SwotQuadrant::Opportunities => self.opportunities,
            SwotQuadrant::Threats => self.threats,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompetitionCompetitor {
    pub name: &'static str,
    pub score: u8,
    pub awareness_score: u8,
    pub perception_score: u8,
    pub status: &'static str,
    pub key_strengths: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompetitionData {
    pub score: u8,
    pub status: &'static str,
    pub details: &'static str,
    /// Sentence following the status in the overall position box.
    pub position_summary: &'static str,
    pub market_position: &'static [MarketPosition],
    pub swot: Swot,
    pub competitors: &'static [CompetitionCompetitor],
    pub recommendations: &'static [&'static str],
}

/// Everything the dashboard shows for one company.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompanyReport {
    pub id: CompanyId,
    pub summary: CompanySummary,
    pub valuation: Valuation,
    pub constructs: [Construct; 3],
    pub awareness: AwarenessData,
    pub perception: PerceptionData,
    pub competition: CompetitionData,
}

impl CompanyReport {
    pub fn construct(&self, kind: ConstructKind) -> &Construct {
        match kind {
            ConstructKind::Awareness => &self.constructs[0],
            ConstructKind::Perception => &self.constructs[1],
            ConstructKind::Competition => &self.constructs[2],
        }
    }
}

/// Read-only lookup of reports by company.
#[derive(Clone, Copy, Debug)]
pub struct ReportCatalog {
    pinnacle: &'static CompanyReport,
    ghostcat: &'static CompanyReport,
}

impl Default for ReportCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportCatalog {
    pub fn new() -> Self {
        Self { pinnacle: &pinnacle::REPORT, ghostcat: &ghostcat::REPORT }
    }

    pub fn report(&self, id: CompanyId) -> &'static CompanyReport {
        match id {
            CompanyId::Pinnacle => self.pinnacle,
            CompanyId::GhostCat => self.ghostcat,
        }
    }
}
