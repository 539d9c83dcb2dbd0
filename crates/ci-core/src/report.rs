//! Report Content Store.
//!
//! Every figure in the competitive intelligence briefing is a literal typed
//! into the factories at the bottom of this file. Nothing here is computed
//! from a dataset; the store only hands out read-only views for rendering.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A headline metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The verdict banner and the pull quote that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub headline: String,
    pub quote: String,
}

/// One stage of the call-volume funnel. Stages are stored widest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    High,
    Medium,
    Low,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 3] = [ThreatLevel::High, ThreatLevel::Medium, ThreatLevel::Low];

    pub fn label(&self) -> &'static str {
        match self {
            ThreatLevel::High => "High Threat",
            ThreatLevel::Medium => "Medium Threat",
            ThreatLevel::Low => "Low Threat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatLevelRecord {
    pub level: ThreatLevel,
    pub count: u64,
    pub description: String,
}

/// How often a descriptor came up when prospects talked about the rival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptionKeyword {
    pub keyword: String,
    pub frequency: u64,
}

/// A reason a prospect gave for not moving forward.
///
/// The store keeps blockers in authored priority order; callers must not
/// re-sort by `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockerReason {
    pub reason: String,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositioningPoint {
    pub topic: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattlecardRow {
    pub area: String,
    pub counterpart_weakness: String,
    pub counter_position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rank: u8,
    pub title: String,
    pub impact: Level,
    pub effort: Level,
    pub body: String,
}

// ---------------------------------------------------------------------------
// ReportStore
// ---------------------------------------------------------------------------

/// Read-only holder for the briefing content.
#[derive(Debug, Clone, Serialize)]
pub struct ReportStore {
    title: String,
    subtitle: String,
    period: String,
    source: String,
    vendor_caption: String,
    footer: String,
    metrics: Vec<Metric>,
    verdict: Verdict,
    funnel: Vec<FunnelStage>,
    threats: Vec<ThreatLevelRecord>,
    keywords: Vec<PerceptionKeyword>,
    blockers: Vec<BlockerReason>,
    wins: Vec<PositioningPoint>,
    improvements: Vec<PositioningPoint>,
    battlecard: Vec<BattlecardRow>,
    recommendations: Vec<Recommendation>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            title: "Quipli Competitive Intelligence Report".into(),
            subtitle: "Executive Leadership Team Briefing".into(),
            period: "Nov 2025".into(),
            source: "ML-Powered Call Analysis".into(),
            vendor_caption: "Point Rental Powered by Strive Software, Inc.".into(),
            footer: "Confidential | Point of Rental Competitive Intelligence Report".into(),
            metrics: report_metrics(),
            verdict: report_verdict(),
            funnel: report_funnel(),
            threats: report_threats(),
            keywords: report_keywords(),
            blockers: report_blockers(),
            wins: report_wins(),
            improvements: report_improvements(),
            battlecard: report_battlecard(),
            recommendations: report_recommendations(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn vendor_caption(&self) -> &str {
        &self.vendor_caption
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Funnel stages, widest first.
    pub fn funnel_stages(&self) -> &[FunnelStage] {
        &self.funnel
    }

    pub fn threat_levels(&self) -> &[ThreatLevelRecord] {
        &self.threats
    }

    pub fn threat_level(&self, level: ThreatLevel) -> Option<&ThreatLevelRecord> {
        self.threats.iter().find(|t| t.level == level)
    }

    pub fn perception_keywords(&self) -> &[PerceptionKeyword] {
        &self.keywords
    }

    /// Blockers in authored priority order.
    pub fn blocker_reasons(&self) -> &[BlockerReason] {
        &self.blockers
    }

    pub fn wins(&self) -> &[PositioningPoint] {
        &self.wins
    }

    pub fn improvements(&self) -> &[PositioningPoint] {
        &self.improvements
    }

    pub fn battlecard_rows(&self) -> &[BattlecardRow] {
        &self.battlecard
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Share of all calls that held a substantive rival discussion, in percent.
    pub fn substantive_share_pct(&self) -> f64 {
        let total = self.stage_count("Total Calls");
        let substantive = self.stage_count("Quipli Discussions");
        percent(substantive, total)
    }

    /// Share of the verified sales calls rated high threat, in percent.
    pub fn high_threat_share_pct(&self) -> f64 {
        let high = self.threat_level(ThreatLevel::High).map_or(0, |t| t.count);
        let sales = self.stage_count("Sales Calls");
        percent(high, sales)
    }

    fn stage_count(&self, name: &str) -> u64 {
        self.funnel
            .iter()
            .find(|s| s.name == name)
            .map_or(0, |s| s.count)
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

// ---------------------------------------------------------------------------
// Content factories
// ---------------------------------------------------------------------------

fn report_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Total Calls Analyzed".into(),
            value: "~25,000".into(),
            note: None,
        },
        Metric {
            label: "Substantive Quipli Calls".into(),
            value: "73".into(),
            note: Some("0.29% of Total".into()),
        },
        Metric {
            label: "Verified Sales Calls".into(),
            value: "63".into(),
            note: Some("Excludes 10 internal/training calls".into()),
        },
    ]
}

fn report_verdict() -> Verdict {
    Verdict {
        headline: "VERDICT: LOW CONCERN".into(),
        quote: "Out of ~25,000 total calls, only 73 contain substantive Quipli discussions. \
                This does not indicate a significant competitive threat."
            .into(),
    }
}

fn report_funnel() -> Vec<FunnelStage> {
    vec![
        FunnelStage {
            name: "Total Calls".into(),
            count: 25_000,
        },
        FunnelStage {
            name: "Competitive Mentions".into(),
            count: 3_229,
        },
        FunnelStage {
            name: "Quipli Discussions".into(),
            count: 73,
        },
        FunnelStage {
            name: "Sales Calls".into(),
            count: 63,
        },
    ]
}

fn report_threats() -> Vec<ThreatLevelRecord> {
    vec![
        ThreatLevelRecord {
            level: ThreatLevel::High,
            count: 13,
            description: "Prospect is actively evaluating Quipli as a replacement".into(),
        },
        ThreatLevelRecord {
            level: ThreatLevel::Medium,
            count: 40,
            description: "Quipli came up as one option among several".into(),
        },
        ThreatLevelRecord {
            level: ThreatLevel::Low,
            count: 10,
            description: "Passing mention with no buying intent".into(),
        },
    ]
}

fn report_keywords() -> Vec<PerceptionKeyword> {
    vec![
        PerceptionKeyword {
            keyword: "Website".into(),
            frequency: 17,
        },
        PerceptionKeyword {
            keyword: "Basic".into(),
            frequency: 15,
        },
        PerceptionKeyword {
            keyword: "Simple".into(),
            frequency: 10,
        },
        PerceptionKeyword {
            keyword: "Modern".into(),
            frequency: 8,
        },
    ]
}

fn report_blockers() -> Vec<BlockerReason> {
    vec![
        BlockerReason {
            reason: "Timing/Contract".into(),
            count: 17,
            detail: Some("Contract ends in Sept / Seasonal timing".into()),
        },
        BlockerReason {
            reason: "Price Objection".into(),
            count: 14,
            detail: Some("Monthly recurring costs / Setup fee friction".into()),
        },
        BlockerReason {
            reason: "Switching Cost".into(),
            count: 14,
            detail: Some("Data migration / Training concerns".into()),
        },
        BlockerReason {
            reason: "Comparing Alternatives".into(),
            count: 10,
            detail: Some("Corporate mandate / Need to see options".into()),
        },
        BlockerReason {
            reason: "Missing Features".into(),
            count: 7,
            detail: None,
        },
    ]
}

fn report_wins() -> Vec<PositioningPoint> {
    vec![
        PositioningPoint {
            topic: "Industry Experience".into(),
            detail: "43 years & customer trust".into(),
        },
        PositioningPoint {
            topic: "Operational Depth".into(),
            detail: "Maintenance, work orders".into(),
        },
        PositioningPoint {
            topic: "Reporting".into(),
            detail: "ROI, utilization, unit-level financials".into(),
        },
        PositioningPoint {
            topic: "Scalability".into(),
            detail: "From Essentials to Elite".into(),
        },
    ]
}

fn report_improvements() -> Vec<PositioningPoint> {
    vec![
        PositioningPoint {
            topic: "UX".into(),
            detail: "Online booking perceived as less modern than Quipli".into(),
        },
        PositioningPoint {
            topic: "Pricing".into(),
            detail: "Seen as more expensive for small operators".into(),
        },
        PositioningPoint {
            topic: "Onboarding".into(),
            detail: "Quipli seen as easier to start".into(),
        },
    ]
}

fn report_battlecard() -> Vec<BattlecardRow> {
    vec![
        BattlecardRow {
            area: "Operational Depth".into(),
            counterpart_weakness: "Limited maintenance/work order functionality".into(),
            counter_position: "POR has deep maintenance workflows built for real operations".into(),
        },
        BattlecardRow {
            area: "Reporting".into(),
            counterpart_weakness: "Weak reporting and analytics capabilities".into(),
            counter_position: "Advanced ROI and utilization reporting in Elite".into(),
        },
        BattlecardRow {
            area: "Business Focus".into(),
            counterpart_weakness: "Website-first, operations second approach".into(),
            counter_position: "We're operations experts who also do online booking".into(),
        },
        BattlecardRow {
            area: "Track Record".into(),
            counterpart_weakness: "Untested at scale, newer company".into(),
            counter_position: "43 years of proven deployments across all sizes".into(),
        },
        BattlecardRow {
            area: "Serialized Assets".into(),
            counterpart_weakness: "Treats serialized equipment tracking as nice-to-have".into(),
            counter_position: "Core capability with deep asset management".into(),
        },
    ]
}

fn report_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            rank: 1,
            title: "Monitor, Don't Panic".into(),
            impact: Level::Low,
            effort: Level::Low,
            body: "With only 0.29% of calls mentioning Quipli, this is not an urgent threat. \
                   Continue monitoring but do not over-invest."
                .into(),
        },
        Recommendation {
            rank: 2,
            title: "Strengthen Online Booking UX".into(),
            impact: Level::Medium,
            effort: Level::Medium,
            body: "When Quipli comes up, it's about their modern interface. Incremental \
                   improvements here neutralize their primary appeal."
                .into(),
        },
        Recommendation {
            rank: 3,
            title: "Leverage Operational Depth".into(),
            impact: Level::High,
            effort: Level::Low,
            body: "In competitive situations, emphasize maintenance, reporting, and \
                   operational features where Quipli is weak."
                .into(),
        },
        Recommendation {
            rank: 4,
            title: "Refresh Win/Loss Analysis".into(),
            impact: Level::High,
            effort: Level::Medium,
            body: "Pull fresh SFDC data to determine actual win/loss rates. Current data is stale."
                .into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
