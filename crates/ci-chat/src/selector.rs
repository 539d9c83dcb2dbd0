//! Canned-Response Selector.
//!
//! An ordered table of (trigger, response) rules evaluated first-match-wins
//! against the case-folded query. Rule order is part of the contract: a query
//! that mentions several topics resolves to whichever rule is listed first.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// Which rule answered a query. `Help` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    CallVolume,
    ThreatLevels,
    Weaknesses,
    Strengths,
    Pricing,
    ExecutiveSummary,
    Help,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::CallVolume => "call volume",
            Topic::ThreatLevels => "threat levels",
            Topic::Weaknesses => "weaknesses",
            Topic::Strengths => "strengths",
            Topic::Pricing => "pricing",
            Topic::ExecutiveSummary => "executive summary",
            Topic::Help => "help",
        }
    }
}

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// Predicate over a case-folded query.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Matches when any keyword is a substring of the query.
    Any(&'static [&'static str]),
    /// Matches when every inner trigger matches.
    All(&'static [Trigger]),
}

impl Trigger {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Trigger::Any(keywords) => keywords.iter().any(|k| normalized.contains(k)),
            Trigger::All(parts) => parts.iter().all(|t| t.matches(normalized)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub topic: Topic,
    pub trigger: Trigger,
    pub response: &'static str,
}

// ---------------------------------------------------------------------------
// Canned text
// ---------------------------------------------------------------------------

pub const GREETING: &str = "Hello! I've read the Quipli competitive intelligence report. \
Ask me about call volume, threat levels, our strengths and weaknesses, pricing, \
or the executive summary.";

pub const CALL_VOLUME_RESPONSE: &str = "Based on the dataset, we analyzed a total of \
**~25,000 calls**. Of those, 3,229 had competitive mentions, only **73** contained \
substantive Quipli discussions (0.29%), and 63 of those were verified sales calls. \
The other 10 were internal or training calls.";

pub const THREAT_RESPONSE: &str = "Across the 63 verified sales calls, the threat \
breakdown is **High: 13**, **Medium: 40**, **Low: 10**. Only 20.6% of identified calls \
show a high competitive threat. Most mentions are prospects comparing options rather \
than committing to a switch.";

pub const WEAKNESS_RESPONSE: &str = "Where we need to improve: **online booking UX** \
is perceived as less modern than Quipli, we're seen as **more expensive for small \
operators**, and Quipli is viewed as **easier to onboard**. Incremental booking UX \
improvements would neutralize their primary appeal.";

pub const STRENGTH_RESPONSE: &str = "POR wins on **industry experience** (43 years of \
customer trust), **operational depth** (maintenance and work orders), **reporting** \
(ROI, utilization, unit-level financials), and **scalability** from Essentials to \
Elite. Lead with these in competitive deals.";

pub const PRICING_RESPONSE: &str = "Price is a known friction point. **14 of 63** sales \
calls raised a price objection, mostly about monthly recurring costs and setup fee \
friction. Small operators see us as more expensive, so position on total value: \
operational depth and reporting that Quipli can't match.";

pub const SUMMARY_RESPONSE: &str = "Executive summary: out of ~25,000 calls, only 73 \
(0.29%) contained substantive Quipli discussions. **Verdict: LOW CONCERN.** Monitor, \
don't panic; strengthen online booking UX; leverage operational depth; and refresh \
win/loss analysis with current SFDC data.";

pub const DEFAULT_RESPONSE: &str = "I can answer questions about total call volume, \
threat levels, our weaknesses, where we win, pricing objections, or the executive \
summary. Try asking \"What's the threat level?\"";

/// Built-in rules, in evaluation order.
///
/// The last two only catch phrasings the first six miss ("how many calls",
/// "pricing"), so they never change an answer the first six would give.
pub const RULES: &[Rule] = &[
    Rule {
        topic: Topic::CallVolume,
        trigger: Trigger::All(&[Trigger::Any(&["calls"]), Trigger::Any(&["total"])]),
        response: CALL_VOLUME_RESPONSE,
    },
    Rule {
        topic: Topic::ThreatLevels,
        trigger: Trigger::Any(&["threat", "concern"]),
        response: THREAT_RESPONSE,
    },
    Rule {
        topic: Topic::Weaknesses,
        trigger: Trigger::Any(&["weakness", "improve"]),
        response: WEAKNESS_RESPONSE,
    },
    Rule {
        topic: Topic::Strengths,
        trigger: Trigger::Any(&["win", "strength"]),
        response: STRENGTH_RESPONSE,
    },
    Rule {
        topic: Topic::Pricing,
        trigger: Trigger::Any(&["price", "cost"]),
        response: PRICING_RESPONSE,
    },
    Rule {
        topic: Topic::ExecutiveSummary,
        trigger: Trigger::Any(&["summary", "executive"]),
        response: SUMMARY_RESPONSE,
    },
    Rule {
        topic: Topic::CallVolume,
        trigger: Trigger::All(&[Trigger::Any(&["calls"]), Trigger::Any(&["how many"])]),
        response: CALL_VOLUME_RESPONSE,
    },
    Rule {
        topic: Topic::Pricing,
        trigger: Trigger::Any(&["pricing"]),
        response: PRICING_RESPONSE,
    },
];

// ---------------------------------------------------------------------------
// ResponseSelector
// ---------------------------------------------------------------------------

/// Maps a free-text query to exactly one canned response. Stateless.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector {
    rules: &'static [Rule],
    default_response: &'static str,
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self {
            rules: RULES,
            default_response: DEFAULT_RESPONSE,
        }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// The first rule whose trigger matches, if any.
    pub fn matching_rule(&self, query: &str) -> Option<&'static Rule> {
        let normalized = query.to_lowercase();
        self.rules.iter().find(|r| r.trigger.matches(&normalized))
    }

    pub fn classify(&self, query: &str) -> Topic {
        self.matching_rule(query).map_or(Topic::Help, |r| r.topic)
    }

    pub fn select(&self, query: &str) -> &'static str {
        self.matching_rule(query)
            .map_or(self.default_response, |r| r.response)
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
