use std::fmt;

use serde::{Deserialize, Serialize};

/// Post insight metrics exposed by the Graph API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    PostImpressions,
    PostImpressionsUnique,
    PostImpressionsPaid,
    PostImpressionsOrganic,
    PostEngagedUsers,
    PostClicks,
    PostReactionsLikeTotal,
    PostReactionsLoveTotal,
    PostReactionsWowTotal,
    PostReactionsHahaTotal,
    PostReactionsSorryTotal,
    PostReactionsAngerTotal,
}

impl Metric {
    /// Every metric requested by the combined insights read.
    pub const ALL: [Self; 12] = [
        Self::PostImpressions,
        Self::PostImpressionsUnique,
        Self::PostImpressionsPaid,
        Self::PostImpressionsOrganic,
        Self::PostEngagedUsers,
        Self::PostClicks,
        Self::PostReactionsLikeTotal,
        Self::PostReactionsLoveTotal,
        Self::PostReactionsWowTotal,
        Self::PostReactionsHahaTotal,
        Self::PostReactionsSorryTotal,
        Self::PostReactionsAngerTotal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostImpressions => "post_impressions",
            Self::PostImpressionsUnique => "post_impressions_unique",
            Self::PostImpressionsPaid => "post_impressions_paid",
            Self::PostImpressionsOrganic => "post_impressions_organic",
            Self::PostEngagedUsers => "post_engaged_users",
            Self::PostClicks => "post_clicks",
            Self::PostReactionsLikeTotal => "post_reactions_like_total",
            Self::PostReactionsLoveTotal => "post_reactions_love_total",
            Self::PostReactionsWowTotal => "post_reactions_wow_total",
            Self::PostReactionsHahaTotal => "post_reactions_haha_total",
            Self::PostReactionsSorryTotal => "post_reactions_sorry_total",
            Self::PostReactionsAngerTotal => "post_reactions_anger_total",
        }
    }

    /// Comma-joined metric names, as the insights edge expects them.
    #[must_use]
    pub fn join(metrics: &[Self]) -> String {
        metrics
            .iter()
            .map(|metric| metric.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction types reported by the post reaction metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Like,
    Love,
    Wow,
    Haha,
    Sorry,
    Anger,
}

impl Reaction {
    pub const ALL: [Self; 6] = [
        Self::Like,
        Self::Love,
        Self::Wow,
        Self::Haha,
        Self::Sorry,
        Self::Anger,
    ];

    #[must_use]
    pub const fn metric(self) -> Metric {
        match self {
            Self::Like => Metric::PostReactionsLikeTotal,
            Self::Love => Metric::PostReactionsLoveTotal,
            Self::Wow => Metric::PostReactionsWowTotal,
            Self::Haha => Metric::PostReactionsHahaTotal,
            Self::Sorry => Metric::PostReactionsSorryTotal,
            Self::Anger => Metric::PostReactionsAngerTotal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Wow => "wow",
            Self::Haha => "haha",
            Self::Sorry => "sorry",
            Self::Anger => "anger",
        }
    }
}
