use fbpage_types::metrics::{Metric, Reaction};
use fbpage_types::models::{Insights, ReactionBreakdown};
use fbpage_types::schema::INSIGHTS_PERIOD_LIFETIME;

use super::PageControlPlane;
use crate::error::GraphError;
use crate::graph::GraphMethod;

impl PageControlPlane {
    /// Fetches lifetime values for `metrics` in a single insights call.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_insights(
        &self,
        post_id: &str,
        metrics: &[Metric],
    ) -> Result<Insights, GraphError> {
        let path = format!("{post_id}/insights");
        let request = self
            .request(GraphMethod::Get, &path)?
            .with_query("metric", Metric::join(metrics))
            .with_query("period", INSIGHTS_PERIOD_LIFETIME);
        self.send(request).await
    }

    /// Fetches one lifetime metric.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_metric(&self, post_id: &str, metric: Metric) -> Result<Insights, GraphError> {
        self.get_insights(post_id, &[metric]).await
    }

    /// Fetches every supported post metric in one call.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or the call fails.
    pub async fn get_post_insights(&self, post_id: &str) -> Result<Insights, GraphError> {
        self.get_insights(post_id, &Metric::ALL).await
    }

    /// Reads each reaction metric with its own call and merges the counts.
    ///
    /// Any failed read fails the whole breakdown.
    ///
    /// # Errors
    /// Returns `GraphError` if credentials are missing or any call fails.
    pub async fn get_post_reactions_breakdown(
        &self,
        post_id: &str,
    ) -> Result<ReactionBreakdown, GraphError> {
        let mut breakdown = ReactionBreakdown::default();
        for reaction in Reaction::ALL {
            let metric = reaction.metric();
            let insights = self.get_metric(post_id, metric).await?;
            breakdown.set(reaction, insights.count_for(metric));
        }
        Ok(breakdown)
    }
}

macro_rules! metric_reads {
    ($($(#[$doc:meta])* $name:ident => $metric:ident;)+) => {
        impl PageControlPlane {
            $(
                $(#[$doc])*
                ///
                /// # Errors
                /// Returns `GraphError` if credentials are missing or the call fails.
                pub async fn $name(&self, post_id: &str) -> Result<Insights, GraphError> {
                    self.get_metric(post_id, Metric::$metric).await
                }
            )+
        }
    };
}

metric_reads! {
    /// Total impressions of a post.
    get_post_impressions => PostImpressions;
    /// Unique impressions of a post.
    get_post_impressions_unique => PostImpressionsUnique;
    /// Paid impressions of a post.
    get_post_impressions_paid => PostImpressionsPaid;
    /// Organic impressions of a post.
    get_post_impressions_organic => PostImpressionsOrganic;
    /// Users who engaged with a post.
    get_post_engaged_users => PostEngagedUsers;
    /// Clicks on a post.
    get_post_clicks => PostClicks;
    /// "Like" reactions on a post.
    get_post_reactions_like_total => PostReactionsLikeTotal;
    /// "Love" reactions on a post.
    get_post_reactions_love_total => PostReactionsLoveTotal;
    /// "Wow" reactions on a post.
    get_post_reactions_wow_total => PostReactionsWowTotal;
    /// "Haha" reactions on a post.
    get_post_reactions_haha_total => PostReactionsHahaTotal;
    /// "Sorry" reactions on a post.
    get_post_reactions_sorry_total => PostReactionsSorryTotal;
    /// "Anger" reactions on a post.
    get_post_reactions_anger_total => PostReactionsAngerTotal;
}
