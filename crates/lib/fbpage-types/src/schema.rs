pub const POST_FIELDS: &str = "id,message,created_time";
pub const COMMENT_FIELDS: &str = "id,message,from,created_time";
pub const LIKES_SUMMARY_FIELDS: &str = "likes.summary(true)";
pub const SHARES_FIELDS: &str = "shares";
pub const FAN_COUNT_FIELDS: &str = "fan_count";

pub const INSIGHTS_PERIOD_LIFETIME: &str = "lifetime";

pub const MESSAGING_TYPE_RESPONSE: &str = "RESPONSE";
pub const MESSAGES_ENDPOINT: &str = "me/messages";

/// Keywords flagged by the negative-comment filter.
pub const NEGATIVE_KEYWORDS: [&str; 7] = [
    "bad",
    "terrible",
    "awful",
    "hate",
    "dislike",
    "problem",
    "issue",
];
