pub mod rules;

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::models::{MetadataRecord, PlatformScore, ScoreResult};
use rules::{evaluate, Rule, FACEBOOK_RULES, GOOGLE_RULES, TWITTER_RULES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Google,
}

impl Platform {
    pub fn rules(self) -> &'static [Rule] {
        match self {
            Platform::Twitter => TWITTER_RULES,
            Platform::Facebook => FACEBOOK_RULES,
            Platform::Google => GOOGLE_RULES,
        }
    }

    pub fn score(self, record: &MetadataRecord) -> PlatformScore {
        evaluate(self.rules(), record)
    }
}

/// Score `record` for every platform. Pure and infallible.
pub fn score(record: &MetadataRecord) -> ScoreResult {
    let twitter = Platform::Twitter.score(record);
    let facebook = Platform::Facebook.score(record);
    let google = Platform::Google.score(record);
    let overall = overall(&[twitter.score, facebook.score, google.score]);

    tracing::debug!(
        url = %record.url,
        twitter = twitter.score,
        facebook = facebook.score,
        google = google.score,
        overall,
        "Scored metadata"
    );

    ScoreResult {
        twitter,
        facebook,
        google,
        overall,
    }
}

/// Rounded mean of per-platform scores. Only meaningful while every platform
/// shares the same `maxScore`.
fn overall(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let total: u32 = scores.iter().sum();
    (f64::from(total) / scores.len() as f64).round() as u32
}

/// Names of all platforms, in scoring order.
pub fn platform_names() -> Vec<String> {
    Platform::iter().map(|p| p.to_string()).collect()
}
