use rand::Rng;
use serde::{Deserialize, Serialize};

use super::environment::derive_environment;
use crate::catalog::ParkRecord;
use crate::config::ScoringWeights;

/// Inputs for one ranking request, built fresh from the prompt box and the
/// currently selected facet chips. The active activity chip is threaded
/// through here rather than read from shared state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringContext {
    pub prompt: String,
    pub season: Option<String>,
    pub mood: Option<String>,
    pub activity: Option<String>,
}

/// Signals permitted to contribute points to a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSignal {
    PromptToken,
    SeasonFocus,
    Mood,
    Activity,
}

/// Discrete contribution to a park's score, kept so callers can explain why
/// a pick surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub signal: ScoreSignal,
    pub points: i16,
    pub notes: String,
}

/// One ranked result. `score` is the summed component points plus a uniform
/// jitter in `[0, 1)`, so it always lies in `[base, base + 1)`.
#[derive(Debug, Clone)]
pub struct RankedPark<'a> {
    pub park: &'a ParkRecord,
    pub score: f32,
    pub components: Vec<ScoreComponent>,
}

impl RankedPark<'_> {
    /// Sum of the component points, without the jitter.
    pub fn base_points(&self) -> i16 {
        self.components
            .iter()
            .map(|component| component.points)
            .sum()
    }
}

pub(crate) fn score_park(
    park: &ParkRecord,
    context: &ScoringContext,
    weights: &ScoringWeights,
) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let mut total: i16 = 0;
    let haystack = park.search_text();

    for token in context.prompt.split_whitespace() {
        let token = token.to_lowercase();
        if haystack.contains(&token) {
            components.push(ScoreComponent {
                signal: ScoreSignal::PromptToken,
                points: weights.token_match,
                notes: format!("prompt token '{token}' found"),
            });
            total += weights.token_match;
        }
    }

    if let Some(season) = &context.season {
        if park.has_season(season) {
            components.push(ScoreComponent {
                signal: ScoreSignal::SeasonFocus,
                points: weights.season_match,
                notes: format!("park peaks in {season}"),
            });
            total += weights.season_match;
        }
    }

    if let Some(mood) = &context.mood {
        let mood = mood.to_lowercase();
        let environment = derive_environment(park).label().to_lowercase();
        // At most one mood bonus even when both the facet and the
        // description match.
        if environment.contains(&mood) || park.description.to_lowercase().contains(&mood) {
            components.push(ScoreComponent {
                signal: ScoreSignal::Mood,
                points: weights.mood_match,
                notes: format!("mood '{mood}' fits"),
            });
            total += weights.mood_match;
        }
    }

    if let Some(activity) = &context.activity {
        if park.offers_activity(activity) {
            components.push(ScoreComponent {
                signal: ScoreSignal::Activity,
                points: weights.activity_match,
                notes: format!("offers {activity}"),
            });
            total += weights.activity_match;
        }
    }

    (components, total)
}

/// Rank the catalog against a prompt and facet context, returning the top
/// `top_n` picks in descending score order.
///
/// Each score carries a uniform random jitter in `[0, 1)` drawn from `rng`,
/// so near-tied parks rotate between calls. Tests pin a seeded generator;
/// production callers pass `rand::thread_rng()`.
pub fn rank_catalog<'a, R: Rng + ?Sized>(
    records: &'a [ParkRecord],
    context: &ScoringContext,
    weights: &ScoringWeights,
    rng: &mut R,
    top_n: usize,
) -> Vec<RankedPark<'a>> {
    let mut ranked: Vec<RankedPark<'a>> = records
        .iter()
        .map(|park| {
            let (components, base) = score_park(park, context, weights);
            let score = base as f32 + rng.gen::<f32>();
            RankedPark {
                park,
                score,
                components,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_n);

    tracing::debug!(
        candidates = records.len(),
        returned = ranked.len(),
        "ranking pass complete"
    );

    ranked
}
