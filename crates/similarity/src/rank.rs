//! Ranking helpers built on the similarity score.

use serde::Serialize;

use crate::levenshtein::similarity;

/// A candidate name scored against a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredName {
    /// The candidate exactly as supplied.
    pub name: String,
    /// Normalized similarity against the query, in `[0, 1]`.
    pub score: f64,
}

/// Score `names` against `query` and return the best candidates.
///
/// Candidates scoring below `min_score` are dropped. Survivors are ordered
/// by score descending and truncated to `limit`. Equal scores keep their
/// input order, so the earlier name wins; the result is fully deterministic.
pub fn rank_by_similarity<S>(
    query: &str,
    names: &[S],
    min_score: f64,
    limit: usize,
) -> Vec<ScoredName>
where
    S: AsRef<str>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredName> = names
        .iter()
        .map(AsRef::as_ref)
        .map(|name| ScoredName {
            name: name.to_string(),
            score: similarity(query, name),
        })
        .filter(|candidate| candidate.score >= min_score)
        .collect();

    // Scores are always finite, so total_cmp is a plain descending order and
    // the stable sort keeps input order on ties.
    scored.sort_by(|x, y| y.score.total_cmp(&x.score));
    scored.truncate(limit);
    scored
}

/// The single best candidate, if any clears `min_score`.
pub fn best_match<S>(query: &str, names: &[S], min_score: f64) -> Option<ScoredName>
where
    S: AsRef<str>,
{
    rank_by_similarity(query, names, min_score, 1).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_by_score_descending() {
        let names = ["coat", "cat", "hat"];
        let ranked = rank_by_similarity("hat", &names, 0.0, names.len());

        let order: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, ["hat", "cat", "coat"]);
        assert_eq!(ranked[0].score, 1.0);
        assert!((ranked[1].score - 2.0 / 3.0).abs() < 1e-12);
        assert!((ranked[2].score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rank_applies_min_score_inclusively() {
        let names = ["coat", "cat", "hat"];

        // similarity("hat", "coat") is exactly 0.5 and must survive.
        let ranked = rank_by_similarity("hat", &names, 0.5, names.len());
        assert_eq!(ranked.len(), 3);

        let ranked = rank_by_similarity("hat", &names, 0.6, names.len());
        let order: Vec<&str> = ranked.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, ["hat", "cat"]);
    }

    #[test]
    fn rank_truncates_to_limit() {
        let names = ["coat", "cat", "hat"];
        let ranked = rank_by_similarity("hat", &names, 0.0, 1);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "hat");
    }

    #[test]
    fn rank_with_zero_limit_is_empty() {
        let names = ["hat"];
        assert!(rank_by_similarity("hat", &names, 0.0, 0).is_empty());
    }

    #[test]
    fn rank_ties_keep_input_order() {
        // Both are one substitution away from the query.
        let names = ["mitten", "bitten"];
        let ranked = rank_by_similarity("kitten", &names, 0.0, names.len());

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "mitten");
        assert_eq!(ranked[1].name, "bitten");
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn best_match_returns_top_candidate() {
        let names = ["Blue Jacket", "Blue Jeans"];
        let best = best_match("Blue Jacke", &names, 0.5);

        let best = best.expect("a candidate should clear the threshold");
        assert_eq!(best.name, "Blue Jacket");
    }

    #[test]
    fn best_match_none_below_threshold() {
        let names = ["Blue Jacket"];
        assert!(best_match("xyz", &names, 0.9).is_none());
    }

    #[test]
    fn best_match_none_for_empty_names() {
        let names: [&str; 0] = [];
        assert!(best_match("hat", &names, 0.0).is_none());
    }

    #[test]
    fn scored_name_serializes_plainly() {
        let scored = ScoredName {
            name: "hat".to_string(),
            score: 1.0,
        };
        let json = serde_json::to_value(&scored).expect("serialize");
        assert_eq!(json["name"], "hat");
        assert_eq!(json["score"], 1.0);
    }
}
