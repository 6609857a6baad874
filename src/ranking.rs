//! Fuzzy ranking of bookmarks against the search query.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;

/// Similarity between the query and a candidate, from `0.0` to `100.0`.
///
/// This is the normalized indel distance ratio, so it rewards candidates
/// whose length is close to the query as well as shared characters.
pub fn score(query: &str, candidate: &str) -> f64 {
    rapidfuzz::fuzz::ratio(query.chars(), candidate.chars()) * 100.0
}

/// Returns every bookmark ordered by descending [`score`] against `query`.
///
/// The sort is stable, so equal scores keep the order of `bookmarks`.
/// Nothing is filtered out.
pub fn rank_bookmarks(query: &str, bookmarks: &[String]) -> Vec<String> {
    bookmarks
        .iter()
        .map(|bookmark| (score(query, bookmark), bookmark))
        .sorted_by(|(s1, _), (s2, _)| s2.total_cmp(s1))
        .map(|(_, bookmark)| bookmark.clone())
        .collect()
}

/// Character positions in `candidate` that match `query` as a subsequence.
///
/// Used for highlighting only; ranking does not depend on it. Returns an
/// empty list when the query is empty or does not match.
pub fn match_indices(query: &str, candidate: &str) -> Vec<usize> {
    if query.is_empty() {
        return vec![];
    }

    SkimMatcherV2::default()
        .fuzzy_indices(candidate, query)
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}
