//! Lexical matching of free-text queries against the knowledge catalog.
//!
//! An entry scores one point per query token that occurs anywhere in
//! its lowercased `title content tags` text (substring containment, not
//! whole-word matching). Entries are ordered by descending score with
//! ties kept in catalog order.

use crate::{
    config::MatcherConfig,
    knowledge::{KnowledgeEntry, KnowledgeStore},
};

/// A catalog entry paired with its match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a KnowledgeEntry,
    pub score: usize,
}

/// Split a query into lowercase tokens longer than `min_len` characters.
///
/// # Examples
///
/// ```
/// use admitbot::matcher::tokenize;
///
/// assert_eq!(tokenize("What is a GPA?", 2), vec!["what", "gpa?"]);
/// assert!(tokenize("an is to", 2).is_empty());
/// ```
pub fn tokenize(query: &str, min_len: usize) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > min_len)
        .map(str::to_string)
        .collect()
}

/// Score a single entry against pre-tokenized query terms.
pub fn score_entry(tokens: &[String], entry: &KnowledgeEntry) -> usize {
    let text = entry.searchable_text();
    tokens.iter().filter(|t| text.contains(t.as_str())).count()
}

/// Rank every entry that matches at least one query token.
///
/// The result is sorted by descending score. The sort is stable, so
/// equally scored entries keep their catalog order. An empty query, or
/// one made only of short tokens, yields an empty ranking.
pub fn rank<'a>(
    query: &str,
    entries: &'a [KnowledgeEntry],
    config: &MatcherConfig,
) -> Vec<ScoredEntry<'a>> {
    let tokens = tokenize(query, config.min_token_len);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<ScoredEntry<'a>> = entries
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score_entry(&tokens, entry),
        })
        .filter(|s| s.score > 0)
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        query,
        tokens = tokens.len(),
        matched = ranked.len(),
        "ranked knowledge entries"
    );

    ranked
}

/// Rank the store and keep the `top_n` best entries.
pub fn retrieve<'a>(
    query: &str,
    store: &'a KnowledgeStore,
    config: &MatcherConfig,
) -> Vec<&'a KnowledgeEntry> {
    rank(query, store.entries(), config)
        .into_iter()
        .take(config.top_n)
        .map(|s| s.entry)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Category;

    fn doc(id: &str, title: &str, content: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: Category::Support,
            tags: vec![],
            last_updated: String::new(),
        }
    }

    fn ids(ranked: &[ScoredEntry<'_>]) -> Vec<String> {
        ranked.iter().map(|s| s.entry.id.clone()).collect()
    }

    #[test]
    fn tokenize_drops_short_tokens() {
        assert_eq!(
            tokenize("  When is the FAFSA due ", 2),
            vec!["when", "the", "fafsa", "due"]
        );
        assert_eq!(tokenize("When is the FAFSA due", 3), vec!["when", "fafsa"]);
    }

    #[test]
    fn tokenize_counts_characters_not_bytes() {
        // Three characters, six bytes.
        assert_eq!(tokenize("été", 2), vec!["été"]);
        assert!(tokenize("ét", 2).is_empty());
    }

    #[test]
    fn empty_query_ranks_nothing() {
        let store = KnowledgeStore::builtin();
        let config = MatcherConfig::default();
        assert!(rank("", store.entries(), &config).is_empty());
        assert!(rank("   ", store.entries(), &config).is_empty());
    }

    #[test]
    fn short_tokens_behave_like_empty_query() {
        let store = KnowledgeStore::builtin();
        let config = MatcherConfig::default();
        assert!(rank("is a to of", store.entries(), &config).is_empty());
    }

    #[test]
    fn scores_count_tokens_by_substring_containment() {
        let entries = vec![
            doc("a", "Housing", "Residence halls and dorms"),
            doc("b", "Parking", "Permits for residents"),
        ];
        let config = MatcherConfig::default();

        // "resid" is a substring of both "residence" and "residents".
        let ranked = rank("dorms resid", &entries, &config);
        assert_eq!(ids(&ranked), vec!["a", "b"]);
        assert_eq!(ranked[0].score, 2);
        assert_eq!(ranked[1].score, 1);
    }

    #[test]
    fn repeated_tokens_count_each_time() {
        let entries = vec![doc("a", "Housing", "dorms")];
        let ranked = rank("dorms dorms", &entries, &MatcherConfig::default());
        assert_eq!(ranked[0].score, 2);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let entries = vec![
            doc("first", "Alpha", "shared term"),
            doc("second", "Beta", "shared term"),
            doc("third", "Gamma", "shared term and more"),
        ];
        let config = MatcherConfig::default();

        let ranked = rank("shared", &entries, &config);
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);

        let ranked = rank("shared more", &entries, &config);
        assert_eq!(ids(&ranked), vec!["third", "first", "second"]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let store = KnowledgeStore::builtin();
        let config = MatcherConfig::default();
        let query = "international application deadlines and fees";
        let a = rank(query, store.entries(), &config);
        let b = rank(query, store.entries(), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn scores_are_descending() {
        let store = KnowledgeStore::builtin();
        let ranked = rank(
            "graduate tuition scholarships deadline",
            store.entries(),
            &MatcherConfig::default(),
        );
        assert!(!ranked.is_empty());
        for window in ranked.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn title_words_rank_their_entry_first() {
        let store = KnowledgeStore::builtin();
        let config = MatcherConfig::default();

        for id in ["1", "3", "4", "5", "6"] {
            let entry = store.get(id).unwrap();
            let ranked = rank(&entry.title, store.entries(), &config);
            assert_eq!(
                ranked[0].entry.id, id,
                "title of entry {id} should rank it first"
            );
        }
    }

    #[test]
    fn title_words_always_tie_for_first() {
        // "Graduate Admission Requirements" also fully matches the
        // undergraduate entry, which wins the tie by catalog order.
        let store = KnowledgeStore::builtin();
        let config = MatcherConfig::default();

        for entry in store.entries() {
            let ranked = rank(&entry.title, store.entries(), &config);
            let own = ranked.iter().find(|s| s.entry.id == entry.id).unwrap();
            assert_eq!(own.score, ranked[0].score);
        }
    }

    #[test]
    fn retrieve_keeps_top_n() {
        let store = KnowledgeStore::builtin();
        let mut config = MatcherConfig::default();

        // "and" appears in four of the six built-in entries.
        let all = rank("and", store.entries(), &config);
        assert_eq!(all.len(), 4);

        assert_eq!(retrieve("and", &store, &config).len(), 3);
        config.top_n = 1;
        let top = retrieve("and", &store, &config);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, "1");
    }

    #[test]
    fn unrelated_query_retrieves_nothing() {
        let store = KnowledgeStore::builtin();
        let top = retrieve("asdkfj qwerty", &store, &MatcherConfig::default());
        assert!(top.is_empty());
    }
}
