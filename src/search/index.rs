//! In-memory name / id filter over aggregated records

use crate::pokemon::PokemonRecord;

/// Check a single record against a query.
///
/// Names match case-insensitively; ids match as a literal substring.
pub fn matches(record: &PokemonRecord, query: &str) -> bool {
    matches_lowered(record, query, &query.to_lowercase())
}

/// `matches` with the query already lowercased for name comparison
fn matches_lowered(record: &PokemonRecord, query: &str, lowered: &str) -> bool {
    record.name.to_lowercase().contains(lowered) || record.id.contains(query)
}

/// Return the records matching `query`, preserving input order.
///
/// A blank query returns every record.
pub fn filter(records: &[PokemonRecord], query: &str) -> Vec<PokemonRecord> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_lowered(r, query, &needle))
        .cloned()
        .collect()
}

/// A record sequence plus the last query applied to it
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<PokemonRecord>,
    query: String,
}

impl SearchIndex {
    pub fn new(records: Vec<PokemonRecord>) -> Self {
        Self {
            records,
            query: String::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    /// Records matching the current query
    pub fn results(&self) -> Vec<&PokemonRecord> {
        if self.query.trim().is_empty() {
            return self.records.iter().collect();
        }
        let needle = self.query.to_lowercase();
        self.records
            .iter()
            .filter(|r| matches_lowered(r, &self.query, &needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::display_id;

    fn record(number: u32, name: &str) -> PokemonRecord {
        PokemonRecord {
            id: display_id(number),
            number,
            name: name.to_string(),
            front_image_url: None,
            back_image_url: None,
            types: vec![],
            height_meters: "0.0".to_string(),
            weight_kilograms: "0.0".to_string(),
            base_stats: vec![],
            abilities: vec![],
            moves: vec![],
        }
    }

    fn starters() -> Vec<PokemonRecord> {
        vec![
            record(1, "Bulbasaur"),
            record(4, "Charmander"),
            record(7, "Squirtle"),
            record(10, "Caterpie"),
            record(100, "Voltorb"),
        ]
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let records = starters();
        assert_eq!(filter(&records, ""), records);
        assert_eq!(filter(&records, "   "), records);
    }

    #[test]
    fn test_name_match_ignores_case() {
        let bulbasaur = vec![record(1, "Bulbasaur")];
        assert_eq!(filter(&bulbasaur, "bulba"), bulbasaur);
        assert_eq!(filter(&bulbasaur, "BULBA"), bulbasaur);
        assert_eq!(filter(&bulbasaur, "001"), bulbasaur);
        assert!(filter(&bulbasaur, "999").is_empty());
    }

    #[test]
    fn test_id_match_keeps_order() {
        let names: Vec<String> = filter(&starters(), "10")
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Caterpie", "Voltorb"]);
    }

    #[test]
    fn test_hash_matches_every_id() {
        assert_eq!(filter(&starters(), "#").len(), 5);
    }

    #[test]
    fn test_query_longer_than_any_name() {
        assert!(filter(&starters(), "charmanderchar").is_empty());
    }

    #[test]
    fn test_empty_records() {
        assert!(filter(&[], "pika").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn test_unicode_case_folding() {
        let records = vec![record(29, "Nidoran♀"), record(669, "Flabébé")];
        assert_eq!(filter(&records, "FLABÉBÉ").len(), 1);
        assert_eq!(filter(&records, "nidoran♀").len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = starters();
        for query in ["", "a", "CHAR", "#0", "1", "zzz"] {
            let once = filter(&records, query);
            assert_eq!(filter(&once, query), once, "query {:?}", query);
        }
    }

    #[test]
    fn test_filter_agrees_with_matches() {
        let records = starters();
        for query in ["a", "CHAR", "#0", "10", "Volt", "zzz"] {
            let expected: Vec<PokemonRecord> = records
                .iter()
                .filter(|r| matches(r, query))
                .cloned()
                .collect();
            assert_eq!(filter(&records, query), expected, "query {:?}", query);

            let mut index = SearchIndex::new(records.clone());
            index.set_query(query);
            let indexed: Vec<PokemonRecord> = index.results().into_iter().cloned().collect();
            assert_eq!(indexed, expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_search_index_tracks_last_query() {
        let mut index = SearchIndex::new(starters());
        assert_eq!(index.len(), 5);
        assert_eq!(index.results().len(), 5);

        index.set_query("squirt");
        assert_eq!(index.query(), "squirt");
        let results = index.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "#007");

        index.set_query("");
        assert_eq!(index.results().len(), index.records().len());
    }
}
