//! Company deduplication
//!
//! Records are keyed on the exact (company_name, website) pair. The first
//! occurrence of a key survives and relative order is preserved. No case or
//! whitespace folding is applied to key values.

use std::collections::HashSet;
use shared::NormalizedRecord;

/// Tracks seen company keys and drops repeat records
#[derive(Debug, Default)]
pub struct Deduplicator {
    /// Exact set of (company_name, website) keys seen so far
    seen_keys: HashSet<(String, String)>,

    stats: DedupStats,
}

/// Statistics about a deduplication pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupStats {
    pub total_processed: u64,
    pub unique_found: u64,
    pub duplicates_dropped: u64,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all seen keys and statistics
    pub fn reset(&mut self) {
        self.seen_keys.clear();
        self.stats = DedupStats::default();
    }

    /// Keep the first occurrence of each company key, in input order
    pub fn filter_unique(&mut self, records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
        let mut unique = Vec::with_capacity(records.len());

        for record in records {
            self.stats.total_processed += 1;

            let (name, website) = record.dedup_key();
            let key = (name.to_string(), website.to_string());
            if self.seen_keys.insert(key) {
                self.stats.unique_found += 1;
                unique.push(record);
            } else {
                self.stats.duplicates_dropped += 1;
            }
        }

        unique
    }

    pub fn get_stats(&self) -> &DedupStats {
        &self.stats
    }
}

/// Deduplicate a batch with a fresh deduplicator
pub fn remove_duplicates(records: Vec<NormalizedRecord>) -> Vec<NormalizedRecord> {
    Deduplicator::new().filter_unique(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, website: &str) -> NormalizedRecord {
        NormalizedRecord {
            company_name: name.to_string(),
            website: website.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let records = vec![
            company("Company A", "http://companya.com"),
            company("Company A", "http://companya.com"),
            company("Company B", "http://companyb.com"),
        ];

        let unique = remove_duplicates(records);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].company_name, "Company A");
        assert_eq!(unique[1].company_name, "Company B");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut first = company("A", "x");
        first.description = "first".to_string();
        let mut second = company("A", "x");
        second.description = "second".to_string();

        let unique = remove_duplicates(vec![first, second]);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].description, "first");
    }

    #[test]
    fn test_key_comparison_is_case_sensitive() {
        let records = vec![
            company("Acme", "http://acme.com"),
            company("Acme", "http://ACME.com"),
            company("acme", "http://acme.com"),
        ];
        assert_eq!(remove_duplicates(records).len(), 3);
    }

    #[test]
    fn test_same_name_different_site_kept() {
        let records = vec![company("A", "x"), company("A", "y"), company("B", "x")];
        assert_eq!(remove_duplicates(records).len(), 3);
    }

    #[test]
    fn test_order_preserved_and_idempotent() {
        let records = vec![
            company("C", "3"),
            company("A", "1"),
            company("C", "3"),
            company("B", "2"),
            company("A", "1"),
        ];

        let once = remove_duplicates(records);
        let names: Vec<_> = once.iter().map(|r| r.company_name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);

        let twice = remove_duplicates(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(remove_duplicates(Vec::new()).is_empty());
    }

    #[test]
    fn test_stats_and_reset() {
        let mut dedup = Deduplicator::new();
        let unique = dedup.filter_unique(vec![company("A", "x"), company("A", "x"), company("B", "y")]);
        assert_eq!(unique.len(), 2);
        assert_eq!(
            dedup.get_stats(),
            &DedupStats { total_processed: 3, unique_found: 2, duplicates_dropped: 1 }
        );

        dedup.reset();
        assert_eq!(dedup.get_stats(), &DedupStats::default());
        // keys are forgotten too
        assert_eq!(dedup.filter_unique(vec![company("B", "y")]).len(), 1);
    }

    #[test]
    fn test_state_spans_batches() {
        let mut dedup = Deduplicator::new();
        dedup.filter_unique(vec![company("A", "x")]);
        let second = dedup.filter_unique(vec![company("A", "x"), company("D", "z")]);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].company_name, "D");
    }
}
