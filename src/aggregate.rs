// src/aggregate.rs
//
// Pure aggregation over enriched records. BTreeMaps give the ordering the
// dashboard wants for free: candidates by name, time series by (date, candidate).

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{Candidate, EnrichedRecord, SentimentLabel};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// One point of the time series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub candidate: Candidate,
    pub total: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregates {
    /// Σ sentiment_value by candidate
    pub per_candidate: BTreeMap<Candidate, i64>,
    /// Σ sentiment_value by (date_bucket, candidate), date ascending
    pub per_date: BTreeMap<(NaiveDate, Candidate), i64>,
    /// label counts by candidate
    pub label_counts: BTreeMap<Candidate, LabelCounts>,
    /// Σ influence_score by candidate
    pub influence: BTreeMap<Candidate, f64>,
}

impl Aggregates {
    pub fn is_empty(&self) -> bool {
        self.per_candidate.is_empty()
    }

    /// Time series flattened in (date, candidate) order.
    pub fn time_series(&self) -> Vec<DatePoint> {
        self.per_date
            .iter()
            .map(|((date, candidate), total)| DatePoint {
                date: *date,
                candidate: candidate.clone(),
                total: *total,
            })
            .collect()
    }

    /// Label counts for one candidate; zeros if it never appeared.
    pub fn label_breakdown(&self, candidate: &Candidate) -> LabelCounts {
        self.label_counts.get(candidate).copied().unwrap_or_default()
    }

    pub fn grand_total(&self) -> i64 {
        self.per_candidate.values().sum()
    }
}

pub fn aggregate(records: &[EnrichedRecord]) -> Aggregates {
    let mut agg = Aggregates::default();
    for r in records {
        let cand = r.candidate();
        let v = i64::from(r.sentiment_value());

        *agg.per_candidate.entry(cand.clone()).or_default() += v;
        *agg.per_date.entry((r.date_bucket, cand.clone())).or_default() += v;
        agg.label_counts.entry(cand.clone()).or_default().add(r.sentiment_label);
        *agg.influence.entry(cand.clone()).or_default() += r.influence_score;
    }
    agg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use chrono::{TimeZone, Utc};

    fn enriched(cand: &str, day: u32, label: SentimentLabel) -> EnrichedRecord {
        let rec = Record {
            timestamp: Utc.with_ymd_and_hms(2025, 11, day, 12, 0, 0).unwrap(),
            raw_text: s!("t"),
            follower_count: 10,
            candidate: Candidate::new(cand),
        };
        EnrichedRecord::new(rec, s!("t"), label)
    }

    #[test]
    fn empty_input_gives_empty_groupings() {
        let agg = aggregate(&[]);
        assert!(agg.is_empty());
        assert!(agg.per_date.is_empty());
        assert!(agg.label_counts.is_empty());
        assert!(agg.time_series().is_empty());
        assert_eq!(agg.label_breakdown(&Candidate::new("X")), LabelCounts::default());
    }

    #[test]
    fn time_series_is_date_ordered() {
        use SentimentLabel::*;
        let recs = vec![
            enriched("B", 20, Positive),
            enriched("A", 18, Negative),
            enriched("A", 20, Positive),
            enriched("A", 20, Positive),
        ];
        let ts = aggregate(&recs).time_series();
        let got: Vec<(u32, &str, i64)> = ts
            .iter()
            .map(|p| (chrono::Datelike::day(&p.date), p.candidate.name(), p.total))
            .collect();
        assert_eq!(got, vec![(18, "A", -1), (20, "A", 2), (20, "B", 1)]);
    }
}
