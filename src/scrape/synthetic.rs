// src/scrape/synthetic.rs
//
// Fallback data: plausible fake posts for demos and tests.
// Not reproducible unless the caller passes a seeded RNG to `generate_with`.

use chrono::{Duration, NaiveTime};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::consts::{MAX_FOLLOWERS, MIN_FOLLOWERS};
use crate::model::{Candidate, DateRange, Record};

pub const TEMPLATES: &[&str] = &[
    "Es el mejor candidato para el país, tiene mi voto.",
    "No me convence su propuesta, es un desastre total.",
    "El debate de ayer estuvo interesante, aunque le faltó fuerza.",
    "Totalmente en contra de sus políticas corruptas.",
    "Vamos con toda por el cambio que necesitamos.",
    "Es más de lo mismo, no le creo nada.",
];

/// `count` records using the thread-local RNG.
pub fn generate(candidates: &[Candidate], range: &DateRange, count: usize) -> Vec<Record> {
    generate_with(&mut rand::thread_rng(), candidates, range, count)
}

/// `count` records drawn from `rng`:
/// uniform candidate, uniform day in `[start, end)` at midnight UTC,
/// uniform followers in `[MIN_FOLLOWERS, MAX_FOLLOWERS]`, template text + " (<candidate>)".
///
/// Returns nothing when there is no candidate or no day to draw from.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[Candidate],
    range: &DateRange,
    count: usize,
) -> Vec<Record> {
    let days = range.days();
    if candidates.is_empty() || days == 0 {
        logw!("Synthetic: nothing to draw from (candidates={}, days={})", candidates.len(), days);
        return Vec::new();
    }

    logf!("Synthetic: generating {} records", count);
    let midnight = range.start.and_time(NaiveTime::MIN).and_utc();

    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(cand) = candidates.choose(rng) else { break };
        let offset = rng.gen_range(0..days);
        let Some(template) = TEMPLATES.choose(rng) else { break };

        out.push(Record {
            timestamp: midnight + Duration::days(offset),
            raw_text: format!("{} ({})", template, cand),
            follower_count: rng.gen_range(MIN_FOLLOWERS..=MAX_FOLLOWERS),
            candidate: cand.clone(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn cands() -> Vec<Candidate> {
        vec![Candidate::new("A"), Candidate::new("B"), Candidate::new("C")]
    }

    #[test]
    fn exact_count_within_bounds() {
        let range = DateRange::default();
        let mut rng = StdRng::seed_from_u64(7);
        let recs = generate_with(&mut rng, &cands(), &range, 200);
        assert_eq!(recs.len(), 200);
        for r in &recs {
            assert!(cands().contains(&r.candidate));
            assert!(range.contains(r.timestamp.date_naive()));
            assert!((MIN_FOLLOWERS..=MAX_FOLLOWERS).contains(&r.follower_count));
            assert!(r.raw_text.ends_with(&format!("({})", r.candidate)));
        }
    }

    #[test]
    fn zero_count_and_no_candidates() {
        let range = DateRange::default();
        assert!(generate(&cands(), &range, 0).is_empty());
        assert!(generate(&[], &range, 10).is_empty());
    }
}
