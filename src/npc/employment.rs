use serde::{Deserialize, Serialize};

use crate::seed::{pick_weighted, Seed};
use crate::tables::{
    chaos_band, OutcomeCategory, EMPLOYER_MIDDLES, EMPLOYER_PREFIXES, EMPLOYER_SUFFIXES,
    GAP_CHANCE_PERCENT, GAP_CHAOS_THRESHOLD, GAP_EMPLOYER, OUTCOME_BY_BAND, TENURE_BY_BAND,
};

/// One line of an employment history. Gaps carry no outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub employer_name: String,
    pub duration_months: u32,
    pub outcome: Option<String>,
    pub outcome_category: Option<OutcomeCategory>,
}

impl JobRecord {
    pub fn is_gap(&self) -> bool {
        self.outcome.is_none()
    }
}

/// Narrates `job_count` past jobs in generation order, most recent last.
pub fn narrate_history(npc_seed: &Seed, job_count: u64, chaos_factor: u8) -> Vec<JobRecord> {
    let band = chaos_band(chaos_factor);
    let (min_months, max_months) = TENURE_BY_BAND[band];
    let outcome_table = &OUTCOME_BY_BAND[band];
    let mut history = Vec::with_capacity(job_count as usize + 2);

    for index in 0..job_count {
        let seed = npc_seed.child("job", index);
        let mut cursor = seed.cursor();

        if chaos_factor >= GAP_CHAOS_THRESHOLD {
            let gap_roll = cursor.percent();
            let gap_months = cursor.range(1, 1, 24) as u32;
            if gap_roll < GAP_CHANCE_PERCENT {
                history.push(JobRecord {
                    employer_name: GAP_EMPLOYER.to_string(),
                    duration_months: gap_months,
                    outcome: None,
                    outcome_category: None,
                });
            }
        }

        let duration_months = cursor.range(1, min_months, max_months) as u32;
        let category =
            pick_weighted(cursor.percent(), outcome_table).unwrap_or(OutcomeCategory::Clean);
        let phrases = category.phrases();
        let phrase = phrases[cursor.take(1, phrases.len() as u64) as usize];
        let employer = format!(
            "{} {} {}",
            EMPLOYER_PREFIXES[cursor.take(1, EMPLOYER_PREFIXES.len() as u64) as usize],
            EMPLOYER_MIDDLES[cursor.take(1, EMPLOYER_MIDDLES.len() as u64) as usize],
            EMPLOYER_SUFFIXES[cursor.take(1, EMPLOYER_SUFFIXES.len() as u64) as usize],
        );

        history.push(JobRecord {
            employer_name: employer,
            duration_months,
            outcome: Some(phrase.to_string()),
            outcome_category: Some(category),
        });
    }
    history
}
