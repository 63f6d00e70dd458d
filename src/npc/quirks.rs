use crate::seed::{pick_weighted, Seed};
use crate::tables::{chaos_band, Polarity, Race, QUIRK_ATTEMPTS, QUIRK_POLARITY_BY_BAND};

/// Rolls `count` quirks whose polarity leans with the chaos band, then
/// makes sure the race's required trait is among them.
pub fn roll_quirks(npc_seed: &Seed, count: u64, chaos_factor: u8, race: Race) -> Vec<String> {
    let polarity_table = &QUIRK_POLARITY_BY_BAND[chaos_band(chaos_factor)];
    let mut quirks: Vec<String> = Vec::with_capacity(count as usize + 1);

    for index in 0..count {
        let seed = npc_seed.child("quirk", index);
        let mut cursor = seed.cursor();
        let polarity = pick_weighted(cursor.percent(), polarity_table).unwrap_or(Polarity::Neutral);
        let bank = polarity.bank();
        // Gives up on the slot once every attempt hits a duplicate.
        for _ in 0..QUIRK_ATTEMPTS {
            let candidate = bank[cursor.take(2, bank.len() as u64) as usize];
            if !quirks.iter().any(|quirk| quirk == candidate) {
                quirks.push(candidate.to_string());
                break;
            }
        }
    }

    let required = race.profile().required_trait;
    if !quirks.iter().any(|quirk| quirk == required) {
        quirks.push(required.to_string());
    }
    quirks
}
