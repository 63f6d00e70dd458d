use crate::seed::Seed;
use crate::tables::{PlanetType, FLORA_ATTEMPTS, MAX_FLORA_PER_PLANET};

/// Flora for one planet. Biomes without a flora table yield nothing.
pub fn generate_flora(seed: &Seed, planet_type: PlanetType) -> Vec<String> {
    let table = planet_type.flora();
    if table.is_empty() {
        return Vec::new();
    }

    let mut cursor = seed.cursor();
    let count = 1 + cursor.take(1, MAX_FLORA_PER_PLANET.min(table.len() as u64));
    let mut picks: Vec<usize> = Vec::with_capacity(count as usize);
    for draw in 0..count {
        let draw_seed = seed.child("draw", draw);
        let mut draw_cursor = draw_seed.cursor();
        let mut pick = 0;
        for _ in 0..FLORA_ATTEMPTS {
            pick = draw_cursor.take(2, table.len() as u64) as usize;
            if !picks.contains(&pick) {
                break;
            }
        }
        picks.push(pick);
    }

    let mut plants: Vec<String> = Vec::with_capacity(picks.len());
    for pick in picks {
        let name = table[pick];
        if !plants.iter().any(|existing| existing == name) {
            plants.push(name.to_string());
        }
    }
    plants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_biomes_are_terminal() {
        let seed = Seed::derive(&["gas".into()]);
        assert!(generate_flora(&seed, PlanetType::GasGiant).is_empty());
        assert!(generate_flora(&seed, PlanetType::Barren).is_empty());
    }

    #[test]
    fn no_duplicates_and_bounded_count() {
        for index in 0..300_u64 {
            let seed = Seed::derive(&["flora".into(), index.into()]);
            let plants = generate_flora(&seed, PlanetType::Jungle);
            assert!(!plants.is_empty());
            assert!(plants.len() as u64 <= MAX_FLORA_PER_PLANET);
            let mut sorted = plants.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), plants.len());
            assert!(plants.iter().all(|plant| PlanetType::Jungle.flora().contains(&plant.as_str())));
        }
    }
}
