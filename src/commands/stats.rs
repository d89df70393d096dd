//! Learned-model inspection and reset

use crate::core::Letter;
use crate::game::LearningBridge;
use crate::model::LearnedModel;
use crate::persistence::FrequencyStore;

/// Summary of what has been learned so far
pub struct StatsResult {
    pub games: usize,
    pub last_word: Option<String>,
    pub total_counts: u64,
    /// Top letters per position, for every position with any count
    pub positions: Vec<(usize, Vec<(Letter, u32)>)>,
}

#[must_use]
pub fn collect_stats(model: &LearnedModel, top: usize) -> StatsResult {
    let positions = (0..model.table.positions())
        .filter_map(|position| {
            let ranked: Vec<(Letter, u32)> =
                model.table.ranked_at(position).into_iter().take(top).collect();
            (!ranked.is_empty()).then_some((position, ranked))
        })
        .collect();

    StatsResult {
        games: model.history.len(),
        last_word: model.history.last().map(str::to_string),
        total_counts: model.table.total(),
        positions,
    }
}

/// Forget everything learned, in memory and in the store
///
/// Returns the number of stored games that were removed.
///
/// # Errors
///
/// Returns an error if the store cannot be read or cleared.
pub fn reset_learning<St: FrequencyStore>(
    bridge: &mut LearningBridge<St>,
    model: &mut LearnedModel,
) -> Result<usize, String> {
    let removed = bridge
        .store()
        .records()
        .map_err(|e| format!("Could not read learned data: {e}"))?
        .len();
    bridge
        .clear()
        .map_err(|e| format!("Could not clear learned data: {e}"))?;
    *model = LearnedModel::default();
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn stats_of_empty_model() {
        let stats = collect_stats(&LearnedModel::default(), 3);
        assert_eq!(stats.games, 0);
        assert_eq!(stats.last_word, None);
        assert_eq!(stats.total_counts, 0);
        assert!(stats.positions.is_empty());
    }

    #[test]
    fn stats_after_games() {
        let mut bridge = LearningBridge::new(MemoryStore::new());
        let mut model = LearnedModel::default();
        bridge.complete_game(&mut model, "casa");
        bridge.complete_game(&mut model, "cama");

        let stats = collect_stats(&model, 2);
        assert_eq!(stats.games, 2);
        assert_eq!(stats.last_word.as_deref(), Some("cama"));
        assert_eq!(stats.total_counts, 8);
        assert_eq!(stats.positions.len(), 4);

        let (position, ranked) = &stats.positions[0];
        assert_eq!(*position, 0);
        assert_eq!(ranked[0], (Letter::new('c').unwrap(), 2));

        // Position 2 has a tie broken alphabetically
        let (_, ranked) = &stats.positions[2];
        assert_eq!(ranked[0].0, Letter::new('m').unwrap());
        assert_eq!(ranked[1].0, Letter::new('s').unwrap());
    }

    #[test]
    fn reset_clears_store_and_model() {
        let mut bridge = LearningBridge::new(MemoryStore::new());
        let mut model = LearnedModel::default();
        bridge.complete_game(&mut model, "rio");

        let removed = reset_learning(&mut bridge, &mut model).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(model, LearnedModel::default());
        assert_eq!(bridge.rehydrate(), LearnedModel::default());
    }
}
