//! Ranking of best per-player scores.

use std::collections::HashMap;

use serde::Serialize;

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_LIMIT: u64 = 10;

/// One leaderboard entry joined with whatever names the player has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub player_id: i64,
    pub score: i32,
    pub username: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedScore {
    pub rank: u32,
    pub player: String,
    pub score: i32,
}

/// Best (lowest) score per player, ascending, ties broken by player id,
/// truncated to `limit`, ranked by position starting at 1.
pub fn rank_best_scores(rows: impl IntoIterator<Item = ScoreRow>, limit: u64) -> Vec<RankedScore> {
    let mut best: HashMap<i64, ScoreRow> = HashMap::new();
    for row in rows {
        match best.get(&row.player_id) {
            Some(existing) if existing.score <= row.score => {}
            _ => {
                best.insert(row.player_id, row);
            }
        }
    }

    let mut ordered: Vec<ScoreRow> = best.into_values().collect();
    ordered.sort_by_key(|r| (r.score, r.player_id));

    ordered
        .into_iter()
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, row)| {
            let rank = i as u32 + 1;
            RankedScore {
                rank,
                player: display_label(&row, rank),
                score: row.score,
            }
        })
        .collect()
}

/// username, then full name, then a positional placeholder.
fn display_label(row: &ScoreRow, rank: u32) -> String {
    row.username
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| row.full_name.as_deref().filter(|s| !s.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Player {rank}"))
}
