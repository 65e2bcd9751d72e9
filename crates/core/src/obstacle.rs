//! Obstacle resolver - materializes pending penalty blocks before a turn
//!
//! The judge drops one full row of obstacle blocks whenever a player's
//! pending obstacle count reaches the field width. Each column receives at
//! most one obstacle per call, landing in that column's lowest empty cell.

use crate::field::Field;
use crate::types::GameConfig;

/// Return `field` with pending obstacles dropped.
///
/// - `obstacle_count < width`: an unchanged copy.
/// - otherwise: every column gets one `config.obstacle_block()` in its lowest
///   empty cell. A full column is skipped.
///
/// The input field is never modified.
pub fn fall_obstacle(field: &Field, obstacle_count: u32, config: &GameConfig) -> Field {
    let mut after = field.clone();
    if (obstacle_count as usize) < field.width() {
        return after;
    }

    let obstacle = config.obstacle_block();
    for x in 0..after.width() {
        if let Some(y) = after.lowest_empty(x) {
            after.set(x, y, obstacle);
        }
    }
    after
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EMPTY_BLOCK;

    fn config_for(width: usize, height: usize) -> GameConfig {
        GameConfig {
            width,
            height,
            pack_size: 1,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_below_threshold_is_unchanged_copy() {
        let config = config_for(3, 1);
        let field = Field::from_visible(&config, &[1, 0, 2]).unwrap();
        let after = fall_obstacle(&field, 2, &config);
        assert_eq!(after, field);
    }

    #[test]
    fn test_threshold_drops_one_per_column() {
        let config = config_for(3, 1);
        let field = Field::from_visible(&config, &[1, 0, 2]).unwrap();
        let after = fall_obstacle(&field, 3, &config);

        let obstacle = config.obstacle_block();
        // Hidden rows: 2; visible row is y = 2.
        assert_eq!(after.get(0, 1), Some(obstacle));
        assert_eq!(after.get(1, 2), Some(obstacle));
        assert_eq!(after.get(2, 1), Some(obstacle));
        assert_eq!(after.count(obstacle), 3);

        // Source untouched
        assert_eq!(field.count(obstacle), 0);
        assert_eq!(field.get(1, 2), Some(EMPTY_BLOCK));
    }

    #[test]
    fn test_large_count_still_drops_single_row() {
        let config = config_for(2, 1);
        let field = Field::empty(&config);
        let after = fall_obstacle(&field, 100, &config);
        assert_eq!(after.count(config.obstacle_block()), 2);
    }

    #[test]
    fn test_full_column_is_skipped() {
        let config = config_for(2, 1);
        let field = Field::from_rows(&[[5, 0], [5, 0], [5, 3]]).unwrap();
        let after = fall_obstacle(&field, 2, &config);
        assert_eq!(after.get(0, 0), Some(5));
        assert_eq!(after.get(1, 1), Some(config.obstacle_block()));
        assert_eq!(after.count(config.obstacle_block()), 1);
    }
}
