use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::carousel::{TextItem, TransitionStyle};

pub const DEFAULT_COLUMN_COUNT: usize = 3;
pub const DEFAULT_CYCLE_DURATION_MS: u32 = 4000;
pub const DEFAULT_STAGGER_MS: u32 = 800;
pub const DEFAULT_TRANSITION_MS: u32 = 500;

pub const CONTACT_EMAIL: &str = "hello@feim.fi";

const fn item(id: u32, text: &'static str) -> TextItem {
    TextItem {
        id,
        text: Cow::Borrowed(text),
    }
}

pub const DEFAULT_POOL: &[TextItem] = &[
    item(1, "Kasvu odottaa sinua"),
    item(2, "Seuraava asiakkaamme"),
    item(3, "Tekoäly yrityksellesi"),
    item(4, "Sivut jotka myyvät"),
    item(5, "Digitaalinen kasvu"),
    item(6, "Web-sovellus ideallesi"),
    item(7, "Automaatio liiketoimintaasi"),
    item(8, "Tuloksia, ei lupauksia"),
    item(9, "Ideasta toteutukseen"),
    item(10, "Moderni digitaalinen kumppani"),
];

/// How columns decide when to move to their next item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TimingModel {
    /// Every column runs its own timer, delayed by `column * stagger_ms`.
    IndependentTimers,
    /// One clock ticks every `tick_ms`; each column derives its index from it.
    SharedClock { tick_ms: u32 },
}

impl Default for TimingModel {
    fn default() -> Self {
        TimingModel::IndependentTimers
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub column_count: usize,
    pub cycle_duration_ms: u32,
    pub stagger_ms: u32,
    pub timing: TimingModel,
    pub transition: TransitionStyle,
    pub transition_ms: u32,
    pub pool: Vec<TextItem>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            cycle_duration_ms: DEFAULT_CYCLE_DURATION_MS,
            stagger_ms: DEFAULT_STAGGER_MS,
            timing: TimingModel::default(),
            transition: TransitionStyle::default(),
            transition_ms: DEFAULT_TRANSITION_MS,
            pool: DEFAULT_POOL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("carousel needs at least one column")]
    ZeroColumns,
    #[error("cycle duration must be positive")]
    ZeroCycleDuration,
    #[error("shared clock tick must be positive")]
    ZeroTick,
    #[error("cycle duration {cycle_ms} ms and stagger {stagger_ms} ms must be multiples of the {tick_ms} ms clock tick")]
    TickGranularity {
        tick_ms: u32,
        cycle_ms: u32,
        stagger_ms: u32,
    },
    #[error("columns {distance} apart would change at the same instant (stagger {stagger_ms} ms, cycle {cycle_ms} ms)")]
    StaggerCollision {
        distance: usize,
        stagger_ms: u32,
        cycle_ms: u32,
    },
    #[error("text item id {0} is used more than once")]
    DuplicateItemId(u32),
    #[error("text item {0} has no text")]
    EmptyItemText(u32),
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_count == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.cycle_duration_ms == 0 {
            return Err(ConfigError::ZeroCycleDuration);
        }

        if let TimingModel::SharedClock { tick_ms } = self.timing {
            if tick_ms == 0 {
                return Err(ConfigError::ZeroTick);
            }
            if self.cycle_duration_ms % tick_ms != 0 || self.stagger_ms % tick_ms != 0 {
                return Err(ConfigError::TickGranularity {
                    tick_ms,
                    cycle_ms: self.cycle_duration_ms,
                    stagger_ms: self.stagger_ms,
                });
            }
        }

        // Column c flips at c*S + k*T. Two columns d apart coincide iff d*S is a multiple of T.
        let cycle = u64::from(self.cycle_duration_ms);
        for distance in 1..self.column_count {
            if (distance as u64 * u64::from(self.stagger_ms)) % cycle == 0 {
                return Err(ConfigError::StaggerCollision {
                    distance,
                    stagger_ms: self.stagger_ms,
                    cycle_ms: self.cycle_duration_ms,
                });
            }
        }

        let mut seen = HashSet::with_capacity(self.pool.len());
        for item in &self.pool {
            if !seen.insert(item.id) {
                return Err(ConfigError::DuplicateItemId(item.id));
            }
            if item.text.trim().is_empty() {
                return Err(ConfigError::EmptyItemText(item.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CarouselConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.pool.len(), 10);
    }

    #[test]
    fn rejects_zero_columns() {
        let config = CarouselConfig {
            column_count: 0,
            ..CarouselConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroColumns));
    }

    #[test]
    fn rejects_zero_cycle_duration() {
        let config = CarouselConfig {
            cycle_duration_ms: 0,
            ..CarouselConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroCycleDuration));
    }

    #[test]
    fn rejects_unstaggered_columns() {
        let config = CarouselConfig {
            stagger_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StaggerCollision { distance: 1, .. })
        ));

        let single = CarouselConfig {
            column_count: 1,
            stagger_ms: 0,
            ..CarouselConfig::default()
        };
        assert_eq!(single.validate(), Ok(()));
    }

    #[test]
    fn rejects_stagger_that_lines_up_two_columns_apart() {
        let config = CarouselConfig {
            cycle_duration_ms: 1600,
            stagger_ms: 800,
            ..CarouselConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::StaggerCollision {
                distance: 2,
                stagger_ms: 800,
                cycle_ms: 1600,
            })
        );
    }

    #[test]
    fn rejects_duplicate_ids_and_blank_text() {
        let mut config = CarouselConfig::default();
        config.pool.push(item(3, "Toinen kolmonen"));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateItemId(3)));

        let mut config = CarouselConfig::default();
        config.pool.push(item(11, "   "));
        assert_eq!(config.validate(), Err(ConfigError::EmptyItemText(11)));
    }

    #[test]
    fn shared_clock_needs_matching_granularity() {
        let config = CarouselConfig {
            timing: TimingModel::SharedClock { tick_ms: 0 },
            ..CarouselConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));

        let config = CarouselConfig {
            timing: TimingModel::SharedClock { tick_ms: 300 },
            ..CarouselConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TickGranularity { tick_ms: 300, .. })
        ));

        let config = CarouselConfig {
            timing: TimingModel::SharedClock { tick_ms: 100 },
            ..CarouselConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_pool_is_allowed() {
        let config = CarouselConfig {
            pool: Vec::new(),
            ..CarouselConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn pool_can_be_read_from_json() {
        let config: CarouselConfig = serde_json::from_str(
            r#"{"column_count": 2, "pool": [{"id": 1, "text": "Yksi"}, {"id": 2, "text": "Kaksi"}]}"#,
        )
        .unwrap();
        assert_eq!(config.column_count, 2);
        assert_eq!(config.cycle_duration_ms, DEFAULT_CYCLE_DURATION_MS);
        assert_eq!(config.pool[1].text, "Kaksi");
        assert_eq!(config.validate(), Ok(()));
    }
}
