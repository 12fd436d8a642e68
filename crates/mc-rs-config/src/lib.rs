//! Config parsing helpers for plugins.
//!
//! Turns human-written configuration values (durations, item lists, potion
//! effects, areas, key/value tables) into typed values. Parsers collect
//! [`Diagnostic`]s instead of failing on bad entries.

pub mod area;
pub mod diagnostic;
pub mod duration;
pub mod error;
pub mod item_map;
pub mod key_value;
pub mod potion;
pub mod section;

pub use area::{parse_area, AreaDescriptor, AreaShape, BlockPos, KnownWorlds, WorldId, WorldResolver};
pub use diagnostic::{Diagnostic, Parsed, Severity};
pub use duration::{parse_duration, parse_duration_as_ticks, parse_duration_in, DurationUnit};
pub use error::ConfigError;
pub use item_map::{parse_item_map, ItemMap, ItemStack};
pub use key_value::parse_key_value_map;
pub use potion::{parse_potion_effects, EffectType, PotionEffectSpec};
pub use section::{ConfigSection, ConfigTree};
