//! Static lookup tables: enchantment display names and spawn eggs.

pub mod enchantment_names;
pub mod error;
pub mod spawn_egg;

pub use enchantment_names::{EnchantmentNames, EnchantmentResolver, LoadReport, VanillaEnchantments};
pub use error::LookupError;
pub use spawn_egg::SpawnEggTable;
