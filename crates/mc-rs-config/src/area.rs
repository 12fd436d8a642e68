//! Area descriptors: a Y-limited world, or an ellipse / rectangle around a center.
//!
//! ```toml
//! [spawn_area]
//! type = "RECTANGLE"      # GLOBAL, ELLIPSE or RECTANGLE
//! world = "world"
//! lowerYBound = 0         # default 0
//! upperYBound = 128       # default 255
//! xSize = 50              # required for ELLIPSE / RECTANGLE
//! zSize = 50
//! [spawn_area.center]
//! x = 0
//! z = 0
//! ```

use std::collections::HashSet;

use crate::diagnostic::{Diagnostics, Parsed};
use crate::section::ConfigSection;

const DEFAULT_LOWER_Y: i32 = 0;
const DEFAULT_UPPER_Y: i32 = 255;
/// `xSize` / `zSize` value meaning "not configured".
const MISSING_SIZE: i32 = -1;

/// Handle of a world known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorldId(String);

impl WorldId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Resolves world names from config to worlds the host actually has loaded.
pub trait WorldResolver {
    fn resolve(&self, name: &str) -> Option<WorldId>;
}

impl<F> WorldResolver for F
where
    F: Fn(&str) -> Option<WorldId>,
{
    fn resolve(&self, name: &str) -> Option<WorldId> {
        self(name)
    }
}

/// A fixed set of world names.
#[derive(Debug, Clone, Default)]
pub struct KnownWorlds {
    names: HashSet<String>,
}

impl KnownWorlds {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl WorldResolver for KnownWorlds {
    fn resolve(&self, name: &str) -> Option<WorldId> {
        self.names.contains(name).then(|| WorldId::new(name))
    }
}

/// Integer block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Horizontal shape of an area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaShape {
    /// The whole world.
    Global,
    /// Ellipse with semi-axes `x_size` and `z_size` around `center`.
    Ellipse {
        center: BlockPos,
        x_size: u32,
        z_size: u32,
    },
    /// Axis-aligned rectangle reaching `x_size` / `z_size` blocks from `center`.
    Rectangle {
        center: BlockPos,
        x_size: u32,
        z_size: u32,
    },
}

/// A region of one world, bounded vertically by `lower_y..=upper_y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaDescriptor {
    pub world: WorldId,
    pub lower_y: i32,
    pub upper_y: i32,
    pub shape: AreaShape,
}

impl AreaDescriptor {
    pub fn center(&self) -> Option<BlockPos> {
        match self.shape {
            AreaShape::Global => None,
            AreaShape::Ellipse { center, .. } | AreaShape::Rectangle { center, .. } => {
                Some(center)
            }
        }
    }

    /// Whether a block of `world` lies inside this area.
    pub fn contains(&self, world: &WorldId, pos: BlockPos) -> bool {
        if *world != self.world || pos.y < self.lower_y || pos.y > self.upper_y {
            return false;
        }
        match self.shape {
            AreaShape::Global => true,
            AreaShape::Rectangle {
                center,
                x_size,
                z_size,
            } => {
                let dx = (i64::from(pos.x) - i64::from(center.x)).unsigned_abs();
                let dz = (i64::from(pos.z) - i64::from(center.z)).unsigned_abs();
                dx <= u64::from(x_size) && dz <= u64::from(z_size)
            }
            AreaShape::Ellipse {
                center,
                x_size,
                z_size,
            } => {
                let dx = f64::from(pos.x) - f64::from(center.x);
                let dz = f64::from(pos.z) - f64::from(center.z);
                axis_ratio_sq(dx, x_size) + axis_ratio_sq(dz, z_size) <= 1.0
            }
        }
    }
}

/// `(d / size)^2`, where a zero-size axis only admits `d == 0`.
fn axis_ratio_sq(d: f64, size: u32) -> f64 {
    if size == 0 {
        if d == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        (d / f64::from(size)).powi(2)
    }
}

/// Parse an area. Anything required that is missing or invalid is reported
/// and yields `None`; a partially built area is never returned.
pub fn parse_area(
    section: Option<&ConfigSection<'_>>,
    worlds: &impl WorldResolver,
) -> Parsed<Option<AreaDescriptor>> {
    let mut diags = Diagnostics::default();
    let area = section.and_then(|section| build_area(section, worlds, &mut diags));
    if section.is_none() {
        diags.warn("", "Tried to parse area on null section");
    }
    diags.finish(area)
}

fn build_area(
    config: &ConfigSection<'_>,
    worlds: &impl WorldResolver,
    diags: &mut Diagnostics,
) -> Option<AreaDescriptor> {
    let path = config.path();
    let Some(area_type) = config.get_string("type") else {
        diags.warn(path, "Found no area type");
        return None;
    };
    let lower_y = config.get_int("lowerYBound", DEFAULT_LOWER_Y);
    let upper_y = config.get_int("upperYBound", DEFAULT_UPPER_Y);

    let Some(world_name) = config.get_string("world") else {
        diags.warn(path, "Found no world specified for area");
        return None;
    };
    let Some(world) = worlds.resolve(world_name) else {
        diags.warn(path, format!("Found no world with name {world_name} as specified"));
        return None;
    };

    let center = config.section("center").map(|c| BlockPos {
        x: c.get_int("x", 0),
        y: c.get_int("y", 0),
        z: c.get_int("z", 0),
    });
    let x_size = config.get_int("xSize", MISSING_SIZE);
    let z_size = config.get_int("zSize", MISSING_SIZE);

    let shape = match area_type {
        "GLOBAL" => AreaShape::Global,
        "ELLIPSE" | "RECTANGLE" => {
            let Some(center) = center else {
                diags.warn(path, "Found no center for area");
                return None;
            };
            let x_size = required_size(x_size, "xSize", path, diags)?;
            let z_size = required_size(z_size, "zSize", path, diags)?;
            if area_type == "ELLIPSE" {
                AreaShape::Ellipse {
                    center,
                    x_size,
                    z_size,
                }
            } else {
                AreaShape::Rectangle {
                    center,
                    x_size,
                    z_size,
                }
            }
        }
        other => {
            diags.warn(path, format!("Invalid area type {other}"));
            return None;
        }
    };

    Some(AreaDescriptor {
        world,
        lower_y,
        upper_y,
        shape,
    })
}

fn required_size(value: i32, name: &str, path: &str, diags: &mut Diagnostics) -> Option<u32> {
    match value {
        MISSING_SIZE => {
            diags.warn(path, format!("Found no {name} for area"));
            None
        }
        v if v < 0 => {
            diags.warn(path, format!("Negative {name} {v} for area"));
            None
        }
        v => Some(v as u32),
    }
}
