//! Render and pick contract between the scene model and whatever draws it.

use serde::{Deserialize, Serialize};

use crate::domain::{Axis, Dimensions, HighlightClass, LogicalIndex, RegionId, SelectionState, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Axis-aligned box: `origin` is the minimum corner, `extents` the edge lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub zone: Zone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    pub origin: Vec3,
    pub extents: Vec3,
    pub highlight: HighlightClass,
}

impl Cuboid {
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.origin.x + self.extents.x * 0.5,
            self.origin.y + self.extents.y * 0.5,
            self.origin.z + self.extents.z * 0.5,
        )
    }

    /// The eight corners, bit 0 selecting +x, bit 1 +y, bit 2 +z.
    pub fn corners(&self) -> [Vec3; 8] {
        let o = self.origin;
        let e = self.extents;
        std::array::from_fn(|bits| {
            Vec3::new(
                if bits & 1 != 0 { o.x + e.x } else { o.x },
                if bits & 2 != 0 { o.y + e.y } else { o.y },
                if bits & 4 != 0 { o.z + e.z } else { o.z },
            )
        })
    }

    pub fn is_active(&self) -> bool {
        self.highlight.is_active()
    }
}

/// Invisible, pointer-targetable anchor for one result cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickRegion {
    pub id: RegionId,
    pub index: LogicalIndex,
    pub anchor: Vec3,
}

/// Region id to result cell lookup for one rendered frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PickRegistry {
    regions: Vec<PickRegion>,
}

impl PickRegistry {
    /// Regions are kept sorted by id so lookups can binary search.
    pub fn from_regions(mut regions: Vec<PickRegion>) -> Self {
        regions.sort_by_key(|region| region.id);
        regions.dedup_by_key(|region| region.id);
        Self { regions }
    }

    pub fn resolve(&self, id: RegionId) -> Option<LogicalIndex> {
        self.get(id).map(|region| region.index)
    }

    pub fn get(&self, id: RegionId) -> Option<&PickRegion> {
        self.regions
            .binary_search_by_key(&id, |region| region.id)
            .ok()
            .map(|pos| &self.regions[pos])
    }

    pub fn region_for(&self, index: LogicalIndex) -> Option<RegionId> {
        self.regions
            .iter()
            .find(|region| region.index == index)
            .map(|region| region.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PickRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelEmphasis {
    Normal,
    Dimmed,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum LabelKind {
    Cell(Zone),
    AxisCaption(Axis),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub kind: LabelKind,
    pub text: String,
    pub anchor: Vec3,
    pub emphasis: LabelEmphasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SceneBounds {
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Length of the box diagonal.
    pub fn diagonal(&self) -> f32 {
        let dx = self.max.x - self.min.x;
        let dy = self.max.y - self.min.y;
        let dz = self.max.z - self.min.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Everything a renderer needs to draw one frame and route clicks back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub dims: Dimensions,
    pub selection: SelectionState,
    pub title: String,
    pub subtitle: String,
    pub cuboids: Vec<Cuboid>,
    pub pick_registry: PickRegistry,
    pub labels: Vec<Label>,
    pub bounds: SceneBounds,
}

impl RenderFrame {
    pub fn zone(&self, zone: Zone) -> impl Iterator<Item = &Cuboid> {
        self.cuboids.iter().filter(move |cuboid| cuboid.zone == zone)
    }

    pub fn active(&self) -> impl Iterator<Item = &Cuboid> {
        self.cuboids.iter().filter(|cuboid| cuboid.is_active())
    }
}
