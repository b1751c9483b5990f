use std::collections::HashMap;

use crate::entities::EntityHandle;
use crate::tiles::{TileIndex, TilePosition};

pub type Light = u8;

/// Linear falloff, a focus reaches exactly as far as its intensity.
#[inline]
pub fn falloff(intensity: Light, distance: f32) -> Light {
    (intensity as f32 - distance).max(0.0) as Light
}

/// Light of one tile corner: the brightest contribution is cached, every
/// contribution is kept to recompute it when a focus goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLight {
    pub intensity: Light,
    pub contributions: HashMap<EntityHandle, Light>,
}

impl VertexLight {
    /// Replaces the contribution of the focus, zero erases it.
    pub fn apply(&mut self, focus: EntityHandle, value: Light) {
        let previous = if value > 0 {
            self.contributions.insert(focus, value)
        } else {
            self.contributions.remove(&focus)
        }
        .unwrap_or(0);
        if value >= self.intensity {
            self.intensity = value;
        } else if previous == self.intensity {
            self.intensity = self.contributions.values().copied().max().unwrap_or(0);
        }
    }

    #[inline]
    pub fn erase(&mut self, focus: EntityHandle) {
        self.apply(focus, 0);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLightInfo {
    /// World position of the top left corner.
    pub origin: [f32; 2],
    pub vertices: [VertexLight; 4],
}

impl TileLightInfo {
    pub fn new(origin: [f32; 2]) -> Self {
        Self {
            origin,
            vertices: Default::default(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.vertices.iter().all(|vertex| vertex.intensity == 0)
    }

    pub fn intensities(&self) -> [Light; 4] {
        [
            self.vertices[0].intensity,
            self.vertices[1].intensity,
            self.vertices[2].intensity,
            self.vertices[3].intensity,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightFocus {
    pub intensity: Light,
    /// Tile the contributions were last computed from.
    pub position: TilePosition,
}

#[derive(Default)]
pub struct LightingDomain {
    pub foci: HashMap<EntityHandle, LightFocus>,
    pub tiles: HashMap<TileIndex, TileLightInfo>,
    pub ambient: Light,
}
