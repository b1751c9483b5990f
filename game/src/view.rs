use crate::lighting::Light;

/// Light a tile is drawn with, per corner plus the area ambient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileLight {
    pub vertices: [Light; 4],
    pub ambient: Light,
}

impl TileLight {
    /// Corner intensities never darker than the ambient light.
    pub fn combined(&self) -> [Light; 4] {
        self.vertices.map(|vertex| vertex.max(self.ambient))
    }
}

/// Graphics backend, receives sprites in draw order.
pub trait Renderer {
    fn draw(&mut self, sprite: &str, screen: [f32; 2], light: TileLight);
}
