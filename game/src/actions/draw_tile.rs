use crate::api::AreaError;
use crate::entities::{EntitiesError, EntityHandle, EntityKind};
use crate::tiles::TilePosition;
use crate::view::Renderer;
use crate::Area;

impl Area {
    pub fn draw_floor(
        &self,
        renderer: &mut dyn Renderer,
        position: TilePosition,
        screen: [f32; 2],
    ) -> Result<(), AreaError> {
        let cell = self.tiles.get_cell(position)?;
        let kind = self.known.floors.find(&cell.floor.profile)?;
        renderer.draw(&kind.sprite, screen, self.tile_light(position));
        Ok(())
    }

    /// Everything standing on the floor, bottom to top.
    pub fn draw_on_floor(
        &self,
        renderer: &mut dyn Renderer,
        position: TilePosition,
        screen: [f32; 2],
    ) -> Result<(), AreaError> {
        let cell = self.tiles.get_cell(position)?;
        let light = self.tile_light(position);
        for handle in &cell.entities {
            let sprite = self.sprite_of(*handle)?;
            renderer.draw(&sprite, screen, light);
        }
        Ok(())
    }

    pub fn draw_roof(
        &self,
        renderer: &mut dyn Renderer,
        position: TilePosition,
        screen: [f32; 2],
    ) -> Result<(), AreaError> {
        let cell = self.tiles.get_cell(position)?;
        if let Some(handle) = cell.roof {
            if self.entities.get_roof(handle)?.visible {
                let sprite = self.sprite_of(handle)?;
                renderer.draw(&sprite, screen, self.tile_light(position));
            }
        }
        Ok(())
    }

    fn sprite_of(&self, handle: EntityHandle) -> Result<String, AreaError> {
        let profile = self
            .entities
            .profile_of(handle)
            .ok_or(EntitiesError::EntityNotFound { handle })?;
        let sprite = match handle.kind() {
            EntityKind::Wall => self.known.walls.find(profile)?.sprite.clone(),
            EntityKind::SceneObj => self.known.scene_objs.find(profile)?.sprite.clone(),
            EntityKind::Item => self.known.items.find(profile)?.sprite.clone(),
            EntityKind::Player | EntityKind::Creature => self.known.creatures.find(profile)?.sprite.clone(),
            EntityKind::Roof => self.known.roofs.find(profile)?.sprite.clone(),
        };
        Ok(sprite)
    }
}
