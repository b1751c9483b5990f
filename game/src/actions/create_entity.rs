use crate::entities::{Creature, EntitiesError, EntityHandle, EntityKind, Item, SceneObj, Wall};
use crate::lighting::Light;
use crate::tiles::TilePosition;
use crate::Area;

impl Area {
    pub fn create_item(
        &mut self,
        profile: &str,
        position: TilePosition,
        tag: Option<&str>,
        light: Light,
    ) -> Result<EntityHandle, EntitiesError> {
        self.ensure_placeable(position)?;
        let kind = self.known.items.find(profile).map_err(|_| not_found(profile))?;
        let handle = self.entities.create_handle(EntityKind::Item);
        self.entities.insert_item(Item::new(handle, &kind, position));
        self.place_created(handle, position, tag, light);
        Ok(handle)
    }

    pub fn create_wall(
        &mut self,
        profile: &str,
        position: TilePosition,
        tag: Option<&str>,
        light: Light,
    ) -> Result<EntityHandle, EntitiesError> {
        self.ensure_placeable(position)?;
        let kind = self.known.walls.find(profile).map_err(|_| not_found(profile))?;
        let handle = self.entities.create_handle(EntityKind::Wall);
        self.entities.insert_wall(Wall::new(handle, &kind, position));
        self.place_created(handle, position, tag, light);
        Ok(handle)
    }

    pub fn create_scene_obj(
        &mut self,
        profile: &str,
        position: TilePosition,
        tag: Option<&str>,
        light: Light,
    ) -> Result<EntityHandle, EntitiesError> {
        self.ensure_placeable(position)?;
        let kind = self
            .known
            .scene_objs
            .find(profile)
            .map_err(|_| not_found(profile))?;
        let handle = self.entities.create_handle(EntityKind::SceneObj);
        self.entities
            .insert_scene_obj(SceneObj::new(handle, &kind, position));
        self.place_created(handle, position, tag, light);
        Ok(handle)
    }

    pub fn create_creature(
        &mut self,
        profile: &str,
        position: TilePosition,
        tag: Option<&str>,
        light: Light,
    ) -> Result<EntityHandle, EntitiesError> {
        self.ensure_placeable(position)?;
        let kind = self
            .known
            .creatures
            .find(profile)
            .map_err(|_| not_found(profile))?;
        let handle = self.entities.create_handle(EntityKind::Creature);
        self.entities
            .insert_creature(Creature::new(handle, &kind, position));
        self.place_created(handle, position, tag, light);
        Ok(handle)
    }

    fn ensure_placeable(&self, position: TilePosition) -> Result<(), EntitiesError> {
        if self.tiles.is_populated(position) {
            Ok(())
        } else {
            Err(EntitiesError::TileNotPopulated { position })
        }
    }

    fn place_created(&mut self, handle: EntityHandle, position: TilePosition, tag: Option<&str>, light: Light) {
        self.entities.insert_on_tile(&mut self.tiles, handle, position);
        if let Some(tag) = tag {
            self.tags.insert(tag, handle);
        }
        if light > 0 {
            self.lighting
                .set_light(handle, light, &self.tiles, &self.entities);
        }
    }
}

fn not_found(profile: &str) -> EntitiesError {
    EntitiesError::ProfileNotFound {
        name: profile.to_string(),
    }
}
