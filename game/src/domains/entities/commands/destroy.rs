use crate::entities::{EntitiesDomain, EntitiesError, EntityHandle, EntityKind, TileEvent};
use crate::tiles::TilesDomain;

impl EntitiesDomain {
    /// Removes the entity from the map and forgets it. Contents of containers
    /// and creatures are spilled onto the tile the owner stood on.
    pub fn destroy(&mut self, tiles: &mut TilesDomain, handle: EntityHandle) -> Result<Vec<TileEvent>, EntitiesError> {
        let mut events = vec![];
        match handle.kind() {
            EntityKind::Wall => {
                self.get_wall(handle)?;
                self.remove_from_tile(tiles, handle);
                self.walls.remove(&handle);
            }
            EntityKind::SceneObj => {
                let scene = self.get_scene_obj(handle)?;
                let position = scene.position;
                let contents = scene
                    .container
                    .as_ref()
                    .map(|container| container.items.clone())
                    .unwrap_or_default();
                for item in contents {
                    events.extend(self.relocate(tiles, item, position)?);
                }
                self.remove_from_tile(tiles, handle);
                self.scene_objs.remove(&handle);
            }
            EntityKind::Player | EntityKind::Creature => {
                let creature = self.get_creature(handle)?;
                let position = creature.position;
                let worn: Vec<usize> = creature
                    .equipment
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_some())
                    .map(|(slot, _)| slot)
                    .collect();
                for slot in worn {
                    self.unequip_item(handle, slot)?;
                }
                let inventory = self.get_creature(handle)?.inventory.items.clone();
                for item in inventory {
                    events.extend(self.relocate(tiles, item, position)?);
                }
                self.remove_from_tile(tiles, handle);
                self.creatures.remove(&handle);
            }
            EntityKind::Item => {
                let owner = self.get_item(handle)?.owner;
                match owner {
                    Some(_) => {
                        self.extract_from_owner(handle)?;
                    }
                    None => self.remove_from_tile(tiles, handle),
                }
                self.items.remove(&handle);
            }
            EntityKind::Roof => {
                self.get_roof(handle)?;
                self.remove_from_tile(tiles, handle);
                self.roofs.remove(&handle);
            }
        }
        Ok(events)
    }
}
