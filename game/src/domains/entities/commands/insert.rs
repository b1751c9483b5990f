use crate::entities::{
    Creature, EntitiesDomain, EntityHandle, EntityKind, Item, Roof, SceneObj, Wall,
};
use crate::tiles::{TilePosition, TilesDomain};

impl EntitiesDomain {
    pub fn insert_wall(&mut self, wall: Wall) {
        debug_assert_eq!(wall.handle.kind(), EntityKind::Wall);
        self.walls.insert(wall.handle, wall);
    }

    pub fn insert_scene_obj(&mut self, scene: SceneObj) {
        debug_assert_eq!(scene.handle.kind(), EntityKind::SceneObj);
        self.scene_objs.insert(scene.handle, scene);
    }

    pub fn insert_item(&mut self, item: Item) {
        debug_assert_eq!(item.handle.kind(), EntityKind::Item);
        self.items.insert(item.handle, item);
    }

    pub fn insert_creature(&mut self, creature: Creature) {
        debug_assert!(creature.handle.kind().is_creature());
        self.creatures.insert(creature.handle, creature);
    }

    pub fn insert_roof(&mut self, roof: Roof) {
        debug_assert_eq!(roof.handle.kind(), EntityKind::Roof);
        self.roofs.insert(roof.handle, roof);
    }

    /// Places the entity on a populated tile keeping the tile list sorted by
    /// kind, does nothing on void tiles.
    pub fn insert_on_tile(&mut self, tiles: &mut TilesDomain, handle: EntityHandle, position: TilePosition) {
        let cell = match tiles.get_cell_mut(position) {
            Ok(cell) => cell,
            Err(_) => return,
        };
        if handle.kind() == EntityKind::Roof {
            cell.roof = Some(handle);
        } else {
            insert_sorted(&mut cell.entities, handle);
        }
        self.visuals.remove(&handle);
        self.set_position(handle, position);
    }

    fn set_position(&mut self, handle: EntityHandle, position: TilePosition) {
        match handle.kind() {
            EntityKind::Wall => {
                if let Some(wall) = self.walls.get_mut(&handle) {
                    wall.position = position;
                }
            }
            EntityKind::SceneObj => {
                if let Some(scene) = self.scene_objs.get_mut(&handle) {
                    scene.position = position;
                }
            }
            EntityKind::Item => {
                if let Some(item) = self.items.get_mut(&handle) {
                    item.position = position;
                }
            }
            EntityKind::Player | EntityKind::Creature => {
                if let Some(creature) = self.creatures.get_mut(&handle) {
                    creature.position = position;
                }
            }
            EntityKind::Roof => {
                if let Some(roof) = self.roofs.get_mut(&handle) {
                    roof.position = position;
                }
            }
        }
    }
}

pub(crate) fn insert_sorted(entities: &mut Vec<EntityHandle>, handle: EntityHandle) {
    let kind = handle.kind();
    let index = entities.partition_point(|other| other.kind() <= kind);
    entities.insert(index, handle);
}
