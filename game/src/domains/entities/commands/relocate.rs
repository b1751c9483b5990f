use crate::entities::{EntitiesDomain, EntitiesError, EntityHandle, EntityKind, TileEvent};
use crate::tiles::{TilePosition, TilesDomain};

impl EntitiesDomain {
    /// Moves a creature or an item onto a populated tile. Owned items leave
    /// their container first.
    pub fn relocate(
        &mut self,
        tiles: &mut TilesDomain,
        handle: EntityHandle,
        destination: TilePosition,
    ) -> Result<Vec<TileEvent>, EntitiesError> {
        if !tiles.is_populated(destination) {
            return Err(EntitiesError::TileNotPopulated { position: destination });
        }
        let mut events = vec![];
        match handle.kind() {
            EntityKind::Player | EntityKind::Creature => {
                let origin = self.get_creature(handle)?.position;
                self.remove_from_tile(tiles, handle);
                events.push(TileEvent::Left {
                    entity: handle,
                    tile: origin,
                });
            }
            EntityKind::Item => {
                let item = self.get_item(handle)?;
                let (owner, origin) = (item.owner, item.position);
                match owner {
                    Some(_) => {
                        let owner = self.extract_from_owner(handle)?;
                        let paused = self.is_paused(owner);
                        self.get_item_mut(handle)?.paused = paused;
                    }
                    None => {
                        self.remove_from_tile(tiles, handle);
                        events.push(TileEvent::Left {
                            entity: handle,
                            tile: origin,
                        });
                    }
                }
            }
            _ => return Err(EntitiesError::CannotRelocate { handle }),
        }
        self.insert_on_tile(tiles, handle, destination);
        events.push(TileEvent::Entered {
            entity: handle,
            tile: destination,
        });
        Ok(events)
    }

    /// Moves an item lying on a floor into the container of the owner.
    pub fn relocate_into_container(
        &mut self,
        tiles: &mut TilesDomain,
        item: EntityHandle,
        owner: EntityHandle,
    ) -> Result<Vec<TileEvent>, EntitiesError> {
        let stored = self.get_item(item)?;
        if stored.owner.is_some() {
            return Err(EntitiesError::ItemAlreadyOwned { item });
        }
        if self.container(owner).is_none() {
            return Err(EntitiesError::NotAContainer { handle: owner });
        }
        let origin = stored.position;
        self.remove_from_tile(tiles, item);
        self.insert_into_container(item, owner)?;
        Ok(vec![TileEvent::Left {
            entity: item,
            tile: origin,
        }])
    }

    /// Moves an item from one container straight into another, no floor is touched.
    pub fn transfer_item(&mut self, item: EntityHandle, owner: EntityHandle) -> Result<(), EntitiesError> {
        if self.container(owner).is_none() {
            return Err(EntitiesError::NotAContainer { handle: owner });
        }
        self.extract_from_owner(item)?;
        self.insert_into_container(item, owner)
    }

    /// Puts an item into the inventory of the creature, either from a floor
    /// or out of a scene object container.
    pub fn pick_up_item(
        &mut self,
        tiles: &mut TilesDomain,
        creature: EntityHandle,
        item: EntityHandle,
    ) -> Result<Vec<TileEvent>, EntitiesError> {
        self.get_creature(creature)?;
        let current = self.get_item(item)?.owner;
        match current {
            None => self.relocate_into_container(tiles, item, creature),
            Some(owner) if owner.kind() == EntityKind::SceneObj => {
                self.transfer_item(item, creature)?;
                Ok(vec![])
            }
            Some(_) => Err(EntitiesError::ItemAlreadyOwned { item }),
        }
    }

    /// Drops a carried item onto the tile of the creature.
    pub fn drop_item(
        &mut self,
        tiles: &mut TilesDomain,
        creature: EntityHandle,
        item: EntityHandle,
    ) -> Result<Vec<TileEvent>, EntitiesError> {
        let position = self.get_creature(creature)?.position;
        if self.get_item(item)?.owner != Some(creature) {
            return Err(EntitiesError::ItemNotCarried { item });
        }
        self.relocate(tiles, item, position)
    }

    fn is_paused(&self, handle: EntityHandle) -> bool {
        match handle.kind() {
            EntityKind::SceneObj => self.scene_objs.get(&handle).map(|scene| scene.paused),
            EntityKind::Player | EntityKind::Creature => {
                self.creatures.get(&handle).map(|creature| creature.paused)
            }
            _ => None,
        }
        .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::{
        Creature, CreatureKey, CreatureKind, EntitiesDomain, EntitiesError, EntityHandle, EntityKind, Item,
        ItemKey, ItemKind, SceneObj, SceneObjKey, SceneObjKind, TileEvent, Wall, WallKey, WallKind,
        WallOrientation,
    };
    use crate::tiles::{AccessMask, Cell, Floor, TilePosition, TilesDomain};

    struct Given {
        tiles: TilesDomain,
        entities: EntitiesDomain,
        hero: EntityHandle,
        chest: EntityHandle,
        coin: EntityHandle,
    }

    fn given() -> Given {
        let mut tiles = TilesDomain::new(4, 4);
        for index in 0..16 {
            if index == 15 {
                continue;
            }
            let position = tiles.from_index(index);
            tiles
                .populate_cell(position, Cell::new(Floor::new("grass"), 0))
                .unwrap();
        }
        let mut entities = EntitiesDomain::default();
        let hero = EntityHandle::compose(EntityKind::Creature, 1);
        let chest = EntityHandle::compose(EntityKind::SceneObj, 1);
        let coin = EntityHandle::compose(EntityKind::Item, 1);
        let start = TilePosition::new(1, 1);
        entities.insert_creature(Creature::new(
            hero,
            &CreatureKind {
                id: CreatureKey(0),
                name: "hero".to_string(),
                sprite: "hero.png".to_string(),
                health: 10,
                obstacle: AccessMask::CLOSED,
            },
            start,
        ));
        entities.insert_scene_obj(SceneObj::new(
            chest,
            &SceneObjKind {
                id: SceneObjKey(0),
                name: "chest".to_string(),
                sprite: "chest.png".to_string(),
                obstacle: AccessMask::CLOSED,
                container: true,
            },
            start,
        ));
        entities.insert_item(Item::new(
            coin,
            &ItemKind {
                id: ItemKey(0),
                name: "coin".to_string(),
                sprite: "coin.png".to_string(),
            },
            start,
        ));
        entities.insert_on_tile(&mut tiles, hero, start);
        entities.insert_on_tile(&mut tiles, chest, TilePosition::new(2, 2));
        entities.insert_on_tile(&mut tiles, coin, start);
        Given {
            tiles,
            entities,
            hero,
            chest,
            coin,
        }
    }

    fn on_tile(tiles: &TilesDomain, position: TilePosition) -> Vec<EntityHandle> {
        tiles.get_cell(position).unwrap().entities.clone()
    }

    #[test]
    fn test_relocate_creature_fires_floor_events() {
        let Given {
            mut tiles,
            mut entities,
            hero,
            coin,
            ..
        } = given();
        let destination = TilePosition::new(3, 0);
        let events = entities.relocate(&mut tiles, hero, destination).unwrap();
        assert_eq!(
            events,
            vec![
                TileEvent::Left {
                    entity: hero,
                    tile: TilePosition::new(1, 1)
                },
                TileEvent::Entered {
                    entity: hero,
                    tile: destination
                },
            ]
        );
        assert_eq!(on_tile(&tiles, TilePosition::new(1, 1)), vec![coin]);
        assert_eq!(on_tile(&tiles, destination), vec![hero]);
        assert_eq!(entities.position_of(hero), Some(destination));
    }

    #[test]
    fn test_relocate_onto_void_is_declined() {
        let Given {
            mut tiles,
            mut entities,
            hero,
            ..
        } = given();
        let void = TilePosition::new(3, 3);
        assert_eq!(
            entities.relocate(&mut tiles, hero, void),
            Err(EntitiesError::TileNotPopulated { position: void })
        );
        assert_eq!(entities.position_of(hero), Some(TilePosition::new(1, 1)));
    }

    #[test]
    fn test_item_moves_through_container_and_back() {
        let Given {
            mut tiles,
            mut entities,
            chest,
            coin,
            ..
        } = given();
        let events = entities
            .relocate_into_container(&mut tiles, coin, chest)
            .unwrap();
        assert_eq!(events.len(), 1);
        assert!(!on_tile(&tiles, TilePosition::new(1, 1)).contains(&coin));
        assert_eq!(entities.get_item(coin).unwrap().owner, Some(chest));

        let destination = TilePosition::new(0, 2);
        let events = entities.relocate(&mut tiles, coin, destination).unwrap();
        assert_eq!(
            events,
            vec![TileEvent::Entered {
                entity: coin,
                tile: destination
            }]
        );
        let item = entities.get_item(coin).unwrap();
        assert_eq!(item.owner, None);
        assert!(!item.paused);
        assert!(entities.container(chest).unwrap().items.is_empty());
        assert_eq!(on_tile(&tiles, destination), vec![coin]);
    }

    #[test]
    fn test_relocate_into_non_container_is_declined() {
        let Given {
            mut tiles,
            mut entities,
            coin,
            ..
        } = given();
        let wall = EntityHandle::compose(EntityKind::Wall, 9);
        entities.insert_wall(Wall::new(
            wall,
            &WallKind {
                id: WallKey(0),
                name: "brick".to_string(),
                sprite: "brick.png".to_string(),
                orientation: WallOrientation::Front,
                obstacle: AccessMask::CLOSED,
            },
            TilePosition::new(0, 0),
        ));
        assert_eq!(
            entities.relocate_into_container(&mut tiles, coin, wall),
            Err(EntitiesError::NotAContainer { handle: wall })
        );
        assert_eq!(
            entities.relocate(&mut tiles, wall, TilePosition::new(1, 0)),
            Err(EntitiesError::CannotRelocate { handle: wall })
        );
        assert!(on_tile(&tiles, TilePosition::new(1, 1)).contains(&coin));
    }

    #[test]
    fn test_pick_up_from_chest_and_drop() {
        let Given {
            mut tiles,
            mut entities,
            hero,
            chest,
            coin,
        } = given();
        entities
            .relocate_into_container(&mut tiles, coin, chest)
            .unwrap();
        let events = entities.pick_up_item(&mut tiles, hero, coin).unwrap();
        assert!(events.is_empty());
        assert_eq!(entities.get_item(coin).unwrap().owner, Some(hero));
        assert!(entities.container(chest).unwrap().items.is_empty());

        entities.drop_item(&mut tiles, hero, coin).unwrap();
        assert_eq!(entities.get_item(coin).unwrap().owner, None);
        assert_eq!(on_tile(&tiles, TilePosition::new(1, 1)), vec![coin, hero]);
        assert_eq!(
            entities.drop_item(&mut tiles, hero, coin),
            Err(EntitiesError::ItemNotCarried { item: coin })
        );
    }
}
