use std::collections::HashSet;

use log::{info, warn};
use rand::seq::IteratorRandom;
use rand::thread_rng;

use crate::api::AreaError;
use crate::entities::{Creature, EntityHandle, EntityKind};
use crate::lighting::Light;
use crate::tiles::TilePosition;
use crate::{Area, AreaId};

impl Area {
    /// Starts a new game, every previously visited area is forgotten.
    pub fn start_game(
        &mut self,
        id: AreaId,
        player_profile: &str,
        position: TilePosition,
    ) -> Result<EntityHandle, AreaError> {
        info!("Start game in area {} as {:?}", id, player_profile);
        self.clear_temp_files()?;
        self.free_area(&HashSet::new());
        self.player = None;
        self.load_area(id)?;
        let position = self.arrival_tile(id, position)?;
        let kind = self.known.creatures.find(player_profile)?;
        let handle = self.entities.create_handle(EntityKind::Player);
        self.entities.insert_creature(Creature::new(handle, &kind, position));
        self.entities.insert_on_tile(&mut self.tiles, handle, position);
        self.player = Some(handle);
        Ok(handle)
    }

    /// Moves the player with everything they carry into another area. The
    /// area being left is saved into its temp file first.
    pub fn change_area(&mut self, id: AreaId, position: TilePosition) -> Result<(), AreaError> {
        if self.id == Some(id) {
            return Ok(());
        }
        let player = self.player.ok_or(AreaError::PlayerNotFound)?;
        self.entities.get_creature(player)?;
        info!("Begin change area {:?} -> {}", self.id, id);

        let mut lights: Vec<(EntityHandle, Light)> = vec![];
        let mut keep = HashSet::from([player]);
        for handle in std::iter::once(player).chain(self.entities.carried_items(player)) {
            keep.insert(handle);
            let light = self.lighting.focus_intensity(handle);
            if light > 0 {
                lights.push((handle, light));
            }
        }
        for (handle, _) in &lights {
            self.lighting
                .set_light(*handle, 0, &self.tiles, &self.entities);
        }

        if self.is_loaded() {
            self.entities.remove_from_tile(&mut self.tiles, player);
            self.save_area_info(true)?;
        }
        self.free_area(&keep);
        self.load_area(id)?;
        let position = self.arrival_tile(id, position)?;
        self.entities.insert_on_tile(&mut self.tiles, player, position);
        for (handle, light) in lights {
            self.lighting
                .set_light(handle, light, &self.tiles, &self.entities);
        }
        info!("End change area {}, player at {:?}", id, position);
        Ok(())
    }

    /// Requested tile when populated, a random populated one otherwise.
    pub(crate) fn arrival_tile(&self, id: AreaId, requested: TilePosition) -> Result<TilePosition, AreaError> {
        if self.tiles.is_populated(requested) {
            return Ok(requested);
        }
        let substitute = self
            .tiles
            .populated_positions()
            .choose(&mut thread_rng())
            .ok_or(AreaError::NoPopulatedTile { area: id })?;
        warn!(
            "Tile {:?} of area {} is not populated, player placed at {:?}",
            requested, id, substitute
        );
        Ok(substitute)
    }
}
