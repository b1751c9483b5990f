use std::path::Path;

use log::{debug, error, info};

use crate::api::AreaError;
use crate::entities::{Creature, EntityHandle, EntityKind, Item, Roof, SceneObj, Wall};
use crate::persistence::{
    read_dump, BinaryReader, CreatureDump, FileHeader, FileType, Flavor, ItemDump, RoofDump, SceneObjDump,
    WallDump, SECTION_CREATURES, SECTION_FLOOR, SECTION_ROOF, SECTION_SCENE_OBJS, SECTION_WALLS,
};
use crate::rooms::{RoomId, RoomsDomain};
use crate::tiles::{AccessMask, Cell, Floor, TilePosition, TilesDomain};
use crate::{Area, AreaId};

/// Where a loaded item goes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Placement {
    Tile(TilePosition),
    Container(EntityHandle),
    Slot(EntityHandle, usize),
}

pub(crate) fn expect_header(
    reader: &mut BinaryReader,
    file_type: FileType,
    area: AreaId,
    path: &Path,
) -> Result<(), AreaError> {
    let header = FileHeader::read(reader).map_err(|_| AreaError::Corrupted {
        path: path.to_path_buf(),
        reason: "truncated header".to_string(),
    })?;
    if let Some(reason) = header.mismatch(file_type, area) {
        error!("Area file {:?} is corrupted, {}", path, reason);
        return Err(AreaError::Corrupted {
            path: path.to_path_buf(),
            reason,
        });
    }
    debug!(
        "Area file {:?} version {}.{}",
        path, header.version[0], header.version[1]
    );
    Ok(())
}

impl Area {
    /// Builds the area from its base file, or from its temp file when the
    /// area was visited and saved before.
    pub fn load_area(&mut self, id: AreaId) -> Result<(), AreaError> {
        debug_assert!(self.id.is_none(), "area {:?} is still loaded", self.id);
        info!("Begin area {} loading", id);
        let base_path = self.config.area_path(id);
        let base = self.read_file(&base_path)?;
        let mut reader = BinaryReader::new(&base);
        expect_header(&mut reader, FileType::Area, id, &base_path)?;
        self.name = reader.read_string()?;
        let width = reader.read_u16()?;
        let height = reader.read_u16()?;
        let ambient = reader.read_u8()?;
        let rooms = reader.read_u8()?;
        self.tiles = TilesDomain::new(width, height);
        self.rooms = RoomsDomain::new(rooms);
        self.lighting.tiles.clear();
        self.lighting.ambient = ambient;

        let temp_path = self.config.temp_path(id);
        let temp = if self.fs.exists(&temp_path) {
            Some(self.read_file(&temp_path)?)
        } else {
            None
        };
        let result = match &temp {
            Some(bytes) => {
                let mut reader = BinaryReader::new(bytes);
                expect_header(&mut reader, FileType::TempArea, id, &temp_path)?;
                self.load_tiles(&mut reader, Flavor::Temp)
            }
            None => self.load_tiles(&mut reader, Flavor::Base),
        };
        if let Err(error) = result {
            error!("Unable to load area {}, {:?}", id, error);
            return Err(error);
        }
        if temp.is_some() {
            self.rooms.sync_roof_flags(&self.tiles, &self.entities);
        }
        self.id = Some(id);
        self.from_temp = temp.is_some();
        info!(
            "End area {} \"{}\" loading, {}x{} tiles, {} entities, from temp {}",
            id,
            self.name,
            width,
            height,
            self.entities.len(),
            self.from_temp
        );
        Ok(())
    }

    fn load_tiles(&mut self, reader: &mut BinaryReader, flavor: Flavor) -> Result<(), AreaError> {
        for y in 0..self.tiles.height {
            for x in 0..self.tiles.width {
                let position = TilePosition::new(x, y);
                let sections = reader.read_u8()?;
                if sections & SECTION_FLOOR == 0 {
                    continue;
                }
                let floor = match flavor {
                    Flavor::Base => {
                        let profile = reader.read_string()?;
                        Floor::new(&self.known.floors.find(&profile)?.name)
                    }
                    Flavor::Temp => read_dump(reader)?,
                };
                let mut flags = [false; 8];
                for flag in flags.iter_mut() {
                    *flag = reader.read_bool()?;
                }
                let elevation = reader.read_u8()?;
                self.tiles.populate_cell(position, Cell::new(floor, elevation))?;
                self.tiles
                    .set_floor_access(position, AccessMask::from_flags(flags));
                let items = reader.read_u16()?;
                for _ in 0..items {
                    self.load_item(reader, flavor, Placement::Tile(position))?;
                }
                let room = reader.read_u8()?;
                if room != 0 {
                    let index = self.tiles.to_index(position);
                    self.rooms.add_tile(RoomId(room), index)?;
                }
                if sections & SECTION_ROOF != 0 {
                    self.load_roof(reader, flavor, position)?;
                }
                if sections & SECTION_SCENE_OBJS != 0 {
                    for _ in 0..reader.read_u16()? {
                        self.load_scene_obj(reader, flavor, position)?;
                    }
                }
                if sections & SECTION_CREATURES != 0 {
                    for _ in 0..reader.read_u16()? {
                        self.load_creature(reader, flavor, EntityKind::Creature, position)?;
                    }
                }
                if sections & SECTION_WALLS != 0 {
                    for _ in 0..reader.read_u16()? {
                        self.load_wall(reader, flavor, position)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn load_item(
        &mut self,
        reader: &mut BinaryReader,
        flavor: Flavor,
        placement: Placement,
    ) -> Result<EntityHandle, AreaError> {
        let position = match placement {
            Placement::Tile(position) => position,
            Placement::Container(owner) | Placement::Slot(owner, _) => {
                self.entities.position_of(owner).unwrap_or_default()
            }
        };
        let handle = self.entities.create_handle(EntityKind::Item);
        let item = match flavor {
            Flavor::Base => {
                let profile = reader.read_string()?;
                let kind = self.known.items.find(&profile)?;
                Item::new(handle, &kind, position)
            }
            Flavor::Temp => read_dump::<ItemDump>(reader)?.restore(handle, position),
        };
        self.entities.insert_item(item);
        match placement {
            Placement::Tile(position) => self.entities.insert_on_tile(&mut self.tiles, handle, position),
            Placement::Container(owner) => self.entities.insert_into_container(handle, owner)?,
            Placement::Slot(owner, slot) => self.entities.insert_into_slot(owner, slot, handle)?,
        }
        self.load_extras(reader, handle)?;
        Ok(handle)
    }

    fn load_roof(&mut self, reader: &mut BinaryReader, flavor: Flavor, position: TilePosition) -> Result<EntityHandle, AreaError> {
        let handle = self.entities.create_handle(EntityKind::Roof);
        let roof = match flavor {
            Flavor::Base => {
                let profile = reader.read_string()?;
                let kind = self.known.roofs.find(&profile)?;
                Roof::new(handle, &kind, position)
            }
            Flavor::Temp => read_dump::<RoofDump>(reader)?.restore(handle, position),
        };
        self.entities.insert_roof(roof);
        self.entities.insert_on_tile(&mut self.tiles, handle, position);
        self.load_extras(reader, handle)?;
        Ok(handle)
    }

    fn load_scene_obj(
        &mut self,
        reader: &mut BinaryReader,
        flavor: Flavor,
        position: TilePosition,
    ) -> Result<EntityHandle, AreaError> {
        let handle = self.entities.create_handle(EntityKind::SceneObj);
        let scene = match flavor {
            Flavor::Base => {
                let profile = reader.read_string()?;
                let kind = self.known.scene_objs.find(&profile)?;
                SceneObj::new(handle, &kind, position)
            }
            Flavor::Temp => read_dump::<SceneObjDump>(reader)?.restore(handle, position),
        };
        let container = scene.container.is_some();
        self.entities.insert_scene_obj(scene);
        self.entities.insert_on_tile(&mut self.tiles, handle, position);
        if container {
            for _ in 0..reader.read_u16()? {
                self.load_item(reader, flavor, Placement::Container(handle))?;
            }
        }
        self.load_extras(reader, handle)?;
        Ok(handle)
    }

    /// Creature with its inventory and equipment, also used for the player
    /// stored in saved games.
    pub(crate) fn load_creature(
        &mut self,
        reader: &mut BinaryReader,
        flavor: Flavor,
        kind: EntityKind,
        position: TilePosition,
    ) -> Result<EntityHandle, AreaError> {
        debug_assert!(kind.is_creature());
        let handle = self.entities.create_handle(kind);
        let creature = match flavor {
            Flavor::Base => {
                let profile = reader.read_string()?;
                let profile_kind = self.known.creatures.find(&profile)?;
                Creature::new(handle, &profile_kind, position)
            }
            Flavor::Temp => read_dump::<CreatureDump>(reader)?.restore(handle, position),
        };
        self.entities.insert_creature(creature);
        self.entities.insert_on_tile(&mut self.tiles, handle, position);
        for _ in 0..reader.read_u16()? {
            self.load_item(reader, flavor, Placement::Container(handle))?;
        }
        for _ in 0..reader.read_u8()? {
            let slot = reader.read_u8()? as usize;
            self.load_item(reader, flavor, Placement::Slot(handle, slot))?;
        }
        self.load_extras(reader, handle)?;
        Ok(handle)
    }

    fn load_wall(&mut self, reader: &mut BinaryReader, flavor: Flavor, position: TilePosition) -> Result<EntityHandle, AreaError> {
        let handle = self.entities.create_handle(EntityKind::Wall);
        let wall = match flavor {
            Flavor::Base => {
                let profile = reader.read_string()?;
                let kind = self.known.walls.find(&profile)?;
                Wall::new(handle, &kind, position)
            }
            Flavor::Temp => read_dump::<WallDump>(reader)?.restore(handle, position),
        };
        self.entities.insert_wall(wall);
        self.entities.insert_on_tile(&mut self.tiles, handle, position);
        self.load_extras(reader, handle)?;
        Ok(handle)
    }

    /// Optional tag and optional light every entity record ends with.
    fn load_extras(&mut self, reader: &mut BinaryReader, handle: EntityHandle) -> Result<(), AreaError> {
        if reader.read_bool()? {
            let tag = reader.read_string()?;
            self.tags.insert(&tag, handle);
        }
        if reader.read_bool()? {
            let light = reader.read_u8()?;
            self.lighting
                .set_light(handle, light, &self.tiles, &self.entities);
        }
        Ok(())
    }
}
