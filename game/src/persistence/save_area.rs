use log::info;

use crate::api::AreaError;
use crate::entities::{EntityHandle, EntityKind};
use crate::persistence::{
    write_dump, BinaryWriter, CreatureDump, FileHeader, FileType, ItemDump, RoofDump, SceneObjDump, WallDump,
    SECTION_CREATURES, SECTION_FLOOR, SECTION_ROOF, SECTION_SCENE_OBJS, SECTION_WALLS,
};
use crate::tiles::TilePosition;
use crate::Area;

impl Area {
    /// Writes the whole area state into its temp file. Leaving the area drops
    /// temporary creatures, the player is never part of an area file.
    pub fn save_area_info(&mut self, is_changing_area: bool) -> Result<(), AreaError> {
        let id = self.id.ok_or(AreaError::AreaNotLoaded)?;
        info!("Begin area {} saving, changing area {}", id, is_changing_area);
        let mut writer = BinaryWriter::new();
        FileHeader::new(FileType::TempArea, self.config.version, id).write(&mut writer);
        for y in 0..self.tiles.height {
            for x in 0..self.tiles.width {
                self.save_tile(&mut writer, TilePosition::new(x, y), is_changing_area)?;
            }
        }
        let path = self.config.temp_path(id);
        let bytes = writer.into_bytes();
        self.write_file(&path, &bytes)?;
        info!("End area {} saving into {:?}, {} bytes", id, path, bytes.len());
        Ok(())
    }

    fn save_tile(
        &self,
        writer: &mut BinaryWriter,
        position: TilePosition,
        is_changing_area: bool,
    ) -> Result<(), AreaError> {
        let cell = match self.tiles.get_cell(position) {
            Ok(cell) => cell,
            Err(_) => {
                writer.write_u8(0);
                return Ok(());
            }
        };
        let mut items = vec![];
        let mut scenes = vec![];
        let mut creatures = vec![];
        let mut walls = vec![];
        for handle in self.entities_at(&cell.entities, position) {
            match handle.kind() {
                EntityKind::Item => items.push(handle),
                EntityKind::SceneObj => scenes.push(handle),
                EntityKind::Creature => {
                    let creature = self.entities.get_creature(handle)?;
                    if !(is_changing_area && creature.temporary) {
                        creatures.push(handle);
                    }
                }
                EntityKind::Wall => walls.push(handle),
                EntityKind::Player | EntityKind::Roof => {}
            }
        }
        let mut sections = SECTION_FLOOR;
        if cell.roof.is_some() {
            sections |= SECTION_ROOF;
        }
        if !scenes.is_empty() {
            sections |= SECTION_SCENE_OBJS;
        }
        if !creatures.is_empty() {
            sections |= SECTION_CREATURES;
        }
        if !walls.is_empty() {
            sections |= SECTION_WALLS;
        }
        writer.write_u8(sections);
        write_dump(writer, &cell.floor)?;
        for blocked in self.tiles.get_floor_access(position).flags() {
            writer.write_bool(blocked);
        }
        writer.write_u8(cell.elevation);
        writer.write_u16(items.len() as u16);
        for item in items {
            self.save_item(writer, item)?;
        }
        let room = self.rooms.room_at(&self.tiles, position);
        writer.write_u8(room.map(|room| room.0).unwrap_or(0));
        if let Some(roof) = cell.roof {
            self.save_roof(writer, roof)?;
        }
        if !scenes.is_empty() {
            writer.write_u16(scenes.len() as u16);
            for scene in scenes {
                self.save_scene_obj(writer, scene)?;
            }
        }
        if !creatures.is_empty() {
            writer.write_u16(creatures.len() as u16);
            for creature in creatures {
                self.save_creature(writer, creature)?;
            }
        }
        if !walls.is_empty() {
            writer.write_u16(walls.len() as u16);
            for wall in walls {
                self.save_wall(writer, wall)?;
            }
        }
        Ok(())
    }

    /// Entities whose logical position is the tile, wherever they are drawn.
    fn entities_at(&self, displayed: &[EntityHandle], position: TilePosition) -> Vec<EntityHandle> {
        let visuals = &self.entities.visuals;
        let mut handles: Vec<EntityHandle> = displayed
            .iter()
            .copied()
            .filter(|handle| !visuals.contains_key(handle))
            .collect();
        let mut drawn_elsewhere: Vec<EntityHandle> = visuals
            .keys()
            .copied()
            .filter(|handle| self.entities.position_of(*handle) == Some(position))
            .collect();
        drawn_elsewhere.sort();
        handles.extend(drawn_elsewhere);
        handles.sort_by_key(|handle| handle.kind());
        handles
    }

    pub(crate) fn save_item(&self, writer: &mut BinaryWriter, handle: EntityHandle) -> Result<(), AreaError> {
        let item = self.entities.get_item(handle)?;
        write_dump(writer, &ItemDump::of(item))?;
        self.save_extras(writer, handle);
        Ok(())
    }

    fn save_roof(&self, writer: &mut BinaryWriter, handle: EntityHandle) -> Result<(), AreaError> {
        let roof = self.entities.get_roof(handle)?;
        write_dump(writer, &RoofDump::of(roof))?;
        self.save_extras(writer, handle);
        Ok(())
    }

    fn save_scene_obj(&self, writer: &mut BinaryWriter, handle: EntityHandle) -> Result<(), AreaError> {
        let scene = self.entities.get_scene_obj(handle)?;
        write_dump(writer, &SceneObjDump::of(scene))?;
        if let Some(container) = &scene.container {
            writer.write_u16(container.items.len() as u16);
            for item in &container.items {
                self.save_item(writer, *item)?;
            }
        }
        self.save_extras(writer, handle);
        Ok(())
    }

    pub(crate) fn save_creature(&self, writer: &mut BinaryWriter, handle: EntityHandle) -> Result<(), AreaError> {
        let creature = self.entities.get_creature(handle)?;
        write_dump(writer, &CreatureDump::of(creature))?;
        writer.write_u16(creature.inventory.items.len() as u16);
        for item in &creature.inventory.items {
            self.save_item(writer, *item)?;
        }
        let worn: Vec<(usize, EntityHandle)> = creature
            .equipment
            .iter()
            .enumerate()
            .filter_map(|(slot, item)| item.map(|item| (slot, item)))
            .collect();
        writer.write_u8(worn.len() as u8);
        for (slot, item) in worn {
            writer.write_u8(slot as u8);
            self.save_item(writer, item)?;
        }
        self.save_extras(writer, handle);
        Ok(())
    }

    fn save_wall(&self, writer: &mut BinaryWriter, handle: EntityHandle) -> Result<(), AreaError> {
        let wall = self.entities.get_wall(handle)?;
        write_dump(writer, &WallDump::of(wall))?;
        self.save_extras(writer, handle);
        Ok(())
    }

    fn save_extras(&self, writer: &mut BinaryWriter, handle: EntityHandle) {
        match self.tags.tag_of(handle) {
            Some(tag) => {
                writer.write_bool(true);
                writer.write_string(tag);
            }
            None => writer.write_bool(false),
        }
        let light = self.lighting.focus_intensity(handle);
        writer.write_bool(light > 0);
        if light > 0 {
            writer.write_u8(light);
        }
    }
}
