use std::collections::HashSet;
use std::path::Path;

use log::{debug, info, warn};

use crate::api::AreaError;
use crate::entities::EntityKind;
use crate::persistence::{BinaryReader, BinaryWriter, Flavor};
use crate::tiles::TilePosition;
use crate::{Area, AreaId};

/// Area ids scanned for temp files when a game is saved.
pub const MAX_AREAS: AreaId = 255;

impl Area {
    /// Packs every visited area's temp file together with the player into a
    /// single save file. The current area is flushed first.
    pub fn save_game(&mut self, path: &Path) -> Result<(), AreaError> {
        let current = self.id.ok_or(AreaError::AreaNotLoaded)?;
        let player = self.player.ok_or(AreaError::PlayerNotFound)?;
        let position = self
            .entities
            .position_of(player)
            .ok_or(AreaError::PlayerNotFound)?;
        self.save_area_info(false)?;

        let mut files = vec![];
        for id in 0..MAX_AREAS {
            let temp_path = self.config.temp_path(id);
            if !self.fs.exists(&temp_path) {
                continue;
            }
            if !self.fs.exists(&self.config.area_path(id)) {
                warn!("Skip temp file {:?}, area {} has no base file", temp_path, id);
                continue;
            }
            let bytes = self.read_file(&temp_path)?;
            files.push((id, bytes));
        }
        let largest = files.iter().map(|(_, bytes)| bytes.len()).max().unwrap_or(0);

        let mut writer = BinaryWriter::new();
        writer.write_u16(current);
        writer.write_u16(files.len() as u16);
        writer.write_u32(largest as u32);
        for (id, bytes) in &files {
            writer.write_u16(*id);
            writer.write_u32(bytes.len() as u32);
            writer.write_bytes(bytes);
        }
        writer.write_u16(position.x);
        writer.write_u16(position.y);
        self.save_creature(&mut writer, player)?;

        let bytes = writer.into_bytes();
        self.write_file(path, &bytes)?;
        info!(
            "Game saved into {:?}, area {}, {} area files, {} bytes",
            path,
            current,
            files.len(),
            bytes.len()
        );
        Ok(())
    }

    /// Replaces the temp files with the saved ones and enters the saved area.
    pub fn load_game(&mut self, path: &Path) -> Result<(), AreaError> {
        let bytes = self.read_file(path)?;
        let mut reader = BinaryReader::new(&bytes);
        let current = reader.read_u16()?;
        let count = reader.read_u16()?;
        let largest = reader.read_u32()?;
        debug!(
            "Save {:?} holds {} area files, largest {} bytes",
            path, count, largest
        );

        self.clear_temp_files()?;
        for _ in 0..count {
            let id = reader.read_u16()?;
            let size = reader.read_u32()? as usize;
            let data = reader.read_bytes(size)?;
            let temp_path = self.config.temp_path(id);
            self.write_file(&temp_path, data)?;
        }
        let x = reader.read_u16()?;
        let y = reader.read_u16()?;

        self.free_area(&HashSet::new());
        self.player = None;
        self.load_area(current)?;
        let position = self.arrival_tile(current, TilePosition::new(x, y))?;
        let player = self.load_creature(&mut reader, Flavor::Temp, EntityKind::Player, position)?;
        self.player = Some(player);
        info!("Game loaded from {:?}, area {}, player at {:?}", path, current, position);
        Ok(())
    }

    /// Forgets every visited area, the next visit starts from base files.
    pub(crate) fn clear_temp_files(&mut self) -> Result<(), AreaError> {
        for id in 0..MAX_AREAS {
            let temp_path = self.config.temp_path(id);
            if self.fs.exists(&temp_path) {
                self.remove_file(&temp_path)?;
            }
        }
        Ok(())
    }
}
