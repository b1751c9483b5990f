use std::collections::HashSet;
use std::path::Path;

use log::{error, info};

pub use domains::*;

use crate::api::{AreaError, AreaEvent};
use crate::config::AreaConfig;
use crate::data::Knowledge;
use crate::entities::{EntitiesDomain, EntityHandle};
use crate::lighting::LightingDomain;
use crate::persistence::FileSystem;
use crate::rooms::RoomsDomain;
use crate::tags::TagsDomain;
use crate::tiles::TilesDomain;

mod actions;
pub mod api;
pub mod collections;
pub mod config;
pub mod data;
mod domains;
pub mod math;
pub mod persistence;
pub mod view;

pub type AreaId = u16;

/// Live state of the map the player walks on.
pub struct Area {
    pub config: AreaConfig,
    pub known: Knowledge,
    fs: Box<dyn FileSystem>,
    pub id: Option<AreaId>,
    pub name: String,
    /// Whether the state was restored from a temp file instead of the base one.
    pub from_temp: bool,
    pub tiles: TilesDomain,
    pub entities: EntitiesDomain,
    pub lighting: LightingDomain,
    pub rooms: RoomsDomain,
    pub tags: TagsDomain,
    pub player: Option<EntityHandle>,
    events: Vec<AreaEvent>,
}

impl Area {
    pub fn new(config: AreaConfig, known: Knowledge, fs: Box<dyn FileSystem>) -> Self {
        Self {
            config,
            known,
            fs,
            id: None,
            name: String::new(),
            from_temp: false,
            tiles: TilesDomain::default(),
            entities: EntitiesDomain::default(),
            lighting: LightingDomain::default(),
            rooms: RoomsDomain::default(),
            tags: TagsDomain::default(),
            player: None,
            events: vec![],
        }
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.id.is_some()
    }

    #[inline]
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    #[inline]
    pub fn fs_mut(&mut self) -> &mut dyn FileSystem {
        self.fs.as_mut()
    }

    pub fn take_events(&mut self) -> Vec<AreaEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_events<E: Into<AreaEvent>>(&mut self, events: Vec<E>) {
        self.events.extend(events.into_iter().map(Into::into));
    }

    pub(crate) fn read_file(&self, path: &Path) -> Result<Vec<u8>, AreaError> {
        self.fs.read(path).map_err(|error| {
            error!("Unable to read {:?}, {:?}", path, error);
            AreaError::Io {
                path: path.to_path_buf(),
                error,
            }
        })
    }

    pub(crate) fn write_file(&mut self, path: &Path, bytes: &[u8]) -> Result<(), AreaError> {
        self.fs.write(path, bytes).map_err(|error| {
            error!("Unable to write {:?}, {:?}", path, error);
            AreaError::Io {
                path: path.to_path_buf(),
                error,
            }
        })
    }

    pub(crate) fn remove_file(&mut self, path: &Path) -> Result<(), AreaError> {
        self.fs.remove(path).map_err(|error| AreaError::Io {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Drops the whole map except the kept entities, their records stay
    /// untouched for the next area.
    pub fn free_area(&mut self, keep: &HashSet<EntityHandle>) {
        if let Some(id) = self.id {
            info!("Free area {} \"{}\", keep {} entities", id, self.name, keep.len());
        }
        self.entities.freeing = true;
        self.entities.retain(keep);
        self.tags.retain(keep);
        self.lighting.foci.retain(|handle, _| keep.contains(handle));
        self.lighting.tiles.clear();
        self.lighting.ambient = 0;
        self.tiles = TilesDomain::default();
        self.rooms = RoomsDomain::default();
        self.id = None;
        self.name.clear();
        self.from_temp = false;
        self.events.clear();
        self.entities.freeing = false;
    }
}
