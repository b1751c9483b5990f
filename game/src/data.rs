use log::info;
use serde::de;

use datamap::Storage;

use crate::collections::{Dictionary, DictionaryError};
use crate::entities::{
    CreatureKey, CreatureKind, ItemKey, ItemKind, RoofKey, RoofKind, SceneObjKey, SceneObjKind, WallKey,
    WallKind,
};
use crate::tiles::{AccessMask, FloorKey, FloorKind};

/// Profiles of everything an area may reference by name.
#[derive(Default)]
pub struct Knowledge {
    pub floors: Dictionary<FloorKey, FloorKind>,
    pub walls: Dictionary<WallKey, WallKind>,
    pub scene_objs: Dictionary<SceneObjKey, SceneObjKind>,
    pub items: Dictionary<ItemKey, ItemKind>,
    pub creatures: Dictionary<CreatureKey, CreatureKind>,
    pub roofs: Dictionary<RoofKey, RoofKind>,
}

impl Knowledge {
    pub fn load(storage: &Storage) -> Result<Knowledge, DataError> {
        info!("Begin knowledge loading");
        let mut known = Knowledge::default();
        for kind in storage.find_all(load_floor_kind)? {
            known.floors.insert(kind.id, kind.name.clone(), kind);
        }
        for kind in storage.find_all(load_wall_kind)? {
            known.walls.insert(kind.id, kind.name.clone(), kind);
        }
        for kind in storage.find_all(load_scene_obj_kind)? {
            known.scene_objs.insert(kind.id, kind.name.clone(), kind);
        }
        for kind in storage.find_all(load_item_kind)? {
            known.items.insert(kind.id, kind.name.clone(), kind);
        }
        for kind in storage.find_all(load_creature_kind)? {
            known.creatures.insert(kind.id, kind.name.clone(), kind);
        }
        for kind in storage.find_all(load_roof_kind)? {
            known.roofs.insert(kind.id, kind.name.clone(), kind);
        }
        info!(
            "End knowledge loading, {} floors, {} walls, {} scene objects, {} items, {} creatures, {} roofs",
            known.floors.len(),
            known.walls.len(),
            known.scene_objs.len(),
            known.items.len(),
            known.creatures.len(),
            known.roofs.len()
        );
        Ok(known)
    }
}

pub(crate) fn load_floor_kind(row: &rusqlite::Row) -> Result<FloorKind, DataError> {
    let data = FloorKind {
        id: FloorKey(row.get("id")?),
        name: row.get("name")?,
        sprite: row.get("sprite")?,
    };
    Ok(data)
}

pub(crate) fn load_wall_kind(row: &rusqlite::Row) -> Result<WallKind, DataError> {
    let obstacle: [bool; 8] = row.get_json("obstacle")?;
    let data = WallKind {
        id: WallKey(row.get("id")?),
        name: row.get("name")?,
        sprite: row.get("sprite")?,
        orientation: row.get_json("orientation")?,
        obstacle: AccessMask::from_flags(obstacle),
    };
    Ok(data)
}

pub(crate) fn load_scene_obj_kind(row: &rusqlite::Row) -> Result<SceneObjKind, DataError> {
    let obstacle: [bool; 8] = row.get_json("obstacle")?;
    let data = SceneObjKind {
        id: SceneObjKey(row.get("id")?),
        name: row.get("name")?,
        sprite: row.get("sprite")?,
        obstacle: AccessMask::from_flags(obstacle),
        container: row.get("container")?,
    };
    Ok(data)
}

pub(crate) fn load_item_kind(row: &rusqlite::Row) -> Result<ItemKind, DataError> {
    let data = ItemKind {
        id: ItemKey(row.get("id")?),
        name: row.get("name")?,
        sprite: row.get("sprite")?,
    };
    Ok(data)
}

pub(crate) fn load_creature_kind(row: &rusqlite::Row) -> Result<CreatureKind, DataError> {
    let obstacle: [bool; 8] = row.get_json("obstacle")?;
    let data = CreatureKind {
        id: CreatureKey(row.get("id")?),
        name: row.get("name")?,
        sprite: row.get("sprite")?,
        health: row.get("health")?,
        obstacle: AccessMask::from_flags(obstacle),
    };
    Ok(data)
}

pub(crate) fn load_roof_kind(row: &rusqlite::Row) -> Result<RoofKind, DataError> {
    let data = RoofKind {
        id: RoofKey(row.get("id")?),
        name: row.get("name")?,
        sprite: row.get("sprite")?,
    };
    Ok(data)
}

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    Sql(rusqlite::Error),
    Inconsistency(DictionaryError),
}

impl From<DictionaryError> for DataError {
    fn from(error: DictionaryError) -> Self {
        Self::Inconsistency(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

pub trait JsonDeserializer {
    fn get_json<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned;
}

impl<'stmt> JsonDeserializer for rusqlite::Row<'stmt> {
    fn get_json<T>(&self, index: &str) -> Result<T, DataError>
    where
        T: de::DeserializeOwned,
    {
        let value: String = self.get(index)?;
        let value = datamap::parse_json(&value)?;
        Ok(value)
    }
}
