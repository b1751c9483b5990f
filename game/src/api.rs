use std::path::PathBuf;

use crate::collections::DictionaryError;
use crate::data::DataError;
use crate::entities::{EntitiesError, EntityHandle, TileEvent};
use crate::persistence::BinaryError;
use crate::rooms::RoomsError;
use crate::tiles::{TilePosition, TilesError};
use crate::AreaId;

/// Things the scripting layer reacts to, drained with `Area::take_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaEvent {
    EnteredTile {
        entity: EntityHandle,
        tile: TilePosition,
    },
    LeftTile {
        entity: EntityHandle,
        tile: TilePosition,
    },
}

impl From<TileEvent> for AreaEvent {
    fn from(event: TileEvent) -> Self {
        match event {
            TileEvent::Entered { entity, tile } => AreaEvent::EnteredTile { entity, tile },
            TileEvent::Left { entity, tile } => AreaEvent::LeftTile { entity, tile },
        }
    }
}

/// Creature actions the area keeps lighting in sync with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatureEvent {
    Walk { from: TilePosition },
    Equip { item: EntityHandle },
    Unequip { item: EntityHandle },
    GetItem { item: EntityHandle },
    DropItem { item: EntityHandle },
}

#[derive(Debug)]
pub enum AreaError {
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
    Corrupted {
        path: PathBuf,
        reason: String,
    },
    Binary(BinaryError),
    Encode(bincode::error::EncodeError),
    Decode(bincode::error::DecodeError),
    Data(DataError),
    Tiles(TilesError),
    Entities(EntitiesError),
    Rooms(RoomsError),
    AreaNotLoaded,
    PlayerNotFound,
    NoPopulatedTile { area: AreaId },
}

impl From<BinaryError> for AreaError {
    fn from(error: BinaryError) -> Self {
        Self::Binary(error)
    }
}

impl From<bincode::error::EncodeError> for AreaError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::Encode(error)
    }
}

impl From<bincode::error::DecodeError> for AreaError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::Decode(error)
    }
}

impl From<DataError> for AreaError {
    fn from(error: DataError) -> Self {
        Self::Data(error)
    }
}

impl From<DictionaryError> for AreaError {
    fn from(error: DictionaryError) -> Self {
        Self::Data(DataError::from(error))
    }
}

impl From<TilesError> for AreaError {
    fn from(error: TilesError) -> Self {
        Self::Tiles(error)
    }
}

impl From<EntitiesError> for AreaError {
    fn from(error: EntitiesError) -> Self {
        Self::Entities(error)
    }
}

impl From<RoomsError> for AreaError {
    fn from(error: RoomsError) -> Self {
        Self::Rooms(error)
    }
}
