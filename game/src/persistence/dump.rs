use crate::api::AreaError;
use crate::entities::{Creature, EntityHandle, Item, Roof, SceneObj, Wall, WallOrientation};
use crate::persistence::{BinaryReader, BinaryWriter};
use crate::tiles::{AccessMask, Direction, TilePosition};

/// Sections present on a tile record, the floor bit is set for every
/// populated tile.
pub const SECTION_FLOOR: u8 = 0x01;
pub const SECTION_ROOF: u8 = 0x02;
pub const SECTION_SCENE_OBJS: u8 = 0x04;
pub const SECTION_CREATURES: u8 = 0x08;
pub const SECTION_WALLS: u8 = 0x10;

/// Base files reference entities by profile name, temp files carry the
/// full runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Base,
    Temp,
}

pub fn write_dump<T: bincode::Encode>(writer: &mut BinaryWriter, value: &T) -> Result<(), AreaError> {
    let config = bincode::config::standard();
    let bytes = bincode::encode_to_vec(value, config)?;
    writer.write_u32(bytes.len() as u32);
    writer.write_bytes(&bytes);
    Ok(())
}

pub fn read_dump<T: bincode::Decode<()>>(reader: &mut BinaryReader) -> Result<T, AreaError> {
    let length = reader.read_u32()? as usize;
    let bytes = reader.read_bytes(length)?;
    let config = bincode::config::standard();
    let (value, _) = bincode::decode_from_slice(bytes, config)?;
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct ItemDump {
    pub profile: String,
    pub elevation: u8,
    pub paused: bool,
}

impl ItemDump {
    pub fn of(item: &Item) -> Self {
        Self {
            profile: item.profile.clone(),
            elevation: item.elevation,
            paused: item.paused,
        }
    }

    pub fn restore(self, handle: EntityHandle, position: TilePosition) -> Item {
        Item {
            handle,
            position,
            profile: self.profile,
            owner: None,
            elevation: self.elevation,
            paused: self.paused,
        }
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct WallDump {
    pub profile: String,
    pub orientation: WallOrientation,
    pub obstacle: AccessMask,
    pub paused: bool,
}

impl WallDump {
    pub fn of(wall: &Wall) -> Self {
        Self {
            profile: wall.profile.clone(),
            orientation: wall.orientation,
            obstacle: wall.obstacle,
            paused: wall.paused,
        }
    }

    pub fn restore(self, handle: EntityHandle, position: TilePosition) -> Wall {
        Wall {
            handle,
            position,
            profile: self.profile,
            orientation: self.orientation,
            obstacle: self.obstacle,
            paused: self.paused,
        }
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct SceneObjDump {
    pub profile: String,
    pub obstacle: AccessMask,
    pub container: bool,
    pub paused: bool,
}

impl SceneObjDump {
    pub fn of(scene: &SceneObj) -> Self {
        Self {
            profile: scene.profile.clone(),
            obstacle: scene.obstacle,
            container: scene.container.is_some(),
            paused: scene.paused,
        }
    }

    pub fn restore(self, handle: EntityHandle, position: TilePosition) -> SceneObj {
        SceneObj {
            handle,
            position,
            profile: self.profile,
            obstacle: self.obstacle,
            container: self.container.then(Default::default),
            paused: self.paused,
        }
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct CreatureDump {
    pub profile: String,
    pub name: String,
    pub health: i16,
    pub temporary: bool,
    pub facing: Direction,
    pub obstacle: AccessMask,
    pub paused: bool,
}

impl CreatureDump {
    pub fn of(creature: &Creature) -> Self {
        Self {
            profile: creature.profile.clone(),
            name: creature.name.clone(),
            health: creature.health,
            temporary: creature.temporary,
            facing: creature.facing,
            obstacle: creature.obstacle,
            paused: creature.paused,
        }
    }

    /// Inventory and equipment are restored item by item afterwards.
    pub fn restore(self, handle: EntityHandle, position: TilePosition) -> Creature {
        Creature {
            handle,
            position,
            profile: self.profile,
            name: self.name,
            health: self.health,
            temporary: self.temporary,
            walking: false,
            facing: self.facing,
            obstacle: self.obstacle,
            inventory: Default::default(),
            equipment: vec![None; crate::entities::EQUIPMENT_SLOTS],
            paused: self.paused,
        }
    }
}

#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct RoofDump {
    pub profile: String,
    pub visible: bool,
}

impl RoofDump {
    pub fn of(roof: &Roof) -> Self {
        Self {
            profile: roof.profile.clone(),
            visible: roof.visible,
        }
    }

    pub fn restore(self, handle: EntityHandle, position: TilePosition) -> Roof {
        Roof {
            handle,
            position,
            profile: self.profile,
            visible: self.visible,
        }
    }
}
