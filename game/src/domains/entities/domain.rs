use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::entities::{CreatureKind, ItemKind, RoofKind, SceneObjKind, WallKind};
use crate::tiles::{AccessMask, Direction, TilePosition};

/// Equipment slots every creature exposes.
pub const EQUIPMENT_SLOTS: usize = 6;

/// Declaration order is the order entities are stacked on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum EntityKind {
    SceneObj = 1,
    Item = 2,
    Player = 3,
    Creature = 4,
    Wall = 5,
    Roof = 6,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::SceneObj,
        EntityKind::Item,
        EntityKind::Player,
        EntityKind::Creature,
        EntityKind::Wall,
        EntityKind::Roof,
    ];

    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<EntityKind> {
        EntityKind::ALL.into_iter().find(|kind| kind.code() == code)
    }

    #[inline]
    pub fn is_creature(self) -> bool {
        matches!(self, EntityKind::Player | EntityKind::Creature)
    }
}

/// Set of entity kinds, used to exclude kinds from access queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityKinds(u16);

impl EntityKinds {
    pub const NONE: EntityKinds = EntityKinds(0);

    pub fn of(kinds: &[EntityKind]) -> Self {
        EntityKinds(kinds.iter().fold(0, |bits, kind| bits | (1 << kind.code())))
    }

    #[inline]
    pub fn contains(&self, kind: EntityKind) -> bool {
        self.0 & (1 << kind.code()) != 0
    }
}

/// Kind in the top four bits, random discriminator in the low twelve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(u16);

impl EntityHandle {
    const KIND_SHIFT: u16 = 12;
    const DISCRIMINATOR_MASK: u16 = 0x0fff;

    #[inline]
    pub fn compose(kind: EntityKind, discriminator: u16) -> Self {
        EntityHandle((kind.code() << Self::KIND_SHIFT) | (discriminator & Self::DISCRIMINATOR_MASK))
    }

    #[inline]
    pub fn kind(self) -> EntityKind {
        match EntityKind::from_code(self.0 >> Self::KIND_SHIFT) {
            Some(kind) => kind,
            None => unreachable!("handle {:#06x} composed without kind", self.0),
        }
    }

    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn discriminator(self) -> u16 {
        self.0 & Self::DISCRIMINATOR_MASK
    }
}

impl Debug for EntityHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}#{:03x}", self.kind(), self.discriminator())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, bincode::Encode, bincode::Decode,
)]
pub enum WallOrientation {
    Front,
    SouthWest,
    SouthEast,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemContainer {
    pub items: Vec<EntityHandle>,
}

impl ItemContainer {
    #[inline]
    pub fn contains(&self, item: EntityHandle) -> bool {
        self.items.contains(&item)
    }

    pub fn remove(&mut self, item: EntityHandle) -> bool {
        match self.items.iter().position(|other| *other == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub handle: EntityHandle,
    pub position: TilePosition,
    pub profile: String,
    pub orientation: WallOrientation,
    pub obstacle: AccessMask,
    pub paused: bool,
}

impl Wall {
    pub fn new(handle: EntityHandle, kind: &WallKind, position: TilePosition) -> Self {
        Self {
            handle,
            position,
            profile: kind.name.clone(),
            orientation: kind.orientation,
            obstacle: kind.obstacle,
            paused: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObj {
    pub handle: EntityHandle,
    pub position: TilePosition,
    pub profile: String,
    pub obstacle: AccessMask,
    pub container: Option<ItemContainer>,
    pub paused: bool,
}

impl SceneObj {
    pub fn new(handle: EntityHandle, kind: &SceneObjKind, position: TilePosition) -> Self {
        Self {
            handle,
            position,
            profile: kind.name.clone(),
            obstacle: kind.obstacle,
            container: kind.container.then(ItemContainer::default),
            paused: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub handle: EntityHandle,
    /// Meaningful only while the item has no owner.
    pub position: TilePosition,
    pub profile: String,
    /// Creature or scene object holding the item, `None` while it lies on a floor.
    pub owner: Option<EntityHandle>,
    pub elevation: u8,
    pub paused: bool,
}

impl Item {
    pub fn new(handle: EntityHandle, kind: &ItemKind, position: TilePosition) -> Self {
        Self {
            handle,
            position,
            profile: kind.name.clone(),
            owner: None,
            elevation: 0,
            paused: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub handle: EntityHandle,
    pub position: TilePosition,
    pub profile: String,
    pub name: String,
    pub health: i16,
    /// Ephemeral spawns, not kept when the area is left.
    pub temporary: bool,
    pub walking: bool,
    pub facing: Direction,
    pub obstacle: AccessMask,
    pub inventory: ItemContainer,
    pub equipment: Vec<Option<EntityHandle>>,
    pub paused: bool,
}

impl Creature {
    pub fn new(handle: EntityHandle, kind: &CreatureKind, position: TilePosition) -> Self {
        Self {
            handle,
            position,
            profile: kind.name.clone(),
            name: kind.name.clone(),
            health: kind.health,
            temporary: false,
            walking: false,
            facing: Direction::South,
            obstacle: kind.obstacle,
            inventory: ItemContainer::default(),
            equipment: vec![None; EQUIPMENT_SLOTS],
            paused: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roof {
    pub handle: EntityHandle,
    pub position: TilePosition,
    pub profile: String,
    pub visible: bool,
}

impl Roof {
    pub fn new(handle: EntityHandle, kind: &RoofKind, position: TilePosition) -> Self {
        Self {
            handle,
            position,
            profile: kind.name.clone(),
            visible: true,
        }
    }
}

/// Floor hooks fired while entities move between tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    Entered {
        entity: EntityHandle,
        tile: TilePosition,
    },
    Left {
        entity: EntityHandle,
        tile: TilePosition,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntitiesError {
    EntityNotFound { handle: EntityHandle },
    TileNotPopulated { position: TilePosition },
    ProfileNotFound { name: String },
    NotAContainer { handle: EntityHandle },
    ItemAlreadyOwned { item: EntityHandle },
    ItemNotCarried { item: EntityHandle },
    InvalidSlot { slot: usize },
    SlotOccupied { slot: usize },
    SlotEmpty { slot: usize },
    CannotRelocate { handle: EntityHandle },
}

#[derive(Default)]
pub struct EntitiesDomain {
    pub walls: HashMap<EntityHandle, Wall>,
    pub scene_objs: HashMap<EntityHandle, SceneObj>,
    pub items: HashMap<EntityHandle, Item>,
    pub creatures: HashMap<EntityHandle, Creature>,
    pub roofs: HashMap<EntityHandle, Roof>,
    /// Tiles entities are drawn at while they differ from their logical position.
    pub(crate) visuals: HashMap<EntityHandle, TilePosition>,
    /// Set while a whole area is torn down.
    pub freeing: bool,
}
