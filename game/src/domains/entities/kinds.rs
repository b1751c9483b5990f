use crate::entities::WallOrientation;
use crate::tiles::AccessMask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallKey(pub usize);

pub struct WallKind {
    pub id: WallKey,
    pub name: String,
    pub sprite: String,
    pub orientation: WallOrientation,
    pub obstacle: AccessMask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneObjKey(pub usize);

pub struct SceneObjKind {
    pub id: SceneObjKey,
    pub name: String,
    pub sprite: String,
    pub obstacle: AccessMask,
    pub container: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey(pub usize);

pub struct ItemKind {
    pub id: ItemKey,
    pub name: String,
    pub sprite: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreatureKey(pub usize);

pub struct CreatureKind {
    pub id: CreatureKey,
    pub name: String,
    pub sprite: String,
    pub health: i16,
    pub obstacle: AccessMask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoofKey(pub usize);

pub struct RoofKind {
    pub id: RoofKey,
    pub name: String,
    pub sprite: String,
}
