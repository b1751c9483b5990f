#![allow(dead_code)]

use std::collections::HashMap;

use datamap::Storage;
use game::api::AreaEvent;
use game::config::AreaConfig;
use game::data::Knowledge;
use game::entities::EntityHandle;
use game::lighting::Light;
use game::persistence::{BinaryWriter, FileHeader, FileSystem, FileType, MemoryFileSystem};
use game::tiles::{Direction, TilePosition};
use game::view::{Renderer, TileLight};
use game::{Area, AreaId};

pub const KNOWLEDGE: &str = r#"
create table FloorKind (id integer, name text, sprite text);
create table WallKind (id integer, name text, sprite text, orientation text, obstacle text);
create table SceneObjKind (id integer, name text, sprite text, obstacle text, container integer);
create table ItemKind (id integer, name text, sprite text);
create table CreatureKind (id integer, name text, sprite text, health integer, obstacle text);
create table RoofKind (id integer, name text, sprite text);
insert into FloorKind values (1, 'grass', 'floors/grass.png'), (2, 'stone', 'floors/stone.png');
insert into WallKind values
    (1, 'fence', 'walls/fence.png', '"SouthWest"', '[true,false,false,false,false,false,false,false]'),
    (2, 'brick', 'walls/brick.png', '"Front"', '[true,true,true,true,true,true,true,true]'),
    (3, 'rail', 'walls/rail.png', '"SouthEast"', '[false,false,false,false,false,false,false,false]');
insert into SceneObjKind values
    (1, 'chest', 'scene/chest.png', '[true,true,true,true,true,true,true,true]', 1),
    (2, 'barrel', 'scene/barrel.png', '[true,true,true,true,true,true,true,true]', 0);
insert into ItemKind values (1, 'torch', 'items/torch.png'), (2, 'sword', 'items/sword.png'), (3, 'coin', 'items/coin.png');
insert into CreatureKind values
    (1, 'hero', 'creatures/hero.png', 40, '[true,true,true,true,true,true,true,true]'),
    (2, 'orc', 'creatures/orc.png', 30, '[true,true,true,true,true,true,true,true]'),
    (3, 'rat', 'creatures/rat.png', 5, '[false,false,false,false,false,false,false,false]');
insert into RoofKind values (1, 'tiles', 'roofs/tiles.png');
"#;

#[inline]
pub fn at(x: u16, y: u16) -> TilePosition {
    TilePosition::new(x, y)
}

pub fn knowledge() -> Knowledge {
    let storage = Storage::open_in_memory().unwrap();
    storage.execute(KNOWLEDGE).unwrap();
    Knowledge::load(&storage).unwrap()
}

#[derive(Default, Clone)]
pub struct EntityBlueprint {
    pub profile: String,
    pub tag: Option<String>,
    pub light: Light,
    pub contents: Option<Vec<EntityBlueprint>>,
    pub creature: bool,
}

impl EntityBlueprint {
    pub fn new(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            ..Default::default()
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn light(mut self, light: Light) -> Self {
        self.light = light;
        self
    }

    pub fn contents(mut self, contents: Vec<EntityBlueprint>) -> Self {
        self.contents = Some(contents);
        self
    }
}

#[derive(Default)]
struct TileBlueprint {
    blocked: [bool; 8],
    items: Vec<EntityBlueprint>,
    room: u8,
    roof: Option<EntityBlueprint>,
    scene_objs: Vec<EntityBlueprint>,
    creatures: Vec<EntityBlueprint>,
    walls: Vec<EntityBlueprint>,
}

/// Base area file written by hand, the way the map editor would export it.
pub struct AreaBlueprint {
    pub id: AreaId,
    name: String,
    width: u16,
    height: u16,
    ambient: Light,
    rooms: u8,
    floors: Vec<Option<String>>,
    tiles: HashMap<TilePosition, TileBlueprint>,
}

impl AreaBlueprint {
    /// `g` is grass, `s` is stone, `.` is void.
    pub fn new(id: AreaId, name: &str, map: &str) -> Self {
        let rows: Vec<Vec<char>> = map
            .lines()
            .map(|line| line.split_whitespace().flat_map(|code| code.chars()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let height = rows.len() as u16;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as u16;
        let mut floors = vec![];
        for row in &rows {
            for x in 0..width as usize {
                let floor = match row.get(x) {
                    Some('g') => Some("grass".to_string()),
                    Some('s') => Some("stone".to_string()),
                    _ => None,
                };
                floors.push(floor);
            }
        }
        Self {
            id,
            name: name.to_string(),
            width,
            height,
            ambient: 0,
            rooms: 0,
            floors,
            tiles: HashMap::new(),
        }
    }

    pub fn ambient(mut self, ambient: Light) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn blocked(mut self, position: TilePosition, direction: Direction) -> Self {
        self.tile(position).blocked[direction.index()] = true;
        self
    }

    pub fn room(mut self, position: TilePosition, room: u8) -> Self {
        self.rooms = self.rooms.max(room);
        self.tile(position).room = room;
        self
    }

    pub fn roof(mut self, position: TilePosition, profile: &str) -> Self {
        self.tile(position).roof = Some(EntityBlueprint::new(profile));
        self
    }

    pub fn item(mut self, position: TilePosition, item: EntityBlueprint) -> Self {
        self.tile(position).items.push(item);
        self
    }

    pub fn scene_obj(mut self, position: TilePosition, scene: EntityBlueprint) -> Self {
        self.tile(position).scene_objs.push(scene);
        self
    }

    pub fn creature(mut self, position: TilePosition, creature: EntityBlueprint) -> Self {
        self.tile(position).creatures.push(creature);
        self
    }

    pub fn wall(mut self, position: TilePosition, wall: EntityBlueprint) -> Self {
        self.tile(position).walls.push(wall);
        self
    }

    fn tile(&mut self, position: TilePosition) -> &mut TileBlueprint {
        self.tiles.entry(position).or_default()
    }

    pub fn encode(&self, version: [u8; 2]) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        FileHeader::new(FileType::Area, version, self.id).write(&mut writer);
        writer.write_string(&self.name);
        writer.write_u16(self.width);
        writer.write_u16(self.height);
        writer.write_u8(self.ambient);
        writer.write_u8(self.rooms);
        let empty = TileBlueprint::default();
        for y in 0..self.height {
            for x in 0..self.width {
                let index = y as usize * self.width as usize + x as usize;
                let floor = match &self.floors[index] {
                    Some(floor) => floor,
                    None => {
                        writer.write_u8(0);
                        continue;
                    }
                };
                let tile = self.tiles.get(&at(x, y)).unwrap_or(&empty);
                let mut sections = 0x01;
                if tile.roof.is_some() {
                    sections |= 0x02;
                }
                if !tile.scene_objs.is_empty() {
                    sections |= 0x04;
                }
                if !tile.creatures.is_empty() {
                    sections |= 0x08;
                }
                if !tile.walls.is_empty() {
                    sections |= 0x10;
                }
                writer.write_u8(sections);
                writer.write_string(floor);
                for blocked in tile.blocked {
                    writer.write_bool(blocked);
                }
                writer.write_u8(0);
                writer.write_u16(tile.items.len() as u16);
                for item in &tile.items {
                    write_entity(&mut writer, item);
                }
                writer.write_u8(tile.room);
                if let Some(roof) = &tile.roof {
                    write_entity(&mut writer, roof);
                }
                for group in [&tile.scene_objs, &tile.creatures, &tile.walls] {
                    if group.is_empty() {
                        continue;
                    }
                    writer.write_u16(group.len() as u16);
                    for entity in group.iter() {
                        write_entity(&mut writer, entity);
                    }
                }
            }
        }
        writer.into_bytes()
    }
}

fn write_entity(writer: &mut BinaryWriter, entity: &EntityBlueprint) {
    writer.write_string(&entity.profile);
    if let Some(contents) = &entity.contents {
        writer.write_u16(contents.len() as u16);
        for item in contents {
            write_entity(writer, item);
        }
    }
    if entity.creature {
        writer.write_u8(0);
    }
    match &entity.tag {
        Some(tag) => {
            writer.write_bool(true);
            writer.write_string(tag);
        }
        None => writer.write_bool(false),
    }
    writer.write_bool(entity.light > 0);
    if entity.light > 0 {
        writer.write_u8(entity.light);
    }
}

/// Creature blueprints carry an empty inventory and no equipment.
pub fn creature(profile: &str) -> EntityBlueprint {
    EntityBlueprint {
        creature: true,
        ..EntityBlueprint::new(profile).contents(vec![])
    }
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub sprites: Vec<(String, [f32; 2], TileLight)>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, sprite: &str, screen: [f32; 2], light: TileLight) {
        self.sprites.push((sprite.to_string(), screen, light));
    }
}

#[derive(Default)]
pub struct Handles {
    handles: HashMap<String, EntityHandle>,
}

impl Handles {
    pub fn get(&self, name: &str) -> EntityHandle {
        match self.handles.get(name) {
            Some(handle) => *handle,
            None => panic!("entity {:?} not given", name),
        }
    }
}

pub struct AreaTestScenario {
    pub area: Area,
    pub given: Handles,
}

impl AreaTestScenario {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let area = Area::new(
            AreaConfig::default(),
            knowledge(),
            Box::new(MemoryFileSystem::new()),
        );
        Self {
            area,
            given: Handles::default(),
        }
    }

    pub fn given_area(mut self, blueprint: AreaBlueprint) -> Self {
        let path = self.area.config.area_path(blueprint.id);
        let bytes = blueprint.encode(self.area.config.version);
        self.area.fs_mut().write(&path, &bytes).unwrap();
        self
    }

    pub fn given_area_loaded(mut self, id: AreaId) -> Self {
        self.area.load_area(id).unwrap();
        self
    }

    pub fn given_player(mut self, id: AreaId, profile: &str, position: TilePosition) -> Self {
        let player = self.area.start_game(id, profile, position).unwrap();
        self.given.handles.insert("player".to_string(), player);
        self
    }

    pub fn given_tagged(mut self, name: &str, tag: &str) -> Self {
        let handle = self.area.handle_from_tag(tag).unwrap();
        self.given.handles.insert(name.to_string(), handle);
        self
    }

    pub fn given_item(mut self, name: &str, profile: &str, position: TilePosition, light: Light) -> Self {
        let item = self.area.create_item(profile, position, None, light).unwrap();
        self.given.handles.insert(name.to_string(), item);
        self
    }

    pub fn given_creature(mut self, name: &str, profile: &str, position: TilePosition, light: Light) -> Self {
        let creature = self
            .area
            .create_creature(profile, position, None, light)
            .unwrap();
        self.given.handles.insert(name.to_string(), creature);
        self
    }

    /// Item created under the owner and picked up into its inventory.
    pub fn given_carried_item(mut self, name: &str, profile: &str, owner: &str, light: Light) -> Self {
        let owner = self.given.get(owner);
        let position = self.area.entities.position_of(owner).unwrap();
        let item = self.area.create_item(profile, position, None, light).unwrap();
        self.area.pick_up(owner, item).unwrap();
        self.area.take_events();
        self.given.handles.insert(name.to_string(), item);
        self
    }

    pub fn given_equipped_item(
        self,
        name: &str,
        profile: &str,
        owner: &str,
        slot: usize,
        light: Light,
    ) -> Self {
        let mut scenario = self.given_carried_item(name, profile, owner, light);
        let owner = scenario.given.get(owner);
        let item = scenario.given.get(name);
        scenario.area.equip(owner, item, slot).unwrap();
        scenario
    }

    pub fn when<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Area, &Handles),
    {
        action(&mut self.area, &self.given);
        self
    }

    pub fn then<F>(self, check: F) -> Self
    where
        F: FnOnce(&Area, &Handles),
    {
        check(&self.area, &self.given);
        self
    }

    pub fn then_events_should_be<F>(mut self, expected: F) -> Self
    where
        F: FnOnce(&Handles) -> Vec<AreaEvent>,
    {
        let events = self.area.take_events();
        assert_eq!(events, expected(&self.given));
        self
    }

    pub fn then_light_at(self, position: TilePosition, expected: Light) -> Self {
        assert_eq!(
            self.area.get_light_at(position),
            expected,
            "light at {:?}",
            position
        );
        self
    }

    pub fn then_lit(self, position: TilePosition) -> Self {
        assert!(self.area.get_light_at(position) > 0, "tile {:?} is dark", position);
        self
    }

    pub fn then_dark(self, position: TilePosition) -> Self {
        assert_eq!(self.area.get_light_at(position), 0, "tile {:?} is lit", position);
        self
    }
}
