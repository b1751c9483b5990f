use game::api::AreaError;
use game::entities::{EntityKind, EntityKinds};
use game::persistence::FileSystem;
use game::rooms::RoomId;
use game::tiles::{AccessMask, Direction};

use crate::testing::{at, creature, AreaBlueprint, AreaTestScenario, EntityBlueprint, RecordingRenderer};

mod testing;

const MEADOW: &str = r#"
    g g g g
    g g g g
    g g g g
    g g g g
"#;

#[test]
fn test_open_map_is_accessible_everywhere() {
    AreaTestScenario::new()
        .given_area(AreaBlueprint::new(1, "Meadow", MEADOW))
        .given_area_loaded(1)
        .then(|area, _| {
            assert_eq!(area.id, Some(1));
            assert_eq!(area.name, "Meadow");
            assert!(!area.from_temp);
            for y in 0..4 {
                for x in 0..4 {
                    assert!(area.tiles.is_populated(at(x, y)));
                    assert_eq!(area.tile_access(at(x, y), EntityKinds::NONE), AccessMask::OPEN);
                }
            }
            assert_eq!(area.tile_access(at(4, 0), EntityKinds::NONE), AccessMask::CLOSED);
            assert!(area.entities.is_empty());
        });
}

#[test]
fn test_void_tiles_floor_access_and_obstacles() {
    let cave = AreaBlueprint::new(
        2,
        "Cave",
        r#"
        g . g
        g g s
    "#,
    )
    .blocked(at(0, 1), Direction::East)
    .creature(at(2, 1), creature("orc").tag("Grunt"));

    AreaTestScenario::new()
        .given_area(cave)
        .given_area_loaded(2)
        .then(|area, _| {
            assert!(!area.tiles.is_populated(at(1, 0)));
            assert!(area.tiles.get_cell(at(1, 0)).is_err());
            assert_eq!(area.tiles.get_cell(at(2, 1)).unwrap().floor.profile, "stone");

            let floor = area.tiles.get_floor_access(at(0, 1));
            assert!(floor.is_blocked(Direction::East));
            assert!(!floor.is_blocked(Direction::West));

            let orc = area.handle_from_tag("grunt").unwrap();
            assert_eq!(orc.kind(), EntityKind::Creature);
            assert_eq!(area.tag_of(orc), Some("Grunt"));
            assert_eq!(area.tile_access(at(2, 1), EntityKinds::NONE), AccessMask::CLOSED);
            let excluded = EntityKinds::of(&[EntityKind::Creature]);
            assert_eq!(area.tile_access(at(2, 1), excluded), AccessMask::OPEN);
        });
}

#[test]
fn test_entities_are_stacked_by_kind() {
    let yard = AreaBlueprint::new(1, "Yard", MEADOW)
        .wall(at(1, 1), EntityBlueprint::new("brick"))
        .creature(at(1, 1), creature("rat"))
        .item(at(1, 1), EntityBlueprint::new("coin"))
        .scene_obj(at(1, 1), EntityBlueprint::new("barrel"));

    AreaTestScenario::new()
        .given_area(yard)
        .given_area_loaded(1)
        .then(|area, _| {
            let kinds: Vec<EntityKind> = area
                .tiles
                .get_cell(at(1, 1))
                .unwrap()
                .entities
                .iter()
                .map(|handle| handle.kind())
                .collect();
            assert_eq!(
                kinds,
                vec![
                    EntityKind::SceneObj,
                    EntityKind::Item,
                    EntityKind::Creature,
                    EntityKind::Wall
                ]
            );
        })
        .then(|area, _| {
            let mut renderer = RecordingRenderer::default();
            area.draw_floor(&mut renderer, at(1, 1), [10.0, 20.0]).unwrap();
            area.draw_on_floor(&mut renderer, at(1, 1), [10.0, 20.0]).unwrap();
            let sprites: Vec<&str> = renderer.sprites.iter().map(|(sprite, _, _)| sprite.as_str()).collect();
            assert_eq!(
                sprites,
                vec![
                    "floors/grass.png",
                    "scene/barrel.png",
                    "items/coin.png",
                    "creatures/rat.png",
                    "walls/brick.png"
                ]
            );
        });
}

#[test]
fn test_chest_contents_are_loaded_into_container() {
    let chest = EntityBlueprint::new("chest")
        .tag("Loot")
        .contents(vec![EntityBlueprint::new("coin"), EntityBlueprint::new("sword").tag("Blade")]);

    AreaTestScenario::new()
        .given_area(AreaBlueprint::new(1, "Yard", MEADOW).scene_obj(at(2, 2), chest))
        .given_area_loaded(1)
        .then(|area, _| {
            let chest = area.handle_from_tag("loot").unwrap();
            let sword = area.handle_from_tag("blade").unwrap();
            let container = area.entities.container(chest).unwrap();
            assert_eq!(container.items.len(), 2);
            assert!(container.contains(sword));
            let item = area.entities.get_item(sword).unwrap();
            assert_eq!(item.owner, Some(chest));
            assert!(item.paused);
            let cell = area.tiles.get_cell(at(2, 2)).unwrap();
            assert_eq!(cell.entities, vec![chest]);
        });
}

#[test]
fn test_lights_and_ambient_come_from_file() {
    let map = r#"
        g g g g g g
        g g g g g g
        g g g g g g
        g g g g g g
        g g g g g g
        g g g g g g
    "#;
    let plaza = AreaBlueprint::new(5, "Plaza", map)
        .ambient(3)
        .item(at(2, 2), EntityBlueprint::new("torch").tag("Lamp").light(20));

    AreaTestScenario::new()
        .given_area(plaza)
        .given_area_loaded(5)
        .then_light_at(at(2, 2), 11)
        .then_light_at(at(3, 2), 11)
        .then_dark(at(5, 2))
        .then(|area, _| {
            let lamp = area.handle_from_tag("LAMP").unwrap();
            assert_eq!(area.light_of(lamp), 20);
            assert_eq!(area.ambient_light(), 3);
            assert_eq!(area.tile_light(at(5, 5)).combined(), [3, 3, 3, 3]);
            assert!(area.tile_light(at(2, 2)).combined().iter().all(|light| *light >= 3));
        });
}

#[test]
fn test_rooms_and_roofs() {
    let house = AreaBlueprint::new(1, "House", MEADOW)
        .room(at(1, 1), 1)
        .room(at(2, 1), 1)
        .roof(at(1, 1), "tiles")
        .roof(at(2, 1), "tiles")
        .room(at(3, 3), 2);

    AreaTestScenario::new()
        .given_area(house)
        .given_area_loaded(1)
        .then(|area, _| {
            assert_eq!(area.room_at(at(1, 1)), Some(RoomId(1)));
            assert_eq!(area.room_at(at(3, 3)), Some(RoomId(2)));
            assert_eq!(area.room_at(at(0, 0)), None);
            assert!(area.is_roof_visible(RoomId(1)));
            let mut renderer = RecordingRenderer::default();
            area.draw_roof(&mut renderer, at(1, 1), [0.0, 0.0]).unwrap();
            assert_eq!(renderer.sprites.len(), 1);
        })
        .when(|area, _| area.set_roof_visible(RoomId(1), false).unwrap())
        .then(|area, _| {
            assert!(!area.is_roof_visible(RoomId(1)));
            assert!(area.entities.roofs.values().all(|roof| !roof.visible));
            let mut renderer = RecordingRenderer::default();
            area.draw_roof(&mut renderer, at(1, 1), [0.0, 0.0]).unwrap();
            area.draw_roof(&mut renderer, at(2, 1), [0.0, 0.0]).unwrap();
            assert!(renderer.sprites.is_empty());
        })
        .when(|area, _| {
            assert!(area.set_roof_visible(RoomId(9), true).is_err());
        });
}

#[test]
fn test_mismatched_area_id_is_corruption() {
    let mut scenario = AreaTestScenario::new();
    let path = scenario.area.config.area_path(4);
    let bytes = AreaBlueprint::new(3, "Elsewhere", MEADOW).encode([1, 0]);
    scenario.area.fs_mut().write(&path, &bytes).unwrap();

    let result = scenario.area.load_area(4);

    assert!(matches!(result, Err(AreaError::Corrupted { .. })));
    assert!(!scenario.area.is_loaded());
}

#[test]
fn test_wrong_file_type_is_corruption() {
    let mut scenario = AreaTestScenario::new();
    let path = scenario.area.config.area_path(1);
    let mut bytes = AreaBlueprint::new(1, "Meadow", MEADOW).encode([1, 0]);
    bytes[0] = 0x07;
    scenario.area.fs_mut().write(&path, &bytes).unwrap();

    assert!(matches!(
        scenario.area.load_area(1),
        Err(AreaError::Corrupted { .. })
    ));
}

#[test]
fn test_missing_area_file_is_io_error() {
    let mut scenario = AreaTestScenario::new();
    assert!(matches!(scenario.area.load_area(9), Err(AreaError::Io { .. })));
}
