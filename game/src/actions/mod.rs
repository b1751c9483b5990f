mod access;
mod change_area;
mod create_entity;
mod destroy_entity;
mod draw_tile;
mod equipment;
mod lighting;
mod notify_creature;
mod query_creatures;
mod relocate_entity;
