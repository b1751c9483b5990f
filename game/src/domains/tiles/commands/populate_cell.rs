use crate::tiles::{Cell, TilePosition, TilesDomain, TilesError};

impl TilesDomain {
    /// Turns a void tile into a walkable one, only done while an area loads.
    pub fn populate_cell(&mut self, position: TilePosition, cell: Cell) -> Result<(), TilesError> {
        if !self.is_valid(position) {
            return Err(TilesError::InvalidTile { position });
        }
        let index = self.to_index(position);
        debug_assert!(
            self.cells[index].is_none(),
            "tile {:?} populated twice",
            position
        );
        self.cells[index] = Some(cell);
        Ok(())
    }
}
