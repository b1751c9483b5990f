use crate::tiles::{Cell, TileIndex, TilePosition, TilesDomain, TilesError};

impl TilesDomain {
    #[inline]
    pub fn to_index(&self, position: TilePosition) -> TileIndex {
        debug_assert!(self.is_valid(position), "tile {:?} out of map", position);
        position.y as usize * self.width as usize + position.x as usize
    }

    #[inline]
    pub fn from_index(&self, index: TileIndex) -> TilePosition {
        debug_assert!(index < self.cells.len());
        let width = self.width as usize;
        TilePosition::new((index % width) as u16, (index / width) as u16)
    }

    #[inline]
    pub fn is_valid(&self, position: TilePosition) -> bool {
        position.x < self.width && position.y < self.height
    }

    #[inline]
    pub fn is_populated(&self, position: TilePosition) -> bool {
        self.is_valid(position) && self.cells[self.to_index(position)].is_some()
    }

    pub fn get_cell(&self, position: TilePosition) -> Result<&Cell, TilesError> {
        if !self.is_valid(position) {
            return Err(TilesError::InvalidTile { position });
        }
        self.cells[self.to_index(position)]
            .as_ref()
            .ok_or(TilesError::TileNotPopulated { position })
    }

    pub fn get_cell_mut(&mut self, position: TilePosition) -> Result<&mut Cell, TilesError> {
        if !self.is_valid(position) {
            return Err(TilesError::InvalidTile { position });
        }
        let index = self.to_index(position);
        self.cells[index]
            .as_mut()
            .ok_or(TilesError::TileNotPopulated { position })
    }

    /// Row-major, the same order area files are written in.
    pub fn populated_positions(&self) -> impl Iterator<Item = TilePosition> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(index, _)| self.from_index(index))
    }
}
