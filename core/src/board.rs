use alloc::vec::Vec;
use core::ops::Index;

use crate::*;

/// The full grid of one game, `CATEGORY_COUNT` columns of `CLUES_PER_CATEGORY` clues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let well_formed = categories.len() == CATEGORY_COUNT
            && categories
                .iter()
                .all(|category| category.clues().len() == CLUES_PER_CATEGORY);
        if !well_formed {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn validate_pos(&self, pos: CellPos) -> Result<CellPos> {
        if pos.0 < CATEGORY_COUNT && pos.1 < CLUES_PER_CATEGORY {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, pos: CellPos) -> Result<&Clue> {
        let (category, clue) = self.validate_pos(pos)?;
        Ok(&self.categories[category].clues()[clue])
    }

    pub fn showing_at(&self, pos: CellPos) -> Result<Showing> {
        self.clue_at(pos).map(Clue::showing)
    }

    pub fn reveal(&mut self, pos: CellPos) -> Result<RevealOutcome> {
        let (category, clue) = self.validate_pos(pos)?;
        let outcome = self.categories[category]
            .clue_mut(clue)
            .ok_or(GameError::InvalidCoords)?
            .reveal();
        log::trace!("reveal {:?}: {:?}", pos, outcome);
        Ok(outcome)
    }

    /// Every position in row-major order (rows are clues).
    pub fn positions() -> impl Iterator<Item = CellPos> {
        (0..CLUES_PER_CATEGORY)
            .flat_map(|clue| (0..CATEGORY_COUNT).map(move |category| (category, clue)))
    }
}

impl Index<CellPos> for Board {
    type Output = Clue;

    fn index(&self, (category, clue): CellPos) -> &Self::Output {
        &self.categories[category].clues()[clue]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    fn sample_board() -> Board {
        let categories = (0..CATEGORY_COUNT)
            .map(|c| {
                let clues = (0..CLUES_PER_CATEGORY)
                    .map(|q| Clue::new(format!("q{c}-{q}"), format!("a{c}-{q}")))
                    .collect();
                Category::new(format!("Category {c}"), clues)
            })
            .collect();
        Board::new(categories).unwrap()
    }

    #[test]
    fn rejects_wrong_shape() {
        let short = vec![Category::new("Math", vec![Clue::new("1+1", "2")])];
        assert_eq!(Board::new(short), Err(GameError::InvalidBoardShape));

        let mut categories = sample_board().categories().to_vec();
        categories.pop();
        assert_eq!(Board::new(categories), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn rejects_column_with_missing_clue() {
        let mut categories = sample_board().categories().to_vec();
        let clues = categories[5].clues()[..CLUES_PER_CATEGORY - 1].to_vec();
        categories[5] = Category::new("Short", clues);

        assert_eq!(Board::new(categories), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn reveal_only_touches_addressed_cell() {
        let mut board = sample_board();

        assert_eq!(board.reveal((2, 3)).unwrap(), RevealOutcome::ShowedQuestion);
        assert_eq!(board.reveal((2, 3)).unwrap(), RevealOutcome::ShowedAnswer);

        for pos in Board::positions() {
            let expected = if pos == (2, 3) {
                Showing::Answer
            } else {
                Showing::Hidden
            };
            assert_eq!(board.showing_at(pos).unwrap(), expected, "at {:?}", pos);
        }
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        let mut board = sample_board();

        assert_eq!(board.reveal((CATEGORY_COUNT, 0)), Err(GameError::InvalidCoords));
        assert_eq!(
            board.clue_at((0, CLUES_PER_CATEGORY)),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn positions_cover_the_grid_once() {
        let positions: Vec<_> = Board::positions().collect();

        assert_eq!(positions.len(), cell_count());
        assert_eq!(positions[0], (0, 0));
        assert_eq!(positions[1], (1, 0));
        assert_eq!(positions[CATEGORY_COUNT], (0, 1));
    }

    #[test]
    fn index_matches_clue_at() {
        let board = sample_board();
        assert_eq!(board[(4, 1)].question, "q4-1");
        assert_eq!(board.clue_at((4, 1)).unwrap().answer, "a4-1");
    }
}
