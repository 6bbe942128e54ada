use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match the expected categories and clues")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure of a whole game setup, `E` is the error of the category source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError<E> {
    #[error("Category source failed: {0}")]
    Source(E),
    #[error("Only {available} usable categories available, {required} required")]
    NotEnoughCategories { available: usize, required: usize },
    #[error("Category {id} has {available} clues, {required} required")]
    NotEnoughClues {
        id: CategoryId,
        available: usize,
        required: usize,
    },
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type SetupResult<T, E> = core::result::Result<T, SetupError<E>>;
