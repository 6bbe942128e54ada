use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Requests `pool_size` candidate categories and draws `CATEGORY_COUNT` distinct ids.
pub async fn list_category_ids<S, R>(
    source: &S,
    pool_size: usize,
    rng: &mut R,
) -> SetupResult<Vec<CategoryId>, S::Error>
where
    S: CategorySource,
    R: Rng + ?Sized,
{
    let pool = source
        .category_pool(pool_size)
        .await
        .map_err(SetupError::Source)?;

    let mut seen = BTreeSet::new();
    let eligible: Vec<CategoryId> = pool
        .iter()
        .filter(|summary| summary.has_enough_clues())
        .map(|summary| summary.id)
        .filter(|id| seen.insert(*id))
        .collect();
    log::debug!(
        "category pool: {} listed, {} eligible",
        pool.len(),
        eligible.len()
    );

    sample_distinct(&eligible, CATEGORY_COUNT, rng).ok_or(SetupError::NotEnoughCategories {
        available: eligible.len(),
        required: CATEGORY_COUNT,
    })
}

/// Fetches one category and keeps `CLUES_PER_CATEGORY` of its clues, all hidden.
pub async fn fetch_category<S, R>(
    source: &S,
    id: CategoryId,
    rng: &mut R,
) -> SetupResult<Category, S::Error>
where
    S: CategorySource,
    R: Rng + ?Sized,
{
    let detail = source.category(id).await.map_err(SetupError::Source)?;
    let available = detail.clues.len();
    let records = sample_distinct(&detail.clues, CLUES_PER_CATEGORY, rng).ok_or(
        SetupError::NotEnoughClues {
            id,
            available,
            required: CLUES_PER_CATEGORY,
        },
    )?;
    log::debug!("category {}: {:?} ({} clues)", id, detail.title, available);

    Ok(Category::new(
        detail.title,
        records.into_iter().map(Clue::from).collect(),
    ))
}

/// Builds a fresh board: one pool request, then one request per category in turn.
pub async fn setup_game<S, R>(source: &S, rng: &mut R) -> SetupResult<Board, S::Error>
where
    S: CategorySource,
    R: Rng + ?Sized,
{
    let ids = list_category_ids(source, CATEGORY_POOL_SIZE, rng).await?;

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        categories.push(fetch_category(source, id, rng).await?);
    }

    let board = Board::new(categories)?;
    log::debug!("board ready: {:?}", board.titles().collect::<Vec<_>>());
    Ok(board)
}
