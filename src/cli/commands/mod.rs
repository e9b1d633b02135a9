//! CLI command implementations

pub mod browse;
pub mod completions;
pub mod fav;
pub mod list;
pub mod show;
pub mod stats;
pub mod vocab;

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{Config, Dataset, Favorites, JsonFileStore};

/// Load and validate the embedded dataset.
pub(crate) fn load_dataset() -> Result<Dataset> {
    Ok(Dataset::load()?)
}

/// Open the favorites set at the resolved path.
///
/// Resolution order: `--favorites` flag (or ORGDEX_FAVORITES), config file,
/// then the per-user data directory.
pub(crate) fn open_favorites(global: &GlobalOpts, config: &Config) -> Result<Favorites> {
    let path = global
        .favorites
        .clone()
        .or_else(|| config.favorites.clone())
        .or_else(JsonFileStore::default_path)
        .ok_or_else(|| miette::miette!("could not determine a favorites path"))?;
    Ok(Favorites::load(Box::new(JsonFileStore::new(path))))
}
