//! Core module - the filter/sort/paginate pipeline, analytics, and session state

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod favorites;
pub mod filter;
pub mod page;
pub mod session;
pub mod sort;

pub use config::Config;
pub use dataset::{Dataset, DatasetError};
pub use favorites::{Favorites, FavoritesError, FavoritesStore, JsonFileStore, MemoryStore};
pub use filter::{filter, FilterState, ALL};
pub use page::{paginate, total_pages, PageInfo, PAGE_SIZE};
pub use session::{reduce, Event, Session, SessionState, View, ViewMode, VisiblePage};
pub use sort::{sort, SortField, SortOrder};
