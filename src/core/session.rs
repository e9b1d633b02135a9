//! Session state and the view controller
//!
//! Session state transitions are message-passing: [`reduce`] is a pure
//! function of (state, event) and is testable in isolation. [`Session`]
//! owns the dataset, the favorites set, and the current state; it applies
//! events, normalizes out-of-vocabulary values (fail-open), clamps the page
//! against the live result set, and recomputes the visible page on demand.

use crate::core::dataset::Dataset;
use crate::core::favorites::{Favorites, FavoritesError};
use crate::core::filter::{filter, FilterState, ALL};
use crate::core::page::{paginate, total_pages, PageInfo, PAGE_SIZE};
use crate::core::sort::{sort, SortField, SortOrder};
use crate::entities::Company;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Directory,
    Analytics,
    Favorites,
    Detail,
}

/// Directory presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

/// The full session state
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub view: View,
    pub mode: ViewMode,
    pub filters: FilterState,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// 1-based page into the filtered, sorted result set
    pub page: usize,
    /// Company opened in the detail view
    pub selected: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            view: View::default(),
            mode: ViewMode::default(),
            filters: FilterState::default(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page: 1,
            selected: None,
        }
    }
}

/// A user interaction, fed through [`reduce`]
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Search(String),
    FilterIndustry(String),
    FilterLocation(String),
    FilterEmployeeCount(String),
    ClearFilters,
    SortBy(SortField),
    OrderBy(SortOrder),
    ToggleOrder,
    GoToPage(usize),
    NextPage,
    PrevPage,
    SetMode(ViewMode),
    Navigate(View),
    Open(String),
    Back,
}

/// Pure state transition.
///
/// Any filter or sort change resets the page to 1: a page index is not
/// meaningful across differing result sets. Page arithmetic here is
/// unclamped on the high side; the session clamps against the live result
/// set after every transition.
pub fn reduce(state: &SessionState, event: Event) -> SessionState {
    let mut next = state.clone();
    match event {
        Event::Search(term) => {
            next.filters.search = term;
            next.page = 1;
        }
        Event::FilterIndustry(value) => {
            next.filters.industry = value;
            next.page = 1;
        }
        Event::FilterLocation(value) => {
            next.filters.location = value;
            next.page = 1;
        }
        Event::FilterEmployeeCount(value) => {
            next.filters.employee_count = value;
            next.page = 1;
        }
        Event::ClearFilters => {
            next.filters = FilterState::default();
            next.page = 1;
        }
        Event::SortBy(field) => {
            next.sort_field = field;
            next.page = 1;
        }
        Event::OrderBy(order) => {
            next.sort_order = order;
            next.page = 1;
        }
        Event::ToggleOrder => {
            next.sort_order = next.sort_order.toggled();
            next.page = 1;
        }
        Event::GoToPage(page) => {
            next.page = page.max(1);
        }
        Event::NextPage => {
            next.page += 1;
        }
        Event::PrevPage => {
            next.page = next.page.saturating_sub(1).max(1);
        }
        Event::SetMode(mode) => {
            next.mode = mode;
        }
        Event::Navigate(view) => {
            next.view = view;
            if view != View::Detail {
                next.selected = None;
            }
        }
        Event::Open(id) => {
            next.selected = Some(id);
            next.view = View::Detail;
        }
        Event::Back => {
            next.view = View::Directory;
            next.selected = None;
        }
    }
    next
}

/// The page of records currently visible, with its metadata
pub struct VisiblePage<'a> {
    pub companies: Vec<&'a Company>,
    pub info: PageInfo,
}

/// Orchestrates the filter → sort → paginate pipeline over the session
/// state, and routes favorite toggles through the write-through store.
pub struct Session {
    dataset: Dataset,
    favorites: Favorites,
    state: SessionState,
}

impl Session {
    pub fn new(dataset: Dataset, favorites: Favorites) -> Self {
        Self {
            dataset,
            favorites,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Apply a user event.
    ///
    /// Unrecognized categorical values fail open to "all"; opening an
    /// unknown id is a no-op; the page is clamped into the displayable
    /// range afterwards.
    pub fn dispatch(&mut self, event: Event) {
        let event = match event {
            Event::FilterIndustry(value) => {
                Event::FilterIndustry(self.normalize(value, &self.dataset.industries))
            }
            Event::FilterLocation(value) => {
                Event::FilterLocation(self.normalize(value, &self.dataset.locations))
            }
            Event::FilterEmployeeCount(value) => {
                Event::FilterEmployeeCount(self.normalize(value, &self.dataset.employee_counts))
            }
            Event::Open(id) => {
                if self.dataset.get(&id).is_none() {
                    return;
                }
                Event::Open(id)
            }
            other => other,
        };
        self.state = reduce(&self.state, event);
        self.clamp_page();
    }

    /// Toggle favorite membership for `id`, persisting immediately.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, FavoritesError> {
        self.favorites.toggle(id)
    }

    /// Recompute the filter → sort → paginate pipeline.
    pub fn visible(&self) -> VisiblePage<'_> {
        let filtered = filter(&self.dataset.companies, &self.state.filters);
        let sorted = sort(&filtered, self.state.sort_field, self.state.sort_order);
        let info = PageInfo::new(sorted.len(), self.state.page, PAGE_SIZE);
        let companies = paginate(&sorted, self.state.page, PAGE_SIZE).to_vec();
        VisiblePage { companies, info }
    }

    /// The company open in the detail view, if any.
    pub fn selected(&self) -> Option<&Company> {
        self.state
            .selected
            .as_deref()
            .and_then(|id| self.dataset.get(id))
    }

    /// The favorite companies, in dataset order.
    pub fn favorite_companies(&self) -> Vec<&Company> {
        self.dataset
            .companies
            .iter()
            .filter(|c| self.favorites.is_favorite(&c.id))
            .collect()
    }

    fn normalize(&self, value: String, vocabulary: &[String]) -> String {
        if value == ALL || vocabulary.contains(&value) {
            value
        } else {
            ALL.to_string()
        }
    }

    fn clamp_page(&mut self) {
        let total = filter(&self.dataset.companies, &self.state.filters).len();
        let pages = total_pages(total, PAGE_SIZE).max(1);
        self.state.page = self.state.page.clamp(1, pages);
    }
}
