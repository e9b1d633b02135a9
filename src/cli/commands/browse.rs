//! `orgdex browse` command - Interactive directory session
//!
//! Drives the session reducer from a terminal menu loop: every selection
//! becomes an event, and each screen re-renders from the recomputed state.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::show::print_company_details;
use crate::cli::commands::stats::print_dashboard;
use crate::cli::table::{print_company_grid, print_company_table};
use crate::cli::GlobalOpts;
use crate::core::{Config, Event, Session, SortField, View, ViewMode, ALL};

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {}

pub fn run(_args: BrowseArgs, global: &GlobalOpts) -> Result<()> {
    if !console::user_attended() {
        return Err(miette::miette!(
            help = "use `orgdex list` for non-interactive output",
            "browse requires an interactive terminal"
        ));
    }

    let config = Config::load();
    let dataset = super::load_dataset()?;
    let favorites = super::open_favorites(global, &config)?;
    let mut session = Session::new(dataset, favorites);
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let quit = match session.state().view {
            View::Directory => directory_screen(&mut session, &theme)?,
            View::Detail => detail_screen(&mut session, &theme)?,
            View::Analytics => analytics_screen(&mut session, &theme)?,
            View::Favorites => favorites_screen(&mut session, &theme)?,
        };
        if quit {
            return Ok(());
        }
    }
}

enum DirectoryAction {
    NextPage,
    PrevPage,
    Open,
    Toggle,
    Search,
    Industry,
    Location,
    Size,
    ClearFilters,
    Sort,
    ToggleOrder,
    Mode,
    Favorites,
    Analytics,
    Quit,
}

fn directory_screen(session: &mut Session, theme: &ColorfulTheme) -> Result<bool> {
    let page = session.visible();
    let state = session.state();

    println!(
        "{}  {} compan{}, page {} of {}, sorted by {} {}",
        style("DIRECTORY").cyan().bold(),
        style(page.info.total_items).bold(),
        if page.info.total_items == 1 { "y" } else { "ies" },
        page.info.page,
        page.info.display_pages(),
        state.sort_field,
        state.sort_order
    );
    let active = state.filters.active_count();
    if active > 0 {
        println!("{} active filter(s)", style(active).yellow());
    }
    println!();

    if page.companies.is_empty() {
        println!("No companies match the current filters.");
    } else {
        match state.mode {
            ViewMode::Grid => print_company_grid(&page.companies, session.favorites()),
            ViewMode::Table => print_company_table(&page.companies, session.favorites()),
        }
    }

    // Captured before the borrow ends so actions can mutate the session
    let visible: Vec<(String, String)> = page
        .companies
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    let has_next = page.info.page < page.info.display_pages();
    let has_prev = page.info.page > 1;

    let mut actions: Vec<(String, DirectoryAction)> = Vec::new();
    if !visible.is_empty() {
        actions.push(("Open a company".to_string(), DirectoryAction::Open));
        actions.push(("Toggle a favorite".to_string(), DirectoryAction::Toggle));
    }
    if has_next {
        actions.push(("Next page".to_string(), DirectoryAction::NextPage));
    }
    if has_prev {
        actions.push(("Previous page".to_string(), DirectoryAction::PrevPage));
    }
    actions.push(("Search names".to_string(), DirectoryAction::Search));
    actions.push(("Filter by industry".to_string(), DirectoryAction::Industry));
    actions.push(("Filter by location".to_string(), DirectoryAction::Location));
    actions.push(("Filter by company size".to_string(), DirectoryAction::Size));
    if active > 0 {
        actions.push(("Clear filters".to_string(), DirectoryAction::ClearFilters));
    }
    actions.push(("Change sort field".to_string(), DirectoryAction::Sort));
    actions.push(("Reverse sort direction".to_string(), DirectoryAction::ToggleOrder));
    let mode_label = match session.state().mode {
        ViewMode::Grid => "Switch to table view",
        ViewMode::Table => "Switch to grid view",
    };
    actions.push((mode_label.to_string(), DirectoryAction::Mode));
    actions.push((
        format!("Favorites ({})", session.favorites().len()),
        DirectoryAction::Favorites,
    ));
    actions.push(("Analytics".to_string(), DirectoryAction::Analytics));
    actions.push(("Quit".to_string(), DirectoryAction::Quit));

    let labels: Vec<&String> = actions.iter().map(|(label, _)| label).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;

    match actions[choice].1 {
        DirectoryAction::NextPage => session.dispatch(Event::NextPage),
        DirectoryAction::PrevPage => session.dispatch(Event::PrevPage),
        DirectoryAction::Open => {
            let names: Vec<&String> = visible.iter().map(|(_, name)| name).collect();
            let picked = Select::with_theme(theme)
                .with_prompt("Company")
                .items(&names)
                .default(0)
                .interact()
                .into_diagnostic()?;
            session.dispatch(Event::Open(visible[picked].0.clone()));
        }
        DirectoryAction::Toggle => {
            let names: Vec<&String> = visible.iter().map(|(_, name)| name).collect();
            let picked = Select::with_theme(theme)
                .with_prompt("Company")
                .items(&names)
                .default(0)
                .interact()
                .into_diagnostic()?;
            session.toggle_favorite(&visible[picked].0)?;
        }
        DirectoryAction::Search => {
            let term: String = Input::with_theme(theme)
                .with_prompt("Search names (empty to clear)")
                .allow_empty(true)
                .interact_text()
                .into_diagnostic()?;
            session.dispatch(Event::Search(term));
        }
        DirectoryAction::Industry => {
            let value = pick_category(theme, "Industry", &session.dataset().industries)?;
            session.dispatch(Event::FilterIndustry(value));
        }
        DirectoryAction::Location => {
            let value = pick_category(theme, "Location", &session.dataset().locations)?;
            session.dispatch(Event::FilterLocation(value));
        }
        DirectoryAction::Size => {
            let value = pick_category(theme, "Company size", &session.dataset().employee_counts)?;
            session.dispatch(Event::FilterEmployeeCount(value));
        }
        DirectoryAction::ClearFilters => session.dispatch(Event::ClearFilters),
        DirectoryAction::Sort => {
            let fields = [
                SortField::Name,
                SortField::Location,
                SortField::Industry,
                SortField::Founded,
            ];
            let labels: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
            let picked = Select::with_theme(theme)
                .with_prompt("Sort by")
                .items(&labels)
                .default(0)
                .interact()
                .into_diagnostic()?;
            session.dispatch(Event::SortBy(fields[picked]));
        }
        DirectoryAction::ToggleOrder => session.dispatch(Event::ToggleOrder),
        DirectoryAction::Mode => {
            let mode = match session.state().mode {
                ViewMode::Grid => ViewMode::Table,
                ViewMode::Table => ViewMode::Grid,
            };
            session.dispatch(Event::SetMode(mode));
        }
        DirectoryAction::Favorites => session.dispatch(Event::Navigate(View::Favorites)),
        DirectoryAction::Analytics => session.dispatch(Event::Navigate(View::Analytics)),
        DirectoryAction::Quit => return Ok(true),
    }

    Ok(false)
}

fn pick_category(theme: &ColorfulTheme, prompt: &str, vocabulary: &[String]) -> Result<String> {
    let mut options: Vec<String> = vec![ALL.to_string()];
    options.extend(vocabulary.iter().cloned());
    let picked = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()
        .into_diagnostic()?;
    Ok(options[picked].clone())
}

fn detail_screen(session: &mut Session, theme: &ColorfulTheme) -> Result<bool> {
    let Some(company) = session.selected() else {
        // Selection can only vanish if state was driven externally
        session.dispatch(Event::Back);
        return Ok(false);
    };
    let id = company.id.clone();
    let is_favorite = session.favorites().is_favorite(&id);
    print_company_details(company, is_favorite);
    println!();

    let toggle_label = if is_favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };
    let labels = [toggle_label, "Back to directory", "Quit"];
    let choice = Select::with_theme(theme)
        .with_prompt("Action")
        .items(&labels)
        .default(1)
        .interact()
        .into_diagnostic()?;

    match choice {
        0 => {
            session.toggle_favorite(&id)?;
        }
        1 => session.dispatch(Event::Back),
        _ => return Ok(true),
    }
    Ok(false)
}

fn analytics_screen(session: &mut Session, theme: &ColorfulTheme) -> Result<bool> {
    print_dashboard(&session.dataset().companies, None);
    println!();

    let labels = ["Back to directory", "Quit"];
    let choice = Select::with_theme(theme)
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;
    if choice == 0 {
        session.dispatch(Event::Back);
        return Ok(false);
    }
    Ok(true)
}

fn favorites_screen(session: &mut Session, theme: &ColorfulTheme) -> Result<bool> {
    let favorites = session.favorite_companies();
    println!(
        "{}  {} favorite(s)",
        style("FAVORITES").cyan().bold(),
        style(favorites.len()).bold()
    );
    println!();

    let visible: Vec<(String, String)> = favorites
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();
    if visible.is_empty() {
        println!("No favorites yet.");
    } else {
        print_company_table(&favorites, session.favorites());
    }
    println!();

    let mut labels: Vec<&str> = Vec::new();
    if !visible.is_empty() {
        labels.push("Open a favorite");
        labels.push("Remove a favorite");
    }
    labels.push("Back to directory");
    labels.push("Quit");

    let choice = Select::with_theme(theme)
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;

    match labels[choice] {
        "Open a favorite" => {
            let names: Vec<&String> = visible.iter().map(|(_, name)| name).collect();
            let picked = Select::with_theme(theme)
                .with_prompt("Company")
                .items(&names)
                .default(0)
                .interact()
                .into_diagnostic()?;
            session.dispatch(Event::Open(visible[picked].0.clone()));
        }
        "Remove a favorite" => {
            let names: Vec<&String> = visible.iter().map(|(_, name)| name).collect();
            let picked = Select::with_theme(theme)
                .with_prompt("Company")
                .items(&names)
                .default(0)
                .interact()
                .into_diagnostic()?;
            session.toggle_favorite(&visible[picked].0)?;
        }
        "Back to directory" => session.dispatch(Event::Back),
        _ => return Ok(true),
    }
    Ok(false)
}
