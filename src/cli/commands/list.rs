//! `orgdex list` command - Browse the company directory
//!
//! Runs the filter, sort, paginate pipeline through a session, so the CLI
//! surface exercises the same view-controller path as `orgdex browse`.

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::table::{
    print_company_csv, print_company_grid, print_company_md, print_company_table,
};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Event, Session, SortField, SortOrder, ViewMode};

/// Sort keys accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Name,
    Location,
    Industry,
    Founded,
}

impl From<SortKey> for SortField {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortField::Name,
            SortKey::Location => SortField::Location,
            SortKey::Industry => SortField::Industry,
            SortKey::Founded => SortField::Founded,
        }
    }
}

/// Sort directions accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderKey {
    Asc,
    Desc,
}

impl From<OrderKey> for SortOrder {
    fn from(key: OrderKey) -> Self {
        match key {
            OrderKey::Asc => SortOrder::Asc,
            OrderKey::Desc => SortOrder::Desc,
        }
    }
}

/// Presentation modes for human output
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewKey {
    Grid,
    Table,
}

impl From<ViewKey> for ViewMode {
    fn from(key: ViewKey) -> Self {
        match key {
            ViewKey::Grid => ViewMode::Grid,
            ViewKey::Table => ViewMode::Table,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    // ========== FILTERING OPTIONS ==========
    // These let users filter without needing awk/grep

    /// Search company names (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by industry (exact match; unknown values fall back to all)
    #[arg(long, short = 'i')]
    pub industry: Option<String>,

    /// Filter by location (exact match; unknown values fall back to all)
    #[arg(long, short = 'l')]
    pub location: Option<String>,

    /// Filter by employee-count bucket (exact match; unknown values fall back to all)
    #[arg(long, short = 'e')]
    pub employees: Option<String>,

    // ========== OUTPUT CONTROL ==========

    /// Sort by field
    #[arg(long, default_value = "name")]
    pub sort: SortKey,

    /// Sort direction
    #[arg(long, short = 'o', default_value = "asc")]
    pub order: OrderKey,

    /// Page to display (1-based, 9 records per page)
    #[arg(long, short = 'p', default_value = "1")]
    pub page: usize,

    /// Presentation mode for human output
    #[arg(long, default_value = "table")]
    pub view: ViewKey,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = super::load_dataset()?;
    let favorites = super::open_favorites(global, &config)?;

    let mut session = Session::new(dataset, favorites);
    if let Some(search) = args.search {
        session.dispatch(Event::Search(search));
    }
    if let Some(industry) = args.industry {
        session.dispatch(Event::FilterIndustry(industry));
    }
    if let Some(location) = args.location {
        session.dispatch(Event::FilterLocation(location));
    }
    if let Some(employees) = args.employees {
        session.dispatch(Event::FilterEmployeeCount(employees));
    }
    session.dispatch(Event::SortBy(args.sort.into()));
    session.dispatch(Event::OrderBy(args.order.into()));
    session.dispatch(Event::SetMode(args.view.into()));
    session.dispatch(Event::GoToPage(args.page));

    let page = session.visible();

    if args.count {
        println!("{}", page.info.total_items);
        return Ok(());
    }

    let format = global.resolve_format(&config);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&page.companies).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&page.companies).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            print_company_csv(&page.companies, session.favorites());
        }
        OutputFormat::Id => {
            for company in &page.companies {
                println!("{}", company.id);
            }
        }
        OutputFormat::Md => {
            print_company_md(&page.companies, session.favorites());
        }
        OutputFormat::Auto | OutputFormat::Tsv => {
            if page.info.total_items == 0 {
                println!("No companies match the current filters.");
                println!();
                println!(
                    "Try adjusting filters, or reset with: {}",
                    style("orgdex list").yellow()
                );
                return Ok(());
            }

            match session.state().mode {
                ViewMode::Grid => print_company_grid(&page.companies, session.favorites()),
                ViewMode::Table => print_company_table(&page.companies, session.favorites()),
            }

            if !global.quiet {
                println!();
                println!(
                    "Showing {} to {} of {} compan{} (page {} of {})",
                    page.info.first_item(),
                    page.info.last_item(),
                    style(page.info.total_items).cyan(),
                    if page.info.total_items == 1 { "y" } else { "ies" },
                    page.info.page,
                    page.info.display_pages()
                );
                let active = session.state().filters.active_count();
                if active > 0 {
                    println!("{} active filter(s)", style(active).yellow());
                }
            }
        }
    }

    Ok(())
}
