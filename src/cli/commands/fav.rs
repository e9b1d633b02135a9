//! `orgdex fav` command - Favorites management

use clap::Subcommand;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use miette::{IntoDiagnostic, Result};

use crate::cli::table::{print_company_csv, print_company_md, print_company_table};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// List favorite companies
    List(ListArgs),

    /// Toggle a company in the favorites set
    Toggle(ToggleArgs),

    /// Remove every favorite
    Clear(ClearArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {}

#[derive(clap::Args, Debug)]
pub struct ToggleArgs {
    /// Company id, name, or name prefix
    pub query: String,
}

#[derive(clap::Args, Debug)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(cmd: FavCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        FavCommands::List(args) => run_list(args, global),
        FavCommands::Toggle(args) => run_toggle(args, global),
        FavCommands::Clear(args) => run_clear(args, global),
    }
}

fn run_list(_args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = super::load_dataset()?;
    let favorites = super::open_favorites(global, &config)?;

    // Favorites render in dataset order; membership carries no ordering
    let companies: Vec<_> = dataset
        .companies
        .iter()
        .filter(|c| favorites.is_favorite(&c.id))
        .collect();

    match global.resolve_format(&config) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&companies).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&companies).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => {
            for company in &companies {
                println!("{}", company.id);
            }
        }
        OutputFormat::Csv => print_company_csv(&companies, &favorites),
        OutputFormat::Md => print_company_md(&companies, &favorites),
        OutputFormat::Auto | OutputFormat::Tsv => {
            if companies.is_empty() {
                println!("No favorites yet.");
                println!();
                println!(
                    "Add one with: {}",
                    style("orgdex fav toggle <id>").yellow()
                );
                return Ok(());
            }
            print_company_table(&companies, &favorites);
            if !global.quiet {
                println!();
                println!("{} favorite(s)", style(companies.len()).cyan());
            }
        }
    }

    Ok(())
}

fn run_toggle(args: ToggleArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = super::load_dataset()?;
    let mut favorites = super::open_favorites(global, &config)?;

    let Some(company) = dataset.resolve(&args.query) else {
        return Err(miette::miette!(
            help = "list ids with: orgdex list --format id",
            "No company matches {:?}",
            args.query
        ));
    };

    let added = favorites.toggle(&company.id)?;
    if global.quiet {
        return Ok(());
    }
    if added {
        println!(
            "{} Added {} to favorites ({} total)",
            style("♥").red(),
            style(&company.name).bold(),
            favorites.len()
        );
    } else {
        println!(
            "{} Removed {} from favorites ({} remaining)",
            style("✓").green(),
            style(&company.name).bold(),
            favorites.len()
        );
    }

    Ok(())
}

fn run_clear(args: ClearArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let mut favorites = super::open_favorites(global, &config)?;

    if favorites.is_empty() {
        if !global.quiet {
            println!("No favorites to clear.");
        }
        return Ok(());
    }

    if !args.yes {
        if !console::user_attended() {
            return Err(miette::miette!(
                "refusing to clear favorites without --yes in a non-interactive session"
            ));
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove all {} favorite(s)?", favorites.len()))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let removed = favorites.len();
    favorites.clear()?;
    if !global.quiet {
        println!("{} Cleared {} favorite(s)", style("✓").green(), removed);
    }

    Ok(())
}
