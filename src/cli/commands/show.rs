//! `orgdex show` command - Company detail view

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::stars;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::Company;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Company id, name, or name prefix
    pub query: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = super::load_dataset()?;
    let favorites = super::open_favorites(global, &config)?;

    let Some(company) = dataset.resolve(&args.query) else {
        return Err(miette::miette!(
            help = "list ids with: orgdex list --format id",
            "No company matches {:?}",
            args.query
        ));
    };

    match global.resolve_format(&config) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(company).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Id => println!("{}", company.id),
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(company).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => print_company_details(company, favorites.is_favorite(&company.id)),
    }

    Ok(())
}

/// Render the detail view for one company.
pub(crate) fn print_company_details(company: &Company, is_favorite: bool) {
    let marker = if is_favorite {
        format!(" {}", style("♥ favorite").red())
    } else {
        String::new()
    };

    println!(
        "{} {}{}",
        company.logo,
        style(&company.name).bold().underlined(),
        marker
    );
    println!(
        "{} {:.1}  {}",
        style(stars(company.rating)).yellow(),
        company.rating,
        style(&company.id).cyan()
    );
    println!();
    println!("{}", company.description);

    println!();
    println!("{}", style("QUICK FACTS").bold());
    println!("  Industry:   {}", company.industry);
    println!("  Location:   {}", company.location);
    println!("  Employees:  {}", company.employee_count);
    println!("  Founded:    {}", company.founded);
    println!("  Revenue:    {}", company.revenue);
    println!("  Website:    {}", style(&company.website).cyan());

    println!();
    println!("{}", style("CONTACT").bold());
    println!("  Email:  {}", company.email);
    println!("  Phone:  {}", company.phone);

    println!();
    println!("{}", style("ABOUT").bold());
    println!("{}", company.about);

    println!();
    println!("{}", style("INDUSTRY INSIGHT").bold());
    println!("{}", company.industry_insight);
}
