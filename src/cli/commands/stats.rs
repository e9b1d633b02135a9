//! `orgdex stats` command - Analytics dashboard over the full directory

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::stars;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::analytics::{
    average_rating, founded_timeline, industry_distribution, rating_by_industry,
    revenue_distribution, size_distribution, top_locations, top_rated, CategoryCount, TOP_RATED,
};
use crate::core::Config;
use crate::entities::Company;

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Show only one section
    #[arg(long, short = 's')]
    pub section: Option<SectionKey>,

    /// Write the report to a file instead of stdout (md and json only)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionKey {
    Overview,
    Industries,
    Locations,
    Sizes,
    Revenue,
    Ratings,
    Top,
    Timeline,
}

fn wants(selected: Option<SectionKey>, section: SectionKey) -> bool {
    selected.map_or(true, |s| s == section)
}

pub fn run(args: StatsArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = super::load_dataset()?;
    let records = &dataset.companies;

    match global.resolve_format(&config) {
        OutputFormat::Json => {
            let report = json_report(records);
            emit(serde_json::to_string_pretty(&report).into_diagnostic()?, args.output)
        }
        OutputFormat::Md => emit(markdown_report(records, args.section), args.output),
        _ => {
            if args.output.is_some() {
                return Err(miette::miette!(
                    "writing to a file requires --format md or --format json"
                ));
            }
            print_dashboard(records, args.section);
            Ok(())
        }
    }
}

fn emit(report: String, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, report).into_diagnostic()?;
            Ok(())
        }
        None => {
            println!("{}", report);
            Ok(())
        }
    }
}

fn json_report(records: &[Company]) -> serde_json::Value {
    let average = (average_rating(records) * 100.0).round() / 100.0;
    serde_json::json!({
        "overview": {
            "total_companies": records.len(),
            "industries": industry_distribution(records).len(),
            "locations": top_locations(records).len(),
            "average_rating": average,
        },
        "industry_distribution": industry_distribution(records),
        "top_locations": top_locations(records),
        "size_distribution": size_distribution(records),
        "revenue_distribution": revenue_distribution(records),
        "rating_by_industry": rating_by_industry(records),
        "top_rated": top_rated(records, TOP_RATED)
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "industry": c.industry,
                    "rating": c.rating,
                })
            })
            .collect::<Vec<_>>(),
        "founded_timeline": founded_timeline(records),
    })
}

fn markdown_report(records: &[Company], section: Option<SectionKey>) -> String {
    let mut output = String::new();
    output.push_str("# Directory Analytics\n");

    if wants(section, SectionKey::Overview) {
        output.push_str("\n## Overview\n\n");
        let mut overview = Builder::default();
        overview.push_record(["Metric", "Value"]);
        overview.push_record(["Total companies".to_string(), records.len().to_string()]);
        overview.push_record([
            "Industries".to_string(),
            industry_distribution(records).len().to_string(),
        ]);
        overview.push_record([
            "Average rating".to_string(),
            format!("{:.2}", average_rating(records)),
        ]);
        output.push_str(&overview.build().with(Style::markdown()).to_string());
        output.push('\n');
    }

    let count_sections = [
        (SectionKey::Industries, "Companies by Industry", industry_distribution(records)),
        (SectionKey::Locations, "Top Locations", top_locations(records)),
        (SectionKey::Sizes, "Company Size Distribution", size_distribution(records)),
        (SectionKey::Revenue, "Revenue Distribution", revenue_distribution(records)),
    ];
    for (key, title, counts) in count_sections {
        if !wants(section, key) {
            continue;
        }
        output.push_str(&format!("\n## {}\n\n", title));
        let mut table = Builder::default();
        table.push_record(["Category", "Companies"]);
        for CategoryCount { name, count } in &counts {
            table.push_record([name.clone(), count.to_string()]);
        }
        output.push_str(&table.build().with(Style::markdown()).to_string());
        output.push('\n');
    }

    if wants(section, SectionKey::Ratings) {
        output.push_str("\n## Average Rating by Industry\n\n");
        let mut table = Builder::default();
        table.push_record(["Industry", "Rating", "Companies"]);
        for rating in rating_by_industry(records) {
            table.push_record([
                rating.industry.clone(),
                format!("{:.2}", rating.rating),
                rating.companies.to_string(),
            ]);
        }
        output.push_str(&table.build().with(Style::markdown()).to_string());
        output.push('\n');
    }

    if wants(section, SectionKey::Top) {
        output.push_str("\n## Top Rated Companies\n\n");
        let mut table = Builder::default();
        table.push_record(["Rank", "Company", "Industry", "Rating"]);
        for (rank, company) in top_rated(records, TOP_RATED).iter().enumerate() {
            table.push_record([
                (rank + 1).to_string(),
                company.name.clone(),
                company.industry.clone(),
                format!("{:.1}", company.rating),
            ]);
        }
        output.push_str(&table.build().with(Style::markdown()).to_string());
        output.push('\n');
    }

    if wants(section, SectionKey::Timeline) {
        output.push_str("\n## Companies Founded Over Time\n\n");
        let mut table = Builder::default();
        table.push_record(["Year", "Companies"]);
        for year in founded_timeline(records) {
            table.push_record([year.year.to_string(), year.count.to_string()]);
        }
        output.push_str(&table.build().with(Style::markdown()).to_string());
        output.push('\n');
    }

    output
}

/// Render the human-readable dashboard.
pub(crate) fn print_dashboard(records: &[Company], section: Option<SectionKey>) {
    let width = 64;
    println!("{}", style("Orgdex Directory Analytics").bold().underlined());
    println!("{}", "═".repeat(width));

    if wants(section, SectionKey::Overview) {
        println!();
        println!("{}", style("OVERVIEW").cyan().bold());
        println!("  Total companies:  {}", style(records.len()).bold());
        println!("  Industries:       {}", industry_distribution(records).len());
        println!("  Locations:        {}", top_locations(records).len());
        println!(
            "  Average rating:   {}",
            style(format!("{:.2}", average_rating(records))).bold()
        );
    }

    if wants(section, SectionKey::Industries) {
        print_counts("COMPANIES BY INDUSTRY", &industry_distribution(records));
    }
    if wants(section, SectionKey::Locations) {
        print_counts("TOP LOCATIONS", &top_locations(records));
    }
    if wants(section, SectionKey::Sizes) {
        print_counts("COMPANY SIZE DISTRIBUTION", &size_distribution(records));
    }
    if wants(section, SectionKey::Revenue) {
        print_counts("REVENUE DISTRIBUTION", &revenue_distribution(records));
    }

    if wants(section, SectionKey::Ratings) {
        println!();
        println!("{}", style("AVERAGE RATING BY INDUSTRY").cyan().bold());
        for rating in rating_by_industry(records) {
            println!(
                "  {:<24} {:>5.2}  {}",
                rating.industry,
                rating.rating,
                style(stars(rating.rating)).yellow()
            );
        }
    }

    if wants(section, SectionKey::Top) {
        println!();
        println!("{}", style("TOP RATED COMPANIES").cyan().bold());
        for (rank, company) in top_rated(records, TOP_RATED).iter().enumerate() {
            println!(
                "  {}. {} {} ({})  {} {:.1}",
                rank + 1,
                company.logo,
                style(&company.name).bold(),
                company.industry,
                style(stars(company.rating)).yellow(),
                company.rating
            );
        }
    }

    if wants(section, SectionKey::Timeline) {
        println!();
        println!("{}", style("COMPANIES FOUNDED OVER TIME").cyan().bold());
        let timeline = founded_timeline(records);
        let max = timeline.iter().map(|y| y.count).max().unwrap_or(1);
        for year in timeline {
            println!(
                "  {}  {} {}",
                year.year,
                style(bar(year.count, max, 24)).cyan(),
                year.count
            );
        }
    }

    println!();
    println!("{}", "═".repeat(width));
}

fn print_counts(title: &str, counts: &[CategoryCount]) {
    println!();
    println!("{}", style(title).cyan().bold());
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1);
    for CategoryCount { name, count } in counts {
        println!(
            "  {:<24} {:>4}  {}",
            name,
            count,
            style(bar(*count, max, 24)).cyan()
        );
    }
}

fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count * width).div_ceil(max).min(width);
    "█".repeat(len)
}
