//! `orgdex vocab` command - List the enumerated filter vocabularies
//!
//! The dataset ships the industry, location, and employee-count
//! vocabularies; the revenue buckets are the fixed canonical ordering.

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::entities::REVENUE_BUCKETS;

#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Which vocabulary to list; all of them when omitted
    #[arg(long, short = 'k')]
    pub kind: Option<VocabKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VocabKind {
    Industries,
    Locations,
    Employees,
    Revenue,
}

pub fn run(args: VocabArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let dataset = super::load_dataset()?;

    let revenue: Vec<String> = REVENUE_BUCKETS.iter().map(|b| b.to_string()).collect();
    let sections: Vec<(VocabKind, &str, &[String])> = vec![
        (VocabKind::Industries, "INDUSTRIES", &dataset.industries),
        (VocabKind::Locations, "LOCATIONS", &dataset.locations),
        (VocabKind::Employees, "EMPLOYEE COUNTS", &dataset.employee_counts),
        (VocabKind::Revenue, "REVENUE", &revenue),
    ];
    let selected: Vec<_> = sections
        .into_iter()
        .filter(|(kind, _, _)| args.kind.map_or(true, |k| k == *kind))
        .collect();

    match global.resolve_format(&config) {
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            for (_, title, values) in &selected {
                object.insert(
                    title.to_lowercase().replace(' ', "_"),
                    serde_json::to_value(values).into_diagnostic()?,
                );
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(object))
                    .into_diagnostic()?
            );
        }
        OutputFormat::Id => {
            for (_, _, values) in &selected {
                for value in *values {
                    println!("{}", value);
                }
            }
        }
        _ => {
            for (i, (_, title, values)) in selected.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", style(*title).cyan().bold());
                for value in *values {
                    println!("  {}", value);
                }
            }
        }
    }

    Ok(())
}
