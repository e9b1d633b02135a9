//! Table formatting utilities for CLI list commands
//!
//! This module provides the typed cell values used by the list surfaces
//! and the shared table/grid renderers for pages of companies.

use console::style;

use crate::cli::helpers::{escape_csv, stars, truncate_str};
use crate::core::Favorites;
use crate::entities::Company;

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Company id (cyan colored)
    Id(String),
    /// Plain text, truncated to the column width
    Text(String),
    /// Category value (industry, location, bucket)
    Type(String),
    /// Numeric value, right-aligned
    Number(i64),
    /// Rating with color coding (>=4.5 bold green, >=4.0 green, >=3.0 yellow, else red)
    Rating(f64),
    /// Favorite marker (red heart when set)
    Favorite(bool),
    /// Empty/placeholder
    Empty,
}

impl CellValue {
    /// Format for TSV output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Id(id) => {
                format!("{:<width$}", style(id).cyan(), width = width)
            }
            CellValue::Text(s) => {
                let truncated = truncate_str(s, width.saturating_sub(2));
                format!("{:<width$}", truncated, width = width)
            }
            CellValue::Type(t) => {
                format!(
                    "{:<width$}",
                    truncate_str(t, width.saturating_sub(2)),
                    width = width
                )
            }
            CellValue::Number(n) => {
                format!("{:>width$}", n, width = width)
            }
            CellValue::Rating(rating) => {
                let s = format!("{:.1}", rating);
                let styled = if *rating >= 4.5 {
                    style(s).green().bold()
                } else if *rating >= 4.0 {
                    style(s).green()
                } else if *rating >= 3.0 {
                    style(s).yellow()
                } else {
                    style(s).red()
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Favorite(is_favorite) => {
                let styled = if *is_favorite {
                    style("♥").red()
                } else {
                    style(" ").dim()
                };
                format!("{:<width$}", styled, width = width)
            }
            CellValue::Empty => format!("{:<width$}", "-", width = width),
        }
    }

    /// Format for CSV output (RFC 4180, no colors)
    pub fn format_csv(&self) -> String {
        match self {
            CellValue::Id(id) => escape_csv(id),
            CellValue::Text(s) => escape_csv(s),
            CellValue::Type(t) => escape_csv(t),
            CellValue::Number(n) => n.to_string(),
            CellValue::Rating(rating) => format!("{:.1}", rating),
            CellValue::Favorite(is_favorite) => {
                if *is_favorite {
                    "yes".to_string()
                } else {
                    "no".to_string()
                }
            }
            CellValue::Empty => String::new(),
        }
    }

    /// Format for Markdown output (no colors, escaped pipes)
    pub fn format_md(&self) -> String {
        let raw = match self {
            CellValue::Id(id) => id.clone(),
            CellValue::Text(s) => s.clone(),
            CellValue::Type(t) => t.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Rating(rating) => format!("{:.1}", rating),
            CellValue::Favorite(is_favorite) => {
                if *is_favorite {
                    "♥".to_string()
                } else {
                    String::new()
                }
            }
            CellValue::Empty => "-".to_string(),
        };
        raw.replace('|', "\\|")
    }
}

const COMPANY_COLUMNS: [(&str, usize); 8] = [
    (" ", 2),
    ("ID", 18),
    ("NAME", 26),
    ("INDUSTRY", 14),
    ("LOCATION", 18),
    ("EMPLOYEES", 11),
    ("FOUNDED", 8),
    ("RATING", 6),
];

fn company_row(company: &Company, is_favorite: bool) -> [CellValue; 8] {
    [
        CellValue::Favorite(is_favorite),
        CellValue::Id(company.id.clone()),
        CellValue::Text(company.name.clone()),
        CellValue::Type(company.industry.clone()),
        CellValue::Type(company.location.clone()),
        CellValue::Type(company.employee_count.clone()),
        CellValue::Number(company.founded as i64),
        CellValue::Rating(company.rating),
    ]
}

/// Print a page of companies as a fixed-width table.
pub fn print_company_table(companies: &[&Company], favorites: &Favorites) {
    let mut header = String::new();
    for (title, width) in COMPANY_COLUMNS {
        header.push_str(&format!("{:<width$} ", style(title).bold(), width = width));
    }
    println!("{}", header.trim_end());

    let total_width: usize = COMPANY_COLUMNS.iter().map(|(_, w)| w + 1).sum();
    println!("{}", "-".repeat(total_width));

    for company in companies {
        let mut line = String::new();
        for (cell, (_, width)) in company_row(company, favorites.is_favorite(&company.id))
            .iter()
            .zip(COMPANY_COLUMNS)
        {
            line.push_str(&cell.format_tsv(width));
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}

/// Print a page of companies as card blocks.
pub fn print_company_grid(companies: &[&Company], favorites: &Favorites) {
    for company in companies {
        let marker = if favorites.is_favorite(&company.id) {
            format!(" {}", style("♥").red())
        } else {
            String::new()
        };
        println!(
            "{} {}{}  {} {:.1}",
            company.logo,
            style(&company.name).bold(),
            marker,
            style(stars(company.rating)).yellow(),
            company.rating
        );
        println!(
            "   {} | {} | {} employees | founded {}",
            style(&company.industry).cyan(),
            company.location,
            company.employee_count,
            company.founded
        );
        println!("   {}", style(truncate_str(&company.description, 72)).dim());
        println!();
    }
}

/// Print a page of companies as CSV rows with a header line.
pub fn print_company_csv(companies: &[&Company], favorites: &Favorites) {
    println!("id,name,industry,location,employee_count,founded,revenue,rating,favorite");
    for company in companies {
        println!(
            "{},{},{},{},{},{},{},{:.1},{}",
            escape_csv(&company.id),
            escape_csv(&company.name),
            escape_csv(&company.industry),
            escape_csv(&company.location),
            escape_csv(&company.employee_count),
            company.founded,
            escape_csv(&company.revenue),
            company.rating,
            if favorites.is_favorite(&company.id) { "yes" } else { "no" },
        );
    }
}

/// Print a page of companies as a Markdown table.
pub fn print_company_md(companies: &[&Company], favorites: &Favorites) {
    println!("| | ID | Name | Industry | Location | Employees | Founded | Rating |");
    println!("|---|---|---|---|---|---|---|---|");
    for company in companies {
        let cells = company_row(company, favorites.is_favorite(&company.id));
        let rendered: Vec<String> = cells.iter().map(|c| c.format_md()).collect();
        println!("| {} |", rendered.join(" | "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_cells_are_unstyled() {
        assert_eq!(CellValue::Id("c1".to_string()).format_csv(), "c1");
        assert_eq!(CellValue::Rating(4.25).format_csv(), "4.2");
        assert_eq!(CellValue::Favorite(true).format_csv(), "yes");
        assert_eq!(CellValue::Text("a,b".to_string()).format_csv(), "\"a,b\"");
    }

    #[test]
    fn test_md_cells_escape_pipes() {
        assert_eq!(CellValue::Text("a|b".to_string()).format_md(), "a\\|b");
        assert_eq!(CellValue::Favorite(false).format_md(), "");
    }

    #[test]
    fn test_text_cells_truncate_to_width() {
        let cell = CellValue::Text("a very long company name indeed".to_string());
        let rendered = cell.format_tsv(12);
        assert!(rendered.starts_with("a very ..."));
    }
}
