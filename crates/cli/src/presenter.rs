//! Terminal presentation: job table, detail panel, filter options

use colored::Colorize;
use jobboard_core::application::{FilterOptions, View};
use jobboard_core::domain::JobRecord;
use jobboard_core::port::Presenter;
use tabled::{Table, Tabled};

use crate::output;

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    job_type: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Posted")]
    posted: String,
}

/// Renders to stdout with tabled + colored
pub struct TablePresenter;

impl TablePresenter {
    pub fn render_options(&self, options: &FilterOptions) {
        print_option_group("Levels", &options.levels);
        print_option_group("Types", &options.types);
        print_option_group("Skills", &options.skills);
    }
}

fn print_option_group(label: &str, values: &[String]) {
    output::line(format!("{}:", label).cyan().bold());
    if values.is_empty() {
        output::line(format!("  {}", "(none)".dimmed()));
    }
    for value in values {
        output::line(format!("  {} {}", "•".bold(), value));
    }
}

fn job_rows(view: &View) -> Vec<JobRow> {
    view.iter()
        .enumerate()
        .map(|(i, record)| JobRow {
            position: i + 1,
            title: record.title().to_string(),
            job_type: record.job_type().to_string(),
            level: record.level().to_string(),
            posted: record.posted().to_string(),
        })
        .collect()
}

impl Presenter for TablePresenter {
    fn render(&self, view: &View) {
        if view.is_empty() {
            output::line("No jobs match the current selection".yellow());
            return;
        }

        output::line(Table::new(job_rows(view)));
        output::line(format!("{} job(s)", view.len()).dimmed());
    }

    fn render_detail(&self, record: &JobRecord) {
        let field = |label: &str, value: &str| {
            output::line(format!("  {} {}", format!("{}:", label).bold(), value));
        };

        output::line(record.title().cyan().bold());
        output::blank();
        if let Some(job_number) = record.job_number() {
            field("Job No", job_number);
        }
        field("Title", record.title());
        if let Some(link) = record.page_link() {
            field("Link", link);
        }
        field("Type", record.job_type());
        field("Level", record.level());
        if let Some(estimated) = record.estimated_time() {
            field("Estimated Time", estimated);
        }
        field("Skills", record.skill());
        field("Details", record.detail());

        let posted = if record.posted().is_parsed() {
            format!("{} ({})", record.posted(), record.posted_raw())
        } else {
            record.posted_raw().to_string()
        };
        field("Posted", &posted);
    }
}
