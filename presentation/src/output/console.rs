//! Console output formatter for provisioning results

use colored::Colorize;
use serde::Serialize;
use venue_application::{BatchReport, GroupSummary, ProvisionVenueOutput};
use venue_domain::Profile;

/// Formats provisioning results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colors on or off for everything printed afterwards
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Format the result of a full venue setup
    pub fn format_setup(output: &ProvisionVenueOutput) -> String {
        let mut text = String::new();

        text.push_str(&Self::header(&format!("Venue {}", output.venue_id)));
        text.push('\n');

        text.push_str(&Self::section_header("Path groups"));
        text.push_str(&Self::group_lines(&output.path_groups));

        if !output.landing_pages_updated.is_empty() {
            text.push_str(&format!("\n{}\n", "Landing pages updated:".cyan().bold()));
            for id in &output.landing_pages_updated {
                text.push_str(&format!("  * {}\n", id));
            }
        }

        text.push_str(&Self::section_header("Role groups"));
        text.push_str(&Self::group_lines(&output.role_groups));

        if !output.recruitment_groups.is_empty() {
            text.push_str(&Self::section_header("Recruitment groups"));
            text.push_str(&Self::group_lines(&output.recruitment_groups));
        }

        text.push_str(&format!(
            "\n{} {}\n",
            "Groups created:".cyan().bold(),
            output.created_count()
        ));
        text.push_str(&Self::footer());

        text
    }

    /// Format the outcome of a paper group batch
    pub fn format_batch(report: &BatchReport) -> String {
        let mut text = String::new();

        let summary = format!(
            "{}/{} submissions provisioned, {} groups posted",
            report.succeeded.len(),
            report.total(),
            report.posted.len()
        );
        if report.is_complete() {
            text.push_str(&format!("{} {}\n", "v".green(), summary));
        } else {
            text.push_str(&format!("{} {}\n", "x".red(), summary));
            text.push_str(&format!("\n{}\n", "Failed submissions:".red().bold()));
            for failure in &report.failed {
                text.push_str(&format!("  #{}: {}\n", failure.number, failure.error));
            }
        }

        text
    }

    /// Format a titled list of ensured groups
    pub fn format_groups(title: &str, groups: &[GroupSummary]) -> String {
        format!("{}\n{}", title.cyan().bold(), Self::group_lines(groups))
    }

    pub fn format_profile(profile: &Profile) -> String {
        let mut text = format!("{} {}\n", "Profile:".cyan().bold(), profile.id);
        for email in &profile.content.emails {
            text.push_str(&format!("  {} {}\n", "email".dimmed(), email));
        }
        text
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn group_lines(groups: &[GroupSummary]) -> String {
        groups
            .iter()
            .map(|group| {
                if group.created {
                    format!("  {} {}\n", "+".green(), group.id)
                } else {
                    format!("  {} {}\n", "=".dimmed(), group.id.dimmed())
                }
            })
            .collect()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
