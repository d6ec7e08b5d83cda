//! CLI presentation: text and json formatters for the apps listing.

use crate::error::ApiError;
use crate::manifest::AppSummary;
use serde_json::json;
use std::fmt;
use std::str::FromStr;

/// Output encoding of the apps listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppsFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for AppsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(AppsFormat::Text),
            "json" => Ok(AppsFormat::Json),
            _ => Err(format!(
                "Invalid apps format: {} (must be 'text' or 'json')",
                s
            )),
        }
    }
}

impl fmt::Display for AppsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppsFormat::Text => "text",
            AppsFormat::Json => "json",
        })
    }
}

/// Render the apps listing in `format`
pub fn format_apps(summaries: &[AppSummary], format: AppsFormat) -> Result<String, ApiError> {
    match format {
        AppsFormat::Text => Ok(format_apps_text(summaries)),
        AppsFormat::Json => format_apps_json(summaries),
    }
}

pub fn format_apps_text(summaries: &[AppSummary]) -> String {
    if summaries.is_empty() {
        return "No applications declared.\n".to_string();
    }
    let width = summaries
        .iter()
        .map(|s| s.app.as_str().chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for summary in summaries {
        output.push_str(&format!(
            "{:<width$}  {:<6} paths={} mounts={} views={}\n",
            summary.app.as_str(),
            if summary.root { "(root)" } else { "" },
            summary.paths,
            summary.mounts,
            summary.views,
        ));
    }
    output.push_str(&format!("\nTotal: {} application(s)\n", summaries.len()));
    output
}

pub fn format_apps_json(summaries: &[AppSummary]) -> Result<String, ApiError> {
    let out = json!({ "apps": summaries, "total": summaries.len() });
    let mut rendered = serde_json::to_string_pretty(&out)?;
    rendered.push('\n');
    Ok(rendered)
}
