//! Check command: validate a page manifest without playing it

use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;

use segplay::page::{Page, Placement};
use segplay::segment::{format_time, PlayerConfig};
use segplay::theme::current_theme;
use segplay::PlayerError;

/// Validation outcome for one placement.
#[derive(Debug, Serialize)]
struct PlacementReport {
    index: usize,
    video_id: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn validate(index: usize, placement: &Placement) -> PlacementReport {
    match PlayerConfig::new(
        &placement.video_id,
        placement.start_secs(),
        placement.end_secs(),
    ) {
        Ok(config) => PlacementReport {
            index,
            video_id: config.video_id().to_string(),
            valid: true,
            start_time: Some(config.start_time()),
            end_time: config.end_time(),
            error: None,
        },
        Err(e) => PlacementReport {
            index,
            video_id: placement.video_id.clone(),
            valid: false,
            start_time: None,
            end_time: None,
            error: Some(PlayerError::from(e).to_string()),
        },
    }
}

fn print_report(report: &PlacementReport) {
    let theme = current_theme();
    if report.valid {
        let start = format_time(report.start_time.unwrap_or(0.0));
        let range = match report.end_time {
            Some(end) => format!("{} - {}", start, format_time(end)),
            None => format!("{} - end", start),
        };
        println!(
            "{} #{} {}  {}",
            theme.success_text("ok"),
            report.index,
            report.video_id,
            theme.secondary_text(&range)
        );
    } else {
        println!(
            "{} #{} {}  {}",
            theme.error_text("invalid"),
            report.index,
            report.video_id,
            theme.error_text(report.error.as_deref().unwrap_or_default())
        );
    }
}

/// Validate every placement and print one line (or one JSON entry) each.
///
/// Fails when any placement is invalid.
pub fn handle(file: &Path, json: bool) -> Result<()> {
    let page = Page::load(file)?;
    let reports: Vec<PlacementReport> = page
        .players
        .iter()
        .enumerate()
        .map(|(i, placement)| validate(i + 1, placement))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        if reports.is_empty() {
            println!("{}", current_theme().secondary_text("No placements found."));
        }
        for report in &reports {
            print_report(report);
        }
    }

    let invalid = reports.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        bail!("{} of {} placement(s) invalid", invalid, reports.len());
    }
    Ok(())
}
