use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::grid::{Driver, Grid, Team};
use crate::ranking::ranked;
use crate::scoring::{RaceContext, ScoreResult};
use crate::weather::WeatherSnapshot;

const TITLE: &str = "======= F1 Grand Prix Predictor =======";
const NOT_SPECIFIED: &str = "Not specified";

/// A driver with its team, in predicted finishing order, for display
pub struct RankedDriver<'a> {
    pub driver: &'a Driver,
    pub team: &'a Team,
}

/// Pair every driver with its team, ordered by predicted position
pub fn ranked_rows(grid: &Grid) -> Vec<RankedDriver<'_>> {
    ranked(&grid.drivers)
        .into_iter()
        .map(|driver| RankedDriver {
            driver,
            team: grid.team_of(driver),
        })
        .collect()
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a cell to fit its column, accounting for Unicode
fn truncate_cell(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Left-align in a fixed-width column, truncating first. Counts chars, not bytes.
fn pad_cell(text: &str, width: usize) -> String {
    let cell = truncate_cell(text, width);
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

/// Format a percentage share with two decimals: "12.34%"
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.2}%", percentage)
}

/// One-line weather summary
pub fn format_weather(weather: &WeatherSnapshot) -> String {
    format!(
        "{}, {:.1}C, {:.0}% humidity, {:.1} km/h wind, {}% chance of rain ({})",
        weather.description,
        weather.temperature_c,
        weather.humidity_pct,
        weather.wind_speed_kph,
        weather.rain_probability,
        weather.source
    )
}

/// Title block: track, condition and, when known, weather
pub fn format_header(ctx: &RaceContext, use_colors: bool) -> String {
    let track = ctx.track().unwrap_or(NOT_SPECIFIED);
    let condition = ctx
        .condition
        .map(|c| c.to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let mut lines = Vec::new();
    if use_colors {
        lines.push(TITLE.bold().to_string());
    } else {
        lines.push(TITLE.to_string());
    }
    lines.push(String::new());
    lines.push(format!("Track: {}", track));
    lines.push(format!("Condition: {}", condition));
    if let Some(ref weather) = ctx.weather {
        lines.push(format!("Weather: {}", format_weather(weather)));
    }
    lines.join("\n")
}

/// "The predicted winner is: ..." line
pub fn format_winner(winner: &RankedDriver, use_colors: bool) -> String {
    let percentage = format!("{:.2}", winner.driver.percentage);
    if use_colors {
        format!(
            "The predicted winner is: {} (with a {}% probability)",
            winner.driver.name.bold().green(),
            percentage.bold()
        )
    } else {
        format!(
            "The predicted winner is: {} (with a {}% probability)",
            winner.driver.name, percentage
        )
    }
}

struct Column {
    title: &'static str,
    width: usize,
}

static FULL_COLUMNS: [Column; 7] = [
    Column { title: "Pos", width: 3 },
    Column { title: "Driver", width: 13 },
    Column { title: "Team", width: 14 },
    Column { title: "Points", width: 6 },
    Column { title: "Probability", width: 11 },
    Column { title: "Number", width: 6 },
    Column { title: "Country", width: 13 },
];

/// Pos, Driver, Team, Points, Probability
const COMPACT_COLUMN_COUNT: usize = 5;

fn row_width(columns: &[Column]) -> usize {
    // "| " + cells joined by " | " + " |"
    let cells: usize = columns.iter().map(|c| c.width).sum();
    cells + 3 * columns.len().saturating_sub(1) + 4
}

/// Format the predicted grid as a bordered table.
/// Narrow terminals drop the Number and Country columns.
pub fn format_grid_table(rows: &[RankedDriver], use_colors: bool) -> String {
    format_grid_table_for_width(rows, use_colors, get_terminal_width())
}

fn format_grid_table_for_width(
    rows: &[RankedDriver],
    use_colors: bool,
    term_width: Option<usize>,
) -> String {
    if rows.is_empty() {
        return "No drivers configured.".to_string();
    }

    let compact = matches!(term_width, Some(w) if w < row_width(&FULL_COLUMNS));
    let columns = if compact {
        &FULL_COLUMNS[..COMPACT_COLUMN_COUNT]
    } else {
        &FULL_COLUMNS[..]
    };

    let rule = "-".repeat(row_width(columns));
    let header = columns
        .iter()
        .map(|c| pad_cell(c.title, c.width))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![rule.clone(), format!("| {} |", header), rule.clone()];

    for (idx, row) in rows.iter().enumerate() {
        let cells = [
            format!("P{}", idx + 1),
            row.driver.name.clone(),
            row.team.name.clone(),
            row.driver.points.to_string(),
            format_percentage(row.driver.percentage),
            format!("#{}", row.driver.number),
            row.driver.country.clone(),
        ];

        let rendered = cells
            .iter()
            .zip(columns)
            .enumerate()
            .map(|(col, (text, column))| {
                let padded = pad_cell(text, column.width);
                if !use_colors {
                    return padded;
                }
                match col {
                    0 => padded.dimmed().to_string(),
                    1 if idx == 0 => padded.bold().green().to_string(),
                    1 => padded.bold().to_string(),
                    4 => padded.cyan().to_string(),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");

        lines.push(format!("| {} |", rendered));
    }

    lines.push(rule);
    lines.join("\n")
}

/// Full report: header, winner and grid table
pub fn format_results(grid: &Grid, ctx: &RaceContext, use_colors: bool) -> String {
    let rows = ranked_rows(grid);
    let mut out = format_header(ctx, use_colors);
    out.push_str("\n\n");

    if let Some(winner) = rows.first() {
        out.push_str(&format_winner(winner, use_colors));
        out.push_str("\n\n");
    }

    out.push_str("Predicted Grid:\n");
    out.push_str(&format_grid_table(&rows, use_colors));
    out
}

/// Format the grid as tab-separated values for scripting
/// Columns: pos, driver, team, points, percentage, number, country (no headers, no colors)
pub fn format_tsv(rows: &[RankedDriver]) -> String {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            format!(
                "{}\t{}\t{}\t{}\t{:.2}\t{}\t{}",
                idx + 1,
                row.driver.name,
                row.team.name,
                row.driver.points,
                row.driver.percentage,
                row.driver.number,
                row.driver.country
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-rule point breakdown for one driver (verbose mode)
pub fn format_breakdown(row: &RankedDriver, result: &ScoreResult) -> String {
    let mut lines = vec![format!(
        "P{} {} (#{}, {}): {} points",
        row.driver.predicted_position,
        row.driver.name,
        row.driver.number,
        row.team.name,
        result.points
    )];

    if result.breakdown.factors.is_empty() {
        lines.push("  (no bonuses)".to_string());
    }

    for factor in &result.breakdown.factors {
        let line = format!(
            "  {:<15} {:>+4}  {}",
            factor.label,
            factor.delta(),
            factor.description
        );
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
