use crate::cli::commands::list::{describe_filter, empty_message};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::charts::ChartData;
use crate::core::presentation::PresentationState;
use crate::errors::{AppError, AppResult};
use crate::models::filter::OccurrenceFilter;
use crate::ui::messages::{info, section};
use crate::utils::colors::{RESET, series_color};
use crate::utils::formatting::{bar, bold, format_amount, pad_left, pad_right, percent};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Charts {
        deposit,
        emergency_type,
        json,
    } = cmd
    {
        let filter = OccurrenceFilter::from_ids(*deposit, *emergency_type);
        let state = PresentationState::load_with_filter(&cfg.database, filter)?;
        let charts = state.charts();

        if *json {
            let out = serde_json::to_string_pretty(charts)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        println!("{}", describe_filter(&state));

        if charts.is_empty() {
            info(empty_message(&state));
            return Ok(());
        }

        let name_w = charts
            .bar
            .iter()
            .map(|s| UnicodeWidthStr::width(s.name.as_str()))
            .max()
            .unwrap_or(8)
            .max(8);

        print_stacked_bar(charts, name_w);
        print_pie(charts, name_w);
        print_line(charts);
    }
    Ok(())
}

/// Year rows, one colored segment per deposit, followed by the count grid.
fn print_stacked_bar(charts: &ChartData, name_w: usize) {
    section("Occurrences per deposit and year (stacked bar)", 48);

    let max_total = charts
        .years
        .iter()
        .enumerate()
        .map(|(i, _)| charts.bar.iter().map(|s| s.counts[i]).sum::<u32>())
        .max()
        .unwrap_or(0);

    for (i, year) in charts.years.iter().enumerate() {
        let mut line = String::new();
        let mut total = 0;
        for (n, series) in charts.bar.iter().enumerate() {
            let count = series.counts[i];
            total += count;
            line.push_str(series_color(n));
            line.push_str(&bar(count, max_total, BAR_WIDTH));
            line.push_str(RESET);
        }
        println!("{} {} {}", year, line, total);
    }

    println!();
    let mut header = pad_right("", name_w);
    for year in &charts.years {
        header.push_str(&pad_left(&year.to_string(), 6));
    }
    println!("{}", bold(&header));

    for (n, series) in charts.bar.iter().enumerate() {
        let mut row = format!("{}{}{}", series_color(n), pad_right(&series.name, name_w), RESET);
        for count in &series.counts {
            row.push_str(&pad_left(&count.to_string(), 6));
        }
        println!("{row}");
    }
}

fn print_pie(charts: &ChartData, name_w: usize) {
    section("Years with occurrences per deposit (pie)", 48);

    let total = charts.pie_total();
    let max = charts.pie.iter().map(|s| s.value).max().unwrap_or(0);

    for (n, slice) in charts.pie.iter().enumerate() {
        println!(
            "{}{}{} {:>4} {:>6.1}% {}{}{}",
            series_color(n),
            pad_right(&slice.name, name_w),
            RESET,
            slice.value,
            percent(slice.value, total),
            series_color(n),
            bar(slice.value, max, BAR_WIDTH),
            RESET
        );
    }
}

fn print_line(charts: &ChartData) {
    section("Damage amount by year (line)", 48);

    for (n, series) in charts.line.iter().enumerate() {
        let points: Vec<String> = series
            .points
            .iter()
            .map(|p| format!("({}, {})", p.year, format_amount(p.amount)))
            .collect();
        println!(
            "{}{}{}: {}",
            series_color(n),
            series.name,
            RESET,
            points.join(" → ")
        );
    }
}
