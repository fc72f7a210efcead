//! Command implementations.

use chrono::NaiveDate;

use agendash_api::DashboardClient;
use agendash_core::{FormatOptions, GridFormatter, MonthCursor};
use agendash_panel::{CATEGORY_PLACEHOLDER, CalendarPanel, EventForm};

use crate::error::{ClientError, ClientResult};

/// Renders the month grid and the upcoming list.
///
/// Fetch failures degrade to an emptier view: the grid always renders,
/// and whatever sources did load are merged in.
pub async fn show(
    client: &DashboardClient,
    cursor: MonthCursor,
    today: NaiveDate,
    limit: usize,
) -> ClientResult<()> {
    let mut panel = CalendarPanel::new(cursor);
    panel.refresh(client, today).await;

    let formatter = GridFormatter::new(FormatOptions {
        upcoming_limit: limit,
        ..FormatOptions::default()
    });

    print!("{}", formatter.format_month(&panel.grid(), panel.events()));
    println!();
    print!("{}", formatter.format_upcoming(panel.events(), cursor));

    if let Some(error) = panel.last_error() {
        eprintln!("warning: {}", error);
    }
    Ok(())
}

/// Prints the upcoming list, as text or JSON.
pub async fn upcoming(
    client: &DashboardClient,
    cursor: MonthCursor,
    today: NaiveDate,
    limit: usize,
    json: bool,
) -> ClientResult<()> {
    let mut panel = CalendarPanel::new(cursor);
    panel.refresh(client, today).await;

    if json {
        let entries: Vec<_> = agendash_core::upcoming_events(panel.events(), limit).collect();
        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|e| ClientError::Api(format!("failed to encode output: {}", e)))?;
        println!("{}", rendered);
    } else {
        let formatter = GridFormatter::new(FormatOptions {
            upcoming_limit: limit,
            ..FormatOptions::default()
        });
        print!("{}", formatter.format_upcoming(panel.events(), cursor));
    }

    if let Some(error) = panel.last_error() {
        eprintln!("warning: {}", error);
    }
    Ok(())
}

/// Creates a calendar event from command-line arguments.
///
/// The arguments run through the same validation as the panel form, so
/// the CLI rejects exactly what the modal would.
pub async fn add(
    client: &DashboardClient,
    date: String,
    title: String,
    category: String,
    time: Option<String>,
    memo: Option<String>,
) -> ClientResult<()> {
    let form = EventForm {
        date,
        title,
        category: if category.trim().is_empty() {
            CATEGORY_PLACEHOLDER.to_string()
        } else {
            category
        },
        time: time.unwrap_or_default(),
        memo: memo.unwrap_or_default(),
    };

    let draft = form.validate()?;
    client.create_event(&draft.to_payload()).await?;
    println!("created event on {}", draft.date);
    Ok(())
}

/// Deletes a calendar event by id.
pub async fn remove(client: &DashboardClient, id: i64) -> ClientResult<()> {
    client.delete_event(id).await?;
    println!("deleted event {}", id);
    Ok(())
}
