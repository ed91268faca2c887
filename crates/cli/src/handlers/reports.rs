//! Read-only reporting actions.
//!
//! Each report collects its parameters, runs one SELECT, and prints the
//! rows as a tab-separated table. Nothing is returned to the menu loop.
//!
//! Reports that take dates read them as `mm-dd-yyyy`; the registration
//! and booking flows use `YYYY-MM-DD`. Each prompt's format is fixed.

use std::io::{BufRead, Write};

use chrono::Local;
use domain::dates;
use persistence::entities::CountRow;
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;
use crate::render;

/// Counts the hotel's rooms with no booking today.
pub async fn number_of_available_rooms<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("Enter hotelID: ")?;
    console.say("Checking today's available rooms.")?;

    let today = Local::now().date_naive();
    let count = repos.rooms.available_count(hotel_id, today).await?;
    render::print_table(console.writer(), &[CountRow { count }])?;
    Ok(())
}

/// Counts the hotel's bookings dated today.
pub async fn number_of_booked_rooms<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("Enter hotelID: ")?;
    console.say("Checking today's booked rooms.")?;

    let today = Local::now().date_naive();
    let count = repos.bookings.booked_count(hotel_id, today).await?;
    render::print_table(console.writer(), &[CountRow { count }])?;
    Ok(())
}

/// Lists the hotel's rooms with no booking in the week starting at the
/// given date (both window ends inclusive).
pub async fn list_hotel_room_bookings_for_a_week<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("Enter hotelID: ")?;
    let start = console.prompt_us_date("Enter initial date (mm-dd-yyyy): ")?;
    let end = dates::week_window_end(start);

    let rooms = repos.rooms.free_for_window(hotel_id, start, end).await?;
    render::print_table(console.writer(), &rooms)?;
    Ok(())
}

/// The k highest-priced bookings in a date range.
pub async fn top_k_highest_room_price_for_a_date_range<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let k: i64 = console.prompt_parse("Enter k: ")?;
    let start = console.prompt_us_date("Enter start date (mm-dd-yyyy): ")?;
    let end = console.prompt_us_date("Enter end date (mm-dd-yyyy): ")?;

    let bookings = repos.bookings.top_priced_in_range(start, end, k).await?;
    render::print_table(console.writer(), &bookings)?;
    Ok(())
}

/// The k highest prices one customer has paid, found by full name.
pub async fn top_k_highest_price_bookings_for_a_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let k: i64 = console.prompt_parse("Enter k: ")?;
    let full_name = console.prompt("Enter customer's full name: ")?;
    let Some((first, last)) = split_full_name(&full_name) else {
        console.say("Enter both a first and last name.")?;
        return Ok(());
    };

    let prices = repos.bookings.top_prices_for_customer(&first, &last, k).await?;
    render::print_table(console.writer(), &prices)?;
    Ok(())
}

/// Prices of one customer's bookings at one hotel over a date range.
pub async fn total_cost_for_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("Enter hotelID: ")?;
    let full_name = console.prompt("Enter customer's full name: ")?;
    let Some((first, last)) = split_full_name(&full_name) else {
        console.say("Enter both a first and last name.")?;
        return Ok(());
    };
    let start = console.prompt_us_date("Enter start date (mm-dd-yyyy): ")?;
    let end = console.prompt_us_date("Enter end date (mm-dd-yyyy): ")?;

    let prices = repos
        .bookings
        .prices_for_customer_at_hotel(hotel_id, &first, &last, start, end)
        .await?;
    render::print_table(console.writer(), &prices)?;
    Ok(())
}

/// All repairs performed by the named maintenance company.
pub async fn list_repairs_made<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let name = console.prompt("Enter maintenance company name: ")?;
    let repairs = repos.repairs.list_by_company_name(&name).await?;
    render::print_table(console.writer(), &repairs)?;
    Ok(())
}

/// The k maintenance companies with the most repairs.
pub async fn top_k_maintenance_company<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let k: i64 = console.prompt_parse("Enter k: ")?;
    let companies = repos.companies.top_by_repair_count(k).await?;
    render::print_table(console.writer(), &companies)?;
    Ok(())
}

/// Repair counts for one room, grouped by calendar year.
pub async fn number_of_repairs_for_each_room_per_year<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("Enter hotelID: ")?;
    let room_no: i32 = console.prompt_parse("Enter roomNo: ")?;

    let counts = repos.repairs.counts_per_year(hotel_id, room_no).await?;
    render::print_table(console.writer(), &counts)?;
    Ok(())
}

/// First and last name from one full-name line: the first two
/// whitespace-separated tokens. Anything after them is ignored.
fn split_full_name(full_name: &str) -> Option<(String, String)> {
    let mut parts = full_name.split_whitespace();
    let first = parts.next()?.to_string();
    let last = parts.next()?.to_string();
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_name() {
        assert_eq!(
            split_full_name("Ann Lee"),
            Some(("Ann".to_string(), "Lee".to_string()))
        );
        assert_eq!(
            split_full_name("  Ann   Lee  "),
            Some(("Ann".to_string(), "Lee".to_string()))
        );
        assert_eq!(split_full_name("Ann"), None);
        assert_eq!(split_full_name(""), None);
    }
}
