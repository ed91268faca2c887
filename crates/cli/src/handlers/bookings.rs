//! Room booking.

use std::io::{BufRead, Write};

use domain::{
    ids,
    models::{NameMatch, NewBooking},
};
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;

/// Books a room for a customer on a date, provided the room exists,
/// the customer resolves unambiguously, and the room is free that day.
pub async fn book_room<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("\tEnter Hotel ID: ")?;
    let room_no: i32 = console.prompt_parse("\tEnter the Room Number: ")?;
    if repos.rooms.find(hotel_id, room_no).await?.is_none() {
        console.say("\tNo Such Room Exists!")?;
        return Ok(());
    }

    let Some(customer_id) = resolve_customer(console, repos).await? else {
        return Ok(());
    };

    let booking_date = console
        .prompt_iso_date("\tEnter the Date you wish to book the room for in YYYY-MM-DD Format: ")?;
    if repos
        .bookings
        .find_for(hotel_id, room_no, booking_date)
        .await?
        .is_some()
    {
        console.say("\tRoom is already Booked")?;
        return Ok(());
    }

    let id = ids::next_id(repos.bookings.max_id().await?);
    let price: f64 = console.prompt_parse("Enter the Price of the room: ")?;
    let occupants: i32 = console.prompt_parse("Enter the number of Occupants: ")?;

    let booking = NewBooking {
        customer_id,
        hotel_id,
        room_no,
        booking_date,
        occupants,
        price,
    };
    repos.bookings.insert(id, &booking).await?;
    console.say("Successfully Booked Room!")?;
    Ok(())
}

/// Resolves the prompted customer name to a single customer id.
///
/// Zero matches abort; a unique match is used directly; an ambiguous
/// name falls back to an explicit id, which must exist. `None` means
/// a diagnostic was already printed.
async fn resolve_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<Option<i32>, CliError> {
    let first = console.prompt("\tEnter the Customer's First Name: ")?;
    let last = console.prompt("\tEnter the Customer's Last Name: ")?;

    match NameMatch::classify(repos.customers.count_by_name(&first, &last).await?) {
        NameMatch::NotFound => {
            console.say("\tNo Customer with that name exists!")?;
            Ok(None)
        }
        NameMatch::Unique => match repos.customers.find_by_name(&first, &last).await? {
            Some(customer) => Ok(Some(customer.customer_id)),
            None => {
                console.say("\tNo Customer with that name exists!")?;
                Ok(None)
            }
        },
        NameMatch::Ambiguous => {
            let id: i32 = console.prompt_parse(
                "\tThere are more than 1 customer with this name. Please specify a Customer ID: ",
            )?;
            if repos.customers.find_by_id(id).await?.is_none() {
                console.say("\tInvalid Customer ID!")?;
                return Ok(None);
            }
            Ok(Some(id))
        }
    }
}
