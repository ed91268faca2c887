//! Room registration.

use std::io::{BufRead, Write};

use domain::models::NewRoom;
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;

/// Adds a room to an existing hotel, unless the (hotel, room) pair is
/// already present.
pub async fn add_room<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("\tEnter the Hotel ID: ")?;
    if repos.hotels.find_by_id(hotel_id).await?.is_none() {
        console.say("\tHotel ID Not Found")?;
        return Ok(());
    }

    let room_no: i32 = console.prompt_parse("\tEnter the Room Number: ")?;
    if repos.rooms.find(hotel_id, room_no).await?.is_some() {
        console.say("\tRoom Already Exists")?;
        return Ok(());
    }

    let room_type = console.prompt("\tEnter the Room Type: ")?;
    let room = NewRoom {
        hotel_id,
        room_no,
        room_type,
    };
    repos.rooms.insert(&room).await?;
    console.say("\tSuccessfully Added Room!")?;
    Ok(())
}
