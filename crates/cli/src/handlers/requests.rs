//! Manager repair requests.

use std::io::{BufRead, Write};

use domain::{ids, models::NewRepairRequest};
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;

/// Raises a follow-up request on an existing repair. Only the hotel's
/// manager may raise one, and the repair must belong to the named
/// hotel and room.
pub async fn repair_request<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let hotel_id: i32 = console.prompt_parse("\tEnter the Hotel ID: ")?;
    let manager_ssn: i32 = console.prompt_parse("\tEnter your Social Security Number: ")?;
    if repos
        .hotels
        .find_managed(hotel_id, manager_ssn)
        .await?
        .is_none()
    {
        console.say("\tNot a valid user!")?;
        return Ok(());
    }

    let room_no: i32 = console.prompt_parse("\tEnter the Room Number: ")?;
    let repair_id: i32 = console.prompt_parse("\tEnter the Repair ID: ")?;
    if repos
        .repairs
        .find_for(repair_id, hotel_id, room_no)
        .await?
        .is_none()
    {
        console.say("\tNot a Valid Repair, Hotel, Room Number Combination!")?;
        return Ok(());
    }

    let id = ids::next_id(repos.requests.max_id().await?);
    let request_date = console.prompt_iso_date("\tEnter Today's Date in YYYY-MM-DD Format: ")?;
    let description = console.prompt("\tEnter a Description of the Repair Request: ")?;

    let request = NewRepairRequest {
        manager_ssn,
        repair_id,
        request_date,
        description,
    };
    repos.requests.insert(id, &request).await?;
    console.say("\tSuccessfully Made a Repair Request!")?;
    Ok(())
}
