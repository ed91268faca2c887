//! Customer registration.

use std::io::{BufRead, Write};

use domain::{ids, models::NewCustomer};
use persistence::repositories::Repositories;

use crate::error::CliError;
use crate::input::Console;

/// Registers a new customer. No preconditions; the id is generated
/// client-side before the details are collected.
pub async fn add_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    repos: &Repositories,
) -> Result<(), CliError> {
    let id = ids::next_id(repos.customers.max_id().await?);

    let first_name = console.prompt("\tEnter your First Name: ")?;
    let last_name = console.prompt("\tEnter your Last Name: ")?;
    let address = console.prompt("\tEnter your Address: ")?;
    let phone: i64 =
        console.prompt_parse("\tEnter your Phone Number with no symbols or spaces: ")?;
    let date_of_birth =
        console.prompt_iso_date("\tEnter your Date of Birth using YYYY-MM-DD format: ")?;
    let gender = console.prompt("\tEnter your Gender: ")?;

    let customer = NewCustomer {
        first_name,
        last_name,
        address,
        phone,
        date_of_birth,
        gender,
    };
    repos.customers.insert(id, &customer).await?;
    console.say("Successfully Added Customer!")?;
    Ok(())
}
