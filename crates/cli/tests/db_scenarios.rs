//! End-to-end scenario tests against a real PostgreSQL database.
//!
//! Handlers are driven through a scripted console, exactly as an
//! operator would drive them. All tests are `#[ignore]`d: run them
//! with `cargo test -- --ignored` and a `TEST_DATABASE_URL` pointing
//! at a scratch database.

mod common;

use chrono::NaiveDate;
use common::{
    console_output, count_rows, create_test_pool, reset_database, scripted_console, seed_booking,
    seed_company, seed_customer, seed_hotel, seed_room,
};
use hotel_ops_cli::handlers::{bookings, customers, repairs, reports, rooms};
use persistence::repositories::Repositories;

#[tokio::test]
#[ignore = "requires a running PostgreSQL server"]
async fn failed_precondition_inserts_no_row() {
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    let repos = Repositories::new(pool.clone());

    // No hotel 42 exists, so the room details are never reached.
    let mut console = scripted_console(&["42"]);
    rooms::add_room(&mut console, &repos).await.unwrap();

    let out = console_output(console);
    assert!(out.contains("Hotel ID Not Found"), "output was: {out}");
    assert_eq!(count_rows(&pool, "room").await, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server"]
async fn empty_table_assigns_id_zero() {
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    let repos = Repositories::new(pool.clone());

    let mut console = scripted_console(&[
        "Ann",
        "Lee",
        "12 Harbor Street",
        "5551234567",
        "1990-01-01",
        "F",
    ]);
    customers::add_customer(&mut console, &repos).await.unwrap();
    assert_eq!(repos.customers.max_id().await.unwrap(), Some(0));

    let mut console = scripted_console(&[
        "Bob",
        "Lee",
        "13 Harbor Street",
        "5551234568",
        "1991-02-02",
        "M",
    ]);
    customers::add_customer(&mut console, &repos).await.unwrap();
    assert_eq!(repos.customers.max_id().await.unwrap(), Some(1));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server"]
async fn double_booking_same_day_is_rejected() {
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    let repos = Repositories::new(pool.clone());

    seed_hotel(&pool, 1, 100).await;
    seed_room(&pool, 1, 101).await;
    seed_customer(&repos, 0, "Ann", "Lee").await;
    seed_booking(
        &pool,
        0,
        0,
        1,
        101,
        NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        150.0,
    )
    .await;

    let mut console = scripted_console(&["1", "101", "Ann", "Lee", "2026-08-20"]);
    bookings::book_room(&mut console, &repos).await.unwrap();

    let out = console_output(console);
    assert!(out.contains("Room is already Booked"), "output was: {out}");
    assert_eq!(count_rows(&pool, "booking").await, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server"]
async fn uncertified_company_cannot_repair() {
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    let repos = Repositories::new(pool.clone());

    seed_hotel(&pool, 1, 100).await;
    seed_room(&pool, 1, 101).await;
    // The company exists but is not certified.
    seed_company(&pool, 7, "FixItAll", false).await;

    let mut console = scripted_console(&["1", "101", "7"]);
    repairs::add_repair(&mut console, &repos).await.unwrap();

    let out = console_output(console);
    assert!(
        out.contains("Maintenance Company Does Not Exist!"),
        "output was: {out}"
    );
    assert_eq!(count_rows(&pool, "repair").await, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server"]
async fn ambiguous_customer_name_requires_a_valid_id() {
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    let repos = Repositories::new(pool.clone());

    seed_hotel(&pool, 1, 100).await;
    seed_room(&pool, 1, 101).await;
    seed_customer(&repos, 0, "John", "Smith").await;
    seed_customer(&repos, 1, "John", "Smith").await;

    // Two John Smiths: the handler asks for an id, and 9999 is not one.
    let mut console = scripted_console(&["1", "101", "John", "Smith", "9999"]);
    bookings::book_room(&mut console, &repos).await.unwrap();

    let out = console_output(console);
    assert!(out.contains("Please specify a Customer ID"), "output was: {out}");
    assert!(out.contains("Invalid Customer ID!"), "output was: {out}");
    assert_eq!(count_rows(&pool, "booking").await, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server"]
async fn booked_price_round_trips_to_the_top_k_report() {
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    let repos = Repositories::new(pool.clone());

    seed_hotel(&pool, 1, 100).await;
    seed_room(&pool, 1, 101).await;

    let mut console = scripted_console(&[
        "Ann",
        "Lee",
        "12 Harbor Street",
        "5551234567",
        "1990-01-01",
        "F",
    ]);
    customers::add_customer(&mut console, &repos).await.unwrap();

    let mut console = scripted_console(&["1", "101", "Ann", "Lee", "2026-08-20", "150", "2"]);
    bookings::book_room(&mut console, &repos).await.unwrap();
    assert!(console_output(console).contains("Successfully Booked Room!"));

    let mut console = scripted_console(&["1", "Ann Lee"]);
    reports::top_k_highest_price_bookings_for_a_customer(&mut console, &repos)
        .await
        .unwrap();

    let out = console_output(console);
    assert!(out.contains("price\n150"), "output was: {out}");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL server"]
async fn week_listing_excludes_rooms_booked_inside_the_window() {
    let pool = create_test_pool().await;
    reset_database(&pool).await;
    let repos = Repositories::new(pool.clone());

    seed_hotel(&pool, 1, 100).await;
    seed_room(&pool, 1, 101).await;
    seed_customer(&repos, 0, "Ann", "Lee").await;
    // Room 101 is booked only on 2026-08-20.
    seed_booking(
        &pool,
        0,
        0,
        1,
        101,
        NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        150.0,
    )
    .await;

    // Window 08-17..08-24 covers the booking: the room is not free.
    let mut console = scripted_console(&["1", "08-17-2026"]);
    reports::list_hotel_room_bookings_for_a_week(&mut console, &repos)
        .await
        .unwrap();
    let out = console_output(console);
    assert!(!out.contains("101"), "output was: {out}");

    // A window entirely before the booking lists the room as free.
    let mut console = scripted_console(&["1", "07-01-2026"]);
    reports::list_hotel_room_bookings_for_a_week(&mut console, &repos)
        .await
        .unwrap();
    let out = console_output(console);
    assert!(out.contains("101"), "output was: {out}");
}
