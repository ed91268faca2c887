//! Customer repository for database operations.

use domain::models::NewCustomer;
use sqlx::PgPool;

use crate::entities::CustomerEntity;

/// Repository for customer-related database operations.
#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Highest customer id currently in use, `None` on an empty table.
    pub async fn max_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(customerid) FROM customer")
            .fetch_one(&self.pool)
            .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CustomerEntity>, sqlx::Error> {
        sqlx::query_as::<_, CustomerEntity>(
            r#"
            SELECT customerid AS customer_id, fname, lname, address, phno, dob, gender
            FROM customer
            WHERE customerid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Number of customers with exactly this first and last name.
    pub async fn count_by_name(&self, first: &str, last: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM customer WHERE fname = $1 AND lname = $2",
        )
        .bind(first)
        .bind(last)
        .fetch_one(&self.pool)
        .await
    }

    /// The single customer with this name, when the name is unambiguous.
    pub async fn find_by_name(
        &self,
        first: &str,
        last: &str,
    ) -> Result<Option<CustomerEntity>, sqlx::Error> {
        sqlx::query_as::<_, CustomerEntity>(
            r#"
            SELECT customerid AS customer_id, fname, lname, address, phno, dob, gender
            FROM customer
            WHERE fname = $1 AND lname = $2
            "#,
        )
        .bind(first)
        .bind(last)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a customer under a client-generated id.
    pub async fn insert(&self, id: i32, customer: &NewCustomer) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO customer (customerid, fname, lname, address, phno, dob, gender)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.address)
        .bind(customer.phone)
        .bind(customer.date_of_birth)
        .bind(&customer.gender)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
