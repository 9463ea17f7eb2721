#[cfg(feature = "ssr")]
mod db_impl {
    use crate::models::customer::{Customer, CustomerRequest};
    use crate::models::product::Product;
    use crate::models::review::{Review, ReviewRequest};
    use leptos::logging::{self, log};
    use rusqlite::{params, Connection, Error};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use uuid::Uuid;

    #[cfg(test)]
    mod tests {
        use super::*;

        // Helper function to create test database
        async fn create_test_db() -> Database {
            log!("[TEST] Creating in-memory test database");
            let db = Database::new(":memory:").unwrap();
            db.create_schema().await.unwrap();
            log!("[TEST] Database schema created");
            db
        }

        fn customer_request(name: &str, email: &str) -> CustomerRequest {
            CustomerRequest {
                name: name.into(),
                email: email.into(),
                phone: Some("+1 555 0100".into()),
            }
        }

        // Test database schema creation
        #[tokio::test]
        async fn test_schema_creation() {
            log!("[TEST] Starting test_schema_creation");
            let db = create_test_db().await;

            // Verify tables exist
            let conn = db.conn.lock().await;
            let mut stmt = conn
                .prepare("SELECT name FROM sqlite_master WHERE type='table'")
                .unwrap();
            let tables: Vec<String> = stmt
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<_, _>>()
                .unwrap();

            assert!(tables.contains(&"customers".to_string()));
            assert!(tables.contains(&"products".to_string()));
            assert!(tables.contains(&"reviews".to_string()));
        }

        // The catalog is seeded once; re-running schema creation must not
        // duplicate it.
        #[tokio::test]
        async fn test_catalog_is_seeded() {
            let db = create_test_db().await;

            let products = db.list_products().await.unwrap();
            assert!(!products.is_empty());
            let names: Vec<_> = products.iter().map(|p| p.name.clone()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted);

            db.create_schema().await.unwrap();
            assert_eq!(db.list_products().await.unwrap().len(), products.len());
        }

        // Customer lifecycle tests
        #[tokio::test]
        async fn test_customer_lifecycle() {
            log!("[TEST] Starting test_customer_lifecycle");
            let db = create_test_db().await;

            // Test insertion
            let created = db
                .insert_customer(&customer_request("Ada Lovelace", "ada@example.com"))
                .await
                .unwrap();
            assert!(!created.id.is_empty());
            assert!(!created.created_at.is_empty());
            log!("[TEST] Customer insertion - PASSED");

            // Test retrieval
            let listed = db.list_customers().await.unwrap();
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0], created);
            log!("[TEST] Customer retrieval - PASSED");

            // Test replace-on-edit
            let updated = db
                .update_customer(
                    &created.id,
                    &CustomerRequest {
                        name: "Ada King".into(),
                        email: "ada@example.com".into(),
                        phone: None,
                    },
                )
                .await
                .unwrap()
                .expect("customer should exist");
            assert_eq!(updated.name, "Ada King");
            assert_eq!(updated.phone, None);
            assert_eq!(updated.created_at, created.created_at);
            log!("[TEST] Customer update - PASSED");

            // Unknown ids report not-found rather than inserting
            let missing = db
                .update_customer("no-such-id", &customer_request("X", "x@example.com"))
                .await
                .unwrap();
            assert!(missing.is_none());

            // Test deletion
            db.delete_customer(&created.id).await.unwrap();
            assert!(db.list_customers().await.unwrap().is_empty());
            log!("[TEST] Customer deletion - PASSED");
        }

        // Review lifecycle tests
        #[tokio::test]
        async fn test_review_lifecycle() {
            log!("[TEST] Starting test_review_lifecycle");
            let db = create_test_db().await;
            let reviewer = db
                .insert_customer(&customer_request("Grace Hopper", "grace@example.com"))
                .await
                .unwrap();

            let created = db
                .insert_review(&ReviewRequest {
                    product_id: "prod-pour-over-kettle".into(),
                    customer_id: reviewer.id.clone(),
                    rating: 4,
                    comment: "Pours like a dream".into(),
                })
                .await
                .unwrap();
            assert_eq!(created.rating, 4);
            assert_eq!(created.customer_name.as_deref(), Some("Grace Hopper"));
            log!("[TEST] Review insertion - PASSED");

            let listed = db.list_reviews("prod-pour-over-kettle").await.unwrap();
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0], created);

            // Scoped to the product that was reviewed
            assert!(db
                .list_reviews("prod-throw-blanket")
                .await
                .unwrap()
                .is_empty());
            log!("[TEST] Review retrieval - PASSED");

            db.delete_review(&created.id).await.unwrap();
            assert!(db
                .list_reviews("prod-pour-over-kettle")
                .await
                .unwrap()
                .is_empty());
            log!("[TEST] Review deletion - PASSED");
        }

        // Reviews outlive their reviewer; the joined name just goes away.
        #[tokio::test]
        async fn test_reviewer_name_falls_back_after_customer_deletion() {
            let db = create_test_db().await;
            let reviewer = db
                .insert_customer(&customer_request("Grace Hopper", "grace@example.com"))
                .await
                .unwrap();
            db.insert_review(&ReviewRequest {
                product_id: "prod-desk-organizer".into(),
                customer_id: reviewer.id.clone(),
                rating: 5,
                comment: "Tidy at last".into(),
            })
            .await
            .unwrap();

            db.delete_customer(&reviewer.id).await.unwrap();

            let listed = db.list_reviews("prod-desk-organizer").await.unwrap();
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].customer_name, None);
            assert_eq!(listed[0].reviewer_label(), "User #0");
        }
    }

    // Define a struct to represent a database connection
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        // Create the database schema and seed the read-only catalog
        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            // 1. Customers table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS customers (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    phone TEXT,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );",
            )
            .map_err(|e| {
                eprintln!("Failed creating customers table: {}", e);
                e
            })?;

            // 2. Products table. The back office never writes products, so a
            // small catalog is seeded here.
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS products (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE
                );
                INSERT OR IGNORE INTO products (id, name) VALUES
                ('prod-desk-organizer', 'Walnut Desk Organizer'),
                ('prod-pour-over-kettle', 'Ceramic Pour-Over Kettle'),
                ('prod-throw-blanket', 'Linen Throw Blanket');",
            )
            .map_err(|e| {
                eprintln!("Failed creating products table: {}", e);
                e
            })?;

            // 3. Reviews table
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    product_id TEXT NOT NULL,
                    customer_id TEXT NOT NULL,
                    rating INTEGER NOT NULL,
                    comment TEXT NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE,
                    FOREIGN KEY (customer_id) REFERENCES customers(id)
                );",
            )
            .map_err(|e| {
                eprintln!("Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        fn customer_from_row(row: &rusqlite::Row) -> Result<Customer, Error> {
            Ok(Customer {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                created_at: row.get(4)?,
            })
        }

        // Retrieve all customers, newest first
        pub async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, name, email, phone, created_at
                 FROM customers
                 ORDER BY created_at DESC, name ASC",
            )?;
            let rows = stmt.query_map([], |row| Self::customer_from_row(row))?;
            let mut customers = Vec::new();
            for row in rows {
                customers.push(row?);
            }
            log!("[DB] Fetched {} customers", customers.len());
            Ok(customers)
        }

        pub async fn insert_customer(&self, request: &CustomerRequest) -> Result<Customer, Error> {
            let conn = self.conn.lock().await;
            let id = Uuid::new_v4().to_string();
            conn.execute(
                "INSERT INTO customers (id, name, email, phone) VALUES (?, ?, ?, ?)",
                params![id, request.name, request.email, request.phone],
            )?;
            // Read the row back so the caller sees the assigned timestamp
            let customer = conn.query_row(
                "SELECT id, name, email, phone, created_at FROM customers WHERE id = ?",
                [&id],
                |row| Self::customer_from_row(row),
            )?;
            log!("[DB] Customer created: {}", customer.id);
            Ok(customer)
        }

        // Replace-on-edit; None when the id is unknown
        pub async fn update_customer(
            &self,
            id: &str,
            request: &CustomerRequest,
        ) -> Result<Option<Customer>, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;
            let updated = tx.execute(
                "UPDATE customers SET name = ?, email = ?, phone = ? WHERE id = ?",
                params![request.name, request.email, request.phone, id],
            )?;
            let customer = if updated == 0 {
                None
            } else {
                Some(tx.query_row(
                    "SELECT id, name, email, phone, created_at FROM customers WHERE id = ?",
                    [id],
                    |row| Self::customer_from_row(row),
                )?)
            };
            tx.commit()?;
            if customer.is_some() {
                log!("[DB] Customer updated: {}", id);
            }
            Ok(customer)
        }

        pub async fn delete_customer(&self, id: &str) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute("DELETE FROM customers WHERE id = ?", [id])?;
            logging::log!("Customer deleted: {}", id);
            Ok(())
        }

        pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare("SELECT id, name FROM products ORDER BY name ASC")?;
            let rows = stmt.query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?;
            let mut products = Vec::new();
            for row in rows {
                products.push(row?);
            }
            Ok(products)
        }

        fn review_from_row(row: &rusqlite::Row) -> Result<Review, Error> {
            Ok(Review {
                id: row.get(0)?,
                product_id: row.get(1)?,
                customer_id: row.get(2)?,
                rating: row.get(3)?,
                comment: row.get(4)?,
                customer_name: row.get(5)?,
                username: None,
                user_id: None,
            })
        }

        // Reviews for one product, newest first. The join is LEFT so reviews
        // survive their reviewer's deletion; the display layer falls back for
        // the missing name.
        pub async fn list_reviews(&self, product_id: &str) -> Result<Vec<Review>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT r.id, r.product_id, r.customer_id, r.rating, r.comment, c.name
                 FROM reviews r
                 LEFT JOIN customers c ON r.customer_id = c.id
                 WHERE r.product_id = ?
                 ORDER BY r.created_at DESC, r.id ASC",
            )?;
            let rows = stmt.query_map([product_id], |row| Self::review_from_row(row))?;
            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?);
            }
            log!(
                "[DB] Fetched {} reviews for product {}",
                reviews.len(),
                product_id
            );
            Ok(reviews)
        }

        pub async fn insert_review(&self, request: &ReviewRequest) -> Result<Review, Error> {
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;
            let id = Uuid::new_v4().to_string();
            tx.execute(
                "INSERT INTO reviews (id, product_id, customer_id, rating, comment)
                 VALUES (?, ?, ?, ?, ?)",
                params![
                    id,
                    request.product_id,
                    request.customer_id,
                    request.rating,
                    request.comment
                ],
            )?;
            let review = tx.query_row(
                "SELECT r.id, r.product_id, r.customer_id, r.rating, r.comment, c.name
                 FROM reviews r
                 LEFT JOIN customers c ON r.customer_id = c.id
                 WHERE r.id = ?",
                [&id],
                |row| Self::review_from_row(row),
            )?;
            tx.commit()?;
            log!(
                "[DB] Review created: {} for product {}",
                review.id,
                review.product_id
            );
            Ok(review)
        }

        pub async fn delete_review(&self, id: &str) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute("DELETE FROM reviews WHERE id = ?", [id])?;
            logging::log!("Review deleted: {}", id);
            Ok(())
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
