use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PooledConnection};
use diesel::SqliteConnection;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{Classification, FoodRecord, NewFood};
use crate::query;

pub(crate) type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
struct SqlitePragmas {
    busy_timeout_ms: u128,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", self.busy_timeout_ms))
            .map_err(r2d2::Error::QueryError)
    }
}

/// Handle on the `food_data` table.
///
/// Every operation checks out its own pooled connection and hands it back when
/// it returns, so nothing spans two calls: no transaction and no isolation
/// between, say, listing names and deleting one of them.
#[derive(Clone)]
pub(crate) struct FoodStore {
    pool: DbPool,
}

impl FoodStore {
    /// Builds the pool without connecting; an unreachable database shows up
    /// as `StorageUnavailable` on the first operation instead.
    pub(crate) fn open(config: &StoreConfig) -> Self {
        let manager = ConnectionManager::<SqliteConnection>::new(config.database_url.as_str());
        let pool = r2d2::Pool::builder()
            .max_size(config.pool_max_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(SqlitePragmas {
                busy_timeout_ms: config.busy_timeout.as_millis(),
            }))
            .build_unchecked(manager);
        log::debug!(
            "opened sqlite pool for {} (max {} connections)",
            config.database_url,
            config.pool_max_size
        );
        FoodStore { pool }
    }

    fn conn(&self) -> Result<DbConnection, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Creates `food_data` if it does not exist yet.
    pub(crate) fn ensure_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn()?;
        query::create_table(&conn)?;
        log::debug!("food_data table ready");
        Ok(())
    }

    /// Fails with `DuplicateKey` when `name` is already stored.
    pub(crate) fn insert(
        &self,
        name: &str,
        calories: f64,
        proteins: f64,
        classification: Classification,
    ) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let record = NewFood {
            name: name.to_string(),
            calories,
            proteins,
            classification,
        };
        query::insert_food(&record, &conn)?;
        log::debug!("inserted food item '{}' as {}", name, classification);
        Ok(())
    }

    pub(crate) fn find_by_name(&self, name: &str) -> Result<Option<FoodRecord>, StoreError> {
        let conn = self.conn()?;
        let found = query::find_food_by_name(name, &conn)?;
        log::debug!("lookup of food item '{}': found={}", name, found.is_some());
        Ok(found)
    }

    /// Fresh snapshot of every row, in insertion order.
    pub(crate) fn list_all(&self) -> Result<Vec<FoodRecord>, StoreError> {
        let conn = self.conn()?;
        let foods = query::find_all_foods(&conn)?;
        log::debug!("listed {} food items", foods.len());
        Ok(foods)
    }

    /// Returns how many rows went away; zero when nothing matched.
    pub(crate) fn delete_by_name(&self, name: &str) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        let deleted = query::delete_food_by_name(name, &conn)?;
        if deleted == 0 {
            log::debug!("no food item '{}' to delete", name);
        } else {
            log::debug!("deleted food item '{}'", name);
        }
        Ok(deleted)
    }
}
