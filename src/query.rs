use crate::error::StoreError;
use crate::models::{Classification, FoodRecord, FoodRow, NewFood};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

const CREATE_FOOD_DATA: &str = "CREATE TABLE IF NOT EXISTS food_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    calories REAL NOT NULL,
    proteins REAL NOT NULL,
    classification TEXT NOT NULL
)";

pub(crate) fn create_table(conn: &SqliteConnection) -> Result<(), StoreError> {
    conn.batch_execute(CREATE_FOOD_DATA)?;
    Ok(())
}

//uniqueness is left to the constraint, callers look the name up first
pub(crate) fn insert_food(record: &NewFood, conn: &SqliteConnection) -> Result<(), StoreError> {
    use crate::schema::food_data::dsl::*;

    diesel::insert_into(food_data)
        .values((
            name.eq(record.name.as_str()),
            calories.eq(record.calories),
            proteins.eq(record.proteins),
            classification.eq(record.classification.as_str()),
        ))
        .execute(conn)
        .map_err(|e| StoreError::from_insert(e, &record.name))?;
    Ok(())
}

pub(crate) fn find_food_by_name(
    food_name: &str,
    conn: &SqliteConnection,
) -> Result<Option<FoodRecord>, StoreError> {
    use crate::schema::food_data::dsl::*;

    let row = food_data
        .filter(name.eq(food_name))
        .first::<FoodRow>(conn)
        .optional()?;
    row.map(to_record).transpose()
}

pub(crate) fn find_all_foods(conn: &SqliteConnection) -> Result<Vec<FoodRecord>, StoreError> {
    use crate::schema::food_data::dsl::*;

    let all_foods = food_data.order(id.asc()).load::<FoodRow>(conn)?;
    all_foods.into_iter().map(to_record).collect()
}

pub(crate) fn delete_food_by_name(
    food_name: &str,
    conn: &SqliteConnection,
) -> Result<usize, StoreError> {
    use crate::schema::food_data::dsl::*;

    let deleted = diesel::delete(food_data.filter(name.eq(food_name))).execute(conn)?;
    Ok(deleted)
}

fn to_record((id, name, calories, proteins, label): FoodRow) -> Result<FoodRecord, StoreError> {
    match Classification::from_label(&label) {
        Some(classification) => Ok(FoodRecord {
            id,
            name,
            calories,
            proteins,
            classification,
        }),
        None => Err(StoreError::InvalidClassification { name, label }),
    }
}
