//! Page actions.
//!
//! Each action is one request/response cycle: it touches the store, then
//! rebuilds the whole page from what storage holds right now. Nothing is kept
//! between requests except the echoed form fields.

use serde::Deserialize;

use crate::classifier::classify;
use crate::error::StoreError;
use crate::models::{FoodRecord, NewFood};
use crate::store::FoodStore;

/// Form fields exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct PageForm {
    pub name: Option<String>,
    pub calories: Option<String>,
    pub proteins: Option<String>,
    pub food_to_delete: Option<String>,
}

impl PageForm {
    /// Coerces the classify inputs. Blank numbers count as zero, like the
    /// widgets' initial value.
    pub(crate) fn food_input(&self) -> Result<FoodInput, String> {
        Ok(FoodInput {
            name: self.name.clone().unwrap_or_default(),
            calories: parse_amount("Calories", self.calories.as_deref())?,
            proteins: parse_amount("Proteins", self.proteins.as_deref())?,
        })
    }

    fn selection(&self) -> Option<&str> {
        self.food_to_delete.as_deref().filter(|s| !s.is_empty())
    }
}

fn parse_amount(label: &str, raw: Option<&str>) -> Result<f64, String> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(format!("{} must be a non-negative number, got '{}'.", label, raw)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FoodInput {
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ClassifyOutcome {
    /// Name was already stored; the stored values win over the entered ones.
    Existing(FoodRecord),
    Created(NewFood),
}

/// Looks the name up first and only classifies and inserts when it is new.
pub(crate) fn classify_food(
    store: &FoodStore,
    input: &FoodInput,
) -> Result<ClassifyOutcome, StoreError> {
    if let Some(existing) = store.find_by_name(&input.name)? {
        return Ok(ClassifyOutcome::Existing(existing));
    }

    let classification = classify(input.calories, input.proteins);
    store.insert(&input.name, input.calories, input.proteins, classification)?;
    log::info!("classified '{}' as {}", input.name, classification);
    Ok(ClassifyOutcome::Created(NewFood {
        name: input.name.clone(),
        calories: input.calories,
        proteins: input.proteins,
        classification,
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Listing {
    Empty,
    Records(Vec<FoodRecord>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PageView {
    pub form: PageForm,
    pub notices: Vec<Notice>,
    pub listing: Option<Listing>,
    pub delete_choices: Vec<String>,
}

impl PageView {
    /// Starts a page for `form` once the table is known to exist. On failure
    /// the returned page already carries the error and nothing else is tried.
    fn begin(store: &FoodStore, form: PageForm) -> Result<Self, Self> {
        let mut view = PageView {
            form,
            ..PageView::default()
        };
        match store.ensure_schema() {
            Ok(()) => Ok(view),
            Err(err) => {
                view.storage_error(&err);
                Err(view)
            }
        }
    }

    fn storage_error(&mut self, err: &StoreError) {
        log::warn!("storage error: {}", err);
        self.notices.push(Notice::Error(format!("Storage error: {}", err)));
    }
}

pub(crate) fn show(store: &FoodStore, form: PageForm) -> PageView {
    match PageView::begin(store, form) {
        Ok(view) => finish(store, view),
        Err(view) => view,
    }
}

pub(crate) fn classify_page(store: &FoodStore, form: PageForm) -> PageView {
    let mut view = match PageView::begin(store, form) {
        Ok(view) => view,
        Err(view) => return view,
    };

    match view.form.food_input() {
        Err(message) => view.notices.push(Notice::Warning(message)),
        Ok(input) => match classify_food(store, &input) {
            Ok(ClassifyOutcome::Existing(record)) => {
                view.notices.push(Notice::Success(format!(
                    "The food item '{}' already exists in the database.",
                    record.name
                )));
                view.notices.push(Notice::Info(format!(
                    "Calories: {}, Proteins: {}, Classification: {}",
                    amount(record.calories),
                    amount(record.proteins),
                    record.classification
                )));
            }
            Ok(ClassifyOutcome::Created(food)) => {
                view.notices.push(Notice::Success(format!(
                    "The food item '{}' is classified as: {}",
                    food.name, food.classification
                )));
            }
            Err(err) => view.storage_error(&err),
        },
    }

    finish(store, view)
}

pub(crate) fn view_database_page(store: &FoodStore, form: PageForm) -> PageView {
    let mut view = match PageView::begin(store, form) {
        Ok(view) => view,
        Err(view) => return view,
    };

    match store.list_all() {
        Ok(records) if records.is_empty() => view.listing = Some(Listing::Empty),
        Ok(records) => view.listing = Some(Listing::Records(records)),
        Err(err) => view.storage_error(&err),
    }

    finish(store, view)
}

// the selection comes from the previous render and may already be gone;
// the store treats that as a no-op and we still report the delete
pub(crate) fn delete_page(store: &FoodStore, form: PageForm) -> PageView {
    let mut view = match PageView::begin(store, form) {
        Ok(view) => view,
        Err(view) => return view,
    };

    match view.form.selection().map(str::to_string) {
        None => view
            .notices
            .push(Notice::Warning("Please select a food item to delete.".to_string())),
        Some(selected) => match store.delete_by_name(&selected) {
            Ok(_) => {
                log::info!("deleted food item '{}'", selected);
                view.notices.push(Notice::Success(format!(
                    "The food item '{}' has been deleted from the database.",
                    selected
                )));
            }
            Err(err) => view.storage_error(&err),
        },
    }
    view.form.food_to_delete = None;

    finish(store, view)
}

fn finish(store: &FoodStore, mut view: PageView) -> PageView {
    match store.list_all() {
        Ok(records) => view.delete_choices = records.into_iter().map(|r| r.name).collect(),
        Err(err) => view.storage_error(&err),
    }
    view
}

pub(crate) fn record_line(record: &FoodRecord) -> String {
    format!(
        "ID: {}, Name: {}, Calories: {}, Proteins: {}, Classification: {}",
        record.id,
        record.name,
        amount(record.calories),
        amount(record.proteins),
        record.classification
    )
}

// REAL values keep their decimal point: 150.0, not 150
fn amount(value: f64) -> String {
    format!("{:?}", value)
}
