use actix_web::{get, post, web, Error, HttpResponse};

use crate::interaction::{self, PageForm, PageView};
use crate::store::FoodStore;
use crate::view::render_page;

fn page(view: PageView) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&view))
}

#[get("/")]
async fn index(store: web::Data<FoodStore>) -> Result<HttpResponse, Error> {
    let view = web::block(move || interaction::show(&store, PageForm::default())).await?;
    Ok(page(view))
}

#[post("/classify")]
async fn classify_food(
    form: web::Form<PageForm>,
    store: web::Data<FoodStore>,
) -> Result<HttpResponse, Error> {
    let view = web::block(move || interaction::classify_page(&store, form.into_inner())).await?;
    Ok(page(view))
}

#[post("/list")]
async fn view_database(
    form: web::Form<PageForm>,
    store: web::Data<FoodStore>,
) -> Result<HttpResponse, Error> {
    let view =
        web::block(move || interaction::view_database_page(&store, form.into_inner())).await?;
    Ok(page(view))
}

#[post("/delete")]
async fn delete_food(
    form: web::Form<PageForm>,
    store: web::Data<FoodStore>,
) -> Result<HttpResponse, Error> {
    let view = web::block(move || interaction::delete_page(&store, form.into_inner())).await?;
    Ok(page(view))
}

#[get("/apis/food")]
async fn get_all_food(store: web::Data<FoodStore>) -> Result<HttpResponse, Error> {
    let foods = web::block(move || store.list_all())
        .await?
        .map_err(actix_web::error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(foods))
}

//exact name match, 404 when absent
#[get("/apis/food/{name}")]
async fn get_food(
    name: web::Path<String>,
    store: web::Data<FoodStore>,
) -> Result<HttpResponse, Error> {
    let food = web::block(move || store.find_by_name(&name.into_inner()))
        .await?
        .map_err(actix_web::error::ErrorInternalServerError)?;
    match food {
        Some(food) => Ok(HttpResponse::Ok().json(food)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(classify_food)
        .service(view_database)
        .service(delete_food)
        .service(get_all_food)
        .service(get_food);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classification, FoodRecord};
    use crate::store::test_support::{store_config, temp_store};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_index_renders_form() {
        let (_dir, store) = temp_store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(configure),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Food Classification Program"));
        assert!(html.contains(">Classify Food</button>"));
    }

    #[actix_web::test]
    async fn test_classify_list_delete_cycle() {
        let (_dir, store) = temp_store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/classify")
            .set_form([("name", "Tuna"), ("calories", "150"), ("proteins", "25")])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("The food item 'Tuna' is classified as: Healthy"));
        assert!(html.contains("<option value=\"Tuna\">Tuna</option>"));

        // a second classify with different numbers keeps the stored result
        let req = test::TestRequest::post()
            .uri("/classify")
            .set_form([("name", "Tuna"), ("calories", "900"), ("proteins", "0")])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("already exists in the database."));
        assert!(html.contains("Calories: 150.0, Proteins: 25.0, Classification: Healthy"));

        let req = test::TestRequest::post()
            .uri("/list")
            .set_form([("name", "Tuna")])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Food Classification Database:"));
        assert!(html.contains("Name: Tuna, Calories: 150.0, Proteins: 25.0, Classification: Healthy"));

        let req = test::TestRequest::post()
            .uri("/delete")
            .set_form([("food_to_delete", "Tuna")])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("The food item 'Tuna' has been deleted from the database."));

        assert!(store.find_by_name("Tuna").unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_list_empty_database() {
        let (_dir, store) = temp_store();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/list")
            .set_form([("name", "")])
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(std::str::from_utf8(&body)
            .unwrap()
            .contains("The database is empty."));
    }

    #[actix_web::test]
    async fn test_json_api() {
        let (_dir, store) = temp_store();
        store
            .insert("Oats", 389.0, 16.9, Classification::Unhealthy)
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/apis/food").to_request();
        let foods: Vec<FoodRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Oats");

        let req = test::TestRequest::get().uri("/apis/food/Oats").to_request();
        let food: FoodRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(food.classification, Classification::Unhealthy);

        let req = test::TestRequest::get().uri("/apis/food/Rice").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_json_api_storage_failure_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let url = dir
            .path()
            .join("missing")
            .join("food.db")
            .to_string_lossy()
            .into_owned();
        let store = FoodStore::open(&store_config(url));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/apis/food").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let req = test::TestRequest::get().uri("/apis/food/Oats").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // the page still renders, carrying the error
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body)
            .unwrap()
            .contains("Storage error: storage unavailable"));
    }
}
