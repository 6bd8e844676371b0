use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::filter::ProductFilter;
use business::domain::product::model::ProductId;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    raw.parse::<ProductId>().map_err(|_| {
        tracing::warn!("Rejected product id '{}'", raw);
        Json(ErrorResponse {
            name: "ValidationError".to_string(),
            message: "product.invalid_id".to_string(),
        })
    })
}

/// Product catalog API
///
/// Endpoints for creating, listing, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Stores a product and returns it with its assigned id. The `Location`
    /// header points at the new resource.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let result = match body.0.into_create_params() {
            Ok(params) => self.create_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => {
                let location = product
                    .id
                    .map(|id| format!("/products/{id}"))
                    .unwrap_or_default();
                CreateProductResponse::Created(Json(product.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Returns every product, or those matching a single filter. When several
    /// filters are given only the first of `name`, `category`, `available`
    /// is applied.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        /// Exact product name
        name: Query<Option<String>>,
        /// Category name, e.g. `FOOD`
        category: Query<Option<String>>,
        /// `true`/`false`, `yes`/`no` or `1`/`0`
        available: Query<Option<String>>,
    ) -> ListProductsResponse {
        let filter = ProductFilter::from_query(
            name.0.as_deref(),
            category.0.as_deref(),
            available.0.as_deref(),
        );

        let result = match filter {
            Ok(filter) => {
                self.list_use_case
                    .execute(ListProductsParams { filter })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field of an existing product. The id in the path wins
    /// over any id in the body. A missing product answers 404 before the
    /// category and price are checked.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        if let Err(err) = self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                404 => UpdateProductResponse::NotFound(json),
                _ => UpdateProductResponse::InternalError(json),
            };
        }

        let result = match body.0.into_update_params(id) {
            Ok(params) => self.update_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::Endpoint;
    use poem::http::StatusCode;
    use poem::test::{TestClient, TestResponse};
    use serde_json::{Value, json};

    use crate::setup::server::in_memory_app;

    fn fedora() -> Value {
        json!({
            "name": "Fedora",
            "description": "A red hat",
            "price": "12.50",
            "available": true,
            "category": "CLOTHS",
        })
    }

    fn product(name: &str, category: &str, available: bool) -> Value {
        json!({
            "name": name,
            "description": format!("{name} for sale"),
            "price": "3.99",
            "available": available,
            "category": category,
        })
    }

    async fn body(resp: TestResponse) -> Value {
        resp.0.into_body().into_json().await.unwrap()
    }

    async fn create<E: Endpoint>(cli: &TestClient<E>, payload: &Value) -> Value {
        let resp = cli.post("/products").body_json(payload).send().await;
        resp.assert_status(StatusCode::CREATED);
        body(resp).await
    }

    async fn list<E: Endpoint>(cli: &TestClient<E>, query: &str) -> Vec<Value> {
        let resp = cli.get(format!("/products{query}")).send().await;
        resp.assert_status_is_ok();
        match body(resp).await {
            Value::Array(items) => items,
            other => panic!("expected a list, got {other}"),
        }
    }

    fn names(products: &[Value]) -> Vec<&str> {
        products.iter().filter_map(|p| p["name"].as_str()).collect()
    }

    #[tokio::test]
    async fn should_create_read_and_delete_a_product() {
        let cli = TestClient::new(in_memory_app());

        let resp = cli.post("/products").body_json(&fedora()).send().await;
        resp.assert_status(StatusCode::CREATED);
        let location = resp
            .0
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .unwrap();
        let created = body(resp).await;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(location, format!("/products/{id}"));

        let resp = cli.get(&location).send().await;
        resp.assert_status_is_ok();
        let fetched = body(resp).await;
        assert_eq!(fetched, created);
        assert_eq!(fetched["name"], "Fedora");
        assert_eq!(fetched["description"], "A red hat");
        assert_eq!(fetched["price"], "12.50");
        assert_eq!(fetched["available"], true);
        assert_eq!(fetched["category"], "CLOTHS");

        cli.delete(&location)
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        cli.get(&location)
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_keep_available_false() {
        let cli = TestClient::new(in_memory_app());

        let created = create(&cli, &product("Tire", "AUTOMOTIVE", false)).await;

        assert_eq!(created["available"], false);
    }

    #[tokio::test]
    async fn should_ignore_client_supplied_id() {
        let cli = TestClient::new(in_memory_app());
        let mut payload = fedora();
        payload["id"] = json!(999);

        let created = create(&cli, &payload).await;

        assert_ne!(created["id"], 999);
    }

    #[tokio::test]
    async fn should_reject_post_without_content_type() {
        let cli = TestClient::new(in_memory_app());

        let resp = cli
            .post("/products")
            .body(fedora().to_string())
            .send()
            .await;

        resp.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(list(&cli, "").await.is_empty());
    }

    #[tokio::test]
    async fn should_reject_post_with_wrong_content_type() {
        let cli = TestClient::new(in_memory_app());

        let resp = cli
            .post("/products")
            .content_type("plain/text")
            .body(fedora().to_string())
            .send()
            .await;

        resp.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(list(&cli, "").await.is_empty());
    }

    #[tokio::test]
    async fn should_reject_product_without_name() {
        let cli = TestClient::new(in_memory_app());
        let mut payload = fedora();
        payload.as_object_mut().unwrap().remove("name");

        let resp = cli.post("/products").body_json(&payload).send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert!(list(&cli, "").await.is_empty());
    }

    #[tokio::test]
    async fn should_reject_empty_name_and_unknown_category() {
        let cli = TestClient::new(in_memory_app());

        let mut empty = fedora();
        empty["name"] = json!("");
        let resp = cli.post("/products").body_json(&empty).send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["message"], "product.name_empty");

        let resp = cli
            .post("/products")
            .body_json(&product("Fedora", "HATS", true))
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["name"], "ValidationError");
    }

    #[tokio::test]
    async fn should_accept_whitespace_only_name() {
        let cli = TestClient::new(in_memory_app());
        let mut payload = fedora();
        payload["name"] = json!("   ");

        let created = create(&cli, &payload).await;

        assert_eq!(created["name"], "   ");
    }

    #[tokio::test]
    async fn should_keep_every_digit_of_a_numeric_price() {
        let cli = TestClient::new(in_memory_app());

        let resp = cli
            .post("/products")
            .content_type("application/json")
            .body(
                r#"{"name":"Fedora","description":"A red hat","price":1234567890.123456789,"available":true,"category":"CLOTHS"}"#,
            )
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        let created = body(resp).await;
        assert_eq!(created["price"], "1234567890.123456789");

        let id = created["id"].as_i64().unwrap();
        let fetched = body(cli.get(format!("/products/{id}")).send().await).await;
        assert_eq!(fetched["price"], "1234567890.123456789");
    }

    #[tokio::test]
    async fn should_reject_fields_longer_than_the_store_columns() {
        let cli = TestClient::new(in_memory_app());

        let mut long_name = fedora();
        long_name["name"] = json!("n".repeat(101));
        let resp = cli.post("/products").body_json(&long_name).send().await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["message"], "product.name_too_long");

        let mut long_description = fedora();
        long_description["description"] = json!("d".repeat(251));
        let resp = cli
            .post("/products")
            .body_json(&long_description)
            .send()
            .await;
        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["message"], "product.description_too_long");

        assert!(list(&cli, "").await.is_empty());
    }

    #[tokio::test]
    async fn should_return_bad_request_for_non_numeric_id() {
        let cli = TestClient::new(in_memory_app());

        let resp = cli.get("/products/abc").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["message"], "product.invalid_id");
    }

    #[tokio::test]
    async fn should_list_every_product_without_filter() {
        let cli = TestClient::new(in_memory_app());
        create(&cli, &product("Fedora", "CLOTHS", true)).await;
        create(&cli, &product("Apple", "FOOD", false)).await;

        let products = list(&cli, "").await;

        assert_eq!(names(&products), vec!["Fedora", "Apple"]);
    }

    #[tokio::test]
    async fn should_filter_by_name_before_category() {
        let cli = TestClient::new(in_memory_app());
        create(&cli, &product("Fedora", "CLOTHS", true)).await;
        create(&cli, &product("Apple", "FOOD", true)).await;
        create(&cli, &product("Fedora", "CLOTHS", false)).await;

        let products = list(&cli, "?name=Fedora&category=FOOD").await;

        assert_eq!(names(&products), vec!["Fedora", "Fedora"]);
    }

    #[tokio::test]
    async fn should_filter_by_category() {
        let cli = TestClient::new(in_memory_app());
        create(&cli, &product("Fedora", "CLOTHS", true)).await;
        create(&cli, &product("Apple", "FOOD", true)).await;
        create(&cli, &product("Bread", "FOOD", false)).await;

        let products = list(&cli, "?category=FOOD").await;

        assert_eq!(names(&products), vec!["Apple", "Bread"]);
        assert!(products.iter().all(|p| p["category"] == "FOOD"));
    }

    #[tokio::test]
    async fn should_filter_by_availability() {
        let cli = TestClient::new(in_memory_app());
        create(&cli, &product("Fedora", "CLOTHS", true)).await;
        create(&cli, &product("Apple", "FOOD", false)).await;
        create(&cli, &product("Hammer", "TOOLS", false)).await;

        let unavailable = list(&cli, "?available=false").await;
        let available = list(&cli, "?available=YES").await;

        assert_eq!(names(&unavailable), vec!["Apple", "Hammer"]);
        assert_eq!(names(&available), vec!["Fedora"]);
    }

    #[tokio::test]
    async fn should_reject_unrecognised_filter_values() {
        let cli = TestClient::new(in_memory_app());

        cli.get("/products?available=maybe")
            .send()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        cli.get("/products?category=HATS")
            .send()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_update_description_and_keep_other_fields() {
        let cli = TestClient::new(in_memory_app());
        let created = create(&cli, &fedora()).await;
        let id = created["id"].as_i64().unwrap();

        let mut payload = fedora();
        payload["description"] = json!("unknown");
        let resp = cli
            .put(format!("/products/{id}"))
            .body_json(&payload)
            .send()
            .await;
        resp.assert_status_is_ok();
        let updated = body(resp).await;
        assert_eq!(updated["description"], "unknown");

        let fetched = body(cli.get(format!("/products/{id}")).send().await).await;
        assert_eq!(fetched["description"], "unknown");
        assert_eq!(fetched["name"], created["name"]);
        assert_eq!(fetched["price"], created["price"]);
        assert_eq!(fetched["category"], created["category"]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_product() {
        let cli = TestClient::new(in_memory_app());

        let resp = cli.put("/products/0").body_json(&fedora()).send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        assert!(list(&cli, "").await.is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_before_validating_update_payload() {
        let cli = TestClient::new(in_memory_app());

        let resp = cli
            .put("/products/0")
            .body_json(&product("Fedora", "HATS", true))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(body(resp).await["message"], "product.not_found");
    }

    #[tokio::test]
    async fn should_reject_invalid_category_on_existing_product_update() {
        let cli = TestClient::new(in_memory_app());
        let id = create(&cli, &fedora()).await["id"].as_i64().unwrap();

        let resp = cli
            .put(format!("/products/{id}"))
            .body_json(&product("Fedora", "HATS", true))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let fetched = body(cli.get(format!("/products/{id}")).send().await).await;
        assert_eq!(fetched["category"], "CLOTHS");
    }

    #[tokio::test]
    async fn should_reject_put_with_wrong_content_type() {
        let cli = TestClient::new(in_memory_app());
        let id = create(&cli, &fedora()).await["id"].as_i64().unwrap();

        cli.put(format!("/products/{id}"))
            .content_type("plain/text")
            .body(fedora().to_string())
            .send()
            .await
            .assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_product() {
        let cli = TestClient::new(in_memory_app());

        cli.delete("/products/0")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
