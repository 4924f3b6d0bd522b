use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_by_name::{
    GetProductByNameParams, GetProductByNameUseCase,
};
use business::domain::product::use_cases::get_external_users::GetExternalUsersUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductResponse, UpdateProductRequest, external_user_to_json,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_name_use_case: Arc<dyn GetProductByNameUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    get_external_users_use_case: Arc<dyn GetExternalUsersUseCase>,
}

impl ProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_name_use_case: Arc<dyn GetProductByNameUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        get_external_users_use_case: Arc<dyn GetExternalUsersUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_name_use_case,
            update_use_case,
            delete_use_case,
            get_external_users_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Result<i64, Json<ErrorResponse>> {
    raw.parse::<i64>()
        .map_err(|_| Json(ErrorResponse::new("ValidationError", "product.invalid_id")))
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// List users from the external directory
    ///
    /// Best effort: any failure of the remote directory yields an empty list.
    #[oai(
        path = "/products/external-users",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_external_users(&self) -> Json<Vec<serde_json::Value>> {
        let users = self.get_external_users_use_case.execute().await;
        Json(users.into_iter().map(external_user_to_json).collect())
    }

    /// Get a product by name
    ///
    /// Names are not unique; when several products share one, the first stored wins.
    #[oai(
        path = "/products/by-name/:name",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_product_by_name(&self, name: Path<String>) -> GetProductResponse {
        match self
            .get_by_name_use_case
            .execute(GetProductByNameParams { name: name.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => GetProductResponse::from_error(err),
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return GetProductResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => GetProductResponse::from_error(err),
        }
    }

    /// Create a new product
    ///
    /// The store assigns the identifier.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            price: body.0.price,
            quantity: body.0.quantity,
            category: body.0.category.map(Into::into),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateProductResponse::InternalError(json)
            }
        }
    }

    /// Replace a product
    ///
    /// Every field of the stored product is overwritten; the path ID is kept.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id,
            product: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
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
            Ok(()) => DeleteProductResponse::Ok,
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
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl GetProductResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            404 => GetProductResponse::NotFound(json),
            _ => GetProductResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
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
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
