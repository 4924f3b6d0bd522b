use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_by_name::GetProductByNameUseCaseImpl;
use business::application::product::get_external_users::GetExternalUsersUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;
use business::domain::product::services::ExternalUserService;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    /// Wires every product use case onto the given store and user directory.
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        user_service: Arc<dyn ExternalUserService>,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_name_use_case = Arc::new(GetProductByNameUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });
        let get_external_users_use_case = Arc::new(GetExternalUsersUseCaseImpl {
            service: user_service,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_name_use_case,
            update_use_case,
            delete_use_case,
            get_external_users_use_case,
        );

        Self {
            health_api: HealthApi,
            product_api,
        }
    }
}
