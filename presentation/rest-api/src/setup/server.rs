use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::{content_type::RequireJsonContentType, error::render_error};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Routes, API docs and request guards, without transport concerns
    pub fn endpoint(container: DependencyContainer, addr: &str) -> impl Endpoint + 'static {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.index_api,
                container.product_api,
            ),
            "Product Catalog API",
            "0.1.0",
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(RequireJsonContentType::under("/products"))
            .catch_all_error(render_error)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::endpoint(container, &addr)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn in_memory_app() -> impl Endpoint + 'static {
    use std::sync::Arc;

    use persistence::product::memory::ProductRepositoryInMemory;

    let container = DependencyContainer::new(Arc::new(ProductRepositoryInMemory::new()));
    Server::endpoint(container, "127.0.0.1:8080")
}
