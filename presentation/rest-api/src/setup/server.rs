use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{CatchPanic, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{
    api::error::panic_response, config::server_config::ServerConfig,
    setup::dependency_injection::DependencyContainer,
};

pub struct Server;

impl Server {
    pub async fn run(config: ServerConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.bind_address();
        let app = Self::app(container, format!("http://{}", addr));
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Routes and middleware, without the listener.
    pub fn app(container: DependencyContainer, server_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.health_api, container.page_api, container.text_api),
            "Textify API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(CatchPanic::new().with_handler(panic_response))
            .with(Tracing)
    }
}
