use crate::config::ClientConfig;
use crate::core::service::HttpDecisionService;
use crate::domain::model::{AdRequest, AdResponse};
use crate::domain::ports::DecisionService;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;

type ServiceFactory = Box<dyn Fn() -> Result<Arc<dyn DecisionService>> + Send + Sync>;

/// Client for the ad engine's decision API.
///
/// Construct one instance at the application's composition root and share it
/// as `Arc<AdClient>`. The underlying decision service is built on first use,
/// at most once even when the first calls race, and is shared by every call
/// afterwards.
pub struct AdClient {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    service_factory: Option<ServiceFactory>,
    service: OnceCell<Arc<dyn DecisionService>>,
}

impl AdClient {
    /// Client bound to the default decision endpoint.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn builder() -> AdClientBuilder {
        AdClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one decision request and wait for the result. Exactly one HTTP
    /// exchange per call; the error is the transport's, forwarded verbatim.
    pub async fn request(&self, request: &AdRequest) -> Result<AdResponse> {
        let service = self.service().await?;
        service.request(request).await
    }

    /// Fire-and-forget variant: the exchange runs on the runtime and the
    /// outcome is dropped. The handle resolves once the exchange finishes.
    pub fn dispatch(self: Arc<Self>, request: AdRequest) -> JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.request(&request).await {
                tracing::debug!("Dropped decision request result: {}", e);
            }
        })
    }

    async fn service(&self) -> Result<&Arc<dyn DecisionService>> {
        self.service
            .get_or_try_init(|| async { self.build_service() })
            .await
    }

    fn build_service(&self) -> Result<Arc<dyn DecisionService>> {
        if let Some(factory) = &self.service_factory {
            return factory();
        }

        let client = match &self.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder().build()?,
        };

        Ok(Arc::new(HttpDecisionService::new(
            client,
            self.config.endpoint.clone(),
        )))
    }
}

/// Builder for [`AdClient`]. Injection points exist for a pre-built service,
/// a pre-built HTTP transport, or a service factory; an injected service wins
/// over lazy construction.
#[derive(Default)]
pub struct AdClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    service: Option<Arc<dyn DecisionService>>,
    service_factory: Option<ServiceFactory>,
}

impl AdClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn service(mut self, service: impl DecisionService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    pub fn service_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn DecisionService>> + Send + Sync + 'static,
    {
        self.service_factory = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> Result<AdClient> {
        self.config.validate()?;

        let service = match self.service {
            Some(service) => OnceCell::new_with(Some(service)),
            None => OnceCell::new(),
        };

        Ok(AdClient {
            config: self.config,
            http_client: self.http_client,
            service_factory: self.service_factory,
            service,
        })
    }
}
