//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, QueryService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub query_service: Arc<QueryService>,
    pub listen_addr: Arc<str>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        query_service: Arc<QueryService>,
        listen_addr: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            link_service,
            query_service,
            listen_addr: listen_addr.into(),
        }
    }

    /// Wires both services over `repository` using the configured alias
    /// length, retry budget and store timeout.
    pub fn from_config(repository: Arc<dyn LinkRepository>, config: &Config) -> Self {
        let generator: Arc<dyn AliasGenerator> =
            Arc::new(RandomAliasGenerator::new(config.alias_length));

        let link_service = LinkService::new(
            repository.clone(),
            generator,
            config.base_url.clone(),
            config.store_timeout(),
        )
        .with_max_attempts(config.alias_max_attempts);
        let query_service = QueryService::new(repository, config.store_timeout());

        Self::new(
            Arc::new(link_service),
            Arc::new(query_service),
            config.listen_addr.as_str(),
        )
    }

    /// Port component of the listen address, or the whole address when it
    /// has no port.
    pub fn port(&self) -> &str {
        self.listen_addr
            .rsplit_once(':')
            .map_or(&*self.listen_addr, |(_, port)| port)
    }
}
