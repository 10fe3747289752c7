#![allow(dead_code)]

use axum::Router;
use linksphere::api::routes::api_routes;
use linksphere::application::services::{LinkService, QueryService};
use linksphere::domain::repositories::LinkRepository;
use linksphere::error::AppError;
use linksphere::infrastructure::persistence::InMemoryLinkRepository;
use linksphere::state::AppState;
use linksphere::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BASE_URL: &str = "http://localhost:8080";
pub const LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Replays a fixed list of aliases, then falls back to random ones.
pub struct ScriptedGenerator {
    aliases: Mutex<VecDeque<String>>,
}

impl ScriptedGenerator {
    pub fn new(aliases: &[&str]) -> Self {
        Self {
            aliases: Mutex::new(aliases.iter().map(|a| a.to_string()).collect()),
        }
    }
}

impl AliasGenerator for ScriptedGenerator {
    fn generate(&self) -> Result<String, AppError> {
        match self.aliases.lock().unwrap().pop_front() {
            Some(alias) => Ok(alias),
            None => RandomAliasGenerator::default().generate(),
        }
    }
}

pub fn create_test_state(repository: Arc<InMemoryLinkRepository>) -> AppState {
    create_test_state_with(repository, Arc::new(RandomAliasGenerator::default()), 5)
}

pub fn create_test_state_with(
    repository: Arc<InMemoryLinkRepository>,
    generator: Arc<dyn AliasGenerator>,
    max_attempts: usize,
) -> AppState {
    let repository: Arc<dyn LinkRepository> = repository;
    let timeout = Duration::from_secs(5);

    let link_service =
        LinkService::new(repository.clone(), generator, BASE_URL, timeout)
            .with_max_attempts(max_attempts);
    let query_service = QueryService::new(repository, timeout);

    AppState::new(Arc::new(link_service), Arc::new(query_service), LISTEN_ADDR)
}

/// The versioned API as mounted by the server.
pub fn api_app(state: AppState) -> Router {
    Router::new().nest("/api/v1", api_routes()).with_state(state)
}

pub async fn seed_links(repository: &InMemoryLinkRepository, count: usize) {
    for i in 0..count {
        repository
            .seed(&format!("seed{i:02}"), &format!("https://example.com/{i}"), 0)
            .await
            .unwrap();
    }
}
