//! Composition root: wires a storage backend into the handlers and router.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::adapters::http::auth::AuthHandlers;
use crate::adapters::http::breeding_pairs::BreedingPairHandlers;
use crate::adapters::http::cages::CageHandlers;
use crate::adapters::http::litters::LitterHandlers;
use crate::adapters::http::weaned_groups::WeanedGroupHandlers;
use crate::adapters::http::{api_router, ApiHandlers};
use crate::adapters::memory::{InMemoryColonyStore, InMemorySessionStore, InMemoryUserRepository};
use crate::adapters::postgres::{
    PostgresBreedingPairRepository, PostgresCageLabelSource, PostgresLitterRepository,
    PostgresObservationRepository, PostgresUserRepository, PostgresWeanedGroupRepository,
};
use crate::application::handlers::{
    AddObservationHandler, CageLabelService, CreateBreedingPairHandler, DeleteBreedingPairHandler,
    GetBreedingPairHandler, ListBreedingPairsHandler, ListObservationsHandler,
    ListWeanedGroupsHandler, LoginHandler, LogoutHandler, RecordLitterHandler,
    RegisterUserHandler, RetireWeanedGroupHandler, SeparateWeanedGroupHandler,
    UpdateBreedingPairHandler, UpdateLitterHandler, WeaningScheduleHandler,
};
use crate::config::AppConfig;
use crate::ports::{
    BreedingPairRepository, CageLabelSource, LitterRepository, ObservationRepository,
    UserRepository, WeanedGroupRepository,
};

/// The persistence ports every handler is built from.
#[derive(Clone)]
pub struct Storage {
    pub breeding_pairs: Arc<dyn BreedingPairRepository>,
    pub litters: Arc<dyn LitterRepository>,
    pub weaned_groups: Arc<dyn WeanedGroupRepository>,
    pub observations: Arc<dyn ObservationRepository>,
    pub cage_labels: Arc<dyn CageLabelSource>,
    pub users: Arc<dyn UserRepository>,
}

impl Storage {
    /// One shared in-memory store behind every colony port, so label
    /// uniqueness is checked across all record kinds.
    pub fn in_memory() -> Self {
        let colony = Arc::new(InMemoryColonyStore::new());
        Self {
            breeding_pairs: colony.clone(),
            litters: colony.clone(),
            weaned_groups: colony.clone(),
            observations: colony.clone(),
            cage_labels: colony,
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            breeding_pairs: Arc::new(PostgresBreedingPairRepository::new(pool.clone())),
            litters: Arc::new(PostgresLitterRepository::new(pool.clone())),
            weaned_groups: Arc::new(PostgresWeanedGroupRepository::new(pool.clone())),
            observations: Arc::new(PostgresObservationRepository::new(pool.clone())),
            cage_labels: Arc::new(PostgresCageLabelSource::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool)),
        }
    }
}

/// A fully wired service.
pub struct Application {
    pub router: Router,
    /// Kept for seeding the bootstrap account at startup.
    pub register_user: Arc<RegisterUserHandler>,
}

impl Application {
    pub fn build(storage: Storage, config: &AppConfig) -> Self {
        let sessions = Arc::new(InMemorySessionStore::new(config.auth.session_ttl()));
        let cages = Arc::new(CageLabelService::new(storage.cage_labels.clone()));
        let register_user = Arc::new(RegisterUserHandler::new(storage.users.clone()));

        let auth = AuthHandlers::new(
            Arc::new(LoginHandler::new(storage.users.clone(), sessions.clone())),
            Arc::new(LogoutHandler::new(sessions.clone())),
            register_user.clone(),
        );

        let breeding_pairs = BreedingPairHandlers::new(
            Arc::new(CreateBreedingPairHandler::new(
                storage.breeding_pairs.clone(),
                cages.clone(),
            )),
            Arc::new(UpdateBreedingPairHandler::new(
                storage.breeding_pairs.clone(),
                cages.clone(),
            )),
            Arc::new(DeleteBreedingPairHandler::new(storage.breeding_pairs.clone())),
            Arc::new(GetBreedingPairHandler::new(
                storage.breeding_pairs.clone(),
                storage.litters.clone(),
            )),
            Arc::new(ListBreedingPairsHandler::new(storage.breeding_pairs.clone())),
            Arc::new(RecordLitterHandler::new(
                storage.breeding_pairs.clone(),
                storage.litters.clone(),
            )),
        );

        let litters = LitterHandlers::new(
            Arc::new(UpdateLitterHandler::new(storage.litters.clone())),
            Arc::new(WeaningScheduleHandler::new(
                storage.breeding_pairs.clone(),
                storage.litters.clone(),
            )),
            Arc::new(SeparateWeanedGroupHandler::new(
                storage.breeding_pairs.clone(),
                storage.litters.clone(),
                storage.weaned_groups.clone(),
                cages.clone(),
            )),
        );

        let weaned_groups = WeanedGroupHandlers::new(
            Arc::new(ListWeanedGroupsHandler::new(storage.weaned_groups.clone())),
            Arc::new(RetireWeanedGroupHandler::new(storage.weaned_groups.clone())),
            Arc::new(AddObservationHandler::new(
                storage.weaned_groups.clone(),
                storage.observations.clone(),
            )),
            Arc::new(ListObservationsHandler::new(
                storage.weaned_groups,
                storage.observations,
            )),
        );

        let handlers = ApiHandlers {
            auth,
            cages: CageHandlers::new(cages),
            breeding_pairs,
            litters,
            weaned_groups,
        };

        Self {
            router: api_router(handlers, sessions, &config.server),
            register_user,
        }
    }
}
