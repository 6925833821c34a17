//! Service context - dependency container for the moderation log
//!
//! Holds the port implementations the coordinator needs: configuration
//! store, case store, channel dispatcher, label resolver, and the
//! operational error sink.

use std::sync::Arc;

use modlog_core::traits::{
    CaseStore, ErrorSink, LabelResolver, LogDispatcher, ModerationConfigStore,
};
use modlog_db::{PgCaseStore, PgModerationConfigStore, PgPool};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    config_store: Arc<dyn ModerationConfigStore>,
    case_store: Arc<dyn CaseStore>,
    dispatcher: Arc<dyn LogDispatcher>,
    labels: Arc<dyn LabelResolver>,
    error_sink: Arc<dyn ErrorSink>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        config_store: Arc<dyn ModerationConfigStore>,
        case_store: Arc<dyn CaseStore>,
        dispatcher: Arc<dyn LogDispatcher>,
        labels: Arc<dyn LabelResolver>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            config_store,
            case_store,
            dispatcher,
            labels,
            error_sink,
        }
    }

    /// Create a context backed by the Postgres stores on the given pool
    ///
    /// Dispatch, localization, and error reporting stay pluggable; only
    /// the persistence side is wired here.
    pub fn postgres(
        pool: PgPool,
        dispatcher: Arc<dyn LogDispatcher>,
        labels: Arc<dyn LabelResolver>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Self {
        Self::new(
            Arc::new(PgModerationConfigStore::new(pool.clone())),
            Arc::new(PgCaseStore::new(pool)),
            dispatcher,
            labels,
            error_sink,
        )
    }

    pub fn config_store(&self) -> &dyn ModerationConfigStore {
        self.config_store.as_ref()
    }

    /// Shared handle to the config store, for components that hold it
    pub fn config_store_arc(&self) -> Arc<dyn ModerationConfigStore> {
        Arc::clone(&self.config_store)
    }

    pub fn case_store(&self) -> &dyn CaseStore {
        self.case_store.as_ref()
    }

    pub fn dispatcher(&self) -> &dyn LogDispatcher {
        self.dispatcher.as_ref()
    }

    pub fn labels(&self) -> &dyn LabelResolver {
        self.labels.as_ref()
    }

    pub fn error_sink(&self) -> &dyn ErrorSink {
        self.error_sink.as_ref()
    }
}
