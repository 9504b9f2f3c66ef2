use std::sync::Arc;

pub mod api;
pub mod constant;
pub mod error;
pub mod logging;
pub mod model;
pub mod repository;
pub mod usecase;

mod config;
pub use config::{
    AppBasepathCfg, AppCfgHardLimit, AppCfgInitArgs, AppConfig, AppDataStoreCfg, AppInMemoryDbCfg,
    AppLogHandlerCfg, AppLoggerCfg, AppLoggingCfg, AppServiceCfg,
};

mod adapter;
pub use adapter::datastore;

type AppLogAlias = Arc<String>;

pub struct AppDataStoreContext {
    pub in_mem: Option<Arc<Box<dyn datastore::AbstInMemoryDStore>>>,
} // TODO, extra field for database-server connection pools

// global state shared by all threads
pub struct AppSharedState {
    _cfg: Arc<AppConfig>,
    _log: Arc<logging::AppLogContext>,
    dstore: Arc<AppDataStoreContext>,
}

impl AppSharedState {
    pub fn new(cfg: AppConfig, log: logging::AppLogContext) -> Self {
        let in_mem = datastore::build_context(&cfg.service.data_store);
        let in_mem = in_mem.map(Arc::new);
        let ds_ctx = Arc::new(AppDataStoreContext { in_mem });
        Self {
            _cfg: Arc::new(cfg),
            _log: Arc::new(log),
            dstore: ds_ctx,
        }
    }

    pub fn config(&self) -> &Arc<AppConfig> {
        &self._cfg
    }

    pub fn log_context(&self) -> &Arc<logging::AppLogContext> {
        &self._log
    }

    pub fn datastore(&self) -> Arc<AppDataStoreContext> {
        self.dstore.clone()
    }
} // end of impl AppSharedState

impl Clone for AppSharedState {
    fn clone(&self) -> Self {
        Self {
            _cfg: self._cfg.clone(),
            _log: self._log.clone(),
            dstore: self.dstore.clone(),
        }
    }
}
