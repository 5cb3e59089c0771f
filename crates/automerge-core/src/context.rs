use std::sync::Arc;

use automerge_config::Config;
use automerge_ghapi_interface::ApiService;

use crate::{
    services::{ErrorReporter, RepositoryConfigService},
    CoreModule,
};

/// Services shared by every worker of the process.
#[derive(Clone)]
pub struct CoreContext {
    pub config: Arc<Config>,
    pub core_module: Arc<CoreModule>,
    pub api_service: Arc<dyn ApiService>,
    pub config_service: Arc<dyn RepositoryConfigService>,
    pub error_reporter: Arc<dyn ErrorReporter>,
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use std::sync::Arc;

    use automerge_config::Config;
    use automerge_ghapi_interface::MockApiService;

    use crate::{
        services::{MockErrorReporter, MockRepositoryConfigService},
        CoreContext, CoreModule,
    };

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub config_service: MockRepositoryConfigService,
        pub error_reporter: MockErrorReporter,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version();
            config.name = "auto-merge".into();

            Self {
                config,
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                config_service: MockRepositoryConfigService::new(),
                error_reporter: MockErrorReporter::new(),
            }
        }

        #[allow(dead_code)]
        pub fn into_context(self) -> CoreContext {
            CoreContext {
                config: Arc::new(self.config),
                core_module: Arc::new(self.core_module),
                api_service: Arc::new(self.api_service),
                config_service: Arc::new(self.config_service),
                error_reporter: Arc::new(self.error_reporter),
            }
        }
    }
}
