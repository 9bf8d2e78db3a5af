//! Fakes shared by the runtime tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use adamup_core::{
    ExtensionHostPort, NoopOutputChannel, SidebarPort, SilentNotifier, UpdateError,
    UpdateService, UpdateServiceDeps, UpdateSourcePort, UpdaterConfig, WebviewAction,
};
use async_trait::async_trait;

/// Host with version 1.0.0 installed.
pub struct FixedHost;

#[async_trait]
impl ExtensionHostPort for FixedHost {
    async fn installed_version(&self, _extension_id: &str) -> Option<String> {
        Some("1.0.0".to_string())
    }

    fn global_storage_dir(&self) -> PathBuf {
        std::env::temp_dir().join("adamup-runtime-tests")
    }

    async fn install_package(&self, _package: &Path) -> Result<(), UpdateError> {
        Ok(())
    }

    async fn reload_window(&self) -> Result<(), UpdateError> {
        Ok(())
    }
}

/// Source that always publishes 1.0.0 and counts fetches.
#[derive(Default)]
pub struct CountingSource {
    fetches: AtomicUsize,
}

impl CountingSource {
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpdateSourcePort for CountingSource {
    async fn fetch_latest_version(&self) -> Result<String, UpdateError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok("1.0.0\n".to_string())
    }

    async fn download_bundle(&self, _dest: &Path) -> Result<(), UpdateError> {
        Err(UpdateError::network("bundle not served"))
    }
}

/// Source whose version request never completes.
#[derive(Default)]
pub struct PendingSource {
    started: AtomicBool,
}

impl PendingSource {
    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpdateSourcePort for PendingSource {
    async fn fetch_latest_version(&self) -> Result<String, UpdateError> {
        self.started.store(true, Ordering::SeqCst);
        Ok(std::future::pending::<String>().await)
    }

    async fn download_bundle(&self, _dest: &Path) -> Result<(), UpdateError> {
        Err(UpdateError::network("bundle not served"))
    }
}

pub fn service_with(source: Arc<dyn UpdateSourcePort>) -> Arc<UpdateService> {
    Arc::new(UpdateService::new(
        UpdaterConfig::default(),
        UpdateServiceDeps {
            host: Arc::new(FixedHost),
            source,
            notifier: Arc::new(SilentNotifier),
            output: Arc::new(NoopOutputChannel),
        },
    ))
}

pub fn up_to_date_service() -> (Arc<UpdateService>, Arc<CountingSource>) {
    let source = Arc::new(CountingSource::default());
    (service_with(source.clone()), source)
}

/// Sidebar that records every call as a short string.
pub struct RecordingSidebar {
    visible: bool,
    events: Mutex<Vec<String>>,
}

impl RecordingSidebar {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: impl Into<String>) {
        self.events.lock().unwrap().push(event.into());
    }
}

#[async_trait]
impl SidebarPort for RecordingSidebar {
    fn is_visible(&self) -> bool {
        self.visible
    }

    async fn clear_task(&self) {
        self.record("clear_task");
    }

    async fn post_state_to_webview(&self) {
        self.record("post_state");
    }

    async fn post_action(&self, action: WebviewAction) {
        self.record(format!("post_action:{}", action.as_str()));
    }

    async fn open_in_new_tab(&self) {
        self.record("open_in_new_tab");
    }

    async fn handle_openrouter_callback(&self, code: &str) {
        self.record(format!("openrouter:{code}"));
    }
}
