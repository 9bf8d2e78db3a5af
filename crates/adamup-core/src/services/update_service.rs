//! Update check and install flow.
//!
//! One service instance is shared by every trigger: activation, the daily
//! schedule and the manual command. Runs may overlap; each one downloads into
//! its own temporary file, so they never interfere on disk.
//!
//! Failures are handled where they happen: a line goes to the output channel,
//! an error toast goes to the user, and the returned outcome records which
//! branch was taken. Nothing propagates to the host.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::domain::{InstallOutcome, UpdateCheckResult, UpdateOutcome};
use crate::paths::{TempBundle, ensure_storage_dir};
use crate::ports::{
    ExtensionHostPort, OutputChannelPort, PromptRequest, UpdateError, UpdateSourcePort,
    UserNotifierPort,
};
use crate::settings::UpdaterConfig;

/// Accept label of the update prompt.
pub const ACTION_YES: &str = "Yes";
/// Decline label of the update prompt.
pub const ACTION_NO: &str = "No";
/// Accept label of the reload prompt.
pub const ACTION_RELOAD: &str = "Reload";

/// Ports the update service depends on.
#[derive(Clone)]
pub struct UpdateServiceDeps {
    /// The editor hosting the extension.
    pub host: Arc<dyn ExtensionHostPort>,
    /// Remote version file and bundle.
    pub source: Arc<dyn UpdateSourcePort>,
    /// Toasts and prompts.
    pub notifier: Arc<dyn UserNotifierPort>,
    /// The extension's output channel.
    pub output: Arc<dyn OutputChannelPort>,
}

/// Checks for, downloads and installs extension updates.
pub struct UpdateService {
    config: UpdaterConfig,
    host: Arc<dyn ExtensionHostPort>,
    source: Arc<dyn UpdateSourcePort>,
    notifier: Arc<dyn UserNotifierPort>,
    output: Arc<dyn OutputChannelPort>,
    generation: AtomicU64,
}

impl UpdateService {
    /// Create a service from validated configuration and its ports.
    pub fn new(config: UpdaterConfig, deps: UpdateServiceDeps) -> Self {
        Self {
            config,
            host: deps.host,
            source: deps.source,
            notifier: deps.notifier,
            output: deps.output,
            generation: AtomicU64::new(0),
        }
    }

    /// The configuration this service runs with.
    pub const fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Compare installed and published versions and offer an update.
    ///
    /// On "Yes" this continues into [`Self::download_and_install_update`].
    pub async fn check_for_updates(&self) -> UpdateOutcome {
        let extension_id = &self.config.extension_id;

        let Some(current_version) = self.host.installed_version(extension_id).await else {
            let err = UpdateError::ExtensionNotFound {
                id: extension_id.clone(),
            };
            warn!(%extension_id, "Installed extension not found");
            self.report_error(&err.to_string());
            return UpdateOutcome::ExtensionNotFound;
        };
        self.output
            .append_line(&format!("Current version: {current_version}"));

        let body = match self.source.fetch_latest_version().await {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "Version check failed");
                self.report_error(&format!("Error checking for updates: {err}"));
                return UpdateOutcome::CheckFailed(err);
            }
        };

        let check = UpdateCheckResult::compare(current_version, &body);
        self.output
            .append_line(&format!("Latest version: {}", check.latest_version));
        debug!(
            current = %check.current_version,
            latest = %check.latest_version,
            needs_update = check.needs_update,
            "Compared versions"
        );

        if !check.needs_update {
            self.report_info(&format!("{} is up to date.", self.config.display_name));
            return UpdateOutcome::UpToDate(check);
        }

        let prompt = PromptRequest::new(
            format!(
                "A new version ({}) of {} is available. Would you like to update?",
                check.latest_version, self.config.display_name
            ),
            &[ACTION_YES, ACTION_NO],
        );

        match self.notifier.ask(prompt).await.as_deref() {
            Some(ACTION_YES) => {
                info!(version = %check.latest_version, "Update accepted");
                let install = self.download_and_install_update().await;
                UpdateOutcome::Accepted { check, install }
            }
            _ => {
                info!(version = %check.latest_version, "Update declined");
                UpdateOutcome::Declined(check)
            }
        }
    }

    /// Download the bundle, install it, and offer a window reload.
    ///
    /// The temporary bundle is deleted as soon as the host returns from the
    /// install, whatever the result.
    pub async fn download_and_install_update(&self) -> InstallOutcome {
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let storage_dir = self.storage_dir();

        if let Err(e) = ensure_storage_dir(&storage_dir) {
            let err = UpdateError::filesystem("prepare storage directory", e);
            self.report_error(&format!("Error during update: {err}"));
            return InstallOutcome::DownloadFailed(err);
        }

        let bundle = TempBundle::allocate(&storage_dir, &self.config.temp_file_prefix, generation);
        debug!(generation, path = %bundle.path().display(), "Downloading update bundle");

        if let Err(err) = self.source.download_bundle(bundle.path()).await {
            warn!(generation, error = %err, "Bundle download failed");
            self.report_error(&format!("Error during update: {err}"));
            return InstallOutcome::DownloadFailed(err);
        }

        self.report_info("Update downloaded. Installing...");

        let installed = self.host.install_package(bundle.path()).await;
        drop(bundle);

        if let Err(err) = installed {
            warn!(generation, error = %err, "Install failed");
            self.report_error(&format!("Error during update: {err}"));
            return InstallOutcome::InstallFailed(err);
        }
        info!(generation, "Update installed");

        let prompt = PromptRequest::new(
            format!(
                "{} updated. Please reload the window.",
                self.config.display_name
            ),
            &[ACTION_RELOAD],
        );
        let reloaded = match self.notifier.ask(prompt).await.as_deref() {
            Some(ACTION_RELOAD) => match self.host.reload_window().await {
                Ok(()) => true,
                Err(err) => {
                    self.report_error(&format!("Error reloading window: {err}"));
                    false
                }
            },
            _ => {
                self.output
                    .append_line("Reload postponed; the update takes effect after the next reload.");
                false
            }
        };

        InstallOutcome::Installed { reloaded }
    }

    fn storage_dir(&self) -> PathBuf {
        self.config
            .storage_dir
            .clone()
            .unwrap_or_else(|| self.host.global_storage_dir())
    }

    fn report_info(&self, message: &str) {
        self.output.append_line(message);
        self.notifier.show_info(message);
    }

    fn report_error(&self, message: &str) {
        self.output.append_line(message);
        self.notifier.show_error(message);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use super::*;
    use crate::ports::{
        MemoryOutputChannel, MockExtensionHostPort, MockUpdateSourcePort, MockUserNotifierPort,
    };

    /// Notifier that answers prompts from a script and records everything.
    #[derive(Default)]
    struct ScriptedNotifier {
        answers: Mutex<VecDeque<Option<String>>>,
        prompts: Mutex<Vec<PromptRequest>>,
        infos: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl ScriptedNotifier {
        fn answering(answers: &[Option<&str>]) -> Arc<Self> {
            let notifier = Self::default();
            *notifier.answers.lock().unwrap() = answers
                .iter()
                .map(|a| a.map(ToString::to_string))
                .collect();
            Arc::new(notifier)
        }

        fn prompts(&self) -> Vec<PromptRequest> {
            self.prompts.lock().unwrap().clone()
        }

        fn infos(&self) -> Vec<String> {
            self.infos.lock().unwrap().clone()
        }

        fn errors(&self) -> Vec<String> {
            self.errors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserNotifierPort for ScriptedNotifier {
        fn show_info(&self, message: &str) {
            self.infos.lock().unwrap().push(message.to_string());
        }

        fn show_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }

        async fn ask(&self, request: PromptRequest) -> Option<String> {
            self.prompts.lock().unwrap().push(request);
            self.answers.lock().unwrap().pop_front().flatten()
        }
    }

    fn host_with_version(version: Option<&str>, storage: &Path) -> MockExtensionHostPort {
        let mut host = MockExtensionHostPort::new();
        let version = version.map(ToString::to_string);
        host.expect_installed_version()
            .withf(|id| id == "AdamAI.adam-vscode")
            .returning(move |_| version.clone());
        host.expect_global_storage_dir()
            .return_const(storage.to_path_buf());
        host
    }

    fn source_serving(body: &str) -> MockUpdateSourcePort {
        let mut source = MockUpdateSourcePort::new();
        let body = body.to_string();
        source
            .expect_fetch_latest_version()
            .times(1)
            .returning(move || Ok(body.clone()));
        source
    }

    fn build(
        host: MockExtensionHostPort,
        source: MockUpdateSourcePort,
        notifier: Arc<dyn UserNotifierPort>,
    ) -> (UpdateService, Arc<MemoryOutputChannel>) {
        let output = Arc::new(MemoryOutputChannel::new());
        let service = UpdateService::new(
            UpdaterConfig::default(),
            UpdateServiceDeps {
                host: Arc::new(host),
                source: Arc::new(source),
                notifier,
                output: output.clone(),
            },
        );
        (service, output)
    }

    fn dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).map_or(true, |mut entries| entries.next().is_none())
    }

    #[tokio::test]
    async fn test_equal_versions_are_up_to_date_without_download() {
        let storage = TempDir::new().unwrap();
        let host = host_with_version(Some("3.2.0"), storage.path());
        let mut source = source_serving("3.2.0");
        source.expect_download_bundle().never();
        let notifier = ScriptedNotifier::answering(&[]);

        let (service, output) = build(host, source, notifier.clone());
        let outcome = service.check_for_updates().await;

        assert!(matches!(outcome, UpdateOutcome::UpToDate(ref c) if !c.needs_update));
        assert!(notifier.prompts().is_empty());
        assert_eq!(notifier.infos(), vec!["Adam VS Code Extension is up to date."]);
        assert!(output.contains("Current version: 3.2.0"));
        assert!(output.contains("Latest version: 3.2.0"));
        assert!(output.contains("is up to date."));
    }

    #[tokio::test]
    async fn test_lexicographically_older_remote_still_prompts() {
        let storage = TempDir::new().unwrap();
        let host = host_with_version(Some("3.2.0"), storage.path());
        let mut source = source_serving("3.1.0");
        source.expect_download_bundle().never();
        let notifier = ScriptedNotifier::answering(&[None]);

        let (service, _output) = build(host, source, notifier.clone());
        let outcome = service.check_for_updates().await;

        assert!(matches!(outcome, UpdateOutcome::Declined(_)));
        let prompts = notifier.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0].message,
            "A new version (3.1.0) of Adam VS Code Extension is available. Would you like to update?"
        );
        assert_eq!(prompts[0].actions, vec!["Yes", "No"]);
    }

    #[tokio::test]
    async fn test_declining_never_downloads_or_installs() {
        let storage = TempDir::new().unwrap();
        let mut host = host_with_version(Some("3.1.0"), storage.path());
        host.expect_install_package().never();
        let mut source = source_serving("3.2.0");
        source.expect_download_bundle().never();

        let mut notifier = MockUserNotifierPort::new();
        notifier
            .expect_ask()
            .withf(|req| req.actions == [ACTION_YES, ACTION_NO])
            .times(1)
            .returning(|_| Some(ACTION_NO.to_string()));
        notifier.expect_show_info().never();
        notifier.expect_show_error().never();

        let (service, _output) = build(host, source, Arc::new(notifier));
        let outcome = service.check_for_updates().await;

        match outcome {
            UpdateOutcome::Declined(check) => {
                assert_eq!(check.latest_version, "3.2.0");
                assert!(check.needs_update);
            }
            other => panic!("expected Declined, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_accepted_update_installs_and_reloads() {
        let storage = TempDir::new().unwrap();
        let installed_from: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));

        let mut host = host_with_version(Some("3.1.0"), storage.path());
        let seen = installed_from.clone();
        host.expect_install_package().times(1).returning(move |path| {
            assert!(path.exists(), "bundle must exist while installing");
            assert_eq!(std::fs::read(path).unwrap(), b"PK\x03\x04bundle");
            *seen.lock().unwrap() = Some(path.to_path_buf());
            Ok(())
        });
        host.expect_reload_window().times(1).returning(|| Ok(()));

        // Trailing newline on the remote version file
        let mut source = source_serving("3.2.0\n");
        source.expect_download_bundle().times(1).returning(|dest| {
            std::fs::write(dest, b"PK\x03\x04bundle").unwrap();
            Ok(())
        });

        let notifier = ScriptedNotifier::answering(&[Some(ACTION_YES), Some(ACTION_RELOAD)]);
        let (service, output) = build(host, source, notifier.clone());

        let outcome = service.check_for_updates().await;

        match outcome {
            UpdateOutcome::Accepted { check, install } => {
                assert_eq!(check.current_version, "3.1.0");
                assert_eq!(check.latest_version, "3.2.0");
                assert_eq!(install, InstallOutcome::Installed { reloaded: true });
            }
            other => panic!("expected Accepted, got {other:?}"),
        }

        let path = installed_from.lock().unwrap().clone().unwrap();
        assert_eq!(path.parent(), Some(storage.path()));
        assert!(!path.exists(), "bundle must be removed after install");
        assert!(dir_is_empty(storage.path()));

        let prompts = notifier.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(
            prompts[1].message,
            "Adam VS Code Extension updated. Please reload the window."
        );
        assert_eq!(prompts[1].actions, vec!["Reload"]);
        assert_eq!(notifier.infos(), vec!["Update downloaded. Installing..."]);
        assert!(notifier.errors().is_empty());
        assert!(output.contains("Update downloaded. Installing..."));
    }

    #[tokio::test]
    async fn test_declined_reload_leaves_update_installed() {
        let storage = TempDir::new().unwrap();
        let mut host = host_with_version(Some("1.0.0"), storage.path());
        host.expect_install_package().times(1).returning(|_| Ok(()));
        host.expect_reload_window().never();

        let mut source = MockUpdateSourcePort::new();
        source.expect_download_bundle().times(1).returning(|dest| {
            std::fs::write(dest, b"bundle").unwrap();
            Ok(())
        });

        let notifier = ScriptedNotifier::answering(&[None]);
        let (service, output) = build(host, source, notifier);

        let outcome = service.download_and_install_update().await;

        assert_eq!(outcome, InstallOutcome::Installed { reloaded: false });
        assert!(output.contains("Reload postponed"));
        assert!(dir_is_empty(storage.path()));
    }

    #[tokio::test]
    async fn test_download_failure_reports_and_never_installs() {
        let storage = TempDir::new().unwrap();
        let mut host = host_with_version(Some("3.1.0"), storage.path());
        host.expect_install_package().never();

        let mut source = source_serving("3.2.0");
        source.expect_download_bundle().times(1).returning(|dest| {
            // Partial write before the connection drops
            std::fs::write(dest, b"PK\x03").unwrap();
            Err(UpdateError::network("connection reset by peer"))
        });

        let notifier = ScriptedNotifier::answering(&[Some(ACTION_YES)]);
        let (service, output) = build(host, source, notifier.clone());

        let outcome = service.check_for_updates().await;

        match outcome {
            UpdateOutcome::Accepted { install, .. } => assert_eq!(
                install,
                InstallOutcome::DownloadFailed(UpdateError::network("connection reset by peer"))
            ),
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(
            notifier.errors(),
            vec!["Error during update: connection reset by peer"]
        );
        assert!(output.contains("Error during update: connection reset by peer"));
        assert!(dir_is_empty(storage.path()), "partial bundle must not remain");
    }

    #[tokio::test]
    async fn test_install_failure_still_removes_bundle() {
        let storage = TempDir::new().unwrap();
        let mut host = host_with_version(Some("1.0.0"), storage.path());
        host.expect_install_package()
            .times(1)
            .returning(|_| Err(UpdateError::install("package signature mismatch")));
        host.expect_reload_window().never();

        let mut source = MockUpdateSourcePort::new();
        source.expect_download_bundle().times(1).returning(|dest| {
            std::fs::write(dest, b"bundle").unwrap();
            Ok(())
        });

        let notifier = ScriptedNotifier::answering(&[]);
        let (service, _output) = build(host, source, notifier.clone());

        let outcome = service.download_and_install_update().await;

        assert_eq!(
            outcome,
            InstallOutcome::InstallFailed(UpdateError::install("package signature mismatch"))
        );
        assert!(notifier.prompts().is_empty(), "no reload prompt after a failed install");
        assert_eq!(
            notifier.errors(),
            vec!["Error during update: package signature mismatch"]
        );
        assert!(dir_is_empty(storage.path()));
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_without_prompt() {
        let storage = TempDir::new().unwrap();
        let host = host_with_version(Some("3.1.0"), storage.path());
        let mut source = MockUpdateSourcePort::new();
        source
            .expect_fetch_latest_version()
            .times(1)
            .returning(|| Err(UpdateError::network("getaddrinfo ENOTFOUND")));
        source.expect_download_bundle().never();

        let notifier = ScriptedNotifier::answering(&[]);
        let (service, output) = build(host, source, notifier.clone());

        let outcome = service.check_for_updates().await;

        assert_eq!(
            outcome,
            UpdateOutcome::CheckFailed(UpdateError::network("getaddrinfo ENOTFOUND"))
        );
        assert!(notifier.prompts().is_empty());
        assert!(notifier.infos().is_empty());
        assert_eq!(
            notifier.errors(),
            vec!["Error checking for updates: getaddrinfo ENOTFOUND"]
        );
        assert!(!output.contains("up to date"));
    }

    #[tokio::test]
    async fn test_missing_extension_skips_network() {
        let storage = TempDir::new().unwrap();
        let host = host_with_version(None, storage.path());
        let mut source = MockUpdateSourcePort::new();
        source.expect_fetch_latest_version().never();
        source.expect_download_bundle().never();

        let notifier = ScriptedNotifier::answering(&[]);
        let (service, output) = build(host, source, notifier.clone());

        let outcome = service.check_for_updates().await;

        assert_eq!(outcome, UpdateOutcome::ExtensionNotFound);
        assert_eq!(
            notifier.errors(),
            vec!["Cannot find extension with ID AdamAI.adam-vscode"]
        );
        assert!(output.contains("Cannot find extension with ID AdamAI.adam-vscode"));
    }

    #[tokio::test]
    async fn test_overlapping_runs_use_distinct_bundles() {
        let storage = TempDir::new().unwrap();
        let paths: Arc<Mutex<Vec<PathBuf>>> = Arc::new(Mutex::new(Vec::new()));

        let mut host = host_with_version(Some("1.0.0"), storage.path());
        host.expect_install_package().times(2).returning(|_| Ok(()));

        let mut source = MockUpdateSourcePort::new();
        let seen = paths.clone();
        source.expect_download_bundle().times(2).returning(move |dest| {
            std::fs::write(dest, b"bundle").unwrap();
            seen.lock().unwrap().push(dest.to_path_buf());
            Ok(())
        });

        let notifier = ScriptedNotifier::answering(&[None, None]);
        let (service, _output) = build(host, source, notifier);

        let (first, second) = tokio::join!(
            service.download_and_install_update(),
            service.download_and_install_update()
        );

        assert!(first.is_installed());
        assert!(second.is_installed());
        let paths = paths.lock().unwrap().clone();
        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
        assert!(dir_is_empty(storage.path()));
    }

    #[tokio::test]
    async fn test_configured_storage_dir_wins_over_host() {
        let host_storage = TempDir::new().unwrap();
        let configured = TempDir::new().unwrap();
        let target = configured.path().join("nested");

        let mut host = host_with_version(Some("1.0.0"), host_storage.path());
        host.expect_install_package().times(1).returning(|_| Ok(()));

        let mut source = MockUpdateSourcePort::new();
        let expected_parent = target.clone();
        source.expect_download_bundle().times(1).returning(move |dest| {
            assert_eq!(dest.parent(), Some(expected_parent.as_path()));
            std::fs::write(dest, b"bundle").unwrap();
            Ok(())
        });

        let service = UpdateService::new(
            UpdaterConfig {
                storage_dir: Some(target.clone()),
                ..UpdaterConfig::default()
            },
            UpdateServiceDeps {
                host: Arc::new(host),
                source: Arc::new(source),
                notifier: ScriptedNotifier::answering(&[None]),
                output: Arc::new(MemoryOutputChannel::new()),
            },
        );

        let outcome = service.download_and_install_update().await;

        assert!(outcome.is_installed());
        assert!(target.is_dir(), "storage directory is created on demand");
        assert!(dir_is_empty(&target));
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_update_installed() {
        let storage = TempDir::new().unwrap();
        let mut host = host_with_version(Some("1.0.0"), storage.path());
        host.expect_install_package().times(1).returning(|_| Ok(()));
        host.expect_reload_window()
            .times(1)
            .returning(|| Err(UpdateError::reload("window is not focused")));

        let mut source = MockUpdateSourcePort::new();
        source.expect_download_bundle().times(1).returning(|dest| {
            std::fs::write(dest, b"bundle").unwrap();
            Ok(())
        });

        let notifier = ScriptedNotifier::answering(&[Some(ACTION_RELOAD)]);
        let (service, output) = build(host, source, notifier.clone());

        let outcome = service.download_and_install_update().await;

        assert_eq!(outcome, InstallOutcome::Installed { reloaded: false });
        assert_eq!(
            notifier.errors(),
            vec!["Error reloading window: window is not focused"]
        );
        assert!(output.contains("Error reloading window: window is not focused"));
        assert!(!output.contains("Reload postponed"));
        assert!(dir_is_empty(storage.path()));
    }

    #[tokio::test]
    async fn test_storage_dir_blocked_by_file_fails_before_download() {
        let scratch = TempDir::new().unwrap();
        let blocker = scratch.path().join("not-a-directory");
        std::fs::write(&blocker, b"occupied").unwrap();

        let mut host = host_with_version(Some("1.0.0"), scratch.path());
        host.expect_install_package().never();
        host.expect_reload_window().never();
        let mut source = MockUpdateSourcePort::new();
        source.expect_download_bundle().never();

        let notifier = ScriptedNotifier::answering(&[]);
        let output = Arc::new(MemoryOutputChannel::new());
        let service = UpdateService::new(
            UpdaterConfig {
                storage_dir: Some(blocker.clone()),
                ..UpdaterConfig::default()
            },
            UpdateServiceDeps {
                host: Arc::new(host),
                source: Arc::new(source),
                notifier: notifier.clone(),
                output: output.clone(),
            },
        );

        let outcome = service.download_and_install_update().await;

        match outcome {
            InstallOutcome::DownloadFailed(UpdateError::Filesystem { ref operation, .. }) => {
                assert_eq!(operation, "prepare storage directory");
            }
            other => panic!("expected DownloadFailed(Filesystem), got {other:?}"),
        }
        assert!(notifier.prompts().is_empty());
        let errors = notifier.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error during update: Failed to prepare storage directory"));
        assert!(output.contains("Error during update: Failed to prepare storage directory"));
        assert_eq!(std::fs::read(&blocker).unwrap(), b"occupied");
    }
}
