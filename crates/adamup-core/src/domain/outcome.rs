//! How a single update check or install ended.
//!
//! Every failure in the update flow is reported to the user where it happens;
//! these outcomes only tell the caller which branch was taken.

use crate::ports::UpdateError;

use super::UpdateCheckResult;

/// Result of one `check_for_updates` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The host has no installed extension with the configured id.
    ExtensionNotFound,
    /// The version file could not be fetched.
    CheckFailed(UpdateError),
    /// Installed and published versions are identical.
    UpToDate(UpdateCheckResult),
    /// An update was offered and the user said no or dismissed the prompt.
    Declined(UpdateCheckResult),
    /// An update was offered and accepted.
    Accepted {
        /// The comparison that triggered the prompt.
        check: UpdateCheckResult,
        /// What happened during download and install.
        install: InstallOutcome,
    },
}

impl UpdateOutcome {
    /// Whether the run ended without an error being reported.
    pub const fn is_success(&self) -> bool {
        match self {
            Self::UpToDate(_) | Self::Declined(_) => true,
            Self::Accepted { install, .. } => install.is_installed(),
            Self::ExtensionNotFound | Self::CheckFailed(_) => false,
        }
    }
}

/// Result of one `download_and_install_update` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The bundle could not be streamed to disk. Install was not attempted.
    DownloadFailed(UpdateError),
    /// The host rejected the package. The old version stays active.
    InstallFailed(UpdateError),
    /// The package was installed.
    Installed {
        /// Whether the host actually reloaded the window. `false` when the
        /// user postponed the reload or the host could only ask for one.
        reloaded: bool,
    },
}

impl InstallOutcome {
    /// Whether the host accepted the package.
    pub const fn is_installed(&self) -> bool {
        matches!(self, Self::Installed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_classification() {
        let check = UpdateCheckResult::compare("1.0.0", "1.1.0");

        assert!(UpdateOutcome::UpToDate(check.clone()).is_success());
        assert!(UpdateOutcome::Declined(check.clone()).is_success());
        assert!(!UpdateOutcome::ExtensionNotFound.is_success());
        assert!(!UpdateOutcome::CheckFailed(UpdateError::network("offline")).is_success());

        let installed = UpdateOutcome::Accepted {
            check: check.clone(),
            install: InstallOutcome::Installed { reloaded: false },
        };
        assert!(installed.is_success());

        let failed = UpdateOutcome::Accepted {
            check,
            install: InstallOutcome::InstallFailed(UpdateError::install("corrupt package")),
        };
        assert!(!failed.is_success());
    }
}
