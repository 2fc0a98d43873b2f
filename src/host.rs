//! Host introspection behind a small capability trait.
//!
//! Live values (hostname, CPU count, OS version) vary per machine, so the
//! lookup sits behind [`HostInfoProvider`] and can be stubbed in tests.

use serde::Serialize;
use std::sync::Arc;
use sysinfo::{CpuRefreshKind, System};

/// Process-wide system facts, computed fresh per request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SystemSnapshot {
    /// Host name as reported by the OS.
    pub hostname: String,
    /// Operating-system family (e.g. "linux", "macos", "windows").
    pub platform: String,
    /// Detailed OS version string.
    pub platform_version: String,
    /// CPU architecture.
    pub architecture: String,
    /// Logical CPU count; unavailable on some hosts.
    pub cpu_count: Option<usize>,
    /// Toolchain version the service was built with.
    pub rust_version: String,
}

/// Capability interface for querying host facts.
pub trait HostInfoProvider: Send + Sync {
    /// Collect a fresh snapshot of the host. No caching.
    fn snapshot(&self) -> SystemSnapshot;
}

/// Live provider backed by the `sysinfo` crate.
#[derive(Debug, Default)]
pub struct SysinfoHost;

impl SysinfoHost {
    /// Create a shareable live provider.
    pub fn shared() -> Arc<dyn HostInfoProvider> {
        Arc::new(Self)
    }
}

impl HostInfoProvider for SysinfoHost {
    fn snapshot(&self) -> SystemSnapshot {
        let mut sys = System::new();
        sys.refresh_cpu_list(CpuRefreshKind::nothing());
        let cpus = sys.cpus().len();

        SystemSnapshot {
            hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            platform: std::env::consts::OS.to_string(),
            platform_version: System::long_os_version()
                .or_else(System::kernel_version)
                .unwrap_or_else(|| "unknown".to_string()),
            architecture: std::env::consts::ARCH.to_string(),
            cpu_count: (cpus > 0).then_some(cpus),
            rust_version: env!("INFO_SERVICE_RUSTC_VERSION").to_string(),
        }
    }
}

/// Fixed-value provider for deterministic assertions in tests.
pub mod mock {
    use super::*;

    /// Mock provider returning the same snapshot on every call.
    #[derive(Debug, Clone)]
    pub struct MockHost(pub SystemSnapshot);

    impl MockHost {
        /// Create a shareable mock provider with fixed values.
        pub fn shared() -> Arc<dyn HostInfoProvider> {
            Arc::new(Self(Self::fixed_snapshot()))
        }

        /// The snapshot returned by [`MockHost::shared`].
        pub fn fixed_snapshot() -> SystemSnapshot {
            SystemSnapshot {
                hostname: "test-host".to_string(),
                platform: "linux".to_string(),
                platform_version: "Test Linux 1.0".to_string(),
                architecture: "x86_64".to_string(),
                cpu_count: Some(2),
                rust_version: "rustc 1.0.0-test".to_string(),
            }
        }
    }

    impl HostInfoProvider for MockHost {
        fn snapshot(&self) -> SystemSnapshot {
            self.0.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_snapshot_reports_os_family() {
        let snapshot = SysinfoHost.snapshot();
        assert_eq!(snapshot.platform, std::env::consts::OS);
        assert_eq!(snapshot.architecture, std::env::consts::ARCH);
    }

    #[test]
    fn live_snapshot_has_nonempty_hostname() {
        let snapshot = SysinfoHost.snapshot();
        assert!(!snapshot.hostname.is_empty());
    }

    #[test]
    fn mock_snapshot_is_deterministic() {
        let provider = mock::MockHost::shared();
        assert_eq!(provider.snapshot(), provider.snapshot());
    }
}
