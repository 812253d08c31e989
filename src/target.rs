use std::fmt;

/// Platform and architecture used to pick the release asset for this machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    pub platform: String,
    pub arch: String,
}

/// Map a reported operating system name to the platform tag used in asset names.
/// Unknown systems pass through unchanged.
pub fn platform_tag(os: &str) -> String {
    match os {
        "Windows" | "windows" => "win".to_string(),
        "Linux" | "linux" => "linux".to_string(),
        "Darwin" | "macos" => "osx".to_string(),
        other => other.to_string(),
    }
}

/// Map a reported machine architecture to the architecture tag used in asset names.
/// Anything but the vendor spelling of 64-bit x86 passes through unchanged.
pub fn arch_tag(machine: &str) -> String {
    match machine {
        "AMD64" | "amd64" => "x86_64".to_string(),
        other => other.to_string(),
    }
}

/// Translate Rust's compile-time OS/arch names into the spelling the host
/// itself reports (uname on Unix, the vendor tag on Windows).
pub fn reported_host(os: &str, arch: &str) -> (String, String) {
    let reported_os = match os {
        "windows" => "Windows",
        "linux" => "Linux",
        "macos" => "Darwin",
        other => other,
    };
    let reported_arch = match (os, arch) {
        ("windows", "x86_64") => "AMD64",
        ("windows", "aarch64") => "ARM64",
        ("macos", "aarch64") => "arm64",
        ("linux", "x86") => "i686",
        (_, other) => other,
    };
    (reported_os.to_string(), reported_arch.to_string())
}

impl TargetSpec {
    pub fn new(os: &str, machine: &str) -> Self {
        Self {
            platform: platform_tag(os),
            arch: arch_tag(machine),
        }
    }

    /// Target of the running host
    pub fn host() -> Self {
        let (os, machine) = reported_host(std::env::consts::OS, std::env::consts::ARCH);
        Self::new(&os, &machine)
    }

    /// Asset name for this target, e.g. "git-lfs-synology.linux-x86_64.zip"
    pub fn asset_name(&self, prefix: &str) -> String {
        format!("{prefix}.{}-{}.zip", self.platform, self.arch)
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.arch)
    }
}
