/// Read-only lookup of named settings. Blank values are the caller's concern.
pub trait SettingsSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Reads the process environment on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl SettingsSource for ProcessEnvironment {
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as absent.
        std::env::var(key).ok()
    }
}
