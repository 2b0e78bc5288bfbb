//! Runtime feature flag handling.
//!
//! Features are switched two ways in Roomify: compile-time cargo features
//! (`openapi`) and runtime flags in the configuration (`use_firestore`,
//! `use_agenda`). A runtime feature counts as enabled only when its flag is
//! set AND its configuration section is present.

use roomify_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}
