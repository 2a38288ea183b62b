use super::VigilConfig;

/// Overlay `VIGIL_*` environment variables onto a loaded config.
///
/// Unparseable values are ignored and the file/default value is kept.
pub fn apply_env_overrides(config: &mut VigilConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

fn apply_overrides<F>(config: &mut VigilConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("VIGIL_REFRESH_INTERVAL_MS") {
        if let Ok(n) = v.parse::<u64>() {
            config.refresh.interval_ms = n;
        }
    }
    if let Some(v) = lookup("VIGIL_COUNTER_DURATION_MS") {
        if let Ok(n) = v.parse::<u64>() {
            config.counter.duration_ms = n;
        }
    }
    if let Some(v) = lookup("VIGIL_COUNTER_STEPS") {
        if let Ok(n) = v.parse::<u32>() {
            config.counter.steps = n;
        }
    }
    if let Some(v) = lookup("VIGIL_SEED") {
        if let Ok(n) = v.parse::<u64>() {
            config.generator.seed = Some(n);
        }
    }
}
