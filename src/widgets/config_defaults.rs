use super::naming::DEFAULT_MAX_NAME_LENGTH;

pub(super) const MAX_NAME_LENGTH_LIMIT: usize = 64;
pub(super) const MAX_PERSIST_DELAY_MS: u64 = 10_000;

pub(super) fn clamp_max_name_length(value: usize) -> usize {
    value.clamp(1, MAX_NAME_LENGTH_LIMIT)
}

pub(super) fn clamp_persist_delay_ms(value: u64) -> u64 {
    value.min(MAX_PERSIST_DELAY_MS)
}

pub(super) fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}

pub(super) fn default_docs_base_url() -> String {
    "https://docs.appsmith.com/widget-reference".to_string()
}

pub(super) fn default_persist_delay_ms() -> u64 {
    250
}

pub(super) fn default_log_filter() -> String {
    "info".to_string()
}

pub(super) fn default_max_log_files() -> usize {
    10
}

pub(super) fn default_true() -> bool {
    true
}
