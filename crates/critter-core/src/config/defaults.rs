//! Default values referenced by `#[serde(default = "...")]`.

pub(super) fn default_name() -> String {
    "A Curious Critter".to_string()
}

pub(super) fn default_data_dir() -> String {
    "~/.critter".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_site_root() -> String {
    ".".to_string()
}

pub(super) fn default_essays_dir() -> String {
    "essays".to_string()
}

pub(super) fn default_list_manifest() -> String {
    "essays/manifest.json".to_string()
}

pub(super) fn default_detail_manifest() -> String {
    "manifest.json".to_string()
}

pub(super) fn default_db_path() -> String {
    "~/.critter/data/critter.db".to_string()
}
