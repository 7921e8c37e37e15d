pub const ASSET_PREFIX: &str = "assets/";
pub const IMAGE_DIR: &str = "assets/img/";
pub const PLACEHOLDER_IMAGE: &str = "assets/img/principal.JPG";

/// Turns a raw image reference from a record into a path the host page can load.
///
/// Bare file names land in [`IMAGE_DIR`]; absolute URLs, root-relative paths
/// and anything already under `assets/` are kept as they are.
pub fn normalize_image_path(raw: &str) -> String {
    if raw.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    if raw.starts_with("http") || raw.starts_with('/') || raw.starts_with(ASSET_PREFIX) {
        return raw.to_string();
    }
    format!("{IMAGE_DIR}{raw}")
}
