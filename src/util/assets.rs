use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();
static PLACEHOLDER_DATA_URI: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css"))
        .as_str()
}

/// Returns a data URI for the favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| load_data_uri("/assets/favicon.svg"))
        .as_str()
}

/// Data URI for a vehicle photo. Photos that were not shipped fall back to
/// the placeholder.
pub fn vehicle_image_uri(path: &str) -> Cow<'static, str> {
    match find_asset(path) {
        Some(data) if !path.is_empty() => Cow::Owned(to_data_uri(path, &data)),
        _ => Cow::Borrowed(placeholder_data_uri()),
    }
}

fn placeholder_data_uri() -> &'static str {
    PLACEHOLDER_DATA_URI
        .get_or_init(|| load_data_uri(PLACEHOLDER_IMAGE))
        .as_str()
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_data_uri(path: &str) -> String {
    let asset = load_asset(path);
    to_data_uri(path, asset.as_ref())
}

fn to_data_uri(path: &str, data: &[u8]) -> String {
    let mime = guess_mime(path);
    let encoded = STANDARD.encode(data);
    format!("data:{mime};base64,{encoded}")
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    find_asset(path).unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn find_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(&canonical_asset_path(path)).map(|file| file.data)
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}

fn guess_mime(path: &str) -> &'static str {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".css") {
        "text/css"
    } else if lower.ends_with(".svg") {
        "image/svg+xml"
    } else if lower.ends_with(".ico") {
        "image/x-icon"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_photo_falls_back_to_placeholder() {
        let uri = vehicle_image_uri("/no_such_car.jpg");
        assert_eq!(uri.as_ref(), placeholder_data_uri());
        assert!(uri.starts_with("data:image/svg+xml;base64,"));

        assert_eq!(vehicle_image_uri("").as_ref(), placeholder_data_uri());
    }

    #[test]
    fn embedded_stylesheet_is_available() {
        assert!(!main_css().is_empty());
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn asset_paths_are_normalised() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("/bmw.jpg"), "bmw.jpg");
        assert_eq!(guess_mime("/Tesla_Model_3.JPG"), "image/jpeg");
    }

    #[test]
    fn every_catalog_photo_renders_something() {
        for vehicle in crate::domain::CATALOG {
            let uri = vehicle_image_uri(vehicle.image);
            let shipped = find_asset(vehicle.image).is_some();
            assert!(uri.starts_with("data:"), "{}", vehicle.name);
            assert_eq!(uri.as_ref() == placeholder_data_uri(), !shipped, "{}", vehicle.name);
        }
    }
}
