/// URL prefix under which `STATIC_DIR/images` is served.
pub const STATIC_IMAGES_PREFIX: &str = "/static/images";

/// A validated add submission, ready to insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub rating: Option<f64>,
    pub ranking: Option<i32>,
    pub review: Option<String>,
    pub img_url: String,
}

/// The two fields an edit is allowed to change.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewUpdate {
    pub rating: f64,
    pub review: String,
}

/// Absolute http(s) URLs pass through; anything else is a file in the static images dir.
pub fn resolve_image_url(img_url: &str) -> String {
    if img_url.starts_with("http://") || img_url.starts_with("https://") {
        img_url.to_string()
    } else {
        format!("{}/{}", STATIC_IMAGES_PREFIX, urlencoding::encode(img_url))
    }
}
