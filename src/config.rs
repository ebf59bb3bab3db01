
#[cfg(debug_assertions)]
pub fn get_upload_endpoint() -> &'static str {
    "http://localhost:3001/api/upload"  // Development upload server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_upload_endpoint() -> &'static str {
    "https://fm-upload-server.onrender.com/api/upload"
}

// Remote image host, every display URL starts here
pub const ASSET_HOST: &str = "https://res.cloudinary.com/dpzgcco2c/image/upload";
pub const ASSET_FOLDER: &str = "fm-projects";

// Served next to index.html, one folder per category
pub const MANIFEST_ROOT: &str = "/assets";

pub const GALLERY_TRANSFORM: &str = "c_fill,w_800,h_600,q_auto,f_auto";
pub const THUMBNAIL_TRANSFORM: &str = "c_thumb,w_400,h_300,q_auto";
pub const MODAL_TRANSFORM: &str = "c_limit,w_1200,q_auto";

pub const WHATSAPP_NUMBER: &str = "27734236523";

pub const AUTOPLAY_INTERVAL_MS: u32 = 4000;
pub const HANDOFF_CLOSE_DELAY_MS: u32 = 1300;
pub const MAX_UPLOAD_FILES: usize = 10;

pub const THEME_STORAGE_KEY: &str = "fm_theme";
