// DOM contract and rendering constants for the web front-end.

// Canvases
pub const STARFIELD_CANVAS_ID: &str = "starfield-canvas";
pub const VORTEX_CANVAS_ID: &str = "vortex-canvas";
pub const ORBIT_CANVAS_ID: &str = "orbit-canvas";

// Backing store never exceeds 2x CSS size
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
// Container-scoped surfaces measuring zero fall back to this square (CSS px)
pub const CONTAINER_FALLBACK_PX: f32 = 280.0;

// Orbit camera
pub const ORBIT_CAMERA_Z: f32 = 4.5;
pub const ORBIT_FOVY: f32 = std::f32::consts::FRAC_PI_4;

// Glyph rendering
pub const GLYPH_FONT_FAMILY: &str = "'Shadows Into Light', cursive";
pub const GLYPH_GLOW_SATURATION: f32 = 50.0;
pub const GLYPH_GLOW_LIGHTNESS: f32 = 35.0;
pub const GLYPH_GLOW_BLUR_PX: f64 = 8.0;

// Scroll consumers
pub const NAV_UNDERLINE_ATTR: &str = "data-nav-underline";
pub const NAV_LINK_ATTR: &str = "data-nav-link";
pub const NAV_DIRECTION_ATTR: &str = "data-direction";
pub const AURORA_SELECTOR: &str = "[data-aurora]";
pub const PAINS_SELECTOR: &str = "[data-pains]";
pub const PAINS_CONTENT_SELECTOR: &str = "[data-pains-content]";
// Stamped on each pain-point panel at startup, in document order
pub const PAINS_INDEX_ATTR: &str = "data-pains-index";

// Modal surfaces and buttons
pub const IMAGE_MODAL_ID: &str = "image-modal";
pub const IMAGE_MODAL_IMG_ID: &str = "image-modal-img";
pub const IMAGE_MODAL_PREV_ID: &str = "image-modal-prev";
pub const IMAGE_MODAL_NEXT_ID: &str = "image-modal-next";
pub const IMAGE_MODAL_CLOSE_ID: &str = "image-modal-close";
pub const MODAL_IMAGE_SELECTOR: &str = "[data-modal-image]";
pub const IMAGE_SET_ATTR: &str = "data-image-set";
pub const CONTACT_MODAL_ID: &str = "contact-modal";
pub const CONTACT_OPEN_SELECTOR: &str = "[data-open-contact]";
pub const CONTACT_CLOSE_ID: &str = "contact-modal-close";
pub const TAB_ATTR: &str = "data-tab";
pub const TAB_PANEL_ATTR: &str = "data-tab-panel";
pub const BACK_TO_TOP_ID: &str = "back-to-top";

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
