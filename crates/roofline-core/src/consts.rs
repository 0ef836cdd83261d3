/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Absolute tolerance around the picked roof color during binarization.
pub const DEFAULT_BINARIZE_EPSILON: f32 = 1e-4;

/// Gaussian blur sigma for street-level captures (close, high-resolution roofs).
pub const STREET_BLUR_SIGMA: f32 = 1.0;

/// Gaussian blur sigma for satellite captures (small, noisy roofs).
pub const SATELLITE_BLUR_SIGMA: f32 = 4.0;

/// Canny hysteresis low threshold on gradient magnitude.
pub const DEFAULT_CANNY_LOW: f32 = 0.1;

/// Canny hysteresis high threshold on gradient magnitude.
pub const DEFAULT_CANNY_HIGH: f32 = 0.2;

/// Minimum bounding-box area (px^2) for a region to count as a roof.
/// Filters out sheds, small roof fragments and road markings.
pub const DEFAULT_MIN_AREA: usize = 200;

/// Pixel clearance to the image frame below which a region is considered
/// truncated by the capture and dropped (satellite preset).
pub const DEFAULT_BORDER_BUFFER: usize = 5;

/// Height of the bottom strip reserved for the map provider's attribution
/// watermark (satellite preset).
pub const DEFAULT_ATTRIBUTION_BAND: usize = 100;

/// Default cap on crawl requests (one request per visited coordinate).
pub const DEFAULT_MAX_REQUESTS: usize = 10;

/// Default cap on BFS rounds during a crawl.
pub const DEFAULT_MAX_CRAWL_DEPTH: usize = 4;

/// Default lattice step in coordinate degrees, roughly one map tile at the
/// scrape zoom level.
pub const DEFAULT_CRAWL_STEP: f64 = 0.001533;

/// Default number of coordinate decimals kept; rounding at this precision
/// is the crawler's sole deduplication key.
pub const DEFAULT_CRAWL_PRECISION: u32 = 6;
