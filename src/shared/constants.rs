/// Default number of products returned by the incremental loader
pub const DEFAULT_PRODUCT_LIMIT: i64 = 12;

/// Step by which the client grows the requested prefix
pub const PRODUCT_LIMIT_STEP: i64 = 12;

/// Storage key prefix for the small image variant (resized to 300px)
pub const IMAGE_PREFIX_MIN: &str = "300";

/// Storage key prefix for the large image variant (resized to 600px)
pub const IMAGE_PREFIX_MAX: &str = "600";
