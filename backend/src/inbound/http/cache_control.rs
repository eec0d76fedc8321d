//! Cache-control policies for HTTP handlers.

/// Responses that must be recomputed on every request.
pub const NO_STORE: &str = "no-store";

/// Header tuple opting a response out of every cache.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
