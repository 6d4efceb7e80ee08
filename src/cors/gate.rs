//! The per-request CORS decision

/// Methods advertised to preflight requests.
pub const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE";

/// Decides cross-origin headers from a fixed origin allow-list.
///
/// The gate never blocks a request; it only decides which headers the
/// response carries. A cross-origin read from an unlisted origin is
/// rejected browser-side, not here.
#[derive(Debug, Clone)]
pub struct CorsGate {
    allowed_origins: Vec<String>,
}

/// Headers granted to a preflight request.
#[derive(Debug, Clone, PartialEq)]
pub struct PreflightGrant {
    /// Echoed back as Access-Control-Allow-Origin.
    pub origin: String,
    /// Advertised as Access-Control-Allow-Methods.
    pub methods: &'static str,
}

impl CorsGate {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Origin to echo on simple (read/delete) responses, if any.
    ///
    /// Requires the origin to be present AND allow-listed; otherwise
    /// no header is attached and the request still proceeds.
    pub fn simple_origin<'a>(&self, origin: Option<&'a str>) -> Option<&'a str> {
        origin.filter(|o| self.allowed_origins.iter().any(|allowed| allowed == o))
    }

    /// Grant for a preflight request.
    ///
    /// Any present origin is granted, allow-listed or not. This is
    /// deliberately broader than the simple-request rule.
    pub fn preflight(&self, origin: Option<&str>) -> Option<PreflightGrant> {
        origin.map(|origin| PreflightGrant {
            origin: origin.to_string(),
            methods: ALLOW_METHODS,
        })
    }
}
