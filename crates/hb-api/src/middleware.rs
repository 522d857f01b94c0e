//! heartboard/crates/hb-api/src/middleware.rs Middleware
//!
//! Request logging and CORS for the Heartboard API.

use actix_cors::Cors;
use actix_web::middleware::Logger;

// Returns the standard request logger for the Heartboard API.
pub fn standard_middleware() -> Logger {
    // The 'default' logger outputs:
    // remote-ip "request-line" status-code response-size "referrer" "user-agent"
    Logger::default()
}

// Configures CORS (Cross-Origin Resource Sharing)
// The frontend is served from a different origin, so the API must accept
// any origin, any method, any header, with credentials.
pub fn cors_policy() -> Cors {
    Cors::permissive()
}
