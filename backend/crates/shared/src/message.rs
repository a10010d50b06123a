//! User-facing messages
//!
//! Responses are localized for the Korean front end. Internal details never
//! end up in these strings.

/// Generic 500 message.
pub const INTERNAL_ERROR: &str = "서버 오류가 발생했습니다.";

/// 401 returned by the auth middleware and the identity extractor.
pub const UNAUTHORIZED: &str = "인증이 필요합니다.";

/// 503 returned when a dependency is unavailable.
pub const SERVICE_UNAVAILABLE: &str = "서비스를 일시적으로 사용할 수 없습니다.";

/// 400 for malformed request bodies.
pub const INVALID_REQUEST: &str = "잘못된 요청입니다.";
