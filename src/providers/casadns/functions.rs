// Current module imports
use super::constants::{RESPONSE_ERRORS, SUCCESS_PREFIX};
use super::types::{FailureKind, ResponseError, UpdateResult};

/// Maps a raw response body to an `UpdateResult`.
///
/// Total over all inputs: anything that is neither a success nor a known
/// error token ends up as `UnknownResponse` carrying the raw body.
pub fn classify_response(body: &str) -> UpdateResult {
    if body.starts_with(SUCCESS_PREFIX) {
        return UpdateResult::Success;
    }

    match lookup_error(body.trim()) {
        Some(error) => error.kind.into_result(error.reason),
        None => UpdateResult::UnknownResponse(body.to_string()),
    }
}

/// Looks up a provider error token. Case-sensitive.
pub fn lookup_error(token: &str) -> Option<&'static ResponseError> {
    RESPONSE_ERRORS.iter().find(|error| error.token == token)
}

impl FailureKind {
    fn into_result(self, reason: &'static str) -> UpdateResult {
        match self {
            FailureKind::Auth => UpdateResult::AuthFailure(reason),
            FailureKind::AccessBlocked => UpdateResult::AccessBlocked(reason),
            FailureKind::AbuseBlocked => UpdateResult::AbuseBlocked(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_prefix_is_success_regardless_of_trailer() {
        for body in ["OK", "OK\n", "OK 203.0.113.7", "OKAY"] {
            assert_eq!(classify_response(body), UpdateResult::Success, "body: {body:?}");
        }
    }

    #[test]
    fn known_tokens_map_to_their_kind_and_reason() {
        assert_eq!(
            classify_response("Forbidden"),
            UpdateResult::AuthFailure("Invalid username password combination")
        );
        assert_eq!(
            classify_response("Unauthorized"),
            UpdateResult::AuthFailure("Invalid combination of username and secret")
        );
        assert_eq!(
            classify_response("Blocked"),
            UpdateResult::AccessBlocked("Browser user agent not allowed or IP address blocked")
        );
        assert_eq!(
            classify_response("Abuse"),
            UpdateResult::AbuseBlocked("Username is blocked due to abuse")
        );
    }

    #[test]
    fn tokens_tolerate_trailing_newline() {
        assert_eq!(
            classify_response("Abuse\n"),
            UpdateResult::AbuseBlocked("Username is blocked due to abuse")
        );
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(
            classify_response("forbidden"),
            UpdateResult::UnknownResponse("forbidden".to_string())
        );
        assert_eq!(
            classify_response("ok"),
            UpdateResult::UnknownResponse("ok".to_string())
        );
    }

    #[test]
    fn unrecognized_bodies_are_unknown() {
        assert_eq!(
            classify_response(""),
            UpdateResult::UnknownResponse(String::new())
        );
        assert_eq!(
            classify_response("<html>Bad Gateway</html>"),
            UpdateResult::UnknownResponse("<html>Bad Gateway</html>".to_string())
        );
        assert!(lookup_error("Teapot").is_none());
    }
}
