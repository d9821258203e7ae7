//! Typed wrappers over the REST endpoints, grouped the way the server routes
//! them. Each service borrows the [`ApiClient`](crate::ApiClient) and is
//! obtained from it: `client.auth()`, `client.users()`, ...

mod admin;
mod auth;
mod events;
mod leaderboard;
mod master;
mod users;

pub use admin::AdminService;
pub use auth::AuthService;
pub use events::EventService;
pub use leaderboard::LeaderboardService;
pub use master::{MasterService, RemovalReply, UserQuery};
pub use users::UserService;

/// Percent-encode a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::segment;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment("3rd Year/CSE"), "3rd%20Year%2FCSE");
        assert_eq!(segment("../admin?x=1"), "..%2Fadmin%3Fx%3D1");
        assert_eq!(segment("ärger"), "%C3%A4rger");
    }
}
