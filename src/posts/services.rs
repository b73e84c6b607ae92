use uuid::Uuid;

use crate::error::ApiError;
use crate::posts::repo_types::Post;

/// What the caller wants to do with an already-fetched post. The post must
/// be looked up first so a missing id answers 404 before any ownership
/// decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Ownership gate: reads of public posts are open to any caller, everything
/// else is owner-only. Read denials always answer 401; write denials answer
/// 401 unless `strict_denied` flips them to 403.
pub fn authorize_owner(
    post: &Post,
    caller: Uuid,
    access: Access,
    strict_denied: bool,
) -> Result<(), ApiError> {
    let owned = post.user_id == caller;
    let allowed = match access {
        Access::Read => post.is_public || owned,
        Access::Write => owned,
    };
    if allowed {
        return Ok(());
    }
    let (message, strict) = match access {
        Access::Read => ("You are not allowed to view this post".to_string(), false),
        Access::Write => (
            "You are not allowed to modify this post".to_string(),
            strict_denied,
        ),
    };
    Err(ApiError::Authorization { message, strict })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use time::OffsetDateTime;

    fn make_post(owner: Uuid, is_public: bool) -> Post {
        Post {
            id: Uuid::new_v4(),
            user_id: owner,
            title: None,
            content: "lecture notes".into(),
            cover_url: None,
            is_public,
            rating: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn owner_reads_private_post() {
        let owner = Uuid::new_v4();
        let post = make_post(owner, false);
        assert!(authorize_owner(&post, owner, Access::Read, false).is_ok());
    }

    #[test]
    fn non_owner_cannot_read_private_post() {
        let post = make_post(Uuid::new_v4(), false);
        let err = authorize_owner(&post, Uuid::new_v4(), Access::Read, false).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn anyone_reads_public_post() {
        let post = make_post(Uuid::new_v4(), true);
        assert!(authorize_owner(&post, Uuid::new_v4(), Access::Read, false).is_ok());
    }

    #[test]
    fn visibility_does_not_open_writes() {
        let post = make_post(Uuid::new_v4(), true);
        let err = authorize_owner(&post, Uuid::new_v4(), Access::Write, false).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn owner_writes_regardless_of_visibility() {
        let owner = Uuid::new_v4();
        for is_public in [false, true] {
            let post = make_post(owner, is_public);
            assert!(authorize_owner(&post, owner, Access::Write, false).is_ok());
        }
    }

    #[test]
    fn strict_flag_moves_write_denial_to_403() {
        let post = make_post(Uuid::new_v4(), false);
        let err = authorize_owner(&post, Uuid::new_v4(), Access::Write, true).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn strict_flag_never_touches_read_denials() {
        let post = make_post(Uuid::new_v4(), false);
        let err = authorize_owner(&post, Uuid::new_v4(), Access::Read, true).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
