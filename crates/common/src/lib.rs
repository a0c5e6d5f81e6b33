#[cfg(feature = "json")]
pub use serde_json::from_str as deserialize_json;
#[cfg(feature = "json")]
pub use serde_json::to_string as serialize_json;

use serde_derive::{Deserialize, Serialize};

pub const CREATE_ROOM_PATH: &str = "/api/create-room";
pub const LIST_ROOMS_PATH: &str = "/api/rooms";

pub const DEFAULT_GUEST_CAN_PAUSE: bool = true;
pub const DEFAULT_VOTES_TO_SKIP: u32 = 1;

/// Body of `POST /api/create-room`.
#[derive(Copy, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CreateRoomRequest {
    /// Whether guests may play and pause the current track.
    pub guest_can_pause: bool,
    /// Number of votes required to skip a track. Always at least 1.
    pub votes_to_skip: u32,
}

impl CreateRoomRequest {
    pub fn new(guest_can_pause: bool, votes_to_skip: u32) -> Self {
        Self {
            guest_can_pause,
            votes_to_skip,
        }
    }
}

impl Default for CreateRoomRequest {
    fn default() -> Self {
        Self::new(DEFAULT_GUEST_CAN_PAUSE, DEFAULT_VOTES_TO_SKIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_snake_case_fields() {
        let body = serde_json::to_value(CreateRoomRequest::new(false, 3)).unwrap();

        assert_eq!(body, json!({ "guest_can_pause": false, "votes_to_skip": 3 }));
    }

    #[test]
    fn default_request_lets_guests_pause_with_one_vote() {
        let req = CreateRoomRequest::default();

        assert!(req.guest_can_pause);
        assert_eq!(req.votes_to_skip, 1);
    }

    #[test]
    fn endpoints_live_under_api() {
        assert_eq!(CREATE_ROOM_PATH, "/api/create-room");
        assert_eq!(LIST_ROOMS_PATH, "/api/rooms");
    }

    #[test]
    fn request_rejects_negative_vote_threshold() {
        let res = serde_json::from_str::<CreateRoomRequest>(
            r#"{"guest_can_pause": true, "votes_to_skip": -1}"#,
        );

        assert!(res.is_err());
    }
}
