use anyhow::{anyhow, bail, Context, Result};
use musicroom_common::{deserialize_json, serialize_json, CreateRoomRequest, CREATE_ROOM_PATH};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow!("{:?}", err)
}

/// Builds the `POST /api/create-room` request with a JSON body.
pub fn create_room_request(req: &CreateRoomRequest) -> Result<Request> {
    let body = serialize_json(req).context("serializing create room request")?;

    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));

    Request::new_with_str_and_init(CREATE_ROOM_PATH, &opts)
        .map_err(js_err)
        .context("building create room request")
}

/// Posts a new room to the backend and returns whatever JSON it answers with.
pub async fn create_room(req: &CreateRoomRequest) -> Result<Value> {
    let request = create_room_request(req)?;

    let window = web_sys::window().context("no window")?;
    let res = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)
        .with_context(|| format!("POST {}", CREATE_ROOM_PATH))?;
    let res: Response = res.dyn_into().map_err(js_err)?;

    if !res.ok() {
        bail!("create room failed with status {}", res.status());
    }

    let text = JsFuture::from(res.text().map_err(js_err)?)
        .await
        .map_err(js_err)
        .context("reading create room response")?;
    let text = text.as_string().unwrap_or_default();

    deserialize_json(&text).context("create room response is not JSON")
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn create_room_request_posts_json_body() {
        let request = create_room_request(&CreateRoomRequest::new(false, 5)).unwrap();

        assert_eq!(request.method(), "POST");
        assert!(request.url().ends_with(CREATE_ROOM_PATH));
        assert_eq!(
            request.headers().get("Content-Type").unwrap().as_deref(),
            Some("application/json")
        );

        let body = JsFuture::from(request.text().unwrap()).await.unwrap();
        assert_eq!(
            body.as_string().as_deref(),
            Some(r#"{"guest_can_pause":false,"votes_to_skip":5}"#)
        );
    }

    #[wasm_bindgen_test]
    fn create_room_request_carries_default_state() {
        let request = create_room_request(&CreateRoomRequest::default()).unwrap();

        assert_eq!(request.method(), "POST");
        assert!(!request.body_used());
    }
}
