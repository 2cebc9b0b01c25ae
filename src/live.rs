// src/live.rs
//
// Live voice session: a WebSocket bridge between the caller and the Content
// Generation Service's bidirectional audio channel. The caller streams raw
// PCM16 microphone frames (16 kHz) as binary messages; vendor audio replies
// (24 kHz) come back as JSON events carrying a playback start time taken from
// a strictly increasing cursor, so frames that arrive out of order can never
// be scheduled to overlap. A vendor interruption clears the schedule: the
// cursor resets and the client is told to stop everything it has buffered.

use std::time::Instant;

use actix::{Actor, ActorContext, AsyncContext, Handler, Message, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as VendorWsMessage;

use crate::i18n::{messages, Language};
use crate::AppState;

pub const LIVE_MODEL: &str = "gemini-2.5-flash-native-audio-preview";
const INPUT_MIME: &str = "audio/pcm;rate=16000";
pub const OUTPUT_SAMPLE_RATE: u32 = 24_000;

pub fn default_live_url(api_key: &str) -> String {
    format!(
        "wss://generativelanguage.googleapis.com/ws/google.ai.generativelanguage.v1beta.GenerativeService.BidiGenerateContent?key={api_key}"
    )
}

/// Playback schedule for decoded vendor audio. `schedule` hands out start
/// times that never move backwards; `reset` is the interruption path.
#[derive(Debug, Default)]
pub struct PlaybackCursor {
    next_start: f64,
}

impl PlaybackCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start time for a frame of `duration` seconds arriving at `now`.
    pub fn schedule(&mut self, now: f64, duration: f64) -> f64 {
        let start = if self.next_start > now { self.next_start } else { now };
        self.next_start = start + duration;
        start
    }

    pub fn reset(&mut self) {
        self.next_start = 0.0;
    }
}

/// Duration in seconds of a mono PCM16 frame.
pub fn pcm_duration_secs(byte_len: usize, sample_rate: u32) -> f64 {
    byte_len as f64 / (sample_rate as f64 * 2.0)
}

/// Wraps a microphone frame into the vendor's realtime-input message.
pub fn realtime_input_frame(pcm: &[u8]) -> String {
    json!({
        "realtimeInput": {
            "mediaChunks": [{
                "mimeType": INPUT_MIME,
                "data": BASE64.encode(pcm),
            }]
        }
    })
    .to_string()
}

/// First message on the vendor channel: model choice and system instruction.
pub fn setup_frame(lang: Language) -> String {
    json!({
        "setup": {
            "model": format!("models/{LIVE_MODEL}"),
            "generationConfig": { "responseModalities": ["AUDIO"] },
            "systemInstruction": {
                "parts": [{ "text": messages(lang).assistant_system }]
            }
        }
    })
    .to_string()
}

#[derive(Debug, PartialEq)]
pub enum ServerEvent {
    Audio(Vec<u8>),
    Interrupted,
    TurnComplete,
    Ignored,
}

/// Decodes one vendor frame. Anything unrecognized is ignored rather than
/// treated as an error; the vendor's message taxonomy is not ours to own.
pub fn parse_server_frame(raw: &str) -> ServerEvent {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return ServerEvent::Ignored;
    };
    let content = &value["serverContent"];
    if content["interrupted"].as_bool() == Some(true) {
        return ServerEvent::Interrupted;
    }
    if let Some(data) = content["modelTurn"]["parts"][0]["inlineData"]["data"].as_str() {
        if let Ok(bytes) = BASE64.decode(data) {
            return ServerEvent::Audio(bytes);
        }
        return ServerEvent::Ignored;
    }
    if content["turnComplete"].as_bool() == Some(true) {
        return ServerEvent::TurnComplete;
    }
    ServerEvent::Ignored
}

#[derive(Message)]
#[rtype(result = "()")]
struct VendorAudio(Vec<u8>);

#[derive(Message)]
#[rtype(result = "()")]
struct VendorInterrupted;

#[derive(Message)]
#[rtype(result = "()")]
struct VendorTurnComplete;

#[derive(Message)]
#[rtype(result = "()")]
struct VendorClosed {
    failed: bool,
}

struct LiveSession {
    lang: Language,
    vendor_url: String,
    cursor: PlaybackCursor,
    started_at: Instant,
    vendor_tx: Option<mpsc::UnboundedSender<String>>,
}

impl LiveSession {
    fn new(lang: Language, vendor_url: String) -> Self {
        Self {
            lang,
            vendor_url,
            cursor: PlaybackCursor::new(),
            started_at: Instant::now(),
            vendor_tx: None,
        }
    }
}

impl Actor for LiveSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        self.vendor_tx = Some(tx);
        let addr = ctx.address();
        let url = self.vendor_url.clone();
        let setup = setup_frame(self.lang);
        tokio::spawn(vendor_bridge(url, setup, rx, addr));
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        // Dropping the sender ends the writer task, which closes the vendor
        // leg; the client is expected to stop its buffered sources on close.
        self.vendor_tx = None;
    }
}

/// Owns the vendor connection: one writer draining the session's outbound
/// queue, and a read loop relaying vendor events back to the actor.
async fn vendor_bridge(
    url: String,
    setup: String,
    mut outbound: mpsc::UnboundedReceiver<String>,
    addr: actix::Addr<LiveSession>,
) {
    let (stream, _) = match connect_async(url.as_str()).await {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("live vendor connect error: {e}");
            addr.do_send(VendorClosed { failed: true });
            return;
        }
    };
    let (mut sink, mut source) = stream.split();

    if let Err(e) = sink.send(VendorWsMessage::Text(setup)).await {
        log::error!("live vendor setup error: {e}");
        addr.do_send(VendorClosed { failed: true });
        return;
    }

    let writer = tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            if sink.send(VendorWsMessage::Text(frame)).await.is_err() {
                break;
            }
        }
        let _ = sink.close().await;
    });

    while let Some(message) = source.next().await {
        let raw = match message {
            Ok(VendorWsMessage::Text(text)) => text,
            Ok(VendorWsMessage::Binary(bytes)) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => continue,
            },
            Ok(VendorWsMessage::Close(_)) | Err(_) => break,
            Ok(_) => continue,
        };
        match parse_server_frame(&raw) {
            ServerEvent::Audio(bytes) => addr.do_send(VendorAudio(bytes)),
            ServerEvent::Interrupted => addr.do_send(VendorInterrupted),
            ServerEvent::TurnComplete => addr.do_send(VendorTurnComplete),
            ServerEvent::Ignored => {}
        }
    }

    addr.do_send(VendorClosed { failed: false });
    writer.abort();
}

impl Handler<VendorAudio> for LiveSession {
    type Result = ();

    fn handle(&mut self, msg: VendorAudio, ctx: &mut Self::Context) -> Self::Result {
        let now = self.started_at.elapsed().as_secs_f64();
        let duration = pcm_duration_secs(msg.0.len(), OUTPUT_SAMPLE_RATE);
        let start = self.cursor.schedule(now, duration);
        ctx.text(
            json!({
                "type": "audio",
                "start": start,
                "sample_rate": OUTPUT_SAMPLE_RATE,
                "data": BASE64.encode(&msg.0),
            })
            .to_string(),
        );
    }
}

impl Handler<VendorInterrupted> for LiveSession {
    type Result = ();

    fn handle(&mut self, _: VendorInterrupted, ctx: &mut Self::Context) -> Self::Result {
        self.cursor.reset();
        ctx.text(json!({ "type": "interrupted" }).to_string());
    }
}

impl Handler<VendorTurnComplete> for LiveSession {
    type Result = ();

    fn handle(&mut self, _: VendorTurnComplete, ctx: &mut Self::Context) -> Self::Result {
        ctx.text(json!({ "type": "turn_complete" }).to_string());
    }
}

impl Handler<VendorClosed> for LiveSession {
    type Result = ();

    fn handle(&mut self, msg: VendorClosed, ctx: &mut Self::Context) -> Self::Result {
        if msg.failed {
            ctx.text(
                json!({ "type": "error", "message": messages(self.lang).live_connect_failed })
                    .to_string(),
            );
        }
        ctx.close(None);
        ctx.stop();
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for LiveSession {
    fn handle(&mut self, item: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match item {
            Ok(ws::Message::Binary(pcm)) => {
                if let Some(tx) = self.vendor_tx.as_ref() {
                    let _ = tx.send(realtime_input_frame(&pcm));
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Pong(_)) => {}
            Ok(ws::Message::Text(_)) => {}
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {}
            Ok(ws::Message::Nop) => {}
            Err(_) => ctx.stop(),
        }
    }
}

#[derive(Deserialize)]
struct LiveQuery {
    lang: Option<String>,
}

pub async fn live_ws(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let lang = serde_urlencoded::from_str::<LiveQuery>(req.query_string())
        .ok()
        .and_then(|q| q.lang)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default();

    ws::start(
        LiveSession::new(lang, state.genai_live_url.clone()),
        &req,
        stream,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_never_schedules_overlapping_frames() {
        let mut cursor = PlaybackCursor::new();
        let first = cursor.schedule(0.0, 1.0);
        assert_eq!(first, 0.0);

        // Arrives "early" relative to the queued audio: pushed to the tail.
        let second = cursor.schedule(0.5, 1.0);
        assert_eq!(second, 1.0);

        // Arrives after a gap of silence: plays immediately.
        let third = cursor.schedule(5.0, 0.25);
        assert_eq!(third, 5.0);
        assert!(second + 1.0 <= third);
    }

    #[test]
    fn cursor_reset_restarts_the_schedule() {
        let mut cursor = PlaybackCursor::new();
        cursor.schedule(0.0, 10.0);
        cursor.reset();
        assert_eq!(cursor.schedule(0.2, 1.0), 0.2);
    }

    #[test]
    fn pcm_duration_accounts_for_two_byte_samples() {
        assert_eq!(pcm_duration_secs(48_000, 24_000), 1.0);
        assert_eq!(pcm_duration_secs(0, 24_000), 0.0);
    }

    #[test]
    fn server_frames_parse_audio_and_interruption() {
        let audio = json!({
            "serverContent": {
                "modelTurn": { "parts": [{ "inlineData": {
                    "mimeType": "audio/pcm;rate=24000",
                    "data": BASE64.encode([1u8, 2, 3]),
                }}]}
            }
        })
        .to_string();
        assert_eq!(parse_server_frame(&audio), ServerEvent::Audio(vec![1, 2, 3]));

        let interrupted = r#"{"serverContent":{"interrupted":true}}"#;
        assert_eq!(parse_server_frame(interrupted), ServerEvent::Interrupted);

        assert_eq!(parse_server_frame("not json"), ServerEvent::Ignored);
        assert_eq!(parse_server_frame("{}"), ServerEvent::Ignored);
    }

    #[test]
    fn realtime_frame_wraps_base64_chunk() {
        let frame = realtime_input_frame(&[0u8, 1, 2, 3]);
        let value: Value = serde_json::from_str(&frame).expect("frame is json");
        let chunk = &value["realtimeInput"]["mediaChunks"][0];
        assert_eq!(chunk["mimeType"], INPUT_MIME);
        assert_eq!(
            BASE64.decode(chunk["data"].as_str().expect("data")).expect("b64"),
            vec![0, 1, 2, 3]
        );
    }
}
