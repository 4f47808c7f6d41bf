//! Rows served by the fake backend, in the backend's snake_case shape.

use super::constants::*;
use serde_json::{json, Value};

/// Two listings using every key the client has to rename.
pub fn remote_project_rows() -> Value {
    json!([
        {
            "id": REMOTE_PROJECT_1_ID,
            "title": "Glass Cathedral",
            "producer": "Remote Producer",
            "cover_image_url": "https://cdn.example.com/glass.jpg",
            "price": 24.99,
            "bpm": 92,
            "key": "D Minor",
            "genre": "Lo-Fi",
            "sub_genre": "Jazzhop",
            "type": "beat_tape",
            "tags": ["dusty", "keys"],
            "created_at": "2025-09-01T12:00:00Z",
            "status": "published",
            "tracks": [
                {
                    "id": REMOTE_TRACK_1_ID,
                    "title": "Nave",
                    "duration": 134,
                    "waveform": [0.1, 0.5, 0.9]
                },
                {
                    "id": "remote-1-t2",
                    "title": "Apse",
                    "duration": 161
                }
            ],
            "licenses": [
                {
                    "id": "remote-1-l1",
                    "type": "WAV",
                    "name": "WAV Lease",
                    "price": 24.99,
                    "contract_id": "c-wav",
                    "features": ["Untagged WAV"],
                    "file_types": ["MP3", "WAV"]
                }
            ]
        },
        {
            "id": REMOTE_PROJECT_2_ID,
            "title": "Dust Loops",
            "producer": "Sample Smith",
            "price": 14.0,
            "bpm": 85,
            "key": "A Minor",
            "genre": "Boom Bap",
            "type": "sound_pack",
            "tags": [],
            "tracks": [],
            "licenses": []
        }
    ])
}

/// A URL on localhost where nothing is listening.
pub fn unused_local_url() -> String {
    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener
        .local_addr()
        .expect("Failed to get local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
