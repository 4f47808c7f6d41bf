//! Shared constants for end-to-end tests
//!
//! When the fake backend's rows change, update only this file and
//! `fixtures.rs`.

// ============================================================================
// Backend Credentials
// ============================================================================

/// Anon key the fake backend accepts
pub const TEST_ANON_KEY: &str = "test-anon-key";

/// Anon key the fake backend rejects with 401
pub const WRONG_ANON_KEY: &str = "not-the-key";

/// Message the fake backend puts in its 401 body
pub const INVALID_KEY_MESSAGE: &str = "Invalid API key";

// ============================================================================
// Remote Listing IDs
// ============================================================================

/// "Glass Cathedral" by Remote Producer, two tracks
pub const REMOTE_PROJECT_1_ID: &str = "remote-1";

/// First track of "Glass Cathedral"
pub const REMOTE_TRACK_1_ID: &str = "remote-1-t1";

/// "Dust Loops" by Sample Smith, a sound pack
pub const REMOTE_PROJECT_2_ID: &str = "remote-2";

/// Number of rows the fake backend serves
pub const REMOTE_PROJECT_COUNT: usize = 2;

// ============================================================================
// Timing
// ============================================================================

/// Max time to wait for the fake backend to accept requests
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
