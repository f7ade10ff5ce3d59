//! # Session State
//!
//! The authentication section of the application state: a flag plus the
//! cached profile of the signed-in user.

use serde::{Deserialize, Serialize};
use servicehub_core::UserProfile;
use ts_rs::TS;

/// Authentication status and cached profile.
///
/// ## Invariant (soft)
/// `login`/`sign_out` keep the flag and profile paired: authenticated means a
/// profile is present. The granular setters below do NOT enforce the pairing;
/// the OTP flow flips the flag first and patches the profile once the phone
/// number is verified, so a half-set session is a legal intermediate state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether the user is signed in.
    pub is_authenticated: bool,

    /// Profile of the signed-in user; `None` when signed out.
    pub user: Option<UserProfile>,
}

impl Session {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Sets the authentication flag without touching the profile.
    pub fn set_authenticated(&mut self, flag: bool) {
        self.is_authenticated = flag;
    }

    /// Replaces the stored profile wholesale without touching the flag.
    pub fn set_user(&mut self, profile: UserProfile) {
        self.user = Some(profile);
    }

    /// Signs in: sets the flag and profile together.
    pub fn login(&mut self, profile: UserProfile) {
        self.is_authenticated = true;
        self.user = Some(profile);
    }

    /// Signs out: back to the unauthenticated defaults.
    pub fn sign_out(&mut self) {
        self.is_authenticated = false;
        self.user = None;
    }
}
