//! Data models for Whipcast
//!
//! This module contains the transient value objects returned by the API.

pub mod channel;

pub use channel::ChannelEndpoints;
