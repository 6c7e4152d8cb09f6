//! Test utilities for orchestrator tests.
//!
//! This module provides a scripted gateway and canned model replies.

pub mod scripted_gateway;

#[allow(unused_imports)]
pub use scripted_gateway::{Script, ScriptedGateway, layer_reply};
