//! Client for the ping service.

pub mod client;

pub use client::{EchoError, PingClient, Problem};
