//! Smart pricing service
//!
//! Suggests a price for a service job request (plumbing, carpentry, ...) by
//! rendering the job details into a fixed prompt and asking Cloudflare
//! Workers AI for a structured `{ suggestedPrice, reasoning }` reply.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
