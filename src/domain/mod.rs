//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository traits, and the asynchronous click pipeline,
//! independent of infrastructure concerns.
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler sends a [`click_event::ClickEvent`] to a bounded channel
//! 2. [`click_worker::run_click_worker`] bumps the click counter via
//!    [`repositories::LinkRepository`]
//! 3. A [`entities::Visit`] row is appended via [`repositories::VisitRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
