//! Flight route planner server.
//!
//! A web application that answers: "how do I fly from here to there with
//! the fewest stops, for the least money, or arriving soonest?"

pub mod airports;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod planner;
pub mod web;
