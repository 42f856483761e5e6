//! HTTP handlers for all web routes.

pub mod home;
pub mod predict;
pub mod visualizer;
pub mod pages;
pub mod api;
