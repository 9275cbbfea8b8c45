#![forbid(unsafe_code)]

//! Headless layout + SVG renderer for genealogical charts.
//!
//! Turns a [`stemma_core::ChartData`] snapshot into a [`model::ChartLayout`]
//! (curved parent→child edges first, then person markers and labels) and
//! stringifies that layout to SVG.

pub mod config;
pub mod layout;
pub mod model;
pub mod svg;

pub use config::{ChartConfig, X_DOMAIN_MAX};
pub use layout::layout_chart;
pub use model::{Bounds, ChartLayout, EdgeLayout, LayoutPoint, PersonNodeLayout};
pub use svg::{SvgRenderOptions, render_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] stemma_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
