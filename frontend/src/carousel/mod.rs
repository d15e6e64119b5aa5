//! Rotating multi-column text carousel.
//!
//! The pool is split into equal-length columns by [`distributor::distribute`],
//! each column is stepped through by a [`cycler::ColumnCycler`], and
//! [`engine::Carousel`] wires the cyclers to timers. Nothing in here touches
//! the DOM; the Yew side lives in `components::text_carousel`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub mod cycler;
pub mod distributor;
pub mod engine;
pub mod timers;

#[cfg(test)]
pub(crate) mod testing;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextItem {
    pub id: u32,
    pub text: Cow<'static, str>,
}

/// Visual curve used when a column swaps items. Only the renderer cares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStyle {
    #[default]
    Fade,
    Slide,
    Blur,
}

impl TransitionStyle {
    pub fn class(&self) -> &'static str {
        match self {
            TransitionStyle::Fade => "carousel-fade",
            TransitionStyle::Slide => "carousel-slide",
            TransitionStyle::Blur => "carousel-blur",
        }
    }
}
