// SPDX-License-Identifier: MPL-2.0
pub mod slide_in;

pub use slide_in::{slide_in, SlideIn};
