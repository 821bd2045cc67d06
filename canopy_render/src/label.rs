// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting label text into a region's width.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::Surface;

/// Horizontal padding a label needs inside its region.
const LABEL_PADDING: f64 = 4.0;

/// Fits `text` into `width`, truncating by halving when it overflows.
///
/// The text is measured via the surface; while it does not fit (including
/// padding), the front half is kept and a `*` marker appended. Returns
/// `None` when even a single marked character cannot fit. The input is
/// borrowed unchanged when it already fits.
#[must_use]
pub fn fit_label<'a, S: Surface + ?Sized>(
    surface: &mut S,
    text: &'a str,
    width: f64,
) -> Option<Cow<'a, str>> {
    if surface.text_width(text) + LABEL_PADDING <= width {
        return Some(Cow::Borrowed(text));
    }

    let mut kept: usize = text.chars().count();
    loop {
        kept /= 2;
        if kept == 0 {
            return None;
        }
        let mut candidate: String = text.chars().take(kept).collect();
        candidate.push('*');
        if surface.text_width(&candidate) + LABEL_PADDING <= width {
            return Some(Cow::Owned(candidate));
        }
    }
}
