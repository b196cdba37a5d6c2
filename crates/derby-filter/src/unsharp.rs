//! Unsharp masking in HSV space
//!
//! For each of hue, saturation and value, in that order:
//!
//! 1. the channel is copied into a plane,
//! 2. [`UnsharpMask::build`] smooths it row-wise into a scratch plane and
//!    then runs the high-pass kernel down the columns, leaving the detail
//!    signal in the scratch plane,
//! 3. [`sharpen_plane`] blends the detail back into the channel.
//!
//! The scratch plane is overwritten for every channel. Blending uses
//! `channel * (scale + amount * detail) / scale` with only an upper clamp
//! at `scale - 1`; results below zero are kept.

use crate::convolve::{convolve_columns_biased, convolve_rows};
use crate::{FilterError, FilterResult, Kernel};
use derby_core::{Channel, ChannelPlane, ColorSpace, Error as CoreError, ImageStore};
use tracing::debug;

/// Strength and fixed-point scale of one channel's sharpening.
///
/// `scale` is the channel's "one": 360 for hue, 1024 for saturation and
/// value. It must match the channel range for the blend to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharpenParams {
    pub amount: i32,
    pub scale: i32,
}

impl SharpenParams {
    pub const HUE: Self = Self {
        amount: -4,
        scale: 360,
    };
    pub const SATURATION: Self = Self {
        amount: -4,
        scale: 1024,
    };
    pub const VALUE: Self = Self {
        amount: -4,
        scale: 1024,
    };

    /// Parameters used for an HSV channel.
    pub fn for_channel(channel: Channel) -> Self {
        match channel {
            Channel::First => Self::HUE,
            Channel::Second => Self::SATURATION,
            Channel::Third => Self::VALUE,
        }
    }
}

/// Blend a detail `mask` into `plane` in place.
///
/// Each sample becomes `p * (scale + amount * m) / scale`, truncated toward
/// zero; any result `>= scale` is forced to `scale - 1`.
///
/// # Errors
///
/// - [`FilterError::InvalidParameters`] if `scale <= 0`
/// - a dimension mismatch if the planes differ in extent
pub fn sharpen_plane(
    plane: &mut ChannelPlane,
    mask: &ChannelPlane,
    params: SharpenParams,
) -> FilterResult<()> {
    if params.scale <= 0 {
        return Err(FilterError::InvalidParameters(format!(
            "sharpen scale must be positive, got {}",
            params.scale
        )));
    }
    if !plane.same_extent(mask) {
        return Err(CoreError::DimensionMismatch {
            expected: (plane.width(), plane.height()),
            actual: (mask.width(), mask.height()),
        }
        .into());
    }

    let scale = i64::from(params.scale);
    let amount = i64::from(params.amount);
    for (p, &m) in plane.data_mut().iter_mut().zip(mask.data()) {
        let v = i64::from(*p) * (scale + amount * i64::from(m)) / scale;
        *p = if v >= scale { params.scale - 1 } else { v as i32 };
    }
    Ok(())
}

/// Unsharp-mask engine: a smoothing kernel plus one reusable scratch plane.
#[derive(Debug, Clone)]
pub struct UnsharpMask {
    kernel: Kernel,
    scratch: ChannelPlane,
}

impl UnsharpMask {
    /// Create an engine for `width x height` channels.
    pub fn new(kernel: &Kernel, width: u32, height: u32) -> FilterResult<Self> {
        Ok(Self {
            kernel: kernel.clone(),
            scratch: ChannelPlane::new(width, height)?,
        })
    }

    /// Get the smoothing kernel.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Get the detail signal left by the last [`UnsharpMask::build`].
    pub fn mask(&self) -> &ChannelPlane {
        &self.scratch
    }

    /// Compute the detail signal of `source` into the scratch plane.
    ///
    /// The column pass uses a high-pass copy of the kernel made for this
    /// call only.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `source` does not match the engine's extent.
    pub fn build(&mut self, source: &ChannelPlane) -> FilterResult<&ChannelPlane> {
        convolve_rows(source, &self.kernel, &mut self.scratch)?;
        let highpass = self.kernel.highpass();
        convolve_columns_biased(&mut self.scratch, &highpass)?;
        Ok(&self.scratch)
    }
}

/// Sharpen one channel of an HSV store.
///
/// # Errors
///
/// Returns a color space mismatch if the store is not in HSV, or a
/// dimension mismatch if the engine was sized for a different image.
pub fn unsharp_channel(
    store: &mut ImageStore,
    channel: Channel,
    engine: &mut UnsharpMask,
) -> FilterResult<()> {
    store.expect_space(ColorSpace::Hsv)?;
    let mut plane = store.channel(channel);
    sharpen_with(&mut plane, channel, engine)?;
    store.set_channel(channel, &plane)?;
    Ok(())
}

fn sharpen_with(
    plane: &mut ChannelPlane,
    channel: Channel,
    engine: &mut UnsharpMask,
) -> FilterResult<()> {
    let mask = engine.build(plane)?;
    sharpen_plane(plane, mask, SharpenParams::for_channel(channel))?;
    debug!(?channel, "sharpened channel");
    Ok(())
}

/// Sharpen hue, saturation and value of an HSV store, in that order.
///
/// With the `parallel` feature the three channels are processed
/// concurrently, each with its own engine; the result is identical.
///
/// # Errors
///
/// Returns a color space mismatch if the store is not in HSV.
pub fn unsharp_hsv(store: &mut ImageStore, kernel: &Kernel) -> FilterResult<()> {
    store.expect_space(ColorSpace::Hsv)?;

    #[cfg(not(feature = "parallel"))]
    {
        let mut engine = UnsharpMask::new(kernel, store.width(), store.height())?;
        for channel in Channel::ALL {
            unsharp_channel(store, channel, &mut engine)?;
        }
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let (w, h) = (store.width(), store.height());
        let planes: Vec<(Channel, ChannelPlane)> = Channel::ALL
            .into_par_iter()
            .map(|channel| -> FilterResult<(Channel, ChannelPlane)> {
                let mut engine = UnsharpMask::new(kernel, w, h)?;
                let mut plane = store.channel(channel);
                sharpen_with(&mut plane, channel, &mut engine)?;
                Ok((channel, plane))
            })
            .collect::<FilterResult<_>>()?;
        for (channel, plane) in &planes {
            store.set_channel(*channel, plane)?;
        }
    }

    Ok(())
}
