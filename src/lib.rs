//! Raster instruction stream encoder for Brother QL/PT label printers.
//!
//! This crate turns decoded images into the binary command sequence the
//! printer firmware consumes: initialization, media selection, pixel
//! rows and cut/eject control. It contains no transport; the produced
//! bytes are handed to whatever writes to the device (USB, network,
//! CUPS backend).
//!
//! # Example
//!
//! ```rust,no_run
//! use ql_raster::{convert, resolve_model, PrintOptions};
//!
//! let cap = resolve_model("QL-820NWB")?;
//! let image = image::open("label.png")?;
//! let options = PrintOptions {
//!     copies: 2,
//!     ..Default::default()
//! };
//! let data = convert(&cap, &[image], "62", &options)?;
//! // hand `data` to the transport
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod convert;
mod error;
mod label;
mod model;
mod packbits;
mod plane;
mod raster;

pub use crate::{
    convert::{build_page, convert, convert_queue, preprocess, Planes, PrintOptions, Rotate},
    error::Error,
    label::{Kind, Label, LABELS},
    model::{resolve_model, Capability, Model},
    packbits::{decode as packbits_decode, encode as packbits_encode},
    plane::BitPlane,
    raster::{Policy, RasterDocument},
};
