//! Raster instruction stream builder.
//!
//! [`RasterDocument`] accumulates the binary command sequence one
//! instruction at a time, checking each command against the bound
//! model's [`Capability`]. The byte layouts follow the Brother raster
//! command references for the QL and PT series.

use log::warn;

use crate::{error::Error, model::Capability, packbits, plane::BitPlane};

/// What to do when a command is not supported by the bound model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Fail with [`Error::UnsupportedCommand`].
    Strict,
    /// Log a warning and skip the command.
    Warn,
}

/// One document's worth of raster instructions.
///
/// Bound to a single model capability for its lifetime. The buffer is
/// append-only; [`clear`](RasterDocument::clear) resets the buffer but
/// keeps the configured media/mode state so one document can encode a
/// multi-page job page by page.
#[derive(Debug)]
pub struct RasterDocument<'a> {
    cap: &'a Capability,
    policy: Policy,
    data: Vec<u8>,

    /// Media type byte for the media/quality command, `None` until set.
    pub media_type: Option<u8>,
    /// Media width in mm.
    pub media_width: Option<u8>,
    /// Media length in mm (0 for continuous rolls).
    pub media_length: Option<u8>,
    /// Print-quality bit of the media/quality command.
    pub quality_priority: bool,
    /// 600 dpi (double horizontal density) flag for expanded mode.
    pub dpi_600: bool,
    /// Cut-at-end flag for expanded mode (QL family).
    pub cut_at_end: bool,
    /// Two-color (black+red) flag for expanded mode (QL family).
    pub two_color_printing: bool,
    /// Half-cut flag for expanded mode (PT family).
    pub half_cut: bool,
    /// No-chain-printing flag for expanded mode (PT family).
    pub no_chain_printing: bool,

    page_number: u32,
    compression_enabled: bool,
}

impl<'a> RasterDocument<'a> {
    pub fn new(cap: &'a Capability, policy: Policy) -> Self {
        RasterDocument {
            cap,
            policy,
            data: Vec::new(),
            media_type: None,
            media_width: None,
            media_length: None,
            quality_priority: true,
            dpi_600: false,
            cut_at_end: true,
            two_color_printing: false,
            half_cut: true,
            no_chain_printing: true,
            page_number: 0,
            compression_enabled: false,
        }
    }

    pub fn capability(&self) -> &Capability {
        self.cap
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Hand the accumulated bytes to the caller, leaving the buffer
    /// empty but the document state intact.
    pub fn take_data(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }

    /// Reset the output buffer. Media/mode state and the page counter
    /// are kept so the next page continues the same job.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn unsupported(&self, what: &str) -> Result<(), Error> {
        let problem = format!("{} on {}", what, self.cap.model.identifier());
        match self.policy {
            Policy::Strict => Err(Error::UnsupportedCommand(problem)),
            Policy::Warn => {
                warn!("skipping unsupported command: {}", problem);
                Ok(())
            }
        }
    }

    /// Clear the printer's command buffer with a burst of zero bytes.
    pub fn invalidate(&mut self) {
        self.data
            .extend(std::iter::repeat(0x00).take(self.cap.num_invalidate_bytes));
    }

    /// ESC @ — reset to raster defaults. Also restarts page numbering.
    pub fn initialize(&mut self) {
        self.page_number = 0;
        self.data.extend_from_slice(&[0x1B, 0x40]);
    }

    /// ESC i S — status information request.
    pub fn status_information(&mut self) {
        self.data.extend_from_slice(&[0x1B, 0x69, 0x53]);
    }

    /// ESC i a — switch to raster command mode.
    ///
    /// Only needed on printers that support dynamic mode switching;
    /// the others are in raster mode already.
    pub fn switch_mode(&mut self) -> Result<(), Error> {
        if !self.cap.mode_setting {
            return self.unsupported("switching the operating mode");
        }
        self.data.extend_from_slice(&[0x1B, 0x69, 0x61, 0x01]);
        Ok(())
    }

    /// ESC i z — media type, size, quality and the raster line count
    /// for the page.
    ///
    /// The flags byte announces which media fields carry valid values;
    /// unset fields are transmitted as zero. The first page of a
    /// document is marked as "starting page", all later ones as
    /// continuation pages.
    pub fn media_and_quality(&mut self, raster_lines: u32) {
        self.data.extend_from_slice(&[0x1B, 0x69, 0x7A]);
        let mut valid: u8 = 0x80;
        valid |= (self.media_type.is_some() as u8) << 1;
        valid |= (self.media_width.is_some() as u8) << 2;
        valid |= (self.media_length.is_some() as u8) << 3;
        valid |= (self.quality_priority as u8) << 6;
        self.data.push(valid);
        self.data.push(self.media_type.unwrap_or(0));
        self.data.push(self.media_width.unwrap_or(0));
        self.data.push(self.media_length.unwrap_or(0));
        self.data.extend_from_slice(&raster_lines.to_le_bytes());
        let starting_page = if self.page_number == 0 {
            self.page_number = 1;
            0
        } else {
            1
        };
        self.data.push(starting_page);
        self.data.push(0x00);
    }

    /// ESC i M — various mode: bit 6 auto-cut, bit 4 peeler.
    pub fn mode_setting(&mut self, autocut: bool, peeler: bool) -> Result<(), Error> {
        if !self.cap.cutting {
            return self.unsupported("setting cut/peeler modes");
        }
        let mut flags = 0x00;
        if peeler {
            flags |= 0x10;
        }
        if autocut {
            flags |= 0x40;
        }
        self.data.extend_from_slice(&[0x1B, 0x69, 0x4D, flags]);
        Ok(())
    }

    /// ESC i A — cut every `n` labels.
    ///
    /// The tape family accepts but ignores this command, so nothing is
    /// emitted for it there.
    pub fn cut_every(&mut self, n: u8) -> Result<(), Error> {
        if !self.cap.cutting {
            return self.unsupported("setting the auto-cut interval");
        }
        if !self.cap.cut_every_supported {
            return Ok(());
        }
        self.data.extend_from_slice(&[0x1B, 0x69, 0x41, n]);
        Ok(())
    }

    /// ESC i K — expanded mode flags.
    ///
    /// The flag layout differs between the families: tape printers
    /// encode half-cut / no-chain-printing / 600 dpi, the QL family
    /// encodes two-color / cut-at-end / 600 dpi.
    pub fn expanded_mode(&mut self) -> Result<(), Error> {
        if !self.cap.expanded_mode {
            return self.unsupported("setting expanded mode (dpi / cut at end)");
        }
        if self.two_color_printing && !self.cap.two_color {
            return self.unsupported("two-color printing in expanded mode");
        }
        let mut flags: u8 = 0x00;
        if self.cap.tape_framing {
            flags |= (self.half_cut as u8) << 2;
            flags |= (self.no_chain_printing as u8) << 3;
            flags |= (self.dpi_600 as u8) << 5;
        } else {
            flags |= self.two_color_printing as u8;
            flags |= (self.cut_at_end as u8) << 3;
            flags |= (self.dpi_600 as u8) << 6;
        }
        self.data.extend_from_slice(&[0x1B, 0x69, 0x4B, flags]);
        Ok(())
    }

    /// ESC i w — wait before cutting, in tenths of a second.
    pub fn wait(&mut self, tenths_of_second: u8) {
        self.data
            .extend_from_slice(&[0x1B, 0x69, 0x77, tenths_of_second << 1]);
    }

    /// ESC i d — feed margin in dots.
    pub fn margins(&mut self, dots: u16) {
        self.data.extend_from_slice(&[0x1B, 0x69, 0x64]);
        self.data.extend_from_slice(&dots.to_le_bytes());
    }

    /// M — enable or disable PackBits compression for the following
    /// raster rows.
    pub fn compression(&mut self, enabled: bool) -> Result<(), Error> {
        if !self.cap.compression {
            return self.unsupported("setting compression");
        }
        self.compression_enabled = enabled;
        self.data.extend_from_slice(&[0x4D, (enabled as u8) << 1]);
        Ok(())
    }

    /// Transmit the pixel rows of one page.
    ///
    /// With a second plane, rows of both planes are interleaved
    /// black-first with per-plane channel markers. The plane width must
    /// equal the head width; both planes must have identical sizes.
    pub fn raster_data(
        &mut self,
        plane: &BitPlane,
        second_plane: Option<&BitPlane>,
    ) -> Result<(), Error> {
        if plane.width() != self.cap.pixel_width {
            return Err(Error::PixelWidthMismatch {
                got: plane.width(),
                expected: self.cap.pixel_width,
            });
        }
        if let Some(second) = second_plane {
            if plane.dimensions() != second.dimensions() {
                return Err(Error::PlaneDimensionMismatch {
                    first: plane.dimensions(),
                    second: second.dimensions(),
                });
            }
        }

        let mut planes = vec![plane];
        if let Some(second) = second_plane {
            planes.push(second);
        }

        for y in 0..plane.height() {
            for (channel, p) in planes.iter().enumerate() {
                let mut row = p.packed_row_mirrored(y);
                if self.compression_enabled {
                    row = packbits::encode(&row);
                }
                let translen = row.len();
                if self.cap.tape_framing {
                    self.data.push(0x47);
                    self.data
                        .extend_from_slice(&(translen as u16).to_le_bytes());
                } else {
                    if second_plane.is_some() {
                        self.data
                            .extend_from_slice(&[0x77, if channel == 0 { 0x01 } else { 0x02 }]);
                    } else {
                        self.data.extend_from_slice(&[0x67, 0x00]);
                    }
                    self.data.push(translen as u8);
                }
                self.data.extend_from_slice(&row);
            }
        }
        Ok(())
    }

    /// Page terminator: EOF on the last page of the stream, form feed
    /// when more pages follow.
    pub fn print(&mut self, last_page: bool) {
        self.data.push(if last_page { 0x1A } else { 0x0C });
    }
}
