use std::str::FromStr;

use crate::error::Error;

/// Supported printer models.
///
/// The QL series are label printers (continuous rolls and die-cut
/// labels), the PT series are tape printers (laminated tape, different
/// raster framing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    QL500,
    QL550,
    QL560,
    QL570,
    QL580N,
    QL600,
    QL650TD,
    QL700,
    QL710W,
    QL720NW,
    QL800,
    QL810W,
    QL820NWB,
    QL1050,
    QL1060N,
    QL1100,
    QL1110NWB,
    QL1115NWB,
    PTP750W,
    PTE550W,
    PTP900W,
    PTP950NW,
}

/// Resolved capabilities of one printer model.
///
/// All per-model protocol differences are folded into this struct once,
/// at resolution time. The instruction builder only ever consults these
/// fields, never the model identifier itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub model: Model,
    /// Dots across the print head. Every transmitted row covers the
    /// full head width.
    pub pixel_width: u32,
    /// `pixel_width / 8`, the packed size of one uncompressed row.
    pub bytes_per_row: u32,
    /// Number of zero bytes the invalidate command sends to flush the
    /// printer's command buffer.
    pub num_invalidate_bytes: usize,
    /// Supports the dynamic command mode switch (ESC i a).
    pub mode_setting: bool,
    /// Has a cutter (ESC i M / ESC i A).
    pub cutting: bool,
    /// Supports the expanded mode command (ESC i K).
    pub expanded_mode: bool,
    /// Supports PackBits row compression.
    pub compression: bool,
    /// Supports black+red two-color printing.
    pub two_color: bool,
    /// Tape (PT) family: rows are framed with `0x47` + u16 length
    /// instead of the QL `0x67`/`0x77` markers.
    pub tape_framing: bool,
    /// The cut-every command is silently dropped on the tape family
    /// even though those models have a cutter. Hardware quirk.
    pub cut_every_supported: bool,
    /// Extra right-margin dots the wide models require on top of the
    /// label's own margin.
    pub right_margin_addition: u32,
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QL-500" => Ok(Self::QL500),
            "QL-550" => Ok(Self::QL550),
            "QL-560" => Ok(Self::QL560),
            "QL-570" => Ok(Self::QL570),
            "QL-580N" => Ok(Self::QL580N),
            "QL-600" => Ok(Self::QL600),
            "QL-650TD" => Ok(Self::QL650TD),
            "QL-700" => Ok(Self::QL700),
            "QL-710W" => Ok(Self::QL710W),
            "QL-720NW" => Ok(Self::QL720NW),
            "QL-800" => Ok(Self::QL800),
            "QL-810W" => Ok(Self::QL810W),
            "QL-820NWB" => Ok(Self::QL820NWB),
            "QL-1050" => Ok(Self::QL1050),
            "QL-1060N" => Ok(Self::QL1060N),
            "QL-1100" => Ok(Self::QL1100),
            "QL-1110NWB" => Ok(Self::QL1110NWB),
            "QL-1115NWB" => Ok(Self::QL1115NWB),
            "PT-P750W" => Ok(Self::PTP750W),
            "PT-E550W" => Ok(Self::PTE550W),
            "PT-P900W" => Ok(Self::PTP900W),
            "PT-P950NW" => Ok(Self::PTP950NW),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

impl Model {
    /// Textual identifier as used in the capability table and by the
    /// printer's own status responses.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::QL500 => "QL-500",
            Self::QL550 => "QL-550",
            Self::QL560 => "QL-560",
            Self::QL570 => "QL-570",
            Self::QL580N => "QL-580N",
            Self::QL600 => "QL-600",
            Self::QL650TD => "QL-650TD",
            Self::QL700 => "QL-700",
            Self::QL710W => "QL-710W",
            Self::QL720NW => "QL-720NW",
            Self::QL800 => "QL-800",
            Self::QL810W => "QL-810W",
            Self::QL820NWB => "QL-820NWB",
            Self::QL1050 => "QL-1050",
            Self::QL1060N => "QL-1060N",
            Self::QL1100 => "QL-1100",
            Self::QL1110NWB => "QL-1110NWB",
            Self::QL1115NWB => "QL-1115NWB",
            Self::PTP750W => "PT-P750W",
            Self::PTE550W => "PT-E550W",
            Self::PTP900W => "PT-P900W",
            Self::PTP950NW => "PT-P950NW",
        }
    }

    fn is_tape(&self) -> bool {
        matches!(
            self,
            Self::PTP750W | Self::PTE550W | Self::PTP900W | Self::PTP950NW
        )
    }

    fn bytes_per_row(&self) -> u32 {
        match self {
            Self::QL1050 | Self::QL1060N | Self::QL1100 | Self::QL1110NWB | Self::QL1115NWB => 162,
            Self::PTP750W | Self::PTE550W => 16,
            Self::PTP900W | Self::PTP950NW => 70,
            _ => 90,
        }
    }

    /// Resolve this model's protocol capabilities.
    pub fn capability(self) -> Capability {
        let bytes_per_row = self.bytes_per_row();
        Capability {
            model: self,
            pixel_width: bytes_per_row * 8,
            bytes_per_row,
            num_invalidate_bytes: if self.is_tape() { 100 } else { 200 },
            mode_setting: !matches!(
                self,
                Self::QL500 | Self::QL550 | Self::QL560 | Self::QL570 | Self::QL700
            ),
            cutting: !matches!(self, Self::QL500),
            expanded_mode: !matches!(self, Self::QL500 | Self::QL550 | Self::QL560),
            compression: matches!(
                self,
                Self::QL580N
                    | Self::QL650TD
                    | Self::QL710W
                    | Self::QL720NW
                    | Self::QL810W
                    | Self::QL820NWB
                    | Self::QL1050
                    | Self::QL1060N
                    | Self::QL1100
                    | Self::QL1110NWB
                    | Self::QL1115NWB
            ),
            two_color: matches!(self, Self::QL800 | Self::QL810W | Self::QL820NWB),
            tape_framing: self.is_tape(),
            cut_every_supported: !self.is_tape(),
            right_margin_addition: match self {
                Self::QL1050 | Self::QL1060N => 44,
                _ => 0,
            },
        }
    }

    /// All known models, mainly for listing in front-ends.
    pub fn all() -> &'static [Model] {
        &[
            Self::QL500,
            Self::QL550,
            Self::QL560,
            Self::QL570,
            Self::QL580N,
            Self::QL600,
            Self::QL650TD,
            Self::QL700,
            Self::QL710W,
            Self::QL720NW,
            Self::QL800,
            Self::QL810W,
            Self::QL820NWB,
            Self::QL1050,
            Self::QL1060N,
            Self::QL1100,
            Self::QL1110NWB,
            Self::QL1115NWB,
            Self::PTP750W,
            Self::PTE550W,
            Self::PTP900W,
            Self::PTP950NW,
        ]
    }
}

/// Look up a model by its textual identifier and resolve its
/// capabilities in one step.
pub fn resolve_model(id: &str) -> Result<Capability, Error> {
    Ok(Model::from_str(id)?.capability())
}
