use crate::error::Error;

/// Physical category of the label stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Unbounded roll, print length chosen by the job.
    Continuous,
    /// Pre-cut label of fixed size.
    DieCut,
    /// Pre-cut circular label.
    RoundDieCut,
    /// PT-series laminated tape, continuous.
    PtouchContinuous,
}

/// Geometry of one label/media type.
///
/// `dots_printable` is the area the head can actually mark;
/// `dots_total` includes the side margins of the stock. Continuous
/// media have a zero length in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub identifier: &'static str,
    pub kind: Kind,
    /// Stock size in millimetres (width, length). Reported to the
    /// printer in the media/quality command.
    pub tape_size: (u8, u8),
    pub dots_total: (u32, u32),
    pub dots_printable: (u32, u32),
    /// Unprintable dots between the printable area and the right edge
    /// of the head, before any per-model addition.
    pub right_margin_dots: u32,
    /// Dots fed past the end of the image before cutting.
    pub feed_margin: u16,
}

const fn label(
    identifier: &'static str,
    kind: Kind,
    tape_size: (u8, u8),
    dots_total: (u32, u32),
    dots_printable: (u32, u32),
    right_margin_dots: u32,
    feed_margin: u16,
) -> Label {
    Label {
        identifier,
        kind,
        tape_size,
        dots_total,
        dots_printable,
        right_margin_dots,
        feed_margin,
    }
}

/// Label geometry table, as published in the Brother raster command
/// references for the QL and PT series.
pub const LABELS: &[Label] = &[
    // Continuous rolls
    label("12", Kind::Continuous, (12, 0), (142, 0), (106, 0), 29, 35),
    label("29", Kind::Continuous, (29, 0), (342, 0), (306, 0), 6, 35),
    label("38", Kind::Continuous, (38, 0), (449, 0), (413, 0), 12, 35),
    label("50", Kind::Continuous, (50, 0), (590, 0), (554, 0), 12, 35),
    label("54", Kind::Continuous, (54, 0), (636, 0), (590, 0), 0, 35),
    label("62", Kind::Continuous, (62, 0), (732, 0), (696, 0), 12, 35),
    label("62red", Kind::Continuous, (62, 0), (732, 0), (696, 0), 12, 35),
    label("102", Kind::Continuous, (102, 0), (1200, 0), (1164, 0), 12, 35),
    // Die-cut labels
    label("17x54", Kind::DieCut, (17, 54), (201, 636), (165, 566), 0, 0),
    label("17x87", Kind::DieCut, (17, 87), (201, 1026), (165, 956), 0, 0),
    label("23x23", Kind::DieCut, (23, 23), (272, 272), (202, 202), 42, 0),
    label("29x42", Kind::DieCut, (29, 42), (342, 495), (306, 425), 6, 0),
    label("29x90", Kind::DieCut, (29, 90), (342, 1061), (306, 991), 6, 0),
    label("39x90", Kind::DieCut, (38, 90), (449, 1061), (413, 991), 12, 0),
    label("39x48", Kind::DieCut, (39, 48), (461, 565), (425, 495), 6, 0),
    label("52x29", Kind::DieCut, (52, 29), (614, 341), (578, 271), 0, 0),
    label("62x29", Kind::DieCut, (62, 29), (732, 341), (696, 271), 12, 0),
    label("62x100", Kind::DieCut, (62, 100), (732, 1179), (696, 1109), 12, 0),
    label("102x51", Kind::DieCut, (102, 51), (1200, 596), (1164, 526), 12, 0),
    label("102x152", Kind::DieCut, (102, 153), (1200, 1804), (1164, 1734), 12, 0),
    // Round die-cut labels
    label("d12", Kind::RoundDieCut, (12, 12), (142, 142), (94, 94), 113, 0),
    label("d24", Kind::RoundDieCut, (24, 24), (284, 284), (236, 236), 42, 0),
    label("d58", Kind::RoundDieCut, (58, 58), (688, 688), (618, 618), 51, 0),
    // PT tape
    label("pt12", Kind::PtouchContinuous, (12, 0), (70, 0), (61, 0), 9, 14),
    label("pt18", Kind::PtouchContinuous, (18, 0), (112, 0), (103, 0), 9, 14),
    label("pt24", Kind::PtouchContinuous, (24, 0), (128, 0), (120, 0), 8, 14),
    label("pt36", Kind::PtouchContinuous, (36, 0), (192, 0), (183, 0), 8, 14),
];

impl Label {
    /// Look up a label by identifier, e.g. `"62"` or `"29x90"`.
    pub fn lookup(id: &str) -> Result<Label, Error> {
        LABELS
            .iter()
            .find(|l| l.identifier == id)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(id.to_string()))
    }

    /// Continuous media take their length from the job, not the stock.
    pub fn is_continuous(&self) -> bool {
        matches!(self.kind, Kind::Continuous | Kind::PtouchContinuous)
    }
}

impl Kind {
    /// Media type byte for the media/quality command.
    pub fn media_code(&self) -> u8 {
        match self {
            Kind::Continuous => 0x0A,
            Kind::DieCut | Kind::RoundDieCut => 0x0B,
            Kind::PtouchContinuous => 0x00,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_labels() {
        let l = Label::lookup("62").unwrap();
        assert_eq!(l.kind, Kind::Continuous);
        assert_eq!(l.dots_printable, (696, 0));
        assert_eq!(l.right_margin_dots, 12);

        let l = Label::lookup("29x90").unwrap();
        assert_eq!(l.kind, Kind::DieCut);
        assert_eq!(l.dots_printable, (306, 991));
        assert_eq!(l.tape_size, (29, 90));
    }

    #[test]
    fn lookup_unknown_label() {
        match Label::lookup("999x999") {
            Err(Error::UnknownLabel(id)) => assert_eq!(id, "999x999"),
            other => panic!("expected UnknownLabel, got {:?}", other),
        }
    }

    #[test]
    fn printable_fits_inside_total() {
        for l in LABELS {
            assert!(l.dots_printable.0 <= l.dots_total.0, "{}", l.identifier);
            assert!(l.dots_printable.1 <= l.dots_total.1 || l.is_continuous(), "{}", l.identifier);
        }
    }

    #[test]
    fn continuous_labels_have_no_length() {
        for l in LABELS {
            if l.is_continuous() {
                assert_eq!(l.dots_printable.1, 0, "{}", l.identifier);
                assert_eq!(l.tape_size.1, 0, "{}", l.identifier);
            } else {
                assert!(l.dots_printable.1 > 0, "{}", l.identifier);
            }
        }
    }

    #[test]
    fn media_codes() {
        assert_eq!(Kind::Continuous.media_code(), 0x0A);
        assert_eq!(Kind::DieCut.media_code(), 0x0B);
        assert_eq!(Kind::RoundDieCut.media_code(), 0x0B);
        assert_eq!(Kind::PtouchContinuous.media_code(), 0x00);
    }
}
