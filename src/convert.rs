//! Image preprocessing and page assembly.
//!
//! [`preprocess`] turns an arbitrary decoded image into the binary
//! plane(s) matching a label's printable dot grid; [`convert`] and
//! [`convert_queue`] drive the full job: preprocessing, per-page
//! instruction emission and copy handling.

use image::{imageops, imageops::FilterType, DynamicImage, GenericImageView, GrayImage, Luma,
            Pixel, Rgb, RgbImage};
use log::debug;

use crate::{
    error::Error,
    label::Label,
    model::Capability,
    plane::BitPlane,
    raster::{Policy, RasterDocument},
};

/// Relative aspect-ratio deviation accepted on fixed-size media before
/// the image is rejected instead of resampled.
const ASPECT_TOLERANCE: f64 = 0.01;

/// HSV thresholds for two-color separation. Hue is in degrees,
/// saturation and value on the 0-255 scale. A dot prints red when its
/// hue lies outside the lo..hi band and saturation/value clear their
/// minima; it prints black when its value is at or below the black
/// ceiling.
const RED_HUE_LO: f32 = 40.0;
const RED_HUE_HI: f32 = 210.0;
const RED_SAT_MIN: u8 = 100;
const RED_VAL_MIN: u8 = 80;
const BLACK_VAL_MAX: u8 = 80;

/// Requested image rotation, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotate {
    /// Rotate fixed-size media by +-90 degrees when the image
    /// orientation does not match the label orientation. No-op for
    /// continuous media.
    Auto,
    R0,
    R90,
    R180,
    R270,
}

impl Default for Rotate {
    fn default() -> Self {
        Rotate::Auto
    }
}

impl Rotate {
    /// Parse an explicit rotation in degrees.
    pub fn from_degrees(degrees: u16) -> Result<Self, Error> {
        match degrees % 360 {
            0 => Ok(Rotate::R0),
            90 => Ok(Rotate::R90),
            180 => Ok(Rotate::R180),
            270 => Ok(Rotate::R270),
            _ => Err(Error::UnsupportedRotation(degrees)),
        }
    }
}

/// Flat record of per-job print options.
///
/// Passed explicitly into every page build; there is no global state.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Black+red printing (QL-8xx series with 62red media).
    pub two_color: bool,
    /// Floyd-Steinberg dithering instead of a fixed threshold.
    pub dither: bool,
    pub rotate: Rotate,
    /// 600 dpi horizontal density: source pixels are pre-halved.
    pub dpi_600: bool,
    /// Cut after the last page.
    pub cut: bool,
    pub peeler: bool,
    /// PackBits row compression (where supported).
    pub compress: bool,
    /// Print-quality-priority bit of the media command.
    pub high_quality: bool,
    /// Darkness threshold in percent, 0-100. Higher prints darker.
    pub threshold: u8,
    /// Number of copies when a single source image is given.
    pub copies: usize,
    /// What to do when a command is unsupported on the model.
    pub policy: Policy,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            two_color: false,
            dither: false,
            rotate: Rotate::Auto,
            dpi_600: false,
            cut: true,
            peeler: false,
            compress: false,
            high_quality: true,
            threshold: 70,
            copies: 1,
            policy: Policy::Warn,
        }
    }
}

/// Binary plane(s) of one preprocessed page.
#[derive(Debug, Clone)]
pub enum Planes {
    Mono(BitPlane),
    TwoColor { black: BitPlane, red: BitPlane },
}

impl Planes {
    pub fn width(&self) -> u32 {
        match self {
            Planes::Mono(p) => p.width(),
            Planes::TwoColor { black, .. } => black.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Planes::Mono(p) => p.height(),
            Planes::TwoColor { black, .. } => black.height(),
        }
    }
}

/// Map the caller's 0-100 darkness percentage onto the internal 0-255
/// threshold applied to inverted luminance.
fn threshold_value(percent: u8) -> u8 {
    let inverted = 100 - u32::from(percent.min(100));
    (inverted * 255 / 100).min(255) as u8
}

/// Composite any alpha channel onto a white background and drop the
/// palette; printers know nothing about transparency.
fn canonicalize(im: &DynamicImage) -> RgbImage {
    let rgba = im.to_rgba();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, p) in rgba.enumerate_pixels() {
        let [r, g, b, a] = p.0;
        let a = u32::from(a);
        let blend = |c: u8| ((u32::from(c) * a + 255 * (255 - a)) / 255) as u8;
        out.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    out
}

fn rotate_ccw(im: DynamicImage, rotate: Rotate) -> DynamicImage {
    match rotate {
        Rotate::Auto | Rotate::R0 => im,
        Rotate::R90 => im.rotate270(),
        Rotate::R180 => im.rotate180(),
        Rotate::R270 => im.rotate90(),
    }
}

/// Place `im` on a blank full-head-width canvas, flush against the
/// right margin: the horizontal offset is
/// `device_width - image_width - right_margin`.
fn pad_to_head_width(
    im: &DynamicImage,
    device_width: u32,
    canvas_height: u32,
    right_margin: u32,
) -> DynamicImage {
    let (w, _) = im.dimensions();
    let x = device_width.saturating_sub(w + right_margin);
    let mut canvas = RgbImage::from_pixel(device_width, canvas_height, Rgb([255, 255, 255]));
    imageops::overlay(&mut canvas, &im.to_rgb(), x, 0);
    DynamicImage::ImageRgb8(canvas)
}

fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, u8, u8) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let sat = if max == 0 {
        0
    } else {
        (u32::from(delta) * 255 / u32::from(max)) as u8
    };
    let hue = if delta == 0 {
        0.0
    } else {
        let d = f32::from(delta);
        let h = if max == r {
            (f32::from(g) - f32::from(b)) / d
        } else if max == g {
            (f32::from(b) - f32::from(r)) / d + 2.0
        } else {
            (f32::from(r) - f32::from(g)) / d + 4.0
        };
        let h = h * 60.0;
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    };
    (hue, sat, max)
}

fn is_red(hue: f32, sat: u8, val: u8) -> bool {
    (hue < RED_HUE_LO || hue > RED_HUE_HI) && sat > RED_SAT_MIN && val > RED_VAL_MIN
}

fn is_black(val: u8) -> bool {
    val <= BLACK_VAL_MAX
}

/// Geometry normalization for continuous rolls: honor an explicit
/// rotation, halve for 600 dpi, scale to the printable width preserving
/// aspect ratio, then pad out to the full head width.
fn normalize_continuous(
    mut im: DynamicImage,
    label: &Label,
    device_width: u32,
    right_margin: u32,
    options: &PrintOptions,
) -> DynamicImage {
    im = rotate_ccw(im, options.rotate);
    if options.dpi_600 {
        let (w, h) = im.dimensions();
        im = im.resize_exact(w / 2, h, FilterType::Lanczos3);
    }
    let printable_width = label.dots_printable.0;
    let (w, h) = im.dimensions();
    if w != printable_width {
        let hsize = (f64::from(printable_width) / f64::from(w) * f64::from(h)) as u32;
        debug!("resizing {}x{} to {}x{}", w, h, printable_width, hsize);
        im = im.resize_exact(printable_width, hsize, FilterType::Lanczos3);
    }
    let (w, h) = im.dimensions();
    if w < device_width {
        im = pad_to_head_width(&im, device_width, h, right_margin);
    }
    im
}

/// Geometry normalization for fixed-size (die-cut) labels: auto or
/// explicit rotation, 1% aspect-ratio-tolerant resize to the expected
/// dot grid, 600 dpi halving, then placement on the full-width canvas.
fn normalize_die_cut(
    mut im: DynamicImage,
    label: &Label,
    device_width: u32,
    right_margin: u32,
    options: &PrintOptions,
) -> Result<DynamicImage, Error> {
    let printable = label.dots_printable;
    let expected = if options.dpi_600 {
        (printable.0 * 2, printable.1 * 2)
    } else {
        printable
    };

    match options.rotate {
        Rotate::Auto => {
            let (w, h) = im.dimensions();
            if expected.0 < expected.1 && w > h {
                // Landscape image on a portrait label.
                im = im.rotate270();
            } else if expected.0 > expected.1 && w < h {
                // Portrait image on a landscape label.
                im = im.rotate90();
            }
        }
        explicit => im = rotate_ccw(im, explicit),
    }

    let (w, h) = im.dimensions();
    if (w, h) != expected {
        let input_ratio = f64::from(w) / f64::from(h);
        let expected_ratio = f64::from(expected.0) / f64::from(expected.1);
        if ((input_ratio - expected_ratio) / expected_ratio).abs() < ASPECT_TOLERANCE {
            debug!("resizing {}x{} to {}x{}", w, h, expected.0, expected.1);
            im = im.resize_exact(expected.0, expected.1, FilterType::Lanczos3);
        } else {
            return Err(Error::BadImageDimensions {
                got: (w, h),
                expected,
            });
        }
    }
    if options.dpi_600 {
        im = im.resize_exact(expected.0 / 2, expected.1, FilterType::Lanczos3);
    }
    Ok(pad_to_head_width(&im, device_width, expected.1, right_margin))
}

/// Normalize a source image into the binary plane(s) for one page.
///
/// The returned plane(s) span the full head width of the model; for
/// two-color jobs the black and red planes are pixel-wise disjoint.
pub fn preprocess(
    image: &DynamicImage,
    label: &Label,
    cap: &Capability,
    options: &PrintOptions,
) -> Result<Planes, Error> {
    let device_width = cap.pixel_width;
    let right_margin = label.right_margin_dots + cap.right_margin_addition;

    let im = DynamicImage::ImageRgb8(canonicalize(image));
    let im = if label.is_continuous() {
        normalize_continuous(im, label, device_width, right_margin, options)
    } else {
        normalize_die_cut(im, label, device_width, right_margin, options)?
    };

    let threshold = threshold_value(options.threshold);

    if options.two_color {
        let rgb = im.to_rgb();
        let (w, h) = rgb.dimensions();
        let mut red_gray = GrayImage::new(w, h);
        let mut black_gray = GrayImage::new(w, h);
        for (x, y, p) in rgb.enumerate_pixels() {
            let [r, g, b] = p.0;
            let (hue, sat, val) = rgb_to_hsv(r, g, b);
            let ink = 255 - p.to_luma().0[0];
            if is_red(hue, sat, val) {
                red_gray.put_pixel(x, y, Luma([ink]));
            }
            if is_black(val) {
                black_gray.put_pixel(x, y, Luma([ink]));
            }
        }
        let red = BitPlane::from_gray(&red_gray, threshold);
        let mut black = BitPlane::from_gray(&black_gray, threshold);
        // The ink layers must never overlap; firmware behavior is
        // undefined for dots set in both planes.
        black.subtract(&red);
        Ok(Planes::TwoColor { black, red })
    } else {
        let mut gray = im.to_luma();
        imageops::invert(&mut gray);
        if options.dither {
            imageops::dither(&mut gray, &imageops::BiLevel);
            Ok(Planes::Mono(BitPlane::from_gray(&gray, 128)))
        } else {
            Ok(Planes::Mono(BitPlane::from_gray(&gray, threshold)))
        }
    }
}

/// Tolerate a capability rejection where the original protocol flow
/// simply skips the command.
fn allow_unsupported(result: Result<(), Error>) -> Result<(), Error> {
    match result {
        Err(Error::UnsupportedCommand(problem)) => {
            debug!("ignoring unsupported command: {}", problem);
            Ok(())
        }
        other => other,
    }
}

/// Emit the full instruction sequence of one page and hand back its
/// byte buffer. The document keeps its page counter, so consecutive
/// calls produce a starting page followed by continuation pages.
pub fn build_page(
    doc: &mut RasterDocument,
    planes: &Planes,
    label: &Label,
    options: &PrintOptions,
    is_first: bool,
    is_last: bool,
) -> Result<Vec<u8>, Error> {
    doc.clear();
    allow_unsupported(doc.switch_mode())?;
    if is_first {
        doc.status_information();
    }

    doc.media_type = Some(label.kind.media_code());
    doc.media_width = Some(label.tape_size.0);
    doc.media_length = Some(if label.is_continuous() {
        0
    } else {
        label.tape_size.1
    });
    doc.quality_priority = options.high_quality;
    doc.media_and_quality(planes.height());

    if options.cut && is_last {
        allow_unsupported(doc.mode_setting(true, options.peeler))?;
        allow_unsupported(doc.cut_every(1))?;
    } else {
        allow_unsupported(doc.mode_setting(false, options.peeler))?;
    }

    doc.dpi_600 = options.dpi_600;
    doc.cut_at_end = true;
    doc.two_color_printing = options.two_color;
    allow_unsupported(doc.expanded_mode())?;

    doc.wait(0);
    doc.margins(label.feed_margin);
    if doc.capability().compression {
        doc.compression(options.compress)?;
    }

    match planes {
        Planes::Mono(p) => doc.raster_data(p, None)?,
        Planes::TwoColor { black, red } => doc.raster_data(black, Some(red))?,
    }
    doc.print(is_last);
    Ok(doc.take_data())
}

fn rasterize(
    cap: &Capability,
    images: &[DynamicImage],
    label_id: &str,
    options: &PrintOptions,
) -> Result<Vec<Vec<u8>>, Error> {
    let label = Label::lookup(label_id)?;
    if options.two_color && !cap.two_color {
        return Err(Error::UnsupportedCommand(format!(
            "two-color printing on {}",
            cap.model.identifier()
        )));
    }

    let sources: Vec<&DynamicImage> = if images.len() == 1 && options.copies > 1 {
        vec![&images[0]; options.copies]
    } else {
        images.iter().collect()
    };
    let total = sources.len();
    debug!("rasterizing {} pages", total);

    let mut doc = RasterDocument::new(cap, options.policy);
    let mut pages = Vec::with_capacity(total);
    for (i, im) in sources.into_iter().enumerate() {
        let planes = preprocess(im, &label, cap, options)?;
        let page = build_page(&mut doc, &planes, &label, options, i == 0, i + 1 == total)?;
        pages.push(page);
    }
    Ok(pages)
}

/// Convert images into a single instruction stream: invalidate and
/// initialize, then every page back to back.
pub fn convert(
    cap: &Capability,
    images: &[DynamicImage],
    label_id: &str,
    options: &PrintOptions,
) -> Result<Vec<u8>, Error> {
    let mut doc = RasterDocument::new(cap, options.policy);
    doc.invalidate();
    doc.initialize();
    let mut out = doc.take_data();
    for page in rasterize(cap, images, label_id, options)? {
        out.extend_from_slice(&page);
    }
    Ok(out)
}

/// Convert images into independent per-page buffers for queued,
/// one-page-at-a-time transmission. The invalidate/initialize preamble
/// is the queue's responsibility.
pub fn convert_queue(
    cap: &Capability,
    images: &[DynamicImage],
    label_id: &str,
    options: &PrintOptions,
) -> Result<Vec<Vec<u8>>, Error> {
    rasterize(cap, images, label_id, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    fn solid_rgb(w: u32, h: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb(color)))
    }

    fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn threshold_mapping() {
        assert_eq!(threshold_value(70), 76);
        assert_eq!(threshold_value(0), 255);
        assert_eq!(threshold_value(100), 0);
        assert_eq!(threshold_value(255), 0);
    }

    #[test]
    fn rotate_from_degrees() {
        assert_eq!(Rotate::from_degrees(0).unwrap(), Rotate::R0);
        assert_eq!(Rotate::from_degrees(90).unwrap(), Rotate::R90);
        assert_eq!(Rotate::from_degrees(450).unwrap(), Rotate::R90);
        assert!(matches!(
            Rotate::from_degrees(45),
            Err(Error::UnsupportedRotation(45))
        ));
    }

    #[test]
    fn continuous_output_spans_head_width() {
        let cap = Model::QL800.capability();
        let label = Label::lookup("62").unwrap();
        let im = solid_rgb(300, 400, [0, 0, 0]);
        let planes = preprocess(&im, &label, &cap, &PrintOptions::default()).unwrap();

        let plane = match planes {
            Planes::Mono(p) => p,
            _ => panic!("expected mono plane"),
        };
        assert_eq!(plane.width(), 720);
        // 400 * 696 / 300
        assert_eq!(plane.height(), 928);
        // Ink flush against the right margin: 720 - 696 - 12 = 12.
        assert!(!plane.get(11, 0));
        assert!(plane.get(12, 0));
        assert!(plane.get(707, 0));
        assert!(!plane.get(708, 0));
    }

    #[test]
    fn continuous_exact_width_is_still_padded() {
        // An image already at printable width must be padded to the
        // head width too, or the encoder would reject it.
        let cap = Model::QL800.capability();
        let label = Label::lookup("62").unwrap();
        let im = solid_rgb(696, 100, [0, 0, 0]);
        let planes = preprocess(&im, &label, &cap, &PrintOptions::default()).unwrap();
        assert_eq!(planes.width(), 720);
        assert_eq!(planes.height(), 100);
    }

    #[test]
    fn continuous_dpi_600_halves_width() {
        let cap = Model::QL800.capability();
        let label = Label::lookup("62").unwrap();
        let im = solid_rgb(600, 400, [0, 0, 0]);
        let options = PrintOptions {
            dpi_600: true,
            ..Default::default()
        };
        let planes = preprocess(&im, &label, &cap, &options).unwrap();
        assert_eq!(planes.width(), 720);
        // Halved to 300 wide, then scaled: 400 * 696 / 300.
        assert_eq!(planes.height(), 928);
    }

    #[test]
    fn die_cut_accepts_ratio_within_tolerance() {
        let cap = Model::QL800.capability();
        let label = Label::lookup("23x23").unwrap();
        // 300x302: 0.66% off square, inside the 1% tolerance.
        let im = solid_rgb(300, 302, [0, 0, 0]);
        let planes = preprocess(&im, &label, &cap, &PrintOptions::default()).unwrap();
        assert_eq!(planes.width(), 720);
        assert_eq!(planes.height(), 202);
    }

    #[test]
    fn die_cut_rejects_ratio_outside_tolerance() {
        let cap = Model::QL800.capability();
        let label = Label::lookup("23x23").unwrap();
        let im = solid_rgb(300, 330, [0, 0, 0]);
        match preprocess(&im, &label, &cap, &PrintOptions::default()) {
            Err(Error::BadImageDimensions { got, expected }) => {
                assert_eq!(got, (300, 330));
                assert_eq!(expected, (202, 202));
            }
            other => panic!("expected BadImageDimensions, got {:?}", other),
        }
    }

    #[test]
    fn die_cut_auto_rotates_landscape_to_portrait() {
        let cap = Model::QL800.capability();
        let label = Label::lookup("29x90").unwrap();
        // Exactly the printable grid, but landscape.
        let im = solid_rgb(991, 306, [0, 0, 0]);
        let planes = preprocess(&im, &label, &cap, &PrintOptions::default()).unwrap();
        assert_eq!(planes.width(), 720);
        assert_eq!(planes.height(), 991);
    }

    #[test]
    fn die_cut_explicit_rotation() {
        let cap = Model::QL800.capability();
        let label = Label::lookup("29x90").unwrap();
        let im = solid_rgb(991, 306, [0, 0, 0]);
        let options = PrintOptions {
            rotate: Rotate::R90,
            ..Default::default()
        };
        let planes = preprocess(&im, &label, &cap, &options).unwrap();
        assert_eq!(planes.height(), 991);
    }

    #[test]
    fn alpha_composites_to_white() {
        let cap = Model::QL800.capability();
        let label = Label::lookup("62").unwrap();
        // Fully transparent black: composites to white, so no ink.
        let rgba = image::RgbaImage::from_pixel(300, 100, image::Rgba([0, 0, 0, 0]));
        let im = DynamicImage::ImageRgba8(rgba);
        let planes = preprocess(&im, &label, &cap, &PrintOptions::default()).unwrap();
        match planes {
            Planes::Mono(p) => assert_eq!(p.ink_count(), 0),
            _ => panic!("expected mono plane"),
        }
    }

    #[test]
    fn two_color_planes_are_disjoint() {
        let cap = Model::QL820NWB.capability();
        let label = Label::lookup("62red").unwrap();
        let mut rgb = RgbImage::from_pixel(696, 60, Rgb([255, 255, 255]));
        for y in 0..20 {
            for x in 0..696 {
                rgb.put_pixel(x, y, Rgb([255, 0, 0])); // red band
            }
        }
        for y in 20..40 {
            for x in 0..696 {
                rgb.put_pixel(x, y, Rgb([0, 0, 0])); // black band
            }
        }
        let im = DynamicImage::ImageRgb8(rgb);
        let options = PrintOptions {
            two_color: true,
            ..Default::default()
        };
        let (black, red) = match preprocess(&im, &label, &cap, &options).unwrap() {
            Planes::TwoColor { black, red } => (black, red),
            _ => panic!("expected two planes"),
        };
        assert!(black.is_disjoint(&red));
        assert!(red.get(100, 10));
        assert!(!red.get(100, 30));
        assert!(black.get(100, 30));
        assert!(!black.get(100, 10));
        // White band carries no ink at all.
        assert!(!black.get(100, 50));
        assert!(!red.get(100, 50));
    }

    #[test]
    fn two_color_requires_capable_model() {
        let cap = Model::QL700.capability();
        let im = solid_rgb(300, 400, [0, 0, 0]);
        let options = PrintOptions {
            two_color: true,
            ..Default::default()
        };
        assert!(matches!(
            convert(&cap, &[im], "62", &options),
            Err(Error::UnsupportedCommand(_))
        ));
    }

    #[test]
    fn three_copies_terminators() {
        let cap = Model::QL800.capability();
        let im = solid_rgb(300, 400, [0, 0, 0]);
        let options = PrintOptions {
            copies: 3,
            ..Default::default()
        };
        let pages = convert_queue(&cap, &[im], "62", &options).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(*pages[0].last().unwrap(), 0x0C);
        assert_eq!(*pages[1].last().unwrap(), 0x0C);
        assert_eq!(*pages[2].last().unwrap(), 0x1A);

        // Only the first page requests status, and only the last page
        // enables auto-cut.
        assert!(find_subsequence(&pages[0], &[0x1B, 0x69, 0x53]).is_some());
        assert!(find_subsequence(&pages[1], &[0x1B, 0x69, 0x53]).is_none());
        assert!(find_subsequence(&pages[0], &[0x1B, 0x69, 0x4D, 0x00]).is_some());
        assert!(find_subsequence(&pages[2], &[0x1B, 0x69, 0x4D, 0x40]).is_some());
        assert!(find_subsequence(&pages[2], &[0x1B, 0x69, 0x41, 0x01]).is_some());

        // First page is the starting page, later ones continuations.
        let media = find_subsequence(&pages[0], &[0x1B, 0x69, 0x7A]).unwrap();
        assert_eq!(pages[0][media + 11], 0x00);
        let media = find_subsequence(&pages[1], &[0x1B, 0x69, 0x7A]).unwrap();
        assert_eq!(pages[1][media + 11], 0x01);
    }

    #[test]
    fn convert_prepends_preamble() {
        let cap = Model::QL800.capability();
        let im = solid_rgb(300, 400, [0, 0, 0]);
        let data = convert(&cap, &[im], "62", &PrintOptions::default()).unwrap();
        // 200 invalidate zeros, then ESC @.
        assert!(data[..200].iter().all(|&b| b == 0x00));
        assert_eq!(&data[200..202], &[0x1B, 0x40]);
        assert_eq!(*data.last().unwrap(), 0x1A);
    }

    #[test]
    fn page_carries_media_and_margin_commands() {
        let cap = Model::QL820NWB.capability();
        let im = solid_rgb(300, 400, [0, 0, 0]);
        let pages = convert_queue(&cap, &[im], "62", &PrintOptions::default()).unwrap();
        let page = &pages[0];
        let media = find_subsequence(page, &[0x1B, 0x69, 0x7A]).unwrap();
        // Continuous 62mm: type 0x0A, width 62, length 0, 928 lines.
        assert_eq!(
            &page[media + 3..media + 13],
            &[0xCE, 0x0A, 62, 0, 0xA0, 0x03, 0x00, 0x00, 0x00, 0x00]
        );
        // Feed margin of 35 dots.
        assert!(find_subsequence(page, &[0x1B, 0x69, 0x64, 0x23, 0x00]).is_some());
        // Compression supported on the QL-820NWB: explicitly disabled.
        assert!(find_subsequence(page, &[0x4D, 0x00]).is_some());
    }

    #[test]
    fn unknown_label_fails_before_encoding() {
        let cap = Model::QL800.capability();
        let im = solid_rgb(10, 10, [0, 0, 0]);
        assert!(matches!(
            convert(&cap, &[im], "63", &PrintOptions::default()),
            Err(Error::UnknownLabel(_))
        ));
    }
}
