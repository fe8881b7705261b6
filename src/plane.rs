use image::GrayImage;

/// A binary pixel plane, one ink bit per dot.
///
/// Width always equals the full print head width by the time a plane
/// reaches the instruction builder; the preprocessor pads shorter
/// images with blank dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPlane {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl BitPlane {
    /// Blank plane of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        BitPlane {
            width,
            height,
            bits: vec![0; (width * height) as usize],
        }
    }

    /// Build a plane from a grayscale image where ink has already been
    /// mapped to high values (inverted luminance). A pixel becomes ink
    /// when its value is at or above `threshold`.
    pub fn from_gray(gray: &GrayImage, threshold: u8) -> Self {
        let (width, height) = gray.dimensions();
        let mut plane = BitPlane::new(width, height);
        for (x, y, p) in gray.enumerate_pixels() {
            if p.0[0] >= threshold {
                plane.set(x, y, true);
            }
        }
        plane
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[(y * self.width + x) as usize] != 0
    }

    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        self.bits[(y * self.width + x) as usize] = ink as u8;
    }

    /// Clear every dot that is also set in `other`.
    ///
    /// Used to make the black plane disjoint from the red plane; the
    /// firmware's behavior is undefined when both ink layers mark the
    /// same dot. Both planes must have identical dimensions.
    pub fn subtract(&mut self, other: &BitPlane) {
        debug_assert_eq!(self.dimensions(), other.dimensions());
        for (bit, &mask) in self.bits.iter_mut().zip(other.bits.iter()) {
            if mask != 0 {
                *bit = 0;
            }
        }
    }

    /// True when no dot is set in both planes.
    pub fn is_disjoint(&self, other: &BitPlane) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(&a, &b)| a == 0 || b == 0)
    }

    /// Number of ink dots in the plane.
    pub fn ink_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b != 0).count()
    }

    /// Pack row `y` into `width / 8` bytes in transmission order.
    ///
    /// The head scans right-to-left relative to the image, so the byte
    /// order is horizontally mirrored: the first transmitted byte holds
    /// the rightmost 8 dots, MSB outermost.
    pub fn packed_row_mirrored(&self, y: u32) -> Vec<u8> {
        let row_bytes = (self.width / 8) as usize;
        let mut out = vec![0u8; row_bytes];
        for (j, byte) in out.iter_mut().enumerate() {
            let mut b = 0u8;
            for k in 0..8u32 {
                let sx = self.width - 1 - (j as u32 * 8 + k);
                if self.get(sx, y) {
                    b |= 0x80 >> k;
                }
            }
            *byte = b;
        }
        out
    }
}
