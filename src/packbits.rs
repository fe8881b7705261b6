//! TIFF PackBits run-length coding for raster rows.
//!
//! Rows on compression-capable models may be transmitted PackBits
//! encoded: a control byte `n` in 0..=127 announces `n + 1` literal
//! bytes, a control byte interpreted as a negative two's-complement
//! value `-k` announces `k + 1` repeats of the next byte. `0x80` is
//! never produced.

/// Encode one raster row.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + data.len() / 128 + 1);
    let mut i = 0;

    while i < data.len() {
        // Measure the run starting here, capped at 128.
        let mut run = 1;
        while i + run < data.len() && run < 128 && data[i + run] == data[i] {
            run += 1;
        }

        if run >= 2 {
            out.push((257 - run) as u8);
            out.push(data[i]);
            i += run;
        } else {
            // Collect literals until the next run of 3+ (a run of 2 is
            // not worth breaking a literal for).
            let start = i;
            let mut len = 1;
            while i + len < data.len() && len < 128 {
                let next = i + len;
                if next + 2 < data.len() && data[next] == data[next + 1] && data[next] == data[next + 2]
                {
                    break;
                }
                len += 1;
            }
            out.push((len - 1) as u8);
            out.extend_from_slice(&data[start..start + len]);
            i += len;
        }
    }

    out
}

/// Decode a PackBits stream back into raw row bytes.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0;

    while i < data.len() {
        let control = data[i] as i8;
        i += 1;
        if control >= 0 {
            let len = control as usize + 1;
            out.extend_from_slice(&data[i..i + len]);
            i += len;
        } else if control != -128 {
            let len = (-(control as i32)) as usize + 1;
            out.extend(std::iter::repeat(data[i]).take(len));
            i += 1;
        }
        // -128 is a no-op by convention.
    }

    out
}
