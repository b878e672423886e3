// A quadratic probe sequence.
//
// The i-th probe lands at `h + i^2 (mod len)`. Successive squares differ by
// odd numbers, so the sequence is walked by adding 1, 3, 5, ... to the current
// position.
pub struct Probe {
    // The current index in the probe sequence.
    pub i: usize,
    // The number of collisions seen so far.
    pub len: usize,
    // The length of the table.
    modulus: usize,
}

impl Probe {
    // Initialize the probe sequence at the home slot of `hash`.
    #[inline]
    pub fn start(hash: usize, len: usize) -> Probe {
        Probe {
            i: hash % len,
            len: 0,
            modulus: len,
        }
    }

    // Advance to the next position in the sequence.
    //
    // For a prime table that is at most half occupied, a free slot is always
    // found within the first `(len + 1) / 2` probes, so the step never exceeds
    // the table length and a single subtraction implements the wraparound.
    #[inline]
    pub fn next(&mut self) {
        self.len += 1;

        let step = 2 * self.len - 1;
        debug_assert!(step <= self.modulus, "probe sequence exhausted");

        self.i += step;
        if self.i >= self.modulus {
            self.i -= self.modulus;
        }
    }
}
