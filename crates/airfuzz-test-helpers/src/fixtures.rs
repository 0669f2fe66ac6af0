//! Test fixture builders for buffers and element paths.

/// Builder for outgoing packet buffers used in pass tests.
#[derive(Debug, Clone)]
pub struct PacketBufferFixture {
    len: usize,
    fill: u8,
    seeds: Vec<(usize, u8)>,
}

impl Default for PacketBufferFixture {
    fn default() -> Self {
        Self::zeroed(800)
    }
}

impl PacketBufferFixture {
    /// A buffer of `len` zero bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            len,
            fill: 0,
            seeds: Vec::new(),
        }
    }

    /// A buffer of `len` bytes all set to `fill`.
    pub fn filled(len: usize, fill: u8) -> Self {
        Self {
            len,
            fill,
            seeds: Vec::new(),
        }
    }

    /// Pre-seeds one byte before the buffer is built.
    #[must_use]
    pub fn with_byte(mut self, offset: usize, value: u8) -> Self {
        self.seeds.push((offset, value));
        self
    }

    /// Materializes the buffer.
    ///
    /// # Panics
    ///
    /// Panics if a seeded offset lies outside the buffer; fixtures are
    /// supposed to be well-formed.
    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![self.fill; self.len];
        for &(offset, value) in &self.seeds {
            buf[offset] = value;
        }
        buf
    }
}

/// Element paths mirroring the radio-control messages the real campaigns
/// target most often.
pub mod paths {
    /// Connection setup message element.
    pub const RRC_SETUP: &str = "nr-rrc.rrcSetup_element";
    /// Security activation message element.
    pub const SECURITY_MODE_COMMAND: &str = "nr-rrc.securityModeCommand_element";
    /// Connection reconfiguration message element.
    pub const RRC_RECONFIGURATION: &str = "nr-rrc.rrcReconfiguration_element";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fixture_is_800_zeroed_bytes() {
        let buf = PacketBufferFixture::default().build();
        assert_eq!(buf.len(), 800);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn seeded_bytes_land_where_placed() {
        let buf = PacketBufferFixture::filled(16, 0xaa).with_byte(3, 0x55).build();
        assert_eq!(buf[3], 0x55);
        assert_eq!(buf[4], 0xaa);
    }
}
