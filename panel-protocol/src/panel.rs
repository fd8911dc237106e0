// Register addresses a panel stream carries. The 30-bit display word is
// split across two 15-bit registers so each write fits one frame.
pub const REG_DIGITS_LOW: usize = 0o01;
pub const REG_DIGITS_HIGH: usize = 0o02;

const VALUE_MASK: u32 = 0x7FFF;

/// One parsed panel register write.
pub struct Frame {
    reg_addr: usize, // 11-bit register address
    reg_value: u16,  // 15-bit data value
}

impl Frame {
    /// Constructs a Frame from raw panel bytes, `input` - one 4-byte
    /// frame from the panel stream. Rejects frames with bad header tags.
    pub fn new(input: &[u8; 4]) -> Option<Frame> {
        let (addr, value) = parse_panel_packet(*input)?;
        Some(Frame {
            reg_addr: addr as usize,
            reg_value: value,
        })
    }

    pub fn addr(&self) -> usize {
        self.reg_addr
    }

    pub fn value(&self) -> u16 {
        self.reg_value
    }

    /// Change the frame back to panel wire format.
    pub fn serialize(&self) -> [u8; 4] {
        generate_panel_packet(self.reg_addr, self.reg_value)
    }
}

/// Packs a register write into the tagged four-byte frame:
/// [Header | Addr(8-11), Upper(12-14) | Middle(6-11) | Lower(0-5)]
pub fn generate_panel_packet(addr: usize, value: u16) -> [u8; 4] {
    let header = ((addr >> 3) & 0x3F) as u8;
    let upper = 0x40 | ((addr & 0x7) << 3) as u8 | ((value >> 12) & 0x7) as u8;
    let middle = 0x80 | ((value >> 6) & 0x3F) as u8;
    let lower = 0xC0 | (value & 0x3F) as u8;
    [header, upper, middle, lower]
}

/// Extracts register address and value from a frame's bytes.
pub fn parse_panel_packet(packet: [u8; 4]) -> Option<(u16, u16)> {
    let [b0, b1, b2, b3] = packet;

    // Validate the two-bit header tags
    let valid = (b0 & 0xC0 == 0x00) &&  // Header: 00
               (b1 & 0xC0 == 0x40) &&  // Upper:  01
               (b2 & 0xC0 == 0x80) &&  // Middle: 10
               (b3 & 0xC0 == 0xC0); // Lower: 11

    if !valid {
        return None;
    }

    // Reconstruct 15-bit value
    let value = ((b1 as u16 & 0x07) << 12) | ((b2 as u16 & 0x3F) << 6) | (b3 as u16 & 0x3F);

    // Reconstruct 11-bit address
    let addr = ((b0 as u16 & 0x3F) << 3) | ((b1 as u16 >> 3) & 0x07);

    Some((addr, value))
}

/// Splits a 30-bit display word into its two register writes, low half
/// first. The order matters to a viewer that latches on the high write.
pub fn split_display_word(word: u32) -> [(usize, u16); 2] {
    [
        (REG_DIGITS_LOW, (word & VALUE_MASK) as u16),
        (REG_DIGITS_HIGH, ((word >> 15) & VALUE_MASK) as u16),
    ]
}

/// Rebuilds a display word from the two register halves.
pub fn merge_display_word(low: u16, high: u16) -> u32 {
    ((high as u32 & VALUE_MASK) << 15) | (low as u32 & VALUE_MASK)
}
