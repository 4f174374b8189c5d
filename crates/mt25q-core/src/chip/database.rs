//! MT25Q density table
//!
//! Maps the capacity code returned by Read ID to the array size. The codes
//! are not a plain power of two above 256Mb (0x19 is followed by 0x20).

/// One density of the MT25Q family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    /// Capacity code reported by Read ID
    pub size_code: u8,
    /// Array size in megabits
    pub megabits: u32,
    /// Part number stem
    pub name: &'static str,
}

impl Density {
    /// Array size in bytes
    pub const fn capacity_bytes(&self) -> u32 {
        self.megabits * (1024 * 1024 / 8)
    }
}

/// All known densities, smallest first
pub const DENSITIES: &[Density] = &[
    Density {
        size_code: 0x17,
        megabits: 64,
        name: "MT25Q064",
    },
    Density {
        size_code: 0x18,
        megabits: 128,
        name: "MT25Q128",
    },
    Density {
        size_code: 0x19,
        megabits: 256,
        name: "MT25Q256",
    },
    Density {
        size_code: 0x20,
        megabits: 512,
        name: "MT25Q512",
    },
    Density {
        size_code: 0x21,
        megabits: 1024,
        name: "MT25Q01G",
    },
    Density {
        size_code: 0x22,
        megabits: 2048,
        name: "MT25Q02G",
    },
];

/// Look up a density by its capacity code
pub fn find_by_size_code(size_code: u8) -> Option<&'static Density> {
    DENSITIES.iter().find(|d| d.size_code == size_code)
}
