// Ceiling on remaining copies of any title.
pub const MAX_STOCK: u32 = 3;

// Copies assigned to a title when it is added.
pub const DEFAULT_STOCK: u32 = 3;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Configuration {
    pub max_stock: u32,
    pub default_stock: u32,
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            max_stock: MAX_STOCK,
            default_stock: DEFAULT_STOCK,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
