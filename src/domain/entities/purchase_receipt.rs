/// Build target the purchasing plugin is running on. Chosen once, when the
/// relay is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

/// Receipt string exactly as handed over by the purchasing plugin.
///
/// Never trusted: it may be empty, not JSON at all, or missing fields.
#[derive(Debug, Clone)]
pub struct PurchaseReceipt {
    pub platform: Platform,
    pub raw: String,
}

impl PurchaseReceipt {
    pub fn new(platform: Platform, raw: impl Into<String>) -> Self {
        Self {
            platform,
            raw: raw.into(),
        }
    }
}
