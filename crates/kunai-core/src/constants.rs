/// Line terminator for every physical vCard line (RFC 6350 §3.2).
pub const LINE_BREAK: &str = "\r\n";

/// Break inserted when a long line is folded onto a continuation line.
pub const FOLDING_BREAK: &str = const_str::concat!(LINE_BREAK, " ");

/// Maximum number of characters on a physical line before folding.
///
/// RFC 6350 phrases the limit in octets; lines are measured in Unicode code
/// points, which is exact for ASCII and lenient for multi-byte text.
pub const FOLDING_LENGTH: usize = 75;

pub const VCARD_VERSION_3_0: &str = "3.0";
pub const VCARD_VERSION_4_0: &str = "4.0";
pub const VCARD_VERSION_LATEST: &str = VCARD_VERSION_4_0;

pub const BEGIN_VCARD: &str = "BEGIN:VCARD";
pub const END_VCARD: &str = "END:VCARD";
pub const VERSION_PROPERTY: &str = "VERSION";
