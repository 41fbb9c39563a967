// src/config/consts.rs

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Record set
pub const DEFAULT_RECORDS_FILE: &str = "certificates.json";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "certificates";
pub const JSON_INDENT: &[u8] = b"    ";

// Profile page markup. Each value is a space-separated class token list.
pub const SEL_CERTIFICATIONS: &str =
    "fd408067 _09f86c18 _196bac93 _3340f6ca d289137b _3e9e561e _4762b3a6 _758611e7";
pub const SEL_TITLE: &str =
    "_582b5678 ad128d9a _7101f607 _51d0f1db _0219a747 _1174534e _4b10c5d5 d256ff26 _32b59971";
pub const SEL_EXPEDITION_DATE: &str =
    "_582b5678 d16d2c9f _7101f607 _51d0f1db _5bee054a _8d0af98d _4b10c5d5 _345919ad _32b59971";
// Same tokens as the date on purpose: the credential id is the second match.
pub const SEL_CERTIFICATION_ID: &str = SEL_EXPEDITION_DATE;
pub const SEL_ENTERPRISE: &str =
    "_582b5678 d16d2c9f _7101f607 _51d0f1db _5bee054a _8d0af98d _4b10c5d5 d256ff26 _32b59971";

// Entry field parsing
pub const EXPIRY_SEPARATOR: &str = " · ";
pub const LINK_MARKER: &str = "url=";
pub const LINK_ANCHOR_INDEX: usize = 1;
pub const NO_LINK_SENTINEL: &str = "undefined";
