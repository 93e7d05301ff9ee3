//! Response header names recognised by the parser.

use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Header fields kept by the parser.
///
/// Names match case-sensitively and exactly; anything else is dropped.
/// `ContentType` is the literal (hyphen-less) name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr,
)]
pub enum KnownHeader {
    #[strum(serialize = "Date")]
    Date,
    #[strum(serialize = "ContentType")]
    ContentType,
    #[strum(serialize = "Content-Length")]
    ContentLength,
    #[strum(serialize = "Connection")]
    Connection,
    #[strum(serialize = "Set-Cookie")]
    SetCookie,
    #[strum(serialize = "cf-request-id")]
    CfRequestId,
    #[strum(serialize = "Expect-CT")]
    ExpectCt,
    #[strum(serialize = "Report-To")]
    ReportTo,
    #[strum(serialize = "NEL")]
    Nel,
    #[strum(serialize = "Server")]
    Server,
    #[strum(serialize = "CF-Ray")]
    CfRay,
}

impl KnownHeader {
    /// Looks up a header by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// The wire name of this header.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
