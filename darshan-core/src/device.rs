/// Substring markers borrowed from the usual mobile user-agent sniff.
const MOBILE_MARKERS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Coarse capability bucket gating which immersive controls are offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classifies the host from a user-agent-like signal.  Pure function,
    /// evaluated once at shell mount.  Inconclusive input falls back to
    /// `Desktop`, the feature-complete control set.
    pub fn detect(user_agent: &str) -> Self {
        let user_agent = user_agent.to_ascii_lowercase();
        if MOBILE_MARKERS
            .iter()
            .any(|marker| user_agent.contains(marker))
        {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}
