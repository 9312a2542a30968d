use crate::fleet::domain::ConnectionStatus;

/// StatusNormalization policy mapping upstream status tokens to the canonical status
///
/// The classification is closed: only the known connected spellings map to
/// `Connected`, everything else (including unknown or empty tokens) is
/// `Disconnected`. Matching is exact.
pub struct StatusNormalization;

impl StatusNormalization {
    /// Upstream spellings that mean "connected" in telemetry rows
    pub const CONNECTED_TOKENS: [&'static str; 2] = ["Conectado", "on"];

    /// The only detail-lookup token that means "connected"
    pub const DETAIL_CONNECTED_TOKEN: &'static str = "on";

    pub fn normalize(token: &str) -> ConnectionStatus {
        if Self::CONNECTED_TOKENS.contains(&token) {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    /// Normalizes an optional token; a missing token is `Disconnected`
    pub fn normalize_opt(token: Option<&str>) -> ConnectionStatus {
        token.map(Self::normalize).unwrap_or_default()
    }

    /// Detail lookups answer with "on"/"off" only
    pub fn normalize_detail(token: Option<&str>) -> ConnectionStatus {
        if token == Some(Self::DETAIL_CONNECTED_TOKEN) {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }
}
