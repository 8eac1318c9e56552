// Chart slots on the dashboard page
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartSlot {
    #[serde(rename = "phishing-stacked-bar")]
    PhishingVictims,
    #[serde(rename = "threat_map")]
    ThreatMap,
    #[serde(rename = "threats-stacked-bar")]
    PhishingThreats,
}

impl ChartSlot {
    /// All slots in page layout order.
    pub const ALL: [ChartSlot; 3] = [
        ChartSlot::PhishingVictims,
        ChartSlot::ThreatMap,
        ChartSlot::PhishingThreats,
    ];

    /// DOM id of the chart region, also used in API paths.
    pub fn id(self) -> &'static str {
        match self {
            ChartSlot::PhishingVictims => "phishing-stacked-bar",
            ChartSlot::ThreatMap => "threat_map",
            ChartSlot::PhishingThreats => "threats-stacked-bar",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.id() == id)
    }
}
