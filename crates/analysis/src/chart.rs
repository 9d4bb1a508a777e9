use super::Entry;
use serde::Serialize;
use ttev_core::EV_CEILING;
use ttev_core::EV_LABEL_OFFSET;
use ttev_core::Probability;
use ttev_core::USAGE_HEADROOM;
use ttev_core::USAGE_LABEL_OFFSET;
use ttev_core::Utility;

/// One category of the EV/usage chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub ev: Utility,
    pub usage: Probability,
}

impl Bar {
    /// EV annotation above the bar.
    pub fn ev_text(&self) -> String {
        format!("{:.3}", self.ev)
    }
    /// Usage annotation above the line marker.
    pub fn usage_text(&self) -> String {
        format!("{:.1}%", self.usage * 100.0)
    }
    pub fn ev_anchor(&self) -> Utility {
        self.ev + EV_LABEL_OFFSET
    }
}

/// Plot-ready data for the dual-axis chart: EV bars on a fixed primary
/// axis, usage rate as a line on an independent secondary axis.
/// Bars keep the order of the entries they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub caption: String,
    pub bars: Vec<Bar>,
}

impl Chart {
    pub fn new(caption: String, entries: &[Entry]) -> Self {
        Self {
            caption,
            bars: entries
                .iter()
                .map(|e| Bar {
                    label: e.label.clone(),
                    ev: e.strategy.ev,
                    usage: e.strategy.usage,
                })
                .collect(),
        }
    }
    pub fn len(&self) -> usize {
        self.bars.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
    pub fn labels(&self) -> Vec<String> {
        self.bars.iter().map(|b| b.label.clone()).collect()
    }
    /// Fixed EV axis range.
    pub fn ev_range(&self) -> std::ops::Range<Utility> {
        0.0..EV_CEILING
    }
    pub fn usage_max(&self) -> Probability {
        self.bars.iter().map(|b| b.usage).fold(0.0, Probability::max)
    }
    /// Secondary axis range, with room for the annotations.
    pub fn usage_range(&self) -> std::ops::Range<Probability> {
        match self.usage_max() {
            max if max > 0.0 => 0.0..max * USAGE_HEADROOM,
            _ => 0.0..1.0,
        }
    }
    /// Height of a usage annotation above its point, proportional to the
    /// largest usage so labels clear the line at any scale.
    pub fn usage_offset(&self) -> Probability {
        self.usage_max() * USAGE_LABEL_OFFSET
    }
}
