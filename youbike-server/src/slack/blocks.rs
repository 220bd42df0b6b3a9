//! Block Kit message rendering.
//!
//! Two layouts are supported. `Summary` shows one section per station
//! followed by a single context block with the latest update time across
//! all stations. `Detailed` gives every station its own update-time
//! context block and a divider.

use serde::{Deserialize, Serialize};

use crate::resolver::{ResolvedStation, format_timestamp, latest_timestamp};

/// Shown when no station of interest could be resolved.
pub const NOT_FOUND_TEXT: &str = "抱歉，我現在找不到站點。";

/// Interim notice sent to `response_url` while stations are fetched.
pub const SEARCHING_TEXT: &str = "正在查詢 YouBike 站點資訊，請稍候…";

/// Notification fallback for block messages.
const FALLBACK_TEXT: &str = "YouBike 站點資訊";

const IMAGE_ALT_TEXT: &str = "YouBike station";

/// Shown in place of a count the upstream sent as non-numeric text.
const UNKNOWN_COUNT: &str = "N/A";

/// Who sees the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Ephemeral,
    InChannel,
}

/// A slash-command response or `response_url` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlackMessage {
    pub response_type: ResponseType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
}

impl SlackMessage {
    /// A plain ephemeral text message.
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            text: Some(text.into()),
            blocks: Vec::new(),
        }
    }

    /// A block message visible to the whole channel.
    pub fn in_channel(blocks: Vec<Block>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            text: Some(FALLBACK_TEXT.to_string()),
            blocks,
        }
    }

    pub fn not_found() -> Self {
        Self::ephemeral(NOT_FOUND_TEXT)
    }

    pub fn searching() -> Self {
        Self::ephemeral(SEARCHING_TEXT)
    }
}

/// One Block Kit block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<ImageElement>,
    },
    Context {
        elements: Vec<TextObject>,
    },
    Divider,
}

/// Block Kit text object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        TextObject::Mrkdwn { text: text.into() }
    }
}

/// Image accessory element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "image")]
pub struct ImageElement {
    pub image_url: String,
    pub alt_text: String,
}

/// Message layout (`?layout=`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockLayout {
    #[default]
    Summary,
    Detailed,
}

/// Render resolved stations as a Slack message.
///
/// An empty station list renders the not-found message, never an empty
/// block list.
pub fn render_stations(
    stations: &[ResolvedStation],
    layout: BlockLayout,
    image_url: Option<&str>,
) -> SlackMessage {
    let Some(latest) = latest_timestamp(stations) else {
        return SlackMessage::not_found();
    };

    let blocks = match layout {
        BlockLayout::Summary => stations
            .iter()
            .map(|s| station_section(s, image_url))
            .chain(std::iter::once(update_time_context(latest)))
            .collect(),
        BlockLayout::Detailed => stations
            .iter()
            .flat_map(|s| {
                [
                    station_section(s, image_url),
                    update_time_context(&s.last_updated),
                    Block::Divider,
                ]
            })
            .collect(),
    };

    SlackMessage::in_channel(blocks)
}

fn station_section(station: &ResolvedStation, image_url: Option<&str>) -> Block {
    let text = format!(
        "*:round_pushpin: {}*\n:bicycle: *可借車輛:* {}\n:parking: *可停空位:* {}",
        station.name,
        count_text(station.bikes_available),
        count_text(station.parking_available),
    );

    Block::Section {
        text: TextObject::mrkdwn(text),
        accessory: image_url.map(|url| ImageElement {
            image_url: url.to_string(),
            alt_text: IMAGE_ALT_TEXT.to_string(),
        }),
    }
}

fn update_time_context(raw: &str) -> Block {
    Block::Context {
        elements: vec![TextObject::mrkdwn(format!(
            "更新時間：{}",
            format_timestamp(raw)
        ))],
    }
}

fn count_text(count: Option<u32>) -> String {
    count.map_or_else(|| UNKNOWN_COUNT.to_string(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn station(name: &str, bikes: Option<u32>, parking: Option<u32>, updated: &str) -> ResolvedStation {
        ResolvedStation {
            id: name.to_string(),
            name: name.to_string(),
            bikes_available: bikes,
            parking_available: parking,
            last_updated: updated.to_string(),
        }
    }

    #[test]
    fn empty_renders_not_found() {
        let message = render_stations(&[], BlockLayout::Summary, None);
        assert_eq!(message, SlackMessage::not_found());

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({"response_type": "ephemeral", "text": NOT_FOUND_TEXT})
        );
    }

    #[test]
    fn summary_has_single_latest_timestamp() {
        let stations = vec![
            station("泰博科技", Some(6), Some(14), "20240115093000"),
            station("捷運新北產業園區", Some(17), Some(19), "20240115093045"),
        ];

        let message = render_stations(&stations, BlockLayout::Summary, None);

        assert_eq!(message.response_type, ResponseType::InChannel);
        assert_eq!(message.blocks.len(), 3);
        assert_eq!(
            message.blocks[2],
            Block::Context {
                elements: vec![TextObject::mrkdwn("更新時間：2024-01-15 09:30:45")]
            }
        );
    }

    #[test]
    fn detailed_has_per_station_time_and_divider() {
        let stations = vec![
            station("泰博科技", Some(6), Some(14), "20240115093000"),
            station("捷運新北產業園區", Some(17), Some(19), "20240115093045"),
        ];

        let message = render_stations(&stations, BlockLayout::Detailed, None);

        assert_eq!(message.blocks.len(), 6);
        assert_eq!(
            message.blocks[1],
            Block::Context {
                elements: vec![TextObject::mrkdwn("更新時間：2024-01-15 09:30:00")]
            }
        );
        assert_eq!(message.blocks[5], Block::Divider);
    }

    #[test]
    fn section_json_shape_with_accessory() {
        let stations = vec![station("泰博科技", Some(6), None, "20240115093000")];

        let message = render_stations(
            &stations,
            BlockLayout::Summary,
            Some("https://example.com/images/youbike.png"),
        );
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["response_type"], "in_channel");
        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": "*:round_pushpin: 泰博科技*\n:bicycle: *可借車輛:* 6\n:parking: *可停空位:* N/A"
                },
                "accessory": {
                    "type": "image",
                    "image_url": "https://example.com/images/youbike.png",
                    "alt_text": "YouBike station"
                }
            })
        );
        assert_eq!(value["blocks"][1]["type"], "context");
    }

    #[test]
    fn section_without_image_has_no_accessory() {
        let stations = vec![station("泰博科技", Some(1), Some(2), "20240115093000")];
        let message = render_stations(&stations, BlockLayout::Summary, None);
        let value = serde_json::to_value(&message).unwrap();
        assert!(value["blocks"][0].get("accessory").is_none());
    }

    #[test]
    fn divider_serializes_as_type_only() {
        assert_eq!(
            serde_json::to_value(Block::Divider).unwrap(),
            json!({"type": "divider"})
        );
    }

    #[test]
    fn message_carries_only_block_kit_keys() {
        let stations = vec![
            station("泰博科技", Some(6), Some(14), "20240115093000"),
            station("捷運新北產業園區", Some(17), Some(19), "20240115093045"),
        ];
        let message = render_stations(
            &stations,
            BlockLayout::Detailed,
            Some("https://example.com/images/youbike.png"),
        );
        let value = serde_json::to_value(&message).unwrap();

        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["blocks", "response_type", "text"]);

        let types: Vec<_> = value["blocks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["type"].as_str().unwrap())
            .collect();
        assert!(types.iter().all(|t| ["section", "context", "divider"].contains(t)));
    }
}
