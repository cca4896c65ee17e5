use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Tone;
use crate::id_gen::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Walk,
    Feeding,
    Vet,
    Grooming,
    Play,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Walk => "walk",
            ActivityKind::Feeding => "feeding",
            ActivityKind::Vet => "vet",
            ActivityKind::Grooming => "grooming",
            ActivityKind::Play => "play",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "walk" => Some(ActivityKind::Walk),
            "feeding" => Some(ActivityKind::Feeding),
            "vet" => Some(ActivityKind::Vet),
            "grooming" => Some(ActivityKind::Grooming),
            "play" => Some(ActivityKind::Play),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Walk => "Walk",
            ActivityKind::Feeding => "Feeding",
            ActivityKind::Vet => "Vet Visit",
            ActivityKind::Grooming => "Grooming",
            ActivityKind::Play => "Play Time",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ActivityKind::Walk => Tone::Green,
            ActivityKind::Feeding => Tone::Blue,
            ActivityKind::Vet => Tone::Red,
            ActivityKind::Grooming => Tone::Purple,
            ActivityKind::Play => Tone::Yellow,
        }
    }
}

/// Kind-specific payload. Each variant carries only the fields that apply
/// to it, so a feeding can never hold a walk duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActivityDetail {
    Walk { duration: String },
    Feeding { amount: String },
    Vet,
    Grooming,
    Play,
}

impl ActivityDetail {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityDetail::Walk { .. } => ActivityKind::Walk,
            ActivityDetail::Feeding { .. } => ActivityKind::Feeding,
            ActivityDetail::Vet => ActivityKind::Vet,
            ActivityDetail::Grooming => ActivityKind::Grooming,
            ActivityDetail::Play => ActivityKind::Play,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    /// Display name of the pet. Not a foreign key: renaming a pet does not
    /// rewrite its logged history.
    pub pet_name: String,
    pub title: String,
    pub detail: ActivityDetail,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub notes: String,
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        self.detail.kind()
    }
}

/// Payload for logging an activity. `pet_name`, `title` and a chosen kind
/// (a `detail` value) are required.
#[derive(Debug, Clone, Default)]
pub struct ActivityInput {
    pub pet_name: String,
    pub title: String,
    pub detail: Option<ActivityDetail>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub notes: String,
}
