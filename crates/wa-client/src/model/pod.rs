//! Pods, subpods, and the media they reference.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::model::ErrorDetail;

/// One titled section of an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pod {
    /// Pod title, used to identify the pod (e.g. `Result`, `Input interpretation`).
    #[serde(deserialize_with = "de::literal")]
    pub title: String,

    /// Name of the scanner that produced this pod.
    #[serde(deserialize_with = "de::literal")]
    pub scanner: String,

    /// Opaque pod identifier.
    #[serde(deserialize_with = "de::literal")]
    pub id: String,

    #[serde(deserialize_with = "de::number")]
    pub position: u32,

    /// Literal `"true"`/`"false"` as sent.
    #[serde(deserialize_with = "de::literal")]
    pub error: String,

    /// Code and message that accompany `error == "true"` on this pod.
    #[serde(rename = "errordetail", skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<ErrorDetail>,

    #[serde(rename = "numsubpods", deserialize_with = "de::number")]
    pub num_subpods: u32,

    /// Marks the pod closest to a simple answer.
    #[serde(deserialize_with = "de::boolean")]
    pub primary: bool,

    #[serde(rename = "subpod", alias = "subpods", deserialize_with = "de::one_or_many")]
    pub subpods: Vec<SubPod>,

    #[serde(deserialize_with = "de::group")]
    pub infos: Infos,

    #[serde(deserialize_with = "de::group")]
    pub states: States,

    #[serde(deserialize_with = "de::group")]
    pub sounds: Sounds,
}

/// Smallest unit of answer content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubPod {
    /// Usually empty; most subpods have no title.
    #[serde(deserialize_with = "de::literal")]
    pub title: String,

    #[serde(deserialize_with = "de::literal")]
    pub plaintext: String,

    #[serde(rename = "img", deserialize_with = "de::group")]
    pub image: Img,
}

/// An `<img>` reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Img {
    #[serde(deserialize_with = "de::literal")]
    pub src: String,
    #[serde(deserialize_with = "de::literal")]
    pub alt: String,
    #[serde(deserialize_with = "de::literal")]
    pub title: String,
    #[serde(deserialize_with = "de::number")]
    pub width: u32,
    #[serde(deserialize_with = "de::number")]
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "de::literal")]
    pub url: String,
    #[serde(deserialize_with = "de::literal")]
    pub text: String,
    #[serde(deserialize_with = "de::literal")]
    pub title: String,
}

/// Extra information attached to a pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infos {
    #[serde(deserialize_with = "de::number")]
    pub count: u32,
    #[serde(deserialize_with = "de::one_or_many")]
    pub info: Vec<Info>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "de::literal")]
    pub text: String,
    #[serde(deserialize_with = "de::one_or_many")]
    pub img: Vec<Img>,
    #[serde(deserialize_with = "de::one_or_many")]
    pub link: Vec<Link>,
}

/// Buttons that recompute a pod with a modified input (e.g. "More digits").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct States {
    #[serde(deserialize_with = "de::number")]
    pub count: u32,
    #[serde(deserialize_with = "de::one_or_many")]
    pub state: Vec<State>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    #[serde(deserialize_with = "de::literal")]
    pub name: String,
    #[serde(deserialize_with = "de::literal")]
    pub input: String,
}

/// Sounds attached to a pod, e.g. for a musical note query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sounds {
    #[serde(deserialize_with = "de::number")]
    pub count: u32,
    #[serde(deserialize_with = "de::one_or_many")]
    pub sound: Vec<Sound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sound {
    #[serde(deserialize_with = "de::literal")]
    pub url: String,
    #[serde(rename = "type", deserialize_with = "de::literal")]
    pub kind: String,
}

impl Pod {
    /// Plaintext of every subpod, skipping empty ones.
    pub fn plaintexts(&self) -> impl Iterator<Item = &str> {
        self.subpods
            .iter()
            .map(|subpod| subpod.plaintext.as_str())
            .filter(|text| !text.is_empty())
    }
}
