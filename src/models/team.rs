//! Team models.

use serde::{Deserialize, Serialize};

use super::common::LightUser;

/// A team, from `/api/team/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team ID (URL slug)
    pub id: String,
    /// Display name
    pub name: String,
    /// Team description (markdown)
    #[serde(default)]
    pub description: Option<String>,
    /// Whether anyone can join without approval
    #[serde(default)]
    pub open: Option<bool>,
    /// Team leader
    #[serde(default)]
    pub leader: Option<LightUser>,
    /// All team leaders
    #[serde(default)]
    pub leaders: Vec<LightUser>,
    /// Member count
    #[serde(default)]
    pub nb_members: Option<u32>,
}
