use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A device registered on the server, as returned by `/Devices/Info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Device {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// User assigned label, overriding the name reported by the client.
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub app_version: Option<String>,
    #[serde(default)]
    pub last_user_id: Option<String>,
    #[serde(default)]
    pub last_user_name: Option<String>,
    #[serde(default)]
    pub date_last_activity: Option<DateTime<Utc>>,
}

impl Device {
    /// Value the custom name editor starts with.
    pub fn initial_custom_name(&self) -> String {
        self.custom_name
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_default()
    }

    /// The last user of the device, if the server knows both its id and its name.
    pub fn last_user(&self) -> Option<User> {
        match (&self.last_user_id, &self.last_user_name) {
            (Some(id), Some(name)) => Some(User {
                id: id.clone(),
                name: name.clone(),
            }),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.custom_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Unknown device")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Body of `POST /Devices/Options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceOptions {
    pub device_id: String,
    pub custom_name: String,
}
