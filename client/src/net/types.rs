//! Wire types for the LithoDat REST API.
//!
//! DESIGN
//! ======
//! Account and auth payloads are typed; sample records stay loosely typed
//! (`serde_json::Value`) because the server shape varies by endpoint and the
//! UI only reads a handful of fields from them (see `util::sample_record`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A sample record exactly as returned by the server.
pub type SampleRecord = serde_json::Value;

/// `POST /api/authenticate` body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginVm {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

/// `POST /api/authenticate` response.
#[derive(Clone, Debug, Deserialize)]
pub struct JwtToken {
    pub id_token: String,
}

/// `POST /api/register` body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterVm {
    pub login: String,
    pub email: String,
    pub password: String,
    pub lang_key: String,
}

/// The signed-in account from `GET /api/account`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: Option<i64>,
    pub login: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub activated: Option<bool>,
    pub authorities: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub lang_key: Option<String>,
    pub created_by: Option<String>,
    pub created_date: Option<String>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<String>,
}

impl UserDto {
    /// `"First Last"`, or `None` when both parts are blank.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/// A LithoDat user as listed by `GET /api/management/litho-users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LithoUser {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LithoUser {
    /// Display label: name, then full name, then login, then email, then id.
    #[must_use]
    pub fn label(&self) -> String {
        non_blank(self.name.as_deref())
            .map(str::to_owned)
            .or_else(|| join_name(self.first_name.as_deref(), self.last_name.as_deref()))
            .or_else(|| non_blank(self.login.as_deref()).map(str::to_owned))
            .or_else(|| non_blank(self.email.as_deref()).map(str::to_owned))
            .unwrap_or_else(|| self.id.clone())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn join_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let joined = format!("{} {}", first.unwrap_or(""), last.unwrap_or(""));
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Ids arrive as numbers or strings depending on the endpoint.
fn id_as_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(de)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("unexpected id: {other}"))),
    }
}

/// Sample visibility scope sent as `allowedAccess`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AllowedAccess {
    #[default]
    Viewable,
    Writeable,
    Previewable,
}

impl AllowedAccess {
    pub const ALL: [Self; 3] = [Self::Viewable, Self::Writeable, Self::Previewable];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewable => "VIEWABLE",
            Self::Writeable => "WRITEABLE",
            Self::Previewable => "PREVIEWABLE",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == raw)
    }
}

/// Geographic filter rectangle in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

/// Filter criteria shared by the list, count and geo-feature endpoints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleCriteria {
    pub name_contains: Option<String>,
    pub allowed_access: Option<AllowedAccess>,
    pub created_by_id: Option<String>,
    pub litho_region: Option<String>,
    pub bbox: Option<BBox>,
}

impl SampleCriteria {
    /// Query parameters for these criteria; empty values are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(access) = self.allowed_access {
            pairs.push(("allowedAccess", access.as_str().to_owned()));
        }
        if let Some(name) = non_blank(self.name_contains.as_deref()) {
            pairs.push(("name.contains", name.to_owned()));
        }
        if let Some(id) = non_blank(self.created_by_id.as_deref()) {
            pairs.push(("createdById.equals", id.to_owned()));
        }
        if let Some(region) = non_blank(self.litho_region.as_deref()) {
            pairs.push(("lithoRegion.equals", region.to_owned()));
        }
        if let Some(b) = self.bbox {
            pairs.push(("locationCriteria.lat.greaterOrEqualThan", b.min_lat.to_string()));
            pairs.push(("locationCriteria.lat.lessOrEqualThan", b.max_lat.to_string()));
            pairs.push(("locationCriteria.lon.greaterOrEqualThan", b.min_lon.to_string()));
            pairs.push(("locationCriteria.lon.lessOrEqualThan", b.max_lon.to_string()));
        }
        pairs
    }
}

/// One page of samples plus the server's total count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SamplePage {
    pub rows: Vec<SampleRecord>,
    pub total_count: u64,
}
